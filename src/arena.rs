use crate::prelude::*;
use crate::Fail;
use crate::Failure;

// A slot store addressed by `Key`. Vacated slots form an intrusive free list
// threaded through `State::Vacant` and are reused before the vector grows.
//
// INVARIANTS:
//
// - `live` is the number of `Occupied` entries.
// - `free` and the `Vacant` links visit every vacant entry exactly once.
// - A `Key` is live iff its entry is `Occupied` with the same generation.

pub(crate) struct Arena<T, A: Allocator = Global> {
  entries: Vec<Entry<T>, A>,
  free: Option<usize>,
  live: usize,
}

#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) struct Key {
  pub(crate) index: usize,
  pub(crate) generation: u32,
}

struct Entry<T> {
  generation: u32,
  state: State<T>,
}

enum State<T> {
  Occupied(T),
  Vacant(Option<usize>),
}

impl<T, A: Allocator> Arena<T, A> {
  pub(crate) fn new_in(allocator: A) -> Self {
    Self {
      entries: Vec::new_in(allocator),
      free: None,
      live: 0,
    }
  }

  pub(crate) fn with_capacity_in<E: Fail>(capacity: usize, allocator: A) -> Result<Self, E> {
    let mut arena = Self::new_in(allocator);
    arena.reserve::<E>(capacity)?;
    Ok(arena)
  }

  fn reserve<E: Fail>(&mut self, additional: usize) -> Result<(), E> {
    if self.entries.try_reserve(additional).is_ok() {
      return Ok(());
    }

    let Some(n) = self.entries.len().checked_add(additional) else {
      return E::fail(Failure::TooLarge);
    };

    match Layout::array::<Entry<T>>(n) {
      Ok(layout) => E::fail(Failure::ParentAllocatorFailed(layout)),
      Err(_) => E::fail(Failure::TooLarge),
    }
  }

  pub(crate) fn insert<E: Fail>(&mut self, value: T) -> Result<Key, E> {
    if let Some(index) = self.free {
      // The free list only ever holds indices of vacant entries.
      if let Some(entry) = self.entries.get_mut(index) {
        if let State::Vacant(next) = entry.state {
          self.free = next;
          self.live += 1;
          entry.state = State::Occupied(value);
          return Ok(Key { index, generation: entry.generation });
        }
      }
    }

    if self.entries.len() == self.entries.capacity() {
      self.reserve::<E>(1)?;
      trace!(capacity = self.entries.capacity(), "grew node store");
    }

    let index = self.entries.len();
    self.entries.push(Entry { generation: 0, state: State::Occupied(value) });
    self.live += 1;
    Ok(Key { index, generation: 0 })
  }

  pub(crate) fn remove(&mut self, key: Key) -> Option<T> {
    let entry = self.entries.get_mut(key.index)?;

    if entry.generation != key.generation || ! matches!(entry.state, State::Occupied(_)) {
      return None;
    }

    let State::Occupied(value) = mem::replace(&mut entry.state, State::Vacant(self.free)) else {
      return None;
    };

    entry.generation = entry.generation.wrapping_add(1);
    self.free = Some(key.index);
    self.live -= 1;
    Some(value)
  }

  pub(crate) fn get(&self, key: Key) -> Option<&T> {
    match self.entries.get(key.index) {
      Some(Entry { generation, state: State::Occupied(value) }) if *generation == key.generation =>
        Some(value),
      _ =>
        None,
    }
  }

  pub(crate) fn get_mut(&mut self, key: Key) -> Option<&mut T> {
    match self.entries.get_mut(key.index) {
      Some(Entry { generation, state: State::Occupied(value) }) if *generation == key.generation =>
        Some(value),
      _ =>
        None,
    }
  }

  pub(crate) fn contains(&self, key: Key) -> bool {
    self.get(key).is_some()
  }

  /// The number of occupied slots.

  pub(crate) fn len(&self) -> usize {
    self.live
  }

  pub(crate) fn capacity(&self) -> usize {
    self.entries.capacity()
  }

  pub(crate) fn allocator(&self) -> &A {
    self.entries.allocator()
  }

  /// Vacates every slot. Generations are bumped rather than reset, so no key
  /// issued before the call is live afterwards.

  pub(crate) fn clear(&mut self) {
    let mut free = None;

    for (index, entry) in self.entries.iter_mut().enumerate().rev() {
      if let State::Occupied(_) = entry.state {
        entry.generation = entry.generation.wrapping_add(1);
      }
      entry.state = State::Vacant(free);
      free = Some(index);
    }

    self.free = free;
    self.live = 0;
  }
}
