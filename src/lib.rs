#![doc = include_str!("../README.md")]
#![no_std]
#![cfg_attr(feature = "allocator_api", feature(allocator_api))]

extern crate alloc;

use crate::arena::Arena;
use crate::prelude::*;

////////////////////////////////////////////////////////////////////////////////
//                                                                            //
// SUBMODULES                                                                 //
//                                                                            //
////////////////////////////////////////////////////////////////////////////////

mod arena;
mod node;
mod prelude;
mod value;

pub use node::Node;
pub use node::NodeRef;
pub use value::Value;

////////////////////////////////////////////////////////////////////////////////
//                                                                            //
// PUBLIC TYPE AND TRAIT DEFINITIONS                                          //
//                                                                            //
////////////////////////////////////////////////////////////////////////////////

/// A singly linked list of [`Node`]s.
///
/// The list owns every node reachable from its head and keeps them in an
/// arena backed by the allocator `A`. Nodes are addressed with [`NodeRef`]
/// handles returned by [`insert_front`](Self::insert_front) and the lookup
/// methods.

pub struct List<A: Allocator = Global> {
  id: u32,
  head: Option<NodeRef>,
  size: usize,
  nodes: Arena<Node, A>,
}

/// The ways a list operation can fail.
///
/// Absence of a value is not an error: the search operations report it in
/// their return value instead.

#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum Error {
  /// The handle was issued by a different list.
  #[error("node {0} belongs to a different list")]
  ForeignNode(NodeRef),
  /// The handle's node has been removed from the list.
  #[error("node {0} is no longer in the list")]
  StaleNode(NodeRef),
  /// The node is the head of the list, so nothing links to it.
  #[error("node {0} is the head of the list and has no predecessor")]
  NoPredecessor(NodeRef),
  /// The allocator failed to provide memory for a new node.
  #[error("failed to allocate memory for a node")]
  AllocFailed,
}

////////////////////////////////////////////////////////////////////////////////
//                                                                            //
// PRIVATE TYPE AND TRAIT DEFINITIONS                                         //
//                                                                            //
////////////////////////////////////////////////////////////////////////////////

// A place that holds a link: the list's head, or the `next` field of a node.

#[derive(Clone, Copy)]
enum Link {
  Head,
  Next(NodeRef),
}

struct Walk<'a, A: Allocator> {
  nodes: &'a Arena<Node, A>,
  link: Option<NodeRef>,
}

enum Failure {
  ParentAllocatorFailed(Layout),
  TooLarge,
}

enum Panicked { }

trait Fail: Sized {
  fn fail<T>(_: Failure) -> Result<T, Self>;
}

////////////////////////////////////////////////////////////////////////////////
//                                                                            //
// UTILITY FUNCTIONS                                                          //
//                                                                            //
////////////////////////////////////////////////////////////////////////////////

static NEXT_LIST_ID: AtomicU32 = AtomicU32::new(0);

#[inline(always)]
fn next_list_id() -> u32 {
  NEXT_LIST_ID.fetch_add(1, Ordering::Relaxed)
}

#[inline(always)]
fn unwrap<T>(x: Result<T, Panicked>) -> T {
  match x { Ok(x) => x, Err(e) => match e { } }
}

#[inline(never)]
#[cold]
fn rejected(e: Error) -> Error {
  debug!(error = %e, "rejected node handle");
  e
}

////////////////////////////////////////////////////////////////////////////////
//                                                                            //
// Fail                                                                       //
//                                                                            //
////////////////////////////////////////////////////////////////////////////////

impl Fail for Panicked {
  #[inline(never)]
  #[cold]
  fn fail<T>(e: Failure) -> Result<T, Self> {
    match e {
      Failure::ParentAllocatorFailed(layout) =>
        alloc::alloc::handle_alloc_error(layout),
      Failure::TooLarge =>
        // The node store would need more than `isize::MAX` bytes.
        panic!("chainlist: node store capacity overflow!"),
    }
  }
}

impl Fail for Error {
  #[inline(always)]
  fn fail<T>(_: Failure) -> Result<T, Self> {
    Err(Error::AllocFailed)
  }
}

////////////////////////////////////////////////////////////////////////////////
//                                                                            //
// Error                                                                      //
//                                                                            //
////////////////////////////////////////////////////////////////////////////////

impl Error {
  /// Whether the error was caused by a node handle that does not name a
  /// suitable node of the list, as opposed to an allocation failure.

  pub fn is_invalid_argument(&self) -> bool {
    ! matches!(self, Error::AllocFailed)
  }
}

////////////////////////////////////////////////////////////////////////////////
//                                                                            //
// Walk                                                                       //
//                                                                            //
////////////////////////////////////////////////////////////////////////////////

impl<'a, A: Allocator> Iterator for Walk<'a, A> {
  type Item = (NodeRef, &'a Node);

  #[inline(always)]
  fn next(&mut self) -> Option<Self::Item> {
    let r = self.link.take()?;
    let node = self.nodes.get(r.key)?;
    self.link = node.next();
    Some((r, node))
  }
}

////////////////////////////////////////////////////////////////////////////////
//                                                                            //
// List                                                                       //
//                                                                            //
////////////////////////////////////////////////////////////////////////////////

impl List<Global> {
  /// Creates an empty list backed by the global allocator.

  pub fn new() -> Self {
    Self::new_in(Global)
  }

  /// Creates an empty list with room for `capacity` nodes, backed by the
  /// global allocator.
  ///
  /// # Panics
  ///
  /// Panics on failure to allocate memory.

  pub fn with_capacity(capacity: usize) -> Self {
    Self::with_capacity_in(capacity, Global)
  }

  /// Creates an empty list with room for `capacity` nodes, backed by the
  /// global allocator.
  ///
  /// # Errors
  ///
  /// An error is returned on failure to allocate memory.

  pub fn try_with_capacity(capacity: usize) -> Result<Self, Error> {
    Self::try_with_capacity_in(capacity, Global)
  }

  /// Creates a list holding `values` in head-to-tail order.
  ///
  /// # Panics
  ///
  /// Panics on failure to allocate memory.

  pub fn from_slice(values: &[i32]) -> Self {
    let mut list = Self::with_capacity(values.len());
    for &value in values.iter().rev() {
      let _ = list.insert_front(value);
    }
    list
  }
}

impl<A: Allocator> List<A> {
  /// Creates an empty list whose nodes are allocated with `allocator`.

  pub fn new_in(allocator: A) -> Self {
    Self {
      id: next_list_id(),
      head: None,
      size: 0,
      nodes: Arena::new_in(allocator),
    }
  }

  /// Creates an empty list with room for `capacity` nodes allocated with
  /// `allocator`.
  ///
  /// # Panics
  ///
  /// Panics on failure to allocate memory.

  pub fn with_capacity_in(capacity: usize, allocator: A) -> Self {
    unwrap(Self::with_capacity_in_impl(capacity, allocator))
  }

  /// Creates an empty list with room for `capacity` nodes allocated with
  /// `allocator`.
  ///
  /// # Errors
  ///
  /// An error is returned on failure to allocate memory.

  pub fn try_with_capacity_in(capacity: usize, allocator: A) -> Result<Self, Error> {
    Self::with_capacity_in_impl(capacity, allocator)
  }

  fn with_capacity_in_impl<E: Fail>(capacity: usize, allocator: A) -> Result<Self, E> {
    Ok(Self {
      id: next_list_id(),
      head: None,
      size: 0,
      nodes: Arena::with_capacity_in::<E>(capacity, allocator)?,
    })
  }

  /// The number of nodes in the list.

  #[inline(always)]
  pub fn size(&self) -> usize {
    self.size
  }

  /// Whether the list has no nodes.

  #[inline(always)]
  pub fn is_empty(&self) -> bool {
    self.size == 0
  }

  /// The first node, or `None` if the list is empty.

  #[inline(always)]
  pub fn head(&self) -> Option<NodeRef> {
    self.head
  }

  /// The last node, or `None` if the list is empty.

  pub fn last(&self) -> Option<NodeRef> {
    self.walk().last().map(|(r, _)| r)
  }

  /// The number of nodes the list can hold without reallocating.

  pub fn capacity(&self) -> usize {
    self.nodes.capacity()
  }

  /// A reference to the allocator backing the node store.

  pub fn allocator(&self) -> &A {
    self.nodes.allocator()
  }

  /// The node named by `r`, or `None` if `r` does not name a node of this
  /// list.

  pub fn node(&self, r: NodeRef) -> Option<&Node> {
    if r.list != self.id { return None; }
    self.nodes.get(r.key)
  }

  /// The node named by `r`, mutably, or `None` if `r` does not name a node
  /// of this list.

  pub fn node_mut(&mut self, r: NodeRef) -> Option<&mut Node> {
    if r.list != self.id { return None; }
    self.nodes.get_mut(r.key)
  }

  /// Whether `r` names a node of this list.

  pub fn contains(&self, r: NodeRef) -> bool {
    self.node(r).is_some()
  }

  /// Inserts a node holding `value` at the front of the list and returns a
  /// handle to it.
  ///
  /// # Panics
  ///
  /// Panics on failure to allocate memory.

  pub fn insert_front(&mut self, value: i32) -> NodeRef {
    unwrap(self.insert_front_impl(value))
  }

  /// Inserts a node holding `value` at the front of the list and returns a
  /// handle to it.
  ///
  /// # Errors
  ///
  /// An error is returned on failure to allocate memory, in which case the
  /// list is unchanged.

  pub fn try_insert_front(&mut self, value: i32) -> Result<NodeRef, Error> {
    self.insert_front_impl(value)
  }

  #[inline(always)]
  fn insert_front_impl<E: Fail>(&mut self, value: i32) -> Result<NodeRef, E> {
    let key = self.nodes.insert::<E>(Node::new(Value::Int(value), self.head))?;
    let r = NodeRef::new(self.id, key);
    self.head = Some(r);
    self.size += 1;
    Ok(r)
  }

  /// Sets the value of the first node equal to `target` to `value`.
  ///
  /// Returns whether a node was changed.

  pub fn replace_first<T, V>(&mut self, target: T, value: V) -> bool
  where
    T: Into<Value>,
    V: Into<Value>,
  {
    let target = target.into();

    let Some((r, _)) = self.walk().find(|(_, node)| *node.value() == target) else {
      return false;
    };

    match self.nodes.get_mut(r.key) {
      Some(node) => { node.set_value(value); true }
      None => false,
    }
  }

  /// Sets the value of every node equal to `target` to `value`.
  ///
  /// Returns the number of nodes changed.

  pub fn replace_all<T, V>(&mut self, target: T, value: V) -> usize
  where
    T: Into<Value>,
    V: Into<Value>,
  {
    let target = target.into();
    let value = value.into();
    let mut count = 0;
    let mut link = self.head;

    while let Some(r) = link {
      let Some(node) = self.nodes.get_mut(r.key) else { break; };
      if *node.value() == target {
        node.set_value(value.clone());
        count += 1;
      }
      link = node.next();
    }

    count
  }

  /// Removes the first node equal to `target`.
  ///
  /// Returns whether a node was removed.

  pub fn remove_first<T: Into<Value>>(&mut self, target: T) -> bool {
    let target = target.into();
    let mut prev = Link::Head;
    let mut link = self.head;

    while let Some(r) = link {
      let Some(node) = self.nodes.get(r.key) else { break; };
      let next = node.next();

      if *node.value() == target {
        self.set_link(prev, next);
        let _ = self.nodes.remove(r.key);
        self.size -= 1;
        return true;
      }

      prev = Link::Next(r);
      link = next;
    }

    false
  }

  /// Removes every node equal to `target`.
  ///
  /// Returns the number of nodes removed.

  pub fn remove_all<T: Into<Value>>(&mut self, target: T) -> usize {
    // Each surviving node is linked to the next survivor, in list order, as
    // soon as that survivor is found. This is the same relinking a tail-first
    // rebuild performs, done front to back in constant space.

    let target = target.into();
    let mut prev = Link::Head;
    let mut link = self.head;
    let mut removed = 0;

    while let Some(r) = link {
      let Some(node) = self.nodes.get(r.key) else { break; };
      let next = node.next();

      if *node.value() == target {
        self.set_link(prev, next);
        let _ = self.nodes.remove(r.key);
        removed += 1;
      } else {
        prev = Link::Next(r);
      }

      link = next;
    }

    self.size -= removed;
    trace!(removed, size = self.size, "removed matching nodes");
    removed
  }

  /// The node before the last one, or `None` if the list has fewer than two
  /// nodes.

  pub fn second_to_last(&self) -> Option<NodeRef> {
    let mut walk = self.walk();
    let (mut a, _) = walk.next()?;
    let (mut b, _) = walk.next()?;

    for (r, _) in walk {
      a = b;
      b = r;
    }

    Some(a)
  }

  /// Reverses the order of the nodes in place.

  pub fn reverse(&mut self) {
    let mut prev = None;
    let mut link = self.head;

    while let Some(r) = link {
      let Some(node) = self.nodes.get_mut(r.key) else { break; };
      link = node.next();
      node.set_next(prev);
      prev = Some(r);
    }

    self.head = prev;
    trace!(size = self.size, "reversed list");
  }

  /// The node whose successor is `r`.
  ///
  /// # Errors
  ///
  /// An error is returned if `r` is not a node of this list, or if it is the
  /// head.

  pub fn predecessor_of(&self, r: NodeRef) -> Result<NodeRef, Error> {
    self.check(r)?;

    match self.link_to(r)? {
      Link::Next(p) => Ok(p),
      Link::Head => Err(rejected(Error::NoPredecessor(r))),
    }
  }

  /// Swaps the positions of the nodes `r1` and `r2`. Values stay with their
  /// nodes, so handles keep naming the same values. Swapping a node with
  /// itself does nothing.
  ///
  /// # Errors
  ///
  /// An error is returned, and the list left unchanged, if either handle is
  /// not a node of this list.

  pub fn exchange(&mut self, r1: NodeRef, r2: NodeRef) -> Result<(), Error> {
    self.check(r1)?;
    self.check(r2)?;

    if r1 == r2 { return Ok(()); }

    let l1 = self.link_to(r1)?;
    let l2 = self.link_to(r2)?;

    // When the nodes are adjacent one of these briefly links a node to
    // itself; the swap of successors below undoes it.

    self.set_link(l1, Some(r2));
    self.set_link(l2, Some(r1));

    let n1 = self.next_of(r1);
    let n2 = self.next_of(r2);

    self.set_link(Link::Next(r1), n2);
    self.set_link(Link::Next(r2), n1);

    trace!(%r1, %r2, "exchanged nodes");
    Ok(())
  }

  /// Removes every node. Capacity is kept, and every handle issued so far
  /// becomes stale.

  pub fn clear(&mut self) {
    self.nodes.clear();
    self.head = None;
    self.size = 0;
  }

  /// Checks that the nodes reachable from the head are exactly the nodes the
  /// list owns, that there are `size` of them, and that the chain ends.

  pub fn is_well_formed(&self) -> bool {
    let mut n = 0;
    let mut link = self.head;

    while let Some(r) = link {
      if n == self.size || r.list != self.id { return false; }
      let Some(node) = self.nodes.get(r.key) else { return false; };
      n += 1;
      link = node.next();
    }

    n == self.size && self.nodes.len() == self.size
  }

  #[inline(always)]
  fn walk(&self) -> Walk<'_, A> {
    Walk { nodes: &self.nodes, link: self.head }
  }

  fn check(&self, r: NodeRef) -> Result<(), Error> {
    if r.list != self.id {
      return Err(rejected(Error::ForeignNode(r)));
    }

    if ! self.nodes.contains(r.key) {
      return Err(rejected(Error::StaleNode(r)));
    }

    Ok(())
  }

  // The link that points at `r`. One traversal at most.

  fn link_to(&self, r: NodeRef) -> Result<Link, Error> {
    if self.head == Some(r) { return Ok(Link::Head); }

    match self.walk().find(|(_, node)| node.next() == Some(r)) {
      Some((p, _)) => Ok(Link::Next(p)),
      None => Err(rejected(Error::StaleNode(r))),
    }
  }

  #[inline(always)]
  fn next_of(&self, r: NodeRef) -> Option<NodeRef> {
    self.nodes.get(r.key).and_then(Node::next)
  }

  #[inline(always)]
  fn set_link(&mut self, link: Link, target: Option<NodeRef>) {
    match link {
      Link::Head =>
        self.head = target,
      Link::Next(r) =>
        if let Some(node) = self.nodes.get_mut(r.key) {
          node.set_next(target)
        },
    }
  }
}

impl<A: Allocator + Default> Default for List<A> {
  fn default() -> Self {
    Self::new_in(A::default())
  }
}

impl<A: Allocator> fmt::Display for List<A> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str("List(")?;
    for (i, (_, node)) in self.walk().enumerate() {
      if i != 0 { f.write_str(", ")?; }
      write!(f, "{}", node.value())?;
    }
    f.write_str(")")
  }
}

impl<A: Allocator> fmt::Debug for List<A> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str("List ")?;
    f.debug_list().entries(self.walk().map(|(_, node)| node.value())).finish()
  }
}
