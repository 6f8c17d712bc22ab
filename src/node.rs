use crate::prelude::*;
use crate::arena::Key;
use crate::Value;

/// A cell of a [`List`](crate::List): a value and a link to the next cell.
///
/// Nodes are owned by the list that created them and are reached through
/// [`List::node`](crate::List::node) and
/// [`List::node_mut`](crate::List::node_mut).

pub struct Node {
  value: Value,
  next: Option<NodeRef>,
}

/// A handle to a node of a particular [`List`](crate::List).
///
/// Handles are cheap to copy and never dangle: a handle whose node has been
/// removed, or one presented to a list other than the one that issued it, is
/// rejected by the list.

#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeRef {
  pub(crate) list: u32,
  pub(crate) key: Key,
}

impl Node {
  #[inline(always)]
  pub(crate) fn new(value: Value, next: Option<NodeRef>) -> Self {
    Self { value, next, }
  }

  /// The current payload.

  #[inline(always)]
  pub fn value(&self) -> &Value {
    &self.value
  }

  /// Replaces the payload. Any value is accepted.

  #[inline(always)]
  pub fn set_value<V: Into<Value>>(&mut self, value: V) {
    self.value = value.into()
  }

  /// The successor of this node, or `None` if it is the last one.

  #[inline(always)]
  pub fn next(&self) -> Option<NodeRef> {
    self.next
  }

  // The caller owns the chain invariant: after a sequence of `set_next` calls
  // every live node must again be reachable from the head exactly once.

  #[inline(always)]
  pub(crate) fn set_next(&mut self, next: Option<NodeRef>) {
    self.next = next
  }
}

impl fmt::Display for Node {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "Node({})", self.value)
  }
}

impl fmt::Debug for Node {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("Node")
      .field("value", &self.value)
      .field("next", &self.next)
      .finish()
  }
}

impl NodeRef {
  #[inline(always)]
  pub(crate) fn new(list: u32, key: Key) -> Self {
    Self { list, key, }
  }
}

impl fmt::Display for NodeRef {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}.{}", self.key.index, self.key.generation)
  }
}

impl fmt::Debug for NodeRef {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_tuple("NodeRef")
      .field(&self.list)
      .field(&self.key.index)
      .field(&self.key.generation)
      .finish()
  }
}
