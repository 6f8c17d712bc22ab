use crate::prelude::*;

/// The payload of a [`Node`](crate::Node).
///
/// Nodes are created holding an [`Int`](Value::Int), but a payload can later
/// be replaced by any other variant. Comparison is by value, and values of
/// different variants never compare equal, so `Int(2) != Long(2)`.

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Value {
  /// A 32-bit integer.
  Int(i32),
  /// A 64-bit integer.
  Long(i64),
  /// A boolean.
  Bool(bool),
  /// A character.
  Char(char),
  /// An owned string.
  Text(String),
}

impl Value {
  /// The integer payload, if this is an [`Int`](Value::Int).

  pub fn as_int(&self) -> Option<i32> {
    match *self {
      Value::Int(x) => Some(x),
      _ => None,
    }
  }
}

impl From<i32> for Value {
  fn from(x: i32) -> Self {
    Value::Int(x)
  }
}

impl From<i64> for Value {
  fn from(x: i64) -> Self {
    Value::Long(x)
  }
}

impl From<bool> for Value {
  fn from(x: bool) -> Self {
    Value::Bool(x)
  }
}

impl From<char> for Value {
  fn from(x: char) -> Self {
    Value::Char(x)
  }
}

impl From<&str> for Value {
  fn from(x: &str) -> Self {
    Value::Text(String::from(x))
  }
}

impl From<String> for Value {
  fn from(x: String) -> Self {
    Value::Text(x)
  }
}

impl From<&Value> for Value {
  fn from(x: &Value) -> Self {
    x.clone()
  }
}

impl PartialEq<i32> for Value {
  fn eq(&self, other: &i32) -> bool {
    matches!(*self, Value::Int(x) if x == *other)
  }
}

impl PartialEq<i64> for Value {
  fn eq(&self, other: &i64) -> bool {
    matches!(*self, Value::Long(x) if x == *other)
  }
}

impl PartialEq<bool> for Value {
  fn eq(&self, other: &bool) -> bool {
    matches!(*self, Value::Bool(x) if x == *other)
  }
}

impl PartialEq<char> for Value {
  fn eq(&self, other: &char) -> bool {
    matches!(*self, Value::Char(x) if x == *other)
  }
}

impl PartialEq<str> for Value {
  fn eq(&self, other: &str) -> bool {
    matches!(self, Value::Text(x) if x == other)
  }
}

impl PartialEq<&str> for Value {
  fn eq(&self, other: &&str) -> bool {
    *self == **other
  }
}

impl fmt::Display for Value {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Value::Int(x) => fmt::Display::fmt(x, f),
      Value::Long(x) => fmt::Display::fmt(x, f),
      Value::Bool(x) => fmt::Display::fmt(x, f),
      Value::Char(x) => fmt::Display::fmt(x, f),
      Value::Text(x) => f.write_str(x),
    }
  }
}
