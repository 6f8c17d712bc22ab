use expect_test::expect;
use chainlist::Error;
use chainlist::List;
use crate::ints;
use crate::refs;

#[test]
fn test_exchange_middle() {
  let mut list = List::from_slice(&[1, 2, 3, 4, 5]);
  let r = refs(&list);
  list.exchange(r[1], r[3]).unwrap();
  expect!["List(1, 4, 3, 2, 5)"].assert_eq(&list.to_string());
  assert!(list.is_well_formed());
}

#[test]
fn test_exchange_with_head() {
  let mut list = List::from_slice(&[1, 2, 3, 4]);
  let r = refs(&list);
  list.exchange(r[0], r[2]).unwrap();
  expect!["List(3, 2, 1, 4)"].assert_eq(&list.to_string());
  assert!(list.head() == Some(r[2]));

  list.exchange(r[3], r[2]).unwrap();
  expect!["List(4, 2, 1, 3)"].assert_eq(&list.to_string());
  assert!(list.head() == Some(r[3]));
  assert!(list.is_well_formed());
}

#[test]
fn test_exchange_adjacent() {
  let mut list = List::from_slice(&[1, 2, 3, 4]);
  let r = refs(&list);

  list.exchange(r[1], r[2]).unwrap();
  expect!["List(1, 3, 2, 4)"].assert_eq(&list.to_string());
  assert!(list.is_well_formed());

  // Now `r[2]` precedes `r[1]`; pass them in list order and in reverse.

  list.exchange(r[1], r[2]).unwrap();
  expect!["List(1, 2, 3, 4)"].assert_eq(&list.to_string());
  list.exchange(r[2], r[3]).unwrap();
  expect!["List(1, 2, 4, 3)"].assert_eq(&list.to_string());
  assert!(list.last() == Some(r[2]));
  assert!(list.is_well_formed());
}

#[test]
fn test_exchange_adjacent_with_head() {
  let mut list = List::from_slice(&[1, 2]);
  let r = refs(&list);
  list.exchange(r[0], r[1]).unwrap();
  expect!["List(2, 1)"].assert_eq(&list.to_string());
  list.exchange(r[0], r[1]).unwrap();
  expect!["List(1, 2)"].assert_eq(&list.to_string());
  list.exchange(r[1], r[0]).unwrap();
  expect!["List(2, 1)"].assert_eq(&list.to_string());
  assert!(list.head() == Some(r[1]));
  assert!(list.is_well_formed());
}

#[test]
fn test_exchange_self_is_noop() {
  let mut list = List::from_slice(&[1, 2, 3]);
  for r in refs(&list) {
    list.exchange(r, r).unwrap();
  }
  expect!["List(1, 2, 3)"].assert_eq(&list.to_string());

  let mut list = List::from_slice(&[1]);
  let r = refs(&list);
  list.exchange(r[0], r[0]).unwrap();
  expect!["List(1)"].assert_eq(&list.to_string());
}

#[test]
fn test_exchange_every_pair() {
  const N: usize = 6;

  let values: Vec<i32> = (0 .. N as i32).collect();

  for i in 0 .. N {
    for j in 0 .. N {
      let mut list = List::from_slice(&values);
      let r = refs(&list);
      list.exchange(r[i], r[j]).unwrap();

      let mut expected = values.clone();
      expected.swap(i, j);
      assert!(ints(&list) == expected, "exchange({i}, {j})");
      assert!(list.size() == N);
      assert!(list.is_well_formed());

      list.exchange(r[i], r[j]).unwrap();
      assert!(ints(&list) == values, "exchange({i}, {j}) twice");
    }
  }
}

#[test]
fn test_exchange_rejects_bad_handles() {
  let mut list = List::from_slice(&[1, 2, 3]);
  let other = List::from_slice(&[1, 2, 3]);
  let r = refs(&list);
  let s = refs(&other);

  assert!(list.exchange(r[0], s[0]) == Err(Error::ForeignNode(s[0])));
  assert!(list.exchange(s[2], r[2]) == Err(Error::ForeignNode(s[2])));

  assert!(list.remove_first(3));
  assert!(list.exchange(r[0], r[2]) == Err(Error::StaleNode(r[2])));
  assert!(list.exchange(r[2], r[2]) == Err(Error::StaleNode(r[2])));

  expect!["List(1, 2)"].assert_eq(&list.to_string());
  assert!(list.is_well_formed());
}

#[test]
fn test_values_follow_their_nodes() {
  let mut list = List::from_slice(&[10, 20, 30]);
  let r = refs(&list);
  list.exchange(r[0], r[2]).unwrap();
  assert!(*list.node(r[0]).unwrap().value() == 10);
  assert!(*list.node(r[2]).unwrap().value() == 30);
  assert!(list.predecessor_of(r[0]) == Ok(r[1]));
  assert!(list.second_to_last() == Some(r[1]));
}
