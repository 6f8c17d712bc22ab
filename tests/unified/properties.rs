use proptest::prelude::*;
use chainlist::List;
use crate::ints;
use crate::refs;

#[derive(Clone, Debug)]
enum Op {
  Insert(i32),
  RemoveFirst(i32),
  RemoveAll(i32),
  ReplaceFirst(i32, i32),
  ReplaceAll(i32, i32),
  Reverse,
  Exchange(usize, usize),
}

fn op() -> impl Strategy<Value = Op> {
  prop_oneof![
    3 => (0 .. 4).prop_map(Op::Insert),
    1 => (0 .. 4).prop_map(Op::RemoveFirst),
    1 => (0 .. 4).prop_map(Op::RemoveAll),
    1 => (0 .. 4, 0 .. 4).prop_map(|(x, y)| Op::ReplaceFirst(x, y)),
    1 => (0 .. 4, 0 .. 4).prop_map(|(x, y)| Op::ReplaceAll(x, y)),
    1 => Just(Op::Reverse),
    1 => (any::<usize>(), any::<usize>()).prop_map(|(i, j)| Op::Exchange(i, j)),
  ]
}

// Applies `op` to both the list and a vector holding the expected values.

fn apply(list: &mut List, model: &mut Vec<i32>, op: &Op) {
  match *op {
    Op::Insert(x) => {
      let _ = list.insert_front(x);
      model.insert(0, x);
    }
    Op::RemoveFirst(x) => {
      let found = model.iter().position(|&y| y == x);
      assert!(list.remove_first(x) == found.is_some());
      if let Some(i) = found { let _ = model.remove(i); }
    }
    Op::RemoveAll(x) => {
      let n = model.len();
      model.retain(|&y| y != x);
      assert!(list.remove_all(x) == n - model.len());
    }
    Op::ReplaceFirst(x, y) => {
      let found = model.iter().position(|&z| z == x);
      assert!(list.replace_first(x, y) == found.is_some());
      if let Some(i) = found { model[i] = y; }
    }
    Op::ReplaceAll(x, y) => {
      let mut n = 0;
      for z in model.iter_mut().filter(|z| **z == x) { *z = y; n += 1; }
      assert!(list.replace_all(x, y) == n);
    }
    Op::Reverse => {
      list.reverse();
      model.reverse();
    }
    Op::Exchange(i, j) => {
      if ! model.is_empty() {
        let (i, j) = (i % model.len(), j % model.len());
        let r = refs(list);
        list.exchange(r[i], r[j]).unwrap();
        model.swap(i, j);
      }
    }
  }
}

proptest! {
  #[test]
  fn operations_match_vector_model(ops in proptest::collection::vec(op(), 0 .. 64)) {
    let mut list = List::new();
    let mut model = Vec::new();

    for op in &ops {
      apply(&mut list, &mut model, op);
      prop_assert!(list.is_well_formed());
      prop_assert_eq!(list.size(), model.len());
      prop_assert_eq!(ints(&list), model.clone());
    }

    let r = refs(&list);
    let expected = if r.len() < 2 { None } else { Some(r[r.len() - 2]) };
    prop_assert_eq!(list.second_to_last(), expected);

    for w in r.windows(2) {
      prop_assert_eq!(list.predecessor_of(w[1]), Ok(w[0]));
    }
  }

  #[test]
  fn reverse_twice_is_identity(values in proptest::collection::vec(any::<i32>(), 0 .. 32)) {
    let mut list = List::from_slice(&values);
    let r = refs(&list);
    list.reverse();
    list.reverse();
    prop_assert_eq!(refs(&list), r);
    prop_assert_eq!(ints(&list), values);
  }

  #[test]
  fn remove_all_removes_every_match(
    values in proptest::collection::vec(0 .. 3, 0 .. 32),
    x in 0 .. 3,
  ) {
    let mut list = List::from_slice(&values);
    let count = values.iter().filter(|&&y| y == x).count();
    prop_assert_eq!(list.remove_all(x), count);
    prop_assert_eq!(list.size(), values.len() - count);
    prop_assert!(ints(&list).iter().all(|&y| y != x));
    prop_assert!(list.is_well_formed());
  }

  #[test]
  fn insert_then_remove_restores_list(
    values in proptest::collection::vec(0 .. 8, 0 .. 32),
    x in 8 .. 16,
  ) {
    let mut list = List::from_slice(&values);
    let _ = list.insert_front(x);
    prop_assert!(list.remove_first(x));
    prop_assert_eq!(list.size(), values.len());
    prop_assert_eq!(ints(&list), values);
  }

  #[test]
  fn exchange_twice_is_identity(
    values in proptest::collection::vec(any::<i32>(), 1 .. 16),
    i in any::<usize>(),
    j in any::<usize>(),
  ) {
    let mut list = List::from_slice(&values);
    let r = refs(&list);
    let (a, b) = (r[i % r.len()], r[j % r.len()]);
    list.exchange(a, b).unwrap();
    list.exchange(a, b).unwrap();
    prop_assert_eq!(refs(&list), r);
    prop_assert!(list.is_well_formed());
  }
}
