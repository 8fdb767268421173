use super::*;

use proptest::prelude::*;
use proptest::sample::Index;
use std::collections::VecDeque;

fn validate_list<T, const K: usize>(list: &UnrolledList<T, K>) {
    if let Err(report) = list.check_invariants_detailed() {
        panic!("invariants violated: {report}");
    }
    for slice in list.buckets() {
        assert!(
            (1..=K).contains(&slice.len()),
            "chained bucket length {} outside 1..={K}",
            slice.len()
        );
    }
}

#[derive(Clone, Debug)]
enum Op {
    PushBack(u32),
    PushFront(u32),
    PopBack,
    PopFront,
    Insert(Index, u32),
    InsertN(Index, u8, u32),
    Erase(Index),
    EraseRange(Index, Index),
    Assign(Vec<u32>),
    Clear,
}

fn ops_strategy() -> impl Strategy<Value = Vec<Op>> {
    let op = prop_oneof![
        20 => any::<u32>().prop_map(Op::PushBack),
        20 => any::<u32>().prop_map(Op::PushFront),
        10 => Just(Op::PopBack),
        10 => Just(Op::PopFront),
        20 => (any::<Index>(), any::<u32>()).prop_map(|(i, v)| Op::Insert(i, v)),
        5 => (any::<Index>(), 0u8..12, any::<u32>()).prop_map(|(i, n, v)| Op::InsertN(i, n, v)),
        15 => any::<Index>().prop_map(Op::Erase),
        3 => (any::<Index>(), any::<Index>()).prop_map(|(a, b)| Op::EraseRange(a, b)),
        1 => prop::collection::vec(any::<u32>(), 0..40).prop_map(Op::Assign),
        1 => Just(Op::Clear),
    ];
    prop::collection::vec(op, 0..=400)
}

/// Apply `ops` to a list with bucket capacity `K` and to a `VecDeque`,
/// checking that they agree after every step.
fn run_model<const K: usize>(ops: Vec<Op>) -> Result<(), TestCaseError> {
    let mut list: UnrolledList<u32, K> = UnrolledList::new();
    let mut model: VecDeque<u32> = VecDeque::new();

    for op in ops {
        match op {
            Op::PushBack(v) => {
                list.push_back(v);
                model.push_back(v);
            }
            Op::PushFront(v) => {
                list.push_front(v);
                model.push_front(v);
            }
            Op::PopBack => prop_assert_eq!(list.pop_back(), model.pop_back()),
            Op::PopFront => prop_assert_eq!(list.pop_front(), model.pop_front()),
            Op::Insert(index, v) => {
                let at = index.index(model.len() + 1);
                let pos = list.insert(list.nth_position(at), v).unwrap();
                model.insert(at, v);
                prop_assert_eq!(list.get(pos), Some(&v));
            }
            Op::InsertN(index, n, v) => {
                let at = index.index(model.len() + 1);
                let first = list.insert_n(list.nth_position(at), n as usize, v).unwrap();
                for _ in 0..n {
                    model.insert(at, v);
                }
                prop_assert_eq!(first, list.nth_position(at));
            }
            Op::Erase(index) => {
                if model.is_empty() {
                    prop_assert!(list.erase(list.begin()).is_err());
                    continue;
                }
                let at = index.index(model.len());
                let next = list.erase(list.nth_position(at)).unwrap();
                model.remove(at);
                prop_assert_eq!(list.get(next), model.get(at));
            }
            Op::EraseRange(a, b) => {
                let a = a.index(model.len() + 1);
                let b = b.index(model.len() + 1);
                let (lo, hi) = (a.min(b), a.max(b));
                let next = list
                    .erase_range(list.nth_position(lo), list.nth_position(hi))
                    .unwrap();
                model.drain(lo..hi);
                prop_assert_eq!(list.get(next), model.get(lo));
            }
            Op::Assign(values) => {
                list.assign(values.iter().copied());
                validate_list(&list);
                let rebuilt: UnrolledList<u32, K> = values.iter().copied().collect();
                prop_assert_eq!(list.buckets(), rebuilt.buckets());
                model = values.into_iter().collect();
            }
            Op::Clear => {
                list.clear();
                model.clear();
            }
        }

        prop_assert_eq!(list.len(), model.len());
        prop_assert_eq!(list.front(), model.front());
        prop_assert_eq!(list.back(), model.back());
    }

    validate_list(&list);
    prop_assert!(list.iter().eq(model.iter()));
    prop_assert!(list.iter().rev().eq(model.iter().rev()));
    Ok(())
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        max_shrink_iters: 10_000,
        .. ProptestConfig::default()
    })]

    #[test]
    fn prop_equivalence_capacity_2(ops in ops_strategy()) {
        run_model::<2>(ops)?;
    }

    #[test]
    fn prop_equivalence_capacity_3(ops in ops_strategy()) {
        run_model::<3>(ops)?;
    }

    #[test]
    fn prop_equivalence_default_capacity(ops in ops_strategy()) {
        run_model::<DEFAULT_NODE_CAPACITY>(ops)?;
    }

    #[test]
    fn prop_clone_equals_source(values in prop::collection::vec(any::<i64>(), 0..200)) {
        let list: UnrolledList<i64, 5> = values.iter().copied().collect();
        let copy = list.clone();
        validate_list(&copy);
        prop_assert_eq!(&copy, &list);
        prop_assert!(copy.iter().eq(values.iter()));
    }

    #[test]
    fn prop_iter_mut_and_into_iter_agree(values in prop::collection::vec(any::<u16>(), 0..200)) {
        let mut list: UnrolledList<u16, 4> = UnrolledList::new();
        for (i, v) in values.iter().enumerate() {
            if i % 2 == 0 {
                list.push_back(*v);
            } else {
                list.push_front(*v);
            }
        }
        let expected: Vec<u32> = list.iter().map(|v| u32::from(*v) + 1).collect();
        let bumped: UnrolledList<u32, 4> = list.into_iter().map(|v| u32::from(v) + 1).collect();
        prop_assert!(bumped.iter().eq(expected.iter()));
    }
}

#[test]
fn exhaustive_insert_positions_small_capacity() {
    // Every insertion point into every length up to 3 buckets.
    for len in 0..=6usize {
        for at in 0..=len {
            let mut list: UnrolledList<usize, 2> = (0..len).collect();
            let mut model: Vec<usize> = (0..len).collect();
            let pos = list.insert(list.nth_position(at), 100).unwrap();
            model.insert(at, 100);
            validate_list(&list);
            assert_eq!(list.get(pos), Some(&100));
            assert!(list.iter().eq(model.iter()), "len {len} at {at}");
        }
    }
}
