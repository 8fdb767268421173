use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::LinkedList;
use unrolled_list::UnrolledList;

fn assert_same_order<const K: usize>(unrolled: &UnrolledList<i32, K>, std_list: &LinkedList<i32>) {
    assert_eq!(unrolled.len(), std_list.len());
    let got: Vec<i32> = unrolled.iter().copied().collect();
    let expected: Vec<i32> = std_list.iter().copied().collect();
    assert_eq!(got, expected);
    assert!(unrolled.check_invariants());
}

/// Insert before the element `at` places from the front of a `LinkedList`.
fn linked_list_insert(list: &mut LinkedList<i32>, at: usize, value: i32) {
    let mut tail = list.split_off(at);
    list.push_back(value);
    list.append(&mut tail);
}

#[test]
fn test_push_back_matches_linked_list() {
    let mut std_list = LinkedList::new();
    let mut unrolled: UnrolledList<i32> = UnrolledList::new();

    for i in 0..1000 {
        std_list.push_back(i);
        unrolled.push_back(i);
    }

    assert_same_order(&unrolled, &std_list);
}

#[test]
fn test_push_front_matches_linked_list() {
    let mut std_list = LinkedList::new();
    let mut unrolled: UnrolledList<i32> = UnrolledList::new();

    for i in 0..1000 {
        std_list.push_front(i);
        unrolled.push_front(i);
    }

    assert_same_order(&unrolled, &std_list);
}

#[test]
fn test_mixed_pushes_match_linked_list() {
    let mut std_list = LinkedList::new();
    let mut unrolled: UnrolledList<i32> = UnrolledList::new();

    for i in 0..1000 {
        if i % 2 == 0 {
            std_list.push_front(i);
            unrolled.push_front(i);
        } else {
            std_list.push_back(i);
            unrolled.push_back(i);
        }
    }

    assert_same_order(&unrolled, &std_list);
}

#[test]
fn test_insert_and_push_mixed() {
    let mut std_list = LinkedList::new();
    let mut unrolled: UnrolledList<i32> = UnrolledList::new();

    for i in 0..1000 {
        match i % 3 {
            0 => {
                std_list.push_front(i);
                unrolled.push_front(i);
            }
            1 => {
                std_list.push_back(i);
                unrolled.push_back(i);
            }
            _ => {
                let middle = std_list.len() / 2;
                linked_list_insert(&mut std_list, middle, i);
                let pos = unrolled.nth_position(middle);
                unrolled.insert(pos, i).unwrap();
            }
        }
    }

    assert_same_order(&unrolled, &std_list);
}

#[test]
fn test_pop_front_and_back() {
    let mut std_list = LinkedList::new();
    let mut unrolled: UnrolledList<i32> = UnrolledList::new();

    for i in 0..1000 {
        std_list.push_back(i);
        unrolled.push_back(i);
    }

    for i in 0..500 {
        if i % 2 == 0 {
            assert_eq!(unrolled.pop_back(), std_list.pop_back());
        } else {
            assert_eq!(unrolled.pop_front(), std_list.pop_front());
        }
    }
    assert_same_order(&unrolled, &std_list);

    for _ in 0..500 {
        assert_eq!(unrolled.pop_back(), std_list.pop_back());
    }
    assert!(unrolled.is_empty());
    assert_eq!(unrolled.bucket_count(), 0);
}

#[test]
fn test_clear_and_len() {
    let mut unrolled: UnrolledList<i32> = (0..100).collect();
    assert_eq!(unrolled.len(), 100);

    unrolled.clear();
    assert_eq!(unrolled.len(), 0);
    assert!(unrolled.is_empty());
}

#[test]
fn test_front_and_back() {
    let mut unrolled: UnrolledList<i32> = UnrolledList::new();
    unrolled.push_back(10);
    unrolled.push_back(20);
    unrolled.push_back(30);

    assert_eq!(unrolled.front(), Some(&10));
    assert_eq!(unrolled.back(), Some(&30));
}

#[test]
fn test_reverse_iteration() {
    let unrolled: UnrolledList<i32> = (0..100).collect();
    let expected: Vec<i32> = (0..100).rev().collect();
    assert_eq!(unrolled.iter().rev().copied().collect::<Vec<_>>(), expected);
}

#[test]
fn test_copy_and_equality() {
    let list1: UnrolledList<i32> = (0..50).collect();
    let mut list2 = list1.clone();
    assert!(list1 == list2);

    list2.pop_back();
    assert!(list1 != list2);
}

#[test]
fn test_assign_from_literal_list() {
    let mut unrolled: UnrolledList<i32> = UnrolledList::new();

    unrolled.assign([10, 20, 30, 40]);
    assert_eq!(unrolled.len(), 4);
    assert_eq!(unrolled.iter().copied().collect::<Vec<_>>(), [10, 20, 30, 40]);

    unrolled.assign([1, 2]);
    assert_eq!(unrolled.len(), 2);
    assert_eq!(unrolled.iter().copied().collect::<Vec<_>>(), [1, 2]);
}

#[test]
fn test_assign_n_copies() {
    let mut unrolled: UnrolledList<String> = UnrolledList::new();

    unrolled.assign_n(3, "hello".to_string());
    assert_eq!(unrolled.len(), 3);
    assert!(unrolled.iter().all(|s| s == "hello"));

    unrolled.assign_n(0, "empty".to_string());
    assert!(unrolled.is_empty());
}

#[test]
fn test_assign_from_iterator() {
    let values = vec![1, 3, 5, 7];
    let mut unrolled: UnrolledList<i32> = UnrolledList::new();
    unrolled.assign(values.iter().copied());

    assert_eq!(unrolled.len(), values.len());
    assert!(unrolled.iter().eq(values.iter()));
}

fn random_operations<const K: usize>(seed: u64, steps: usize) {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut std_list = LinkedList::new();
    let mut unrolled: UnrolledList<i32, K> = UnrolledList::new();

    for step in 0..steps {
        let value = step as i32;
        match rng.gen_range(0..6) {
            0 => {
                std_list.push_back(value);
                unrolled.push_back(value);
            }
            1 => {
                std_list.push_front(value);
                unrolled.push_front(value);
            }
            2 => assert_eq!(unrolled.pop_back(), std_list.pop_back()),
            3 => assert_eq!(unrolled.pop_front(), std_list.pop_front()),
            4 => {
                let at = rng.gen_range(0..=std_list.len());
                linked_list_insert(&mut std_list, at, value);
                let pos = unrolled.nth_position(at);
                let inserted = unrolled.insert(pos, value).unwrap();
                assert_eq!(unrolled.get(inserted), Some(&value));
            }
            _ => {
                if std_list.is_empty() {
                    continue;
                }
                let at = rng.gen_range(0..std_list.len());
                let mut tail = std_list.split_off(at);
                let removed = tail.pop_front();
                std_list.append(&mut tail);
                let pos = unrolled.nth_position(at);
                assert_eq!(unrolled.remove(pos).ok(), removed);
            }
        }
    }

    assert_same_order(&unrolled, &std_list);
}

#[test]
fn test_random_operations_small_buckets() {
    for seed in 0..8 {
        random_operations::<2>(seed, 2000);
    }
}

#[test]
fn test_random_operations_default_buckets() {
    for seed in 0..4 {
        random_operations::<10>(seed, 5000);
    }
}

#[test]
fn test_random_operations_wide_buckets() {
    random_operations::<64>(42, 10_000);
}
