use super::{Deque, DequeError, End, LinkedDeque};
use rand::{Rng, SeedableRng, rngs::StdRng};

fn contents<T: Clone>(deque: &LinkedDeque<T>) -> Vec<T> {
    deque.iter().cloned().collect()
}

#[test]
fn test_new_is_empty() {
    let deque: LinkedDeque<i32> = LinkedDeque::new();
    assert!(deque.is_empty());
    assert_eq!(deque.len(), 0);
    assert_eq!(deque.front(), None);
    assert_eq!(deque.back(), None);
    deque.assert_invariants();
}

#[test]
fn test_enqueue_back_then_front() {
    let mut deque = LinkedDeque::new();
    deque.enqueue_back(2);
    deque.enqueue_back(4);
    deque.assert_invariants();
    assert_eq!(contents(&deque), [2, 4]);

    deque.enqueue_front(1);
    deque.enqueue_front(0);
    deque.assert_invariants();
    assert_eq!(contents(&deque), [0, 1, 2, 4]);
    assert_eq!(deque.peek_front(), Ok(0));
    assert_eq!(deque.peek_back(), Ok(4));

    assert_eq!(deque.dequeue_front(), Ok(0));
    deque.assert_invariants();
    assert_eq!(contents(&deque), [1, 2, 4]);

    assert_eq!(deque.dequeue_back(), Ok(4));
    deque.assert_invariants();
    assert_eq!(contents(&deque), [1, 2]);

    assert_eq!(deque.peek_front(), Ok(1));
    assert_eq!(deque.peek_back(), Ok(2));
    assert_eq!(contents(&deque), [1, 2]);
    assert!(!deque.is_empty());

    deque.clear();
    deque.assert_invariants();
    assert!(deque.is_empty());
    assert_eq!(contents(&deque), [] as [i32; 0]);
}

#[test]
fn test_single_node_ring_links_to_itself() {
    let mut deque = LinkedDeque::new();
    deque.enqueue_front('x');
    let id = deque.front_id().unwrap();
    let node = deque.get_node(id).unwrap();
    assert_eq!(node.next(), id);
    assert_eq!(node.previous(), id);
    assert_eq!(deque.back_id(), Some(id));
    assert_eq!(node.item(), &'x');
}

#[test]
fn test_enqueue_back_keeps_anchor() {
    let mut deque = LinkedDeque::new();
    deque.enqueue_back(1);
    let front = deque.front_id();
    deque.enqueue_back(2);
    deque.enqueue_back(3);
    assert_eq!(deque.front_id(), front);
    assert_eq!(deque.back(), Some(&3));
}

#[test]
fn test_dequeue_back_keeps_anchor_until_empty() {
    let mut deque: LinkedDeque<_> = (1..=3).collect();
    let front = deque.front_id();
    assert_eq!(deque.dequeue_back(), Ok(3));
    assert_eq!(deque.dequeue_back(), Ok(2));
    assert_eq!(deque.front_id(), front);
    assert_eq!(deque.dequeue_back(), Ok(1));
    assert_eq!(deque.front_id(), None);
    deque.assert_invariants();
}

#[test]
fn test_empty_errors() {
    let mut deque: LinkedDeque<i32> = LinkedDeque::new();
    assert_eq!(deque.dequeue_front(), Err(DequeError::RemoveEmpty(End::Front)));
    assert_eq!(deque.dequeue_back(), Err(DequeError::RemoveEmpty(End::Back)));
    assert_eq!(deque.peek_front(), Err(DequeError::PeekEmpty(End::Front)));
    assert_eq!(deque.peek_back(), Err(DequeError::PeekEmpty(End::Back)));
    assert_eq!(
        DequeError::RemoveEmpty(End::Front).to_string(),
        "attempted to remove from the front of an empty deque"
    );
    assert_eq!(
        DequeError::PeekEmpty(End::Back).to_string(),
        "attempted to peek at the back of an empty deque"
    );
    deque.assert_invariants();
}

#[test]
fn test_push_pop_same_end_leaves_no_residual_node() {
    let mut deque = LinkedDeque::new();
    deque.enqueue_back(String::from("a"));
    assert_eq!(deque.dequeue_back().as_deref(), Ok("a"));
    deque.assert_invariants();
    assert!(deque.is_empty());

    deque.enqueue_front(String::from("b"));
    assert_eq!(deque.dequeue_front().as_deref(), Ok("b"));
    deque.assert_invariants();
    assert!(deque.is_empty());
}

#[test]
fn test_clone_is_independent() {
    let mut original: LinkedDeque<_> = [1, 2, 3].into_iter().collect();
    let mut copy = original.clone();
    assert_eq!(copy, original);

    copy.enqueue_front(0);
    copy.dequeue_back().unwrap();
    *copy.back_mut().unwrap() = 20;
    copy.assert_invariants();
    assert_eq!(contents(&copy), [0, 1, 20]);
    assert_eq!(contents(&original), [1, 2, 3]);

    original.clear();
    assert!(original.is_empty());
    assert_eq!(contents(&copy), [0, 1, 20]);
}

#[test]
fn test_clone_compacts_fragmented_ring() {
    let mut deque: LinkedDeque<_> = (0..8).collect();
    for _ in 0..3 {
        deque.dequeue_front().unwrap();
    }
    deque.enqueue_back(8);
    let copy = deque.clone();
    copy.assert_invariants();
    assert_eq!(copy.front_id().map(|id| id.get()), Some(0));
    assert_eq!(contents(&copy), [3, 4, 5, 6, 7, 8]);
}

#[test]
fn test_slots_are_reused() {
    let mut deque: LinkedDeque<_> = (0..4).collect();
    deque.dequeue_front().unwrap();
    deque.enqueue_back(4);
    deque.assert_invariants();
    assert_eq!(deque.nodes.len(), 4);
    assert_eq!(contents(&deque), [1, 2, 3, 4]);
}

#[test]
fn test_iter_both_ends() {
    let deque: LinkedDeque<_> = (1..=5).collect();
    let mut iter = deque.iter();
    assert_eq!(iter.len(), 5);
    assert_eq!(iter.next(), Some(&1));
    assert_eq!(iter.next_back(), Some(&5));
    assert_eq!(iter.next(), Some(&2));
    assert_eq!(iter.next_back(), Some(&4));
    assert_eq!(iter.next(), Some(&3));
    assert_eq!(iter.next(), None);
    assert_eq!(iter.next_back(), None);

    let rev: Vec<_> = deque.iter().rev().copied().collect();
    assert_eq!(rev, [5, 4, 3, 2, 1]);
    let owned: Vec<_> = deque.into_iter().rev().collect();
    assert_eq!(owned, [5, 4, 3, 2, 1]);
}

#[test]
fn test_debug() {
    let deque: LinkedDeque<_> = "ab+".chars().collect();
    assert_eq!(format!("{deque:?}"), "['a', 'b', '+']");
}

#[test]
fn test_balanced_operations() {
    let mut rng = StdRng::seed_from_u64(0x2545_f491);

    let mut deque = LinkedDeque::new();
    let mut model = std::collections::VecDeque::new();
    for i in 0..2000 {
        match rng.random_range(0..6) {
            0 => {
                deque.enqueue_front(i);
                model.push_front(i);
            }
            1 | 2 => {
                deque.enqueue_back(i);
                model.push_back(i);
            }
            3 => assert_eq!(deque.dequeue_front().ok(), model.pop_front()),
            4 => assert_eq!(deque.dequeue_back().ok(), model.pop_back()),
            _ => {
                assert_eq!(deque.peek_front().ok(), model.front().copied());
                assert_eq!(deque.peek_back().ok(), model.back().copied());
            }
        }
        assert_eq!(deque.is_empty(), model.is_empty());
        assert_eq!(deque.len(), model.len());
        if i % 97 == 0 {
            deque.assert_invariants();
            assert!(deque.iter().eq(model.iter()));
        }
    }
    deque.assert_invariants();
    assert!(deque.iter().eq(model.iter()));
}
