use rand::{Rng, SeedableRng, rngs::StdRng};

use crate::linked_list::SinglyLinkedList;

#[test]
fn test_single_list_append() {
    let mut list = SinglyLinkedList::new();
    assert!(list.is_empty());
    assert_eq!(list.head(), None);
    assert_eq!(list.tail(), None);

    list.append(1);
    list.append(2);
    list.append(3);

    assert_eq!(list.len(), 3);
    assert!(!list.is_empty());
    assert_eq!(list.head(), Some(&1));
    assert_eq!(list.tail(), Some(&3));
}

#[test]
fn test_single_list_iter() {
    let list = SinglyLinkedList::from([1, 2, 3, 4]);

    let values: Vec<i32> = list.iter().copied().collect();
    assert_eq!(values, vec![1, 2, 3, 4]);
    assert_eq!(list.iter().len(), 4);

    // Iteration can be restarted.
    let again: Vec<i32> = list.display().copied().collect();
    assert_eq!(again, values);

    let mut total = 0;
    for value in &list {
        total += value;
    }
    assert_eq!(total, 10);
}

#[test]
fn test_single_list_display() {
    let mut list = SinglyLinkedList::new();
    assert_eq!(list.to_string(), "List is empty");

    list.extend([1, 2, 3, 4]);
    assert_eq!(list.to_string(), "1 2 3 4");

    let single: SinglyLinkedList<i32> = core::iter::once(-7).collect();
    assert_eq!(single.to_string(), "-7");
}

#[test]
fn test_single_list_random_sequences() {
    let mut rng = StdRng::seed_from_u64(0x5eed);
    for _ in 0..64 {
        let len = rng.random_range(0..200);
        let values: Vec<i32> = (0..len).map(|_| rng.random_range(-1000..1000)).collect();

        let mut list = SinglyLinkedList::new();
        for &value in &values {
            list.append(value);
        }

        assert_eq!(list.len(), values.len());
        assert!(list.iter().eq(values.iter()));
        assert!(!list.detect_cycle());
    }
}
