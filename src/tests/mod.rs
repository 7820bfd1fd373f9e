use super::*;

extern crate std;
use std::vec;

fn walkthrough<S>(mut list: List<i32, S>)
where
    S: VecLike<i32> + Default,
{
    list.try_add(1).expect("add 1 failed");
    list.try_add(2).expect("add 2 failed");
    list.try_add(3).expect("add 3 failed");
    assert_eq!(list.as_slice(), &[1, 2, 3]);

    list.insert(1, 9).expect("insert failed");
    assert_eq!(list.as_slice(), &[1, 9, 2, 3]);

    assert_eq!(list.remove_at(0), Ok(1));
    assert_eq!(list.as_slice(), &[9, 2, 3]);

    let sublist = list.sublist(0, 1).expect("sublist failed");
    assert_eq!(sublist.as_slice(), &[9, 2]);

    assert!(list.erase(&2));
    assert_eq!(list.as_slice(), &[9, 3]);

    assert!(matches!(
        list.insert(5, 7),
        Err(ListError::IndexOutOfBounds { index: 5, len: 2 })
    ));
    assert!(matches!(
        list.sublist(2, 1),
        Err(ListError::InvalidRange { start: 2, end: 1 })
    ));

    list.clear();
    assert!(list.is_empty());
}

#[test]
fn growable_walkthrough() {
    walkthrough(List::<i32>::new());
}

#[test]
fn bounded_walkthrough() {
    walkthrough(BoundedList::<i32, 4>::default());
}

#[test]
fn growable_list_reserve_only_touches_capacity() {
    let mut list = List::from(vec![1, 2]);
    list.reserve(64);
    assert!(list.capacity() >= 64);
    assert_eq!(list.len(), 2);
    assert_eq!(list.end(), Some(&2));

    // Smaller requests are a no-op.
    let capacity = list.capacity();
    list.reserve(1);
    assert_eq!(list.capacity(), capacity);
}

#[test]
fn storage_round_trips_through_list() {
    let mut storage: heapless::Vec<u8, 8> = heapless::Vec::new();
    storage.extend_from_slice(&[4, 5]).expect("extend failed");

    let mut list: List<u8, _> = List::from_storage(storage);
    list.try_add(6).expect("add failed");

    let storage = list.into_storage();
    assert_eq!(storage.as_slice(), &[4, 5, 6]);
}
