use unrolled_linked_list::{Error, LinkedList, UnrolledLinkedList};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Value {
    Int(i32),
    Str(&'static str),
}

use Value::{Int, Str};

const VALUES: [Value; 8] = [
    Int(1),
    Str("a"),
    Int(2),
    Str("b"),
    Int(3),
    Str("c"),
    Int(4),
    Str("d"),
];

fn filled() -> UnrolledLinkedList<Value> {
    let mut list = UnrolledLinkedList::new(4).unwrap();
    for (i, value) in VALUES.into_iter().enumerate() {
        list.push(value);
        assert_eq!(list.len(), i + 1);
        assert_eq!(list.first().value(), Some(&VALUES[0]));
        assert_eq!(list.last().value(), Some(&value));
    }
    list
}

#[test]
fn empty_list() {
    let mut list = UnrolledLinkedList::<Value>::new(4).unwrap();
    assert_eq!(list.len(), 0);
    assert!(list.first().is_exhausted());
    assert!(list.last().is_exhausted());
    for _ in 0..3 {
        assert_eq!(list.pop(), None);
        assert_eq!(list.shift(), None);
        assert_eq!(list.len(), 0);
    }
}

#[test]
fn fill_and_walk() {
    let list = filled();
    assert_eq!(list.len(), 8);
    assert_eq!(list.first().value(), Some(&Int(1)));
    assert_eq!(list.last().value(), Some(&Str("d")));
    assert_eq!(list.index_of(&Str("c")), Some(5));
    assert_eq!(list.index_of(&Str("z")), None);
    assert_eq!(list.node_lens(), [2, 2, 4]);

    let mut cursor = list.first();
    for (i, value) in VALUES.iter().enumerate() {
        assert_eq!(cursor.value(), Some(value));
        assert_eq!(cursor.move_next(), i + 1 < VALUES.len());
    }
    assert!(!cursor.move_next());
    assert_eq!(cursor.value(), None);
}

#[test]
fn pop_all() {
    let mut list = filled();
    for (i, value) in VALUES.iter().enumerate().rev() {
        assert_eq!(list.pop(), Some(*value));
        assert_eq!(list.len(), i);
    }
    assert_eq!(list.pop(), None);
    assert_eq!(list.len(), 0);
}

#[test]
fn unshift_then_shift_all() {
    let mut list = UnrolledLinkedList::new(4).unwrap();
    for (i, value) in VALUES.into_iter().enumerate() {
        list.unshift(value);
        assert_eq!(list.len(), i + 1);
        assert_eq!(list.first().value(), Some(&value));
        assert_eq!(list.last().value(), Some(&VALUES[0]));
    }
    for (i, value) in VALUES.iter().enumerate().rev() {
        assert_eq!(list.shift(), Some(*value));
        assert_eq!(list.len(), i);
    }
    assert_eq!(list.shift(), None);
}

#[test]
fn search() {
    let mut list = UnrolledLinkedList::new(4).unwrap();
    for value in VALUES {
        assert_eq!(list.index_of(&value), None);
        assert!(!list.contains(&value));
    }
    for value in VALUES {
        list.push(value);
    }
    for (i, value) in VALUES.iter().enumerate() {
        assert_eq!(list.index_of(value), Some(i));
        assert_eq!(list.last_index_of(value), Some(i));
        assert!(list.contains(value));
    }

    let mut zeros = UnrolledLinkedList::new(4).unwrap();
    assert_eq!(zeros.index_of(&0), None);
    assert_eq!(zeros.last_index_of(&0), None);
    for i in 0..4 {
        zeros.push(0);
        assert_eq!(zeros.index_of(&0), Some(0));
        assert_eq!(zeros.last_index_of(&0), Some(i));
    }
    assert_eq!(zeros.index_of(&100), None);
    assert_eq!(zeros.last_index_of(&100), None);
}

#[test]
fn get_set() {
    let mut list = UnrolledLinkedList::new(4).unwrap();
    for i in 0..VALUES.len() {
        assert_eq!(
            list.get(i),
            Err(Error::IndexOutOfRange { index: i, len: 0 })
        );
        assert!(list.set(i, Int(i as i32 + 10)).is_err());
    }
    for value in VALUES {
        list.push(value);
    }
    for (i, value) in VALUES.iter().enumerate() {
        assert_eq!(list.get(i), Ok(value));
        assert_eq!(list.set(i, Int(i as i32 + 10)), Ok(*value));
        assert_eq!(list.get(i), Ok(&Int(i as i32 + 10)));
    }
    assert_eq!(list.len(), 8);
}

#[test]
fn remove_at() {
    let mut list = filled();
    assert!(list.remove_at(list.len()).is_err());

    assert_eq!(list.remove_at(1), Ok(Str("a")));
    assert_eq!(list.get(1), Ok(&Int(2)));
    assert_eq!(list.len(), 7);

    assert_eq!(list.remove_at(0), Ok(Int(1)));
    assert_eq!(list.front(), Some(&Int(2)));

    assert_eq!(list.remove_at(list.len() - 1), Ok(Str("d")));
    assert_eq!(list.back(), Some(&Int(4)));
    assert_eq!(list.len(), 5);

    while !list.is_empty() {
        list.remove_at(0).unwrap();
    }
    assert!(list.first().is_exhausted());
    assert_eq!(list.node_count(), 0);
}

#[test]
fn capacity_boundary() {
    let mut list = UnrolledLinkedList::new(4).unwrap();
    list.extend(1..=5);
    assert_eq!(list.node_count(), 2);
    assert_eq!(list.node_lens(), [2, 3]);
}

#[test]
fn invalid_capacity() {
    assert_eq!(
        UnrolledLinkedList::<Value>::new(0).unwrap_err(),
        Error::InvalidCapacity { capacity: 0 }
    );
}

#[test]
fn capacity_one_matches_plain_list() {
    let mut unrolled = UnrolledLinkedList::new(1).unwrap();
    let mut plain = LinkedList::new();
    for (i, value) in VALUES.into_iter().enumerate() {
        if i % 3 == 0 {
            unrolled.unshift(value);
            plain.unshift(value);
        } else {
            unrolled.push(value);
            plain.push(value);
        }
        assert_eq!(unrolled.len(), plain.len());
    }
    assert!(unrolled.iter().eq(plain.iter()));
    assert_eq!(unrolled.node_count(), unrolled.len());
    for i in 0..plain.len() {
        assert_eq!(unrolled.get(i), plain.get(i));
    }
    assert_eq!(unrolled.index_of(&Str("b")), plain.index_of(&Str("b")));

    loop {
        let (a, b) = (unrolled.pop(), plain.pop());
        assert_eq!(a, b);
        assert_eq!(unrolled.len(), plain.len());
        if a.is_none() {
            break;
        }
        let (a, b) = (unrolled.shift(), plain.shift());
        assert_eq!(a, b);
        if a.is_none() {
            break;
        }
    }
}

#[test]
fn copy_independence() {
    let mut original = filled();
    let mut copy = original.clone();
    assert_eq!(copy.len(), original.len());
    assert!(copy.iter().eq(original.iter()));

    copy.push(Int(5));
    copy.set(0, Str("x")).unwrap();
    assert_eq!(original.len(), 8);
    assert_eq!(original.get(0), Ok(&Int(1)));

    original.clear();
    assert_eq!(copy.len(), 9);
    assert_eq!(copy.get(1), Ok(&Str("a")));
}

#[test]
fn clear() {
    let mut list = filled();
    list.clear();
    assert_eq!(list.len(), 0);
    assert!(list.first().is_exhausted());
    assert!(list.last().is_exhausted());
    assert_eq!(list.pop(), None);
}

#[test]
fn add_lists() {
    let mut l1 = UnrolledLinkedList::new(4).unwrap();
    l1.extend([3, 4]);
    let mut l2 = UnrolledLinkedList::new(4).unwrap();
    l2.extend([5, 6]);

    l1.append(&mut l2);
    assert_eq!(l1.to_vec(), [3, 4, 5, 6]);
    assert!(l2.is_empty());

    l1.unshift_all([2, 1]);
    assert_eq!(l1.to_vec(), [1, 2, 3, 4, 5, 6]);
}

#[test]
fn find_and_replace() {
    let mut list = filled();
    list.remove_at(7).unwrap();
    list.remove_at(6).unwrap();
    list.remove_at(5).unwrap();
    list.remove_at(4).unwrap();

    assert_eq!(list.find(|v| *v == Str("a")), Some(&Str("a")));
    assert_eq!(list.find(|v| *v == Str("z")), None);

    assert_eq!(list.replace_first(|v| *v == Int(2), Int(3)), Some(Int(2)));
    assert_eq!(list.to_vec(), [Int(1), Str("a"), Int(3), Str("b")]);
    assert_eq!(list.replace_first(|v| *v == Str("z"), Int(4)), None);
    assert_eq!(list.to_vec(), [Int(1), Str("a"), Int(3), Str("b")]);
}

#[test]
fn remove_occurrences() {
    let mut list = UnrolledLinkedList::new(4).unwrap();
    list.extend((0..5).map(|i| i % 2));

    assert_eq!(list.remove_first_occurrence(&0), Some(0));
    assert_eq!(list.to_vec(), [1, 0, 1, 0]);
    assert_eq!(list.remove_first_occurrence(&0), Some(0));
    assert_eq!(list.to_vec(), [1, 1, 0]);
    assert_eq!(list.remove_first_occurrence(&0), Some(0));
    assert_eq!(list.to_vec(), [1, 1]);
    assert_eq!(list.remove_first_occurrence(&0), None);
    assert_eq!(list.len(), 2);

    list.clear();
    list.extend((0..5).map(|i| i % 2));
    assert_eq!(list.remove_last_occurrence(&0), Some(0));
    assert_eq!(list.to_vec(), [0, 1, 0, 1]);
    assert_eq!(list.remove_last_occurrence(&0), Some(0));
    assert_eq!(list.to_vec(), [0, 1, 1]);
    assert_eq!(list.remove_last_occurrence(&0), Some(0));
    assert_eq!(list.to_vec(), [1, 1]);
    assert_eq!(list.remove_last_occurrence(&0), None);
}
