use core::cmp::Ordering;

use kestrel::{prelude::*, sort};

const WORDS: [&str; 6] = ["hello", "world", "snow", "apple", "tom", "cheese"];

#[test]
fn sort_integers() {
    let mut arr = DynArr::from_sequence(vec![2, 2, 1, 10, 8, 5, 2, 7, 9, 7]).unwrap();
    arr.sort();
    assert_eq!(arr, DynArr::from_sequence(vec![1, 2, 2, 2, 5, 7, 7, 8, 9, 10]).unwrap());
}

#[test]
fn sort_words() {
    let mut arr = DynArr::from_sequence(WORDS).unwrap();
    sort::sort(&mut arr);
    assert_eq!(arr, dynarr!["apple", "cheese", "hello", "snow", "tom", "world"]);
}

#[test]
fn sort_words_by_length() {
    let mut arr = DynArr::from_sequence(WORDS).unwrap();
    arr.sort_by(|a: &&str, b: &&str| match a.len().cmp(&b.len()) {
        Ordering::Equal => a.cmp(b),
        ord => ord,
    });
    assert_eq!(arr, dynarr!["tom", "snow", "apple", "hello", "world", "cheese"]);
}

#[test]
fn capacities() {
    assert_eq!(DynArr::<String>::new().capacity(), 10);
    assert_eq!(DynArr::<String>::with_capacity(17).unwrap().capacity(), 17);
    assert_eq!(DynArr::<String>::with_capacity(0), Err(DynArrError::InvalidArgument("capacity must be a positive integer")));
}

#[test]
fn round_trip() {
    let seq = vec!["a".to_string(), "b".to_string(), "c".to_string()];
    let arr = DynArr::from_sequence(seq.clone()).unwrap();
    let read: Vec<String> = arr.iter().flatten().cloned().collect();
    assert_eq!(read, seq);
}

#[test]
fn errors_display() {
    let mut arr = dynarr![1, 2, 3];
    let err = arr.insert(5, 0).unwrap_err();
    assert_eq!(err.to_string(), "index (is 5) should be < 4");
}
