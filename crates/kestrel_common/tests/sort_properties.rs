use core::{cell::RefCell, cmp::Ordering};

use kestrel_common::prelude::*;
use kestrel_common::sort;
use rand::{rngs::StdRng, Rng, SeedableRng};

fn values<T: Copy>(arr: &DynArr<T>) -> Vec<T> {
    arr.iter().flatten().copied().collect()
}

fn random_arr(rng: &mut StdRng, len: usize, max: i64) -> (DynArr<i64>, Vec<i64>) {
    let input: Vec<i64> = (0..len).map(|_| rng.gen_range(-max..=max)).collect();
    (DynArr::from_sequence(input.iter().copied()).unwrap(), input)
}

#[test]
fn random_natural_order() {
    let mut rng = StdRng::seed_from_u64(0x5EED);

    for len in 1..200 {
        // Small value ranges produce plenty of duplicates
        let (mut arr, mut expected) = random_arr(&mut rng, len, (len / 4) as i64);
        sort::sort(&mut arr);
        expected.sort_unstable();

        assert_eq!(arr.len(), len);
        assert_eq!(values(&arr), expected);
    }
}

#[test]
fn random_comparator() {
    let mut rng = StdRng::seed_from_u64(42);
    let descending = |a: &i64, b: &i64| b.cmp(a);

    for len in [2, 3, 10, 64, 333, 1000] {
        let (mut arr, mut expected) = random_arr(&mut rng, len, 1000);
        sort::sort_by(&mut arr, descending);
        expected.sort_unstable_by(descending);

        assert_eq!(values(&arr), expected);
        assert!(values(&arr).windows(2).all(|pair| descending(&pair[0], &pair[1]) != Ordering::Greater));
    }
}

#[test]
fn random_gaps() {
    let mut rng = StdRng::seed_from_u64(7);

    for _ in 0..50 {
        let (mut arr, _) = random_arr(&mut rng, 40, 100);
        let removals = rng.gen_range(1..10);
        for _ in 0..removals {
            let idx = rng.gen_range(0..arr.len());
            arr.remove_at(idx).unwrap();
        }

        let len = arr.len();
        let gaps = arr.iter().filter(|slot| slot.is_none()).count();
        let mut expected = values(&arr);
        expected.sort_unstable();

        sort::sort(&mut arr);
        assert_eq!(arr.len(), len);
        assert_eq!(values(&arr), expected);
        assert!(arr.iter().skip(len - gaps).all(|slot| slot.is_none()));
    }
}

#[test]
fn random_inconsistent_comparator() {
    let rng = RefCell::new(StdRng::seed_from_u64(0xBAD));
    let cmp = |_: &i64, _: &i64| match rng.borrow_mut().gen_range(0..3) {
        0 => Ordering::Less,
        1 => Ordering::Equal,
        _ => Ordering::Greater,
    };

    for len in [2, 5, 17, 128, 500] {
        let (mut arr, mut expected) = random_arr(&mut rng.borrow_mut(), len, 50);
        sort::sort_by(&mut arr, cmp);

        // The order is unspecified, but no value may be lost or duplicated
        let mut sorted = values(&arr);
        sorted.sort_unstable();
        expected.sort_unstable();
        assert_eq!(arr.len(), len);
        assert_eq!(sorted, expected);
    }
}

#[test]
fn random_insertions_keep_order() {
    let mut rng = StdRng::seed_from_u64(1234);
    let mut arr = DynArr::with_capacity(1).unwrap();
    let mut reference = Vec::new();

    for i in 0..500 {
        let idx = rng.gen_range(0..=arr.len());
        arr.insert(idx, i).unwrap();
        reference.insert(idx, i);
    }

    assert_eq!(arr.len(), reference.len());
    assert!(arr.capacity() >= arr.len());
    assert_eq!(values(&arr), reference);
}
