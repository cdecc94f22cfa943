use dynamic_array::{ArrayError, DynamicArray};
use pretty_assertions::assert_eq;

fn sample() -> DynamicArray<i32> {
    DynamicArray::from(vec![1, 3, 7, 1, 0, 234, 12, 86, 111, 999, 53, 3])
}

#[test]
fn sort_reverse_remove_scenario() {
    let mut arr = sample();

    arr.selection_sort();
    assert_eq!(arr.as_slice(), &[0, 1, 1, 3, 3, 7, 12, 53, 86, 111, 234, 999]);

    arr.reverse();
    assert_eq!(arr.as_slice(), &[999, 234, 111, 86, 53, 12, 7, 3, 3, 1, 1, 0]);

    assert!(arr.remove(&999));
    assert_eq!(arr.as_slice(), &[234, 111, 86, 53, 12, 7, 3, 3, 1, 1, 0]);

    assert_eq!(arr.to_string(), "[234, 111, 86, 53, 12, 7, 3, 3, 1, 1, 0]");
}

#[test]
fn bubble_sort_matches_selection_sort_on_sample() {
    let mut a = sample();
    let mut b = sample();
    a.bubble_sort();
    b.selection_sort();
    assert_eq!(a, b);
}

#[test]
fn remove_two_of_three() {
    let mut arr = DynamicArray::from(vec![3, 3, 3]);
    assert_eq!(arr.remove_n(&3, 2), 2);
    assert_eq!(arr.to_vec(), vec![3]);
}

#[test]
fn dedupe_then_slice() {
    let mut arr = sample();
    arr.remove_duplicates();
    assert_eq!(arr.to_string(), "[1, 3, 7, 0, 234, 12, 86, 111, 999, 53]");

    let middle = arr.sub_array_range(2, 5).unwrap();
    assert_eq!(middle.to_string(), "[7, 0, 234]");
    let tail = arr.sub_array(8).unwrap();
    assert_eq!(tail.to_string(), "[999, 53]");
    assert_eq!(arr.size(), 10);
}

#[test]
fn sub_array_boundaries() {
    let arr = sample();
    let n = arr.size();
    assert!(arr.sub_array(n).unwrap().is_empty());
    assert!(arr.sub_array_range(0, 0).unwrap().is_empty());
    assert_eq!(
        arr.sub_array(n + 1).unwrap_err(),
        ArrayError::IndexOutOfRange { index: n + 1, len: n }
    );
    assert_eq!(
        arr.sub_array_range(3, 2).unwrap_err(),
        ArrayError::InvalidRange { start: 3, end: 2, len: n }
    );
}

#[test]
fn round_trip_through_vec() {
    let arr = sample();
    assert_eq!(DynamicArray::from(arr.to_vec()), arr);
    let back: Vec<i32> = arr.clone().into();
    assert_eq!(back, arr.into_vec());
}

#[test]
fn errors_render_messages() {
    let arr: DynamicArray<String> = DynamicArray::new();
    let err = arr.get(0).unwrap_err();
    assert_eq!(err.to_string(), "index 0 out of range for array of length 0");
}

#[cfg(feature = "serde")]
#[test]
fn serde_is_a_plain_sequence() {
    let arr = DynamicArray::from(vec![3, 1, 2]);
    let json = serde_json::to_string(&arr).unwrap();
    assert_eq!(json, "[3,1,2]");
    let back: DynamicArray<i32> = serde_json::from_str(&json).unwrap();
    assert_eq!(back, arr);
}
