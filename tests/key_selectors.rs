use nsearch::{BinarySearchExt, CaseInsensitive};

const STRINGS_IN_ASCENDING_ORDER_OF_LENGTH: [&str; 5] = ["dog", "puma", "horse", "chicken", "kangaroo"];
const STRINGS_IN_ORDER_OF_SECOND_LETTER: [&str; 7] = ["bat", "ABS", "ack", "ODD", "leg", "OFT", "egg"];

#[test]
fn returns_index_of_key_based_on_given_key_selector() {
    let s = STRINGS_IN_ASCENDING_ORDER_OF_LENGTH;
    assert_eq!(s.search_by_key(&5, |w| w.len()), Ok(2));
}

#[test]
fn returns_index_of_value_based_on_given_key_selector() {
    let s = STRINGS_IN_ASCENDING_ORDER_OF_LENGTH;
    assert_eq!(s.search_by_value(&"chicken", |w| w.len()), Ok(3));
}

#[test]
fn missing_key_reports_insertion_point() {
    let s = STRINGS_IN_ASCENDING_ORDER_OF_LENGTH;
    assert_eq!(s.search_by_key(&6, |w| w.len()), Ok(!3));
    assert_eq!(s.search_by_value(&"ox", |w| w.len()), Ok(!0));
}

#[test]
fn returns_index_based_on_given_key_selector_and_comparer() {
    let s = STRINGS_IN_ORDER_OF_SECOND_LETTER;
    let second_letter_on = |w: &&str| w[1..].to_string();

    assert_eq!(s.search_by_value_with(&"oft", second_letter_on, CaseInsensitive), Ok(5));
    assert_eq!(s.search_by_key_with(&"dd".to_string(), second_letter_on, CaseInsensitive), Ok(3));
}

#[test]
fn ranged_key_searches_stay_in_window() {
    let s = STRINGS_IN_ASCENDING_ORDER_OF_LENGTH;

    assert_eq!(s.search_range_by_key(0, 2, &5, |w| w.len()), Ok(!2));
    assert_eq!(s.search_range_by_key(2, 3, &5, |w| w.len()), Ok(2));
    assert_eq!(s.search_range_by_value(3, 2, &"dog", |w| w.len()), Ok(!3));
    assert_eq!(s.search_range_by_value(1, 4, &"kiwi", |w| w.len()), Ok(1));
}

#[test]
fn ranged_key_searches_with_comparer() {
    let s = STRINGS_IN_ORDER_OF_SECOND_LETTER;
    let second_letter_on = |w: &&str| w[1..].to_string();

    assert_eq!(
        s.search_range_by_key_with(0, 3, &"FT".to_string(), second_letter_on, CaseInsensitive),
        Ok(!3)
    );
    assert_eq!(
        s.search_range_by_value_with(4, 3, &"aft", second_letter_on, CaseInsensitive),
        Ok(5)
    );
}

#[test]
fn key_and_value_searches_agree_with_projected_search() {
    let s = STRINGS_IN_ASCENDING_ORDER_OF_LENGTH;
    let projected: Vec<usize> = s.iter().map(|w| w.len()).collect();

    for probe in ["", "ab", "abc", "abcd", "abcde", "abcdef", "abcdefg", "abcdefgh", "abcdefghi"] {
        let key = probe.len();
        let expected = projected.search(&key);
        assert_eq!(s.search_by_key(&key, |w| w.len()), expected);
        assert_eq!(s.search_by_value(&probe, |w| w.len()), expected);
    }
}

#[test]
fn value_search_evaluates_selector_on_both_sides() {
    use std::cell::Cell;

    let calls = Cell::new(0usize);
    let s = STRINGS_IN_ASCENDING_ORDER_OF_LENGTH;
    let counting_len = |w: &&str| {
        calls.set(calls.get() + 1);
        w.len()
    };

    assert_eq!(s.search_by_value(&"horse", counting_len), Ok(2));
    // One probe at the midpoint: element and target each projected once.
    assert_eq!(calls.get(), 2);
}
