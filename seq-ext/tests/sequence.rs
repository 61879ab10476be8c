use insta::assert_debug_snapshot;
use rstest::rstest;

use seq_ext::{checked, Boundary, Error, SequenceExt};

static NUMBERS: [i32; 5] = [1, 2, 3, 4, 5];

#[test]
fn test_after() {
    assert_debug_snapshot!(NUMBERS.into_iter().after(&3).collect::<Vec<_>>(), @r###"
    [
        4,
        5,
    ]
    "###);
}

#[test]
fn test_before() {
    assert_debug_snapshot!(NUMBERS.into_iter().before(&3).collect::<Vec<_>>(), @r###"
    [
        1,
        2,
    ]
    "###);
}

#[test]
fn test_next_wraps_to_first() {
    assert_debug_snapshot!(NUMBERS.into_iter().next_of(&5, Boundary::Wrap), @r###"
    Ok(
        Some(
            1,
        ),
    )
    "###);
}

#[test]
fn test_next_at_end_without_wrap() {
    assert_debug_snapshot!(NUMBERS.into_iter().next_of(&5, Boundary::Stop), @r###"
    Err(
        OutOfRange,
    )
    "###);
}

#[test]
fn test_checked_missing_source() {
    let missing: Option<Vec<i32>> = None;
    assert_debug_snapshot!(checked::index_of(missing, Some(&1)), @r###"
    Err(
        InvalidArgument {
            name: "source",
        },
    )
    "###);
}

#[test]
fn test_error_messages() {
    assert_eq!(
        Error::InvalidArgument { name: "selector" }.to_string(),
        "Invalid argument: selector must be present"
    );
    assert_eq!(
        Error::OutOfRange.to_string(),
        "Out of range: no neighbour at the sequence boundary"
    );
}

#[rstest]
#[case(&[1, 2, 3, 4, 5], 3)]
#[case(&[1, 2, 3, 4, 5], 1)]
#[case(&[1, 2, 3, 4, 5], 5)]
#[case(&[9], 9)]
#[case(&[4, 8, 15, 16, 23, 42], 16)]
fn test_before_value_after_rebuilds_sequence(#[case] sequence: &[i32], #[case] value: i32) {
    let mut rebuilt = sequence.iter().before(&value).copied().collect::<Vec<_>>();
    rebuilt.push(value);
    rebuilt.extend(sequence.iter().after(&value));
    assert_eq!(rebuilt, sequence);
}

#[rstest]
#[case(&[], 1)]
#[case(&[1, 2, 3], 4)]
#[case(&[1, 2, 3], 0)]
fn test_missing_value(#[case] sequence: &[i32], #[case] value: i32) {
    assert_eq!(sequence.iter().after(&value).count(), 0);
    assert_eq!(sequence.iter().before(&value).count(), 0);
    assert_eq!(sequence.iter().index_of(&value), None);
    assert_eq!(sequence.iter().next_of(&value, true), Ok(None));
    assert_eq!(sequence.iter().previous_of(&value, true), Ok(None));
}

#[rstest]
#[case(&[1, 2, 3, 4, 5])]
#[case(&[3, 1, 3, 1])]
#[case(&[7, 7, 7])]
fn test_index_of_finds_first_occurrence(#[case] sequence: &[i32]) {
    for (i, value) in sequence.iter().enumerate() {
        let index = sequence.iter().index_of(value).unwrap();
        assert!(index <= i);
        assert_eq!(sequence[index], *value);
        assert!(sequence[..index].iter().all(|other| other != value));
    }
}

#[rstest]
#[case(&[1, 2, 3, 4, 5])]
#[case(&[6, 2])]
#[case(&[8])]
fn test_wrap_around_boundaries(#[case] sequence: &[i32]) {
    let first = sequence[0];
    let last = sequence[sequence.len() - 1];

    assert_eq!(sequence.iter().next_of(&last, true), Ok(Some(&first)));
    assert_eq!(
        sequence.iter().next_of(&last, false),
        Err(Error::OutOfRange)
    );
    assert_eq!(sequence.iter().previous_of(&first, true), Ok(Some(&last)));
    assert_eq!(
        sequence.iter().previous_of(&first, false),
        Err(Error::OutOfRange)
    );
}

#[test]
fn test_neighbours_inside_sequence() {
    assert_eq!(NUMBERS.iter().next_of(&2, false), Ok(Some(&3)));
    assert_eq!(NUMBERS.iter().previous_of(&2, false), Ok(Some(&1)));
}

#[test]
fn test_lazy_results_restart() {
    let after = NUMBERS.iter().after(&2);
    let first = after.clone().collect::<Vec<_>>();
    let second = after.collect::<Vec<_>>();
    assert_eq!(first, second);

    let before = NUMBERS.iter().before(&4);
    assert_eq!(before.clone().count(), 3);
    assert_eq!(before.count(), 3);
}

#[test]
fn test_after_is_lazy() {
    let mut pulled = Vec::new();
    let mut after = NUMBERS.iter().inspect(|x| pulled.push(**x)).after(&2);
    assert_eq!(after.next(), Some(&3));
    drop(after);
    assert_eq!(pulled, [1, 2, 3]);
}

#[test]
fn test_select_distinct_by_length() {
    let words = ["a", "bb", "ccc", "dd"];
    let lengths = words.iter().select_distinct(|w| w.len()).collect::<Vec<_>>();
    assert_eq!(lengths, [1, 2, 3]);
    let distinct = words.iter().distinct_by(|w| w.len()).collect::<Vec<_>>();
    assert_eq!(distinct, [&"a", &"bb", &"ccc"]);
}

#[rstest]
#[case(&[], &[])]
#[case(&[1, 2, 3], &[1, 0])]
#[case(&[5, 3, 5, 8, 3], &[1, 0])]
#[case(&[2, 4, 6], &[0])]
fn test_select_distinct_parity(#[case] sequence: &[i32], #[case] expected: &[i32]) {
    let keys = sequence
        .iter()
        .select_distinct(|x| x % 2)
        .collect::<Vec<_>>();
    assert!(keys.len() <= sequence.len());
    assert_eq!(keys, expected);
}

#[test]
fn test_each_with_external_state() {
    let mut sum = 0;
    NUMBERS.iter().each(|x| sum += x);
    assert_eq!(sum, 15);
}

#[test]
fn test_checked_for_each_runs_action() {
    let mut seen = Vec::new();
    checked::for_each(Some(NUMBERS), Some(|x: i32| seen.push(x))).unwrap();
    assert_eq!(seen, NUMBERS);
}

#[test]
fn test_checked_select_distinct() {
    let words = vec!["one", "two", "three"];
    let keys = checked::select_distinct(Some(&words), Some(|w: &&str| w.len())).unwrap();
    assert_eq!(keys.collect::<Vec<_>>(), [3, 5]);
}
