use std::fmt::Debug;
use super::failure::Failure;
use super::test_case::TestResult;

pub fn equal<T>(actual: T, expected: T) -> TestResult
    where T: PartialEq + Debug
{
    if actual == expected {
        Ok(())
    } else {
        Err(Failure::Mismatch {
            expected: format!("{:?}", expected),
            actual: format!("{:?}", actual),
        })
    }
}

/// Compares two sequences element by element, reporting the first
/// position where they differ.
pub fn deep_equal<T>(actual: &[T], expected: &[T]) -> TestResult
    where T: PartialEq + Debug
{
    if actual.len() != expected.len() {
        return equal(actual, expected);
    }
    match actual.iter().zip(expected.iter()).position(|(a, e)| a != e) {
        Some(index) => Err(Failure::ElementMismatch {
            index: index,
            expected: format!("{:?}", expected[index]),
            actual: format!("{:?}", actual[index]),
        }),
        None => Ok(()),
    }
}

#[test]
fn test_equal() {
    assert!(equal(10, 10).is_ok());
    match equal("AnnaJohn", "AnnaJohnMaria") {
        Err(Failure::Mismatch { expected, actual }) => {
            assert_eq!(expected, "\"AnnaJohnMaria\"");
            assert_eq!(actual, "\"AnnaJohn\"");
        },
        other => panic!("unexpected result {:?}", other),
    }
}

#[test]
fn test_deep_equal_reports_index() {
    assert!(deep_equal(&[6, 4, 9], &[6, 4, 9]).is_ok());
    match deep_equal(&[6, 5, 9], &[6, 4, 9]) {
        Err(Failure::ElementMismatch { index, expected, actual }) => {
            assert_eq!(index, 1);
            assert_eq!(expected, "4");
            assert_eq!(actual, "5");
        },
        other => panic!("unexpected result {:?}", other),
    }
}

#[test]
fn test_deep_equal_length_mismatch() {
    match deep_equal(&[6, 4], &[6, 4, 9]) {
        Err(Failure::Mismatch { expected, actual }) => {
            assert_eq!(expected, "[6, 4, 9]");
            assert_eq!(actual, "[6, 4]");
        },
        other => panic!("unexpected result {:?}", other),
    }
}
