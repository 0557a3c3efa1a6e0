use thiserror::Error;

#[derive(Debug, Error)]
pub enum Failure {
    #[error("expected `{expected}`, found `{actual}`")]
    Mismatch { expected: String, actual: String },

    #[error("element {index}: expected `{expected}`, found `{actual}`")]
    ElementMismatch { index: usize, expected: String, actual: String },

    #[error("cannot invoke undefined value `{0}`")]
    Undefined(&'static str),

    #[error("panicked: {0}")]
    Panicked(String),

    #[error(transparent)]
    Library(#[from] libfunctional::Error),
}

impl Failure {
    pub fn is_undefined(&self) -> bool {
        match *self {
            Failure::Undefined(_) => true,
            _ => false,
        }
    }
}

#[test]
fn test_undefined_message() {
    let failure = Failure::Undefined("grades");
    assert!(failure.is_undefined());
    assert_eq!(failure.to_string(), "cannot invoke undefined value `grades`");
}

#[test]
fn test_library_errors_convert() {
    let failure: Failure = libfunctional::Error::InvalidDate { year: 2016, month: 13 }.into();
    assert!(!failure.is_undefined());
    assert_eq!(failure.to_string(), "2016-13 is not a valid month");
}
