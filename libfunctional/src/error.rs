use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum Error {
    #[error("{year}-{month:02} is not a valid month")]
    InvalidDate { year: i32, month: u32 },
}
