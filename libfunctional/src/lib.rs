extern crate chrono;
extern crate itertools;
#[macro_use] extern crate log;
extern crate thiserror;

pub mod compose;
pub mod currying;
pub mod error;
pub mod filter;
pub mod higher_order;
pub mod map;
pub mod pure;
pub mod record;
pub mod reduce;

pub use error::{Error, Result};
