//! mathproc - numeric sequence helpers
//!
//! Two operations over sequences of numbers:
//!
//! - [`sum`] adds every element, rejecting inputs that are not sequences and
//!   sequences holding anything but numbers.
//! - [`process`] keeps the strictly positive numbers and doubles them,
//!   silently dropping everything else.
//!
//! Both log through `tracing`. The library never installs a subscriber, so
//! callers decide where (and whether) those lines go.

pub mod cli;
pub mod config;
pub mod error;
pub mod models;
pub mod number;
pub mod processor;
pub mod report;
pub mod runner;

pub use error::{Error, Result};
pub use number::Number;
pub use processor::{process, process_numbers, sum, sum_numbers};
