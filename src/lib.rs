//! Unsigned decimal output for the Fork runtime.
//!
//! [`IntegerTextWriter`] writes the bare decimal digits of a `u64` into any
//! [`std::io::Write`] sink; [`outint`] does the same for the process stdout.
//! The C symbol `outint` is exported from [`ffi`].

pub mod ffi;
pub mod value;
pub mod writer;

#[cfg(test)]
mod test_log;

pub use value::{ParseValueError, Value};
pub use writer::{outint, Digits, IntegerTextWriter};
