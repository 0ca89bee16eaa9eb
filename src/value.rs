use std::{fmt, str::FromStr};

use thiserror::Error;

use crate::writer::Digits;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[repr(transparent)]
pub struct Value(pub u64);

impl Value {
    pub const MAX: Value = Value(u64::MAX);

    /// The decimal digits of this value, without touching the heap.
    pub fn digits(self) -> Digits { Digits::new(self.0) }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.digits().as_str())
    }
}

impl From<u64> for Value {
    fn from(value: u64) -> Self { Self(value) }
}

impl From<Value> for u64 {
    fn from(value: Value) -> Self { value.0 }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseValueError {
    #[error("Expected a decimal number, got an empty string")]
    Empty,
    #[error("Invalid digit {found:?} at position {position}")]
    InvalidDigit {
        position: usize,
        found: char,
    },
    #[error("Number does not fit in 64 bits (max is {})", u64::MAX)]
    Overflow,
}

impl FromStr for Value {
    type Err = ParseValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err(ParseValueError::Empty);
        }

        let mut acc = 0u64;
        for (position, found) in s.char_indices() {
            let digit = found.to_digit(10)
                .ok_or(ParseValueError::InvalidDigit { position, found })?;

            acc = acc.checked_mul(10)
                .and_then(|x| x.checked_add(u64::from(digit)))
                .ok_or(ParseValueError::Overflow)?;
        }

        Ok(Value(acc))
    }
}
