mod digits;

use std::io::{self, Stdout, Write};

use tracing::trace;

pub use digits::Digits;

/// Writes unsigned integers as bare decimal text into `W`.
///
/// Nothing is written besides the digits themselves: no sign, no padding,
/// no separator and no newline. The writer holds no state between calls
/// and does not serialize access to a shared stream, so callers that
/// share one across threads must lock it themselves.
#[derive(Debug)]
pub struct IntegerTextWriter<W> {
    sink: W,
}

impl IntegerTextWriter<Stdout> {
    pub fn stdout() -> Self { Self::new(io::stdout()) }
}

impl<W: Write> IntegerTextWriter<W> {
    pub fn new(sink: W) -> Self { Self { sink } }

    /// Appends the decimal digits of `value` to the sink.
    ///
    /// # Errors
    /// Whatever the sink returns, unchanged. No retries are made.
    pub fn write_unsigned_decimal(&mut self, value: u64) -> io::Result<()> {
        let digits = Digits::new(value);
        self.sink.write_all(digits.as_bytes())?;
        trace!(value, bytes = digits.len(), "wrote decimal");

        Ok(())
    }

    pub fn get_ref(&self) -> &W { &self.sink }

    pub fn get_mut(&mut self) -> &mut W { &mut self.sink }

    pub fn into_inner(self) -> W { self.sink }
}

/// Writes the decimal digits of `value` to the process stdout.
///
/// The digits go out in a single locked write. Stdout is not flushed.
pub fn outint(value: u64) -> io::Result<()> {
    IntegerTextWriter::new(io::stdout().lock()).write_unsigned_decimal(value)
}
