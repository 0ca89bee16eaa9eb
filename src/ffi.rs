//! C ABI entry points for compiled Fork programs.

use std::io::{self, Write};

use tracing::error;

use crate::writer::IntegerTextWriter;

/// `void outint(uint64_t n)`
///
/// Prints the decimal digits of `n` to stdout and flushes it, since the
/// host may leave through libc `exit` without Rust flushing its buffer.
/// A C caller has no way to receive an `io::Error`, so a failed write is
/// logged and otherwise dropped, the same as an unchecked `printf`.
#[no_mangle]
pub extern "C" fn outint(n: u64) {
    print_to(io::stdout().lock(), n);
}

fn print_to<W: Write>(sink: W, n: u64) {
    if let Err(err) = write_and_flush(sink, n) {
        error!(n, %err, "outint failed");
    }
}

fn write_and_flush<W: Write>(sink: W, n: u64) -> io::Result<()> {
    let mut writer = IntegerTextWriter::new(sink);
    writer.write_unsigned_decimal(n)?;
    writer.get_mut().flush()
}
