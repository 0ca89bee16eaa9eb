use std::fmt;

/// Length of `u64::MAX` in decimal.
const MAX_DIGITS: usize = 20;

/// Decimal text of a `u64`, kept in an inline buffer.
///
/// The digits occupy `buf[start..]`; the bytes before `start` are unused.
#[derive(Clone, Copy)]
pub struct Digits {
    buf: [u8; MAX_DIGITS],
    start: usize,
}

impl Digits {
    pub fn new(mut n: u64) -> Self {
        let mut buf = [b'0'; MAX_DIGITS];
        let mut start = MAX_DIGITS;

        // do-while so that zero still yields one digit
        loop {
            start -= 1;
            buf[start] = b'0' + (n % 10) as u8;
            n /= 10;

            if n == 0 {
                break;
            }
        }

        Digits { buf, start }
    }

    pub fn as_bytes(&self) -> &[u8] { &self.buf[self.start..] }

    pub fn as_str(&self) -> &str {
        // Only ASCII digits are ever stored.
        match std::str::from_utf8(self.as_bytes()) {
            Ok(s) => s,
            Err(_) => unreachable!("decimal digits are always ASCII"),
        }
    }

    pub fn len(&self) -> usize { MAX_DIGITS - self.start }

    /// Never true: zero is written as a single digit.
    pub fn is_empty(&self) -> bool { false }
}

impl AsRef<[u8]> for Digits {
    fn as_ref(&self) -> &[u8] { self.as_bytes() }
}

impl AsRef<str> for Digits {
    fn as_ref(&self) -> &str { self.as_str() }
}

impl fmt::Display for Digits {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Debug for Digits {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Digits({:?})", self.as_str())
    }
}
