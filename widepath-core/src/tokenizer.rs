//! Buffered tokenizer for the whitespace-separated integer input format.
//!
//! The tokenizer pulls raw bytes from any [`Read`] implementation into a
//! fixed-capacity buffer and extracts unsigned decimal integers from it. It
//! performs no validation: a position holding no digits yields `0`, and a
//! byte that is neither a digit nor a separator stops every subsequent read
//! in place.

use std::io::{self, ErrorKind, Read};
use std::num::NonZeroUsize;

/// Default capacity of the tokenizer read buffer (200 KiB).
pub const DEFAULT_READ_BUFFER_SIZE: NonZeroUsize = match NonZeroUsize::new(200 * 1024) {
    Some(size) => size,
    None => panic!("default read buffer size must be non-zero"),
};

/// Extracts unsigned integers and separator runs from a byte source.
///
/// Only the space (`0x20`) and newline (`0x0A`) bytes count as separators.
///
/// # Examples
/// ```
/// use widepath_core::Tokenizer;
///
/// let mut tokenizer = Tokenizer::new(&b"12 34\n"[..]);
/// assert_eq!(tokenizer.read_unsigned()?, 12);
/// tokenizer.skip_separators()?;
/// assert_eq!(tokenizer.read_unsigned()?, 34);
/// tokenizer.skip_separators()?;
/// assert!(tokenizer.is_exhausted());
/// # Ok::<(), std::io::Error>(())
/// ```
#[derive(Debug)]
pub struct Tokenizer<R> {
    source: R,
    buffer: Box<[u8]>,
    cursor: usize,
    end: usize,
    consumed: u64,
    source_done: bool,
}

impl<R: Read> Tokenizer<R> {
    /// Creates a tokenizer with the [`DEFAULT_READ_BUFFER_SIZE`].
    #[must_use]
    pub fn new(source: R) -> Self {
        Self::with_capacity(source, DEFAULT_READ_BUFFER_SIZE)
    }

    /// Creates a tokenizer whose read buffer holds `capacity` bytes.
    #[must_use]
    pub fn with_capacity(source: R, capacity: NonZeroUsize) -> Self {
        Self {
            source,
            buffer: vec![0; capacity.get()].into_boxed_slice(),
            cursor: 0,
            end: 0,
            consumed: 0,
            source_done: false,
        }
    }

    /// Returns the capacity of the read buffer in bytes.
    #[must_use]
    #[rustfmt::skip]
    pub fn capacity(&self) -> usize { self.buffer.len() }

    /// Returns `true` once the source has reported end of stream and every
    /// buffered byte has been consumed.
    #[must_use]
    pub fn is_exhausted(&self) -> bool {
        self.source_done && self.cursor == self.end
    }

    /// Returns the number of bytes consumed so far.
    ///
    /// A call that leaves this unchanged made no progress through the input.
    #[must_use]
    #[rustfmt::skip]
    pub const fn consumed(&self) -> u64 { self.consumed }

    /// Consumes the tokenizer, returning the underlying source.
    pub fn into_inner(self) -> R {
        self.source
    }

    /// Reads consecutive decimal digits starting at the cursor.
    ///
    /// Stops at the first non-digit byte without consuming it. When no digit
    /// is available the result is `0`. Digit runs too long for a `u64`
    /// saturate at [`u64::MAX`].
    ///
    /// # Errors
    /// Returns any I/O error raised by the source other than
    /// [`ErrorKind::Interrupted`].
    pub fn read_unsigned(&mut self) -> io::Result<u64> {
        let mut value = 0u64;
        loop {
            while self.cursor < self.end {
                let byte = self.buffer[self.cursor];
                if !byte.is_ascii_digit() {
                    return Ok(value);
                }
                value = value
                    .saturating_mul(10)
                    .saturating_add(u64::from(byte - b'0'));
                self.advance();
            }
            if !self.refill()? {
                return Ok(value);
            }
        }
    }

    /// Consumes consecutive space and newline bytes.
    ///
    /// # Errors
    /// Returns any I/O error raised by the source other than
    /// [`ErrorKind::Interrupted`].
    pub fn skip_separators(&mut self) -> io::Result<()> {
        loop {
            while self.cursor < self.end {
                let byte = self.buffer[self.cursor];
                if byte != b' ' && byte != b'\n' {
                    return Ok(());
                }
                self.advance();
            }
            if !self.refill()? {
                return Ok(());
            }
        }
    }

    fn advance(&mut self) {
        self.cursor += 1;
        self.consumed += 1;
    }

    /// Replaces the buffer contents with the next chunk of the source.
    ///
    /// Returns `false` at end of stream. A short read is accepted as-is.
    fn refill(&mut self) -> io::Result<bool> {
        self.cursor = 0;
        self.end = 0;
        if self.source_done {
            return Ok(false);
        }
        loop {
            match self.source.read(&mut self.buffer) {
                Ok(0) => {
                    self.source_done = true;
                    return Ok(false);
                }
                Ok(len) => {
                    self.end = len;
                    return Ok(true);
                }
                Err(err) if err.kind() == ErrorKind::Interrupted => {}
                Err(err) => return Err(err),
            }
        }
    }
}
