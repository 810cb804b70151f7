//! Text rendering for the bottleneck table.
//!
//! Each cell is converted two decimal digits at a time through a
//! compile-time pair table, appended to a buffer sized for the worst case up
//! front, and the whole buffer is handed to the sink in one write.

use std::io::{self, ErrorKind, Write};

use thiserror::Error;
use tracing::{debug, instrument};

use crate::{error::define_error_codes, table::BottleneckTable};

/// Upper bound on the bytes one cell occupies: a sign, ten digits and the
/// trailing separator.
pub const MAX_FORMATTED_LEN: usize = 12;

/// `"00"` to `"99"` laid end to end.
static DIGIT_PAIRS: [u8; 200] = build_digit_pairs();

const fn build_digit_pairs() -> [u8; 200] {
    let mut pairs = [0u8; 200];
    let mut value = 0;
    while value < 100 {
        pairs[value * 2] = b'0' + (value / 10) as u8;
        pairs[value * 2 + 1] = b'0' + (value % 10) as u8;
        value += 1;
    }
    pairs
}

/// Errors raised while rendering or flushing a [`BottleneckTable`].
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum SerializeError {
    /// The worst-case output size does not fit in memory.
    #[error("output for {node_count} nodes exceeds the addressable buffer size")]
    OutputTooLarge {
        /// Node count of the table being rendered.
        node_count: usize,
    },
    /// The sink accepted fewer bytes than the rendered table holds.
    #[error("short write: sink accepted {written} of {expected} bytes")]
    ShortWrite {
        /// Bytes the sink reported as written.
        written: usize,
        /// Bytes in the rendered table.
        expected: usize,
    },
    /// The sink failed.
    #[error("failed to write bottleneck table: {source}")]
    Io {
        /// Underlying I/O failure.
        #[source]
        source: io::Error,
    },
}

define_error_codes! {
    /// Stable codes describing [`SerializeError`] variants.
    enum SerializeErrorCode for SerializeError {
        /// The worst-case output size does not fit in memory.
        OutputTooLarge => OutputTooLarge { .. } => "SERIALIZE_OUTPUT_TOO_LARGE",
        /// The sink accepted fewer bytes than the rendered table holds.
        ShortWrite => ShortWrite { .. } => "SERIALIZE_SHORT_WRITE",
        /// The sink failed.
        Io => Io { .. } => "SERIALIZE_IO_FAILURE",
    }
}

/// Appends the decimal text of `value` to `out`.
///
/// # Examples
/// ```
/// use widepath_core::format_integer;
///
/// let mut out = Vec::new();
/// format_integer(-1, &mut out);
/// out.push(b' ');
/// format_integer(2_147_483_647, &mut out);
/// assert_eq!(out, b"-1 2147483647");
/// ```
pub fn format_integer(value: i32, out: &mut Vec<u8>) {
    if value < 0 {
        out.push(b'-');
    }
    let mut magnitude = value.unsigned_abs();

    let mut scratch = [0u8; 10];
    let mut start = scratch.len();
    while magnitude >= 100 {
        let pair = (magnitude % 100) as usize * 2;
        magnitude /= 100;
        start -= 2;
        scratch[start..start + 2].copy_from_slice(&DIGIT_PAIRS[pair..pair + 2]);
    }
    if magnitude >= 10 {
        let pair = magnitude as usize * 2;
        start -= 2;
        scratch[start..start + 2].copy_from_slice(&DIGIT_PAIRS[pair..pair + 2]);
    } else {
        start -= 1;
        scratch[start] = b'0' + magnitude as u8;
    }
    out.extend_from_slice(&scratch[start..]);
}

/// Renders the table as `node_count` lines of space-separated integers.
///
/// # Errors
/// Returns [`SerializeError::OutputTooLarge`] when the worst-case buffer
/// size overflows `usize`.
///
/// # Examples
/// ```
/// use widepath_core::{EdgeWeightGraph, encode_table, maximum_spanning_forest};
///
/// let graph = EdgeWeightGraph::from_triples(2, [(0, 1, 7)])?;
/// let table = maximum_spanning_forest(&graph)?.bottlenecks()?;
/// assert_eq!(encode_table(&table)?, b"0 7\n7 0\n");
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub fn encode_table(table: &BottleneckTable) -> Result<Vec<u8>, SerializeError> {
    let node_count = table.node_count();
    let capacity = node_count
        .checked_mul(node_count)
        .and_then(|cells| cells.checked_mul(MAX_FORMATTED_LEN))
        .ok_or(SerializeError::OutputTooLarge { node_count })?;

    let mut out = Vec::with_capacity(capacity);
    for row in table.rows() {
        let mut cells = row.iter();
        if let Some(&first) = cells.next() {
            format_integer(first, &mut out);
        }
        for &cell in cells {
            out.push(b' ');
            format_integer(cell, &mut out);
        }
        if !row.is_empty() {
            out.push(b'\n');
        }
    }
    Ok(out)
}

/// Renders the table and hands it to `sink` in a single write.
///
/// Returns the number of bytes written. A sink that accepts only part of
/// the buffer is not retried.
///
/// # Errors
/// Returns [`SerializeError::ShortWrite`] when the sink accepts fewer bytes
/// than were rendered, [`SerializeError::Io`] when it fails outright, and
/// [`SerializeError::OutputTooLarge`] as for [`encode_table`].
#[instrument(
    name = "core.serialize",
    err,
    skip(table, sink),
    fields(nodes = table.node_count(), bytes = tracing::field::Empty),
)]
pub fn write_table(table: &BottleneckTable, mut sink: impl Write) -> Result<usize, SerializeError> {
    let encoded = encode_table(table)?;
    let expected = encoded.len();
    tracing::Span::current().record("bytes", expected);
    if expected == 0 {
        return Ok(0);
    }

    let written = loop {
        match sink.write(&encoded) {
            Err(err) if err.kind() == ErrorKind::Interrupted => {}
            result => break result.map_err(|source| SerializeError::Io { source })?,
        }
    };
    if written != expected {
        return Err(SerializeError::ShortWrite { written, expected });
    }
    sink.flush().map_err(|source| SerializeError::Io { source })?;
    debug!(bytes = written, "bottleneck table written");
    Ok(written)
}
