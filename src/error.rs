//! Error types for the film highlight-event parser.
//!
//! This module defines the error hierarchy for all failure cases during
//! film-chunk decoding: I/O errors, decompression failures, truncated
//! reads, malformed event records, and unclassifiable event types.

use thiserror::Error;

/// The main error type for film-chunk parsing operations.
///
/// This enum covers all error cases that can occur while decoding a
/// highlight-events film chunk:
/// - File I/O failures (debug tooling and helpers)
/// - Zlib decompression failures on the raw chunk payload
/// - Truncated or incomplete data
/// - Structurally malformed event records
/// - Event type bytes outside the known classification set
///
/// # Example
///
/// ```
/// use film_parser::error::{FilmError, Result};
///
/// fn example_operation() -> Result<()> {
///     // Operations that may fail return Result<T>
///     Err(FilmError::InvalidRecord {
///         offset: 128,
///         reason: "record end marker not found".to_string(),
///     })
/// }
/// ```
#[derive(Error, Debug)]
pub enum FilmError {
    /// An I/O error occurred while reading a chunk file.
    ///
    /// This wraps standard library I/O errors for seamless error propagation
    /// using the `?` operator.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Decompression of the raw chunk payload failed.
    ///
    /// Film chunks are delivered zlib-compressed. This error occurs when
    /// the compressed payload is corrupted or uses an unsupported
    /// compression method.
    #[error("Decompression failed: {reason}")]
    Decompression {
        /// A description of the decompression failure.
        reason: String,
    },

    /// The data ended before the required bytes could be read.
    ///
    /// This typically indicates a truncated chunk.
    #[error("Unexpected end of data: expected {expected} bytes, but only {available} available")]
    UnexpectedEof {
        /// The number of bytes that were expected to be available.
        expected: usize,
        /// The actual number of bytes available.
        available: usize,
    },

    /// An event record at the given offset violated the expected layout.
    ///
    /// Returned when the record-end marker cannot be found within the
    /// search window, or the fixed field region cannot be unpacked. There
    /// is no partial-record recovery; decoding of the chunk stops here.
    #[error("Invalid event record at offset {offset}: {reason}")]
    InvalidRecord {
        /// Byte offset of the record's anchor point in the decompressed data.
        offset: usize,
        /// A description of the layout violation.
        reason: String,
    },

    /// The type-hint / medal-flag combination matched no known event kind.
    ///
    /// This signals either drift in the binary format (new game build) or
    /// a false-positive anchor. It is deliberately fatal: silently
    /// defaulting the kind would corrupt downstream aggregate counts.
    #[error(
        "Unknown event type: hint 0x{type_hint:02X} with medal flag {is_medal} \
         matches no known classification"
    )]
    UnknownEventType {
        /// The raw type-hint byte read from the record.
        type_hint: u8,
        /// The raw medal-flag state read from the record.
        is_medal: bool,
    },
}

impl FilmError {
    /// Creates an `UnexpectedEof` error with the given sizes.
    ///
    /// # Arguments
    ///
    /// * `expected` - The number of bytes that were needed
    /// * `available` - The number of bytes actually available
    #[must_use]
    pub fn unexpected_eof(expected: usize, available: usize) -> Self {
        FilmError::UnexpectedEof {
            expected,
            available,
        }
    }

    /// Creates an `InvalidRecord` error for the record anchored at `offset`.
    #[must_use]
    pub fn invalid_record(offset: usize, reason: impl Into<String>) -> Self {
        FilmError::InvalidRecord {
            offset,
            reason: reason.into(),
        }
    }
}

/// A specialized Result type for film parsing operations.
///
/// This is a convenience alias that uses `FilmError` as the error type.
pub type Result<T> = std::result::Result<T, FilmError>;
