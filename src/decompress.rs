//! Decompression for raw film-chunk payloads.
//!
//! Film chunks are delivered as zlib-compressed blobs. The highlight
//! decoder itself operates on decompressed bytes only; this module is a
//! convenience for callers that hold the raw payload and want a single
//! call to inflate it.
//!
//! # Example
//!
//! ```no_run
//! use film_parser::decompress::decompress_chunk;
//!
//! let raw = std::fs::read("chunk.bin").unwrap();
//! let data = decompress_chunk(&raw).unwrap();
//! println!("Decompressed {} bytes", data.len());
//! ```

use std::io::Read;

use flate2::read::ZlibDecoder;

use crate::error::{FilmError, Result};

/// Decompresses a raw film-chunk payload (single zlib stream).
///
/// # Arguments
///
/// * `raw` - The compressed chunk payload as downloaded
///
/// # Returns
///
/// A `Vec<u8>` containing the decompressed chunk data.
///
/// # Errors
///
/// Returns `FilmError::Decompression` if the payload is not a valid
/// zlib stream.
///
/// # Example
///
/// ```
/// use film_parser::decompress::decompress_chunk;
///
/// // "Test" compressed with zlib
/// let raw: &[u8] = &[
///     0x78, 0x9C, 0x0B, 0x49, 0x2D, 0x2E, 0x01, 0x00, 0x03, 0xDD, 0x01, 0xA1,
/// ];
/// assert_eq!(decompress_chunk(raw).unwrap(), b"Test");
/// ```
pub fn decompress_chunk(raw: &[u8]) -> Result<Vec<u8>> {
    let mut decoder = ZlibDecoder::new(raw);
    let mut result = Vec::new();

    decoder
        .read_to_end(&mut result)
        .map_err(|e| FilmError::Decompression {
            reason: format!("zlib inflate failed: {e}"),
        })?;

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// "Test" compressed with zlib (12 bytes).
    const TEST_ZLIB: &[u8] = &[
        0x78, 0x9C, 0x0B, 0x49, 0x2D, 0x2E, 0x01, 0x00, 0x03, 0xDD, 0x01, 0xA1,
    ];

    #[test]
    fn test_decompress_chunk_known_stream() {
        let result = decompress_chunk(TEST_ZLIB).unwrap();
        assert_eq!(result, b"Test");
    }

    #[test]
    fn test_decompress_chunk_round_trip() {
        use flate2::write::ZlibEncoder;
        use flate2::Compression;
        use std::io::Write;

        let payload: Vec<u8> = (0..=255u8).cycle().take(4096).collect();
        let mut encoder = ZlibEncoder::new(Vec::new(), Compression::default());
        encoder.write_all(&payload).unwrap();
        let compressed = encoder.finish().unwrap();

        assert_eq!(decompress_chunk(&compressed).unwrap(), payload);
    }

    #[test]
    fn test_decompress_chunk_invalid_stream() {
        let garbage = [0xDE, 0xAD, 0xBE, 0xEF];
        let result = decompress_chunk(&garbage);
        assert!(matches!(result, Err(FilmError::Decompression { .. })));
    }

    #[test]
    fn test_decompress_chunk_empty_input() {
        // An empty buffer is not a valid zlib stream
        let result = decompress_chunk(&[]);
        assert!(matches!(result, Err(FilmError::Decompression { .. })));
    }
}
