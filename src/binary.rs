//! Binary reading utilities for decompressed film-chunk data.
//!
//! This module provides functions for reading little-endian integers,
//! byte slices, and fixed-width UTF-16LE strings from byte buffers. All
//! functions perform bounds checking and return appropriate errors for
//! truncated or malformed data.
//!
//! # Endianness
//!
//! Film chunks store all multi-byte integers in little-endian byte order,
//! and display names as fixed-width UTF-16LE fields padded with null code
//! units. The functions in this module handle both conversions.
//!
//! # Example
//!
//! ```
//! use film_parser::binary::{read_u32_le, read_u64_le, read_utf16_string};
//!
//! let data = [0x26, 0x89, 0x01, 0x00, 0x00, 0x00, 0x00, 0x00];
//!
//! // Read a little-endian u32 at offset 0
//! assert_eq!(read_u32_le(&data, 0).unwrap(), 100_646);
//!
//! // Read a little-endian u64 at offset 0
//! assert_eq!(read_u64_le(&data, 0).unwrap(), 100_646);
//!
//! // Read a null-padded UTF-16LE string
//! let name = [b'H', 0x00, b'i', 0x00, 0x00, 0x00, 0x00, 0x00];
//! assert_eq!(read_utf16_string(&name, 0, 8).unwrap(), "Hi");
//! ```

use crate::error::{FilmError, Result};

/// Reads a little-endian u32 value from the byte buffer at the given offset.
///
/// # Arguments
///
/// * `bytes` - The byte buffer to read from
/// * `offset` - The byte offset where the u32 starts
///
/// # Errors
///
/// Returns `FilmError::UnexpectedEof` if the buffer doesn't contain
/// at least 4 bytes starting from the given offset.
///
/// # Example
///
/// ```
/// use film_parser::binary::read_u32_le;
///
/// let data = [0x78, 0x56, 0x34, 0x12];
/// assert_eq!(read_u32_le(&data, 0).unwrap(), 0x12345678);
/// ```
pub fn read_u32_le(bytes: &[u8], offset: usize) -> Result<u32> {
    const SIZE: usize = 4;

    if offset + SIZE > bytes.len() {
        return Err(FilmError::unexpected_eof(offset + SIZE, bytes.len()));
    }

    let slice = &bytes[offset..offset + SIZE];
    Ok(u32::from_le_bytes([slice[0], slice[1], slice[2], slice[3]]))
}

/// Reads a little-endian u64 value from the byte buffer at the given offset.
///
/// Player identifiers in the highlight-event stream are stored as 64-bit
/// little-endian integers.
///
/// # Arguments
///
/// * `bytes` - The byte buffer to read from
/// * `offset` - The byte offset where the u64 starts
///
/// # Errors
///
/// Returns `FilmError::UnexpectedEof` if the buffer doesn't contain
/// at least 8 bytes starting from the given offset.
///
/// # Example
///
/// ```
/// use film_parser::binary::read_u64_le;
///
/// let data = 2_533_274_823_140_000u64.to_le_bytes();
/// assert_eq!(read_u64_le(&data, 0).unwrap(), 2_533_274_823_140_000);
/// ```
pub fn read_u64_le(bytes: &[u8], offset: usize) -> Result<u64> {
    const SIZE: usize = 8;

    if offset + SIZE > bytes.len() {
        return Err(FilmError::unexpected_eof(offset + SIZE, bytes.len()));
    }

    let mut buf = [0u8; SIZE];
    buf.copy_from_slice(&bytes[offset..offset + SIZE]);
    Ok(u64::from_le_bytes(buf))
}

/// Reads a slice of bytes from the buffer at the given offset.
///
/// # Arguments
///
/// * `bytes` - The byte buffer to read from
/// * `offset` - The byte offset where the slice starts
/// * `len` - The number of bytes to read
///
/// # Errors
///
/// Returns `FilmError::UnexpectedEof` if the buffer doesn't contain
/// at least `len` bytes starting from the given offset.
///
/// # Example
///
/// ```
/// use film_parser::binary::read_bytes;
///
/// let data = b"\x2E\x09\x01\x64rest";
/// let marker = read_bytes(data, 0, 4).unwrap();
/// assert_eq!(marker, b"\x2E\x09\x01\x64");
/// ```
pub fn read_bytes(bytes: &[u8], offset: usize, len: usize) -> Result<&[u8]> {
    if offset + len > bytes.len() {
        return Err(FilmError::unexpected_eof(offset + len, bytes.len()));
    }

    Ok(&bytes[offset..offset + len])
}

/// Reads a fixed-width UTF-16LE string field, stripping null padding.
///
/// Display-name fields in the highlight-event stream are fixed-size blocks
/// of UTF-16LE code units padded with nulls. The field is decoded up to the
/// first null code unit; trailing padding is not included in the result.
///
/// # Arguments
///
/// * `bytes` - The byte buffer to read from
/// * `offset` - The byte offset where the field starts
/// * `len` - The exact byte length of the fixed field (must be even)
///
/// # Errors
///
/// - Returns `FilmError::UnexpectedEof` if offset + len is beyond the buffer
/// - Returns `FilmError::InvalidRecord` if `len` is odd or the code units
///   are not valid UTF-16
///
/// # Example
///
/// ```
/// use film_parser::binary::read_utf16_string;
///
/// let data = [b'O', 0x00, b'K', 0x00, 0x00, 0x00, 0x00, 0x00];
/// assert_eq!(read_utf16_string(&data, 0, 8).unwrap(), "OK");
/// ```
pub fn read_utf16_string(bytes: &[u8], offset: usize, len: usize) -> Result<String> {
    if len % 2 != 0 {
        return Err(FilmError::invalid_record(
            offset,
            format!("UTF-16 field length {len} is not a multiple of 2"),
        ));
    }

    let slice = read_bytes(bytes, offset, len)?;

    let units: Vec<u16> = slice
        .chunks_exact(2)
        .map(|pair| u16::from_le_bytes([pair[0], pair[1]]))
        .collect();

    // The field is null-padded; decode only up to the first null code unit.
    let string_len = units.iter().position(|&u| u == 0).unwrap_or(units.len());

    String::from_utf16(&units[..string_len]).map_err(|e| {
        FilmError::invalid_record(offset, format!("invalid UTF-16 display name: {e}"))
    })
}
