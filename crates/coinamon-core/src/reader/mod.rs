//! Sequential reader for Bitcoin wire-format binary data.
//!
//! Provides `BinReader`, a forward-only cursor over an immutable byte
//! buffer that decodes little-endian fixed-width integers, CompactSize
//! variable-length integers, and raw or byte-reversed spans (hash fields
//! are stored on the wire in reversed byte order). Every read is strictly
//! bounds checked and advances the cursor; a read past the end fails with
//! `CoreError::OutOfBounds` instead of truncating.
//!
//! `CompactUint` is the encode-side counterpart for CompactSize values.

use crate::CoreError;

// ---------------------------------------------------------------------------
// CompactUint
// ---------------------------------------------------------------------------

/// A Bitcoin CompactSize variable-length unsigned integer.
///
/// Used in wire data to carry field counts and lengths. The encoding is a
/// one-byte width tag: values up to 252 are the tag itself; 0xfd, 0xfe,
/// and 0xff select a following little-endian u16, u32, or u64.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CompactUint(pub u64);

impl CompactUint {
    /// Return the wire-format byte length of this value.
    ///
    /// # Returns
    /// 1, 3, 5, or 9 depending on the value.
    pub fn length(&self) -> usize {
        if self.0 <= 252 {
            1
        } else if self.0 <= 0xffff {
            3
        } else if self.0 <= 0xffff_ffff {
            5
        } else {
            9
        }
    }

    /// Encode the value into a new byte vector.
    ///
    /// # Returns
    /// A `Vec<u8>` of `self.length()` bytes: the width tag followed by
    /// the little-endian payload, if any.
    pub fn to_bytes(&self) -> Vec<u8> {
        let v = self.0;
        let mut buf = Vec::with_capacity(self.length());
        if v <= 252 {
            buf.push(v as u8);
        } else if v <= 0xffff {
            buf.push(0xfd);
            buf.extend_from_slice(&(v as u16).to_le_bytes());
        } else if v <= 0xffff_ffff {
            buf.push(0xfe);
            buf.extend_from_slice(&(v as u32).to_le_bytes());
        } else {
            buf.push(0xff);
            buf.extend_from_slice(&v.to_le_bytes());
        }
        buf
    }

    /// Return the underlying u64 value.
    ///
    /// # Returns
    /// The integer value.
    pub fn value(&self) -> u64 {
        self.0
    }
}

impl From<u64> for CompactUint {
    fn from(v: u64) -> Self {
        CompactUint(v)
    }
}

impl From<usize> for CompactUint {
    fn from(v: usize) -> Self {
        CompactUint(v as u64)
    }
}

// ---------------------------------------------------------------------------
// BinReader
// ---------------------------------------------------------------------------

/// A cursor-based reader over an immutable byte buffer.
///
/// Maintains an offset into the buffer; every read operation decodes at
/// the current offset and advances by the number of bytes consumed. The
/// offset never exceeds the buffer length. After a failed read the reader
/// should not be reused without re-validating its state.
pub struct BinReader<'a> {
    buffer: &'a [u8],
    offset: usize,
}

impl<'a> BinReader<'a> {
    /// Create a new reader over the given byte buffer.
    ///
    /// # Arguments
    /// * `buffer` - The byte slice to read from.
    ///
    /// # Returns
    /// A `BinReader` positioned at the start of the buffer.
    pub fn new(buffer: &'a [u8]) -> Self {
        BinReader { buffer, offset: 0 }
    }

    /// Create a new reader positioned at `offset`.
    ///
    /// # Arguments
    /// * `buffer` - The byte slice to read from.
    /// * `offset` - The position to start reading from; an offset past
    ///   the end of the buffer yields an exhausted reader.
    ///
    /// # Returns
    /// A `BinReader` positioned at `offset`.
    pub fn with_offset(buffer: &'a [u8], offset: usize) -> Self {
        BinReader {
            buffer,
            offset: offset.min(buffer.len()),
        }
    }

    /// Read `count` bytes verbatim and advance the offset.
    ///
    /// `count = 0` is legal and returns an empty slice.
    ///
    /// # Arguments
    /// * `count` - The number of bytes to read.
    ///
    /// # Returns
    /// A byte slice of length `count`, or `CoreError::OutOfBounds` if
    /// fewer bytes remain; the offset is left unchanged in that case.
    pub fn read_bytes(&mut self, count: usize) -> Result<&'a [u8], CoreError> {
        let remaining = self.remaining_length();
        if count > remaining {
            return Err(CoreError::OutOfBounds {
                needed: count,
                remaining,
            });
        }
        let slice = &self.buffer[self.offset..self.offset + count];
        self.offset += count;
        Ok(slice)
    }

    /// Read `count` bytes with the byte order reversed.
    ///
    /// Converts wire-stored little-endian hash fields into conventional
    /// big-endian display order. Advances the offset by `count` exactly as
    /// `read_bytes` does.
    ///
    /// # Arguments
    /// * `count` - The number of bytes to read.
    ///
    /// # Returns
    /// The next `count` bytes in reversed order, or an error if
    /// insufficient bytes remain.
    pub fn read_bytes_reversed(&mut self, count: usize) -> Result<Vec<u8>, CoreError> {
        let mut bytes = self.read_bytes(count)?.to_vec();
        bytes.reverse();
        Ok(bytes)
    }

    /// Read `count` bytes rendered as lowercase hexadecimal text.
    ///
    /// # Arguments
    /// * `count` - The number of bytes to read.
    ///
    /// # Returns
    /// A hex string of `2 * count` characters, or an error if
    /// insufficient bytes remain.
    pub fn read_hex(&mut self, count: usize) -> Result<String, CoreError> {
        Ok(hex::encode(self.read_bytes(count)?))
    }

    /// Read `count` bytes in reversed order rendered as lowercase
    /// hexadecimal text.
    ///
    /// # Arguments
    /// * `count` - The number of bytes to read.
    ///
    /// # Returns
    /// A hex string of `2 * count` characters in display order, or an
    /// error if insufficient bytes remain.
    pub fn read_hex_reversed(&mut self, count: usize) -> Result<String, CoreError> {
        Ok(hex::encode(self.read_bytes_reversed(count)?))
    }

    /// Read a single unsigned byte.
    ///
    /// # Returns
    /// A value in range [0, 255], or an error if no bytes remain.
    pub fn read_byte(&mut self) -> Result<u8, CoreError> {
        Ok(self.read_bytes(1)?[0])
    }

    /// Read an 8-bit unsigned integer. Alias of `read_byte`.
    ///
    /// # Returns
    /// A value in range [0, 255], or an error if no bytes remain.
    pub fn read_uint8(&mut self) -> Result<u8, CoreError> {
        self.read_byte()
    }

    /// Read an 8-bit signed integer.
    ///
    /// # Returns
    /// A value in range [-128, 127], or an error if no bytes remain.
    pub fn read_int8(&mut self) -> Result<i8, CoreError> {
        Ok(self.read_byte()? as i8)
    }

    /// Read a little-endian 16-bit unsigned integer.
    ///
    /// # Returns
    /// The decoded u16, or an error if fewer than 2 bytes remain.
    pub fn read_uint16(&mut self) -> Result<u16, CoreError> {
        let bytes = self.read_bytes(2)?;
        Ok(u16::from_le_bytes([bytes[0], bytes[1]]))
    }

    /// Read a little-endian 16-bit signed integer.
    ///
    /// # Returns
    /// The decoded i16, or an error if fewer than 2 bytes remain.
    pub fn read_int16(&mut self) -> Result<i16, CoreError> {
        let bytes = self.read_bytes(2)?;
        Ok(i16::from_le_bytes([bytes[0], bytes[1]]))
    }

    /// Read a little-endian 32-bit unsigned integer.
    ///
    /// # Returns
    /// The decoded u32, or an error if fewer than 4 bytes remain.
    pub fn read_uint32(&mut self) -> Result<u32, CoreError> {
        let bytes = self.read_bytes(4)?;
        Ok(u32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]))
    }

    /// Read a little-endian 32-bit signed integer.
    ///
    /// # Returns
    /// The decoded i32, or an error if fewer than 4 bytes remain.
    pub fn read_int32(&mut self) -> Result<i32, CoreError> {
        let bytes = self.read_bytes(4)?;
        Ok(i32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]))
    }

    /// Read a little-endian 64-bit unsigned integer.
    ///
    /// # Returns
    /// The decoded u64, or an error if fewer than 8 bytes remain.
    pub fn read_uint64(&mut self) -> Result<u64, CoreError> {
        let bytes = self.read_bytes(8)?;
        Ok(u64::from_le_bytes([
            bytes[0], bytes[1], bytes[2], bytes[3], bytes[4], bytes[5], bytes[6], bytes[7],
        ]))
    }

    /// Read a little-endian 64-bit signed integer.
    ///
    /// # Returns
    /// The decoded i64, or an error if fewer than 8 bytes remain.
    pub fn read_int64(&mut self) -> Result<i64, CoreError> {
        let bytes = self.read_bytes(8)?;
        Ok(i64::from_le_bytes([
            bytes[0], bytes[1], bytes[2], bytes[3], bytes[4], bytes[5], bytes[6], bytes[7],
        ]))
    }

    /// Read a Bitcoin CompactSize unsigned integer.
    ///
    /// Reads one prefix byte; values up to 252 are returned directly,
    /// while 0xfd, 0xfe, and 0xff select a following little-endian u16,
    /// u32, or u64 payload.
    ///
    /// # Returns
    /// The decoded value, or `CoreError::OutOfBounds` if the prefix or
    /// its payload is truncated.
    pub fn read_compact_uint(&mut self) -> Result<u64, CoreError> {
        match self.read_uint8()? {
            0xff => self.read_uint64(),
            0xfe => Ok(u64::from(self.read_uint32()?)),
            0xfd => Ok(u64::from(self.read_uint16()?)),
            prefix => Ok(u64::from(prefix)),
        }
    }

    /// Return the number of unread bytes.
    ///
    /// # Returns
    /// The count of bytes between the offset and the end of the buffer;
    /// never negative.
    pub fn remaining_length(&self) -> usize {
        self.buffer.len() - self.offset
    }

    /// Check whether every byte of the buffer has been consumed.
    ///
    /// # Returns
    /// `true` iff `remaining_length()` is zero.
    pub fn is_exhausted(&self) -> bool {
        self.remaining_length() == 0
    }
}
