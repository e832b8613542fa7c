//! Character packing for unsigned values.
//!
//! # Wire format
//!
//! ```text
//! value -> 5-bit groups, least significant first
//! every group but the last: 0x20 | group
//! every byte: + 63           -> '?' (63) ..= '~' (126)
//! ```
//!
//! A value ends at the first byte without the `0x20` bit.

use crate::error::{CodecError, Malformed};

const OFFSET: u8 = 63;
const CONTINUATION: u64 = 0x20;
const GROUP_MASK: u64 = 0x1f;
const GROUP_BITS: u32 = 5;

/// Append the characters for `u` to `out`.
pub fn pack(mut u: u64, out: &mut String) {
    while u >= CONTINUATION {
        out.push(char::from((CONTINUATION | (u & GROUP_MASK)) as u8 + OFFSET));
        u >>= GROUP_BITS;
    }
    out.push(char::from(u as u8 + OFFSET));
}

/// Iterator over the unsigned values packed in a string.
///
/// Yields `(offset, value)` where `offset` is the byte index the value
/// starts at. Stops after the first error.
#[derive(Debug, Clone)]
pub struct Unpacker<'a> {
    bytes: &'a [u8],
    pos: usize,
    failed: bool,
}

impl<'a> Unpacker<'a> {
    /// Creates an unpacker over the bytes of `text`.
    pub fn new(text: &'a str) -> Self {
        Self {
            bytes: text.as_bytes(),
            pos: 0,
            failed: false,
        }
    }

    /// Byte offset of the next unread character.
    pub fn position(&self) -> usize {
        self.pos
    }

    fn next_value(&mut self) -> Result<(usize, u64), CodecError> {
        let start = self.pos;
        let malformed = |kind| CodecError::MalformedEncoding {
            offset: start,
            kind,
        };

        let mut value: u64 = 0;
        let mut shift: u32 = 0;
        loop {
            let Some(&byte) = self.bytes.get(self.pos) else {
                return Err(malformed(Malformed::Truncated));
            };
            if !(OFFSET..=OFFSET + 0x3f).contains(&byte) {
                // Report the full character, not a lone UTF-8 continuation byte.
                let c = std::str::from_utf8(&self.bytes[self.pos..])
                    .ok()
                    .and_then(|rest| rest.chars().next())
                    .unwrap_or(char::REPLACEMENT_CHARACTER);
                return Err(malformed(Malformed::InvalidCharacter(c)));
            }
            self.pos += 1;

            let group = u64::from(byte - OFFSET);
            let bits = group & GROUP_MASK;
            if shift >= u64::BITS || (shift > 0 && bits >> (u64::BITS - shift) != 0) {
                return Err(malformed(Malformed::Overflow));
            }
            value |= bits << shift;
            shift += GROUP_BITS;

            if group & CONTINUATION == 0 {
                return Ok((start, value));
            }
        }
    }
}

impl Iterator for Unpacker<'_> {
    type Item = Result<(usize, u64), CodecError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed || self.pos >= self.bytes.len() {
            return None;
        }
        let item = self.next_value();
        self.failed = item.is_err();
        Some(item)
    }
}

impl std::iter::FusedIterator for Unpacker<'_> {}
