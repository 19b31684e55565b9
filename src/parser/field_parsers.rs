//! Field decoding utilities
//!
//! Pure functions turning a [`FieldSlice`] into a typed value. Integer
//! literals are plain base-10 digits: no whitespace, no thousands separators,
//! and a sign only for [`parse_signed`].

use super::field_splitter::FieldSlice;
use crate::config::{IntegerOverflow, NameOverflow};
use crate::error::FieldError;

/// Name copied out of a field, with its truncation outcome
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedName {
    pub value: String,
    pub truncated: bool,
}

/// Copy a name field into owned storage of at most `capacity - 1` bytes
pub fn decode_name(
    field: &FieldSlice<'_>,
    capacity: usize,
    policy: NameOverflow,
) -> Result<DecodedName, FieldError> {
    let text = std::str::from_utf8(field.as_bytes()).map_err(|_| FieldError::InvalidUtf8)?;
    let max = capacity.saturating_sub(1);

    if text.len() <= max {
        return Ok(DecodedName {
            value: text.to_string(),
            truncated: false,
        });
    }

    match policy {
        NameOverflow::Reject => Err(FieldError::TooLong {
            len: text.len(),
            max,
        }),
        NameOverflow::Truncate => {
            let mut end = max;
            while !text.is_char_boundary(end) {
                end -= 1;
            }
            Ok(DecodedName {
                value: text[..end].to_string(),
                truncated: true,
            })
        }
    }
}

/// Parse an unsigned decimal literal
pub fn parse_unsigned(field: &FieldSlice<'_>, policy: IntegerOverflow) -> Result<u32, FieldError> {
    if field.is_empty() {
        return Err(FieldError::EmptyField);
    }
    accumulate_digits(field.as_bytes(), 0, policy)
}

/// Parse a decimal literal with an optional leading `-` or `+`
pub fn parse_signed(field: &FieldSlice<'_>, policy: IntegerOverflow) -> Result<i32, FieldError> {
    let bytes = field.as_bytes();
    let (negative, digits, offset) = match bytes.first() {
        None => return Err(FieldError::EmptyField),
        Some(b'-') => (true, &bytes[1..], 1),
        Some(b'+') => (false, &bytes[1..], 1),
        Some(_) => (false, bytes, 0),
    };

    if digits.is_empty() {
        return Err(FieldError::EmptyField);
    }

    // Saturated magnitudes are already outside the i32 range
    let magnitude = i64::from(accumulate_digits(digits, offset, IntegerOverflow::Saturate)?);
    let value = if negative { -magnitude } else { magnitude };

    match i32::try_from(value) {
        Ok(value) => Ok(value),
        Err(_) => match policy {
            IntegerOverflow::Fail => Err(FieldError::Overflow { bits: i32::BITS }),
            IntegerOverflow::Saturate if negative => Ok(i32::MIN),
            IntegerOverflow::Saturate => Ok(i32::MAX),
        },
    }
}

/// value = value * 10 + digit, left to right; `offset` shifts reported positions.
///
/// Every byte is checked before an overflow is reported, so a non-digit
/// anywhere in the field always yields [`FieldError::InvalidDigit`].
fn accumulate_digits(
    digits: &[u8],
    offset: usize,
    policy: IntegerOverflow,
) -> Result<u32, FieldError> {
    let mut value: Option<u32> = Some(0);

    for (i, &byte) in digits.iter().enumerate() {
        if !byte.is_ascii_digit() {
            return Err(FieldError::InvalidDigit {
                byte: byte as char,
                position: offset + i,
            });
        }
        value = value
            .and_then(|v| v.checked_mul(10))
            .and_then(|v| v.checked_add(u32::from(byte - b'0')));
    }

    match (value, policy) {
        (Some(value), _) => Ok(value),
        (None, IntegerOverflow::Saturate) => Ok(u32::MAX),
        (None, IntegerOverflow::Fail) => Err(FieldError::Overflow { bits: u32::BITS }),
    }
}
