//! Record assembly from split fields
//!
//! Pulls name, age and height from a [`FieldSplitter`] in that order and
//! builds a [`Person`]. Any further fields on the line are ignored, but a
//! line cut at the buffer capacity is rejected even when the cut falls past
//! the height field.

use super::field_parsers::{decode_name, parse_unsigned};
use super::field_splitter::{FieldSlice, FieldSplitter};
use crate::config::ReaderConfig;
use crate::constants::fields;
use crate::error::RowError;
use crate::models::Person;

/// Assemble one record from the fields of a line
pub fn parse_person_record(
    splitter: &mut FieldSplitter<'_>,
    config: &ReaderConfig,
) -> Result<Person, RowError> {
    let name_field = require_field(splitter, fields::NAME)?;
    let name = decode_name(&name_field, config.name_capacity, config.name_overflow)
        .map_err(|e| RowError::invalid(fields::NAME, name_field.as_bytes(), e))?;

    let age = parse_count_field(splitter, fields::AGE, config)?;
    let height = parse_count_field(splitter, fields::HEIGHT, config)?;
    splitter.ensure_complete()?;

    Ok(Person {
        name: name.value,
        age,
        height,
        name_truncated: name.truncated,
    })
}

/// Next field or a [`RowError::MissingField`] naming it
fn require_field<'a>(
    splitter: &mut FieldSplitter<'a>,
    field: &'static str,
) -> Result<FieldSlice<'a>, RowError> {
    splitter.next_field()?.ok_or(RowError::missing(field))
}

fn parse_count_field(
    splitter: &mut FieldSplitter<'_>,
    field: &'static str,
    config: &ReaderConfig,
) -> Result<u32, RowError> {
    let slice = require_field(splitter, field)?;
    parse_unsigned(&slice, config.integer_overflow)
        .map_err(|e| RowError::invalid(field, slice.as_bytes(), e))
}
