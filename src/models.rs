//! Core data structures for sample processing.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One parsed data line
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    pub name: String,
    pub age: u32,
    pub height: u32,

    /// Set when the name was cut to fit the configured name capacity
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub name_truncated: bool,
}

impl Person {
    pub fn new(name: impl Into<String>, age: u32, height: u32) -> Self {
        Self {
            name: name.into(),
            age,
            height,
            name_truncated: false,
        }
    }
}

impl fmt::Display for Person {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "name: {}, age: {}, height: {}",
            self.name, self.age, self.height
        )
    }
}
