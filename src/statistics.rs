//! Running statistics over accepted samples
//!
//! A monotonic fold: minima and maxima only widen, sums only grow and the
//! count only increments. The fold is order independent.

use crate::models::Person;
use serde::{Deserialize, Serialize};

/// Running min/max/sum for one numeric field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldStatistics {
    pub min: u32,
    pub max: u32,
    pub sum: u64,
}

impl Default for FieldStatistics {
    fn default() -> Self {
        Self {
            min: u32::MAX,
            max: u32::MIN,
            sum: 0,
        }
    }
}

impl FieldStatistics {
    fn update(&mut self, value: u32) {
        self.min = self.min.min(value);
        self.max = self.max.max(value);
        self.sum = self.sum.saturating_add(u64::from(value));
    }

    fn summarize(&self, count: usize) -> FieldSummary {
        FieldSummary {
            min: self.min,
            max: self.max,
            mean: self.sum as f64 / count as f64,
        }
    }
}

/// Statistics accumulated over age and height
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Statistics {
    pub age: FieldStatistics,
    pub height: FieldStatistics,
    pub count: usize,
}

/// Final min/max/mean for one field
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FieldSummary {
    pub min: u32,
    pub max: u32,
    pub mean: f64,
}

/// Final statistics; only exists when at least one sample was accepted
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    pub count: usize,
    pub age: FieldSummary,
    pub height: FieldSummary,
}

impl Statistics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one sample into the running values
    pub fn update(&mut self, person: &Person) {
        self.age.update(person.age);
        self.height.update(person.height);
        self.count += 1;
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Min/max/mean per field, `None` when no sample was accumulated
    pub fn summarize(&self) -> Option<Summary> {
        if self.is_empty() {
            return None;
        }

        Some(Summary {
            count: self.count,
            age: self.age.summarize(self.count),
            height: self.height.summarize(self.count),
        })
    }
}

impl<'a> Extend<&'a Person> for Statistics {
    fn extend<I: IntoIterator<Item = &'a Person>>(&mut self, iter: I) {
        for person in iter {
            self.update(person);
        }
    }
}

impl<'a> FromIterator<&'a Person> for Statistics {
    fn from_iter<I: IntoIterator<Item = &'a Person>>(iter: I) -> Self {
        let mut stats = Self::new();
        stats.extend(iter);
        stats
    }
}
