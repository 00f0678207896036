//! Dataset - Ordered Record Collections
//!
//! Defines the Dataset trait and `RecordDataset`, the in-memory table the
//! pipeline works on. Every transforming method returns a new dataset and
//! leaves the receiver untouched.
//!
//! @version 0.1.0
//! @author `AutomataNexus` Development Team

use std::collections::{BTreeMap, HashSet};
use std::hash::Hash;

use serde::de::DeserializeOwned;
use serde::Serialize;
use tweetsift_core::{Error, Result};

use crate::label::ClassCode;
use crate::record::{CleanedRecord, LabeledText, Record};

// =============================================================================
// Dataset Trait
// =============================================================================

/// Core trait for all datasets.
///
/// A dataset provides indexed access to data items.
pub trait Dataset {
    /// The type of items in the dataset.
    type Item;

    /// Returns the number of items in the dataset.
    fn len(&self) -> usize;

    /// Returns true if the dataset is empty.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Gets an item by index.
    fn get(&self, index: usize) -> Option<Self::Item>;
}

// =============================================================================
// RecordDataset
// =============================================================================

/// An ordered collection of rows.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordDataset<R> {
    records: Vec<R>,
}

/// Raw tweets as loaded.
pub type TweetDataset = RecordDataset<Record>;

/// Pipeline output.
pub type CleanedDataset = RecordDataset<CleanedRecord>;

impl<R> RecordDataset<R> {
    /// Creates a dataset from rows in order.
    #[must_use]
    pub fn new(records: Vec<R>) -> Self {
        Self { records }
    }

    /// The rows as a slice.
    pub fn records(&self) -> &[R] {
        &self.records
    }

    /// Consumes the dataset, returning its rows.
    pub fn into_records(self) -> Vec<R> {
        self.records
    }

    /// Iterates over the rows.
    pub fn iter(&self) -> std::slice::Iter<'_, R> {
        self.records.iter()
    }

    /// Keeps rows matching the predicate.
    pub fn filter<F>(&self, predicate: F) -> Self
    where
        R: Clone,
        F: Fn(&R) -> bool,
    {
        Self::new(self.records.iter().filter(|r| predicate(r)).cloned().collect())
    }

    /// Keeps the first row for every distinct key, preserving order.
    pub fn dedup_by_key<'a, K, F>(&'a self, key: F) -> Self
    where
        R: Clone,
        K: Hash + Eq,
        F: Fn(&'a R) -> K,
    {
        let mut seen: HashSet<K> = HashSet::with_capacity(self.records.len());
        Self::new(
            self.records
                .iter()
                .filter(|r| seen.insert(key(*r)))
                .cloned()
                .collect(),
        )
    }

    /// Transforms every row into a new dataset.
    pub fn map<U, F>(&self, f: F) -> RecordDataset<U>
    where
        F: Fn(&R) -> U,
    {
        RecordDataset::new(self.records.iter().map(f).collect())
    }

    /// Transforms every row, stopping at the first error.
    pub fn try_map<U, F>(&self, f: F) -> Result<RecordDataset<U>>
    where
        F: Fn(&R) -> Result<U>,
    {
        self.records
            .iter()
            .map(f)
            .collect::<Result<Vec<U>>>()
            .map(RecordDataset::new)
    }

    /// Rows whose label equals `class`.
    pub fn with_label<'a, L>(&'a self, class: &'a L) -> impl Iterator<Item = &'a R> + 'a
    where
        R: LabeledText<Label = L>,
        L: PartialEq + ?Sized,
    {
        self.records.iter().filter(move |r| r.label() == class)
    }
}

impl<R: DeserializeOwned> RecordDataset<R> {
    /// Parses a JSON array of rows.
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json)
            .map(Self::new)
            .map_err(|e| Error::Serialization {
                message: e.to_string(),
            })
    }
}

impl<R: Serialize> RecordDataset<R> {
    /// Serializes the rows as a JSON array.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string(&self.records).map_err(|e| Error::Serialization {
            message: e.to_string(),
        })
    }
}

impl<R> Default for RecordDataset<R> {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl<R: Clone> Dataset for RecordDataset<R> {
    type Item = R;

    fn len(&self) -> usize {
        self.records.len()
    }

    fn get(&self, index: usize) -> Option<Self::Item> {
        self.records.get(index).cloned()
    }
}

impl<R> FromIterator<R> for RecordDataset<R> {
    fn from_iter<I: IntoIterator<Item = R>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<R> IntoIterator for RecordDataset<R> {
    type Item = R;
    type IntoIter = std::vec::IntoIter<R>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.into_iter()
    }
}

impl<'a, R> IntoIterator for &'a RecordDataset<R> {
    type Item = &'a R;
    type IntoIter = std::slice::Iter<'a, R>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

// =============================================================================
// Raw Tweet Operations
// =============================================================================

impl TweetDataset {
    /// Drops every record whose label is in `labels`.
    pub fn without_labels<S: AsRef<str>>(&self, labels: &[S]) -> Self {
        self.filter(|r| !labels.iter().any(|l| l.as_ref() == r.label))
    }

    /// Keeps the first record for each distinct text cell.
    pub fn dedup_by_text(&self) -> Self {
        self.dedup_by_key(|r| r.text.key())
    }

    /// Relabels every record whose label is in `from` as `into`.
    pub fn collapse_labels<S: AsRef<str>>(&self, from: &[S], into: &str) -> Self {
        self.map(|r| {
            if from.iter().any(|l| l.as_ref() == r.label) {
                Record::new(r.text.clone(), into)
            } else {
                r.clone()
            }
        })
    }

    /// Text column in string form.
    pub fn texts(&self) -> Vec<String> {
        self.records.iter().map(|r| r.text.to_string()).collect()
    }

    /// Label column.
    pub fn labels(&self) -> Vec<&str> {
        self.records.iter().map(|r| r.label.as_str()).collect()
    }

    /// Number of records per label.
    pub fn label_counts(&self) -> BTreeMap<String, usize> {
        let mut counts = BTreeMap::new();
        for record in &self.records {
            *counts.entry(record.label.clone()).or_insert(0) += 1;
        }
        counts
    }
}

// =============================================================================
// Cleaned Operations
// =============================================================================

impl CleanedDataset {
    /// Number of records per class code.
    pub fn class_counts(&self) -> BTreeMap<ClassCode, usize> {
        let mut counts = BTreeMap::new();
        for record in &self.records {
            *counts.entry(record.class).or_insert(0) += 1;
        }
        counts
    }

    /// Text column.
    pub fn texts(&self) -> Vec<&str> {
        self.records.iter().map(|r| r.text.as_str()).collect()
    }

    /// Class codes as integers, aligned with `texts`.
    pub fn codes(&self) -> Vec<u8> {
        self.records.iter().map(|r| r.class.code()).collect()
    }
}

// =============================================================================
// Tests
// =============================================================================
