//! # Schedule Store
//!
//! In-memory store for generated schedule entries. Generation recomputes
//! occurrences from scratch, so inserting is best-effort: `(food, date)` is
//! the uniqueness key and duplicates from an overlapping regeneration are
//! skipped with a warning instead of failing the batch. Users tick entries
//! off through [`ScheduleStore::mark_completed`].

use chrono::NaiveDate;
use log::{info, warn};
use std::collections::HashSet;

use crate::food_model::Occurrence;

/// A stored schedule entry with its completion state
#[derive(Debug, Clone, PartialEq)]
pub struct ScheduleEntry {
    pub id: i64,
    pub occurrence: Occurrence,
    pub completed: bool,
}

/// In-memory collection of schedule entries, unique per (food, date)
#[derive(Debug, Default)]
pub struct ScheduleStore {
    entries: Vec<ScheduleEntry>,
    seen: HashSet<(String, NaiveDate)>,
    next_id: i64,
}

impl ScheduleStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a batch of occurrences, skipping (food, date) duplicates
    ///
    /// Returns the number actually inserted. A duplicate never fails the
    /// batch; it is logged and the rest of the batch proceeds.
    pub fn insert(&mut self, occurrences: Vec<Occurrence>) -> usize {
        let batch_size = occurrences.len();
        let mut inserted = 0;

        for occurrence in occurrences {
            let key = (occurrence.food_name.clone(), occurrence.date);
            if !self.seen.insert(key) {
                warn!(
                    "Skipping duplicate entry for '{}' on {}",
                    occurrence.food_name, occurrence.date
                );
                continue;
            }

            self.entries.push(ScheduleEntry {
                id: self.next_id,
                occurrence,
                completed: false,
            });
            self.next_id += 1;
            inserted += 1;
        }

        info!(
            "Inserted {} of {} schedule entries ({} duplicates skipped)",
            inserted,
            batch_size,
            batch_size - inserted
        );

        inserted
    }

    /// Mark the entry for a food on a date as completed
    ///
    /// Returns false when no such entry exists.
    pub fn mark_completed(&mut self, food_name: &str, date: NaiveDate) -> bool {
        match self
            .entries
            .iter_mut()
            .find(|e| e.occurrence.food_name == food_name && e.occurrence.date == date)
        {
            Some(entry) => {
                entry.completed = true;
                true
            }
            None => false,
        }
    }

    /// Entries within a date range, ordered by date then food name
    pub fn entries_for_range(&self, from: NaiveDate, to: NaiveDate) -> Vec<&ScheduleEntry> {
        let mut entries: Vec<&ScheduleEntry> = self
            .entries
            .iter()
            .filter(|e| e.occurrence.date >= from && e.occurrence.date <= to)
            .collect();
        entries.sort_by(|a, b| {
            (a.occurrence.date, &a.occurrence.food_name)
                .cmp(&(b.occurrence.date, &b.occurrence.food_name))
        });
        entries
    }

    /// Entries for one food, ordered by date
    pub fn entries_for_food(&self, food_name: &str) -> Vec<&ScheduleEntry> {
        let mut entries: Vec<&ScheduleEntry> = self
            .entries
            .iter()
            .filter(|e| e.occurrence.food_name == food_name)
            .collect();
        entries.sort_by_key(|e| e.occurrence.date);
        entries
    }

    /// Remove a food's entries from a date forward
    ///
    /// Used when a food is edited: future entries are cleared so the next
    /// generation can repopulate them. Returns the number removed.
    pub fn remove_from(&mut self, food_name: &str, date: NaiveDate) -> usize {
        let before = self.entries.len();

        self.entries
            .retain(|e| e.occurrence.food_name != food_name || e.occurrence.date < date);
        self.seen
            .retain(|(name, entry_date)| name != food_name || *entry_date < date);

        let removed = before - self.entries.len();
        if removed > 0 {
            info!("Removed {} entries for '{}' from {}", removed, food_name, date);
        }
        removed
    }

    /// Number of stored entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check whether the store is empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
