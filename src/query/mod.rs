//! Queries - Pure, read-only derivations over a store's full scan.
//!
//! Every filter here works on the snapshot `list()` returns and is
//! deterministic given that snapshot. Time-dependent filters take "today"
//! as an argument instead of reading a clock.

use chrono::{Datelike, NaiveDate};

use crate::error::StoreError;
use crate::record::Record;
use crate::store::Store;

/// Records that belong to a textual category (genre, department, type).
pub trait Categorized {
    fn category(&self) -> &str;
}

/// Records that carry an enumerated status.
pub trait Statused {
    type Status: PartialEq;

    fn status(&self) -> &Self::Status;
}

/// Records with a date of birth.
pub trait BornOn {
    fn birth_date(&self) -> NaiveDate;
}

/// Age in whole years at `today`, one less before the birthday has passed.
pub fn age_in_years(birth: NaiveDate, today: NaiveDate) -> i32 {
    let mut age = today.year() - birth.year();
    if (today.month(), today.day()) < (birth.month(), birth.day()) {
        age -= 1;
    }
    age
}

/// Records whose category matches, ignoring ASCII case.
pub fn by_category<R: Categorized + Clone>(records: &[R], category: &str) -> Vec<R> {
    records
        .iter()
        .filter(|r| r.category().eq_ignore_ascii_case(category))
        .cloned()
        .collect()
}

/// Records whose status equals the given one.
pub fn by_status<R: Statused + Clone>(records: &[R], status: &R::Status) -> Vec<R> {
    records
        .iter()
        .filter(|r| r.status() == status)
        .cloned()
        .collect()
}

/// Records whose age at `today` falls within the inclusive `[min, max]` bound.
pub fn by_age_range<R: BornOn + Clone>(records: &[R], today: NaiveDate, min: i32, max: i32) -> Vec<R> {
    records
        .iter()
        .filter(|r| {
            let age = age_in_years(r.birth_date(), today);
            age >= min && age <= max
        })
        .cloned()
        .collect()
}

/// Query extensions available on any store, keyed on record capabilities.
pub trait QueryExt<R: Record>: Store<R> {
    /// All records matching a predicate.
    fn find<F>(&self, predicate: F) -> Result<Vec<R>, StoreError>
    where
        F: Fn(&R) -> bool,
    {
        Ok(self.list()?.into_iter().filter(|r| predicate(r)).collect())
    }

    /// All records in the given category (case-insensitive).
    fn by_category(&self, category: &str) -> Result<Vec<R>, StoreError>
    where
        R: Categorized,
    {
        Ok(by_category(&self.list()?, category))
    }

    /// All records with the given status.
    fn by_status(&self, status: &R::Status) -> Result<Vec<R>, StoreError>
    where
        R: Statused,
    {
        Ok(by_status(&self.list()?, status))
    }

    /// All records aged within `[min, max]` at `today`.
    fn by_age_range(&self, today: NaiveDate, min: i32, max: i32) -> Result<Vec<R>, StoreError>
    where
        R: BornOn,
    {
        Ok(by_age_range(&self.list()?, today, min, max))
    }
}

// Blanket implementation: every store gets the query surface
impl<R: Record, S: Store<R>> QueryExt<R> for S {}
