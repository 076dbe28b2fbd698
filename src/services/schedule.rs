//! Past/upcoming split of a venue's or artist's shows
//!
//! A show is past once `now >= start_time`; both sides are compared in UTC.

use chrono::{DateTime, Utc};
use sea_orm::prelude::DateTimeWithTimeZone;
use serde::Serialize;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ShowSplit {
    pub past: usize,
    pub upcoming: usize,
}

impl ShowSplit {
    pub fn total(&self) -> usize {
        self.past + self.upcoming
    }
}

pub fn is_past(start_time: &DateTimeWithTimeZone, now: DateTime<Utc>) -> bool {
    now >= start_time.with_timezone(&Utc)
}

/// Counts start times into past and upcoming buckets.
pub fn split_shows<'a, I>(start_times: I, now: DateTime<Utc>) -> ShowSplit
where
    I: IntoIterator<Item = &'a DateTimeWithTimeZone>,
{
    start_times
        .into_iter()
        .fold(ShowSplit::default(), |mut split, start| {
            if is_past(start, now) {
                split.past += 1;
            } else {
                split.upcoming += 1;
            }
            split
        })
}

/// Partitions `items` into `(past, upcoming)`, keeping their relative order.
pub fn partition_shows<T, F>(items: Vec<T>, now: DateTime<Utc>, start_of: F) -> (Vec<T>, Vec<T>)
where
    F: Fn(&T) -> &DateTimeWithTimeZone,
{
    items
        .into_iter()
        .partition(|item| is_past(start_of(item), now))
}
