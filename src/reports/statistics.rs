//! Summary statistics per report category
//!
//! Aggregation always runs over the filtered rows. Order buckets are
//! counted independently, so a status outside every bucket only counts
//! toward the total.

use crate::models::record::status_of;
use crate::models::{RawRecord, ReportCategory, Statistic};

use super::synonyms::{is_one_of, OrderBucket, ACTIVE_STATUSES, AVAILABLE_STATUSES};

fn count_where(records: &[RawRecord], pred: impl Fn(&str) -> bool) -> usize {
    records
        .iter()
        .filter(|r| status_of(r).is_some_and(&pred))
        .count()
}

fn total_split(records: &[RawRecord], spellings: &[&str], yes: &str, no: &str) -> Vec<Statistic> {
    let total = records.len();
    let matching = count_where(records, |s| is_one_of(s, spellings));
    vec![
        Statistic::new("Total", total),
        Statistic::new(yes, matching),
        Statistic::new(no, total - matching),
    ]
}

/// Compute the statistics block for a filtered result set
pub fn aggregate(category: &ReportCategory, records: &[RawRecord]) -> Vec<Statistic> {
    match category {
        c if c.is_order_shaped() => vec![
            Statistic::new("Total", records.len()),
            Statistic::new("Completed", count_where(records, |s| OrderBucket::Completed.matches(s))),
            Statistic::new(
                "In Progress",
                count_where(records, |s| OrderBucket::InProgress.matches(s)),
            ),
            Statistic::new("Pending", count_where(records, |s| OrderBucket::Pending.matches(s))),
        ],
        ReportCategory::Clients => total_split(records, ACTIVE_STATUSES, "Active", "Inactive"),
        ReportCategory::Vehicles | ReportCategory::AllDrivers => {
            total_split(records, AVAILABLE_STATUSES, "Available", "Unavailable")
        }
        ReportCategory::Drivers => vec![Statistic::new("Completed Routes", records.len())],
        ReportCategory::AvailableDrivers => {
            vec![Statistic::new("Available Drivers", records.len())]
        }
        _ => Vec::new(),
    }
}
