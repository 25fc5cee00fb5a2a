//! Statistics aggregation over activity and competency collections.
//!
//! Every reducer here is order-independent and never fails: empty input
//! yields zero counts and a zero rate.
//!
//! Rates are percentages rounded half-up to two decimal places, so two
//! verified out of three reports `66.67`.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::record::{Activity, ActivityStatus, ActivityType, Competency, CompetencyStatus};

// ── Summaries ────────────────────────────────────────────────────────────────

/// Dashboard summary of a set of activities.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ActivityStats {
    pub total: usize,
    pub verified: usize,
    pub pending: usize,
    pub by_type: BTreeMap<ActivityType, usize>,
    pub verification_rate: f64,
}

/// Dashboard summary of a set of competencies.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CompetencyStats {
    pub total: usize,
    /// Competencies whose status is `verified`.
    pub achieved: usize,
    pub in_progress: usize,
    pub achievement_rate: f64,
}

/// `100 * part / total` rounded half-up to two decimals; 0 when `total` is 0.
pub fn percentage(part: usize, total: usize) -> f64 {
    if total == 0 {
        return 0.0;
    }
    // Hundredths of a percent, half-up, in integers so exact ties round up.
    let hundredths = (20_000 * part + total) / (2 * total);
    hundredths as f64 / 100.0
}

/// Reduce activities into counts by status and type.
pub fn activity_stats<'a, I>(activities: I) -> ActivityStats
where
    I: IntoIterator<Item = &'a Activity>,
{
    let mut stats = ActivityStats::default();
    for activity in activities {
        stats.total += 1;
        match activity.status {
            ActivityStatus::Verified => stats.verified += 1,
            ActivityStatus::Pending => stats.pending += 1,
            ActivityStatus::Rejected => {}
        }
        *stats.by_type.entry(activity.activity_type).or_insert(0) += 1;
    }
    stats.verification_rate = percentage(stats.verified, stats.total);
    stats
}

/// Reduce competencies into achieved / in-progress counts.
pub fn competency_stats<'a, I>(competencies: I) -> CompetencyStats
where
    I: IntoIterator<Item = &'a Competency>,
{
    let mut stats = CompetencyStats::default();
    for competency in competencies {
        stats.total += 1;
        match competency.status {
            CompetencyStatus::Verified => stats.achieved += 1,
            CompetencyStatus::InProgress => stats.in_progress += 1,
        }
    }
    stats.achievement_rate = percentage(stats.achieved, stats.total);
    stats
}

// ── Timeframes ───────────────────────────────────────────────────────────────

/// Reporting window ending today.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Timeframe {
    #[default]
    All,
    Month,
    Quarter,
    Year,
}

impl Timeframe {
    pub const ALL: [Timeframe; 4] = [
        Timeframe::All,
        Timeframe::Month,
        Timeframe::Quarter,
        Timeframe::Year,
    ];

    pub fn as_tag(&self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Month => "month",
            Self::Quarter => "quarter",
            Self::Year => "year",
        }
    }

    pub fn from_tag(tag: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|t| t.as_tag().eq_ignore_ascii_case(tag.trim()))
    }

    /// Earliest completion date inside the window, or `None` for `All`.
    pub fn cutoff(&self, today: NaiveDate) -> Option<NaiveDate> {
        let months = match self {
            Self::All => return None,
            Self::Month => 1,
            Self::Quarter => 3,
            Self::Year => 12,
        };
        Some(crate::time::months_before(today, months))
    }
}

impl std::fmt::Display for Timeframe {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_tag())
    }
}

/// Activities completed on or after the timeframe's cutoff.
///
/// Activities with an unparseable date are kept for `All` and dropped
/// from every bounded window.
pub fn filter_by_timeframe(
    activities: &[Activity],
    timeframe: Timeframe,
    today: NaiveDate,
) -> Vec<&Activity> {
    match timeframe.cutoff(today) {
        None => activities.iter().collect(),
        Some(cutoff) => activities
            .iter()
            .filter(|a| a.completed_on().is_some_and(|d| d >= cutoff))
            .collect(),
    }
}

// ── Tests ────────────────────────────────────────────────────────────────────
