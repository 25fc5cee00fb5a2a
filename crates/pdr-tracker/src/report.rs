//! Report data — rows and summaries handed to a document renderer.
//!
//! Nothing here lays out pages. The builders only select, order, and
//! annotate records so any renderer (terminal, PDF, HTML) prints the same
//! content.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::progression::{assess_level_up, progress};
use crate::record::{
    Activity, ActivityStatus, ActivityType, Competency, CompetencyStatus, ProficiencyLevel,
    UserProfile,
};
use crate::stats::{
    activity_stats, competency_stats, filter_by_timeframe, ActivityStats, CompetencyStats,
    Timeframe,
};

/// Header shared by both report kinds.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ReportHeader {
    pub title: String,
    /// "Name - Role", empty without a profile.
    pub subject: String,
    pub department: String,
}

impl ReportHeader {
    fn new(title: &str, profile: Option<&UserProfile>) -> Self {
        Self {
            title: title.to_string(),
            subject: profile.map(UserProfile::heading).unwrap_or_default(),
            department: profile.map(|p| p.department.clone()).unwrap_or_default(),
        }
    }
}

/// One line of the activity summary table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActivityRow {
    pub date: String,
    pub title: String,
    pub activity_type: ActivityType,
    pub provider: String,
    pub status: ActivityStatus,
}

/// Activities summary for a timeframe.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActivityReport {
    pub header: ReportHeader,
    pub timeframe: Timeframe,
    pub rows: Vec<ActivityRow>,
    pub stats: ActivityStats,
}

/// One evidence line under a competency.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvidenceLine {
    pub title: String,
    pub status: ActivityStatus,
}

/// One competency section of the development report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompetencyEntry {
    pub name: String,
    pub description: String,
    pub level: ProficiencyLevel,
    pub status: CompetencyStatus,
    pub progress: u8,
    pub eligible_for_level_up: bool,
    pub evidence: Vec<EvidenceLine>,
}

/// Competency development report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompetencyReport {
    pub header: ReportHeader,
    pub entries: Vec<CompetencyEntry>,
    pub stats: CompetencyStats,
}

/// Build the activities summary, newest completion first.
///
/// Rows are sorted by date descending with ties kept in input order;
/// activities with an unparseable date sort last.
pub fn activity_report(
    activities: &[Activity],
    profile: Option<&UserProfile>,
    timeframe: Timeframe,
    today: NaiveDate,
) -> ActivityReport {
    let mut selected = filter_by_timeframe(activities, timeframe, today);
    selected.sort_by(|a, b| b.completed_on().cmp(&a.completed_on()));

    let stats = activity_stats(selected.iter().copied());
    let rows = selected
        .into_iter()
        .map(|a| ActivityRow {
            date: a.date_completed.clone(),
            title: a.title.clone(),
            activity_type: a.activity_type,
            provider: a.provider.clone(),
            status: a.status,
        })
        .collect();

    ActivityReport {
        header: ReportHeader::new("Professional Development Record", profile),
        timeframe,
        rows,
        stats,
    }
}

/// Build the competency development report in input order.
pub fn competency_report(
    competencies: &[Competency],
    profile: Option<&UserProfile>,
) -> CompetencyReport {
    let entries = competencies
        .iter()
        .map(|c| CompetencyEntry {
            name: c.name.clone(),
            description: c.description.clone(),
            level: c.level,
            status: c.status,
            progress: progress(c),
            eligible_for_level_up: assess_level_up(c).is_eligible,
            evidence: c
                .evidence
                .iter()
                .map(|e| EvidenceLine {
                    title: e.title.clone(),
                    status: e.status,
                })
                .collect(),
        })
        .collect();

    CompetencyReport {
        header: ReportHeader::new("Competency Development Report", profile),
        entries,
        stats: competency_stats(competencies),
    }
}
