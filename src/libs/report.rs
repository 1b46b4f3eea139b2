//! Assembly of day buckets into a paginated report.

use crate::libs::day::DayBucket;
use crate::libs::formatter::format_duration;
use chrono::Duration;
use serde::Serialize;

/// Number of day sections per report page.
pub const PAGE_SIZE: usize = 5;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportHeader {
    pub subject: String,
    pub window_days: u32,
}

/// One renderable day: a title and a multi-line body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportSection {
    pub title: String,
    pub body: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportPage {
    pub sections: Vec<ReportSection>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportFooter {
    pub total_seconds: i64,
    pub total: String,
}

/// A subject's report for a window of days.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Report {
    pub header: ReportHeader,
    pub pages: Vec<ReportPage>,
    pub footer: ReportFooter,
}

impl Report {
    pub fn sections(&self) -> impl Iterator<Item = &ReportSection> {
        self.pages.iter().flat_map(|page| page.sections.iter())
    }
}

/// Builds a report from accumulated day buckets. Pure: no I/O.
///
/// Buckets keep their order and are split into pages of [`PAGE_SIZE`].
pub fn assemble(subject: &str, window_days: u32, buckets: &[DayBucket], total: Duration) -> Report {
    let pages = buckets
        .chunks(PAGE_SIZE)
        .map(|chunk| ReportPage {
            sections: chunk
                .iter()
                .map(|bucket| ReportSection {
                    title: format!("📆 {}", bucket.label),
                    body: bucket.body(),
                })
                .collect(),
        })
        .collect();

    Report {
        header: ReportHeader {
            subject: subject.to_string(),
            window_days,
        },
        pages,
        footer: ReportFooter {
            total_seconds: total.num_seconds().max(0),
            total: format_duration(&total),
        },
    }
}
