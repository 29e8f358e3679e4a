//! Received-date extraction.
//!
//! Three shapes are tried in a fixed order and the first one whose first
//! match is a valid calendar date wins:
//! - numeric day/month/year (`12/08/2025`, `3-4-25`)
//! - year first (`2025-08-12`, `2025/8/12`)
//! - textual month (`August 15, 2025`, `Aug 15th 2025`)

use std::sync::LazyLock;

use chrono::NaiveDate;
use regex::{Captures, Regex};
use serde::{Deserialize, Serialize};

/// How the two leading fields of an ambiguous numeric date are read.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DateOrder {
    /// `12/08/2025` is 12 August 2025.
    #[default]
    DayFirst,
    /// `12/08/2025` is 8 December 2025.
    MonthFirst,
}

impl DateOrder {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::DayFirst => "day_first",
            Self::MonthFirst => "month_first",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().replace('-', "_").as_str() {
            "day_first" | "dmy" => Some(Self::DayFirst),
            "month_first" | "mdy" => Some(Self::MonthFirst),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy)]
enum Shape {
    Numeric,
    YearFirst,
    Textual,
}

// Word boundaries keep the numeric shape from matching inside `2025-08-15`.
static DATE_PATTERNS: LazyLock<Vec<(Regex, Shape)>> = LazyLock::new(|| {
    vec![
        (
            Regex::new(r"\b(\d{1,2})[-/](\d{1,2})[-/](\d{2,4})\b").unwrap(),
            Shape::Numeric,
        ),
        (
            Regex::new(r"\b(\d{4})[-/](\d{1,2})[-/](\d{1,2})\b").unwrap(),
            Shape::YearFirst,
        ),
        (
            Regex::new(
                r"(?i)\b(jan(?:uary)?|feb(?:ruary)?|mar(?:ch)?|apr(?:il)?|may|june?|july?|aug(?:ust)?|sep(?:t(?:ember)?)?|oct(?:ober)?|nov(?:ember)?|dec(?:ember)?)\.?\s+(\d{1,2})(?:st|nd|rd|th)?,?\s+(\d{4})\b",
            )
            .unwrap(),
            Shape::Textual,
        ),
    ]
});

/// Find the first recognizable date and normalize it to `YYYY-MM-DD`.
pub fn extract_date(text: &str, order: DateOrder) -> Option<String> {
    if text.trim().is_empty() {
        return None;
    }

    for (pattern, shape) in DATE_PATTERNS.iter() {
        let Some(caps) = pattern.captures(text) else {
            continue;
        };
        match parse_captured(&caps, *shape, order) {
            Some(date) => return Some(date.format("%Y-%m-%d").to_string()),
            None => {
                tracing::debug!(
                    matched = &caps[0],
                    "date-shaped text is not a valid calendar date"
                );
            }
        }
    }

    None
}

fn parse_captured(caps: &Captures, shape: Shape, order: DateOrder) -> Option<NaiveDate> {
    match shape {
        Shape::Numeric => {
            let first: u32 = caps.get(1)?.as_str().parse().ok()?;
            let second: u32 = caps.get(2)?.as_str().parse().ok()?;
            let year = expand_year(caps.get(3)?.as_str())?;
            let (day, month) = match order {
                DateOrder::DayFirst => (first, second),
                DateOrder::MonthFirst => (second, first),
            };
            NaiveDate::from_ymd_opt(year, month, day)
        }
        Shape::YearFirst => {
            let year: i32 = caps.get(1)?.as_str().parse().ok()?;
            let month: u32 = caps.get(2)?.as_str().parse().ok()?;
            let day: u32 = caps.get(3)?.as_str().parse().ok()?;
            NaiveDate::from_ymd_opt(year, month, day)
        }
        Shape::Textual => {
            let month = month_number(caps.get(1)?.as_str())?;
            let day: u32 = caps.get(2)?.as_str().parse().ok()?;
            let year: i32 = caps.get(3)?.as_str().parse().ok()?;
            NaiveDate::from_ymd_opt(year, month, day)
        }
    }
}

/// Two-digit years pivot at 50: `25` is 2025, `75` is 1975.
fn expand_year(raw: &str) -> Option<i32> {
    let year: i32 = raw.parse().ok()?;
    match raw.len() {
        2 if year < 50 => Some(2000 + year),
        2 => Some(1900 + year),
        _ => Some(year),
    }
}

fn month_number(name: &str) -> Option<u32> {
    let prefix: String = name.chars().take(3).collect::<String>().to_lowercase();
    let month = match prefix.as_str() {
        "jan" => 1,
        "feb" => 2,
        "mar" => 3,
        "apr" => 4,
        "may" => 5,
        "jun" => 6,
        "jul" => 7,
        "aug" => 8,
        "sep" => 9,
        "oct" => 10,
        "nov" => 11,
        "dec" => 12,
        _ => return None,
    };
    Some(month)
}
