//! Demand context: the day being planned for.

use chrono::{Datelike, NaiveDate, Weekday};

/// Weather category. Labels outside the known set are kept verbatim and treated as neutral.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum Weather {
    #[default]
    Sun,
    Rain,
    Overcast,
    Cloudy,
    Unrecognized(String),
}

impl Weather {
    /// Parse a weather label. Accepts English names and the shop's Thai labels.
    pub fn parse(raw: &str) -> Self {
        match raw.trim().to_lowercase().as_str() {
            "sun" | "sunny" | "แดด" => Weather::Sun,
            "rain" | "rainy" | "ฝน" => Weather::Rain,
            "overcast" | "ครึ้ม" => Weather::Overcast,
            "cloudy" | "เมฆเยอะ" => Weather::Cloudy,
            _ => Weather::Unrecognized(raw.to_string()),
        }
    }

    pub fn is_recognized(&self) -> bool {
        !matches!(self, Weather::Unrecognized(_))
    }

    pub fn label(&self) -> &str {
        match self {
            Weather::Sun => "sun",
            Weather::Rain => "rain",
            Weather::Overcast => "overcast",
            Weather::Cloudy => "cloudy",
            Weather::Unrecognized(raw) => raw,
        }
    }
}

impl core::fmt::Display for Weather {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.label())
    }
}

/// Selling branch.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum Branch {
    #[default]
    A,
    B,
    C,
    Other(String),
}

impl Branch {
    /// Parse `Branch A`, bare `A`, or the Thai `สาขา A`.
    ///
    /// Case-insensitive; surrounding whitespace is ignored.
    pub fn parse(raw: &str) -> Self {
        let trimmed = raw.trim();
        let lowered = trimmed.to_lowercase();
        let code = lowered
            .strip_prefix("branch")
            .or_else(|| lowered.strip_prefix("สาขา"))
            .unwrap_or(&lowered)
            .trim();
        match code {
            "a" => Branch::A,
            "b" => Branch::B,
            "c" => Branch::C,
            _ => Branch::Other(trimmed.to_string()),
        }
    }

    pub fn is_recognized(&self) -> bool {
        !matches!(self, Branch::Other(_))
    }
}

impl core::fmt::Display for Branch {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Branch::A => f.write_str("Branch A"),
            Branch::B => f.write_str("Branch B"),
            Branch::C => f.write_str("Branch C"),
            Branch::Other(raw) => f.write_str(raw),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DemandContext {
    pub date: NaiveDate,
    pub weather: Weather,
    pub branch: Branch,
    pub special_day: bool,
}

impl DemandContext {
    pub fn new(date: NaiveDate) -> Self {
        Self {
            date,
            weather: Weather::default(),
            branch: Branch::default(),
            special_day: false,
        }
    }

    pub fn with_weather(mut self, weather: Weather) -> Self {
        self.weather = weather;
        self
    }

    pub fn with_branch(mut self, branch: Branch) -> Self {
        self.branch = branch;
        self
    }

    pub fn with_special_day(mut self, special_day: bool) -> Self {
        self.special_day = special_day;
        self
    }

    /// Saturday or Sunday.
    pub fn is_weekend(&self) -> bool {
        matches!(self.date.weekday(), Weekday::Sat | Weekday::Sun)
    }
}
