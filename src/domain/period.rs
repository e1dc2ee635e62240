use std::fmt;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Aggregation period. Lengths are fixed day counts, not calendar months or years.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum PeriodKind {
    #[default]
    Day,
    Week,
    Month,
    Year,
}

impl PeriodKind {
    pub fn days(self) -> usize {
        match self {
            PeriodKind::Day => 1,
            PeriodKind::Week => 7,
            PeriodKind::Month => 30,
            PeriodKind::Year => 365,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            PeriodKind::Day => "day",
            PeriodKind::Week => "week",
            PeriodKind::Month => "month",
            PeriodKind::Year => "year",
        }
    }
}

impl fmt::Display for PeriodKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn period_lengths_are_calendar_naive() {
        assert_eq!(PeriodKind::Day.days(), 1);
        assert_eq!(PeriodKind::Week.days(), 7);
        assert_eq!(PeriodKind::Month.days(), 30);
        assert_eq!(PeriodKind::Year.days(), 365);
    }

    #[test]
    fn period_deserializes_from_lowercase_name() {
        let period: PeriodKind = serde_yaml::from_str("month").unwrap();
        assert_eq!(period, PeriodKind::Month);
        assert_eq!(period.to_string(), "month");
    }
}
