/*
[INPUT]:  API schema definitions and serde requirements
[OUTPUT]: Typed Rust enums with serialization support
[POS]:    Data layer - type definitions for API communication
[UPDATE]: When API schema changes or new types added
*/

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Window for provider bandwidth usage queries
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TimePeriod {
    #[serde(rename = "24h")]
    Last24Hours,
    #[default]
    #[serde(rename = "month")]
    Month,
    #[serde(rename = "7days")]
    Last7Days,
    /// Requires explicit `from` and `to` dates
    #[serde(rename = "custom")]
    Custom,
}

impl TimePeriod {
    pub fn as_str(&self) -> &'static str {
        match self {
            TimePeriod::Last24Hours => "24h",
            TimePeriod::Month => "month",
            TimePeriod::Last7Days => "7days",
            TimePeriod::Custom => "custom",
        }
    }
}

impl fmt::Display for TimePeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TimePeriod {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "24h" => Ok(TimePeriod::Last24Hours),
            "month" => Ok(TimePeriod::Month),
            "7days" => Ok(TimePeriod::Last7Days),
            "custom" => Ok(TimePeriod::Custom),
            other => Err(format!("unknown time period: {other}")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(TimePeriod::Last24Hours, "24h")]
    #[case(TimePeriod::Month, "month")]
    #[case(TimePeriod::Last7Days, "7days")]
    #[case(TimePeriod::Custom, "custom")]
    fn test_time_period_wire_names(#[case] period: TimePeriod, #[case] wire: &str) {
        assert_eq!(period.to_string(), wire);
        assert_eq!(wire.parse::<TimePeriod>(), Ok(period));
        assert_eq!(
            serde_json::to_value(period).expect("ser"),
            serde_json::Value::String(wire.to_string())
        );
    }

    #[test]
    fn test_time_period_defaults_to_month() {
        assert_eq!(TimePeriod::default(), TimePeriod::Month);
        assert!("yearly".parse::<TimePeriod>().is_err());
    }
}
