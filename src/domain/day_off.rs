use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct DayOff {
    pub oid: Uuid,
    pub user_name: String,
    /// Calendar day the employee takes off.
    pub o_date: NaiveDate,
    pub reason: String,
    #[serde(default)]
    pub is_approved: bool,
    pub create_at: NaiveDateTime,
}

/// Which side of today a day-off list shows.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DayOffPeriod {
    /// Day-offs strictly before today.
    Past,
    /// Day-offs from today on.
    #[default]
    Upcoming,
}

impl DayOffPeriod {
    /// Only the literal `true` selects past day-offs; any other value,
    /// including an absent parameter, shows upcoming ones.
    pub fn from_param(value: Option<&str>) -> Self {
        match value {
            Some("true") => Self::Past,
            _ => Self::Upcoming,
        }
    }

    pub const fn as_param(self) -> &'static str {
        match self {
            Self::Past => "true",
            Self::Upcoming => "false",
        }
    }

    pub fn contains(self, day: NaiveDate, today: NaiveDate) -> bool {
        match self {
            Self::Past => day < today,
            Self::Upcoming => day >= today,
        }
    }
}
