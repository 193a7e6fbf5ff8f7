use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Overtime {
    pub oid: Uuid,
    pub user_name: String,
    pub o_date: NaiveDate,
    pub hours: u32,
    /// Hours not yet compensated by a day-off.
    pub remaining_hours: u32,
    pub description: String,
    #[serde(default)]
    pub is_used: bool,
    pub create_at: NaiveDateTime,
}
