#![allow(dead_code)]

use chrono::{NaiveDate, NaiveDateTime};
use timekeep::domain::day_off::DayOff;
use timekeep::domain::overtime::Overtime;
use timekeep::repository::json::RecordSet;
use uuid::Uuid;

pub fn date(value: &str) -> NaiveDate {
    NaiveDate::parse_from_str(value, "%Y-%m-%d").unwrap()
}

pub fn timestamp(value: &str) -> NaiveDateTime {
    NaiveDateTime::parse_from_str(value, "%Y-%m-%d %H:%M").unwrap()
}

pub fn day_off(reason: &str, o_date: &str, created: &str) -> DayOff {
    DayOff {
        oid: Uuid::new_v4(),
        user_name: "Анна Смирнова".to_string(),
        o_date: date(o_date),
        reason: reason.to_string(),
        is_approved: false,
        create_at: timestamp(created),
    }
}

pub fn overtime(description: &str, o_date: &str, is_used: bool) -> Overtime {
    Overtime {
        oid: Uuid::new_v4(),
        user_name: "Игорь Петров".to_string(),
        o_date: date(o_date),
        hours: 4,
        remaining_hours: if is_used { 0 } else { 4 },
        description: description.to_string(),
        is_used,
        create_at: timestamp("2024-01-01 09:00"),
    }
}

/// Two past and one far-future day-off, one used and one unused overtime.
pub fn sample_records() -> RecordSet {
    RecordSet {
        day_offs: vec![
            day_off("Прошлый отгул", "2024-02-12", "2024-02-01 09:15"),
            day_off("Ещё прошлый", "2024-06-03", "2024-05-20 14:40"),
            day_off("Будущий отгул", "2099-01-15", "2024-12-10 11:00"),
        ],
        overtimes: vec![
            overtime("Выход в субботу", "2024-05-11", true),
            overtime("Миграция базы", "2024-09-28", false),
        ],
    }
}
