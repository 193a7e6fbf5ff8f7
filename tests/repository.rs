use std::io::Write;

use tempfile::NamedTempFile;
use timekeep::domain::day_off::DayOffPeriod;
use timekeep::repository::errors::RepositoryError;
use timekeep::repository::{
    DayOffListQuery, DayOffReader, JsonRepository, OvertimeListQuery, OvertimeReader,
};

mod common;

#[test]
fn test_day_offs_split_on_today() {
    let repo = JsonRepository::from_records(common::sample_records());
    let today = common::date("2025-01-01");

    let (total, past) = repo
        .list_day_offs(DayOffListQuery::new(DayOffPeriod::Past, today))
        .unwrap();
    assert_eq!(total, 2);
    // Newest created first.
    assert_eq!(past[0].reason, "Ещё прошлый");
    assert_eq!(past[1].reason, "Прошлый отгул");

    let (total, upcoming) = repo
        .list_day_offs(DayOffListQuery::new(DayOffPeriod::Upcoming, today))
        .unwrap();
    assert_eq!(total, 1);
    assert_eq!(upcoming[0].reason, "Будущий отгул");
}

#[test]
fn test_day_off_on_today_counts_as_upcoming() {
    let repo = JsonRepository::from_records(common::sample_records());
    let today = common::date("2024-06-03");

    let (total, upcoming) = repo
        .list_day_offs(DayOffListQuery::new(DayOffPeriod::Upcoming, today))
        .unwrap();

    assert_eq!(total, 2);
    assert!(upcoming.iter().any(|d| d.reason == "Ещё прошлый"));
}

#[test]
fn test_overtime_usage_filter() {
    let repo = JsonRepository::from_records(common::sample_records());

    let (total, all) = repo.list_overtimes(OvertimeListQuery::new()).unwrap();
    assert_eq!(total, 2);
    // Latest date first.
    assert_eq!(all[0].description, "Миграция базы");

    let (total, used) = repo
        .list_overtimes(OvertimeListQuery::new().is_used(Some(true)))
        .unwrap();
    assert_eq!(total, 1);
    assert_eq!(used[0].description, "Выход в субботу");
}

#[test]
fn test_pagination_reports_total_matches() {
    let mut records = common::sample_records();
    records.overtimes = (1..=25)
        .map(|day| common::overtime(&format!("Смена {day}"), &format!("2024-03-{day:02}"), false))
        .collect();
    let repo = JsonRepository::from_records(records);

    let (total, page) = repo
        .list_overtimes(OvertimeListQuery::new().paginate(10, 20))
        .unwrap();

    assert_eq!(total, 25);
    assert_eq!(page.len(), 5);
    assert_eq!(page[0].description, "Смена 5");

    let (total, page) = repo
        .list_overtimes(OvertimeListQuery::new().paginate(10, 40))
        .unwrap();
    assert_eq!(total, 25);
    assert!(page.is_empty());
}

#[test]
fn test_loads_records_file() {
    let mut file = NamedTempFile::new().unwrap();
    write!(
        file,
        r#"{{
            "day_offs": [{{
                "oid": "0b0f5c1e-6a55-4d8e-9f4a-1c2d3e4f5a01",
                "user_name": "Анна",
                "o_date": "2024-02-12",
                "reason": "Семейные обстоятельства",
                "create_at": "2024-02-01T09:15:00"
            }}]
        }}"#
    )
    .unwrap();

    let repo = JsonRepository::from_path(file.path()).unwrap();

    let (total, day_offs) = repo
        .list_day_offs(DayOffListQuery::new(
            DayOffPeriod::Past,
            common::date("2025-01-01"),
        ))
        .unwrap();
    assert_eq!(total, 1);
    assert!(!day_offs[0].is_approved);

    let (total, _) = repo.list_overtimes(OvertimeListQuery::new()).unwrap();
    assert_eq!(total, 0);
}

#[test]
fn test_missing_file_is_not_found() {
    let dir = tempfile::tempdir().unwrap();
    let result = JsonRepository::from_path(dir.path().join("absent.json"));

    assert!(matches!(result, Err(RepositoryError::NotFound)));
}

#[test]
fn test_malformed_file_is_validation_error() {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "{{ \"day_offs\": 42 }}").unwrap();

    let result = JsonRepository::from_path(file.path());

    assert!(matches!(result, Err(RepositoryError::ValidationError(_))));
}

#[test]
fn test_bundled_records_parse() {
    let path = concat!(env!("CARGO_MANIFEST_DIR"), "/data/records.json");
    let repo = JsonRepository::from_path(path).unwrap();

    let (total, _) = repo.list_overtimes(OvertimeListQuery::new()).unwrap();
    assert_eq!(total, 2);
}
