//! Read-only repository backed by a JSON records file.

use std::path::Path;
use std::sync::Arc;

use serde::Deserialize;

use crate::domain::day_off::DayOff;
use crate::domain::overtime::Overtime;
use crate::repository::errors::RepositoryResult;
use crate::repository::{
    DayOffListQuery, DayOffReader, OvertimeListQuery, OvertimeReader, Pagination,
};

/// Layout of the records file.
#[derive(Debug, Default, Deserialize)]
pub struct RecordSet {
    #[serde(default)]
    pub day_offs: Vec<DayOff>,
    #[serde(default)]
    pub overtimes: Vec<Overtime>,
}

/// Immutable snapshot of all records, cheap to clone across workers.
#[derive(Clone, Debug)]
pub struct JsonRepository {
    day_offs: Arc<Vec<DayOff>>,
    overtimes: Arc<Vec<Overtime>>,
}

impl JsonRepository {
    /// Loads and sorts the records once: day-offs newest created first,
    /// overtimes latest date first.
    pub fn from_records(records: RecordSet) -> Self {
        let RecordSet {
            mut day_offs,
            mut overtimes,
        } = records;
        day_offs.sort_by(|a, b| b.create_at.cmp(&a.create_at));
        overtimes.sort_by(|a, b| {
            b.o_date
                .cmp(&a.o_date)
                .then_with(|| b.create_at.cmp(&a.create_at))
        });

        Self {
            day_offs: Arc::new(day_offs),
            overtimes: Arc::new(overtimes),
        }
    }

    pub fn from_path(path: impl AsRef<Path>) -> RepositoryResult<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)?;
        let records: RecordSet = serde_json::from_str(&raw)?;
        log::info!(
            "Loaded {} day-offs and {} overtimes from {}",
            records.day_offs.len(),
            records.overtimes.len(),
            path.display()
        );
        Ok(Self::from_records(records))
    }
}

fn page<T: Clone>(matches: Vec<&T>, pagination: Option<&Pagination>) -> (usize, Vec<T>) {
    let total = matches.len();
    let items = match pagination {
        Some(p) => matches
            .into_iter()
            .skip(p.offset)
            .take(p.limit)
            .cloned()
            .collect(),
        None => matches.into_iter().cloned().collect(),
    };
    (total, items)
}

impl DayOffReader for JsonRepository {
    fn list_day_offs(&self, query: DayOffListQuery) -> RepositoryResult<(usize, Vec<DayOff>)> {
        let matches = self
            .day_offs
            .iter()
            .filter(|day_off| query.period.contains(day_off.o_date, query.today))
            .collect();
        Ok(page(matches, query.pagination.as_ref()))
    }
}

impl OvertimeReader for JsonRepository {
    fn list_overtimes(
        &self,
        query: OvertimeListQuery,
    ) -> RepositoryResult<(usize, Vec<Overtime>)> {
        let matches = self
            .overtimes
            .iter()
            .filter(|overtime| query.is_used.is_none_or(|flag| overtime.is_used == flag))
            .collect();
        Ok(page(matches, query.pagination.as_ref()))
    }
}
