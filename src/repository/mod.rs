use chrono::NaiveDate;

use crate::{
    domain::{
        day_off::{DayOff, DayOffPeriod},
        overtime::Overtime,
    },
    repository::errors::RepositoryResult,
};

pub mod errors;
pub mod json;
#[cfg(feature = "test-mocks")]
pub mod mock;

pub use json::JsonRepository;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pagination {
    pub limit: usize,
    pub offset: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayOffListQuery {
    pub period: DayOffPeriod,
    /// Day the period is measured against.
    pub today: NaiveDate,
    pub pagination: Option<Pagination>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OvertimeListQuery {
    pub is_used: Option<bool>,
    pub pagination: Option<Pagination>,
}

impl DayOffListQuery {
    pub fn new(period: DayOffPeriod, today: NaiveDate) -> Self {
        Self {
            period,
            today,
            pagination: None,
        }
    }

    pub fn paginate(mut self, limit: usize, offset: usize) -> Self {
        self.pagination = Some(Pagination { limit, offset });
        self
    }
}

impl OvertimeListQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_used(mut self, is_used: Option<bool>) -> Self {
        self.is_used = is_used;
        self
    }

    pub fn paginate(mut self, limit: usize, offset: usize) -> Self {
        self.pagination = Some(Pagination { limit, offset });
        self
    }
}

/// Returns the total number of matches alongside the requested page.
pub trait DayOffReader {
    fn list_day_offs(&self, query: DayOffListQuery) -> RepositoryResult<(usize, Vec<DayOff>)>;
}

pub trait OvertimeReader {
    fn list_overtimes(&self, query: OvertimeListQuery)
    -> RepositoryResult<(usize, Vec<Overtime>)>;
}
