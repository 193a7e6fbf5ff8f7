//! Mock repository implementations for isolating services in tests.

use mockall::mock;

use crate::domain::day_off::DayOff;
use crate::domain::overtime::Overtime;
use crate::repository::errors::RepositoryResult;
use crate::repository::{DayOffListQuery, DayOffReader, OvertimeListQuery, OvertimeReader};

mock! {
    pub Repository {}

    impl DayOffReader for Repository {
        fn list_day_offs(&self, query: DayOffListQuery) -> RepositoryResult<(usize, Vec<DayOff>)>;
    }

    impl OvertimeReader for Repository {
        fn list_overtimes(
            &self,
            query: OvertimeListQuery,
        ) -> RepositoryResult<(usize, Vec<Overtime>)>;
    }
}
