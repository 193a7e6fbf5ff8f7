use validator::Validate;

use crate::domain::overtime::Overtime;
use crate::domain::types::{DEFAULT_LIMIT, FlagFilter, Limit, Offset};
use crate::dto::list::{FilterControlView, ListPageData, OvertimeQuery};
use crate::pagination::Paginated;
use crate::repository::{OvertimeListQuery, OvertimeReader};
use crate::services::ServiceResult;
use crate::sync::FilterSyncConfig;

pub const OVERTIME_LIST_PATH: &str = "/overtime/";
pub const OVERTIME_CONTAINER_ID: &str = "overtime-table-container";
pub const OVERTIME_FILTER_ID: &str = "is_used";

const USAGE_OPTIONS: [(&str, &str); 3] = [
    ("", "Все"),
    ("false", "Не использованные"),
    ("true", "Использованные"),
];

/// The usage select refines the current page and keeps its offset.
pub fn overtime_filter() -> FilterSyncConfig {
    FilterSyncConfig::preserving(OVERTIME_LIST_PATH, "is_used")
}

/// Loads one page of overtimes, optionally narrowed by `is_used`.
pub fn load_overtime_page<R>(repo: &R, query: OvertimeQuery) -> ServiceResult<ListPageData<Overtime>>
where
    R: OvertimeReader + ?Sized,
{
    query.validate()?;

    let limit = Limit::new(query.limit.unwrap_or(DEFAULT_LIMIT))?;
    let offset = Offset::new(query.offset.unwrap_or_default());
    let usage = FlagFilter::from_param(query.is_used.as_deref())?;

    let (total, overtimes) = repo
        .list_overtimes(
            OvertimeListQuery::new()
                .is_used(usage.as_option())
                .paginate(limit.get(), offset.get()),
        )
        .map_err(|err| {
            log::error!("Failed to list overtimes: {err}");
            err
        })?;

    let config = overtime_filter();
    let selected = usage.as_param();

    Ok(ListPageData {
        container_id: OVERTIME_CONTAINER_ID,
        records: Paginated::new(overtimes, total, limit, offset, &config, selected),
        filter: FilterControlView::new(OVERTIME_FILTER_ID, &config, &USAGE_OPTIONS, selected),
    })
}
