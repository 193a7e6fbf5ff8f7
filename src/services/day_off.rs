use chrono::NaiveDate;
use validator::Validate;

use crate::domain::day_off::{DayOff, DayOffPeriod};
use crate::domain::types::{DEFAULT_LIMIT, Limit, Offset};
use crate::dto::list::{DayOffQuery, FilterControlView, ListPageData};
use crate::pagination::Paginated;
use crate::repository::{DayOffListQuery, DayOffReader};
use crate::services::ServiceResult;
use crate::sync::FilterSyncConfig;

pub const DAY_OFF_LIST_PATH: &str = "/day_off/";
pub const DAY_OFF_CONTAINER_ID: &str = "day_off-table-container";
pub const DAY_OFF_FILTER_ID: &str = "filter";

const PERIOD_OPTIONS: [(&str, &str); 2] = [("false", "Предстоящие"), ("true", "Прошедшие")];

/// The period select is a primary filter: changing it returns to page one.
pub fn day_off_filter() -> FilterSyncConfig {
    FilterSyncConfig::resetting(DAY_OFF_LIST_PATH, "filter")
}

/// Loads one page of day-offs on either side of `today`.
pub fn load_day_off_page<R>(
    repo: &R,
    query: DayOffQuery,
    today: NaiveDate,
) -> ServiceResult<ListPageData<DayOff>>
where
    R: DayOffReader + ?Sized,
{
    query.validate()?;

    let limit = Limit::new(query.limit.unwrap_or(DEFAULT_LIMIT))?;
    let offset = Offset::new(query.offset.unwrap_or_default());
    let period = DayOffPeriod::from_param(query.filter.as_deref());

    let (total, day_offs) = repo
        .list_day_offs(DayOffListQuery::new(period, today).paginate(limit.get(), offset.get()))
        .map_err(|err| {
            log::error!("Failed to list day-offs: {err}");
            err
        })?;

    let config = day_off_filter();
    let selected = period.as_param();

    Ok(ListPageData {
        container_id: DAY_OFF_CONTAINER_ID,
        records: Paginated::new(day_offs, total, limit, offset, &config, selected),
        filter: FilterControlView::new(DAY_OFF_FILTER_ID, &config, &PERIOD_OPTIONS, selected),
    })
}
