use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::pagination::Paginated;
use crate::sync::FilterSyncConfig;

/// Query parameters accepted by `/day_off/`.
#[derive(Debug, Default, Deserialize, Validate)]
pub struct DayOffQuery {
    #[validate(range(min = 1, max = 100))]
    pub limit: Option<usize>,
    pub offset: Option<usize>,
    /// `true` lists past day-offs, anything else upcoming ones.
    pub filter: Option<String>,
}

/// Query parameters accepted by `/overtime/`.
#[derive(Debug, Default, Deserialize, Validate)]
pub struct OvertimeQuery {
    #[validate(range(min = 1, max = 100))]
    pub limit: Option<usize>,
    pub offset: Option<usize>,
    pub is_used: Option<String>,
}

#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct FilterOption {
    pub value: &'static str,
    pub label: &'static str,
    pub selected: bool,
}

/// Everything the template needs to render a bound filter `<select>`.
#[derive(Debug, Serialize)]
pub struct FilterControlView {
    pub id: &'static str,
    pub base_path: String,
    pub param_name: String,
    pub policy: &'static str,
    pub options: Vec<FilterOption>,
}

impl FilterControlView {
    pub fn new(
        id: &'static str,
        config: &FilterSyncConfig,
        options: &[(&'static str, &'static str)],
        selected: &str,
    ) -> Self {
        Self {
            id,
            base_path: config.base_path.clone(),
            param_name: config.param_name.clone(),
            policy: config.policy.as_attribute(),
            options: options
                .iter()
                .map(|&(value, label)| FilterOption {
                    value,
                    label,
                    selected: value == selected,
                })
                .collect(),
        }
    }
}

/// Data required to render a list page.
#[derive(Debug, Serialize)]
pub struct ListPageData<T> {
    /// Id of the element carrying `data-limit` / `data-offset`.
    pub container_id: &'static str,
    pub records: Paginated<T>,
    pub filter: FilterControlView,
}
