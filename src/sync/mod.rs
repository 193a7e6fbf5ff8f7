//! Keeps a list page's query string in step with its filter control.
//!
//! A [`QueryFilterSync`] listens to one filter control. On every change it
//! reads `data-limit` (and, for the preserving policy, `data-offset`) from the
//! list container, composes
//! `<base>?limit=<limit>&offset=<offset>[&<param>=<value>]` and asks the
//! navigator for a full page load. An empty value means "no filter" and is
//! left out of the query string.

use std::fmt::{Display, Formatter};
use std::rc::Rc;

use log::{debug, warn};
use thiserror::Error;

use crate::domain::types::{Limit, Offset};

pub mod dom;
pub mod memory;

use dom::{FilterControl, ListContainer, Navigator, Subscription};

pub const LIMIT_ATTRIBUTE: &str = "data-limit";
pub const OFFSET_ATTRIBUTE: &str = "data-offset";
pub const BASE_ATTRIBUTE: &str = "data-filter-base";
pub const PARAM_ATTRIBUTE: &str = "data-filter-param";
pub const POLICY_ATTRIBUTE: &str = "data-filter-policy";

/// Whether a filter change returns the list to its first page.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OffsetPolicy {
    /// Primary filter: every change goes back to `offset=0`.
    #[default]
    ResetOffset,
    /// Refinement filter: keeps the container's current `data-offset`.
    PreserveOffset,
}

impl OffsetPolicy {
    /// Value of the `data-filter-policy` binding attribute.
    pub const fn as_attribute(self) -> &'static str {
        match self {
            Self::ResetOffset => "reset",
            Self::PreserveOffset => "preserve",
        }
    }

    pub fn from_attribute(value: &str) -> Option<Self> {
        match value.trim() {
            "reset" => Some(Self::ResetOffset),
            "preserve" => Some(Self::PreserveOffset),
            _ => None,
        }
    }
}

/// Errors raised when a control does not declare a usable binding.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BindingError {
    #[error("filter control `{control}` has no `{attribute}` attribute")]
    MissingAttribute {
        control: String,
        attribute: &'static str,
    },
    #[error("filter control `{control}` declares unknown policy `{policy}`")]
    UnknownPolicy { control: String, policy: String },
}

/// Numeric query value read from a server-rendered attribute.
///
/// Unparseable attributes are kept as [`QueryNumber::Malformed`] and rendered
/// as `NaN`, leaving their rejection to the server.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum QueryNumber {
    Value(usize),
    Malformed,
}

impl QueryNumber {
    pub fn parse(raw: &str) -> Self {
        raw.trim()
            .parse()
            .map(Self::Value)
            .unwrap_or(Self::Malformed)
    }
}

impl Display for QueryNumber {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Value(value) => write!(f, "{value}"),
            Self::Malformed => f.write_str("NaN"),
        }
    }
}

/// Pagination and filter state a list page is (re)loaded with.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ListViewState {
    pub limit: QueryNumber,
    pub offset: QueryNumber,
    /// Selected filter value, empty when unset.
    pub filter_value: String,
}

impl ListViewState {
    pub fn new(limit: Limit, offset: Offset, filter_value: impl Into<String>) -> Self {
        Self {
            limit: QueryNumber::Value(limit.get()),
            offset: QueryNumber::Value(offset.get()),
            filter_value: filter_value.into(),
        }
    }

    /// Reconstructs the state after the control changed to `filter_value`.
    pub fn read(container: &dyn ListContainer, policy: OffsetPolicy, filter_value: &str) -> Self {
        let limit = match container.attribute(LIMIT_ATTRIBUTE) {
            Some(raw) => QueryNumber::parse(&raw),
            None => QueryNumber::Malformed,
        };
        if limit == QueryNumber::Malformed {
            warn!("List container has no numeric `{LIMIT_ATTRIBUTE}` attribute");
        }

        let offset = match policy {
            OffsetPolicy::ResetOffset => QueryNumber::Value(0),
            OffsetPolicy::PreserveOffset => match container.attribute(OFFSET_ATTRIBUTE) {
                Some(raw) => QueryNumber::parse(&raw),
                None => QueryNumber::Value(0),
            },
        };
        if offset == QueryNumber::Malformed {
            warn!("List container has a non-numeric `{OFFSET_ATTRIBUTE}` attribute");
        }

        Self {
            limit,
            offset,
            filter_value: filter_value.to_string(),
        }
    }
}

/// Where a filter control sends the browser and how it treats pagination.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FilterSyncConfig {
    /// List endpoint, e.g. `/day_off/`.
    pub base_path: String,
    /// Query parameter the control maps to, e.g. `filter` or `is_used`.
    pub param_name: String,
    pub policy: OffsetPolicy,
}

impl FilterSyncConfig {
    pub fn resetting(base_path: impl Into<String>, param_name: impl Into<String>) -> Self {
        Self {
            base_path: base_path.into(),
            param_name: param_name.into(),
            policy: OffsetPolicy::ResetOffset,
        }
    }

    pub fn preserving(base_path: impl Into<String>, param_name: impl Into<String>) -> Self {
        Self {
            base_path: base_path.into(),
            param_name: param_name.into(),
            policy: OffsetPolicy::PreserveOffset,
        }
    }

    /// Reads the `data-filter-*` binding attributes declared on the control.
    ///
    /// A missing policy attribute falls back to [`OffsetPolicy::ResetOffset`].
    pub fn from_control(control: &dyn FilterControl) -> Result<Self, BindingError> {
        let required = |attribute: &'static str| {
            control
                .attribute(attribute)
                .ok_or_else(|| BindingError::MissingAttribute {
                    control: control.id(),
                    attribute,
                })
        };

        let base_path = required(BASE_ATTRIBUTE)?;
        let param_name = required(PARAM_ATTRIBUTE)?;
        let policy = match control.attribute(POLICY_ATTRIBUTE) {
            None => OffsetPolicy::default(),
            Some(raw) => {
                OffsetPolicy::from_attribute(&raw).ok_or_else(|| BindingError::UnknownPolicy {
                    control: control.id(),
                    policy: raw,
                })?
            }
        };

        Ok(Self {
            base_path,
            param_name,
            policy,
        })
    }

    /// Builds the navigation target for `state`.
    ///
    /// Parameters always come in the order `limit`, `offset`, filter.
    pub fn compose(&self, state: &ListViewState) -> String {
        let mut pairs: Vec<(&str, String)> = vec![
            ("limit", state.limit.to_string()),
            ("offset", state.offset.to_string()),
        ];
        if !state.filter_value.is_empty() {
            pairs.push((self.param_name.as_str(), state.filter_value.clone()));
        }

        let query = serde_html_form::to_string(&pairs).unwrap_or_else(|err| {
            warn!("Failed to encode query for {}: {err}", self.base_path);
            pairs
                .iter()
                .map(|(name, value)| format!("{name}={value}"))
                .collect::<Vec<_>>()
                .join("&")
        });

        format!("{}?{}", self.base_path, query)
    }

    /// URL of a one-based page keeping the current filter.
    pub fn page_url(&self, limit: Limit, page: usize, filter_value: &str) -> String {
        self.compose(&ListViewState::new(
            limit,
            Offset::of_page(page, limit),
            filter_value,
        ))
    }

    /// Navigation target after the control changed to `filter_value`.
    pub fn target_for(&self, container: &dyn ListContainer, filter_value: &str) -> String {
        self.compose(&ListViewState::read(container, self.policy, filter_value))
    }
}

/// One filter control bound to its list page.
///
/// The binding lasts until [`QueryFilterSync::unbind`] is called or the value
/// is dropped.
#[derive(Debug)]
pub struct QueryFilterSync {
    control_id: String,
    config: Rc<FilterSyncConfig>,
    subscription: Subscription,
}

impl QueryFilterSync {
    pub fn bind(
        control: &dyn FilterControl,
        container: Rc<dyn ListContainer>,
        navigator: Rc<dyn Navigator>,
        config: FilterSyncConfig,
    ) -> Self {
        let control_id = control.id();
        let config = Rc::new(config);

        let handler_config = Rc::clone(&config);
        let handler_control = control_id.clone();
        let subscription = control.on_change(Box::new(move |value: &str| {
            let url = handler_config.target_for(container.as_ref(), value);
            debug!("Filter `{handler_control}` changed, navigating to {url}");
            navigator.navigate(&url);
        }));

        Self {
            control_id,
            config,
            subscription,
        }
    }

    /// Binds using the control's own `data-filter-*` attributes.
    pub fn bind_declared(
        control: &dyn FilterControl,
        container: Rc<dyn ListContainer>,
        navigator: Rc<dyn Navigator>,
    ) -> Result<Self, BindingError> {
        let config = FilterSyncConfig::from_control(control)?;
        Ok(Self::bind(control, container, navigator, config))
    }

    pub fn control_id(&self) -> &str {
        &self.control_id
    }

    pub fn config(&self) -> &FilterSyncConfig {
        &self.config
    }

    pub fn unbind(self) {
        drop(self.subscription);
    }
}

#[cfg(test)]
mod tests {
    use super::memory::MemoryContainer;
    use super::*;

    #[test]
    fn compose_keeps_parameter_order() {
        let config = FilterSyncConfig::resetting("/day_off/", "filter");
        let state = ListViewState::new(Limit::new(20).unwrap(), Offset::new(40), "approved");

        assert_eq!(
            config.compose(&state),
            "/day_off/?limit=20&offset=40&filter=approved"
        );
    }

    #[test]
    fn compose_encodes_filter_values() {
        let config = FilterSyncConfig::resetting("/day_off/", "filter");
        let state = ListViewState::new(Limit::default(), Offset::default(), "a&b=c");

        assert_eq!(
            config.compose(&state),
            "/day_off/?limit=10&offset=0&filter=a%26b%3Dc"
        );
    }

    #[test]
    fn missing_limit_is_rendered_as_nan() {
        let container = MemoryContainer::new();
        let config = FilterSyncConfig::resetting("/day_off/", "filter");

        assert_eq!(
            config.target_for(&container, ""),
            "/day_off/?limit=NaN&offset=0"
        );
    }

    #[test]
    fn non_integer_numbers_become_nan() {
        for raw in ["20.0", "-5", "1e3", "99999999999999999999999"] {
            assert_eq!(QueryNumber::parse(raw), QueryNumber::Malformed, "{raw}");
        }
        assert_eq!(QueryNumber::parse(" 20 "), QueryNumber::Value(20));
    }

    #[test]
    fn preserving_policy_defaults_missing_offset_to_zero() {
        let container = MemoryContainer::new().with_attribute(LIMIT_ATTRIBUTE, "10");
        let state = ListViewState::read(&container, OffsetPolicy::PreserveOffset, "");
        assert_eq!(state.offset, QueryNumber::Value(0));

        container.set_attribute(OFFSET_ATTRIBUTE, "x");
        let state = ListViewState::read(&container, OffsetPolicy::PreserveOffset, "");
        assert_eq!(state.offset, QueryNumber::Malformed);
    }

    #[test]
    fn page_url_uses_page_offset() {
        let config = FilterSyncConfig::preserving("/overtime/", "is_used");
        assert_eq!(
            config.page_url(Limit::new(10).unwrap(), 3, "true"),
            "/overtime/?limit=10&offset=20&is_used=true"
        );
    }

    #[test]
    fn policy_attribute_round_trips() {
        for policy in [OffsetPolicy::ResetOffset, OffsetPolicy::PreserveOffset] {
            assert_eq!(OffsetPolicy::from_attribute(policy.as_attribute()), Some(policy));
        }
        assert_eq!(OffsetPolicy::from_attribute("sometimes"), None);
    }
}
