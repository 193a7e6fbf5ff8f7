//! Strongly-typed value objects used by list views.
//!
//! These wrappers enforce the pagination bounds accepted by the list pages so
//! that once a value reaches the service layer it can be treated as trusted.
use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Page size used when the request does not carry `limit`.
pub const DEFAULT_LIMIT: usize = 10;
/// Largest page size the list pages accept.
pub const MAX_LIMIT: usize = 100;

/// Errors produced when attempting to construct a constrained value object.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TypeConstraintError {
    /// Page size is zero or larger than [`MAX_LIMIT`].
    #[error("limit must be between 1 and 100")]
    LimitOutOfRange,
    /// Provided value failed custom validation.
    #[error("invalid value: {0}")]
    InvalidValue(String),
}

/// Number of rows shown on one page of a list view.
#[derive(Clone, Copy, Debug, Serialize, PartialEq, Eq, Hash)]
pub struct Limit(usize);

impl Limit {
    /// Creates a page size ensuring it lies in `1..=MAX_LIMIT`.
    pub fn new(value: usize) -> Result<Self, TypeConstraintError> {
        if (1..=MAX_LIMIT).contains(&value) {
            Ok(Self(value))
        } else {
            Err(TypeConstraintError::LimitOutOfRange)
        }
    }

    pub const fn get(self) -> usize {
        self.0
    }
}

impl Default for Limit {
    fn default() -> Self {
        Self(DEFAULT_LIMIT)
    }
}

impl Display for Limit {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Number of rows skipped before the current page.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct Offset(usize);

impl Offset {
    pub const fn new(value: usize) -> Self {
        Self(value)
    }

    pub const fn get(self) -> usize {
        self.0
    }

    /// One-based page number this offset falls on for the given page size.
    pub const fn page(self, limit: Limit) -> usize {
        (self.0 / limit.0).saturating_add(1)
    }

    /// Offset of the first row of a one-based page.
    pub const fn of_page(page: usize, limit: Limit) -> Self {
        Self(page.saturating_sub(1).saturating_mul(limit.0))
    }
}

impl Display for Offset {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Tri-state boolean filter where an empty value means "not applied".
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FlagFilter {
    #[default]
    Any,
    Only(bool),
}

impl FlagFilter {
    /// Parses an optional query parameter.
    pub fn from_param(value: Option<&str>) -> Result<Self, TypeConstraintError> {
        match value.map(str::trim) {
            None | Some("") => Ok(Self::Any),
            Some(raw) => raw.parse(),
        }
    }

    pub const fn as_option(self) -> Option<bool> {
        match self {
            Self::Any => None,
            Self::Only(flag) => Some(flag),
        }
    }

    /// Value echoed back into the filter control.
    pub const fn as_param(self) -> &'static str {
        match self {
            Self::Any => "",
            Self::Only(true) => "true",
            Self::Only(false) => "false",
        }
    }
}

impl FromStr for FlagFilter {
    type Err = TypeConstraintError;

    /// Accepts the usual boolean spellings (`true`/`1`/`yes`/`on` and their
    /// negations) in any case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "" => Ok(Self::Any),
            "true" | "1" | "yes" | "on" | "t" | "y" => Ok(Self::Only(true)),
            "false" | "0" | "no" | "off" | "f" | "n" => Ok(Self::Only(false)),
            _ => Err(TypeConstraintError::InvalidValue(format!(
                "expected a boolean, got `{s}`"
            ))),
        }
    }
}
