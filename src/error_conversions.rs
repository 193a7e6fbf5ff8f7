//! Error conversion glue between the domain, validation and service layers.
//!
//! The domain layer must not depend on service error types, so the
//! conversions live here.

use validator::ValidationErrors;

use crate::domain::types::TypeConstraintError;
use crate::services::ServiceError;

impl From<TypeConstraintError> for ServiceError {
    fn from(val: TypeConstraintError) -> Self {
        ServiceError::InvalidQuery(val.to_string())
    }
}

impl From<ValidationErrors> for ServiceError {
    fn from(val: ValidationErrors) -> Self {
        ServiceError::InvalidQuery(val.to_string())
    }
}
