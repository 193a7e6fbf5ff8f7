//! Domain records and value types shown by the list views.

pub mod day_off;
pub mod overtime;
pub mod types;
