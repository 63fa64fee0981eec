//! Wire types for the benchtrack admin API.
//!
//! Primary records (`Project`, `Competitor`) use snake_case field names on
//! the wire. Translation records come from the upstream legacy system and
//! keep its PascalCase names (`RecordID`, `MaxMileage`, ...).

pub mod competitor;
pub mod note;
pub mod project;
pub mod service_area;
