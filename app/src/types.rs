//! Frontend type definitions
//!
//! Re-exports from findings-types (shared with the report producer).

pub use findings_types::{Finding, FindingsReport, Occurrence, Severity};
