//! UI Components
//!
//! Components for the findings results page.

pub mod findings_table;

pub use findings_table::FindingsTable;
