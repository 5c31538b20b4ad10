//! # Government Report Wrangler
//!
//! Reshapes tabular government financial reports from their wide,
//! spreadsheet layout into long-format rows (one fact per row), and turns
//! cumulative quarterly ministry totals into per-quarter amounts.
//!
//! ## Pipelines
//!
//! - **Category spreading**: a category/subcategory × month table becomes
//!   one row per (category, subcategory, month) with the month's last day
//!   as the period date and the amount rounded half-up.
//! - **Quarterly reconciliation**: the composite "ID + name" ministry field
//!   is split in two, the amount parsed as an integer, the report date
//!   appended, and an optional previous quarter's cumulative amount for the
//!   same (ministry name, agency) subtracted.
//!
//! ## Example
//!
//! ```rust
//! use gov_report_wrangler::*;
//!
//! let rows: Vec<RawRow> = vec![
//!     vec!["".into(), "".into(), "Janúar".into(), "Febrúar".into()],
//!     vec!["Rekstur".into(), "Laun".into(), "100.4".into(), "200.6".into()],
//!     vec!["Samtals".into(), "".into(), "100.4".into(), "200.6".into()],
//! ];
//!
//! let table = spread(&rows, 2013, DEFAULT_CATEGORY_LABEL).unwrap();
//! assert_eq!(table.rows[1].amount, 201);
//! assert_eq!(table.rows[1].period_end, "2013-02-28");
//! ```

pub mod calendar;
pub mod config;
pub mod error;
pub mod ministry;
pub mod pipeline;
pub mod quarterly;
pub mod reconcile;
pub mod schema;
pub mod spreader;
pub mod table_io;
pub mod utils;

pub use calendar::{MonthResolver, MonthTable, ICELANDIC_MONTHS};
pub use config::{QuarterlyConfig, SpreadConfig, DEFAULT_OUTPUT};
pub use error::{Result, WrangleError};
pub use ministry::split_ministry_name;
pub use pipeline::{run_category_spread, run_quarterly, RunReport};
pub use quarterly::normalize;
pub use reconcile::{reconcile, reconcile_with_summary, PeriodReconciler, ReconcileSummary};
pub use schema::*;
pub use spreader::{spread, CategorySpreader};
pub use table_io::{read_table, read_table_from, write_table};
pub use utils::*;
