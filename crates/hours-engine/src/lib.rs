//! Deterministic parsing of free-text business opening hours.
//!
//! The engine turns strings like `"Mon-Fri 9am-5pm, Sat 10am-2pm"` — in all
//! their pasted, abbreviated, and mistyped variety — into typed weekly
//! entries: an ascending day set plus an open/close interval, sorted
//! Monday-first. Parsing is a fixed pipeline:
//!
//! 1. [`normalize`]: ordered rewrite passes reduce the text to day codes,
//!    digits, colons and dashes, resolving meridiems and 12-hour afternoon
//!    closes ("9-5" means 09:00–17:00) along the way.
//! 2. [`tabular`]: column-major spreadsheet pastes are reordered row-major.
//! 3. [`segment`] / [`expander`]: day groups are glued to their intervals,
//!    ranges expand into enumerated day runs, and the dense string is cut
//!    into classified tokens.
//! 4. [`builder`]: tokens pair up into merged, typed entries.
//! 5. [`validate`] / [`sort`]: a fatal bounds check, two advisory flags
//!    (overlapping spans, zero-length intervals), and weekly ordering.
//!
//! [`parse_hours`] never panics and never returns an error: fatal problems
//! come back as [`ParseResult::parse_error`] with no entries. Callers with
//! their own entry type plug in through [`parse_hours_with`].
//!
//! ```
//! use chrono::NaiveDate;
//! use hours_engine::{parse_hours, Locale};
//!
//! let now = NaiveDate::from_ymd_opt(2026, 2, 18)
//!     .and_then(|d| d.and_hms_opt(12, 0, 0))
//!     .expect("valid timestamp");
//! let result = parse_hours("open 24/7", &Locale::english(), now);
//! assert_eq!(result.entries.len(), 1);
//! assert!(result.entries[0].interval.is_all_day());
//! ```

pub mod builder;
pub mod error;
pub mod expander;
pub mod locale;
pub mod model;
pub mod normalize;
pub mod parser;
pub mod segment;
pub mod sort;
pub mod tabular;
pub mod validate;

pub use error::{ParseError, Result};
pub use locale::Locale;
pub use model::{DayCode, HoursEntry, ParseResult, TimeInterval, TimeOfDay};
pub use parser::{parse_hours, parse_hours_with};
