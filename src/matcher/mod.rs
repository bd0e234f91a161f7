//! Rule matching and field extraction.
//!
//! ## Architecture
//!
//! The matcher separates compilation from evaluation:
//! - **Compilation Phase**: patterns are compiled once per [`RuleTable`],
//!   together with a `RegexSet` prefilter over the whole table
//! - **Evaluation Phase**: [`RuleTable::find`] returns the first matching
//!   rule entry and [`extract`] turns its captures into [`Fields`]
//!
//! ## Example Usage
//!
//! ```rust
//! use std::sync::Arc;
//! use ua_engine::ir::{Binding, Category, Field, Rule};
//! use ua_engine::matcher::{extract, RuleTable};
//!
//! let rule = Rule::new(
//!     &["(dillo)/([\\w.]+)"],
//!     vec![Binding::Capture(Field::Name), Binding::Capture(Field::Version)],
//! )?;
//! let table = RuleTable::new(Category::Browser, vec![Arc::new(rule)]);
//!
//! let found = table.find("Dillo/1.0").expect("rule matches");
//! let fields = extract(found.rule, &found.captures);
//! assert_eq!(fields.get(Field::Name), Some("Dillo"));
//! # Ok::<(), ua_engine::UaError>(())
//! ```

pub mod extract;
pub mod table;

pub use extract::{extract, Fields};
pub use table::{RuleMatch, RuleTable};
