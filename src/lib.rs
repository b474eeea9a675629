//! Spielplan is a query engine over a tournament's match roster.
//!
//! It filters and sorts the uploaded matches, highlights query terms, looks teams up in a directory
//! derived from the roster, and projects the upcoming matches a team or official is involved in.
//! Spielplan can be used as a library or through the `spq` command-line tool.
//!
//! # Examples
//!
//! ```
//! use spielplan::prelude::*;
//!
//! let roster = Roster::from_json_str(
//!     r#"[
//!         {"Team 1": "Rot Stars", "Team 2": "Blau Weiss", "Liga": "Kreisliga", "Tag": "15.03.2099", "Startzeit": "10:00"},
//!         {"Team 1": "Grün", "Team 2": "Rot Stars", "Liga": "Pokal", "Tag": "2099-03-14", "Startzeit": "18:30"}
//!     ]"#,
//! )
//! .unwrap();
//!
//! let state = ViewState::default().with_query("rot kreis");
//! let listing = view(&roster, &state);
//! assert_eq!(listing.ids(), vec![1]);
//!
//! let reference = parse_reference_instant("2099-01-01 00:00").unwrap();
//! let schedule = project(&roster, &["Rot Stars"], reference);
//! assert_eq!(schedule[0].teams, "Grün vs Rot Stars");
//! ```

#![warn(missing_docs)]

#[macro_use]
extern crate log;

pub use crate::engine::MatchEngine;
pub use crate::engine::factory::MatchEngineFactory;
pub use crate::fixture::{Blank, Match, MatchField, NullCells};
pub use crate::matcher::{MatchView, Matcher, ViewOutcome, ViewState, filter, sort, view};
pub use crate::options::SpielplanOptions;
pub use crate::query::Query;
pub use crate::roster::{Roster, RosterError};

pub mod collate;
pub mod directory;
mod engine;
pub mod fixture;
pub mod highlight;
pub mod matcher;
pub mod options;
pub mod prelude;
pub mod query;
pub mod request;
pub mod roster;
pub mod schedule;
pub mod selection;
pub mod sort;
