//! Matching engines used to filter the roster.
//!
//! A query is compiled into a tree of engines by [`factory::MatchEngineFactory`]: one
//! [`term::TermEngine`] per query term, combined by an [`andor::AndEngine`].

use std::fmt::Display;

use crate::fixture::Match;

pub mod andor;
pub mod factory;
pub mod term;

/// Decides whether a match record satisfies (part of) a query
pub trait MatchEngine: Display {
    /// True if `record` matches
    fn match_record(&self, record: &Match) -> bool;

    /// Keeps the matching records, preserving their order
    fn match_records<'a>(&self, records: &'a [Match]) -> Vec<&'a Match> {
        records.iter().filter(|record| self.match_record(record)).collect()
    }
}
