//! The team directory: every `(team, league)` pair referenced by the roster.

use std::fmt::{Display, Error, Formatter};

use indexmap::IndexSet;
use serde::Serialize;

use crate::fixture::Match;
use crate::query::Query;

/// A team as it appears within one league
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct TeamEntry {
    /// Team name, exactly as uploaded
    pub name: String,
    /// League the team plays in, empty if the match had none
    pub league: String,
}

impl TeamEntry {
    fn matches(&self, query: &Query) -> bool {
        let name = self.name.to_lowercase();
        let league = self.league.to_lowercase();
        query
            .terms()
            .iter()
            .all(|term| name.contains(term.as_str()) || league.contains(term.as_str()))
    }
}

impl Display for TeamEntry {
    fn fmt(&self, f: &mut Formatter) -> Result<(), Error> {
        write!(f, "{} ({})", self.name, self.league)
    }
}

/// Result of looking the directory up
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DirectoryLookup<'a> {
    /// Nothing was entered yet; the caller should prompt for input
    AwaitingQuery,
    /// The entries matching the query, possibly none
    Results(Vec<&'a TeamEntry>),
}

impl<'a> DirectoryLookup<'a> {
    /// The matching entries; empty while awaiting a query
    pub fn entries(&self) -> &[&'a TeamEntry] {
        match self {
            DirectoryLookup::AwaitingQuery => &[],
            DirectoryLookup::Results(entries) => entries,
        }
    }

    /// True when a query was entered and nothing matched it
    pub fn is_no_match(&self) -> bool {
        matches!(self, DirectoryLookup::Results(entries) if entries.is_empty())
    }

    /// Team names of the matching entries, deduplicated across leagues
    pub fn names(&self) -> Vec<&'a str> {
        self.entries()
            .iter()
            .copied()
            .map(|entry| entry.name.as_str())
            .collect::<IndexSet<_>>()
            .into_iter()
            .collect()
    }
}

//------------------------------------------------------------------------------
/// Deduplicated `(team, league)` pairs, in order of first appearance
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TeamDirectory {
    entries: IndexSet<TeamEntry>,
}

impl TeamDirectory {
    /// Collects both teams of every match, paired with the match's league
    pub fn from_matches(matches: &[Match]) -> Self {
        let mut entries = IndexSet::new();
        for record in matches {
            let league = record.league.as_deref().unwrap_or_default();
            for name in [record.team1.as_deref(), record.team2.as_deref()].into_iter().flatten() {
                if name.is_empty() {
                    continue;
                }
                entries.insert(TeamEntry {
                    name: name.to_string(),
                    league: league.to_string(),
                });
            }
        }
        debug!("team directory: {} entries from {} matches", entries.len(), matches.len());
        Self { entries }
    }

    /// All entries
    pub fn entries(&self) -> impl Iterator<Item = &TeamEntry> {
        self.entries.iter()
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True for a directory without entries
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Keeps the entries where every term occurs in the name or the league
    pub fn filter(&self, query: &Query) -> DirectoryLookup<'_> {
        if query.is_empty() {
            return DirectoryLookup::AwaitingQuery;
        }
        DirectoryLookup::Results(self.entries.iter().filter(|entry| entry.matches(query)).collect())
    }
}
