//! This module contains the match query engine.
//!
//! Filtering and sorting are pure functions of the roster and a [`ViewState`]; [`Matcher`] only
//! adds ownership of the current roster, which is swapped out wholesale on reload.

use crate::engine::factory::MatchEngineFactory;
use crate::fixture::Match;
use crate::query::Query;
use crate::roster::Roster;
use crate::sort::{SortField, SortOrder, sort_matches};

//==============================================================================
/// Everything a listing depends on besides the roster.
///
/// A value is never changed in place: every user action produces the next revision, and the caller
/// decides when to recompute the view from it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewState {
    query: Query,
    sort: SortOrder,
}

impl ViewState {
    /// Creates a view state
    pub fn new(query: Query, sort: SortOrder) -> Self {
        Self { query, sort }
    }

    /// The current query
    pub fn query(&self) -> &Query {
        &self.query
    }

    /// The current sort order
    pub fn sort(&self) -> SortOrder {
        self.sort
    }

    /// The next revision after the query input changed
    pub fn with_query(&self, raw: &str) -> Self {
        Self {
            query: Query::new(raw),
            sort: self.sort,
        }
    }

    /// The next revision after the user picked a sort column
    pub fn with_sort_click(&self, field: SortField) -> Self {
        Self {
            query: self.query.clone(),
            sort: self.sort.clicked(field),
        }
    }
}

//==============================================================================
/// How a listing came about
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewOutcome {
    /// No query: the whole roster is listed
    Unfiltered,
    /// The query kept this many matches
    Matched(usize),
    /// The query kept nothing
    NoMatches,
}

impl ViewOutcome {
    /// Status line for the listing
    pub fn describe(&self, query: &Query) -> String {
        match self {
            ViewOutcome::Unfiltered => String::from("all matches"),
            ViewOutcome::Matched(1) => format!("1 match for \"{query}\""),
            ViewOutcome::Matched(n) => format!("{n} matches for \"{query}\""),
            ViewOutcome::NoMatches => format!("no matches found for \"{query}\""),
        }
    }
}

/// A filtered and sorted listing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchView<'a> {
    /// The listed matches, in display order
    pub matches: Vec<&'a Match>,
    /// Whether a query was applied and what it kept
    pub outcome: ViewOutcome,
}

impl MatchView<'_> {
    /// Ids of the listed matches, in display order
    pub fn ids(&self) -> Vec<u32> {
        self.matches.iter().map(|m| m.id).collect()
    }

    /// True if a query narrowed the listing
    pub fn is_filtered(&self) -> bool {
        self.outcome != ViewOutcome::Unfiltered
    }

    /// Number of listed matches
    pub fn len(&self) -> usize {
        self.matches.len()
    }

    /// True if nothing is listed
    pub fn is_empty(&self) -> bool {
        self.matches.is_empty()
    }
}

//==============================================================================
/// Keeps the records matching every term of `query`; the empty query keeps everything, in order
pub fn filter<'a>(roster: &'a [Match], query: &Query) -> Vec<&'a Match> {
    filter_with(&MatchEngineFactory::default(), roster, query)
}

fn filter_with<'a>(factory: &MatchEngineFactory, roster: &'a [Match], query: &Query) -> Vec<&'a Match> {
    match factory.create_engine(query) {
        Some(engine) => engine.match_records(roster),
        None => roster.iter().collect(),
    }
}

/// Returns `records` stable-sorted by `order`
pub fn sort<'a>(mut records: Vec<&'a Match>, order: SortOrder) -> Vec<&'a Match> {
    sort_matches(&mut records, order);
    records
}

/// Filters, then sorts
pub fn view<'a>(roster: &'a [Match], state: &ViewState) -> MatchView<'a> {
    view_with(&MatchEngineFactory::default(), roster, state)
}

fn view_with<'a>(factory: &MatchEngineFactory, roster: &'a [Match], state: &ViewState) -> MatchView<'a> {
    let matches = sort(filter_with(factory, roster, state.query()), state.sort());
    let outcome = if state.query().is_empty() {
        ViewOutcome::Unfiltered
    } else if matches.is_empty() {
        ViewOutcome::NoMatches
    } else {
        ViewOutcome::Matched(matches.len())
    };
    trace!("view: {} of {} matches, {outcome:?}", matches.len(), roster.len());
    MatchView { matches, outcome }
}

//==============================================================================
/// The match query engine: owns the current roster and answers listing requests against it.
#[derive(Debug, Default)]
pub struct Matcher {
    roster: Roster,
    engine_factory: MatchEngineFactory,
}

impl Matcher {
    /// Creates a Matcher over `roster`
    pub fn new(roster: Roster) -> Self {
        Self {
            roster,
            engine_factory: MatchEngineFactory::default(),
        }
    }

    /// Sets the engine factory used for filtering
    pub fn engine_factory(mut self, engine_factory: MatchEngineFactory) -> Self {
        self.engine_factory = engine_factory;
        self
    }

    /// Replaces the roster; views borrowed from the old one must be dropped first
    pub fn load(&mut self, roster: Roster) {
        debug!("replacing roster of {} with {} matches", self.roster.len(), roster.len());
        self.roster = roster;
    }

    /// The current roster
    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    /// See [`filter`]
    pub fn filter(&self, query: &Query) -> Vec<&Match> {
        filter_with(&self.engine_factory, &self.roster, query)
    }

    /// See [`view`]
    pub fn view(&self, state: &ViewState) -> MatchView<'_> {
        view_with(&self.engine_factory, &self.roster, state)
    }
}
