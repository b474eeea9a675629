//! Configuration options for spielplan.
//!
//! This module provides the `SpielplanOptions` struct and builder. The same struct is the command
//! line of `spq` when the `cli` feature is enabled.

use std::path::PathBuf;

use chrono::{Local, NaiveDateTime};
use derive_builder::Builder;

use crate::matcher::ViewState;
use crate::query::Query;
use crate::sort::{SortDirection, SortField, SortOrder};

/// Format of the reference instant on the command line
pub const REFERENCE_INSTANT_FORMAT: &str = "%Y-%m-%d %H:%M";

/// Parses a `YYYY-MM-DD HH:MM` reference instant
pub fn parse_reference_instant(s: &str) -> Result<NaiveDateTime, String> {
    NaiveDateTime::parse_from_str(s.trim(), REFERENCE_INSTANT_FORMAT)
        .map_err(|e| format!("Invalid instant `{s}`, expected YYYY-MM-DD HH:MM: {e}"))
}

/// spq - query a match roster
///
/// Reads a roster (a JSON list of matches, or an upload response) and lists, filters and sorts its
/// matches, looks up teams, or projects upcoming matches for teams and officials.
#[derive(Debug, Clone, Builder)]
#[builder(build_fn(name = "final_build"))]
#[builder(default)]
#[cfg_attr(feature = "cli", derive(clap::Parser))]
#[cfg_attr(
    feature = "cli",
    command(name = "spq", args_override_self = true, verbatim_doc_comment, version, about)
)]
pub struct SpielplanOptions {
    /// Roster to read, `-` or nothing for stdin
    #[cfg_attr(feature = "cli", arg(help_heading = "Input"))]
    pub input: Option<PathBuf>,

    //  --- Listing ---
    /// Only list matches containing every term of the query
    ///
    /// Terms are separated by whitespace and compared case-insensitively against both teams, the
    /// league, the group, the referee, the start time and the day.
    #[cfg_attr(feature = "cli", arg(short, long, default_value = "", help_heading = "Listing"))]
    pub query: String,

    /// Field to sort the listing by
    #[cfg_attr(
        feature = "cli",
        arg(short, long, value_enum, default_value = "id", help_heading = "Listing")
    )]
    pub sort: SortField,

    /// Sort descending
    #[cfg_attr(feature = "cli", arg(long, help_heading = "Listing"))]
    pub desc: bool,

    /// Marker inserted before a highlighted term
    #[cfg_attr(feature = "cli", arg(long, default_value = "[", help_heading = "Listing"))]
    pub highlight_open: String,

    /// Marker inserted after a highlighted term
    #[cfg_attr(feature = "cli", arg(long, default_value = "]", help_heading = "Listing"))]
    pub highlight_close: String,

    /// Print the report request for the listed matches instead of the listing
    #[cfg_attr(feature = "cli", arg(long, help_heading = "Listing"))]
    pub report: bool,

    //  --- Teams ---
    /// Look teams up instead of listing matches
    ///
    /// Every term must occur in the team name or its league.
    #[cfg_attr(feature = "cli", arg(short, long, help_heading = "Teams"))]
    pub teams: Option<String>,

    /// List the officials refereeing at least one match
    #[cfg_attr(feature = "cli", arg(long, help_heading = "Teams"))]
    pub officials: bool,

    //  --- Schedule ---
    /// Names (teams or officials) to list upcoming matches for
    ///
    /// Comma separated, may be given more than once. Names must match exactly.
    #[cfg_attr(
        feature = "cli",
        arg(short = 'S', long, value_delimiter = ',', help_heading = "Schedule")
    )]
    pub schedule: Vec<String>,

    /// Reference instant for the schedule, `YYYY-MM-DD HH:MM`
    ///
    /// Only matches kicking off strictly after it are listed. Defaults to now, local time.
    #[cfg_attr(
        feature = "cli",
        arg(long, value_parser = parse_reference_instant, help_heading = "Schedule")
    )]
    pub now: Option<NaiveDateTime>,

    //  --- Output ---
    /// Print JSON instead of text
    #[cfg_attr(feature = "cli", arg(long, help_heading = "Output"))]
    pub json: bool,
}

impl Default for SpielplanOptions {
    fn default() -> Self {
        Self {
            input: Default::default(),
            query: Default::default(),
            sort: SortField::Id,
            desc: Default::default(),
            highlight_open: String::from("["),
            highlight_close: String::from("]"),
            report: Default::default(),
            teams: Default::default(),
            officials: Default::default(),
            schedule: Default::default(),
            now: Default::default(),
            json: Default::default(),
        }
    }
}

impl SpielplanOptionsBuilder {
    /// Builds the SpielplanOptions from the builder
    pub fn build(&mut self) -> Result<SpielplanOptions, SpielplanOptionsBuilderError> {
        self.final_build().map(|opts| opts.build())
    }
}

impl SpielplanOptions {
    /// Finalizes the options: `-` input means stdin, schedule names are trimmed and empty ones
    /// dropped
    pub fn build(mut self) -> Self {
        if self.input.as_ref().is_some_and(|path| path.as_os_str() == "-") {
            self.input = None;
        }

        self.schedule = self
            .schedule
            .iter()
            .map(|name| name.trim())
            .filter(|name| !name.is_empty())
            .map(String::from)
            .collect();

        self
    }

    /// The instant upcoming matches are measured against
    pub fn reference_instant(&self) -> NaiveDateTime {
        self.now.unwrap_or_else(|| Local::now().naive_local())
    }

    /// The requested sort order
    pub fn sort_order(&self) -> SortOrder {
        let direction = if self.desc {
            SortDirection::Desc
        } else {
            SortDirection::Asc
        };
        SortOrder::new(self.sort, direction)
    }

    /// The view the listing starts from
    pub fn view_state(&self) -> ViewState {
        ViewState::new(Query::new(&self.query), self.sort_order())
    }

    /// The directory query, if a lookup was requested
    pub fn team_query(&self) -> Option<Query> {
        self.teams.as_deref().map(Query::new)
    }
}
