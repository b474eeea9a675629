//! Involvement schedules: which upcoming matches a team or official takes part in.
//!
//! A match is part of the schedule when it kicks off strictly after the reference instant and one
//! of the requested names is exactly its `team1`, `team2` or `referee`. Matches whose day or time
//! cannot be parsed are left out.

use std::borrow::Cow;
use std::fmt::{Display, Error, Formatter};
use std::sync::LazyLock;

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use indexmap::IndexSet;
use regex::Regex;
use serde::Serialize;

use crate::fixture::Match;

static DOTTED_DAY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d{2})\.(\d{2})\.(\d{4})$").expect("day pattern is valid"));

//------------------------------------------------------------------------------
/// The kick-off instant of a match, if it can be worked out
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Kickoff {
    /// Day and time parsed
    Parsed(NaiveDateTime),
    /// Day or time missing or malformed
    Unparseable,
}

impl Kickoff {
    /// Combines a `YYYY-MM-DD` or `DD.MM.YYYY` day with an `HH:MM` time
    pub fn resolve(day: Option<&str>, start_time: Option<&str>) -> Self {
        let (Some(day), Some(start_time)) = (day, start_time) else {
            return Kickoff::Unparseable;
        };

        let day = normalize_day(day.trim());
        let date = NaiveDate::parse_from_str(&day, "%Y-%m-%d");
        let time = NaiveTime::parse_from_str(start_time.trim(), "%H:%M")
            .or_else(|_| NaiveTime::parse_from_str(start_time.trim(), "%H:%M:%S"));

        match (date, time) {
            (Ok(date), Ok(time)) => Kickoff::Parsed(date.and_time(time)),
            _ => Kickoff::Unparseable,
        }
    }

    /// The kick-off of `record`
    pub fn of(record: &Match) -> Self {
        Self::resolve(record.day.as_deref(), record.start_time.as_deref())
    }

    /// The instant, if parsed
    pub fn instant(&self) -> Option<NaiveDateTime> {
        match self {
            Kickoff::Parsed(instant) => Some(*instant),
            Kickoff::Unparseable => None,
        }
    }
}

/// Rewrites `DD.MM.YYYY` to `YYYY-MM-DD`, leaving anything else untouched
fn normalize_day(day: &str) -> Cow<'_, str> {
    match DOTTED_DAY.captures(day) {
        Some(caps) => Cow::Owned(format!("{}-{}-{}", &caps[3], &caps[2], &caps[1])),
        None => Cow::Borrowed(day),
    }
}

//------------------------------------------------------------------------------
/// How someone takes part in a match
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum Role {
    /// Plays as one of the two teams
    Player,
    /// Officiates
    Referee,
}

impl Role {
    /// Label used in involvement strings; the export service parses these
    pub fn label(self) -> &'static str {
        match self {
            Role::Player => "Spieler",
            Role::Referee => "SR",
        }
    }
}

impl Display for Role {
    fn fmt(&self, f: &mut Formatter) -> Result<(), Error> {
        f.write_str(self.label())
    }
}

/// One name in one role
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Involvement {
    /// Team or official
    pub name: String,
    /// Role held
    pub role: Role,
}

impl Display for Involvement {
    fn fmt(&self, f: &mut Formatter) -> Result<(), Error> {
        write!(f, "{} ({})", self.name, self.role)
    }
}

/// An upcoming match of the schedule, ready for listing or export
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InvolvementEntry {
    /// Id of the match in its roster
    #[serde(skip)]
    pub match_id: u32,
    /// Parsed kick-off
    #[serde(skip)]
    pub kickoff: NaiveDateTime,
    /// `"{day} {startTime}"`, day as uploaded
    #[serde(rename = "date")]
    pub when: String,
    /// `"{team1} vs {team2}"`
    pub teams: String,
    /// League with an optional `" - {group}"`
    #[serde(rename = "liga")]
    pub league: String,
    /// The involvements joined as `"{name} ({role})"`, comma separated
    pub involved: String,
    /// Who is involved and how, deduplicated
    #[serde(skip)]
    pub involvements: Vec<Involvement>,
}

impl InvolvementEntry {
    fn new(record: &Match, kickoff: NaiveDateTime, involvements: Vec<Involvement>) -> Self {
        let involved = involvements
            .iter()
            .map(|involvement| involvement.to_string())
            .collect::<Vec<_>>()
            .join(", ");
        Self {
            match_id: record.id,
            kickoff,
            when: record.when_display(),
            teams: record.teams_display(),
            league: record.league_display(),
            involved,
            involvements,
        }
    }
}

/// Involvements of `names` in `record`, deduplicated by `(name, role)`, in name order
fn involvements_of<S: AsRef<str>>(record: &Match, names: &[S]) -> Vec<Involvement> {
    let mut found = IndexSet::new();
    for name in names.iter().map(AsRef::as_ref).filter(|name| !name.is_empty()) {
        if record.team1.as_deref() == Some(name) || record.team2.as_deref() == Some(name) {
            found.insert((name, Role::Player));
        }
        if record.referee.as_deref() == Some(name) {
            found.insert((name, Role::Referee));
        }
    }
    found
        .into_iter()
        .map(|(name, role)| Involvement {
            name: name.to_string(),
            role,
        })
        .collect()
}

/// Upcoming matches involving any of `names`, ordered by kick-off; equal kick-offs keep roster order
pub fn project<S: AsRef<str>>(roster: &[Match], names: &[S], reference: NaiveDateTime) -> Vec<InvolvementEntry> {
    let mut eligible: Vec<(NaiveDateTime, &Match, Vec<Involvement>)> = roster
        .iter()
        .filter_map(|record| {
            let involvements = involvements_of(record, names);
            if involvements.is_empty() {
                return None;
            }
            let Kickoff::Parsed(kickoff) = Kickoff::of(record) else {
                trace!("schedule: skipping {record}, no usable day/time");
                return None;
            };
            (kickoff > reference).then_some((kickoff, record, involvements))
        })
        .collect();

    eligible.sort_by_key(|(kickoff, _, _)| *kickoff);
    debug!("schedule: {} upcoming matches for {} names", eligible.len(), names.len());

    eligible
        .into_iter()
        .map(|(kickoff, record, involvements)| InvolvementEntry::new(record, kickoff, involvements))
        .collect()
}
