//! The loaded roster.
//!
//! A roster is replaced wholesale on every upload and never edited in place. Ids are assigned here,
//! 1-based in upload order, and are only meaningful for the roster that assigned them.

use std::fs::File;
use std::io::{BufReader, Read};
use std::ops::Deref;
use std::path::Path;
use std::sync::Arc;

use indexmap::IndexSet;
use serde::Deserialize;
use thiserror::Error;

use crate::fixture::Match;

/// Errors raised while loading a roster
#[derive(Debug, Error)]
pub enum RosterError {
    /// The roster could not be read
    #[error("failed to read roster: {0}")]
    Io(#[from] std::io::Error),
    /// The roster is not JSON, or not shaped like a list of match records
    #[error("failed to parse roster: {0}")]
    Json(#[from] serde_json::Error),
    /// The upload response reported a failure
    #[error("upload was rejected: {0}")]
    Rejected(String),
}

/// What an upload can deliver: the bare record list, or the upload endpoint's response object
#[derive(Deserialize)]
#[serde(untagged)]
enum RosterPayload {
    Records(Vec<Match>),
    Upload {
        #[serde(default = "accepted")]
        success: bool,
        #[serde(default)]
        matches: Vec<Match>,
        #[serde(default)]
        detail: Option<String>,
        #[serde(default)]
        message: Option<String>,
    },
}

fn accepted() -> bool {
    true
}

//------------------------------------------------------------------------------
/// An immutable, ordered set of matches
#[derive(Debug, Clone, Default)]
pub struct Roster {
    matches: Arc<[Match]>,
}

impl Roster {
    /// Builds a roster, assigning ids `1..=n` in iteration order
    pub fn new(records: impl IntoIterator<Item = Match>) -> Self {
        let matches: Vec<Match> = records
            .into_iter()
            .zip(1..)
            .map(|(mut record, id)| {
                record.id = id;
                record
            })
            .collect();
        debug!("roster loaded, {} matches", matches.len());
        Self {
            matches: matches.into(),
        }
    }

    /// Parses an upload payload
    pub fn from_json_str(json: &str) -> Result<Self, RosterError> {
        Self::from_payload(serde_json::from_str(json)?)
    }

    /// Reads an upload payload
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, RosterError> {
        Self::from_payload(serde_json::from_reader(reader)?)
    }

    /// Reads an upload payload from a file
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, RosterError> {
        let file = File::open(path)?;
        Self::from_reader(BufReader::new(file))
    }

    fn from_payload(payload: RosterPayload) -> Result<Self, RosterError> {
        match payload {
            RosterPayload::Records(records) => Ok(Self::new(records)),
            RosterPayload::Upload {
                success: true, matches, ..
            } => Ok(Self::new(matches)),
            RosterPayload::Upload { detail, message, .. } => Err(RosterError::Rejected(
                detail.or(message).unwrap_or_else(|| String::from("no reason given")),
            )),
        }
    }

    /// All matches, in upload order
    pub fn matches(&self) -> &[Match] {
        &self.matches
    }

    /// Looks a match up by id
    pub fn get(&self, id: u32) -> Option<&Match> {
        let index = usize::try_from(id.checked_sub(1)?).ok()?;
        self.matches.get(index).filter(|m| m.id == id)
    }

    /// Non-empty referee names, deduplicated, in order of first appearance
    pub fn officials(&self) -> Vec<&str> {
        self.matches
            .iter()
            .filter_map(|m| m.referee.as_deref())
            .filter(|name| !name.is_empty())
            .collect::<IndexSet<_>>()
            .into_iter()
            .collect()
    }
}

impl Deref for Roster {
    type Target = [Match];

    fn deref(&self) -> &[Match] {
        &self.matches
    }
}

impl From<Vec<Match>> for Roster {
    fn from(records: Vec<Match>) -> Self {
        Self::new(records)
    }
}
