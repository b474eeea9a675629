//! Payloads handed to the report and export services.
//!
//! Neither service is part of this crate; these types only fix what is sent and how the results are
//! named.

use serde::Serialize;

use crate::fixture::Match;
use crate::roster::Roster;
use crate::schedule::InvolvementEntry;
use crate::selection::Selection;

/// Name of the archive bundling more than one report
pub const REPORT_BUNDLE_NAME: &str = "spielberichte.zip";

/// File name of the report generated for `record`.
///
/// Spaces and slashes in the team names are replaced by underscores.
pub fn report_file_name(record: &Match) -> String {
    let name = format!(
        "spielbericht_{}_{}_vs_{}.pdf",
        record.id,
        record.team1.as_deref().unwrap_or_default(),
        record.team2.as_deref().unwrap_or_default()
    );
    name.replace([' ', '/'], "_")
}

//------------------------------------------------------------------------------
/// Ids of the matches to generate reports for, sent as a bare JSON array
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ReportRequest {
    ids: Vec<u32>,
}

impl ReportRequest {
    /// A request for the given ids, in the given order
    pub fn new(ids: impl IntoIterator<Item = u32>) -> Self {
        Self {
            ids: ids.into_iter().collect(),
        }
    }

    /// A request for every selected match
    pub fn from_selection(selection: &Selection) -> Self {
        Self::new(selection.ids())
    }

    /// Requested ids
    pub fn ids(&self) -> &[u32] {
        &self.ids
    }

    /// True if nothing is requested
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// The JSON body
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    /// Name of the file the service returns: the single report, or the bundle for several.
    ///
    /// `None` for an empty request, or a single id unknown to `roster`.
    pub fn download_name(&self, roster: &Roster) -> Option<String> {
        match self.ids.as_slice() {
            [] => None,
            [id] => roster.get(*id).map(report_file_name),
            _ => Some(REPORT_BUNDLE_NAME.to_string()),
        }
    }
}

//------------------------------------------------------------------------------
/// A projected schedule sent for export
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScheduleExport<'a> {
    /// The names the schedule was projected for
    pub teams: Vec<String>,
    /// The projected matches
    pub entries: &'a [InvolvementEntry],
}

impl<'a> ScheduleExport<'a> {
    /// Bundles a projection with the names it was made for; empty names are dropped
    pub fn new<S: AsRef<str>>(names: &[S], entries: &'a [InvolvementEntry]) -> Self {
        Self {
            teams: names
                .iter()
                .map(AsRef::as_ref)
                .filter(|name| !name.is_empty())
                .map(String::from)
                .collect(),
            entries,
        }
    }

    /// The JSON body
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}
