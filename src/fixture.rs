//! Match records as they arrive from the uploaded schedule.
//!
//! The upload is a spreadsheet export, so every cell is optional and may come through as a string,
//! a number or `null`. Text fields are kept as `Option<String>`: `None` means the cell holds no
//! text. Whether it was `null` or missing altogether is remembered in [`Match::null_cells`], which
//! matters for sorting (see [`crate::sort::missing_field_text`]).

use std::fmt::{Display, Error, Formatter};

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

//------------------------------------------------------------------------------
/// A single scheduled match
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "UploadRecord")]
pub struct Match {
    /// Load-time identifier, unique within one roster
    pub id: u32,
    /// Home team
    #[serde(rename = "Team 1")]
    pub team1: Option<String>,
    /// Away team
    #[serde(rename = "Team 2")]
    pub team2: Option<String>,
    /// League the match belongs to
    #[serde(rename = "Liga")]
    pub league: Option<String>,
    /// Group within the league, if the league is split
    #[serde(rename = "Gruppe")]
    pub group: Option<String>,
    /// Referee, may be empty
    #[serde(rename = "Schiedsrichter")]
    pub referee: Option<String>,
    /// Second referee, only carried through to report generation
    #[serde(rename = "Schiedsrichter 2")]
    pub referee2: Option<String>,
    /// Match day, either `YYYY-MM-DD` or `DD.MM.YYYY`
    #[serde(rename = "Tag")]
    pub day: Option<String>,
    /// Kick-off time, `HH:MM`
    #[serde(rename = "Startzeit")]
    pub start_time: Option<String>,
    /// Pitch, only carried through to report generation
    #[serde(rename = "Feld")]
    pub pitch: Option<String>,
    /// Fields whose cell was uploaded as `null` rather than left out
    #[serde(skip)]
    pub null_cells: NullCells,
}

/// Why a field holds no text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Blank {
    /// The column was not part of the record
    Missing,
    /// The cell was uploaded as `null`
    Null,
}

/// A set of [`MatchField`]s
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct NullCells(u8);

impl NullCells {
    fn bit(field: MatchField) -> u8 {
        1 << field as u8
    }

    /// Marks `field` as `null`
    pub fn insert(&mut self, field: MatchField) {
        self.0 |= Self::bit(field);
    }

    /// Whether `field` was uploaded as `null`
    pub fn contains(&self, field: MatchField) -> bool {
        self.0 & Self::bit(field) != 0
    }
}

impl Match {
    /// Why `field` holds no text; only meaningful when [`MatchField::value`] is `None`
    pub fn blank(&self, field: MatchField) -> Blank {
        if self.null_cells.contains(field) {
            Blank::Null
        } else {
            Blank::Missing
        }
    }

    /// `"{team1} vs {team2}"`, absent teams render empty
    pub fn teams_display(&self) -> String {
        format!(
            "{} vs {}",
            self.team1.as_deref().unwrap_or_default(),
            self.team2.as_deref().unwrap_or_default()
        )
    }

    /// The league, followed by `" - {group}"` when the match has a group
    pub fn league_display(&self) -> String {
        let league = self.league.as_deref().unwrap_or_default();
        match self.group.as_deref() {
            Some(group) if !group.is_empty() => format!("{league} - {group}"),
            _ => league.to_string(),
        }
    }

    /// `"{day} {startTime}"` using the day exactly as uploaded
    pub fn when_display(&self) -> String {
        format!(
            "{} {}",
            self.day.as_deref().unwrap_or_default(),
            self.start_time.as_deref().unwrap_or_default()
        )
    }
}

impl Display for Match {
    fn fmt(&self, f: &mut Formatter) -> Result<(), Error> {
        write!(f, "#{} {}", self.id, self.teams_display())
    }
}

//------------------------------------------------------------------------------
/// The text fields of a [`Match`] that can be searched, sorted or highlighted.
///
/// Field selection is resolved once into a typed accessor instead of looking fields up by name for
/// every record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MatchField {
    /// `Team 1`
    Team1,
    /// `Team 2`
    Team2,
    /// `Liga`
    League,
    /// `Gruppe`
    Group,
    /// `Schiedsrichter`
    Referee,
    /// `Startzeit`
    StartTime,
    /// `Tag`
    Day,
}

/// Reads one field of a match
pub type FieldAccessor = fn(&Match) -> Option<&str>;

impl MatchField {
    /// Every field a query term is checked against, in checking order
    pub const SEARCHABLE: [MatchField; 7] = [
        MatchField::Team1,
        MatchField::Team2,
        MatchField::League,
        MatchField::Group,
        MatchField::Referee,
        MatchField::StartTime,
        MatchField::Day,
    ];

    /// Resolves the field to its accessor
    pub fn accessor(self) -> FieldAccessor {
        match self {
            MatchField::Team1 => team1,
            MatchField::Team2 => team2,
            MatchField::League => league,
            MatchField::Group => group,
            MatchField::Referee => referee,
            MatchField::StartTime => start_time,
            MatchField::Day => day,
        }
    }

    /// Reads this field from `record`
    pub fn value(self, record: &Match) -> Option<&str> {
        (self.accessor())(record)
    }

    /// The spreadsheet column the field is uploaded as
    pub fn column(self) -> &'static str {
        match self {
            MatchField::Team1 => "Team 1",
            MatchField::Team2 => "Team 2",
            MatchField::League => "Liga",
            MatchField::Group => "Gruppe",
            MatchField::Referee => "Schiedsrichter",
            MatchField::StartTime => "Startzeit",
            MatchField::Day => "Tag",
        }
    }
}

fn team1(record: &Match) -> Option<&str> {
    record.team1.as_deref()
}

fn team2(record: &Match) -> Option<&str> {
    record.team2.as_deref()
}

fn league(record: &Match) -> Option<&str> {
    record.league.as_deref()
}

fn group(record: &Match) -> Option<&str> {
    record.group.as_deref()
}

fn referee(record: &Match) -> Option<&str> {
    record.referee.as_deref()
}

fn start_time(record: &Match) -> Option<&str> {
    record.start_time.as_deref()
}

fn day(record: &Match) -> Option<&str> {
    record.day.as_deref()
}

//------------------------------------------------------------------------------
// Lenient cell decoding

/// A record exactly as uploaded; `None` is a missing column, `Some(Value::Null)` a `null` cell
#[derive(Deserialize)]
struct UploadRecord {
    #[serde(default, deserialize_with = "lenient_id")]
    id: u32,
    #[serde(rename = "Team 1", default, deserialize_with = "present")]
    team1: Option<Value>,
    #[serde(rename = "Team 2", default, deserialize_with = "present")]
    team2: Option<Value>,
    #[serde(rename = "Liga", default, deserialize_with = "present")]
    league: Option<Value>,
    #[serde(rename = "Gruppe", default, deserialize_with = "present")]
    group: Option<Value>,
    #[serde(rename = "Schiedsrichter", default, deserialize_with = "present")]
    referee: Option<Value>,
    #[serde(rename = "Schiedsrichter 2", default, deserialize_with = "present")]
    referee2: Option<Value>,
    #[serde(rename = "Tag", default, deserialize_with = "present")]
    day: Option<Value>,
    #[serde(rename = "Startzeit", default, deserialize_with = "present")]
    start_time: Option<Value>,
    #[serde(rename = "Feld", default, deserialize_with = "present")]
    pitch: Option<Value>,
}

impl From<UploadRecord> for Match {
    fn from(upload: UploadRecord) -> Self {
        let mut null_cells = NullCells::default();
        let mut text = |field: MatchField, cell: Option<Value>| {
            if cell.as_ref().is_some_and(Value::is_null) {
                null_cells.insert(field);
            }
            cell.and_then(cell_text)
        };

        let team1 = text(MatchField::Team1, upload.team1);
        let team2 = text(MatchField::Team2, upload.team2);
        let league = text(MatchField::League, upload.league);
        let group = text(MatchField::Group, upload.group);
        let referee = text(MatchField::Referee, upload.referee);
        let day = text(MatchField::Day, upload.day);
        let start_time = text(MatchField::StartTime, upload.start_time);

        Match {
            id: upload.id,
            team1,
            team2,
            league,
            group,
            referee,
            referee2: upload.referee2.and_then(cell_text),
            day,
            start_time,
            pitch: upload.pitch.and_then(cell_text),
            null_cells,
        }
    }
}

/// Only called for keys that are present, so a `null` cell stays distinguishable from a missing one
fn present<'de, D>(deserializer: D) -> Result<Option<Value>, D::Error>
where
    D: Deserializer<'de>,
{
    Value::deserialize(deserializer).map(Some)
}

fn lenient_id<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value
        .and_then(|v| v.as_u64())
        .and_then(|id| u32::try_from(id).ok())
        .unwrap_or_default())
}

/// Stringifies a spreadsheet cell the way the front end displays it: whole floats lose their
/// fractional part, `null` is absent.
fn cell_text(value: Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s),
        Value::Bool(b) => Some(b.to_string()),
        Value::Number(n) => {
            let text = match n.as_f64() {
                Some(f) if n.is_f64() && f.is_finite() && f.fract() == 0.0 && f.abs() < 1e15 => {
                    format!("{}", f as i64)
                }
                _ => n.to_string(),
            };
            Some(text)
        }
        other => Some(other.to_string()),
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_deserialize_spreadsheet_record() {
        let record: Match = serde_json::from_str(
            r#"{
                "Team 1": "Rot Stars",
                "Team 2": "Blau Weiss",
                "Liga": "Kreisliga",
                "Gruppe": null,
                "Schiedsrichter": "Meyer",
                "Tag": "15.03.2099",
                "Startzeit": "10:00",
                "Feld": 3.0,
                "index": 7
            }"#,
        )
        .unwrap();

        assert_eq!(record.id, 0);
        assert_eq!(record.team1.as_deref(), Some("Rot Stars"));
        assert_eq!(record.group, None);
        assert_eq!(record.referee2, None);
        assert_eq!(record.pitch.as_deref(), Some("3"));
        assert_eq!(record.blank(MatchField::Group), Blank::Null);
        assert_eq!(record.blank(MatchField::Referee), Blank::Missing);
    }

    #[test]
    fn test_null_and_missing_cells() {
        let record: Match = serde_json::from_str(r#"{"Schiedsrichter": null, "Gruppe": "", "Tag": 5}"#).unwrap();
        assert_eq!(record.referee, None);
        assert_eq!(record.blank(MatchField::Referee), Blank::Null);
        assert_eq!(record.group.as_deref(), Some(""));
        assert!(!record.null_cells.contains(MatchField::Group));
        assert_eq!(record.team1, None);
        assert_eq!(record.blank(MatchField::Team1), Blank::Missing);
        assert_eq!(record.day.as_deref(), Some("5"));
    }

    #[test]
    fn test_cell_text() {
        assert_eq!(cell_text(Value::Null), None);
        assert_eq!(cell_text(serde_json::json!(12)), Some("12".to_string()));
        assert_eq!(cell_text(serde_json::json!(1.5)), Some("1.5".to_string()));
        assert_eq!(cell_text(serde_json::json!(true)), Some("true".to_string()));
    }

    #[test]
    fn test_displays() {
        let record = Match {
            team1: Some("A".into()),
            team2: Some("B".into()),
            league: Some("Liga 1".into()),
            group: Some("Nord".into()),
            day: Some("2099-01-02".into()),
            start_time: Some("09:30".into()),
            ..Default::default()
        };
        assert_eq!(record.teams_display(), "A vs B");
        assert_eq!(record.league_display(), "Liga 1 - Nord");
        assert_eq!(record.when_display(), "2099-01-02 09:30");

        let ungrouped = Match {
            league: Some("Liga 1".into()),
            group: Some(String::new()),
            ..Default::default()
        };
        assert_eq!(ungrouped.league_display(), "Liga 1");
    }

    #[test]
    fn test_accessors() {
        let record = Match {
            referee: Some("Meyer".into()),
            ..Default::default()
        };
        assert_eq!(MatchField::Referee.value(&record), Some("Meyer"));
        assert_eq!(MatchField::Group.value(&record), None);
        assert_eq!(MatchField::StartTime.column(), "Startzeit");
    }
}
