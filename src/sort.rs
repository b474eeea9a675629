//! Sorting of match listings.
//!
//! Sorting is stable: records comparing equal keep their relative input order, in both directions.

use std::cmp::Ordering;
use std::fmt::{Display, Error, Formatter};
use std::str::FromStr;

#[cfg(feature = "cli")]
use clap::ValueEnum;
#[cfg(feature = "cli")]
use clap::builder::PossibleValue;

use crate::collate::CollationKey;
use crate::fixture::{Blank, Match, MatchField};

/// Text standing in for a field without text when sorting.
///
/// Blank cells compare as if they held this literal, so a `null` cell lands among the "n"s and a
/// missing one among the "u"s rather than first or last.
pub fn missing_field_text(blank: Blank) -> &'static str {
    match blank {
        Blank::Null => "null",
        Blank::Missing => "undefined",
    }
}

fn sort_text(record: &Match, field: MatchField) -> &str {
    field
        .value(record)
        .unwrap_or_else(|| missing_field_text(record.blank(field)))
}

//------------------------------------------------------------------------------
/// Columns a listing can be sorted by
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum SortField {
    /// Load order, compared numerically
    #[default]
    Id,
    /// Kick-off time
    StartTime,
    /// `"{team1} {team2}"`
    Teams,
    /// League
    League,
    /// Group
    Group,
    /// Referee
    Referee,
    /// Match day, compared as uploaded text
    Day,
}

/// How a text-sorted column is read from a record
enum TextKey {
    Teams,
    Field(MatchField),
}

impl SortField {
    /// `None` for [`SortField::Id`], which compares numerically
    fn text_key(self) -> Option<TextKey> {
        match self {
            SortField::Id => None,
            SortField::Teams => Some(TextKey::Teams),
            SortField::StartTime => Some(TextKey::Field(MatchField::StartTime)),
            SortField::League => Some(TextKey::Field(MatchField::League)),
            SortField::Group => Some(TextKey::Field(MatchField::Group)),
            SortField::Referee => Some(TextKey::Field(MatchField::Referee)),
            SortField::Day => Some(TextKey::Field(MatchField::Day)),
        }
    }

    /// The name used on the command line
    pub fn name(self) -> &'static str {
        match self {
            SortField::Id => "id",
            SortField::StartTime => "time",
            SortField::Teams => "teams",
            SortField::League => "league",
            SortField::Group => "group",
            SortField::Referee => "referee",
            SortField::Day => "day",
        }
    }
}

impl TextKey {
    fn collation_key(&self, record: &Match) -> CollationKey {
        match self {
            TextKey::Teams => CollationKey::new(&format!(
                "{} {}",
                sort_text(record, MatchField::Team1),
                sort_text(record, MatchField::Team2)
            )),
            TextKey::Field(field) => CollationKey::new(sort_text(record, *field)),
        }
    }
}

impl FromStr for SortField {
    type Err = String;

    /// Accepts the command line names as well as the upload's column names
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "id" | "nr" => Ok(SortField::Id),
            "time" | "starttime" | "startzeit" => Ok(SortField::StartTime),
            "teams" => Ok(SortField::Teams),
            "league" | "liga" => Ok(SortField::League),
            "group" | "gruppe" => Ok(SortField::Group),
            "referee" | "schiedsrichter" => Ok(SortField::Referee),
            "day" | "tag" => Ok(SortField::Day),
            other => Err(format!("unknown sort field `{other}`")),
        }
    }
}

impl Display for SortField {
    fn fmt(&self, f: &mut Formatter) -> Result<(), Error> {
        f.write_str(self.name())
    }
}

#[cfg(feature = "cli")]
impl ValueEnum for SortField {
    fn value_variants<'a>() -> &'a [Self] {
        use SortField::*;
        &[Id, StartTime, Teams, League, Group, Referee, Day]
    }

    fn to_possible_value(&self) -> Option<PossibleValue> {
        use SortField::*;
        Some(match self {
            Id => PossibleValue::new("id"),
            StartTime => PossibleValue::new("time").alias("startzeit"),
            Teams => PossibleValue::new("teams"),
            League => PossibleValue::new("league").alias("liga"),
            Group => PossibleValue::new("group").alias("gruppe"),
            Referee => PossibleValue::new("referee").alias("schiedsrichter"),
            Day => PossibleValue::new("day").alias("tag"),
        })
    }
}

//------------------------------------------------------------------------------
/// Sort direction
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum SortDirection {
    /// Ascending
    #[default]
    Asc,
    /// Descending
    Desc,
}

impl SortDirection {
    /// The opposite direction
    pub fn toggled(self) -> Self {
        match self {
            SortDirection::Asc => SortDirection::Desc,
            SortDirection::Desc => SortDirection::Asc,
        }
    }

    /// Applies the direction to an ascending comparison result; ties stay ties
    pub fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            SortDirection::Asc => ordering,
            SortDirection::Desc => ordering.reverse(),
        }
    }
}

//------------------------------------------------------------------------------
/// Field and direction of a listing
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct SortOrder {
    /// Field sorted by
    pub field: SortField,
    /// Direction
    pub direction: SortDirection,
}

impl SortOrder {
    /// Creates a sort order
    pub fn new(field: SortField, direction: SortDirection) -> Self {
        Self { field, direction }
    }

    /// The order after the user picks `field`: the same field flips direction, a new field starts
    /// ascending
    pub fn clicked(self, field: SortField) -> Self {
        if field == self.field {
            Self::new(field, self.direction.toggled())
        } else {
            Self::new(field, SortDirection::Asc)
        }
    }

    /// Compares two records under this order
    pub fn compare(&self, a: &Match, b: &Match) -> Ordering {
        let ascending = match self.field.text_key() {
            None => a.id.cmp(&b.id),
            Some(key) => key.collation_key(a).cmp(&key.collation_key(b)),
        };
        self.direction.apply(ascending)
    }
}

/// Stable-sorts `records` by `order`
pub fn sort_matches(records: &mut Vec<&Match>, order: SortOrder) {
    match order.field.text_key() {
        None => records.sort_by(|a, b| order.direction.apply(a.id.cmp(&b.id))),
        Some(key) => {
            let mut keyed: Vec<(CollationKey, &Match)> =
                records.iter().map(|record| (key.collation_key(record), *record)).collect();
            keyed.sort_by(|(a, _), (b, _)| order.direction.apply(a.cmp(b)));
            *records = keyed.into_iter().map(|(_, record)| record).collect();
        }
    }
}
