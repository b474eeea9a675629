//! Convenience re-exports of commonly used types.
//!
//! This module provides a convenient way to import all the commonly used
//! spielplan types and functions with a single `use spielplan::prelude::*;` statement.

pub use crate::directory::{DirectoryLookup, TeamDirectory, TeamEntry};
pub use crate::highlight::{HighlightSpan, Highlighted, Segment, annotate, highlight_spans};
pub use crate::options::{SpielplanOptions, SpielplanOptionsBuilder, parse_reference_instant};
pub use crate::request::{REPORT_BUNDLE_NAME, ReportRequest, ScheduleExport, report_file_name};
pub use crate::schedule::{Involvement, InvolvementEntry, Kickoff, Role, project};
pub use crate::selection::Selection;
pub use crate::sort::{SortDirection, SortField, SortOrder, missing_field_text};
pub use crate::*;
pub use chrono::NaiveDateTime;
