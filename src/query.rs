//! Query parsing.

use std::convert::Infallible;
use std::fmt::{Display, Error, Formatter};
use std::str::FromStr;

/// A parsed search query: the trimmed input plus its lower-cased, whitespace separated terms.
///
/// An empty query means "no filter", which is not the same as a query that matches nothing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Query {
    text: String,
    terms: Vec<String>,
}

impl Query {
    /// Parses `raw`
    pub fn new(raw: &str) -> Self {
        let text = raw.trim().to_string();
        let terms = text.to_lowercase().split_whitespace().map(String::from).collect();
        Self { text, terms }
    }

    /// True when no term was entered
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// The lower-cased terms, in input order
    pub fn terms(&self) -> &[String] {
        &self.terms
    }

    /// The trimmed input, case preserved
    pub fn as_str(&self) -> &str {
        &self.text
    }
}

impl FromStr for Query {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::new(s))
    }
}

impl From<&str> for Query {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl Display for Query {
    fn fmt(&self, f: &mut Formatter) -> Result<(), Error> {
        f.write_str(&self.text)
    }
}
