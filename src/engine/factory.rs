use crate::engine::MatchEngine;
use crate::engine::andor::AndEngine;
use crate::engine::term::TermEngine;
use crate::fixture::MatchField;
use crate::query::Query;

//------------------------------------------------------------------------------
/// Compiles queries into engines
#[derive(Debug, Clone)]
pub struct MatchEngineFactory {
    fields: Vec<MatchField>,
}

impl Default for MatchEngineFactory {
    fn default() -> Self {
        Self {
            fields: MatchField::SEARCHABLE.to_vec(),
        }
    }
}

impl MatchEngineFactory {
    /// A factory whose engines only look at `fields`
    pub fn with_fields(fields: &[MatchField]) -> Self {
        Self {
            fields: fields.to_vec(),
        }
    }

    /// Builds the engine for `query`, `None` for an empty query (no filtering at all)
    pub fn create_engine(&self, query: &Query) -> Option<Box<dyn MatchEngine>> {
        if query.is_empty() {
            return None;
        }

        let engines = query
            .terms()
            .iter()
            .map(|term| Box::new(TermEngine::builder(term).fields(&self.fields).build()) as Box<dyn MatchEngine>)
            .collect();
        let engine = AndEngine::builder().engines(engines).build();
        debug!("engine: {engine}");
        Some(Box::new(engine))
    }
}
