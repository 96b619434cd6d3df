//! Free-text filtering of the instruction catalog.
//!
//! A query is trimmed and lowercased once; a record matches when its
//! lowercased mnemonic, description or example contains the query as a
//! contiguous substring. An empty query matches everything.

use crate::record::InstructionRecord;

/// A normalized search query.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Query {
    needle: String,
}

impl Query {
    pub fn new(raw: &str) -> Self {
        Self {
            needle: raw.trim().to_lowercase(),
        }
    }

    /// `true` for the "show everything" query.
    pub fn is_empty(&self) -> bool {
        self.needle.is_empty()
    }

    pub fn as_str(&self) -> &str {
        &self.needle
    }

    pub fn matches(&self, record: &InstructionRecord) -> bool {
        if self.is_empty() {
            return true;
        }

        let hit = |text: &str| text.to_lowercase().contains(&self.needle);

        hit(&record.instruction)
            || hit(&record.description)
            || record.example.as_deref().is_some_and(hit)
    }
}

/// Returns the records matching `query`, in their original order.
pub fn filter<'a, I>(records: I, query: &str) -> Vec<&'a InstructionRecord>
where
    I: IntoIterator<Item = &'a InstructionRecord>,
{
    let query = Query::new(query);
    records.into_iter().filter(|r| query.matches(r)).collect()
}
