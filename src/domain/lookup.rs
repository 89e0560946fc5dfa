//! Lookup term classification for single-product queries.

use uuid::Uuid;

/// How a lookup string should be matched against the catalog.
///
/// A term that parses as a UUID is a primary-key lookup; anything else
/// is matched against title (case-insensitive) or slug (lowercased).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LookupTerm {
    Id(Uuid),
    TitleOrSlug(String),
}

impl LookupTerm {
    pub fn parse(term: &str) -> Self {
        match Uuid::parse_str(term) {
            Ok(id) => LookupTerm::Id(id),
            Err(_) => LookupTerm::TitleOrSlug(term.to_string()),
        }
    }
}
