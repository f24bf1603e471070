/// Document Store Adapter — the single persistence seam for the API.
///
/// ARCHITECTURAL RULE: no handler or service touches the MongoDB driver
/// directly. Everything goes through the `DocumentStore` trait so tests can
/// swap in the in-memory backend with identical filter semantics.
use async_trait::async_trait;
use bson::{doc, Bson, Document};
use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;

pub mod mongo;

#[cfg(test)]
pub mod memory;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("store unavailable: {0}")]
    Unavailable(String),

    #[error("store operation failed: {0}")]
    Operation(#[from] mongodb::error::Error),

    #[error("failed to encode document: {0}")]
    Encode(#[from] bson::ser::Error),

    #[error("failed to decode document: {0}")]
    Decode(#[from] bson::de::Error),
}

/// Conjunctive query filter. Each clause must match.
#[derive(Debug, Clone, Default)]
pub struct Filter {
    clauses: Vec<Clause>,
}

#[derive(Debug, Clone)]
enum Clause {
    /// Exact match on a scalar field. When the stored field is an array this
    /// is a membership test (Mongo equality semantics).
    Eq(String, Bson),
    /// Case-insensitive substring match against any of the named text fields.
    AnyContains(Vec<String>, String),
}

impl Filter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn eq(mut self, field: &str, value: impl Into<Bson>) -> Self {
        self.clauses.push(Clause::Eq(field.to_string(), value.into()));
        self
    }

    pub fn contains_any(mut self, fields: &[&str], needle: &str) -> Self {
        self.clauses.push(Clause::AnyContains(
            fields.iter().map(|f| f.to_string()).collect(),
            needle.to_string(),
        ));
        self
    }

    /// Renders the filter as a MongoDB query document.
    pub fn to_document(&self) -> Document {
        let mut parts: Vec<Document> = Vec::with_capacity(self.clauses.len());
        for clause in &self.clauses {
            parts.push(match clause {
                Clause::Eq(field, value) => {
                    let mut part = Document::new();
                    part.insert(field.clone(), value.clone());
                    part
                }
                Clause::AnyContains(fields, needle) => {
                    let pattern = escape_regex(needle);
                    let regex = |f: &str| {
                        let mut part = Document::new();
                        part.insert(f, doc! { "$regex": &pattern, "$options": "i" });
                        part
                    };
                    if fields.len() == 1 {
                        regex(&fields[0])
                    } else {
                        doc! { "$or": fields.iter().map(|f| regex(f)).collect::<Vec<_>>() }
                    }
                }
            });
        }
        match parts.len() {
            0 => Document::new(),
            1 => parts.remove(0),
            _ => doc! { "$and": parts },
        }
    }

    #[cfg(test)]
    pub(crate) fn matches(&self, doc: &Document) -> bool {
        self.clauses.iter().all(|c| c.matches(doc))
    }
}

#[cfg(test)]
impl Clause {
    fn matches(&self, doc: &Document) -> bool {
        match self {
            Clause::Eq(field, value) => match doc.get(field) {
                Some(Bson::Array(items)) => items.contains(value),
                Some(stored) => stored == value,
                None => false,
            },
            Clause::AnyContains(fields, needle) => {
                let needle = needle.to_lowercase();
                fields.iter().any(|f| {
                    doc.get_str(f)
                        .map(|s| s.to_lowercase().contains(&needle))
                        .unwrap_or(false)
                })
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Order {
    Asc,
    Desc,
}

#[derive(Debug, Clone)]
pub struct Sort {
    pub field: String,
    pub order: Order,
}

impl Sort {
    pub fn asc(field: &str) -> Self {
        Self {
            field: field.to_string(),
            order: Order::Asc,
        }
    }

    pub fn desc(field: &str) -> Self {
        Self {
            field: field.to_string(),
            order: Order::Desc,
        }
    }

    pub fn to_document(&self) -> Document {
        let direction: i32 = match self.order {
            Order::Asc => 1,
            Order::Desc => -1,
        };
        let mut sort = Document::new();
        sort.insert(self.field.clone(), direction);
        sort
    }
}

/// Generic document persistence interface.
///
/// `find` with no `sort` returns store-defined order; callers that need
/// determinism always supply one. Missing-id reads surface as zero rows or a
/// zero count, never as an error.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    async fn insert_one(&self, collection: &str, doc: Document) -> Result<(), StoreError>;

    async fn insert_many(&self, collection: &str, docs: Vec<Document>) -> Result<(), StoreError>;

    async fn find(
        &self,
        collection: &str,
        filter: Filter,
        projection: Option<&[&str]>,
        sort: Option<Sort>,
        limit: Option<i64>,
    ) -> Result<Vec<Document>, StoreError>;

    /// Applies `patch` (a Mongo update document, e.g. `{"$set": {...}}`) to
    /// the first matching document. Returns the matched count.
    async fn update_one(
        &self,
        collection: &str,
        filter: Filter,
        patch: Document,
    ) -> Result<u64, StoreError>;

    /// Returns the number of documents deleted (0 or 1).
    async fn delete_one(&self, collection: &str, filter: Filter) -> Result<u64, StoreError>;

    async fn count(&self, collection: &str, filter: Filter) -> Result<u64, StoreError>;
}

/// Serializes an entity for storage.
pub fn encode<T: Serialize>(value: &T) -> Result<Document, StoreError> {
    Ok(bson::to_document(value)?)
}

/// Deserializes a stored document back into an entity.
///
/// Unknown fields (including the driver-added `_id`) are ignored — this is
/// the deliberate schema-tolerance policy for every entity type.
pub fn decode<T: DeserializeOwned>(doc: Document) -> Result<T, StoreError> {
    Ok(bson::from_document(doc)?)
}

/// Escapes regex metacharacters so user input is matched literally.
fn escape_regex(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        if matches!(
            c,
            '\\' | '.' | '+' | '*' | '?' | '(' | ')' | '|' | '[' | ']' | '{' | '}' | '^' | '$'
        ) {
            out.push('\\');
        }
        out.push(c);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_regex_passthrough() {
        assert_eq!(escape_regex("stakeholder engagement"), "stakeholder engagement");
    }

    #[test]
    fn test_escape_regex_metacharacters() {
        assert_eq!(escape_regex("a.b*c"), "a\\.b\\*c");
        assert_eq!(escape_regex("(x|y)"), "\\(x\\|y\\)");
    }

    #[test]
    fn test_empty_filter_renders_empty_document() {
        assert_eq!(Filter::new().to_document(), Document::new());
    }

    #[test]
    fn test_single_eq_clause() {
        let filter = Filter::new().eq("aps_level", "APS6");
        assert_eq!(filter.to_document(), doc! { "aps_level": "APS6" });
    }

    #[test]
    fn test_multiple_clauses_render_as_and() {
        let filter = Filter::new().eq("aps_level", "APS6").eq("tags", "Leadership");
        let rendered = filter.to_document();
        let parts = rendered.get_array("$and").unwrap();
        assert_eq!(parts.len(), 2);
    }

    #[test]
    fn test_contains_any_renders_case_insensitive_or() {
        let filter = Filter::new().contains_any(&["title", "example_text"], "taskforce");
        let rendered = filter.to_document();
        let parts = rendered.get_array("$or").unwrap();
        assert_eq!(parts.len(), 2);
        let first = parts[0].as_document().unwrap();
        let title = first.get_document("title").unwrap();
        assert_eq!(title.get_str("$regex").unwrap(), "taskforce");
        assert_eq!(title.get_str("$options").unwrap(), "i");
    }

    #[test]
    fn test_eq_matches_array_membership() {
        let filter = Filter::new().eq("tags", "APS6");
        assert!(filter.matches(&doc! { "tags": ["Leadership", "APS6"] }));
        assert!(!filter.matches(&doc! { "tags": ["Leadership"] }));
    }

    #[test]
    fn test_contains_any_matches_either_field() {
        let filter = Filter::new().contains_any(&["title", "example_text"], "BUDGET");
        assert!(filter.matches(&doc! { "title": "Managed the budget process", "example_text": "x" }));
        assert!(filter.matches(&doc! { "title": "x", "example_text": "budget review" }));
        assert!(!filter.matches(&doc! { "title": "x", "example_text": "y" }));
    }
}
