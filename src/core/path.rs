use std::fmt;

/// Resolved addressing decision for one document path.
///
/// A path with exactly two `/`-separated segments addresses a document
/// inside a collection. Anything else is passed through as a raw nested
/// document path; whether the backend accepts it is the backend's call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DocPath {
    Collection {
        collection: String,
        document: String,
    },
    Raw(String),
}

impl DocPath {
    /// Resolve a `/`-separated path string once, up front.
    pub fn parse(raw: &str) -> Self {
        let segments: Vec<&str> = raw.split('/').collect();
        match segments.as_slice() {
            [collection, document] => Self::Collection {
                collection: (*collection).to_string(),
                document: (*document).to_string(),
            },
            _ => Self::Raw(raw.to_string()),
        }
    }
}

impl fmt::Display for DocPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Collection {
                collection,
                document,
            } => write!(f, "{collection}/{document}"),
            Self::Raw(raw) => f.write_str(raw),
        }
    }
}
