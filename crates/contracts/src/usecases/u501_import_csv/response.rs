use serde::{Deserialize, Serialize};

/// Outcome reported by the catalog upsert endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImportOutcome {
    /// Rows that created a new catalog record
    pub created: i32,

    /// Rows that updated an existing record (matched by sku)
    pub updated: i32,

    /// Per-row rejections, in server order
    #[serde(default)]
    pub errors: Vec<RowError>,
}

impl ImportOutcome {
    pub fn error_count(&self) -> usize {
        self.errors.len()
    }
}

/// Per-row rejection descriptor
///
/// The exact shape is owned by the catalog service; every field is
/// optional so a shape drift on the server side never breaks the client.
/// Beyond `errors.len()` the descriptors are display-only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RowError {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sku: Option<String>,

    /// Zero-based input position, when the server reports one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub row: Option<usize>,

    #[serde(default)]
    pub message: String,
}
