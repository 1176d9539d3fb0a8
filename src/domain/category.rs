use serde::{Deserialize, Serialize};

/// A quiz category. Read-only from the API's perspective; rows are seeded at
/// database initialization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Category {
    pub id: i64,
    /// Display name, stored in the `type` column.
    #[serde(rename = "type")]
    #[sqlx(rename = "type")]
    pub kind: String,
}
