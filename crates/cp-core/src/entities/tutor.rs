use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// An independent tutor. Created by registration and never mutated.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct Tutor {
    pub id: String,
    pub full_name: String,
    /// Trimmed and lower-cased.
    pub email: String,
    pub timezone: String,
    /// Always greater than zero.
    pub hourly_rate: f64,
}
