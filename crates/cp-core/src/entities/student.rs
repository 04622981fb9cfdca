use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A student belonging to exactly one tutor.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Student {
    pub id: String,
    pub tutor_id: String,
    pub full_name: String,
    pub email: String,
    pub goals: String,
}
