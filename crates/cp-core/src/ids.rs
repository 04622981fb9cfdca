//! Entity ID prefixes and generation.
//!
//! IDs look like `tut-5f0c2e9a8b7d4c3e91a0b2c4d6e8f0a1`: a three-letter prefix
//! and 16 random bytes as lowercase hex.

use crate::errors::CoreError;

pub const PREFIX_TUTOR: &str = "tut";
pub const PREFIX_STUDENT: &str = "stu";
pub const PREFIX_LESSON: &str = "les";

/// Generate a fresh prefixed ID from the OS random source.
///
/// # Errors
///
/// Returns `CoreError::Other` if the OS random source is unavailable.
pub fn generate_id(prefix: &str) -> Result<String, CoreError> {
    let mut bytes = [0u8; 16];
    getrandom::fill(&mut bytes)
        .map_err(|e| CoreError::Other(anyhow::anyhow!("failed to generate {prefix} id: {e}")))?;
    let hex: String = bytes.iter().map(|b| format!("{b:02x}")).collect();
    Ok(format!("{prefix}-{hex}"))
}
