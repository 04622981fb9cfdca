use cp_store::Document;
use schemars::schema_for;

use crate::cli::GlobalFlags;
use crate::output::output;

/// Handle `classpilot schema`.
pub fn handle(flags: &GlobalFlags) -> anyhow::Result<()> {
    let schema = schema_for!(Document);
    output(&schema, flags.format)
}
