use anyhow::Context;
use cp_config::ClassPilotConfig;
use cp_store::TutoringService;

use crate::cli::GlobalFlags;

/// Shared application resources initialized once at startup.
pub struct AppContext {
    pub service: TutoringService,
    pub config: ClassPilotConfig,
}

impl AppContext {
    /// Open the document file named by `--data-file` or `storage.data_file`.
    pub fn init(config: ClassPilotConfig, flags: &GlobalFlags) -> anyhow::Result<Self> {
        let data_file = flags
            .data_file
            .clone()
            .unwrap_or_else(|| config.storage.data_file.clone());
        let offset = config.reference_offset()?;

        tracing::debug!(data_file = %data_file.display(), %offset, "opening document");
        let service = TutoringService::open_file(&data_file)
            .with_context(|| format!("failed to open document at {}", data_file.display()))?
            .with_reference_offset(offset);

        Ok(Self { service, config })
    }
}
