//! `.env` values flow through the env layer.
//!
//! Kept in its own test binary: dotenvy writes to the process environment,
//! which `Jail` does not restore.

use figment::Jail;
use cp_config::ClassPilotConfig;

#[test]
fn dotenv_file_feeds_env_layer() {
    Jail::expect_with(|jail| {
        jail.create_file(".env", "CLASSPILOT_GENERAL__DEFAULT_TIMEZONE=Africa/Nairobi\n")?;

        let config = ClassPilotConfig::load_with_dotenv().expect("config loads");
        assert_eq!(config.general.default_timezone, "Africa/Nairobi");
        Ok(())
    });
}
