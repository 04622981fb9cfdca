use std::path::PathBuf;

use clap::Parser;

pub mod global;
pub mod root_commands;
pub mod subcommands;

pub use global::{GlobalFlags, OutputFormat};
pub use root_commands::Commands;

/// Top-level CLI parser for the `classpilot` binary.
#[derive(Debug, Parser)]
#[command(
    name = "classpilot",
    version,
    about = "ClassPilot - tutors, students, and lessons in one JSON file"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format: json, table, raw
    #[arg(short, long, global = true, default_value = "json")]
    pub format: OutputFormat,

    /// Quiet mode (errors only in logs)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Document file path (overrides `storage.data_file`)
    #[arg(short, long, global = true)]
    pub data_file: Option<PathBuf>,
}

impl Cli {
    /// Extract ergonomic global flags struct for command handlers.
    #[must_use]
    pub fn global_flags(&self) -> GlobalFlags {
        GlobalFlags {
            format: self.format,
            quiet: self.quiet,
            data_file: self.data_file.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use clap::{CommandFactory, Parser};

    use super::subcommands::{LessonCommands, TutorCommands};
    use super::{Cli, Commands, OutputFormat};

    #[test]
    fn clap_command_tree_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn global_flags_parse_before_subcommand() {
        let cli = Cli::try_parse_from([
            "classpilot",
            "--format",
            "table",
            "--verbose",
            "--data-file",
            "/tmp/cp.json",
            "schema",
        ])
        .expect("cli should parse");

        assert_eq!(cli.format, OutputFormat::Table);
        assert!(cli.verbose);
        assert_eq!(cli.data_file.as_deref(), Some(Path::new("/tmp/cp.json")));
        assert!(matches!(cli.command, Commands::Schema));
    }

    #[test]
    fn global_flags_parse_after_subcommand() {
        let cli = Cli::try_parse_from(["classpilot", "tutor", "get", "tut-1", "--format", "raw", "--quiet"])
            .expect("cli should parse");

        assert_eq!(cli.format, OutputFormat::Raw);
        assert!(cli.quiet);
        assert!(matches!(
            cli.command,
            Commands::Tutor { action: TutorCommands::Get { ref id } } if id == "tut-1"
        ));
    }

    #[test]
    fn output_format_rejects_invalid_value() {
        let parsed = Cli::try_parse_from(["classpilot", "--format", "xml", "schema"]);
        assert!(parsed.is_err());
    }

    #[test]
    fn negative_rate_reaches_the_service() {
        let cli = Cli::try_parse_from([
            "classpilot", "tutor", "register", "--name", "Ana", "--email", "ana@demo.com", "--rate", "-1",
        ])
        .expect("cli should parse");

        match cli.command {
            Commands::Tutor {
                action: TutorCommands::Register { rate, timezone, .. },
            } => {
                assert!((rate + 1.0).abs() < f64::EPSILON);
                assert_eq!(timezone, None);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn lesson_schedule_requires_all_fields() {
        let parsed = Cli::try_parse_from([
            "classpilot", "lesson", "schedule", "--tutor", "tut-1", "--student", "stu-1", "--duration", "60",
        ]);
        assert!(parsed.is_err());
    }

    #[test]
    fn lesson_list_bounds_are_optional() {
        let cli = Cli::try_parse_from(["classpilot", "lesson", "list", "--tutor", "tut-1", "--from", "2026-10-01T00:00:00Z"])
            .expect("cli should parse");
        assert!(matches!(
            cli.command,
            Commands::Lesson {
                action: LessonCommands::List { from: Some(_), to: None, .. }
            }
        ));
    }
}
