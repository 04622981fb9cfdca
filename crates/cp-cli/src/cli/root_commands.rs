use clap::Subcommand;

use crate::cli::subcommands::{LessonCommands, StudentCommands, TutorCommands};

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Tutors.
    Tutor {
        #[command(subcommand)]
        action: TutorCommands,
    },
    /// Students.
    Student {
        #[command(subcommand)]
        action: StudentCommands,
    },
    /// Lessons.
    Lesson {
        #[command(subcommand)]
        action: LessonCommands,
    },
    /// Print the JSON Schema of the persisted document.
    Schema,
}
