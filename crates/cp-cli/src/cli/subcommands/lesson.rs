use clap::Subcommand;

/// Lesson commands.
#[derive(Clone, Debug, Subcommand)]
pub enum LessonCommands {
    /// Schedule a lesson.
    Schedule {
        #[arg(long)]
        tutor: String,
        #[arg(long)]
        student: String,
        /// Start time with UTC offset, e.g. 2026-10-15T10:00:00+02:00.
        #[arg(long)]
        starts_at: String,
        /// Length in minutes (at least 15).
        #[arg(long)]
        duration: u32,
        #[arg(long)]
        topic: String,
    },
    /// Mark a scheduled lesson completed.
    Complete {
        id: String,
        #[arg(long)]
        notes: Option<String>,
    },
    /// Get a lesson by ID.
    Get { id: String },
    /// List a tutor's lessons, optionally bounded by start time.
    List {
        #[arg(long)]
        tutor: String,
        /// Inclusive lower bound (RFC 3339).
        #[arg(long)]
        from: Option<String>,
        /// Inclusive upper bound (RFC 3339).
        #[arg(long)]
        to: Option<String>,
    },
}
