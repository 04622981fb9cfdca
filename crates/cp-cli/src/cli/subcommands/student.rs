use clap::Subcommand;

/// Student commands.
#[derive(Clone, Debug, Subcommand)]
pub enum StudentCommands {
    /// Register a student under a tutor.
    Register {
        #[arg(long)]
        tutor: String,
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: String,
        #[arg(long, default_value = "")]
        goals: String,
    },
    /// Get a student by ID.
    Get { id: String },
    /// List a tutor's students.
    List {
        #[arg(long)]
        tutor: String,
    },
}
