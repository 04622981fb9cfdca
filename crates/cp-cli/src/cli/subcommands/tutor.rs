use clap::Subcommand;

/// Tutor commands.
#[derive(Clone, Debug, Subcommand)]
pub enum TutorCommands {
    /// Register a tutor.
    Register {
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: String,
        /// Timezone label (defaults to `general.default_timezone`).
        #[arg(long)]
        timezone: Option<String>,
        /// Hourly rate; must be greater than 0.
        #[arg(long, allow_negative_numbers = true)]
        rate: f64,
    },
    /// Get a tutor by ID.
    Get { id: String },
    /// Student count, upcoming lessons, and this month's revenue.
    Dashboard {
        id: String,
        /// Compute as of this RFC 3339 instant instead of now.
        #[arg(long)]
        at: Option<String>,
    },
}
