use crate::cli::GlobalFlags;
use crate::cli::root_commands::Commands;
use crate::commands;
use crate::context::AppContext;

/// Dispatch a parsed command to the corresponding handler module.
pub fn dispatch(command: &Commands, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    match command {
        Commands::Tutor { action } => commands::tutor::handle(action, ctx, flags),
        Commands::Student { action } => commands::student::handle(action, ctx, flags),
        Commands::Lesson { action } => commands::lesson::handle(action, ctx, flags),
        Commands::Schema => commands::schema::handle(flags),
    }
}
