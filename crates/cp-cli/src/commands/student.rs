use crate::cli::GlobalFlags;
use crate::cli::subcommands::StudentCommands;
use crate::context::AppContext;
use crate::output::output;

/// Handle `classpilot student`.
pub fn handle(action: &StudentCommands, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    match action {
        StudentCommands::Register {
            tutor,
            name,
            email,
            goals,
        } => {
            let student = ctx.service.register_student(tutor, name, email, goals)?;
            output(&student, flags.format)
        }
        StudentCommands::Get { id } => output(&ctx.service.get_student(id)?, flags.format),
        StudentCommands::List { tutor } => output(&ctx.service.list_students(tutor)?, flags.format),
    }
}
