use crate::cli::GlobalFlags;
use crate::cli::subcommands::LessonCommands;
use crate::commands::shared::parse::{parse_optional_instant, parse_starts_at};
use crate::context::AppContext;
use crate::output::output;

/// Handle `classpilot lesson`.
pub fn handle(action: &LessonCommands, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    match action {
        LessonCommands::Schedule {
            tutor,
            student,
            starts_at,
            duration,
            topic,
        } => {
            let starts_at = parse_starts_at(starts_at)?;
            let lesson = ctx
                .service
                .schedule_lesson(tutor, student, starts_at, *duration, topic)?;
            output(&lesson, flags.format)
        }
        LessonCommands::Complete { id, notes } => {
            let lesson = ctx.service.complete_lesson(id, notes.as_deref())?;
            output(&lesson, flags.format)
        }
        LessonCommands::Get { id } => output(&ctx.service.get_lesson(id)?, flags.format),
        LessonCommands::List { tutor, from, to } => {
            let from = parse_optional_instant(from.as_deref(), "from")?;
            let to = parse_optional_instant(to.as_deref(), "to")?;
            output(&ctx.service.list_lessons(tutor, from, to)?, flags.format)
        }
    }
}
