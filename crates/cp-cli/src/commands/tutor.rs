use crate::cli::GlobalFlags;
use crate::cli::subcommands::TutorCommands;
use crate::commands::shared::parse::parse_utc_instant;
use crate::context::AppContext;
use crate::output::output;

/// Handle `classpilot tutor`.
pub fn handle(action: &TutorCommands, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    match action {
        TutorCommands::Register {
            name,
            email,
            timezone,
            rate,
        } => {
            let timezone = timezone
                .as_deref()
                .unwrap_or(&ctx.config.general.default_timezone);
            let tutor = ctx.service.register_tutor(name, email, timezone, *rate)?;
            output(&tutor, flags.format)
        }
        TutorCommands::Get { id } => output(&ctx.service.get_tutor(id)?, flags.format),
        TutorCommands::Dashboard { id, at } => {
            let dashboard = match at {
                Some(raw) => ctx
                    .service
                    .tutor_dashboard_at(id, parse_utc_instant(raw, "at")?)?,
                None => ctx.service.tutor_dashboard(id)?,
            };
            output(&dashboard, flags.format)
        }
    }
}
