use anyhow::Result;

use super::super::{
    args::LanguagesCommand, context::SessionContext, exit_status::ExitStatus,
    report::print_languages,
};

pub fn languages(cmd: LanguagesCommand) -> Result<ExitStatus> {
    let ctx = SessionContext::new(&cmd.common)?;
    print_languages(ctx.resolve_language());
    Ok(ExitStatus::Success)
}
