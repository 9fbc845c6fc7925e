use anyhow::Result;

use super::super::{args::ResolveCommand, context::SessionContext, exit_status::ExitStatus};

/// Print the code a fresh session would start with. Reads only.
pub fn resolve(cmd: ResolveCommand) -> Result<ExitStatus> {
    let ctx = SessionContext::new(&cmd.common)?;
    println!("{}", ctx.resolve_language());
    Ok(ExitStatus::Success)
}
