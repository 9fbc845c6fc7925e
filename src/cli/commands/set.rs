use anyhow::Result;
use colored::Colorize;

use super::super::{
    args::SetCommand,
    context::SessionContext,
    exit_status::ExitStatus,
    report::{SUCCESS_MARK, print_rejected},
};
use crate::{catalog::Catalogs, error::I18nError};

pub fn set(cmd: SetCommand) -> Result<ExitStatus> {
    let ctx = SessionContext::new(&cmd.common)?;
    let mut i18n = ctx.i18n(Catalogs::new(), None);

    match i18n.set_language(&cmd.code) {
        Ok(()) => {}
        Err(err @ I18nError::UnsupportedLanguageCode { .. }) => {
            print_rejected(&err);
            return Ok(ExitStatus::Failure);
        }
        Err(err) => return Err(err.into()),
    }

    let lang = i18n.language();
    println!(
        "{} {}",
        SUCCESS_MARK.green(),
        format!(
            "Language set to {} ({})",
            lang,
            lang.descriptor().display_name
        )
        .green()
    );
    Ok(ExitStatus::Success)
}
