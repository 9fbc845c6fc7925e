use anyhow::Result;

use super::super::{
    args::TranslateCommand,
    context::SessionContext,
    exit_status::ExitStatus,
    report::{print_rejected, print_warnings},
};
use crate::language::LanguageCode;

pub fn translate(cmd: TranslateCommand) -> Result<ExitStatus> {
    let session_override = match cmd.lang.as_deref().map(str::parse::<LanguageCode>).transpose() {
        Ok(lang) => lang,
        Err(err) => {
            print_rejected(&err);
            return Ok(ExitStatus::Failure);
        }
    };

    let ctx = SessionContext::new(&cmd.common)?;
    let scan = ctx.scan_catalogs()?;
    print_warnings(&scan.warnings);

    let i18n = ctx.i18n(scan.catalogs, session_override);
    for key in &cmd.keys {
        println!("{}", i18n.translate(key));
    }

    Ok(ExitStatus::Success)
}
