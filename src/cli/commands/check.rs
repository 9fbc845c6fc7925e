use anyhow::Result;

use super::super::{
    args::CheckCommand,
    context::SessionContext,
    exit_status::ExitStatus,
    report::{print_success, print_warnings, report_parity},
};
use crate::parity::check_parity;

pub fn check(cmd: CheckCommand) -> Result<ExitStatus> {
    let ctx = SessionContext::new(&cmd.common)?;
    let scan = ctx.scan_catalogs()?;
    print_warnings(&scan.warnings);

    let reference = ctx.config.primary_language;
    let report = check_parity(&scan.catalogs, reference, &scan.sources);

    if report.is_clean() {
        let keys = scan
            .catalogs
            .get(reference)
            .map(|c| c.key_paths().len())
            .unwrap_or(0);
        print_success(scan.catalogs.len(), keys);
        return Ok(ExitStatus::Success);
    }

    report_parity(&report, &ctx.messages_dir);

    if report.error_count() > 0 {
        Ok(ExitStatus::Failure)
    } else {
        Ok(ExitStatus::Success)
    }
}
