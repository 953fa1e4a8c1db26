use std::path::Path;

use anyhow::{bail, Result};
use hostprov::orchestrator::Orchestrator;
use hostprov::prompt::TerminalPrompt;
use hostprov::report::render_report_text;

use crate::cli::{OutputFormat, RemoveHostArgs};
use crate::setup;

pub fn run_remove_host(config: Option<&Path>, args: RemoveHostArgs) -> Result<()> {
    let settings = setup::load_settings(config, args.verbose)?;
    let backends = setup::backends(&settings);
    let prompt = TerminalPrompt;
    let orchestrator = Orchestrator::new(
        &settings,
        &backends.directory,
        &backends.dns,
        &backends.dhcp,
        &backends.dhcp,
        &backends.zones,
        &prompt,
    );

    let report = orchestrator.remove_host(&args.name, !args.yes)?;

    match args.format {
        OutputFormat::Text => println!("{}", render_report_text(&report)),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
    }

    if report.failed_steps() > 0 {
        bail!(
            "remove-host left {} failed step(s); clean those backends up manually",
            report.failed_steps()
        );
    }
    Ok(())
}
