use std::path::Path;

use anyhow::{bail, Result};
use hostprov::orchestrator::{HostRequest, Orchestrator};
use hostprov::prompt::TerminalPrompt;
use hostprov::report::render_report_text;

use crate::cli::{AddHostArgs, OutputFormat};
use crate::setup;

pub fn run_add_host(config: Option<&Path>, args: AddHostArgs) -> Result<()> {
    let settings = setup::load_settings(config, false)?;
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

    let request = HostRequest {
        name: args.name,
        hwaddr: args.hwaddr,
        address: args.address,
        laptop: args.laptop,
    };
    let report = orchestrator.add_host(&request)?;

    match args.format {
        OutputFormat::Text => println!("{}", render_report_text(&report)),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
    }

    if report.failed_steps() > 0 {
        bail!(
            "add-host left {} failed step(s); re-drive them manually before using the host",
            report.failed_steps()
        );
    }
    Ok(())
}
