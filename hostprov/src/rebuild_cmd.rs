use std::path::Path;

use anyhow::Result;
use hostprov::allowlist::AllowListWriter;

use crate::cli::RebuildArgs;
use crate::setup;

pub fn run_rebuild(config: Option<&Path>, args: RebuildArgs) -> Result<()> {
    let settings = setup::load_settings(config, args.verbose)?;
    let backends = setup::backends(&settings);

    let writer = AllowListWriter::new(&settings.allow_list_path);
    let count = writer.rebuild(&backends.dhcp)?;
    println!(
        "allow list: wrote {count} entr{} to {}",
        if count == 1 { "y" } else { "ies" },
        settings.allow_list_path
    );
    Ok(())
}
