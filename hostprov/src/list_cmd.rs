use std::path::Path;

use anyhow::Result;
use hostprov::backend::IdentityDirectory;
use hostprov::report::render_host_list;

use crate::cli::{ListHostsArgs, OutputFormat};
use crate::setup;

pub fn run_list_hosts(config: Option<&Path>, args: ListHostsArgs) -> Result<()> {
    let settings = setup::load_settings(config, false)?;
    let backends = setup::backends(&settings);

    let hosts = backends.directory.list_hosts(args.os.as_deref())?;

    if args.count {
        println!("{}", render_count(hosts.len(), args.format));
        return Ok(());
    }

    match args.format {
        OutputFormat::Text => println!("{}", render_host_list(&hosts, args.names)),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&hosts)?),
    }
    Ok(())
}

fn render_count(count: usize, format: OutputFormat) -> String {
    match format {
        OutputFormat::Text => count.to_string(),
        OutputFormat::Json => serde_json::json!({ "count": count }).to_string(),
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::render_count;
    use crate::cli::OutputFormat;

    #[test]
    fn count_respects_the_output_format() {
        assert_eq!(render_count(3, OutputFormat::Text), "3");
        assert_eq!(render_count(3, OutputFormat::Json), r#"{"count":3}"#);
        assert_eq!(render_count(0, OutputFormat::Json), r#"{"count":0}"#);
    }
}
