use anyhow::Result;
use clap::Parser;

mod add_cmd;
mod cli;
mod list_cmd;
mod rebuild_cmd;
mod remove_cmd;
mod setup;

use cli::{Cli, Command};

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = cli.config.as_deref();

    match cli.command {
        Command::AddHost(args) => add_cmd::run_add_host(config, args),
        Command::RemoveHost(args) => remove_cmd::run_remove_host(config, args),
        Command::RebuildAllowList(args) => rebuild_cmd::run_rebuild(config, args),
        Command::ListHosts(args) => list_cmd::run_list_hosts(config, args),
    }
}
