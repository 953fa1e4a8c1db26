use std::path::PathBuf;

use clap::{Parser, ValueEnum};

#[derive(Parser, Debug)]
#[command(name = "hostprov")]
#[command(about = "Provision and decommission network hosts across directory, DNS, and DHCP backends")]
pub struct Cli {
    /// Settings file (TOML); embedded defaults are used when omitted.
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,
    #[command(subcommand)]
    pub command: Command,
}

#[derive(clap::Subcommand, Debug)]
pub enum Command {
    /// Provision a new host across all backends.
    AddHost(AddHostArgs),
    /// Decommission a host, tolerating backends that have already lost it.
    RemoveHost(RemoveHostArgs),
    /// Regenerate the boot allow-list artifact from the filter table.
    RebuildAllowList(RebuildArgs),
    /// List registered hosts from the directory.
    ListHosts(ListHostsArgs),
}

#[derive(Parser, Debug)]
pub struct AddHostArgs {
    /// Unqualified host name.
    pub name: String,
    /// Hardware address (aa:bb:cc:dd:ee:ff, aa-bb-cc-dd-ee-ff, or bare hex).
    pub hwaddr: String,
    /// IPv4 address; required unless --laptop, which assigns its own.
    #[arg(required_unless_present = "laptop", conflicts_with = "laptop")]
    pub address: Option<String>,
    /// Allocate from the loaner laptop pool instead of a caller-supplied address.
    #[arg(long)]
    pub laptop: bool,
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

#[derive(Parser, Debug)]
pub struct RemoveHostArgs {
    /// Host name to remove.
    pub name: String,
    /// Skip the interactive confirmation.
    #[arg(short, long)]
    pub yes: bool,
    /// Show settings source metadata.
    #[arg(short, long)]
    pub verbose: bool,
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

#[derive(Parser, Debug)]
pub struct RebuildArgs {
    /// Show settings source metadata.
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Parser, Debug)]
pub struct ListHostsArgs {
    /// Print bare names only.
    #[arg(long)]
    pub names: bool,
    /// Print only the host count.
    #[arg(long, conflicts_with = "names")]
    pub count: bool,
    /// Keep only hosts whose operating system contains this string.
    #[arg(long)]
    pub os: Option<String>,
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}
