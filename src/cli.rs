// ABOUTME: Command-line argument definitions for the DNS-to-SSH launcher
// ABOUTME: Everything after the hostname is passed through to the SSH client untouched

use clap::Parser;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Host alias or FQDN whose TXT record carries the connection parameters
    pub hostname: String,

    /// SSH client command to launch
    #[arg(short, long)]
    pub command: Option<String>,

    /// Domain suffix appended to hostnames that do not already carry it
    #[arg(short, long)]
    pub domain: Option<String>,

    /// Merge options from this host alias (local config first, DNS fallback); repeatable
    #[arg(short = 'm', long = "merge-config", value_name = "ALIAS")]
    pub merge_config: Vec<String>,

    /// Local SSH config file consulted for merge aliases
    #[arg(short = 'F', long = "ssh-config", value_name = "PATH")]
    pub ssh_config: Option<String>,

    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,

    /// Extra arguments passed through to the SSH client
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    pub extra_args: Vec<String>,
}
