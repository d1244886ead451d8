// ABOUTME: DNS-to-SSH launcher: resolves connection parameters from TXT records,
// ABOUTME: merges local config entries, synthesizes an ephemeral config, and execs ssh

mod cli;
mod config;
mod dns;
mod options;
mod ssh;

use anyhow::Result;
use clap::Parser;
use cli::Args;
use config::Config;
use dns::{RecordType, Resolver};
use options::SshOptions;
use std::path::Path;
use tracing::Level;

fn main() -> Result<()> {
    let args = Args::parse();
    init_tracing(args.verbose);

    let status = run(args)?;
    std::process::exit(status);
}

fn init_tracing(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::INFO };

    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stdout)
        .with_target(false)
        .init();
}

fn run(args: Args) -> Result<i32> {
    let mut config = Config::load_or_default()?;
    config.expand_paths()?;
    config.validate()?;

    let command = args.command.unwrap_or(config.ssh.command);
    let domain = args.domain.unwrap_or(config.dns.domain);
    let ssh_config_path = args.ssh_config.unwrap_or(config.ssh.config_path);
    let resolver = Resolver::new(config.dns.dig_binary);

    let hostname = dns::qualify(&args.hostname.to_lowercase(), &domain);
    let primary = match resolve_options(&resolver, &hostname)? {
        Some(options) => options,
        None => {
            tracing::error!("Unable to find DNS entry for {hostname}");
            SshOptions::new()
        }
    };

    let layers = resolve_merge_layers(
        &resolver,
        &args.merge_config,
        &domain,
        Path::new(&ssh_config_path),
    )?;
    let merged = options::merge_options(primary, layers);

    // The temp file must outlive the SSH session; it is deleted on drop.
    let config_file = ssh::write_config(&merged)?;
    let launcher = ssh::SshLauncher::new(command, args.extra_args);
    let status = launcher.launch(config_file.path(), ssh::CONFIG_ALIAS)?;

    Ok(status.code().unwrap_or(1))
}

/// TXT lookup for one name. `None` when DNS has no answer; only the first
/// answer line is consulted.
fn resolve_options(resolver: &Resolver, name: &str) -> Result<Option<SshOptions>> {
    let lines = resolver.lookup(name, RecordType::Txt)?;

    match lines.first() {
        Some(line) => Ok(Some(options::parse_txt_record(line)?)),
        None => Ok(None),
    }
}

/// Resolve each merge alias: local config entry first, DNS fallback with
/// domain qualification, warn-and-skip when neither knows the alias. The
/// local config is only consulted when at least one merge was requested.
fn resolve_merge_layers(
    resolver: &Resolver,
    aliases: &[String],
    domain: &str,
    ssh_config: &Path,
) -> Result<Vec<SshOptions>> {
    if aliases.is_empty() {
        return Ok(Vec::new());
    }

    let local_hosts = ssh::parse_ssh_config(ssh_config)?;
    let mut layers = Vec::new();

    for alias in aliases {
        if let Some(block) = local_hosts.get(alias) {
            tracing::debug!("Merging {alias} from {}", ssh_config.display());
            layers.push(block.clone());
            continue;
        }

        let qualified = dns::qualify(alias, domain);
        match resolve_options(resolver, &qualified)? {
            Some(options) => {
                tracing::debug!("Merging {alias} from DNS ({qualified})");
                layers.push(options);
            }
            None => tracing::warn!("No local or DNS entry for merge host {alias}, skipping"),
        }
    }

    Ok(layers)
}
