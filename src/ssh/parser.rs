// ABOUTME: Reader for the simplified Host-block subset of the SSH client config grammar
// ABOUTME: Produces alias-keyed directive maps used as merge sources for --merge-config

use crate::options::SshOptions;
use anyhow::{Context, Result, bail};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

pub fn parse_ssh_config(path: &Path) -> Result<BTreeMap<String, SshOptions>> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read SSH config file: {}", path.display()))?;

    parse_ssh_config_content(&content)
}

/// Scan top to bottom: blank and `#` lines are skipped, a `Host ` line
/// flushes the previous block and starts a new one, anything else splits on
/// the first space into a directive/value pair. Each block records its own
/// `Host` directive, which is what keys it in the returned map.
pub fn parse_ssh_config_content(content: &str) -> Result<BTreeMap<String, SshOptions>> {
    let mut hosts = BTreeMap::new();
    let mut current = SshOptions::new();

    for line in content.lines() {
        let line = line.trim();

        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        if let Some(alias) = line.strip_prefix("Host ") {
            if !current.is_empty() {
                flush_block(&mut hosts, std::mem::take(&mut current))?;
            }
            current.insert("Host".to_string(), alias.trim().to_string());
        } else if let Some((directive, value)) = line.split_once(' ') {
            current.insert(directive.to_string(), value.trim().to_string());
        } else {
            bail!("Malformed SSH config line (expected '<Directive> <Value>'): '{line}'");
        }
    }

    if !current.is_empty() {
        flush_block(&mut hosts, current)?;
    }

    Ok(hosts)
}

fn flush_block(hosts: &mut BTreeMap<String, SshOptions>, block: SshOptions) -> Result<()> {
    let Some(alias) = block.get("Host").cloned() else {
        bail!("SSH config block has directives but no Host line");
    };
    hosts.insert(alias, block);
    Ok(())
}
