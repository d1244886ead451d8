// ABOUTME: Synthesizes the ephemeral SSH config file handed to the launched client
// ABOUTME: One Host block under a fixed alias; the file lives only as long as the process

use crate::options::SshOptions;
use anyhow::{Context, Result};
use std::io::Write;
use tempfile::NamedTempFile;

/// Host alias written into every synthesized config. The launcher connects
/// to this name, never to the real hostname.
pub const CONFIG_ALIAS: &str = "dnssh-target";

/// Write the merged options as a single `Host` block to a named temp file.
///
/// The file is flushed but kept open: the caller must hold the returned
/// handle until the SSH client has exited, since dropping it deletes the
/// file.
pub fn write_config(options: &SshOptions) -> Result<NamedTempFile> {
    let mut file = NamedTempFile::new().context("Failed to create temporary SSH config")?;
    let contents = render(options);

    file.write_all(contents.as_bytes())
        .with_context(|| format!("Failed to write SSH config to {}", file.path().display()))?;
    file.flush()
        .with_context(|| format!("Failed to flush SSH config to {}", file.path().display()))?;

    tracing::debug!(
        "Synthesized SSH config at {}:\n{}",
        file.path().display(),
        contents
    );

    Ok(file)
}

fn render(options: &SshOptions) -> String {
    let mut out = format!("Host {CONFIG_ALIAS}\n");
    for (directive, value) in options {
        out.push_str(&format!("  {directive} {value}\n"));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn opts(pairs: &[(&str, &str)]) -> SshOptions {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_render_single_block_sorted_directives() {
        let options = opts(&[("User", "foo"), ("Hostname", "foo.com"), ("Port", "10022")]);

        assert_eq!(
            render(&options),
            "Host dnssh-target\n  Hostname foo.com\n  Port 10022\n  User foo\n"
        );
    }

    #[test]
    fn test_render_empty_options_is_header_only() {
        assert_eq!(render(&SshOptions::new()), "Host dnssh-target\n");
    }

    #[test]
    fn test_write_config_is_readable_at_returned_path() {
        let options = opts(&[("Port", "2222")]);

        let file = write_config(&options).unwrap();
        let on_disk = std::fs::read_to_string(file.path()).unwrap();

        assert_eq!(on_disk, "Host dnssh-target\n  Port 2222\n");
    }

    #[test]
    fn test_write_config_file_disappears_on_drop() {
        let file = write_config(&opts(&[("Port", "22")])).unwrap();
        let path = file.path().to_path_buf();

        assert!(path.exists());
        drop(file);
        assert!(!path.exists());
    }
}
