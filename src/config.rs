// ABOUTME: On-disk defaults for the launcher: dig binary, domain suffix, SSH command and config path
// ABOUTME: Optional TOML file under the user config dir; every field is overridable from the CLI

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub dns: DnsConfig,
    #[serde(default)]
    pub ssh: SshConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct DnsConfig {
    #[serde(default)]
    pub domain: String,
    #[serde(default = "default_dig_binary")]
    pub dig_binary: String,
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct SshConfig {
    #[serde(default = "default_ssh_command")]
    pub command: String,
    #[serde(default = "default_ssh_config_path")]
    pub config_path: String,
}

impl Default for DnsConfig {
    fn default() -> Self {
        DnsConfig {
            domain: String::new(),
            dig_binary: default_dig_binary(),
        }
    }
}

impl Default for SshConfig {
    fn default() -> Self {
        SshConfig {
            command: default_ssh_command(),
            config_path: default_ssh_config_path(),
        }
    }
}

fn default_dig_binary() -> String {
    "dig".to_string()
}

fn default_ssh_command() -> String {
    "ssh".to_string()
}

fn default_ssh_config_path() -> String {
    "~/.ssh/config".to_string()
}

impl Config {
    pub fn default_config_content() -> &'static str {
        r#"# dnssh configuration

[dns]
# Domain suffix appended to unqualified hostnames ("" disables qualification)
domain = ""
# External DNS query utility; must accept dig-style `+short <name> <type>`
dig_binary = "dig"

[ssh]
# SSH client command launched against the synthesized config
command = "ssh"
# Local SSH config consulted for --merge-config aliases
config_path = "~/.ssh/config"
"#
    }

    pub fn load_from_str(content: &str) -> Result<Self> {
        toml::from_str(content).context("Failed to parse configuration")
    }

    pub fn load_from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read configuration file: {}", path.display()))?;
        Self::load_from_str(&content)
    }

    /// Load the defaults file, writing the documented defaults on first run.
    /// An undeterminable config dir means built-in defaults; a present but
    /// malformed file is an error.
    pub fn load_or_default() -> Result<Self> {
        let Ok(path) = Self::default_config_path() else {
            return Ok(Self::default());
        };

        if !path.exists() {
            Self::save_default_config(&path)?;
            tracing::debug!("Created default configuration at {}", path.display());
        }

        Self::load_from_file(&path)
    }

    pub fn save_default_config(path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        fs::write(path, Self::default_config_content())
            .with_context(|| format!("Failed to write default config to: {}", path.display()))?;

        Ok(())
    }

    pub fn default_config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir().context("Failed to determine config directory")?;
        Ok(config_dir.join("dnssh").join("config.toml"))
    }

    pub fn expand_paths(&mut self) -> Result<()> {
        self.ssh.config_path = expand_tilde(&self.ssh.config_path)?;
        Ok(())
    }

    pub fn validate(&self) -> Result<()> {
        if self.ssh.command.is_empty() {
            anyhow::bail!("SSH command cannot be empty");
        }

        if self.dns.dig_binary.is_empty() {
            anyhow::bail!("DNS query binary cannot be empty");
        }

        Ok(())
    }
}

fn expand_tilde(path: &str) -> Result<String> {
    if path.starts_with("~/") {
        let home = dirs::home_dir().context("Failed to determine home directory")?;
        Ok(home.join(&path[2..]).to_string_lossy().into_owned())
    } else {
        Ok(path.to_string())
    }
}
