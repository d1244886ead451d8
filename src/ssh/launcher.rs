// ABOUTME: Launches the external SSH client against the synthesized config file
// ABOUTME: Uses an argv-vector invocation with inherited stdio so interactive sessions work

use anyhow::{Context, Result};
use std::path::Path;
use std::process::{Command, ExitStatus, Stdio};

pub struct SshLauncher {
    command: String,
    extra_args: Vec<String>,
}

impl SshLauncher {
    pub fn new(command: String, extra_args: Vec<String>) -> Self {
        Self {
            command,
            extra_args,
        }
    }

    /// Run `<command> -F <config> <extra-args> <alias>` and block until the
    /// session ends. stdin/stdout/stderr are inherited so password prompts,
    /// host-key prompts, and interactive shells pass through.
    pub fn launch(&self, config_path: &Path, alias: &str) -> Result<ExitStatus> {
        let program = which::which(&self.command)
            .with_context(|| format!("SSH command '{}' not found in PATH", self.command))?;

        let args = self.build_args(config_path, alias);
        tracing::debug!("Launching: {} {}", program.display(), args.join(" "));

        let status = Command::new(&program)
            .args(&args)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()
            .with_context(|| format!("Failed to launch '{}'", program.display()))?;

        Ok(status)
    }

    fn build_args(&self, config_path: &Path, alias: &str) -> Vec<String> {
        let mut args = vec!["-F".to_string(), config_path.display().to_string()];
        args.extend(self.extra_args.iter().cloned());
        args.push(alias.to_string());
        args
    }
}
