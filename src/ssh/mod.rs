// ABOUTME: SSH-side half of the pipeline: local config parsing, config synthesis, launching
// ABOUTME: Everything here works against the simplified Host-block config format

pub mod launcher;
pub mod parser;
pub mod synth;

pub use launcher::SshLauncher;
pub use parser::parse_ssh_config;
pub use synth::{CONFIG_ALIAS, write_config};
