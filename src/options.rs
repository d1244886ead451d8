// ABOUTME: The options mapping carried from DNS/local-config sources to the synthesizer
// ABOUTME: Parses TXT record payloads and applies merge precedence and Host stripping

use anyhow::{Context, Result};
use std::collections::BTreeMap;

/// SSH directive name to value. BTreeMap so the synthesized config iterates
/// in a stable sorted order.
pub type SshOptions = BTreeMap<String, String>;

/// Parse one TXT answer line of the form `"key1:value1,key2:value2"`.
///
/// DNS TXT responses arrive quoted, so all literal `"` characters are
/// stripped first. A token without a colon is a hard error; repeated keys
/// keep the last occurrence.
pub fn parse_txt_record(line: &str) -> Result<SshOptions> {
    let stripped = line.replace('"', "");
    let mut options = SshOptions::new();

    for token in stripped.split(',') {
        let (key, value) = token
            .split_once(':')
            .with_context(|| format!("Malformed TXT option token '{token}' (expected key:value)"))?;
        options.insert(key.to_string(), value.to_string());
    }

    Ok(options)
}

/// Layer merge items over the primary mapping, later layers winning per key,
/// and strip the `Host` key before the result reaches the synthesizer.
pub fn merge_options(
    primary: SshOptions,
    layers: impl IntoIterator<Item = SshOptions>,
) -> SshOptions {
    let mut options = primary;
    for layer in layers {
        options.extend(layer);
    }
    options.remove("Host");
    options
}
