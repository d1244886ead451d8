// ABOUTME: DNS resolver shim that shells out to dig and returns raw answer lines
// ABOUTME: Also hosts the domain qualifier applied to unqualified hostnames

use anyhow::{Context, Result};
use std::process::Command;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RecordType {
    #[default]
    A,
    Txt,
}

impl RecordType {
    pub fn as_str(self) -> &'static str {
        match self {
            RecordType::A => "A",
            RecordType::Txt => "TXT",
        }
    }
}

/// Wrapper around an external `dig`-compatible DNS query utility.
pub struct Resolver {
    dig_binary: String,
}

impl Resolver {
    pub fn new(dig_binary: impl Into<String>) -> Self {
        Self {
            dig_binary: dig_binary.into(),
        }
    }

    /// Query one record type for one name and return the answer lines from
    /// `+short` output. No answers is an empty vec, not an error.
    pub fn lookup(&self, name: &str, record: RecordType) -> Result<Vec<String>> {
        tracing::debug!(
            "Running: {} +short {} {}",
            self.dig_binary,
            name,
            record.as_str()
        );

        let output = Command::new(&self.dig_binary)
            .args(["+short", name, record.as_str()])
            .output()
            .with_context(|| {
                format!(
                    "Failed to run '{} +short {} {}'",
                    self.dig_binary,
                    name,
                    record.as_str()
                )
            })?;

        let stdout = String::from_utf8_lossy(&output.stdout);
        Ok(stdout
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(String::from)
            .collect())
    }
}

/// Append `.<domain>` to the hostname unless the lowercased domain already
/// occurs somewhere in it. The check is a substring match, not a suffix
/// match, so `-d foo.com` never qualifies a host that mentions `foo.com`
/// anywhere in its name.
pub fn qualify(hostname: &str, domain: &str) -> String {
    if domain.is_empty() || hostname.contains(&domain.to_lowercase()) {
        hostname.to_string()
    } else {
        format!("{hostname}.{domain}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_qualify_appends_missing_domain() {
        assert_eq!(qualify("bar", "foo.com"), "bar.foo.com");
    }

    #[test]
    fn test_qualify_leaves_qualified_hostname_alone() {
        assert_eq!(qualify("bar.foo.com", "foo.com"), "bar.foo.com");
    }

    #[test]
    fn test_qualify_without_domain_is_identity() {
        assert_eq!(qualify("bar", ""), "bar");
    }

    #[test]
    fn test_qualify_matches_domain_case_insensitively() {
        assert_eq!(qualify("bar.foo.com", "FOO.COM"), "bar.foo.com");
    }

    #[test]
    fn qualify_skips_when_domain_appears_mid_name() {
        // Substring semantics: the domain occurring anywhere in the name
        // suppresses qualification, even when it is not a suffix.
        assert_eq!(qualify("foo.com.internal", "foo.com"), "foo.com.internal");
    }

    #[test]
    fn test_record_type_strings() {
        assert_eq!(RecordType::A.as_str(), "A");
        assert_eq!(RecordType::Txt.as_str(), "TXT");
        assert_eq!(RecordType::default(), RecordType::A);
    }

    #[test]
    fn test_lookup_missing_binary_is_an_error() {
        let resolver = Resolver::new("dig-binary-that-does-not-exist");
        let result = resolver.lookup("example.com", RecordType::Txt);

        assert!(result.is_err());
        assert!(
            result
                .unwrap_err()
                .to_string()
                .contains("dig-binary-that-does-not-exist")
        );
    }

    #[test]
    fn test_lookup_splits_stdout_into_lines() {
        // `echo` stands in for dig: two answer lines and a trailing blank.
        let resolver = Resolver::new("echo");
        let lines = resolver.lookup("first", RecordType::Txt).unwrap();

        assert_eq!(lines, vec!["+short first TXT"]);
    }
}
