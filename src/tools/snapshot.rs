//! Parsed view of `authselect current` output
//!
//! The status report looks like:
//!
//! ```text
//! Profile ID: sssd
//! Enabled features:
//! - with-sudo
//! - with-mkhomedir
//! ```
//!
//! The value of the first `label: value` line is the active profile, and each
//! hyphen bullet after it is an enabled feature.

use crate::constants::FORCE_FLAG;
use regex::Regex;
use std::sync::LazyLock;

static LABEL_LINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^[^:\n]+:(.*)$").expect("Invalid regex pattern"));

static BULLET_LINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^[ \t]*-[ \t]*(\S+)").expect("Invalid regex pattern"));

/// Active profile plus its enabled features, in reported order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    pub profile: String,
    pub features: Vec<String>,
}

impl Snapshot {
    /// Parse status text. `None` means nothing is configured; malformed
    /// text is never an error.
    pub fn parse(text: &str) -> Option<Self> {
        let caps = LABEL_LINE.captures(text)?;
        let profile = caps.get(1)?.as_str().trim();
        if profile.is_empty() {
            return None;
        }

        let rest = &text[caps.get(0)?.end()..];
        let features = BULLET_LINE
            .captures_iter(rest)
            .filter_map(|c| c.get(1))
            .map(|m| m.as_str().trim())
            .filter(|f| !f.is_empty())
            .map(str::to_string)
            .collect();

        Some(Self {
            profile: profile.to_string(),
            features,
        })
    }

    /// Rebuild from the two values kept in the state store
    pub fn from_stored(profile: &str, features_list: &str) -> Option<Self> {
        let profile = profile.trim();
        if profile.is_empty() {
            return None;
        }
        Some(Self {
            profile: profile.to_string(),
            features: features_list.split_whitespace().map(str::to_string).collect(),
        })
    }

    /// Space-joined feature list, as persisted
    pub fn features_list(&self) -> String {
        self.features.join(" ")
    }

    /// `select <profile> <features...> --force`
    pub fn select_args(&self) -> Vec<String> {
        let mut args = Vec::with_capacity(self.features.len() + 3);
        args.push("select".to_string());
        args.push(self.profile.clone());
        args.extend(self.features.iter().cloned());
        args.push(FORCE_FLAG.to_string());
        args
    }
}
