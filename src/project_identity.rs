//! Central project identity contract.
//!
//! This module is the single source of truth for runtime identity values.

pub const BINARY_NAME: &str = "authtool";
pub const ENV_PREFIX: &str = "AUTHTOOL";
pub const CONFIG_FILE_BASENAME: &str = "authtool.kdl";

pub fn env_key(suffix: &str) -> String {
    format!("{}_{}", ENV_PREFIX, suffix)
}

pub fn cli_with(args: &str) -> String {
    format!("{} {}", BINARY_NAME, args)
}
