// Common constants used throughout the codebase

/// Default location of the profile-based selector
pub const DEFAULT_AUTHSELECT_PATH: &str = "/usr/bin/authselect";

/// Default location of the legacy configuration tool
pub const DEFAULT_AUTHCONFIG_PATH: &str = "/usr/sbin/authconfig";

/// System-wide settings directory
pub const SYSTEM_CONFIG_DIR: &str = "/etc/authtool";

/// Default directory for persisted state and file backups
pub const DEFAULT_STATE_DIR: &str = "/var/lib/authtool";

/// State file name
pub const STATE_FILE_NAME: &str = "sysrestore.json";

/// Directory (under the state dir) holding file store copies
pub const FILES_DIR_NAME: &str = "files";

/// Default timeout for external tool invocations, in seconds
pub const DEFAULT_COMMAND_TIMEOUT_SECS: u64 = 300;

/// Verbatim `authselect current` output saved by a backup
pub const AUTHSELECT_BACKUP_FILE: &str = "authselect.backup";

/// Files the legacy tool copies into its backup that must not be restored later
pub const FILES_TO_NOT_BACKUP: &[&str] = &["passwd", "group", "shadow", "gshadow"];

/// State store namespace owned by the profile-based facade
pub const AUTHSELECT_NAMESPACE: &str = "authselect";

/// State store namespace owned by the legacy facade
pub const AUTHCONFIG_NAMESPACE: &str = "authconfig";

pub const PROFILE_KEY: &str = "profile";
pub const FEATURES_KEY: &str = "features_list";

/// Legacy options recorded at configure time, in the order they are undone
pub const AUTHCONFIG_TRACKED_OPTIONS: &[&str] = &["ldap", "krb5", "sssd", "sssdauth", "mkhomedir"];

/// Profile selected on install
pub const SSSD_PROFILE: &str = "sssd";

/// Profile feature enabling home directory creation on first login
pub const MKHOMEDIR_FEATURE: &str = "with-mkhomedir";

/// Selector flag skipping its interactive confirmation
pub const FORCE_FLAG: &str = "--force";
