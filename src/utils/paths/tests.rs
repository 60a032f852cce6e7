use super::*;

#[test]
fn config_file_uses_expected_filename() {
    let path = config_file();
    assert_eq!(
        path.file_name().and_then(|f| f.to_str()),
        Some(project_identity::CONFIG_FILE_BASENAME)
    );
    assert!(path.starts_with(SYSTEM_CONFIG_DIR));
}

#[test]
fn state_file_uses_expected_filename() {
    let path = state_file(Path::new("/var/lib/authtool"));
    assert_eq!(path, PathBuf::from("/var/lib/authtool/sysrestore.json"));
}

#[test]
fn absolute_paths_are_untouched() {
    let path = Path::new("/usr/sbin/authconfig");
    assert_eq!(expand_home(path).expect("expand"), path);
}

#[test]
fn tilde_is_expanded() {
    if let Some(dirs) = UserDirs::new() {
        let expanded = expand_home(Path::new("~/auth-backup")).expect("expand");
        assert_eq!(expanded, dirs.home_dir().join("auth-backup"));
    }
}
