use std::fs;

use sssh::backup::BackupStore;
use sssh::sshconfig::{ConfigError, ConfigStore};
use tempfile::tempdir;

fn setup(content: &str) -> (tempfile::TempDir, ConfigStore, BackupStore) {
    let dir = tempdir().unwrap();
    let config_path = dir.path().join("config");
    fs::write(&config_path, content).unwrap();
    let config = ConfigStore::new(config_path);
    let backups = BackupStore::new(dir.path().join("backups"));
    (dir, config, backups)
}

#[test]
fn test_list_is_empty_without_backup_dir() {
    let (_dir, _config, backups) = setup("Host a\n");
    assert!(!backups.dir().exists());
    assert!(backups.list().unwrap().is_empty());
}

#[test]
fn test_create_copies_config_verbatim() {
    let content = "# G: prod\nHost web\n        HostName 10.0.0.5\n";
    let (_dir, config, backups) = setup(content);

    backups.create(&config, "pre-upgrade").unwrap();

    assert!(backups.exists("pre-upgrade"));
    assert_eq!(
        fs::read_to_string(backups.dir().join("pre-upgrade")).unwrap(),
        content
    );
    assert_eq!(backups.list().unwrap(), vec!["pre-upgrade"]);
}

#[test]
fn test_create_rejects_duplicate_name() {
    let (_dir, config, backups) = setup("Host a\n");
    backups.create(&config, "snap").unwrap();

    assert!(matches!(
        backups.create(&config, "snap"),
        Err(ConfigError::DuplicateBackupName { .. })
    ));
}

#[test]
fn test_restore_overwrites_config() {
    let original = "Host a\n        HostName 1.1.1.1\n";
    let (_dir, config, backups) = setup(original);
    backups.create(&config, "before").unwrap();

    config.write("Host b\n        HostName 2.2.2.2\n").unwrap();
    backups.restore(&config, "before").unwrap();

    assert_eq!(fs::read_to_string(config.path()).unwrap(), original);
}

#[test]
fn test_restore_unknown_name() {
    let (_dir, config, backups) = setup("Host a\n");
    assert!(matches!(
        backups.restore(&config, "nope"),
        Err(ConfigError::BackupNotFound { .. })
    ));
}

#[test]
fn test_delete_removes_only_the_named_backup() {
    let (_dir, config, backups) = setup("Host a\n");
    backups.create(&config, "one").unwrap();
    backups.create(&config, "two").unwrap();

    backups.delete("one").unwrap();

    assert_eq!(backups.list().unwrap(), vec!["two"]);
    assert!(matches!(
        backups.delete("one"),
        Err(ConfigError::BackupNotFound { .. })
    ));
}

#[test]
fn test_names_are_sorted() {
    let (_dir, config, backups) = setup("Host a\n");
    for name in ["zeta", "alpha", "mid"] {
        backups.create(&config, name).unwrap();
    }
    assert_eq!(backups.list().unwrap(), vec!["alpha", "mid", "zeta"]);
}
