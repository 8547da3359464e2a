//! Tests for configuration loading.

use bloo::{BlooConfig, BlooErrorKind, GuildId, PermissionTier, RoleId, UserId};
use std::io::Write;
use tempfile::NamedTempFile;

fn write_config(contents: &str) -> NamedTempFile {
    let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

#[test]
fn test_full_config_parses() {
    let file = write_config(
        r#"
guild_id = 349243932447604736
extensions = ["commands.info.help"]

[permissions]
owner_id = 109705860275539968

[[permissions.roles]]
tier = 6
role_id = 411784336863657984

[[filter.words]]
phrase = "badword"

[[filter.words]]
phrase = "ass"
bypass = 4
false_positive = true

[[filter.patterns]]
pattern = "discord\\.gg/\\w+"

[database]
url = "postgres://localhost/bloo"
"#,
    );

    let config = BlooConfig::from_file(file.path()).unwrap();

    assert_eq!(config.guild_id, GuildId::new(349243932447604736));
    assert_eq!(config.extensions, vec!["commands.info.help".to_string()]);
    assert_eq!(
        config.permissions.owner_id,
        Some(UserId::new(109705860275539968))
    );
    assert_eq!(config.permissions.roles[0].tier, PermissionTier::ADMINISTRATOR);
    assert_eq!(
        config.permissions.roles[0].role_id,
        RoleId::new(411784336863657984)
    );
    assert_eq!(config.filter.words.len(), 2);
    assert_eq!(config.filter.words[0].bypass, PermissionTier::MODERATOR);
    assert!(config.filter.words[1].false_positive);
    assert_eq!(config.filter.patterns.len(), 1);
    assert_eq!(
        config.database.map(|db| db.url),
        Some("postgres://localhost/bloo".to_string())
    );
}

#[test]
fn test_missing_guild_id_is_rejected() {
    let file = write_config(
        r#"
[permissions]
owner_id = 1
"#,
    );

    let err = BlooConfig::from_file(file.path()).unwrap_err();
    assert!(matches!(err.kind(), BlooErrorKind::Config(_)));
}

#[test]
fn test_extensions_default_to_builtins() {
    let file = write_config("guild_id = 7\n");

    let config = BlooConfig::from_file(file.path()).unwrap();
    assert_eq!(
        config.extensions,
        vec![
            "commands.info.ping".to_string(),
            "commands.info.help".to_string()
        ]
    );
}

#[test]
fn test_explicit_path_must_exist() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("nope.toml");

    let err = BlooConfig::load(Some(&missing)).unwrap_err();
    assert!(matches!(err.kind(), BlooErrorKind::Config(_)));
}

#[test]
fn test_environment_overrides_file() {
    let file = write_config(
        r#"
guild_id = 1
extensions = ["commands.info.help"]
"#,
    );

    // SAFETY: no other test in this binary reads BLOO__* variables
    unsafe {
        std::env::set_var("BLOO__GUILD_ID", "349243932447604736");
        std::env::set_var("BLOO__PERMISSIONS__OWNER_ID", "77");
    }
    let loaded = BlooConfig::load(Some(file.path()));
    unsafe {
        std::env::remove_var("BLOO__GUILD_ID");
        std::env::remove_var("BLOO__PERMISSIONS__OWNER_ID");
    }

    let config = loaded.unwrap();
    assert_eq!(config.guild_id, GuildId::new(349243932447604736));
    assert_eq!(config.permissions.owner_id, Some(UserId::new(77)));
    assert_eq!(config.extensions, vec!["commands.info.help".to_string()]);
}
