//! Tests for offline gate evaluation of raw payloads.

use bloo::{BlooConfig, GateDecision, GuildId, PermissionTier, RoleId, simulate};
use bloo_core::RejectionOutcome;
use bloo_security::{FilterConfig, FilterWord, PermissionConfig, TierRole};

const GUILD: u64 = 349243932447604736;
const ADMIN_ROLE: u64 = 411784336863657984;

fn create_config() -> BlooConfig {
    BlooConfig {
        guild_id: GuildId::new(GUILD),
        permissions: PermissionConfig {
            owner_id: None,
            guild_owner_id: None,
            roles: vec![TierRole {
                tier: PermissionTier::ADMINISTRATOR,
                role_id: RoleId::new(ADMIN_ROLE),
            }],
        },
        filter: FilterConfig {
            words: vec![FilterWord {
                phrase: "badword".to_string(),
                bypass: PermissionTier::MODERATOR,
                false_positive: false,
                notify: false,
            }],
            patterns: vec![],
        },
        extensions: vec![],
        database: None,
    }
}

fn payload(guild: u64, roles: &[u64], command: &str, text: Option<&str>) -> String {
    let roles: Vec<String> = roles.iter().map(|r| format!("\"{}\"", r)).collect();
    let options = match text {
        Some(text) => format!(r#", "options": [{{ "name": "text", "type": 3, "value": "{}" }}]"#, text),
        None => String::new(),
    };
    format!(
        r#"{{
            "guild_id": "{guild}",
            "member": {{ "user": {{ "id": "42" }}, "roles": [{roles}] }},
            "data": {{ "name": "{command}"{options} }}
        }}"#,
        roles = roles.join(", "),
    )
}

#[tokio::test]
async fn test_foreign_guild_is_dropped() {
    let result = simulate(create_config(), &payload(1, &[], "ping", None), &[])
        .await
        .unwrap();
    assert_eq!(result.decision, GateDecision::Drop);
}

#[tokio::test]
async fn test_banned_command_is_rejected() {
    let bans = vec!["kick".to_string()];
    let result = simulate(create_config(), &payload(GUILD, &[], "kick", None), &bans)
        .await
        .unwrap();
    assert_eq!(
        result.decision,
        GateDecision::Reject(RejectionOutcome::command_banned())
    );
}

#[tokio::test]
async fn test_admin_bypasses_ban_and_filter() {
    let bans = vec!["kick".to_string()];
    let result = simulate(
        create_config(),
        &payload(GUILD, &[ADMIN_ROLE], "kick", Some("badword")),
        &bans,
    )
    .await
    .unwrap();
    assert_eq!(result.decision, GateDecision::Dispatch { bypassed: true });
}

#[tokio::test]
async fn test_filtered_text_is_rejected() {
    let result = simulate(
        create_config(),
        &payload(GUILD, &[], "tag", Some("a badword here")),
        &[],
    )
    .await
    .unwrap();
    assert_eq!(
        result.decision,
        GateDecision::Reject(RejectionOutcome::filtered_content())
    );
}

#[tokio::test]
async fn test_clean_command_dispatches() {
    let result = simulate(create_config(), &payload(GUILD, &[], "ping", None), &[])
        .await
        .unwrap();
    assert_eq!(result.decision, GateDecision::Dispatch { bypassed: false });
    assert_eq!(result.interaction.command_name(), "ping");
}

#[tokio::test]
async fn test_malformed_payload_is_an_error() {
    assert!(simulate(create_config(), "{ not json", &[]).await.is_err());
}
