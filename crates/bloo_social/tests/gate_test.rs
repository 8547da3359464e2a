//! Tests for applying gate decisions.

use async_trait::async_trait;
use bloo_core::{
    CommandOption, GuildId, Interaction, Invoker, PermissionTier, RejectionOutcome, RoleId, UserId,
};
use bloo_database::MemoryModerationStore;
use bloo_interface::{CommandDispatcher, ModerationStore, ResponseChannel};
use bloo_security::{
    ArgumentContentScanner, AuthorityGate, CommandBanRegistry, FilterConfig, FilterWord,
    InteractionGuard, PermissionConfig, RoleTierResolver, ScopeFilter, TierRole, WordFilter,
};
use bloo_social::{GateOutcome, InteractionGate};
use std::sync::{Arc, Mutex};

const GUILD: GuildId = GuildId::new(349243932447604736);
const ADMIN_ROLE: RoleId = RoleId::new(100);
const MOD_ROLE: RoleId = RoleId::new(200);

#[derive(Default)]
struct MockDispatcher {
    dispatched: Mutex<Vec<Interaction>>,
}

#[async_trait]
impl CommandDispatcher for MockDispatcher {
    async fn dispatch(&self, interaction: Interaction) {
        self.dispatched.lock().unwrap().push(interaction);
    }
}

#[derive(Default)]
struct MockResponder {
    sent: Mutex<Vec<String>>,
}

#[async_trait]
impl ResponseChannel for MockResponder {
    async fn send_error(&self, message: &str) {
        self.sent.lock().unwrap().push(message.to_string());
    }
}

fn create_gate() -> (InteractionGate, Arc<MemoryModerationStore>) {
    let resolver = Arc::new(RoleTierResolver::new(PermissionConfig {
        owner_id: None,
        guild_owner_id: None,
        roles: vec![
            TierRole {
                tier: PermissionTier::ADMINISTRATOR,
                role_id: ADMIN_ROLE,
            },
            TierRole {
                tier: PermissionTier::MODERATOR,
                role_id: MOD_ROLE,
            },
        ],
    }));

    let filter = WordFilter::new(
        FilterConfig {
            words: vec![FilterWord {
                phrase: "badword".to_string(),
                bypass: PermissionTier::MODERATOR,
                false_positive: false,
                notify: false,
            }],
            patterns: vec![],
        },
        resolver.clone(),
    )
    .unwrap();

    let store = Arc::new(MemoryModerationStore::new());
    let guard = InteractionGuard::new(
        ScopeFilter::new(GUILD),
        AuthorityGate::new(resolver),
        CommandBanRegistry::new(store.clone()),
        ArgumentContentScanner::new(Arc::new(filter)),
    );

    (InteractionGate::new(guard), store)
}

fn interaction(guild: GuildId, roles: Vec<RoleId>, command: &str, options: Vec<CommandOption>) -> Interaction {
    Interaction::builder()
        .guild_id(guild)
        .invoker(Invoker::member(UserId::new(42), roles))
        .command_name(command)
        .options(options)
        .build()
        .unwrap()
}

#[tokio::test]
async fn test_foreign_guild_has_no_side_effects() {
    let (gate, _) = create_gate();
    let dispatcher = MockDispatcher::default();
    let responder = MockResponder::default();

    let outcome = gate
        .process(
            interaction(GuildId::new(1), vec![], "ping", vec![]),
            &dispatcher,
            &responder,
        )
        .await;

    assert_eq!(outcome, GateOutcome::Dropped);
    assert!(dispatcher.dispatched.lock().unwrap().is_empty());
    assert!(responder.sent.lock().unwrap().is_empty());
}

#[tokio::test]
async fn test_admin_bypasses_ban_and_filter() {
    let (gate, store) = create_gate();
    store
        .set_command_ban(UserId::new(42), "kick", true)
        .await
        .unwrap();
    let dispatcher = MockDispatcher::default();
    let responder = MockResponder::default();

    let outcome = gate
        .process(
            interaction(GUILD, vec![ADMIN_ROLE], "kick", vec![CommandOption::text("reason", "badword")]),
            &dispatcher,
            &responder,
        )
        .await;

    assert_eq!(outcome, GateOutcome::Dispatched);
    assert_eq!(dispatcher.dispatched.lock().unwrap().len(), 1);
    assert!(responder.sent.lock().unwrap().is_empty());
}

#[tokio::test]
async fn test_banned_command_sends_exactly_one_message() {
    let (gate, store) = create_gate();
    store
        .set_command_ban(UserId::new(42), "kick", true)
        .await
        .unwrap();
    let dispatcher = MockDispatcher::default();
    let responder = MockResponder::default();

    let outcome = gate
        .process(interaction(GUILD, vec![], "kick", vec![]), &dispatcher, &responder)
        .await;

    assert_eq!(outcome, GateOutcome::Rejected(RejectionOutcome::command_banned()));
    assert!(dispatcher.dispatched.lock().unwrap().is_empty());
    assert_eq!(
        *responder.sent.lock().unwrap(),
        vec!["You are not allowed to use that command!".to_string()]
    );
}

#[tokio::test]
async fn test_filtered_argument_is_rejected() {
    let (gate, _) = create_gate();
    let dispatcher = MockDispatcher::default();
    let responder = MockResponder::default();

    let outcome = gate
        .process(
            interaction(GUILD, vec![], "tag", vec![CommandOption::text("text", "BadWord!")]),
            &dispatcher,
            &responder,
        )
        .await;

    assert_eq!(outcome, GateOutcome::Rejected(RejectionOutcome::filtered_content()));
    assert!(dispatcher.dispatched.lock().unwrap().is_empty());
    assert_eq!(
        *responder.sent.lock().unwrap(),
        vec!["Your interaction contained a filtered word. Aborting!".to_string()]
    );
}

#[tokio::test]
async fn test_moderator_bypasses_word_but_not_ban() {
    let (gate, store) = create_gate();
    store
        .set_command_ban(UserId::new(42), "purge", true)
        .await
        .unwrap();
    let dispatcher = MockDispatcher::default();
    let responder = MockResponder::default();

    let filtered = gate
        .process(
            interaction(GUILD, vec![MOD_ROLE], "tag", vec![CommandOption::text("text", "badword")]),
            &dispatcher,
            &responder,
        )
        .await;
    let banned = gate
        .process(interaction(GUILD, vec![MOD_ROLE], "purge", vec![]), &dispatcher, &responder)
        .await;

    assert_eq!(filtered, GateOutcome::Dispatched);
    assert_eq!(banned, GateOutcome::Rejected(RejectionOutcome::command_banned()));
    assert_eq!(dispatcher.dispatched.lock().unwrap().len(), 1);
    assert_eq!(responder.sent.lock().unwrap().len(), 1);
}

#[tokio::test]
async fn test_dispatched_interaction_is_unmodified() {
    let (gate, _) = create_gate();
    let dispatcher = MockDispatcher::default();
    let responder = MockResponder::default();
    let original = interaction(
        GUILD,
        vec![],
        "tag",
        vec![CommandOption::text("name", "hello"), CommandOption::empty("extra")],
    );

    let outcome = gate.process(original.clone(), &dispatcher, &responder).await;

    assert_eq!(outcome, GateOutcome::Dispatched);
    assert_eq!(*dispatcher.dispatched.lock().unwrap(), vec![original]);
}

#[tokio::test]
async fn test_member_data_missing_fails_closed() {
    let (gate, _) = create_gate();
    let dispatcher = MockDispatcher::default();
    let responder = MockResponder::default();
    let no_member = Interaction::builder()
        .guild_id(GUILD)
        .invoker(Invoker::user(UserId::new(42)))
        .command_name("tag")
        .options(vec![CommandOption::text("text", "badword")])
        .build()
        .unwrap();

    let outcome = gate.process(no_member, &dispatcher, &responder).await;

    assert_eq!(outcome, GateOutcome::Rejected(RejectionOutcome::filtered_content()));
    assert!(dispatcher.dispatched.lock().unwrap().is_empty());
}
