//! The interaction value handed to the gate.

use crate::{CommandOption, GuildId, RoleId, UserId};
use bloo_error::BuilderError;
use serde::{Deserialize, Serialize};

/// The user who invoked a command.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, derive_getters::Getters)]
pub struct Invoker {
    user_id: UserId,
    /// Roles held in the guild; `None` when no member data came with the interaction.
    roles: Option<Vec<RoleId>>,
}

impl Invoker {
    /// An invoker with guild member data.
    pub fn member(user_id: UserId, roles: Vec<RoleId>) -> Self {
        Self {
            user_id,
            roles: Some(roles),
        }
    }

    /// An invoker without guild member data, e.g. from a direct message.
    pub fn user(user_id: UserId) -> Self {
        Self {
            user_id,
            roles: None,
        }
    }

    /// Whether the invoker holds `role`.
    pub fn has_role(&self, role: RoleId) -> bool {
        self.roles
            .as_ref()
            .is_some_and(|roles| roles.contains(&role))
    }
}

/// One incoming command invocation.
///
/// Immutable once built. The gate borrows it while checking and moves it into
/// the dispatcher only when every check passes.
///
/// # Examples
///
/// ```
/// use bloo_core::{CommandOption, GuildId, Interaction, Invoker, UserId};
///
/// let interaction = Interaction::builder()
///     .guild_id(GuildId::new(1))
///     .invoker(Invoker::member(UserId::new(2), vec![]))
///     .command_name("tag")
///     .options(vec![CommandOption::text("name", "jailbreak")])
///     .build()
///     .unwrap();
///
/// assert_eq!(interaction.command_name(), "tag");
/// assert!(interaction.has_options());
/// ```
#[derive(
    Debug,
    Clone,
    PartialEq,
    Serialize,
    Deserialize,
    derive_builder::Builder,
    derive_getters::Getters,
)]
#[builder(setter(into), build_fn(private, name = "build_internal"))]
pub struct Interaction {
    /// Guild the interaction came from; `None` for direct messages.
    #[builder(default)]
    guild_id: Option<GuildId>,
    invoker: Invoker,
    command_name: String,
    #[builder(default)]
    options: Vec<CommandOption>,
}

impl Interaction {
    /// Creates a new interaction builder.
    pub fn builder() -> InteractionBuilder {
        InteractionBuilder::default()
    }

    /// Whether any options were supplied.
    pub fn has_options(&self) -> bool {
        !self.options.is_empty()
    }
}

impl InteractionBuilder {
    /// Build the interaction.
    ///
    /// # Errors
    ///
    /// Returns error if the invoker or command name is missing.
    pub fn build(&self) -> Result<Interaction, BuilderError> {
        self.build_internal().map_err(|e| BuilderError::from(e.to_string()))
    }
}
