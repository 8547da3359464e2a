//! Snowflake identifier newtypes.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

macro_rules! snowflake {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(
            Debug,
            Clone,
            Copy,
            PartialEq,
            Eq,
            Hash,
            PartialOrd,
            Ord,
            Serialize,
            Deserialize,
            derive_more::Display,
            derive_more::From,
        )]
        #[serde(transparent)]
        pub struct $name(u64);

        impl $name {
            /// Wrap a raw snowflake.
            pub const fn new(id: u64) -> Self {
                Self(id)
            }

            /// The raw snowflake value.
            pub const fn get(self) -> u64 {
                self.0
            }
        }

        impl FromStr for $name {
            type Err = std::num::ParseIntError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                s.parse().map(Self)
            }
        }
    };
}

snowflake!(
    /// Guild (server) identifier.
    GuildId
);
snowflake!(
    /// User identifier.
    UserId
);
snowflake!(
    /// Role identifier.
    RoleId
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_snowflake_strings() {
        let id: GuildId = "349243932447604736".parse().unwrap();
        assert_eq!(id.get(), 349243932447604736);
        assert!("not-a-number".parse::<UserId>().is_err());
    }

    #[test]
    fn displays_raw_value() {
        assert_eq!(RoleId::new(42).to_string(), "42");
    }
}
