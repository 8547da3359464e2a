//! Collaborator trait definitions for the Bloo interaction gate.
//!
//! The gate itself only decides. Everything it consults or hands work to sits
//! behind one of these traits, so the decision logic can be exercised without
//! a gateway connection or a database.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod traits;

pub use traits::{
    AuthorityResolver, CommandDispatcher, FilterEngine, ModerationStore, ResponseChannel,
};
