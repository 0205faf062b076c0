//! Conversational sessions: the citizen profile, the question flow, and the
//! service plus HTTP surface that drive them.
//!
//! A session walks a fixed question order. After each accepted answer the
//! next prompt is staged and delivered after a configurable composing delay;
//! resetting the session cancels any staged delivery.

pub mod dialogue;
pub mod domain;
mod normalize;
pub mod repository;
pub mod router;
pub mod service;

#[cfg(test)]
mod tests;

pub use dialogue::{DialogueSession, PendingPrompt, TurnReceipt};
pub use domain::{
    ChoiceOption, DialogueStage, Message, MessageOrigin, Profile, ProfileField, SessionError,
    SessionId,
};
pub use repository::{RepositoryError, SessionStore};
pub use router::session_router;
pub use service::{SessionService, SessionServiceError, SessionSnapshot, TurnReply};
