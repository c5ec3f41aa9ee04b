//! Application layer for the inack client.
//!
//! Use cases coordinating the domain, infrastructure and HTTP layers:
//! session lifecycle, the recipe list cache and the background poller.

pub mod context;
pub mod poller;
pub mod recipe_usecase;
pub mod session_usecase;

pub use context::AppContext;
pub use poller::{DEFAULT_POLL_INTERVAL, PollerHandle, RecipePoller};
pub use recipe_usecase::RecipeUseCase;
pub use session_usecase::SessionUseCase;

#[cfg(test)]
pub(crate) mod testing;
