//! Domain layer of the inack client: models, errors and the seams the
//! infrastructure and HTTP layers plug into.

pub mod api;
pub mod error;
pub mod recipe;
pub mod session;
pub mod store;

pub use api::RecipeApi;
pub use error::{ApiError, InackError, Result};
pub use recipe::{Classification, Recipe};
pub use session::{Credentials, Session};
pub use store::TokenStore;
