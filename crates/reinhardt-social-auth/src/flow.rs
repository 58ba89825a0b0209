//! OAuth2 authorization-code flow

pub mod authorization;
pub mod exchange;
pub mod state;
pub mod token_exchange;
pub mod user_data;

pub use authorization::AuthorizationFlow;
pub use exchange::OAuthFlow;
pub use state::{InMemoryStateStore, StateData, StateStore};
pub use token_exchange::TokenExchangeFlow;
pub use user_data::UserDataFlow;
