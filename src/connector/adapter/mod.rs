mod env_credential_resolver;
mod gemini_client;
mod mock_completion;

pub use env_credential_resolver::*;
pub use gemini_client::*;
pub use mock_completion::*;
