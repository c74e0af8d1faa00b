mod completion_client;
mod credential_resolver;

pub use completion_client::*;
pub use credential_resolver::*;
