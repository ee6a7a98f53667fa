// horta-client: the resource client for the Horta Comunitária backend.
//
// One generic wrapper around the four REST verbs plus login. No cache, no
// retry: callers re-list after every successful mutation.

mod client;
pub mod config;
mod error;
pub mod session;

pub use client::ApiClient;
pub use config::Config;
pub use error::ApiError;
pub use session::{Session, SessionError, SessionStore};
