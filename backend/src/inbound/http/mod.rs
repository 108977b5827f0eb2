//! HTTP inbound adapter: page routes, the JSON API, and their shared
//! plumbing (session wrapper, login guard, error mapping, template filters).

pub mod comments;
pub mod dashboard;
pub mod error;
pub mod filters;
pub mod guard;
pub mod pages;
pub mod posts;
pub mod session;
pub mod state;
#[cfg(test)]
pub mod test_utils;
pub mod users;

pub use error::ApiResult;
