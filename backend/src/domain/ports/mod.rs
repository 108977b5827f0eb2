//! Repository ports consumed by the inbound HTTP adapter.
//!
//! Each port is an async trait implemented by a Diesel adapter in
//! `outbound::persistence` and by in-memory stubs in tests.

mod comment_repository;
mod macros;
mod post_repository;
mod user_repository;
mod vote_repository;

pub(crate) use macros::define_port_error;

pub use comment_repository::{CommentPersistenceError, CommentRepository};
pub use post_repository::{PostPersistenceError, PostRepository};
pub use user_repository::{UserPersistenceError, UserRepository};
pub use vote_repository::{VotePersistenceError, VoteRepository};
