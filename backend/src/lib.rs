//! Link-sharing backend: session-gated CRUD API over a relational schema,
//! plus server-rendered pages for browsing and a per-user dashboard.

pub mod domain;
pub mod inbound;
pub mod outbound;
pub mod server;
