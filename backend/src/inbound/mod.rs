//! Inbound adapters: protocol-facing entry points into the domain.

pub mod http;
