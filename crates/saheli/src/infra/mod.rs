//! Remote agent access: wire transport and the typed client on top of it.

pub mod agent;
pub mod http;
pub mod transport;
