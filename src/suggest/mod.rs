//! Popular-word suggestion core: cache key derivation, the bounded
//! single-flight cache, backend collaborators, and orchestration.

pub mod cache;
pub mod client;
pub mod key;
pub mod roles;
pub mod service;
