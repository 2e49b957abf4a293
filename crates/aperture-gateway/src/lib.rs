//! HTTP surface of the Aperture image gateway.
//!
//! Routing, request/response models, error mapping, and shared state live
//! here; the binary under `bin/http` wires configuration to concrete
//! backends.

pub mod app;
pub mod error;
pub mod handlers;
pub mod model;
pub mod state;
