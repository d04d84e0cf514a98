//! Bizmatch HTTP server library (router, handlers, shared state).
//!
//! The binary in `main.rs` wires configuration and logging around
//! [`gateway::create_router_with_state`]; tests build the same router directly.

pub mod gateway;
