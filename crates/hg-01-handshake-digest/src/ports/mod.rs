//! # Ports Layer
//!
//! Trait definitions for the hexagonal architecture.
//! - **Inbound (Driving)**: API that handshake code calls
//! - **Outbound (Driven)**: the hash capability this subsystem consumes

pub mod inbound;
pub mod outbound;
