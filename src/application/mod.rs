//! Application layer orchestrating evaluation and recording.
//!
//! This module defines the `ComplianceEngine`, the single object the transport layers
//! (CLI, HTTP, simulation) talk to. It exposes the primary processing path and the
//! simulation path as separate operations.

pub mod engine;
