//! Core types and definitions for the WAVELINE wave controller.
//!
//! This crate defines the vocabulary shared across all other crates:
//! authored wave data, units and prototypes, timeline events, errors,
//! constants, and the service traits the simulation calls out to.
//! It has no dependency on the ECS or any rendering framework.

pub mod constants;
pub mod enums;
pub mod errors;
pub mod events;
pub mod services;
pub mod types;
pub mod units;
pub mod waves;
