//! Shared types, errors, constants and configuration for the contact card
//! exchange.

pub mod config;
pub mod constants;
pub mod error;
pub mod types;
