//! Scripts for deploying the Empire token, bridge, and router contracts.

#![deny(missing_docs)]
#![deny(clippy::missing_docs_in_private_items)]

pub mod cli;
pub mod commands;
pub mod constants;
pub mod errors;
pub mod factory;
pub mod types;
pub mod utils;
