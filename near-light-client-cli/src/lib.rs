//! Operator-facing shell around the NEAR light client verification core.
//!
//! This crate owns everything the core does not: talking to a NEAR RPC
//! endpoint, decoding its JSON responses into the core's wire types,
//! persisting a trusted head and its producer sets to disk, and presenting
//! all of that through a small set of subcommands.

#![forbid(unsafe_code)]
#![warn(missing_docs, trivial_casts, unused_qualifications)]

pub mod application;
pub mod commands;
pub mod config;
pub mod error;
pub mod light_client;
pub mod prelude;
pub mod utils;
