//! Core library for jesa.
//!
//! This crate provides everything the CLI builds on:
//! - `memorial`, `prayer`, `ritual` for the data model
//! - `dates` for the pure ritual date engine
//! - `ics` for deterministic calendar export
//! - `store` and `shrine` for the key-value-backed collection
//! - `config` for the global configuration file

pub mod config;
pub mod dates;
pub mod error;
pub mod ics;
pub mod memorial;
pub mod prayer;
pub mod ritual;
pub mod shrine;
pub mod store;

pub use error::{JesaError, JesaResult};
