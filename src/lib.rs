//! Employee presence log
//!
//! This crate records paired enter/exit timestamps per employee and serves
//! the accumulated history over HTTP.

#![warn(missing_docs)]

pub mod api;
pub mod clock;
pub mod config;
pub mod error;
pub mod models;
pub mod registry;
