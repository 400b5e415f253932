//! Transit journey aggregation.
//!
//! Answers: "I'm travelling from here to there, which bus routes, stops and
//! moving vehicles matter to me?"
//!
//! The core engine in [`journey`] is a pure function over snapshots of the
//! route network, stop inventory and live vehicle positions. [`service`]
//! adds data acquisition around it, and [`render`] turns the result into
//! output for map clients or terminals.

pub mod domain;
pub mod feeds;
pub mod journey;
pub mod render;
pub mod service;
pub mod sources;
pub mod spatial;
