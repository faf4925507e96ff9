//! Thin InfluxDB 1.x query client for fluxq.
//!
//! This crate provides:
//! - The [`InfluxStore`] trait the agent tools are written against
//! - [`InfluxClient`], a reqwest-backed implementation for the
//!   InfluxDB 1.x `/query` HTTP API
//!
//! The client is a pass-through: one InfluxQL statement in, one fully
//! materialized list of points out. It holds no transaction, performs no
//! retries, and is not synchronized for concurrent use.

pub mod client;
pub mod error;
pub mod store;
pub mod testing;

pub use client::{ConnectionContext, InfluxClient, InfluxConfig};
pub use error::{InfluxError, Result};
pub use store::{InfluxStore, Point};
