//! Session core for the resume relevance dashboard.
//!
//! The crate is client-side glue around an external evaluation service:
//! shared domain records, a reducer-backed session store, a transport
//! client that can transparently fall back to an in-process mock
//! backend, upload/evaluate orchestration, and a pure
//! filter/sort/export pipeline over evaluation results. Scoring itself
//! happens on the other side of the HTTP boundary.

pub mod config;
pub mod domain;
pub mod error;
pub mod orchestrate;
pub mod results;
pub mod session;
pub mod telemetry;
pub mod transport;
