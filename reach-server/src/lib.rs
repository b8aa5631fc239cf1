//! Transit reachability server.
//!
//! Answers: "which stations can I reach from here with at most
//! N transfers?"

pub mod domain;
pub mod engine;
pub mod graph;
pub mod web;
