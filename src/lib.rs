//! algokit - graph traversal utilities and a rule-based loan decision engine
//!
//! Two independent, stateless components:
//! - [`graph`]: breadth-first and depth-first traversal over adjacency lists
//! - [`loan`]: deterministic loan eligibility, pricing and repayment schedule
//!
//! The `algokit` binary wraps both behind a small CLI.

pub mod config;
pub mod graph;
pub mod loan;
pub mod models;
pub mod reporters;
