//! # Pathways Core
//!
//! The assembly-index engine and the object model contract it runs on.
//! This crate has **no framework dependencies** — analysis tooling and the CLI
//! depend inward on it.
//!
//! ## Design
//!
//! Any type implementing [`AssemblyObject`] can be fed to a [`Context`],
//! which estimates the minimum number of joining operations needed to build
//! it from basic objects. Exact assembly indices are NP-hard; the context
//! uses a greedy pairwise coassembly heuristic and memoizes every answer.
//!
//! `String` and `i64` implement the contract out of the box (see [`domains`]).

pub mod cache;
pub mod context;
pub mod domains;
pub mod error;
pub mod object;

// Re-export key types at crate root for ergonomics
pub use cache::{Cache, CacheKey};
pub use context::{Context, ensure_solved};
pub use domains::{Splits, Text};
pub use error::{Error, Result};
pub use object::{AssemblyObject, ComponentPair};

/// An assembly or coassembly index.
pub type Index = i32;

/// Seed of the minimisation; returned for a non-basic object without any
/// decompositions.
pub const UNSOLVED: Index = Index::MAX;
