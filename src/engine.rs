//! Scanning and resolution engine.
//!
//! This module is the entry point for the class-name resolution engine. It is
//! split into focused submodules under `src/engine/` while keeping public
//! paths stable (for example `crate::engine::ScanExpression`).
//!
//! ## How the parts work together
//!
//! At a high level, one invocation is a pipeline:
//!
//! ```text
//! caller config ── validate ──────────────┐            (validate.rs)
//!                                         │
//! catalog ── ScanExpression::compile ─────┤            (matcher.rs)
//!                                         │
//! texts ──── scan + dedupe ───────────────┤
//!                                         ▼
//!                                  resolve per class   (resolver.rs)
//!                                         │
//!                                         ▼
//!                        merge_fragments + overlay     (merge.rs)
//!                                         │
//!                                         ▼
//!                              final configuration
//! ```
//!
//! ## Responsibilities by module
//!
//! - `matcher.rs`: compiles the catalog into one composite scanning
//!   expression and extracts class-name tokens from text.
//! - `resolver.rs`: maps a single class name to a configuration fragment plus
//!   a structured [`Outcome`]; defines [`Diagnostic`].
//! - `merge.rs`: folds fragments together and overlays caller configuration
//!   (caller wins at every colliding path).
//! - `validate.rs`: enforces the required caller-configuration shape before
//!   anything else runs.
//!
//! ## Invariants
//!
//! - The compiled [`ScanExpression`] carries no match cursor between calls;
//!   reusing one expression across texts cannot skip matches.
//! - Catalog scans are linear and first-match-wins; catalog order is part of
//!   the engine contract.
//! - The engine owns no global state: expression, token set, and accumulator
//!   are all values local to one invocation.

#[path = "engine/matcher.rs"]
mod matcher;
#[path = "engine/merge.rs"]
mod merge;
#[path = "engine/resolver.rs"]
mod resolver;
#[path = "engine/validate.rs"]
mod validate;

pub use matcher::ScanExpression;
pub use merge::{merge_fragments, overlay};
pub use resolver::{Diagnostic, DiagnosticKind, Outcome, Resolution, resolve};
pub use validate::{ShapeError, validate};
