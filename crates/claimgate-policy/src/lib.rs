//! Claims-based authorization policy engine.
//!
//! A policy is a JSON document describing a boolean expression tree over
//! identity claims. The surrounding request pipeline decodes a policy once,
//! then calls [`Policy::evaluate`] with the caller's claim set on every
//! request; `true` continues the pipeline, `false` becomes an authorization
//! rejection.
//!
//! - The [`operations`] module holds the closed comparator library — one
//!   variant per `#`-prefixed `Type` discriminator, each comparing a claim
//!   value against a configured operand.
//! - The [`matcher`] module selects which claim type a rule inspects and
//!   whether its absence is tolerated.
//! - The [`term`] module is the recursive expression tree: `#Rule` leaves
//!   and `#LogicalAnd`/`#LogicalOr` combinators, each with a polarity flag.
//! - The [`policy`] module names a term tree and exposes the decision
//!   surface, JSON codec and authoring-time validation.
//! - The [`store`] module holds decoded policies keyed by id, replaced
//!   atomically on reload.
//!
//! # Example
//!
//! ```ignore
//! use claimgate_core::ClaimSet;
//! use claimgate_policy::Policy;
//!
//! let policy = Policy::from_json(policy_json)?;
//! policy.validate()?;
//!
//! let claims = ClaimSet::from_pairs([("roles", "reader")]);
//! if policy.evaluate(&claims) {
//!     // authorized
//! }
//! ```
//!
//! Policy trees are immutable after construction: one `Policy` may be
//! evaluated concurrently from any number of threads with no locking, and
//! `evaluate` never blocks or performs I/O.

pub mod matcher;
pub mod operations;
pub mod policy;
pub mod store;
pub mod term;

pub use matcher::Match;
pub use operations::{InvalidOperand, Operation};
pub use policy::{Policy, ValidationError};
pub use store::{PolicyStore, StoreError};
pub use term::Term;
