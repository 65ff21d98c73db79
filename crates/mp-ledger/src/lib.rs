//! mp-ledger - The migration ledger component
//!
//! Ties discovery, validation, and the target store together: computes the
//! work remaining for a store ([`Plan`]) and applies pending change-units
//! in strict version order ([`Runner`]). Whether a failed unit halts the
//! batch is the caller's policy, expressed as [`ErrorPolicy`].

pub mod error;
pub mod plan;
pub mod runner;

pub use error::{LedgerError, LedgerResult};
pub use plan::Plan;
pub use runner::{ErrorPolicy, RunReport, Runner, UnitResult};
