//! The four benchmark operations, one sub-module per cipher mode.
//!
//! Each operation is a pure function over an explicit [`BenchContext`]
//! reference and an input buffer; cipher construction happens inside the
//! call so the measured workload is self-contained per iteration.
//!
//! [`BenchContext`]: crate::context::BenchContext

pub mod cbc;
pub mod gcm;
