//! Integration tests for the cleanup policy engine
//!
//! These exercise the full pass and the report views against an in-memory
//! repository service, including rule priority, protection, and per-branch
//! failure handling.

pub mod cleanup_pass;
pub mod helpers;
