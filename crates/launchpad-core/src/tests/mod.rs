//! Test module for launchpad-core
//!
//! Scenario tests covering:
//! - Catalog mutations, persistence after each mutation, and notifications
//! - Loading from empty, corrupt and legacy storage
//! - View projection by category and search
//! - Launch dispatch and launch recording
//! - Configuration loading and defaults

mod fixtures;
mod storage_tests;
mod view_tests;
