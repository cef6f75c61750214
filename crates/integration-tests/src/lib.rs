//! Integration tests for Dukkan.
//!
//! # Test Categories
//!
//! - `inventory_flows` - Product CRUD, search/filter, and projection flows
//! - `session_flows` - Signup/login/logout and account-settings flows
//! - `persistence` - File-backed storage across reopen
//!
//! The tests drive the engine the way a front end would: build an
//! [`dukkan_engine::App`] over a backend and a prompter, feed it intents,
//! and assert on the returned projections and the persisted state.

use std::sync::Once;

static TRACING: Once = Once::new();

/// Install the test tracing subscriber once per process.
///
/// Honors `RUST_LOG`; storage-tolerance warnings become visible when tests
/// are run with logging enabled.
pub fn init_tracing() {
    TRACING.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    });
}
