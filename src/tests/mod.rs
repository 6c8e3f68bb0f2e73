//! Internal test modules - whitebox tests with crate access
//!
//! Harness-based acceptance scenarios drive the real key and mouse routing
//! against a TestBackend; snapshot tests pin down rendered screens.

// Harness-based acceptance tests
mod acceptance_browse;
