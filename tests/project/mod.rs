//! Project layer tests
//!
//! The end-to-end pipeline over in-memory corpora and directories on disk.

mod tests_scenarios;
