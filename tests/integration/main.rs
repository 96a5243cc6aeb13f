//! Integration test suite entry point.

mod fixture;

mod error_handling_tests;
mod migration_tests;
