//! # Unit Test Modules
//!
//! Organizes the unit test suite by component.
