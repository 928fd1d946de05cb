//! Shared fixtures for the conformance test suite.

#![forbid(unsafe_code)]
