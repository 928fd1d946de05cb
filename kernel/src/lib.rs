//! Wayfind Kernel: the primitive contracts of the Wayfind search engine.
//!
//! # API Surface
//!
//! The kernel exposes exactly three concerns:
//!
//! - [`compare`] -- tri-state comparator construction for position search
//! - [`cost`] -- the numeric contract for cost accumulation and priority ordering
//! - [`status`] -- the `Continue`/`Break`/`Goal` control signal for search loops
//!
//! # Module Dependency Direction
//!
//! `compare`, `cost`, and `status` are leaves. No module depends on another.
//! The engine crate (`wayfind-search`) depends on all three.

#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]

pub mod compare;
pub mod cost;
pub mod status;
