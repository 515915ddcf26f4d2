#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Terminal client for a house price prediction service.
//!
//! The [`session`] module holds the form, location options and result
//! state; [`api`] talks to the service; [`tui`] draws it all.

pub mod api;
pub mod config;
pub mod logging;
pub mod model;
pub mod session;
pub mod tui;
