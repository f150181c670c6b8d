//! Launch Dash: an interactive dashboard over a small table of rocket
//! launches.
//!
//! The library owns everything except the widgets: loading the CSV
//! ([`data::loader`]), filtering it by launch site and payload mass
//! ([`data::filter`]), and turning the current control values into pie and
//! scatter chart descriptors ([`dashboard::Dashboard::update_charts`]).
//! The [`server`] module exposes the same model over HTTP; the `launch-dash`
//! binary renders it natively with egui.

pub mod color;
pub mod config;
pub mod dashboard;
pub mod data;
pub mod server;
