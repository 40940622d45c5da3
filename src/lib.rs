//! Raise Allocation Engine
//!
//! This crate distributes an organisation-wide raise budget across employees,
//! funding the people furthest below their level's target salary first. It
//! provides the allocation pipeline, tab-separated input and output, a salary
//! band configuration loader and an HTTP endpoint.

#![warn(missing_docs)]

pub mod allocation;
pub mod api;
pub mod budget;
pub mod config;
pub mod error;
pub mod io;
pub mod models;
