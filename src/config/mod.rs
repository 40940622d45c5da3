//! Configuration loading for the raise allocation engine.
//!
//! This module loads the salary band table from either a YAML file or the
//! tab-separated band format.
//!
//! # Example
//!
//! ```no_run
//! use raise_allocator::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/bands.yaml").unwrap();
//! println!("Loaded {} bands", config.bands().len());
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::BandsConfig;
