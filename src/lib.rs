pub use anyhow::{anyhow, Result};

pub mod catalog;
pub mod cli;
pub mod config;
pub mod error;
pub mod netlist;
pub mod paths;
pub mod regression;
pub mod report;
pub mod verification;
pub mod version;
