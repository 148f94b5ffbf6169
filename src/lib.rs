//! Resume screening library

pub mod cli;
pub mod client;
pub mod config;
pub mod error;
pub mod input;
pub mod output;
pub mod processing;
pub mod server;

pub use config::Config;
pub use error::{AnalysisError, Result};
pub use processing::analyzer::{AnalysisEngine, MatchReport};
