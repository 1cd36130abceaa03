//! Configuration and path management for saldo-cli

pub mod paths;
pub mod settings;

pub use paths::SaldoPaths;
pub use settings::Settings;
