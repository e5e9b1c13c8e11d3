// Command modules shared by the three generator binaries
pub mod cli;
pub mod commands;
pub mod execute;
pub mod logging;

// Re-export commonly used types
pub use cli::Cli;
pub use commands::Commands;
