//! Build metadata exposed by the CLI and `/version`.

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
