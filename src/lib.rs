pub mod cli;
pub mod config;
pub mod context;
pub mod error;
pub mod load;
pub mod merge;
pub mod record;
pub mod registry;
pub mod resolve;
pub mod scan;
pub mod transport;

// Convenience re-exports (optional, but nice)
pub use config::Config;
pub use context::BootContext;
pub use error::AliasError;
pub use merge::merge;
pub use record::{AliasId, AliasRecord, OptionMap, DEFAULT_ENVIRONMENT};
pub use registry::AliasRegistry;
pub use resolve::Resolver;
pub use transport::{classify, ConnectionSpec, Os, Target};
