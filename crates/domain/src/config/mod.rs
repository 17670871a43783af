pub mod errors;
pub mod logging;
pub mod resolver;
pub mod root;

pub use errors::ConfigError;
pub use logging::LoggingConfig;
pub use resolver::{NameLookupMode, ResolverConfig};
pub use root::{CliOverrides, Config};
