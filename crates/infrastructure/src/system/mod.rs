pub mod resolv_conf;
pub mod stub_resolver;
pub mod system_resolver;

pub use stub_resolver::StubNameResolver;
pub use system_resolver::SystemNameResolver;
