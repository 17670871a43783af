//! rootwalk application layer: ports and the lookup use cases.
pub mod ports;
pub mod use_cases;
