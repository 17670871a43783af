//! rootwalk infrastructure: DNS wire codec, UDP transport and the lookup
//! backends behind the application ports.
pub mod dns;
pub mod system;
