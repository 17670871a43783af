mod dns_query_port;
mod name_lookup_port;

pub use dns_query_port::DnsQueryPort;
pub use name_lookup_port::NameLookupPort;
