pub mod message_builder;
pub mod query_client;
pub mod record_type_map;
pub mod response_parser;

pub use message_builder::MessageBuilder;
pub use query_client::UdpQueryClient;
pub use record_type_map::RecordTypeMapper;
pub use response_parser::ResponseParser;
