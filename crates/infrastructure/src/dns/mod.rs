pub mod forwarding;
pub mod transport;

pub use forwarding::{MessageBuilder, RecordTypeMapper, ResponseParser, UdpQueryClient};
pub use transport::udp::UdpTransport;
