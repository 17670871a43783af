use std::net::{IpAddr, Ipv4Addr};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RootServer {
    pub name: &'static str,
    pub ip: Ipv4Addr,
}

impl RootServer {
    pub fn addr(&self) -> IpAddr {
        IpAddr::V4(self.ip)
    }
}

/// Starting point of every iterative walk, queried in this order.
pub const ROOT_SERVERS: [RootServer; 5] = [
    RootServer {
        name: "a.root-servers.net",
        ip: Ipv4Addr::new(198, 41, 0, 4),
    },
    RootServer {
        name: "b.root-servers.net",
        ip: Ipv4Addr::new(199, 9, 14, 201),
    },
    RootServer {
        name: "c.root-servers.net",
        ip: Ipv4Addr::new(192, 33, 4, 12),
    },
    RootServer {
        name: "d.root-servers.net",
        ip: Ipv4Addr::new(199, 7, 91, 13),
    },
    RootServer {
        name: "e.root-servers.net",
        ip: Ipv4Addr::new(192, 203, 230, 10),
    },
];

/// Name of a well-known root server, for log labels.
pub fn root_server_name(ip: IpAddr) -> Option<&'static str> {
    ROOT_SERVERS
        .iter()
        .find(|root| root.addr() == ip)
        .map(|root| root.name)
}
