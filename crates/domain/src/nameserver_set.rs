use std::net::IpAddr;

/// Ordered candidate servers for one stage of the walk.
///
/// Insertion keeps first-discovery order and silently drops addresses that
/// are already present.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NameserverSet {
    servers: Vec<IpAddr>,
}

impl NameserverSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` when `ip` was not present yet.
    pub fn insert(&mut self, ip: IpAddr) -> bool {
        if self.servers.contains(&ip) {
            return false;
        }
        self.servers.push(ip);
        true
    }

    pub fn first(&self) -> Option<IpAddr> {
        self.servers.first().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = IpAddr> + '_ {
        self.servers.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.servers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.servers.is_empty()
    }

    pub fn as_slice(&self) -> &[IpAddr] {
        &self.servers
    }
}

impl FromIterator<IpAddr> for NameserverSet {
    fn from_iter<I: IntoIterator<Item = IpAddr>>(iter: I) -> Self {
        let mut set = NameserverSet::new();
        for ip in iter {
            set.insert(ip);
        }
        set
    }
}

impl Extend<IpAddr> for NameserverSet {
    fn extend<I: IntoIterator<Item = IpAddr>>(&mut self, iter: I) {
        for ip in iter {
            self.insert(ip);
        }
    }
}
