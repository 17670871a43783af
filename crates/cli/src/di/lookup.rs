use rootwalk_application::ports::NameLookupPort;
use rootwalk_application::use_cases::{IterativeLookupUseCase, RecursiveLookupUseCase, WalkOptions};
use rootwalk_domain::root_hints::root_server_name;
use rootwalk_domain::{NameLookupMode, NameserverSet, ResolverConfig};
use rootwalk_infrastructure::dns::UdpQueryClient;
use rootwalk_infrastructure::system::{resolv_conf, StubNameResolver, SystemNameResolver};
use std::net::SocketAddr;
use std::sync::Arc;
use tracing::{debug, info, warn};

const DNS_PORT: u16 = 53;

pub struct LookupServices {
    pub iterative: IterativeLookupUseCase,
    pub recursive: RecursiveLookupUseCase,
}

impl LookupServices {
    pub fn new(config: &ResolverConfig) -> anyhow::Result<Self> {
        let lookup = Self::build_name_lookup(config)?;
        let query = Arc::new(UdpQueryClient::new(config.port, config.query_timeout()));
        let roots: NameserverSet = config.root_addrs()?.into_iter().collect();
        for root in roots.iter() {
            debug!(
                root = %root,
                name = root_server_name(root).unwrap_or("custom"),
                "Root server"
            );
        }

        info!(
            roots = roots.len(),
            timeout_ms = config.query_timeout_ms,
            try_all_candidates = config.try_all_candidates,
            "Lookup services ready"
        );

        Ok(Self {
            iterative: IterativeLookupUseCase::new(query, Arc::clone(&lookup), roots)
                .with_options(WalkOptions::from(config)),
            recursive: RecursiveLookupUseCase::new(lookup),
        })
    }

    fn build_name_lookup(config: &ResolverConfig) -> anyhow::Result<Arc<dyn NameLookupPort>> {
        let system = || -> Arc<dyn NameLookupPort> {
            Arc::new(SystemNameResolver::new(config.lookup_timeout()))
        };

        match config.name_lookup {
            NameLookupMode::System => {
                info!("Using the system resolver for name lookups");
                Ok(system())
            }
            NameLookupMode::Stub => {
                let server = match config.stub_server_addr()? {
                    Some(addr) => addr,
                    None => match resolv_conf::system_nameserver() {
                        Some(ip) => SocketAddr::new(ip, DNS_PORT),
                        None => {
                            warn!(
                                path = resolv_conf::RESOLV_CONF_PATH,
                                "No nameserver configured, falling back to the system resolver"
                            );
                            return Ok(system());
                        }
                    },
                };
                info!(server = %server, "Using stub lookups");
                Ok(Arc::new(StubNameResolver::new(server, config.lookup_timeout())))
            }
        }
    }
}
