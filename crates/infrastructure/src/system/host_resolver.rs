use async_trait::async_trait;
use nodeip_application::ports::HostResolver;
use nodeip_domain::{AddressFamily, Node, ResolutionFailure, ResolutionResult, ResolverConfig};
use std::future::Future;
use std::io;
use std::net::{IpAddr, SocketAddr};
use std::time::Duration;
use tracing::debug;

const MAX_HOSTNAME_LEN: usize = 253;

// EAI_NONAME / EAI_NODATA wording from glibc, musl and the BSDs.
const UNKNOWN_NAME_MESSAGES: &[&str] = &[
    "not known",
    "No address associated",
    "nodename nor servname",
    "Name does not resolve",
    "No address information",
];

/// Resolves hostnames through the operating system resolver.
pub struct SystemHostResolver {
    timeout: Duration,
    family: AddressFamily,
}

impl SystemHostResolver {
    pub fn new(timeout: Duration, family: AddressFamily) -> Self {
        Self { timeout, family }
    }

    pub fn from_config(config: &ResolverConfig) -> Self {
        Self::new(Duration::from_millis(config.timeout_ms), config.address_family)
    }

    async fn lookup(&self, hostname: &str) -> Result<IpAddr, ResolutionFailure> {
        validate_hostname(hostname)?;

        let addrs = bounded_lookup(self.timeout, tokio::net::lookup_host((hostname, 0))).await?;

        select_address(addrs.map(|sa| sa.ip()), self.family).ok_or(ResolutionFailure::NotFound)
    }
}

/// Runs a lookup future, giving up after `timeout`.
pub async fn bounded_lookup<F, I>(timeout: Duration, lookup: F) -> Result<I, ResolutionFailure>
where
    F: Future<Output = io::Result<I>>,
    I: Iterator<Item = SocketAddr>,
{
    tokio::time::timeout(timeout, lookup)
        .await
        .map_err(|_| ResolutionFailure::Timeout {
            timeout_ms: timeout.as_millis() as u64,
        })?
        .map_err(classify_io_error)
}

#[async_trait]
impl HostResolver for SystemHostResolver {
    async fn resolve(&self, node: Node) -> ResolutionResult {
        match self.lookup(node.hostname()).await {
            Ok(addr) => {
                debug!(hostname = %node, address = %addr, "Lookup successful");
                ResolutionResult::resolved(node, addr)
            }
            Err(failure) => {
                debug!(hostname = %node, error = %failure, "Lookup failed");
                ResolutionResult::failed(node, failure)
            }
        }
    }
}

fn validate_hostname(hostname: &str) -> Result<(), ResolutionFailure> {
    if hostname.len() > MAX_HOSTNAME_LEN {
        return Err(ResolutionFailure::InvalidHostname(format!(
            "{} characters exceeds {}",
            hostname.len(),
            MAX_HOSTNAME_LEN
        )));
    }

    if let Some(bad) = hostname
        .chars()
        .find(|c| c.is_whitespace() || c.is_control() || *c == '/')
    {
        return Err(ResolutionFailure::InvalidHostname(format!(
            "'{}' contains {:?}",
            hostname, bad
        )));
    }

    Ok(())
}

fn classify_io_error(e: io::Error) -> ResolutionFailure {
    if e.kind() == io::ErrorKind::InvalidInput {
        return ResolutionFailure::InvalidHostname(e.to_string());
    }

    // getaddrinfo reports unknown names through the message only.
    let message = e.to_string();
    if UNKNOWN_NAME_MESSAGES.iter().any(|m| message.contains(m)) {
        ResolutionFailure::NotFound
    } else {
        ResolutionFailure::Lookup(message)
    }
}

/// First address of the wanted family, in resolver order.
pub fn select_address(
    addrs: impl IntoIterator<Item = IpAddr>,
    family: AddressFamily,
) -> Option<IpAddr> {
    addrs.into_iter().find(|addr| match family {
        AddressFamily::Ipv4 => addr.is_ipv4(),
        AddressFamily::Ipv6 => addr.is_ipv6(),
        AddressFamily::Any => true,
    })
}
