//! DNS module tests.

use super::*;
use hickory_resolver::config::Protocol;
use std::net::{IpAddr, SocketAddr};
use std::time::Duration;

fn quad9() -> ResolverEndpoint {
    ResolverEndpoint::new("Quad9", Ipv4Addr::new(9, 9, 9, 9))
}

#[test]
fn test_directed_config_targets_only_the_endpoint() {
    let config = directed_resolver_config(&quad9());
    let expected = SocketAddr::new(IpAddr::V4(Ipv4Addr::new(9, 9, 9, 9)), 53);

    assert!(!config.name_servers().is_empty());
    for ns in config.name_servers() {
        assert_eq!(ns.socket_addr, expected);
    }
    assert!(config.search().is_empty());
    assert!(config.domain().is_none());
}

#[test]
fn test_directed_config_has_udp_and_tcp() {
    let config = directed_resolver_config(&quad9());
    let protocols: Vec<Protocol> = config.name_servers().iter().map(|ns| ns.protocol).collect();
    assert!(protocols.contains(&Protocol::Udp));
    assert!(protocols.contains(&Protocol::Tcp));
}

#[test]
fn test_directed_opts_disable_retries_and_cache() {
    let opts = directed_resolver_opts(Duration::from_secs(2));
    assert_eq!(opts.timeout, Duration::from_secs(2));
    assert_eq!(opts.attempts, 1);
    assert_eq!(opts.cache_size, 0);
    assert!(!opts.use_hosts_file);
}

// Requires outbound DNS; run with `cargo test -- --ignored`.
#[tokio::test]
#[ignore]
async fn test_hickory_lookup_public_resolver() {
    let lookup = HickoryLookup::new(Duration::from_secs(5));
    let endpoint = ResolverEndpoint::new("Cloudflare", Ipv4Addr::new(1, 1, 1, 1));
    let addresses = lookup
        .lookup_ipv4(&endpoint, "one.one.one.one")
        .await
        .expect("lookup should succeed");
    assert!(addresses.contains(&Ipv4Addr::new(1, 1, 1, 1)));
}
