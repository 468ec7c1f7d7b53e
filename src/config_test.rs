use std::collections::HashMap;

use super::*;

fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
        .collect();
    move |key| map.get(key).cloned()
}

#[test]
fn empty_environment_uses_defaults() {
    let config = ServerConfig::from_lookup(lookup_from(&[]));
    assert_eq!(config, ServerConfig::default());
    assert_eq!(config.addr().to_string(), "0.0.0.0:3000");
}

#[test]
fn host_and_port_are_read() {
    let config = ServerConfig::from_lookup(lookup_from(&[("HOST", "127.0.0.1"), ("PORT", "8080")]));
    assert_eq!(config.addr().to_string(), "127.0.0.1:8080");
}

#[test]
fn values_are_trimmed() {
    let config = ServerConfig::from_lookup(lookup_from(&[("PORT", " 4000 ")]));
    assert_eq!(config.port, 4000);
}

#[test]
fn invalid_values_fall_back_to_defaults() {
    let config = ServerConfig::from_lookup(lookup_from(&[("HOST", "not-an-ip"), ("PORT", "99999")]));
    assert_eq!(config.host, DEFAULT_HOST);
    assert_eq!(config.port, DEFAULT_PORT);
}

#[test]
fn ipv6_host_is_accepted() {
    let config = ServerConfig::from_lookup(lookup_from(&[("HOST", "::1")]));
    assert_eq!(config.addr().to_string(), "[::1]:3000");
}
