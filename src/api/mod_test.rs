use super::Config;
use crate::paths::get_db_path;
use serial_test::serial;
use std::env;
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};
use std::path::PathBuf;

fn clear_env() {
    unsafe {
        env::remove_var("MENTORSHIP_HOST");
        env::remove_var("PORT");
        env::remove_var("MENTORSHIP_DB");
    }
}

#[test]
#[serial]
fn test_config_defaults() {
    clear_env();

    let config = Config::new();
    assert_eq!(config.host, IpAddr::V4(Ipv4Addr::UNSPECIFIED));
    assert_eq!(config.port, 3000);
    assert_eq!(config.db_path, get_db_path());
    assert!(!config.in_memory);
}

#[test]
#[serial]
fn test_config_new_respects_env_vars() {
    clear_env();
    unsafe {
        env::set_var("MENTORSHIP_HOST", "127.0.0.1");
        env::set_var("PORT", "8088");
        env::set_var("MENTORSHIP_DB", "/tmp/env-mentorship.db");
    }

    let config = Config::new();
    assert_eq!(config.host, IpAddr::V4(Ipv4Addr::LOCALHOST));
    assert_eq!(config.port, 8088);
    assert_eq!(config.db_path, PathBuf::from("/tmp/env-mentorship.db"));

    clear_env();
}

#[test]
#[serial]
fn test_config_invalid_port_falls_back_to_default() {
    clear_env();
    unsafe {
        env::set_var("PORT", "not-a-port");
    }

    let config = Config::new();
    assert_eq!(config.port, 3000);

    clear_env();
}

#[test]
#[serial]
fn test_config_precedence_cli_over_env() {
    // Precedence: CLI flag > env var > default
    clear_env();
    unsafe {
        env::set_var("PORT", "8088");
        env::set_var("MENTORSHIP_DB", "/tmp/env-precedence.db");
    }

    let config = Config::new()
        .with_port(9099)
        .with_db_path(PathBuf::from("/tmp/cli-precedence.db"))
        .with_in_memory(true);

    assert_eq!(config.port, 9099, "CLI flag should override env var");
    assert_eq!(config.db_path, PathBuf::from("/tmp/cli-precedence.db"));
    assert!(config.in_memory);

    clear_env();
}

#[test]
fn test_socket_addr_brackets_ipv6_host() {
    let config = Config::default()
        .with_host(IpAddr::V6(Ipv6Addr::LOCALHOST))
        .with_port(3000);

    let addr = config.socket_addr();
    assert!(addr.is_ipv6());
    assert_eq!(addr.to_string(), "[::1]:3000");
}

#[tokio::test]
async fn test_socket_addr_binds_ipv4_loopback() {
    let config = Config::default()
        .with_host(IpAddr::V4(Ipv4Addr::LOCALHOST))
        .with_port(0);

    let listener = tokio::net::TcpListener::bind(config.socket_addr())
        .await
        .unwrap();
    assert!(listener.local_addr().unwrap().ip().is_loopback());
}
