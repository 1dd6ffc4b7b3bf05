use nodeip_domain::{
    AddressFamily, AuthMethod, CliOverrides, Config, ConfigError, DirectoryKind,
};

#[test]
fn test_config_default_values() {
    let config = Config::default();

    assert_eq!(config.directory.kind, DirectoryKind::XmlRpc);
    assert_eq!(config.directory.url, "https://www.planet-lab.org/PLCAPI/");
    assert_eq!(config.directory.method, "GetNodes");
    assert_eq!(config.directory.request_timeout, 30);
    assert_eq!(config.directory.hostname_field, "hostname");
    assert_eq!(config.directory.auth.method, AuthMethod::Anonymous);
    assert_eq!(config.directory.auth.role, "user");
    assert!(config.directory.auth.username.is_none());
    assert!(config.directory.filter.is_empty());
    assert!(config.directory.nodes.is_empty());
    assert_eq!(config.resolver.timeout_ms, 5000);
    assert_eq!(config.resolver.address_family, AddressFamily::Ipv4);
    assert_eq!(config.logging.level, "warn");
    assert!(!config.logging.json);
    assert!(config.validate().is_ok());
}

#[test]
fn test_config_empty_toml_uses_defaults() {
    let config = Config::from_toml_str("").unwrap();

    assert_eq!(config.directory.method, "GetNodes");
    assert_eq!(config.resolver.timeout_ms, 5000);
}

#[test]
fn test_config_deserialization_with_all_fields() {
    let toml_str = r#"
        [directory]
        kind = "xmlrpc"
        url = "https://plc.example.org/PLCAPI/"
        method = "GetNodes"
        request_timeout = 10
        hostname_field = "hostname"

        [directory.auth]
        method = "password"
        role = "pi"
        username = "alice@example.org"
        password = "secret"

        [directory.filter]
        boot_state = "boot"

        [resolver]
        timeout_ms = 1500
        address_family = "any"

        [logging]
        level = "debug"
        json = true
    "#;

    let config = Config::from_toml_str(toml_str).unwrap();

    assert_eq!(config.directory.url, "https://plc.example.org/PLCAPI/");
    assert_eq!(config.directory.request_timeout, 10);
    assert_eq!(config.directory.auth.method, AuthMethod::Password);
    assert_eq!(config.directory.auth.role, "pi");
    assert_eq!(
        config.directory.auth.username.as_deref(),
        Some("alice@example.org")
    );
    assert_eq!(
        config.directory.filter.get("boot_state").map(String::as_str),
        Some("boot")
    );
    assert_eq!(config.resolver.timeout_ms, 1500);
    assert_eq!(config.resolver.address_family, AddressFamily::Any);
    assert_eq!(config.logging.level, "debug");
    assert!(config.logging.json);
    assert!(config.validate().is_ok());
}

#[test]
fn test_config_static_directory() {
    let toml_str = r#"
        [directory]
        kind = "static"
        url = ""
        nodes = ["node-a.example.org", "node-b.example.org"]
    "#;

    let config = Config::from_toml_str(toml_str).unwrap();

    assert_eq!(config.directory.kind, DirectoryKind::Static);
    assert_eq!(config.directory.nodes.len(), 2);
    assert!(config.validate().is_ok());
}

#[test]
fn test_config_invalid_toml_is_parse_error() {
    let result = Config::from_toml_str("[resolver]\ntimeout_ms = \"soon\"");

    assert!(matches!(result, Err(ConfigError::Parse(_))));
}

#[test]
fn test_config_validate_rejects_zero_timeout() {
    let mut config = Config::default();
    config.resolver.timeout_ms = 0;

    assert!(matches!(config.validate(), Err(ConfigError::Validation(_))));
}

#[test]
fn test_config_validate_rejects_empty_url() {
    let mut config = Config::default();
    config.directory.url = "  ".to_string();

    assert!(matches!(config.validate(), Err(ConfigError::Validation(_))));
}

#[test]
fn test_config_validate_password_needs_username() {
    let mut config = Config::default();
    config.directory.auth.method = AuthMethod::Password;

    assert!(matches!(config.validate(), Err(ConfigError::Validation(_))));

    config.directory.auth.username = Some("alice".to_string());
    assert!(config.validate().is_ok());
}

#[test]
fn test_config_load_missing_file() {
    let result = Config::load(
        Some("/nonexistent/nodeip/config.toml"),
        CliOverrides::default(),
    );

    assert!(matches!(result, Err(ConfigError::FileRead(_, _))));
}

#[test]
fn test_config_load_applies_cli_overrides() {
    let dir = std::env::temp_dir().join(format!("nodeip-config-{}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    let path = dir.join("config.toml");
    std::fs::write(&path, "[resolver]\ntimeout_ms = 900\n").unwrap();

    let overrides = CliOverrides {
        directory_url: Some("https://plc.example.net/API/".to_string()),
        timeout_ms: Some(1200),
        address_family: Some(AddressFamily::Ipv6),
        log_level: Some("trace".to_string()),
    };

    let config = Config::load(path.to_str(), overrides).unwrap();

    assert_eq!(config.directory.url, "https://plc.example.net/API/");
    assert_eq!(config.resolver.timeout_ms, 1200);
    assert_eq!(config.resolver.address_family, AddressFamily::Ipv6);
    assert_eq!(config.logging.level, "trace");

    std::fs::remove_dir_all(&dir).ok();
}

#[test]
fn test_address_family_from_str() {
    assert_eq!("ipv4".parse::<AddressFamily>().unwrap(), AddressFamily::Ipv4);
    assert_eq!("IPv6".parse::<AddressFamily>().unwrap(), AddressFamily::Ipv6);
    assert_eq!("any".parse::<AddressFamily>().unwrap(), AddressFamily::Any);
    assert!("ipx".parse::<AddressFamily>().is_err());
    assert_eq!(AddressFamily::Ipv6.to_string(), "ipv6");
}
