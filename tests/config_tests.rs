#![cfg(feature = "ssr")]

#[cfg(test)]
pub mod config_tests {
    use std::collections::HashMap;
    use std::net::SocketAddr;

    use login_dialog::common::ConfigError;
    use login_dialog::config::{AppConfig, DemoAccount};

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| vars.get(key).cloned()
    }

    #[test]
    fn test_app_config_defaults() {
        let config = AppConfig::from_lookup(lookup(&[])).unwrap();
        let fallback: SocketAddr = "127.0.0.1:3000".parse().unwrap();

        assert_eq!(config.bind_addr, None);
        assert_eq!(config.bind_addr_or(fallback), fallback);
        assert!(config.demo_account == DemoAccount::default());
        assert!(config.demo_account.matches("demo", "demo"));
    }

    #[test]
    fn test_app_config_bind_addr_override() {
        let config = AppConfig::from_lookup(lookup(&[("BIND_ADDR", " 0.0.0.0:8080 ")])).unwrap();
        let fallback: SocketAddr = "127.0.0.1:3000".parse().unwrap();

        assert_eq!(
            config.bind_addr_or(fallback),
            "0.0.0.0:8080".parse::<SocketAddr>().unwrap()
        );
    }

    #[test]
    fn test_app_config_blank_bind_addr_is_unset() {
        let config = AppConfig::from_lookup(lookup(&[("BIND_ADDR", "   ")])).unwrap();
        assert_eq!(config.bind_addr, None);
    }

    #[test]
    fn test_app_config_fails_on_invalid_bind_addr() {
        let err = AppConfig::from_lookup(lookup(&[("BIND_ADDR", "localhost")]))
            .err()
            .unwrap();

        assert!(matches!(err, ConfigError::InvalidBindAddr { ref value, .. } if value == "localhost"));
    }

    #[test]
    fn test_demo_account_override() {
        let account = DemoAccount::from_lookup(lookup(&[
            ("LOGIN_DEMO_USERNAME", "alice"),
            ("LOGIN_DEMO_PASSWORD", "secret1"),
        ]))
        .unwrap();

        assert!(account.matches("alice", "secret1"));
        assert!(!account.matches("demo", "demo"));
    }

    #[test]
    fn test_demo_account_keeps_password_whitespace() {
        let account = DemoAccount::from_lookup(lookup(&[
            ("LOGIN_DEMO_USERNAME", " alice "),
            ("LOGIN_DEMO_PASSWORD", "  secret  "),
        ]))
        .unwrap();

        assert_eq!(account.username, "alice");
        assert_eq!(account.password, "  secret  ");
        assert!(account.matches("alice", "  secret  "));
        assert!(!account.matches("alice", "secret"));
    }

    #[test]
    fn test_demo_account_blank_password_is_unset() {
        let err = DemoAccount::from_lookup(lookup(&[
            ("LOGIN_DEMO_USERNAME", "alice"),
            ("LOGIN_DEMO_PASSWORD", "   "),
        ]))
        .err()
        .unwrap();

        assert!(matches!(
            err,
            ConfigError::IncompleteDemoAccount("LOGIN_DEMO_PASSWORD")
        ));
    }

    #[test]
    fn test_demo_account_fails_on_missing_password() {
        let err = DemoAccount::from_lookup(lookup(&[("LOGIN_DEMO_USERNAME", "alice")]))
            .err()
            .unwrap();

        assert!(matches!(
            err,
            ConfigError::IncompleteDemoAccount("LOGIN_DEMO_PASSWORD")
        ));
    }

    #[test]
    fn test_demo_account_fails_on_missing_username() {
        let err = DemoAccount::from_lookup(lookup(&[("LOGIN_DEMO_PASSWORD", "secret1")]))
            .err()
            .unwrap();

        assert!(matches!(
            err,
            ConfigError::IncompleteDemoAccount("LOGIN_DEMO_USERNAME")
        ));
    }
}
