use figment::Jail;
use vola_config::{ConfigError, StoreBackend, VolaConfig};

#[test]
fn nested_env_keys_fill_sections() {
    Jail::expect_with(|jail| {
        jail.set_env("VOLA_API__BASE_URL", "http://127.0.0.1:4000");
        jail.set_env("VOLA_SESSION__TTL_DAYS", "1");
        jail.set_env("VOLA_SESSION__STORE", "memory");

        let config = VolaConfig::load().expect("config loads");
        assert_eq!(config.require_base_url().unwrap(), "http://127.0.0.1:4000");
        assert_eq!(config.session.ttl_days, 1);
        assert_eq!(config.session.store, StoreBackend::Memory);
        Ok(())
    });
}

#[test]
fn single_underscore_keys_are_ignored() {
    Jail::expect_with(|jail| {
        jail.set_env("VOLA_API_BASE_URL", "https://typo.example");

        let config = VolaConfig::load().expect("config loads");
        assert!(!config.api.is_configured());
        Ok(())
    });
}

#[test]
fn malformed_env_value_is_a_load_error() {
    Jail::expect_with(|jail| {
        jail.set_env("VOLA_SESSION__TTL_DAYS", "a week");

        let err = VolaConfig::load().unwrap_err();
        assert!(matches!(err, ConfigError::Load(_)), "got {err:?}");
        Ok(())
    });
}

#[test]
fn zero_ttl_from_env_names_the_field() {
    Jail::expect_with(|jail| {
        jail.set_env("VOLA_SESSION__TTL_DAYS", "0");

        match VolaConfig::load() {
            Err(ConfigError::InvalidValue { field, .. }) => assert_eq!(field, "session.ttl_days"),
            other => panic!("expected invalid value, got {other:?}"),
        }
        Ok(())
    });
}

#[test]
fn missing_base_url_tells_how_to_set_it() {
    let err = VolaConfig::default().require_base_url().unwrap_err();
    assert!(matches!(err, ConfigError::MissingBaseUrl));
    assert!(err.to_string().contains("VOLA_API__BASE_URL"));
}
