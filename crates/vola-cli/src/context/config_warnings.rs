use vola_config::VolaConfig;

/// Emit warnings for likely mistyped env var keys that silently fell back to defaults.
pub fn warn_unconfigured(config: &VolaConfig) {
    for warning in collect_unconfigured_warnings(config, std::env::vars()) {
        tracing::warn!("{warning}");
    }
}

fn collect_unconfigured_warnings<I>(config: &VolaConfig, env: I) -> Vec<String>
where
    I: IntoIterator<Item = (String, String)>,
{
    let env_keys = env.into_iter().map(|(key, _)| key).collect::<Vec<_>>();

    let mut warnings = Vec::new();

    if let Err(missing) = config.require_base_url() {
        if has_single_underscore_key(&env_keys, "VOLA_API") {
            warnings.push(
                "API base URL appears unset while VOLA_API* env vars exist. Use double underscores (example: VOLA_API__BASE_URL)."
                    .to_string(),
            );
        } else {
            warnings.push(missing.to_string());
        }
    }

    if has_single_underscore_key(&env_keys, "VOLA_SESSION") {
        warnings.push(
            "VOLA_SESSION* env vars use a single underscore and are ignored. Use double underscores (example: VOLA_SESSION__TTL_DAYS)."
                .to_string(),
        );
    }

    if has_single_underscore_key(&env_keys, "VOLA_STATS") {
        warnings.push(
            "VOLA_STATS* env vars use a single underscore and are ignored. Use double underscores (example: VOLA_STATS__GENERAL_PATH)."
                .to_string(),
        );
    }

    warnings
}

fn has_single_underscore_key(keys: &[String], prefix: &str) -> bool {
    let nested = format!("{prefix}__");
    keys.iter()
        .any(|key| key.starts_with(prefix) && !key.starts_with(&nested))
}
