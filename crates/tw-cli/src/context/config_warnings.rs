use tw_config::TwConfig;

/// Emit warnings for likely mistyped env var keys that silently fell back to defaults.
pub fn warn_unconfigured(config: &TwConfig) {
    for warning in collect_unconfigured_warnings(config, std::env::vars()) {
        tracing::warn!("{warning}");
    }
}

fn collect_unconfigured_warnings<I>(config: &TwConfig, env: I) -> Vec<String>
where
    I: IntoIterator<Item = (String, String)>,
{
    let env_keys = env.into_iter().map(|(key, _)| key).collect::<Vec<_>>();

    let mut warnings = Vec::new();

    if !config.auth.is_configured() {
        if has_env_prefix(&env_keys, "TASKWISE_AUTH") {
            warnings.push(
                "Auth config appears default while TASKWISE_AUTH* env vars exist. Use double underscores (example: TASKWISE_AUTH__USER_ID)."
                    .to_string(),
            );
        } else {
            warnings.push(
                "No auth.user_id configured; task commands will be rejected as unauthenticated."
                    .to_string(),
            );
        }
    }

    if !config.openai.is_configured() && has_env_prefix(&env_keys, "TASKWISE_OPENAI") {
        warnings.push(
            "OpenAI config appears default while TASKWISE_OPENAI* env vars exist. Use double underscores (example: TASKWISE_OPENAI__API_KEY)."
                .to_string(),
        );
    }

    warnings
}

fn has_env_prefix(keys: &[String], prefix: &str) -> bool {
    keys.iter().any(|key| key.starts_with(prefix))
}
