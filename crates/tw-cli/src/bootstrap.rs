use tw_config::TwConfig;

/// Load `.env` from the working directory, then the layered config.
pub fn load_config() -> anyhow::Result<TwConfig> {
    TwConfig::load_with_dotenv().map_err(anyhow::Error::from)
}
