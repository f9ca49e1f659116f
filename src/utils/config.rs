use std::env;

#[derive(Debug, Clone)]
pub struct Config {
    pub catalog_path: Option<String>,
    pub log_level: String,
    pub environment: String,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenv::dotenv().ok();
        let config = Config {
            catalog_path: env::var("CATALOG_PATH").ok(),
            log_level: env::var("LOG_LEVEL")
                .unwrap_or("info".to_string())
                .to_string(),
            environment: env::var("APP_ENV")
                .unwrap_or("development".to_string())
                .to_string(),
        };

        tracing::info!(
            "Config: successfully loaded for {} environment",
            config.environment
        );
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), anyhow::Error> {
        if let Some(path) = &self.catalog_path {
            if path.trim().is_empty() {
                return Err(anyhow::anyhow!("CATALOG_PATH is set but empty"));
            }

            if !path.ends_with(".json") {
                return Err(anyhow::anyhow!("CATALOG_PATH must point to a .json file"));
            }
        }

        Ok(())
    }

    /// Default tracing filter directive: `--verbose` wins, otherwise the
    /// configured `LOG_LEVEL` applies.
    pub fn filter_directive(&self, verbose: bool) -> &str {
        if verbose {
            "debug"
        } else {
            &self.log_level
        }
    }

    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }
}
