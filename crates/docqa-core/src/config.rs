//! Lightweight configuration loader.
//!
//! Uses Figment to merge `config.toml` + `config.<env>.toml` + `APP_*`
//! env vars. Callers pull typed values with dotted keys and supply their
//! own defaults, e.g. `config.get::<usize>("chunking.chunk_size")`.

use figment::{
    providers::{Env, Format, Toml},
    Figment,
};
use std::env;

/// Default passage target size in characters.
pub const DEFAULT_CHUNK_SIZE: usize = 500;
/// Default overlap between consecutive passages, in characters.
pub const DEFAULT_CHUNK_OVERLAP: usize = 100;
/// Default number of results returned per query.
pub const DEFAULT_TOP_K: usize = 3;
/// Default dimension of the offline hash embedder.
pub const DEFAULT_EMBEDDING_DIM: usize = 384;

pub struct Config {
    figment: Figment,
}

impl Config {
    pub fn load() -> anyhow::Result<Self> {
        let env_name = env::var("RUST_ENV").unwrap_or_else(|_| "dev".to_string());

        let mut figment = Figment::new().merge(Toml::file("config.toml"));
        match env_name.as_str() {
            "dev" | "development" => figment = figment.merge(Toml::file("config.dev.toml")),
            "prod" | "production" => figment = figment.merge(Toml::file("config.prod.toml")),
            "test" | "testing" => figment = figment.merge(Toml::file("config.test.toml")),
            _ => {}
        }
        figment = figment.merge(Env::prefixed("APP_"));

        Ok(Self { figment })
    }

    pub fn get<T>(&self, key: &str) -> anyhow::Result<T>
    where
        T: serde::de::DeserializeOwned,
    {
        self.figment
            .extract_inner(key)
            .map_err(|e| anyhow::anyhow!("Failed to get '{}': {}", key, e))
    }
}
