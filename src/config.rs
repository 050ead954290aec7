use serde::Deserialize;

/// Application configuration loaded from environment variables
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// Server host address
    #[serde(default = "default_host")]
    pub host: String,

    /// Server port
    #[serde(default = "default_port")]
    pub port: u16,

    /// JSON array of movie titles, in matrix order
    #[serde(default = "default_titles_path")]
    pub titles_path: String,

    /// JSON square matrix of pairwise similarity scores
    #[serde(default = "default_similarity_path")]
    pub similarity_path: String,

    /// Number of recommendations returned when the request omits `k`
    #[serde(default = "default_k")]
    pub default_k: usize,

    /// Largest `k` accepted over HTTP
    #[serde(default = "default_max_k")]
    pub max_k: usize,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    8000
}

fn default_titles_path() -> String {
    "model/movie_titles.json".to_string()
}

fn default_similarity_path() -> String {
    "model/cosine_sim.json".to_string()
}

fn default_k() -> usize {
    5
}

fn default_max_k() -> usize {
    100
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            titles_path: default_titles_path(),
            similarity_path: default_similarity_path(),
            default_k: default_k(),
            max_k: default_max_k(),
        }
    }
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        let config = envy::from_env::<Config>()
            .map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))?;
        config.validate()?;
        Ok(config)
    }

    /// Address the server binds to
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    fn validate(&self) -> anyhow::Result<()> {
        if self.default_k > self.max_k {
            anyhow::bail!(
                "DEFAULT_K ({}) must not exceed MAX_K ({})",
                self.default_k,
                self.max_k
            );
        }
        Ok(())
    }
}
