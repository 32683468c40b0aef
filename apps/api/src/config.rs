use std::collections::HashMap;
use std::fmt;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

const DEFAULT_DOTENV_PATH: &str = ".env";
const DEFAULT_DB_PATH: &str = "chat_history.db";
const DEFAULT_RESUME_PATH: &str = "resume.txt";
const DEFAULT_PORT: u16 = 8000;

/// Application configuration, built once at startup and shared through `AppState`.
///
/// Values come from the process environment, overridden by the dotenv file at
/// `DOTENV_PATH` (default `.env`). The file wins so that a stale or empty
/// exported variable cannot shadow the key a developer just wrote into `.env`.
#[derive(Clone)]
pub struct Config {
    pub dotenv_path: PathBuf,
    /// `None` when the key is absent or empty after cleanup.
    pub openrouter_api_key: Option<String>,
    pub database_path: PathBuf,
    pub resume_path: PathBuf,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let dotenv_path = std::env::var("DOTENV_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_DOTENV_PATH));
        let file_vars = read_dotenv(&dotenv_path)?;

        Self::from_sources(dotenv_path, &file_vars, |key| std::env::var(key).ok())
    }

    /// Builds a config from parsed dotenv entries layered over an environment lookup.
    pub fn from_sources(
        dotenv_path: PathBuf,
        file_vars: &HashMap<String, String>,
        env: impl Fn(&str) -> Option<String>,
    ) -> Result<Self> {
        let lookup = |key: &str| file_vars.get(key).cloned().or_else(|| env(key));

        let port = lookup("PORT")
            .map(|p| p.trim().parse::<u16>())
            .transpose()
            .context("PORT must be a valid port number")?
            .unwrap_or(DEFAULT_PORT);

        Ok(Config {
            openrouter_api_key: lookup("OPENROUTER_API_KEY")
                .map(|raw| clean_secret(&raw))
                .filter(|key| !key.is_empty()),
            database_path: lookup("DB_PATH")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_DB_PATH)),
            resume_path: lookup("RESUME_PATH")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_RESUME_PATH)),
            port,
            rust_log: lookup("RUST_LOG").unwrap_or_else(|| "info".to_string()),
            dotenv_path,
        })
    }

    /// Loopback only; the server is a local development backend.
    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::from(([127, 0, 0, 1], self.port))
    }

    pub fn dotenv_exists(&self) -> bool {
        self.dotenv_path.is_file()
    }

    pub fn api_key_len(&self) -> usize {
        self.openrouter_api_key
            .as_deref()
            .map(|key| key.chars().count())
            .unwrap_or(0)
    }
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("dotenv_path", &self.dotenv_path)
            .field(
                "openrouter_api_key",
                &self.openrouter_api_key.as_ref().map(|_| "<redacted>"),
            )
            .field("database_path", &self.database_path)
            .field("resume_path", &self.resume_path)
            .field("port", &self.port)
            .field("rust_log", &self.rust_log)
            .finish()
    }
}

/// Parses a dotenv file without touching the process environment.
/// A missing file yields no entries.
fn read_dotenv(path: &Path) -> Result<HashMap<String, String>> {
    if !path.is_file() {
        return Ok(HashMap::new());
    }

    dotenvy::from_path_iter(path)
        .with_context(|| format!("Failed to open dotenv file {}", path.display()))?
        .map(|entry| entry.with_context(|| format!("Malformed entry in {}", path.display())))
        .collect()
}

/// Strips whitespace and surrounding quote characters pasted along with a key.
fn clean_secret(raw: &str) -> String {
    raw.trim()
        .trim_matches('"')
        .trim_matches('\'')
        .to_string()
}
