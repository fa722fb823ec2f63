use anyhow::{Context, Result};
use clap::Parser;
use std::env;

/// Centralized application configuration.
/// Combines environment variables and CLI arguments; upstream credentials and
/// resource identifiers are read once here and injected into the clients at
/// startup, never ad hoc from process-wide state.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub airtable_base_url: String,
    pub airtable_table: String,
    pub airtable_token: String,
    pub cloudinary_base_url: String,
    pub cloudinary_name: String,
    pub cloudinary_upload_preset: String,
    pub tmdb_base_url: String,
    pub tmdb_api_key: String,
    pub max_upload_bytes: usize,
}

/// Command-line + environment configuration.
#[derive(Parser, Debug)]
#[command(author, version, about = "Gateway API for the Liteflix movie app")]
pub struct Args {
    /// Host to bind to (overrides LITEFLIX_HOST)
    #[arg(long)]
    pub host: Option<String>,

    /// Port to bind to (overrides LITEFLIX_PORT)
    #[arg(long)]
    pub port: Option<u16>,

    /// Record-storage base URL (overrides AIRTABLE_BASE_URL)
    #[arg(long)]
    pub airtable_base_url: Option<String>,

    /// Image-host base URL (overrides CLOUDINARY_BASE_URL)
    #[arg(long)]
    pub cloudinary_base_url: Option<String>,

    /// Catalog base URL (overrides TMDB_BASE_URL)
    #[arg(long)]
    pub tmdb_base_url: Option<String>,

    /// Poster upload cap in megabytes (overrides LITEFLIX_MAX_UPLOAD_MB)
    #[arg(long)]
    pub max_upload_mb: Option<usize>,
}

impl AppConfig {
    /// Parse environment variables + CLI args into AppConfig.
    ///
    /// Bind address, base URLs, and the upload cap have working defaults;
    /// the service credentials and the Airtable table path are required.
    pub fn from_env_and_args() -> Result<Self> {
        // Parse CLI once
        let args = Args::parse();

        // --- Environment fallback ---
        let env_host = env::var("LITEFLIX_HOST").unwrap_or_else(|_| "0.0.0.0".into());
        let env_port = match env::var("LITEFLIX_PORT") {
            Ok(value) => value
                .parse::<u16>()
                .with_context(|| format!("parsing LITEFLIX_PORT value `{}`", value))?,
            Err(env::VarError::NotPresent) => 3000,
            Err(err) => return Err(err).context("reading LITEFLIX_PORT"),
        };
        let env_airtable_base =
            env::var("AIRTABLE_BASE_URL").unwrap_or_else(|_| "https://api.airtable.com/v0".into());
        let env_cloudinary_base = env::var("CLOUDINARY_BASE_URL")
            .unwrap_or_else(|_| "https://api.cloudinary.com/v1_1".into());
        let env_tmdb_base =
            env::var("TMDB_BASE_URL").unwrap_or_else(|_| "https://api.themoviedb.org/3".into());
        let env_max_upload_mb = match env::var("LITEFLIX_MAX_UPLOAD_MB") {
            Ok(value) => value
                .parse::<usize>()
                .with_context(|| format!("parsing LITEFLIX_MAX_UPLOAD_MB value `{}`", value))?,
            Err(env::VarError::NotPresent) => 10,
            Err(err) => return Err(err).context("reading LITEFLIX_MAX_UPLOAD_MB"),
        };

        let airtable_table = env::var("AIRTABLE_TABLE")
            .context("AIRTABLE_TABLE must be set to the `{app}/{table}` resource path")?;
        let airtable_token =
            env::var("AIRTABLE_API_KEY").context("AIRTABLE_API_KEY must be set")?;
        let cloudinary_name = env::var("CLOUDINARY_NAME").context("CLOUDINARY_NAME must be set")?;
        let cloudinary_upload_preset =
            env::var("CLOUDINARY_UPLOAD_PRESET").unwrap_or_else(|_| "default".into());
        let tmdb_api_key = env::var("TMDB_API_KEY").context("TMDB_API_KEY must be set")?;

        // --- Merge ---
        let max_upload_mb = args.max_upload_mb.unwrap_or(env_max_upload_mb);
        let cfg = Self {
            host: args.host.unwrap_or(env_host),
            port: args.port.unwrap_or(env_port),
            airtable_base_url: args.airtable_base_url.unwrap_or(env_airtable_base),
            airtable_table,
            airtable_token,
            cloudinary_base_url: args.cloudinary_base_url.unwrap_or(env_cloudinary_base),
            cloudinary_name,
            cloudinary_upload_preset,
            tmdb_base_url: args.tmdb_base_url.unwrap_or(env_tmdb_base),
            tmdb_api_key,
            max_upload_bytes: max_upload_mb * 1024 * 1024,
        };

        Ok(cfg)
    }

    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
