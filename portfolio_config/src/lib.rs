use std::{fmt, net::IpAddr, path::Path, path::PathBuf};

use anyhow::Context;
use config::{Environment, File, FileFormat};
use portfolio_models::{
    catalog::Catalog,
    email_address::{EmailAddress, EmailAddressWithName},
};
use serde::Deserialize;
use url::Url;

pub use duration::Duration;

mod duration;

/// Environment variable holding a colon separated list of additional config
/// files.
pub const CONFIG_PATH_ENV: &str = "PORTFOLIO_CONFIG";

/// Prefix of environment variables overriding single config keys, e.g.
/// `PORTFOLIO__CONTACT__EMAIL=me@example.com`.
pub const ENV_PREFIX: &str = "PORTFOLIO";

/// Load the config from the built-in defaults, the files listed in
/// [`CONFIG_PATH_ENV`] and environment variable overrides.
pub fn load() -> anyhow::Result<Config> {
    let paths = std::env::var_os(CONFIG_PATH_ENV)
        .map(|paths| std::env::split_paths(&paths).collect::<Vec<_>>())
        .unwrap_or_default();

    builder(&paths)?
        .add_source(
            Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("__")
                .separator("__")
                .list_separator(",")
                .with_list_parse_key("http.allowed_origins")
                .try_parsing(true),
        )
        .build()?
        .try_deserialize()
        .context("Failed to load config")
}

/// Load the config from the built-in defaults and the given files only.
pub fn load_from(paths: &[impl AsRef<Path>]) -> anyhow::Result<Config> {
    builder(paths)?
        .build()?
        .try_deserialize()
        .context("Failed to load config")
}

fn builder(
    paths: &[impl AsRef<Path>],
) -> anyhow::Result<config::ConfigBuilder<config::builder::DefaultState>> {
    let defaults = config::Config::builder().add_source(File::from_str(
        portfolio_assets::CONFIG_TOML,
        FileFormat::Toml,
    ));

    paths.iter().try_fold(defaults, |builder, path| {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file at {}", path.display()))?;
        let source = File::from_str(&content, FileFormat::Toml);
        anyhow::Ok(builder.add_source(source))
    })
}

/// Load the catalog from `path`, or the built-in catalog if no path is given.
pub fn load_catalog(path: Option<&Path>) -> anyhow::Result<Catalog> {
    let content = match path {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read catalog file at {}", path.display()))?,
        None => portfolio_assets::CATALOG_TOML.into(),
    };

    config::Config::builder()
        .add_source(File::from_str(&content, FileFormat::Toml))
        .build()?
        .try_deserialize()
        .context("Failed to load catalog")
}

#[derive(Debug, Deserialize)]
pub struct Config {
    pub http: HttpConfig,
    pub email: EmailConfig,
    pub contact: ContactConfig,
    pub health: HealthConfig,
    #[serde(default)]
    pub catalog: CatalogConfig,
}

#[derive(Debug, Deserialize)]
pub struct HttpConfig {
    pub host: IpAddr,
    pub port: u16,
    #[serde(default)]
    pub allowed_origins: Vec<String>,
}

#[derive(Debug, Deserialize)]
pub struct EmailConfig {
    pub from: EmailAddressWithName,
    pub timeout: Duration,
    pub transport: EmailTransportConfig,
}

#[derive(Clone, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum EmailTransportConfig {
    Smtp { url: String },
    File { dir: PathBuf },
    Disabled,
}

impl fmt::Debug for EmailTransportConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Smtp { url } => f
                .debug_struct("Smtp")
                .field("url", &redact_password(url))
                .finish(),
            Self::File { dir } => f.debug_struct("File").field("dir", dir).finish(),
            Self::Disabled => f.write_str("Disabled"),
        }
    }
}

fn redact_password(url: &str) -> String {
    match Url::parse(url) {
        Ok(mut url) if url.password().is_some() => {
            let _ = url.set_password(Some("***"));
            url.into()
        }
        Ok(url) => url.into(),
        Err(_) => "<invalid url>".into(),
    }
}

#[derive(Debug, Deserialize)]
pub struct ContactConfig {
    pub email: EmailAddress,
    pub subject_prefix: String,
}

#[derive(Debug, Deserialize)]
pub struct HealthConfig {
    pub cache_ttl: Duration,
}

#[derive(Debug, Default, Deserialize)]
pub struct CatalogConfig {
    pub path: Option<PathBuf>,
}
