//! Files embedded into the binary.

/// Default configuration, always loaded as the lowest priority layer.
pub const CONFIG_TOML: &str = include_str!("../assets/config.toml");

/// Catalog served when no `catalog.path` is configured.
pub const CATALOG_TOML: &str = include_str!("../assets/catalog.toml");

pub mod templates {
    pub const CONTACT_NOTIFICATION: &str = include_str!("../templates/contact_notification.html");
}
