use clap::Subcommand;
use portfolio_config::Config;

#[derive(Debug, Subcommand)]
pub enum CatalogCommand {
    /// Print the catalog served by the api as JSON
    Show,
}

impl CatalogCommand {
    pub async fn invoke(self, config: Config) -> anyhow::Result<()> {
        match self {
            CatalogCommand::Show => show(config),
        }
    }
}

fn show(config: Config) -> anyhow::Result<()> {
    let catalog = portfolio_config::load_catalog(config.catalog.path.as_deref())?;
    println!("{}", serde_json::to_string_pretty(&catalog)?);
    Ok(())
}
