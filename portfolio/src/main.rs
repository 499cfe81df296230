use anyhow::Context;
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;
use portfolio::{
    commands::{catalog::CatalogCommand, email::EmailCommand, serve::serve},
    email, environment,
};
use portfolio_config::Config;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    init_tracing();

    match cli.command {
        Command::Serve => serve(load_config()?).await?,
        Command::Email { command } => command.invoke(load_config()?).await?,
        Command::Catalog { command } => command.invoke(load_config()?).await?,
        Command::CheckConfig { verbose } => {
            let config = load_config()?;
            let catalog = portfolio_config::load_catalog(config.catalog.path.as_deref())?;
            let email = email::connect(&config.email)?;
            environment::rest_server(&config, catalog, email)?;
            verbose.then(|| println!("{config:#?}"));
        }
        Command::Completion { shell } => clap_complete::generate(
            shell,
            &mut Cli::command(),
            env!("CARGO_BIN_NAME"),
            &mut std::io::stdout(),
        ),
    }

    Ok(())
}

fn load_config() -> anyhow::Result<Config> {
    portfolio_config::load().context("Failed to load config")
}

#[derive(Debug, Parser)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Start the REST API server of the portfolio backend
    #[command(aliases(["run", "start", "r", "s"]))]
    Serve,
    /// Test email deliverability
    #[command(aliases(["e"]))]
    Email {
        #[command(subcommand)]
        command: EmailCommand,
    },
    /// Inspect the static site content
    #[command(aliases(["c"]))]
    Catalog {
        #[command(subcommand)]
        command: CatalogCommand,
    },
    /// Validate configuration and catalog
    CheckConfig {
        /// Print a debug representation of the config
        #[arg(short, long)]
        verbose: bool,
    },
    /// Generate shell completions
    Completion {
        /// The shell to generate completions for
        #[clap(value_enum)]
        shell: Shell,
    },
}

fn init_tracing() {
    let fmt_layer = tracing_subscriber::fmt::layer().with_writer(std::io::stderr);

    let fmt_layer = if std::env::var_os("RUST_LOG_PRETTY").is_some_and(|x| x == "1") {
        fmt_layer.pretty().boxed()
    } else {
        fmt_layer.boxed()
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(fmt_layer.with_filter(filter))
        .init();
}
