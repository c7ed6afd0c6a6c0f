use clap::Parser;
use sitemap_proxy::{config, logging, server};

/// Republishes an upstream sitemap with URLs removed, added and rewritten.
#[derive(Parser)]
#[command(name = "sitemap-proxy")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Bind address, overrides LISTEN
    #[arg(long)]
    listen: Option<String>,

    /// Resolve the sitemap settings once, report them and exit
    #[arg(long)]
    check_config: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    let mut config = config::load_from_env()?;
    if let Some(listen) = cli.listen {
        config.listen_addr = listen;
        config.validate()?;
    }

    logging::init(&config.log_level, &config.log_format);
    config.print_summary();

    if cli.check_config {
        return server::check_settings().await;
    }

    server::run(config).await
}
