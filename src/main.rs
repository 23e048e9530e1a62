use anyhow::Result;
use clap::Parser;
use mirror_dash::config::Config;
use mirror_dash::render::{
    INTEGRITY_REGION, TIMELINE_REGION, TRAIT_CLOUD_REGION, YIELD_REGION,
};
use mirror_dash::{DashboardView, DataClient, load_data};
use tracing::info;

#[derive(Parser, Debug)]
#[command(name = "mirror-dash", version, about = "Render the mirror dashboard snapshot to stdout")]
struct Cli {
    /// Snapshot endpoint URL (overrides config)
    #[arg(long)]
    url: Option<String>,
    /// Request deadline in milliseconds (overrides config)
    #[arg(long)]
    timeout_ms: Option<u64>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = Config::load()?;
    if let Some(url) = cli.url {
        config.system.data_url = url;
    }
    if let Some(timeout) = cli.timeout_ms {
        config.system.request_timeout_ms = timeout;
    }

    tracing_subscriber::fmt()
        .with_env_filter(config.runtime.log_level.clone())
        .with_ansi(false)
        .init();

    info!("Loading snapshot from {}", config.system.data_url);

    let client = DataClient::new(&config)?;
    let mut view = DashboardView::default();
    load_data(&client, &mut view).await?;

    print_regions(&view);
    Ok(())
}

fn print_regions(view: &DashboardView) {
    println!("{TIMELINE_REGION}:");
    for line in &view.timeline {
        println!("  {line}");
    }
    println!("{INTEGRITY_REGION}: {}", view.integrity);
    println!("{TRAIT_CLOUD_REGION}: {}", view.trait_cloud.join(" "));
    println!("{YIELD_REGION}: {}", view.vault_yield);
}
