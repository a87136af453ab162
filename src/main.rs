mod cli;

use highlights_hub::{client::HighlightsClient, config, server};

use anyhow::Result;
use chrono::Utc;
use clap::Parser;
use cli::{Cli, Commands};
use highlights_common::{SearchParams, VideoItem};
use highlights_curation::{format_relative_time, result_title};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // RUST_LOG wins; otherwise pick defaults from the verbose flag
    let env_filter = std::env::var("RUST_LOG").unwrap_or_else(|_| {
        if cli.verbose {
            "highlights_hub=trace,highlights_curation=trace,highlights_playback=trace,tower_http=debug"
                .to_string()
        } else {
            "highlights_hub=debug,highlights_curation=info,highlights_playback=info,tower_http=info"
                .to_string()
        }
    });

    tracing_subscriber::fmt()
        .with_env_filter(&env_filter)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Serve { host, port } => {
            let rt = tokio::runtime::Runtime::new()?;
            rt.block_on(serve(host, port, cli.config.as_deref()))
        }
        Commands::Search {
            league,
            query,
            json,
            server,
        } => {
            let rt = tokio::runtime::Runtime::new()?;
            rt.block_on(search(
                SearchParams::new(league, query),
                json,
                server,
                cli.config.as_deref(),
            ))
        }
        Commands::Validate {
            config: config_path,
        } => {
            let path = config_path.or(cli.config);
            validate_config(path.as_deref())
        }
        Commands::Version => {
            println!("highlights-hub {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
    }
}

async fn serve(
    host: Option<String>,
    port: Option<u16>,
    config_path: Option<&std::path::Path>,
) -> Result<()> {
    let mut config = config::load_config_or_default(config_path)?;

    if let Some(host) = host {
        config.server.host = host;
    }
    if let Some(port) = port {
        config.server.port = port;
    }

    // Fail before binding anything
    config.require_api_key()?;

    tracing::info!("Starting highlights-hub");
    tracing::info!(
        "Server will listen on {}:{}",
        config.server.host,
        config.server.port
    );

    server::start_server(config).await
}

async fn search(
    params: SearchParams,
    json: bool,
    server_url: Option<String>,
    config_path: Option<&std::path::Path>,
) -> Result<()> {
    let videos = match server_url {
        Some(url) => HighlightsClient::new(url).search(&params).await?,
        None => {
            let config = config::load_config_or_default(config_path)?;
            let ctx = server::AppContext::from_config(config)?;
            ctx.search.search(&params).await?
        }
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&videos)?);
    } else {
        print_videos(&params, &videos);
    }

    Ok(())
}

fn print_videos(params: &SearchParams, videos: &[VideoItem]) {
    println!("{}", result_title(params));
    if videos.is_empty() {
        println!("\nNo highlights found. Try a different team, player or league.");
        return;
    }

    let now = Utc::now();
    for (i, video) in videos.iter().enumerate() {
        println!("\n{:>2}. {}", i + 1, video.title);
        println!(
            "    {} · {}",
            video.channel_title,
            format_relative_time(&video.published_at, now)
        );
        println!("    https://www.youtube.com/watch?v={}", video.id);
    }
}

fn validate_config(path: Option<&std::path::Path>) -> Result<()> {
    match path {
        Some(p) => {
            println!("Validating config: {:?}", p);
            let config = config::load_config(p)?;
            println!("✓ Configuration is valid");
            println!("  Server: {}:{}", config.server.host, config.server.port);
            println!("  Provider: {}", config.provider.base_url);
            println!(
                "  API key ({}): {}",
                config.provider.api_key_env,
                if config.provider.api_key.is_some() {
                    "set"
                } else {
                    "NOT SET"
                }
            );
            println!(
                "  Filter: {} ({} keywords, min {} matches)",
                if config.curation.filter_enabled {
                    "enabled"
                } else {
                    "disabled"
                },
                config.curation.keywords.len(),
                config.curation.min_filtered_results
            );
            let playback = config.playback_config();
            println!(
                "  Playback: settle {:?}, scroll debounce {:?}",
                playback.settle_delay, playback.scroll_debounce
            );
        }
        None => {
            println!("No config file specified, using defaults");
            let config = config::Config::default();
            println!("Default config:");
            println!("  Server: {}:{}", config.server.host, config.server.port);
            println!("  Provider: {}", config.provider.base_url);
        }
    }

    Ok(())
}
