//! newsgist - news article summarisation
//!
//! The application logic is contained in lib.rs, and this file is responsible
//! for parsing arguments and handling top-level errors.

use clap::{Parser, Subcommand};
use colored::Colorize;
use newsgist::scraper::Fetcher;
use newsgist::{logging, web, Config, Pipeline};

#[derive(Parser)]
#[command(name = "newsgist")]
#[command(author, version, about = "Web UI for news article summarisation", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the web UI
    Serve {
        /// Address to listen on (overrides the config file)
        #[arg(long)]
        bind: Option<String>,
    },
    /// Summarise a news article by URL
    Summarise {
        /// URL to summarise
        url: String,
        /// Show raw extracted text instead of summary
        #[arg(long)]
        raw: bool,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    logging::init();

    let cli = Cli::parse();
    let config = Config::load()?;

    match cli.command {
        Some(Commands::Summarise { url, raw }) => {
            println!("Fetching: {}", url);

            if raw {
                // Plain extraction needs no LLM settings.
                let fetcher = Fetcher::new(&config.fetch)?;
                let article = fetcher.fetch(&url).await?;
                println!("\n{}", article.text);
                println!(
                    "\n--- Extracted {} characters ---",
                    article.text.chars().count()
                );
                return Ok(());
            }

            let pipeline = Pipeline::from_config(&config)?;
            match pipeline.run(&url).await {
                Ok(digest) => {
                    println!(
                        "Summarised {} characters with {}\n",
                        digest.article.text.chars().count(),
                        digest.summary.model
                    );
                    println!("{}", "📌 Summary:".bold());
                    println!("{}", digest.summary);
                }
                Err(e) => {
                    eprintln!("{} {}", "❌".red(), e.to_string().red());
                    std::process::exit(1);
                }
            }
        }
        Some(Commands::Serve { bind }) => serve(config, bind).await?,
        None => serve(config, None).await?,
    }

    Ok(())
}

async fn serve(config: Config, bind: Option<String>) -> anyhow::Result<()> {
    let addr = bind.unwrap_or_else(|| config.server.bind.clone());
    let pipeline = Pipeline::from_config(&config)?;
    let app = web::router(web::AppState::new(pipeline));

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!(%addr, model = %config.agent.model, "newsgist listening");
    axum::serve(listener, app).await?;
    Ok(())
}
