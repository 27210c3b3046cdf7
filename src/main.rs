use std::time::Duration;

use anyhow::{Context, Result};
use article_pager::{
    Article, ArticlePagingSource, LoadParams, Page, Pager, PagingConfig, SourceConfig,
    PagingSource, PagingState,
};
use clap::{Parser, Subcommand};
use tokio_util::sync::CancellationToken;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "article-pager", about = "Page through generated articles")]
struct Cli {
    /// Override the simulated fetch delay in milliseconds
    /// (default: ARTICLE_PAGER_LOAD_DELAY_MS or 3000).
    #[arg(long, global = true)]
    delay_ms: Option<u64>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Load a single page.
    Load {
        /// Key to load from; omitted loads the initial page.
        #[arg(long)]
        key: Option<i64>,
        /// Number of articles to request.
        #[arg(long, default_value_t = 10)]
        load_size: usize,
    },
    /// Refresh, then append pages one after another.
    Browse {
        /// Total number of pages to show, including the refresh.
        #[arg(long, default_value_t = 3)]
        pages: usize,
        /// Articles per appended page.
        #[arg(long, default_value_t = 10)]
        page_size: usize,
    },
    /// Compute the refresh key for an anchored article.
    RefreshKey {
        /// Id of the article the consumer is viewing.
        #[arg(long)]
        anchor_id: i64,
        /// Page size of the consumer window.
        #[arg(long, default_value_t = 10)]
        page_size: usize,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let mut config = SourceConfig::from_env();
    if let Some(ms) = cli.delay_ms {
        config = config.with_load_delay(Duration::from_millis(ms));
    }
    let source = ArticlePagingSource::new(config);
    info!(
        delay_ms = source.config().load_delay.as_millis() as u64,
        origin = %source.config().origin,
        "article source ready"
    );

    let cancel = CancellationToken::new();
    spawn_ctrl_c(cancel.clone());

    match cli.command {
        Commands::Load { key, load_size } => run_load(&source, key, load_size, &cancel).await?,
        Commands::Browse { pages, page_size } => {
            run_browse(source, pages, page_size, &cancel).await?
        }
        Commands::RefreshKey {
            anchor_id,
            page_size,
        } => run_refresh_key(&source, anchor_id, page_size)?,
    }

    Ok(())
}

fn spawn_ctrl_c(cancel: CancellationToken) {
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            warn!("interrupt received, cancelling in-flight load");
            cancel.cancel();
        }
    });
}

async fn run_load(
    source: &ArticlePagingSource,
    key: Option<i64>,
    load_size: usize,
    cancel: &CancellationToken,
) -> Result<()> {
    let page = source
        .load(LoadParams::refresh(key, load_size), cancel)
        .await
        .with_context(|| format!("failed to load page at key {:?}", key))?;
    print_page(&page);
    Ok(())
}

async fn run_browse(
    source: ArticlePagingSource,
    pages: usize,
    page_size: usize,
    cancel: &CancellationToken,
) -> Result<()> {
    let config = PagingConfig::new(page_size).context("invalid page size")?;
    let mut pager = Pager::new(source, config);

    let loaded = pager.refresh(cancel).await.context("initial load failed")?;
    info!(loaded, "initial page loaded");
    print_page(&pager.pages()[0]);

    for index in 1..pages {
        match pager
            .append(cancel)
            .await
            .with_context(|| format!("append {} failed", index))?
        {
            Some(_) => {
                if let Some(page) = pager.pages().last() {
                    print_page(page);
                }
            }
            None => break,
        }
    }

    Ok(())
}

fn run_refresh_key(source: &ArticlePagingSource, anchor_id: i64, page_size: usize) -> Result<()> {
    let article = source
        .article(anchor_id)
        .with_context(|| format!("cannot generate article {}", anchor_id))?;
    let config = PagingConfig::new(page_size).context("invalid page size")?;
    let state = PagingState::new(vec![Page::new(vec![article], None, None)], Some(0), config);

    match source.refresh_key(&state) {
        Some(key) => println!("{}", key),
        None => println!("none"),
    }
    Ok(())
}

fn print_page(page: &Page<Article>) {
    println!(
        "# prev={} next={}",
        page.prev_key.map_or_else(|| "-".to_string(), |k| k.to_string()),
        page.next_key.map_or_else(|| "-".to_string(), |k| k.to_string()),
    );
    for article in &page.data {
        println!(
            "{}\t{}\t{}\t{}",
            article.id,
            article.created.format("%Y-%m-%d %H:%M"),
            article.title,
            article.description
        );
    }
}
