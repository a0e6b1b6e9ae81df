use anyhow::{Context, Result};
use clap::Parser;
use std::fs;
use std::sync::Arc;
use std::time::Duration;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader};
use tokio::sync::broadcast::error::RecvError;

use unerg_search::config::RemoteConfig;
use unerg_search::{
    Config, FuzzyMode, LocalBackend, RemoteBackend, SearchBackend, SearchController, SearchIndex,
    SearchItem, SearchOptions,
};

mod cli;
use cli::{display, Cli, Commands};

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("❌ {:#}", e);
        std::process::exit(1);
    }
}

/// Logs go to stderr; `RUST_LOG` wins over `--verbose`.
fn init_tracing(verbose: bool) {
    let default = if verbose { "unerg_search=debug" } else { "warn" };
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn run(cli: Cli) -> Result<()> {
    let config = Config::load();

    match cli.command {
        Commands::Search {
            items,
            query,
            limit,
            fields,
            boosts,
            fuzzy,
            no_fuzzy,
            no_prefix,
            explain,
            json,
        } => {
            let mut options = config.search.clone();
            if let Some(limit) = limit {
                options = options.with_limit(limit);
            }
            if !fields.is_empty() {
                options = options.with_fields(fields);
            }
            for (field, weight) in boosts {
                options = options.with_boost(field, weight);
            }
            if no_fuzzy {
                options = options.with_fuzzy(FuzzyMode::Disabled);
            } else if let Some(threshold) = fuzzy {
                options = options.with_fuzzy(threshold);
            }
            if no_prefix {
                options = options.with_prefix(false);
            }

            let index = load_index(&items)?;
            run_search(&index, &query, &options, explain, json)
        }
        Commands::Remote {
            query,
            base_url,
            json,
        } => {
            let remote = remote_config(&config, base_url);
            runtime()?.block_on(run_remote(&remote, &query, json))
        }
        Commands::Live {
            items,
            base_url,
            debounce_ms,
        } => {
            let backend: Arc<dyn SearchBackend> = match items {
                Some(path) => {
                    let index = load_index(&path)?;
                    Arc::new(
                        LocalBackend::new(index, config.search.clone())
                            .with_offload_threshold(config.controller.offload_threshold),
                    )
                }
                None => Arc::new(RemoteBackend::new(&remote_config(&config, base_url))?),
            };
            let debounce = debounce_ms
                .map(Duration::from_millis)
                .unwrap_or_else(|| config.controller.debounce());
            runtime()?.block_on(run_live(backend, &config, debounce))
        }
    }
}

fn runtime() -> Result<tokio::runtime::Runtime> {
    tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("failed to start async runtime")
}

fn remote_config(config: &Config, base_url: Option<String>) -> RemoteConfig {
    let mut remote = config.remote.clone();
    if let Some(url) = base_url {
        remote.base_url = url;
    }
    remote
}

/// Read a JSON array of items into an index.
fn load_index(path: &str) -> Result<SearchIndex> {
    let content =
        fs::read_to_string(path).with_context(|| format!("failed to read '{}'", path))?;
    let items: Vec<SearchItem> = serde_json::from_str(&content)
        .with_context(|| format!("'{}' is not a JSON array of items", path))?;
    tracing::debug!(path, items = items.len(), "loaded items");
    Ok(SearchIndex::from_items(items))
}

fn run_search(
    index: &SearchIndex,
    query: &str,
    options: &SearchOptions,
    explain: bool,
    json: bool,
) -> Result<()> {
    let results = index.search_scored(query, options);

    if json {
        let out: Vec<serde_json::Value> = results
            .iter()
            .map(|scored| -> Result<serde_json::Value, serde_json::Error> {
                let mut value = serde_json::to_value(scored.item)?;
                if explain {
                    if let Some(object) = value.as_object_mut() {
                        object.insert("score".to_string(), serde_json::json!(scored.score));
                    }
                }
                Ok(value)
            })
            .collect::<Result<_, _>>()?;
        println!("{}", serde_json::to_string_pretty(&out)?);
    } else {
        display::print_scored(query, &results, explain);
    }
    Ok(())
}

async fn run_remote(remote: &RemoteConfig, query: &str, json: bool) -> Result<()> {
    if query.trim().is_empty() {
        anyhow::bail!("query is empty");
    }
    let backend = RemoteBackend::new(remote)?;
    tracing::debug!(endpoint = backend.endpoint(), "querying remote");

    let items = backend
        .fetch(query)
        .await
        .map_err(|e| anyhow::anyhow!("{} ({})", e.user_message(), e))?;

    if json {
        println!("{}", serde_json::to_string_pretty(&items)?);
    } else {
        display::print_items(query, &items);
    }
    Ok(())
}

/// How a live session's input ended.
#[derive(Debug, PartialEq, Eq)]
enum LiveExit {
    /// `:quit`: leave now, dropping whatever is pending.
    Quit,
    /// Input closed: the last search still gets to finish.
    EndOfInput,
}

/// Each line replaces the input box; prints every transition as it happens.
async fn run_live(
    backend: Arc<dyn SearchBackend>,
    config: &Config,
    debounce: Duration,
) -> Result<()> {
    let mut controller = SearchController::from_config(backend, config).with_debounce(debounce);
    let mut transitions = controller.transitions();

    let printer = tokio::spawn(async move {
        loop {
            match transitions.recv().await {
                Ok(snapshot) => display::print_snapshot(&snapshot),
                Err(RecvError::Lagged(skipped)) => {
                    tracing::warn!(skipped, "display fell behind");
                }
                Err(RecvError::Closed) => break,
            }
        }
    });

    let stdin = BufReader::new(tokio::io::stdin());
    if feed_lines(&mut controller, stdin).await? == LiveExit::EndOfInput {
        wait_for_pending(&controller).await;
    }
    drop(controller);
    printer.await.context("printer task failed")?;
    Ok(())
}

/// Drive `controller` from `reader`, one line per input change.
async fn feed_lines<R>(controller: &mut SearchController, reader: R) -> Result<LiveExit>
where
    R: AsyncBufRead + Unpin,
{
    let mut lines = reader.lines();
    while let Some(line) = lines.next_line().await.context("failed to read stdin")? {
        match line.trim() {
            ":quit" | ":q" => return Ok(LiveExit::Quit),
            ":clear" => controller.clear(),
            ":retry" => {
                if !controller.retry() {
                    eprintln!("nothing to retry");
                }
            }
            _ => controller.input(line.as_str()),
        }
    }
    Ok(LiveExit::EndOfInput)
}

/// Wait until the pending search, if any, has resolved.
async fn wait_for_pending(controller: &SearchController) {
    let mut states = controller.subscribe();
    while controller.is_pending() {
        let snapshot = states.borrow_and_update().clone();
        if snapshot.is_resolved() || snapshot.is_idle() {
            break;
        }
        if states.changed().await.is_err() {
            break;
        }
    }
}
