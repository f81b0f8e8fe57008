use chrono::Utc;
use clap::{Parser, Subcommand, ValueEnum};
use edu_search_core::{
    DirectorySearch, EntryKind, FuzzyMatcher, JsonFolderSource, SearchQuery, DEFAULT_PREFIX_BONUS,
    DEFAULT_THRESHOLD,
};
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[derive(Parser)]
#[command(name = "edu-search", version)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Bonus added to greedy coverage for prefix matches
    #[arg(long, global = true, default_value_t = DEFAULT_PREFIX_BONUS)]
    prefix_bonus: f64,

    /// Minimum greedy coverage for a fuzzy match to count
    #[arg(long, global = true, default_value_t = DEFAULT_THRESHOLD)]
    threshold: f64,
}

#[derive(Clone, Copy, ValueEnum)]
enum KindArg {
    University,
    Major,
}

impl From<KindArg> for EntryKind {
    fn from(value: KindArg) -> Self {
        match value {
            KindArg::University => EntryKind::University,
            KindArg::Major => EntryKind::Major,
        }
    }
}

#[derive(Subcommand)]
enum Command {
    /// Rank catalog entries against a query.
    Search {
        /// Folder that contains catalog JSON files recursively.
        #[arg(long, env = "EDU_SEARCH_CATALOG")]
        catalog: PathBuf,
        /// Search query; empty lists the head of the catalog.
        #[arg(long, default_value = "")]
        query: String,
        /// Maximum number of entries to return.
        #[arg(long, default_value = "5")]
        limit: usize,
        /// Restrict results to one kind of entry.
        #[arg(long, value_enum)]
        kind: Option<KindArg>,
        /// Print the matched text and candidate count.
        #[arg(long, default_value_t = false)]
        explain: bool,
    },
    /// Score a single text against a query.
    Score {
        #[arg(long)]
        query: String,
        #[arg(long)]
        text: String,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let app_version = env!("CARGO_PKG_VERSION");

    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env())
        .with(fmt::layer())
        .init();

    let cli = Cli::parse();
    let matcher = FuzzyMatcher {
        prefix_bonus: cli.prefix_bonus,
        threshold: cli.threshold,
    };

    info!(
        version = app_version,
        started_at = %Utc::now().to_rfc3339(),
        "edu-search boot"
    );

    match cli.command {
        Command::Search {
            catalog,
            query,
            limit,
            kind,
            explain,
        } => {
            info!(catalog = %catalog.display(), query = %query, limit, "searching catalog");

            let search = DirectorySearch::with_matcher(JsonFolderSource::new(catalog), matcher);
            let search_query = SearchQuery {
                text: query,
                limit,
                kind: kind.map(EntryKind::from),
                explain,
            };

            let result = search
                .search(&search_query)
                .await
                .map_err(|error| anyhow::anyhow!(error.to_string()))?;

            println!("query: {}", result.query);
            for hit in &result.hits {
                println!(
                    "[{}] score={:.4} id={} name={}",
                    hit.entry.kind, hit.score, hit.entry.id, hit.entry.name
                );
                if let Some(location) = &hit.entry.location {
                    println!("  location={location}");
                }
                if search_query.explain && hit.matched_text != hit.entry.name {
                    println!("  matched_alias={}", hit.matched_text);
                }
            }

            if search_query.explain {
                println!(
                    "explain: considered={} returned={} prefix_bonus={:.2} threshold={:.2}",
                    result.considered,
                    result.hits.len(),
                    matcher.prefix_bonus,
                    matcher.threshold
                );
            }
        }
        Command::Score { query, text } => {
            println!("{:.4}", matcher.score(&query, &text));
        }
    }

    Ok(())
}
