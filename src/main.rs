use anyhow::{Context, Result};
use benchsift::{
    build_index, load_catalog, Dimension, EngineConfig, FilterSet, FilterVocabulary, QuerySpec,
    SearchRequest, SortField, SortOrder, SortSpec,
};
use clap::Parser;
use std::path::Path;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

mod cli;
use cli::{display, Cli, Commands};

fn main() {
    let cli = Cli::parse();

    let config = match EngineConfig::load(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ {}", e);
            std::process::exit(1);
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_filter)),
        )
        .with_writer(std::io::stderr)
        .init();

    let result = match cli.command {
        Commands::Search {
            catalog,
            query,
            category,
            difficulty,
            status,
            sort,
            order,
            limit,
            json,
        } => {
            let selections = [
                (Dimension::Category, category),
                (Dimension::Difficulty, difficulty),
                (Dimension::Status, status),
            ];
            let sort = SortSpec::new(
                sort.parse::<SortField>().unwrap_or_default(),
                order.parse::<SortOrder>().unwrap_or_default(),
            );
            run_search(
                &catalog,
                query,
                &selections,
                sort,
                limit.or(config.result_limit),
                json,
            )
        }
        Commands::Inspect { catalog } => run_inspect(&catalog),
    };

    if let Err(e) = result {
        eprintln!("❌ {:#}", e);
        std::process::exit(1);
    }
}

fn run_search(
    catalog: &Path,
    query: String,
    selections: &[(Dimension, Vec<String>)],
    sort: SortSpec,
    limit: Option<usize>,
    json: bool,
) -> Result<()> {
    let items = load_catalog(catalog)
        .with_context(|| format!("Failed to load catalog {}", catalog.display()))?;
    let index = Arc::new(build_index(&items));
    let vocabulary = FilterVocabulary::from_index(&index);

    let mut filters = FilterSet::new();
    for (dimension, values) in selections {
        for value in values {
            match vocabulary.resolve(*dimension, value) {
                Some(known) => {
                    filters.set(&vocabulary, *dimension, known, true);
                }
                None => {
                    tracing::warn!(%dimension, value = %value, "filter value not in catalog, ignoring");
                }
            }
        }
    }

    let request = SearchRequest {
        index: Arc::clone(&index),
        query: QuerySpec::new(query),
        filters,
        sort,
    };
    let mut outcome = request.execute();
    tracing::debug!(
        shown = outcome.summary.shown,
        total = outcome.summary.total,
        generation = outcome.generation,
        "search complete"
    );

    if json {
        if let Some(limit) = limit {
            outcome.results.truncate(limit);
        }
        let out = serde_json::to_string_pretty(&outcome).context("Failed to serialize results")?;
        println!("{}", out);
        return Ok(());
    }

    display::print_results(&index, &outcome.results, limit);
    display::print_summary(&outcome.summary);
    Ok(())
}

fn run_inspect(catalog: &Path) -> Result<()> {
    let items = load_catalog(catalog)
        .with_context(|| format!("Failed to load catalog {}", catalog.display()))?;
    let index = build_index(&items);
    let vocabulary = FilterVocabulary::from_index(&index);
    display::print_inspect(&index, &vocabulary);
    Ok(())
}
