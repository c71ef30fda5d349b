//! Command implementations.

use anyhow::{Context, Result};
use tracing::{info, info_span};

use catalog_ingest::{RemoteSource, load_products_file};
use catalog_model::{CatalogError, CategoryFilter, GroupedView, Item, QueryState, SortDirection};
use catalog_pipeline::ViewPipeline;

use crate::cli::{BrowseArgs, SortArg, SourceArgs};
use crate::summary::print_categories;

/// Result of a browse run, handed to the summary printer.
pub struct BrowseResult {
    pub query: QueryState,
    pub view: GroupedView,
}

pub fn run_browse(args: &BrowseArgs) -> Result<BrowseResult> {
    let span = info_span!("browse");
    let _guard = span.enter();

    let items = load_items(&args.source)?;
    let mut pipeline = ViewPipeline::with_items(items);

    let query = QueryState {
        search_term: args.search.clone().unwrap_or_default(),
        category: CategoryFilter::parse_label(&args.category),
        sort_direction: match args.sort {
            SortArg::Asc => SortDirection::Ascending,
            SortArg::Desc => SortDirection::Descending,
        },
    };

    if let Err(error) = pipeline.validate_query(&query) {
        let options = pipeline.categories().options().join(", ");
        return match error {
            CatalogError::UnknownCategory { label } => Err(anyhow::anyhow!(
                "unknown category '{label}' (valid: {options})"
            )),
            other => Err(other.into()),
        };
    }

    let view = pipeline.view(&query).clone();
    Ok(BrowseResult { query, view })
}

pub fn run_categories(args: &SourceArgs) -> Result<()> {
    let items = load_items(args)?;
    let mut pipeline = ViewPipeline::with_items(items);
    let categories = pipeline.categories().clone();
    print_categories(&categories, pipeline.items());
    Ok(())
}

/// Obtain the raw item collection: local payload file when given,
/// otherwise one fetch from the remote endpoint.
fn load_items(source: &SourceArgs) -> Result<Vec<Item>> {
    let page = match &source.input {
        Some(path) => load_products_file(path)
            .with_context(|| format!("load products from {}", path.display()))?,
        None => {
            let remote = RemoteSource::new(&source.base_url).context("configure source")?;
            let runtime = tokio::runtime::Builder::new_current_thread()
                .enable_all()
                .build()
                .context("build runtime")?;
            runtime
                .block_on(remote.fetch_products())
                .context("fetch products")?
        }
    };
    let items = page.into_items();
    info!(items = items.len(), "loaded catalog");
    Ok(items)
}
