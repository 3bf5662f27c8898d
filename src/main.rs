mod analyzer;
mod config;
mod joiner;
mod loader;
mod model;
mod parser;
mod report;
mod utils;

use analyzer::{rankings, rfm, timeseries};
use config::{AppConfig, load_config};
use joiner::join_tables;
use loader::{HttpFetcher, load_dataset};
use tracing::{error, info, warn};

#[tokio::main]
async fn main() {
    // Initialize logging
    tracing_subscriber::fmt::init();

    // Set panic hook to log details about any panic
    std::panic::set_hook(Box::new(|panic_info| {
        eprintln!("Panic occurred: {panic_info:?}");
    }));

    // The dataset locations are fixed; config.json only overrides the mirror
    // and the HTTP timeout.
    let config = match load_config("config.json") {
        Ok(cfg) => cfg,
        Err(e) => {
            warn!("No usable config.json ({e}), using defaults");
            AppConfig::default()
        }
    };

    let fetcher = HttpFetcher::new(&config);

    info!("Fetching source tables from {}", config.dataset_base_url);
    let dataset = match load_dataset(&fetcher).await {
        Ok(dataset) => dataset,
        Err(e) => {
            error!("Dataset load failed: {e}");
            std::process::exit(1);
        }
    };
    info!(
        "Loaded {} orders, {} items, {} products, {} payments, {} reviews, {} customers, {} translations",
        dataset.orders.len(),
        dataset.order_items.len(),
        dataset.products.len(),
        dataset.payments.len(),
        dataset.reviews.len(),
        dataset.customers.len(),
        dataset.category_translations.len(),
    );

    let joined = join_tables(&dataset);
    info!("Joined table: {} rows", joined.len());
    if joined.is_empty() {
        warn!("Joined table is empty; all views will be empty");
    }

    let top_categories = rankings::top_categories(&joined);
    let monthly_orders = timeseries::monthly_order_counts(&joined);
    let monthly_revenue = timeseries::monthly_revenue(&joined);
    let payment_types = rankings::payment_type_usage(&joined);
    let rfm_table = rfm::rfm_segments(&joined);
    info!(
        "Computed views: {} categories, {} order months, {} revenue months, {} payment types, {} RFM customers",
        top_categories.len(),
        monthly_orders.len(),
        monthly_revenue.len(),
        payment_types.len(),
        rfm_table.len(),
    );

    report::render(
        &top_categories,
        &monthly_orders,
        &monthly_revenue,
        &payment_types,
        &rfm_table,
    );
}
