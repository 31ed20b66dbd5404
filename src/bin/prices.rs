use dyno_data::components::exchange;
use dyno_data::components::graphql::GraphQlError;
use dyno_data::config::{graphql::ENDPOINT, PricesConfig};
use dyno_data::db::prices::save_snapshot;
use dyno_data::models::prices::PriceSnapshot;
use dyno_data::render::table::{price_table, raw_row, RAW_HEADER};
use log::{error, info, LevelFilter};
use simple_logger::SimpleLogger;
use std::process;

#[tokio::main]
async fn main() {
    SimpleLogger::new()
        .with_colors(true)
        .with_level(LevelFilter::Info)
        .init()
        .unwrap();
    dotenvy::dotenv().ok();

    let config = match PricesConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!("{e}");
            process::exit(1);
        }
    };

    let body = match exchange::fetch_price_list(ENDPOINT, &config.bearer).await {
        Ok(body) => body,
        Err(GraphQlError::RequestFailed { status, body }) => {
            println!("❌ Request failed with status code {status}");
            println!("{body}");
            return;
        }
        Err(e) => {
            error!("{e}");
            process::exit(1);
        }
    };

    let quotes = exchange::parse_price_list(&body);
    let snapshot = PriceSnapshot::capture(&quotes);

    println!("\n📊 Formatted table:\n");
    price_table(&quotes).printstd();

    println!("\n📋 Raw table:\n");
    println!("{RAW_HEADER}");
    for quote in &quotes {
        println!("{}", raw_row(quote));
    }

    match save_snapshot(&config.mongo_uri, &snapshot).await {
        Ok(()) => info!(
            "stored snapshot {} with {} assets",
            snapshot.timestamp,
            snapshot.data.len()
        ),
        Err(e) => {
            error!("failed to store snapshot: {e}");
            process::exit(1);
        }
    }
}
