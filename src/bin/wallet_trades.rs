use dyno_data::components::account;
use dyno_data::components::graphql::GraphQlError;
use dyno_data::config::{graphql::ENDPOINT, TradesConfig};
use log::{error, LevelFilter};
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

    let config = match TradesConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!("{e}");
            process::exit(1);
        }
    };

    match account::fetch_trade_executions(ENDPOINT, &config.bearer).await {
        Ok(body) => {
            // Value's alternate Display is the 2-space pretty form.
            println!("{body:#}");
        }
        Err(GraphQlError::RequestFailed { status, body }) => {
            println!("Request failed with status code {status}");
            println!("{body}");
        }
        Err(e) => {
            error!("{e}");
            process::exit(1);
        }
    }
}
