use serde_json::Value;

use crate::components::graphql::{self, GraphQlError};
use crate::config::graphql::EXCHANGE_PRICE_LIST_QUERY;
use crate::models::prices::PriceQuote;

pub async fn fetch_price_list(endpoint: &str, bearer: &str) -> Result<Value, GraphQlError> {
    graphql::fetch(endpoint, EXCHANGE_PRICE_LIST_QUERY, bearer).await
}

// Best-effort projection of `data.exchangePriceList`: a missing node or a
// malformed entry degrades to empty/None fields, never to an error.
pub fn parse_price_list(body: &Value) -> Vec<PriceQuote> {
    let exchange = &body["data"]["exchangePriceList"];
    let base_symbol = exchange["baseSymbol"].as_str();

    let mut quotes = Vec::new();
    if let Some(prices) = exchange["prices"].as_array() {
        for price in prices {
            quotes.push(PriceQuote {
                reference_symbol: price["referenceSymbol"].as_str().map(String::from),
                base_symbol: base_symbol.map(String::from),
                amount: price["amount"].as_f64(),
                recommendation: price["recommendation"].as_str().map(String::from),
            });
        }
    }

    quotes
}
