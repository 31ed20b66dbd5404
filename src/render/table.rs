use prettytable::{row, Table};

use crate::models::prices::PriceQuote;
use crate::render::format::{decimal_comma, round5};

pub const RAW_HEADER: &str = "ASSET       PRICE       STATUS";

// Bordered grid view, one row per quote in response order. Missing fields
// render as empty cells.
pub fn price_table(quotes: &[PriceQuote]) -> Table {
    let mut table = Table::new();
    table.set_titles(row!["Asset", "Base", "Value", "Recommendation"]);

    for quote in quotes {
        table.add_row(row![
            quote.reference_symbol.as_deref().unwrap_or(""),
            quote.base_symbol.as_deref().unwrap_or(""),
            quote
                .amount
                .map(|v| round5(v).to_string())
                .unwrap_or_default(),
            quote.recommendation.as_deref().unwrap_or(""),
        ]);
    }

    table
}

// Fixed-width companion view: both columns padded to 15, status verbatim.
pub fn raw_row(quote: &PriceQuote) -> String {
    let asset = quote.reference_symbol.as_deref().unwrap_or("");
    let price = quote.amount.map(decimal_comma).unwrap_or_default();
    let status = quote.recommendation.as_deref().unwrap_or("");

    format!("{asset:<15}{price:<15}{status}")
}
