use chrono::{DateTime, SecondsFormat, Utc};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

// One entry of the exchange price list. Every field is optional: the
// service may omit any of them and the pipelines carry the gap through.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct PriceQuote {
    pub reference_symbol: Option<String>,
    pub base_symbol: Option<String>,
    pub amount: Option<f64>,
    pub recommendation: Option<String>,
}

#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct AssetPrice {
    pub base: Option<String>,
    pub value: Option<f64>,
    pub recommendation: Option<String>,
}

// One timestamped capture of the full price list, persisted as-is. The map
// keeps insertion order so the stored document mirrors the response.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct PriceSnapshot {
    pub timestamp: String,
    pub data: IndexMap<String, AssetPrice>,
}

impl PriceSnapshot {
    pub fn capture(quotes: &[PriceQuote]) -> Self {
        Self::at(Utc::now(), quotes)
    }

    pub fn at(instant: DateTime<Utc>, quotes: &[PriceQuote]) -> Self {
        let mut data = IndexMap::new();

        for quote in quotes {
            // No symbol means no key to file the entry under; the quote
            // still reaches the console renderings.
            if let Some(symbol) = &quote.reference_symbol {
                data.insert(
                    symbol.clone(),
                    AssetPrice {
                        base: quote.base_symbol.clone(),
                        value: quote.amount,
                        recommendation: quote.recommendation.clone(),
                    },
                );
            }
        }

        PriceSnapshot {
            timestamp: instant.to_rfc3339_opts(SecondsFormat::Micros, true),
            data,
        }
    }
}
