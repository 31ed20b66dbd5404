use mongodb::Client;
use thiserror::Error;

use crate::models::prices::PriceSnapshot;

const DB_NAME: &str = "dyno";
const PRICES_COLLECTION: &str = "prices";

#[derive(Error, Debug)]
pub enum PriceStoreError {
    #[error("MongoDB error: {0}")]
    Mongo(#[from] mongodb::error::Error),
}

// Appends one document per run; there is no upsert or merge.
pub async fn save_snapshot(uri: &str, snapshot: &PriceSnapshot) -> Result<(), PriceStoreError> {
    let client = Client::with_uri_str(uri).await?;
    let collection = client
        .database(DB_NAME)
        .collection::<PriceSnapshot>(PRICES_COLLECTION);

    collection.insert_one(snapshot).await?;

    Ok(())
}
