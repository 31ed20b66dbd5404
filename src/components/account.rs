use serde_json::Value;

use crate::components::graphql::{self, GraphQlError};
use crate::config::graphql::TRADE_EXECUTIONS_QUERY;

// The trade history is presented verbatim, so there is no parse step here:
// the decoded body is the pipeline's output.
pub async fn fetch_trade_executions(endpoint: &str, bearer: &str) -> Result<Value, GraphQlError> {
    graphql::fetch(endpoint, TRADE_EXECUTIONS_QUERY, bearer).await
}
