pub const ENDPOINT: &str = "https://preview.craft-world.gg/graphql";

pub const EXCHANGE_PRICE_LIST_QUERY: &str = "query {
  exchangePriceList {
    baseSymbol
    prices {
      referenceSymbol
      amount
      recommendation
    }
  }
}";

pub const TRADE_EXECUTIONS_QUERY: &str = "query { account { tradeExecutions { id errorReason \
quote { type input { symbol amount } output { symbol amount } details { priceImpactPercentage } } \
trade { transaction { hash } input { symbol amount } output { symbol amount } } } } }";
