pub mod account;
pub mod exchange;
pub mod graphql;
