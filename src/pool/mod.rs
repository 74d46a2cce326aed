pub mod fee_tier;
pub mod pool_prices;
pub mod price_sync;
pub mod token_order;
