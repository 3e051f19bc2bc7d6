//! Pool configuration.
//!
//! [`PoolConfig`] is the declarative blueprint from which a
//! [`PairPool`](crate::pools::PairPool) is built via
//! [`FromConfig`](crate::traits::FromConfig).  Protocol constants such as
//! [`MINIMUM_LIQUIDITY`](crate::math::MINIMUM_LIQUIDITY) and
//! [`PRICE_SCALE`](crate::domain::PRICE_SCALE) are fixed, not configured.

mod pool_config;

pub use pool_config::PoolConfig;
