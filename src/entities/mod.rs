mod pair;
mod route;
mod trade;

pub use pair::{compute_pair_address, Pair};
pub use route::Route;
pub use trade::Trade;
pub(crate) use trade::slippage_parts;
