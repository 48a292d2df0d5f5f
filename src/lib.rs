//! # uniswap-v2-router-sdk
//!
//! Builds the method name, hex arguments, call value and ABI calldata needed to call a
//! Uniswap V2 style router for swaps and liquidity changes.

#![warn(
    missing_copy_implementations,
    missing_debug_implementations,
    unreachable_pub,
    clippy::needless_pass_by_value,
    clippy::redundant_clone,
    clippy::explicit_iter_loop,
    clippy::manual_assert,
    clippy::must_use_candidate,
    clippy::semicolon_if_nothing_returned,
    clippy::suspicious_operation_groupings,
    clippy::unseparated_literal_suffix,
    clippy::unused_self,
    clippy::use_debug,
    rustdoc::all
)]
#![cfg_attr(not(test), warn(unused_crate_dependencies))]
#![deny(unused_must_use, rust_2018_idioms)]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]

pub mod constants;
pub mod entities;
pub mod error;
pub mod router;
pub mod utils;

#[cfg(test)]
mod tests;

pub mod prelude {
    pub use crate::{constants::*, entities::*, error::*, router::*, utils::*};

    pub use alloy_primitives::{Address, Bytes, U256};
    pub use num_bigint::BigInt;
    pub use uniswap_sdk_core as sdk_core;
    pub use uniswap_sdk_core::prelude::{
        Currency as CurrencyTrait, CurrencyAmount, Ether, Fraction, Percent, Token, TradeType, WETH9,
    };
}
