use crate::error::Error;
use alloy_primitives::{Address, U256};
use core::str::FromStr;
use num_bigint::{BigInt, Sign};
use num_traits::Zero;
use std::time::{SystemTime, UNIX_EPOCH};
use uniswap_sdk_core::prelude::*;

/// Hex encoding used for router arguments: `0x`-prefixed lowercase digits without padding, so
/// zero is `0x0`.
#[inline]
#[must_use]
pub fn to_hex(value: &BigInt) -> String {
    format!("0x{value:x}")
}

/// Converts a non-negative integer to a `uint256`.
#[inline]
pub fn to_u256(value: &BigInt) -> Result<U256, Error> {
    let (sign, bytes) = value.to_bytes_be();
    if sign == Sign::Minus {
        return Err(Error::AmountOverflow);
    }
    U256::try_from_be_slice(&bytes).ok_or(Error::AmountOverflow)
}

/// Validates a `0x`-prefixed hex address. All-lowercase and all-uppercase input is accepted as
/// is; mixed case must be a valid EIP-55 checksum.
pub fn validate_and_parse_address(address: &str) -> Result<Address, Error> {
    let invalid = || Error::InvalidAddress(address.to_string());
    let digits = address.strip_prefix("0x").ok_or_else(invalid)?;
    if digits.len() != 40 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(invalid());
    }
    let has_lower = digits.bytes().any(|b| b.is_ascii_lowercase());
    let has_upper = digits.bytes().any(|b| b.is_ascii_uppercase());
    if has_lower && has_upper {
        Address::parse_checksummed(address, None).map_err(|_| invalid())
    } else {
        Address::from_str(address).map_err(|_| invalid())
    }
}

/// Given some amount of an asset and pair reserves, returns an equivalent amount of the other
/// asset, truncated: `amount_a * reserve_b / reserve_a`.
///
/// Fails with [`Error::InsufficientLiquidity`] when `reserve_a` is zero.
pub fn quote(amount_a: &BigInt, reserve_a: &BigInt, reserve_b: &BigInt) -> Result<BigInt, Error> {
    if reserve_a.is_zero() {
        return Err(Error::InsufficientLiquidity);
    }
    Ok(Fraction::new(amount_a * reserve_b, reserve_a.clone()).quotient())
}

/// Current unix time in seconds.
#[inline]
#[must_use]
pub fn unix_timestamp() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_or(0, |elapsed| elapsed.as_secs())
}
