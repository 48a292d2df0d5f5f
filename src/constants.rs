use alloy_primitives::{address, b256, Address, B256};
use once_cell::sync::Lazy;
use rustc_hash::FxHashMap;

pub const MAINNET: u64 = 1;
pub const GOERLI: u64 = 5;
pub const SEPOLIA: u64 = 11155111;

pub const FACTORY_ADDRESS: Address = address!("5C69bEe701ef814a2B6a3EDD4B1652CB9cc5aA6f");

pub const ROUTER_ADDRESS: Address = address!("7a250d5630B4cF539739dF2C5dAcb4c659F2488D");

pub const INIT_CODE_HASH: B256 =
    b256!("96e8ac4277198ff8b6f785478aa9a39f403cb768dd02cbee326c3e7da348845f");

pub const MINIMUM_LIQUIDITY: u64 = 1000;

/// Swap fee kept by the pool, as `fee_numerator / fee_denominator` of the input that remains
/// after the fee (997/1000 is a 0.3% fee).
pub const FEE_NUMERATOR: u64 = 997;
pub const FEE_DENOMINATOR: u64 = 1000;

/// Deployment and fee parameters of the protocol on one chain.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ChainConstants {
    pub factory: Address,
    pub router: Address,
    /// The wrapped native currency the router trades in place of ether.
    pub weth: Address,
    pub init_code_hash: B256,
    pub fee_numerator: u64,
    pub fee_denominator: u64,
}

impl ChainConstants {
    const fn uniswap(factory: Address, router: Address, weth: Address) -> Self {
        Self {
            factory,
            router,
            weth,
            init_code_hash: INIT_CODE_HASH,
            fee_numerator: FEE_NUMERATOR,
            fee_denominator: FEE_DENOMINATOR,
        }
    }
}

pub static CHAIN_CONSTANTS: Lazy<FxHashMap<u64, ChainConstants>> = Lazy::new(|| {
    let mut map = FxHashMap::default();
    map.insert(
        MAINNET,
        ChainConstants::uniswap(
            FACTORY_ADDRESS,
            ROUTER_ADDRESS,
            address!("C02aaA39b223FE8D0A0e5C4F27eAD9083C756Cc2"),
        ),
    );
    map.insert(
        GOERLI,
        ChainConstants::uniswap(
            FACTORY_ADDRESS,
            ROUTER_ADDRESS,
            address!("B4FBF271143F4FBf7B91A5ded31805e42b2208d6"),
        ),
    );
    map.insert(
        SEPOLIA,
        ChainConstants::uniswap(
            address!("F62c03E08ada871A0bEb309762E260a7a6a880E6"),
            address!("eE567Fe1712Faf6149d80dA1E6934E354124CfE3"),
            address!("fFf9976782d46CC05630D1f6eBAb18b2324d6B14"),
        ),
    );
    map
});

pub static FACTORY_ADDRESS_MAP: Lazy<FxHashMap<u64, Address>> = Lazy::new(|| {
    CHAIN_CONSTANTS
        .iter()
        .map(|(chain_id, constants)| (*chain_id, constants.factory))
        .collect()
});

pub static ROUTER_ADDRESS_MAP: Lazy<FxHashMap<u64, Address>> = Lazy::new(|| {
    CHAIN_CONSTANTS
        .iter()
        .map(|(chain_id, constants)| (*chain_id, constants.router))
        .collect()
});

pub static WETH9_ADDRESS_MAP: Lazy<FxHashMap<u64, Address>> = Lazy::new(|| {
    CHAIN_CONSTANTS
        .iter()
        .map(|(chain_id, constants)| (*chain_id, constants.weth))
        .collect()
});

/// Swap fee for `chain_id` as `(numerator, denominator)`, falling back to the Uniswap fee on
/// chains without an entry.
#[inline]
#[must_use]
pub fn fee_for_chain(chain_id: u64) -> (u64, u64) {
    CHAIN_CONSTANTS
        .get(&chain_id)
        .map_or((FEE_NUMERATOR, FEE_DENOMINATOR), |c| {
            (c.fee_numerator, c.fee_denominator)
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn derived_maps_follow_chain_table() {
        assert_eq!(FACTORY_ADDRESS_MAP[&MAINNET], FACTORY_ADDRESS);
        assert_eq!(ROUTER_ADDRESS_MAP[&GOERLI], ROUTER_ADDRESS);
        assert_eq!(
            WETH9_ADDRESS_MAP[&MAINNET],
            address!("C02aaA39b223FE8D0A0e5C4F27eAD9083C756Cc2")
        );
        assert_eq!(FACTORY_ADDRESS_MAP.len(), CHAIN_CONSTANTS.len());
    }

    #[test]
    fn unknown_chain_uses_default_fee() {
        assert_eq!(fee_for_chain(MAINNET), (997, 1000));
        assert_eq!(fee_for_chain(424242), (FEE_NUMERATOR, FEE_DENOMINATOR));
    }
}
