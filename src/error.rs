use thiserror::Error;
use uniswap_sdk_core::error::Error as CoreError;

#[derive(Clone, Debug, Hash, PartialEq, Eq, Error)]
pub enum Error {
    /// Both legs of a swap or liquidity change are the chain's native currency. The router
    /// has no entry point for native-for-native.
    #[error("ETHER_IN_OUT")]
    NativeCurrencyConflict,

    /// A relative expiry of zero seconds was supplied.
    #[error("TTL")]
    InvalidTtl,

    /// Fee on transfer tokens are only supported by the exact input router methods.
    #[error("EXACT_OUT_FOT")]
    UnsupportedFeeOnTransferForExactOutput,

    /// The recipient is not a `0x`-prefixed 20 byte hex address, or its checksum is wrong.
    #[error("ADDRESS: {0}")]
    InvalidAddress(String),

    /// Slippage tolerance is negative or at least 100%.
    #[error("SLIPPAGE_TOLERANCE")]
    InvalidSlippage,

    /// Indicates that the pair has insufficient reserves for a desired output amount. I.e. the
    /// amount of output cannot be obtained by sending any amount of input.
    #[error("Insufficient reserves")]
    InsufficientReserves,

    /// Indicates that the input amount is too small to produce any amount of output. I.e. the
    /// amount of input sent is less than the price of a single unit of output after fees.
    #[error("Insufficient input amount")]
    InsufficientInputAmount,

    #[error("Insufficient liquidity")]
    InsufficientLiquidity,

    #[error("Invalid token")]
    InvalidToken,

    #[error("CHAIN_IDS")]
    ChainIdMismatch,

    #[error("CURRENCY")]
    CurrencyMismatch,

    #[error("Invalid route: {0}")]
    InvalidRoute(&'static str),

    /// The amount is negative or does not fit in a `uint256`.
    #[error("AMOUNT")]
    AmountOverflow,

    #[error("LIQUIDITY")]
    InvalidLiquidity,

    /// Failure reported by the core currency and fraction types.
    #[error("{0:?}")]
    Core(CoreError),
}

impl From<CoreError> for Error {
    #[inline]
    fn from(error: CoreError) -> Self {
        Error::Core(error)
    }
}

impl Error {
    /// Short machine-readable tag identifying the failure.
    #[inline]
    #[must_use]
    pub const fn tag(&self) -> &'static str {
        match self {
            Self::NativeCurrencyConflict => "ETHER_IN_OUT",
            Self::InvalidTtl => "TTL",
            Self::UnsupportedFeeOnTransferForExactOutput => "EXACT_OUT_FOT",
            Self::InvalidAddress(_) => "ADDRESS",
            Self::InvalidSlippage => "SLIPPAGE_TOLERANCE",
            Self::InsufficientReserves => "INSUFFICIENT_RESERVES",
            Self::InsufficientInputAmount => "INSUFFICIENT_INPUT_AMOUNT",
            Self::InsufficientLiquidity => "INSUFFICIENT_LIQUIDITY",
            Self::InvalidToken => "TOKEN",
            Self::ChainIdMismatch => "CHAIN_IDS",
            Self::CurrencyMismatch => "CURRENCY",
            Self::InvalidRoute(_) => "PATH",
            Self::AmountOverflow => "AMOUNT",
            Self::InvalidLiquidity => "LIQUIDITY",
            Self::Core(_) => "CORE",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tags_are_stable() {
        assert_eq!(Error::NativeCurrencyConflict.tag(), "ETHER_IN_OUT");
        assert_eq!(Error::InvalidTtl.tag(), "TTL");
        assert_eq!(
            Error::UnsupportedFeeOnTransferForExactOutput.tag(),
            "EXACT_OUT_FOT"
        );
        assert_eq!(Error::InvalidAddress("0x1".to_string()).tag(), "ADDRESS");
        assert_eq!(Error::InvalidRoute("INPUT").tag(), "PATH");
    }

    #[test]
    fn display_carries_detail() {
        assert_eq!(Error::InvalidAddress("abc".into()).to_string(), "ADDRESS: abc");
        assert_eq!(Error::InvalidRoute("PAIRS").to_string(), "Invalid route: PAIRS");
    }
}
