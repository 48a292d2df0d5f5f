//! Call parameters for the Uniswap V2 router.
//!
//! Every entry point validates [`TradeOptions`] first, then derives slippage bounded amounts
//! and picks the router method from the nativeness of both legs.

use crate::{
    entities::{slippage_parts, Pair, Trade},
    error::Error,
    utils::{quote, to_hex, to_u256, unix_timestamp, validate_and_parse_address},
};
use alloy_primitives::{Address, Bytes};
use alloy_sol_types::{sol, SolCall};
use num_bigint::BigInt;
use num_traits::{Signed, Zero};
use tracing::{debug, warn};
use uniswap_sdk_core::prelude::{Currency as CurrencyTrait, *};

sol! {
    interface IUniswapV2Router02 {
        function addLiquidity(
            address tokenA,
            address tokenB,
            uint256 amountADesired,
            uint256 amountBDesired,
            uint256 amountAMin,
            uint256 amountBMin,
            address to,
            uint256 deadline
        ) external returns (uint256 amountA, uint256 amountB, uint256 liquidity);

        function addLiquidityETH(
            address token,
            uint256 amountTokenDesired,
            uint256 amountTokenMin,
            uint256 amountETHMin,
            address to,
            uint256 deadline
        ) external payable returns (uint256 amountToken, uint256 amountETH, uint256 liquidity);

        function removeLiquidity(
            address tokenA,
            address tokenB,
            uint256 liquidity,
            uint256 amountAMin,
            uint256 amountBMin,
            address to,
            uint256 deadline
        ) external returns (uint256 amountA, uint256 amountB);

        function removeLiquidityETH(
            address token,
            uint256 liquidity,
            uint256 amountTokenMin,
            uint256 amountETHMin,
            address to,
            uint256 deadline
        ) external returns (uint256 amountToken, uint256 amountETH);

        function swapExactTokensForTokens(
            uint256 amountIn,
            uint256 amountOutMin,
            address[] calldata path,
            address to,
            uint256 deadline
        ) external returns (uint256[] memory amounts);

        function swapTokensForExactTokens(
            uint256 amountOut,
            uint256 amountInMax,
            address[] calldata path,
            address to,
            uint256 deadline
        ) external returns (uint256[] memory amounts);

        function swapExactETHForTokens(
            uint256 amountOutMin,
            address[] calldata path,
            address to,
            uint256 deadline
        ) external payable returns (uint256[] memory amounts);

        function swapTokensForExactETH(
            uint256 amountOut,
            uint256 amountInMax,
            address[] calldata path,
            address to,
            uint256 deadline
        ) external returns (uint256[] memory amounts);

        function swapExactTokensForETH(
            uint256 amountIn,
            uint256 amountOutMin,
            address[] calldata path,
            address to,
            uint256 deadline
        ) external returns (uint256[] memory amounts);

        function swapETHForExactTokens(
            uint256 amountOut,
            address[] calldata path,
            address to,
            uint256 deadline
        ) external payable returns (uint256[] memory amounts);

        function swapExactTokensForTokensSupportingFeeOnTransferTokens(
            uint256 amountIn,
            uint256 amountOutMin,
            address[] calldata path,
            address to,
            uint256 deadline
        ) external;

        function swapExactETHForTokensSupportingFeeOnTransferTokens(
            uint256 amountOutMin,
            address[] calldata path,
            address to,
            uint256 deadline
        ) external payable;

        function swapExactTokensForETHSupportingFeeOnTransferTokens(
            uint256 amountIn,
            uint256 amountOutMin,
            address[] calldata path,
            address to,
            uint256 deadline
        ) external;
    }
}

use IUniswapV2Router02::*;

/// When the router call stops being valid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Expiry {
    /// Seconds after the call parameters are built. Must be positive.
    Ttl(u64),
    /// Absolute unix timestamp in seconds.
    Deadline(u64),
}

impl Expiry {
    /// The absolute deadline given the current unix time `now`.
    #[inline]
    pub fn deadline(&self, now: u64) -> Result<u64, Error> {
        match *self {
            Self::Ttl(0) => Err(Error::InvalidTtl),
            Self::Ttl(ttl) => now.checked_add(ttl).ok_or(Error::InvalidTtl),
            Self::Deadline(deadline) => Ok(deadline),
        }
    }
}

/// Options for producing the arguments to send calls to the router.
#[derive(Clone, Debug, PartialEq)]
pub struct TradeOptions {
    /// How much the execution price is allowed to move unfavorably from the trade execution
    /// price. Must lie in `[0, 1)`.
    pub allowed_slippage: Percent,
    /// How long the call is valid, either relative to when the parameters are built or as an
    /// absolute timestamp.
    pub expiry: Expiry,
    /// The account that should receive the output of the swap.
    pub recipient: String,
    /// Whether any of the tokens in the path are fee on transfer tokens, which should be handled
    /// with special methods.
    pub fee_on_transfer: bool,
}

impl TradeOptions {
    /// Creates options for ordinary tokens. Use [`TradeOptions::with_fee_on_transfer`] when the
    /// path holds fee on transfer tokens.
    #[inline]
    pub fn new(allowed_slippage: Percent, expiry: Expiry, recipient: impl Into<String>) -> Self {
        Self {
            allowed_slippage,
            expiry,
            recipient: recipient.into(),
            fee_on_transfer: false,
        }
    }

    /// Selects the `SupportingFeeOnTransferTokens` router methods for exact input swaps. Exact
    /// output swaps are rejected while this is set.
    #[inline]
    #[must_use]
    pub fn with_fee_on_transfer(mut self, fee_on_transfer: bool) -> Self {
        self.fee_on_transfer = fee_on_transfer;
        self
    }
}

/// One positional argument of a router call.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CallArgument {
    /// A hex encoded `uint256` or a checksummed address.
    Value(String),
    /// A token path.
    Path(Vec<String>),
}

impl CallArgument {
    fn uint(value: &BigInt) -> Self {
        Self::Value(to_hex(value))
    }

    fn address(address: Address) -> Self {
        Self::Value(address.to_checksum(None))
    }

    fn path(path: &[Address]) -> Self {
        Self::Path(path.iter().map(|address| address.to_checksum(None)).collect())
    }
}

/// The parameters to use in the call to the Uniswap V2 Router to execute a trade or change
/// liquidity.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SwapParameters {
    /// The method to call on the Uniswap V2 Router.
    pub method_name: &'static str,
    /// The arguments to pass to the method, all hex encoded.
    pub args: Vec<CallArgument>,
    /// The amount of wei to send in hex.
    pub value: String,
    /// ABI encoded call of `method_name` with `args`.
    pub calldata: Bytes,
}

fn encode<C: SolCall>(call: &C, args: Vec<CallArgument>, value: &BigInt) -> SwapParameters {
    let method_name = C::SIGNATURE
        .split_once('(')
        .map_or(C::SIGNATURE, |(name, _)| name);
    SwapParameters {
        method_name,
        args,
        value: to_hex(value),
        calldata: call.abi_encode().into(),
    }
}

/// `1 / (1 + slippage)`, the factor applied to desired amounts to get minimum amounts.
#[inline]
pub fn slippage_adjusted(allowed_slippage: &Percent) -> Result<Fraction, Error> {
    let (numerator, denominator) = slippage_parts(allowed_slippage);
    if numerator.is_negative() {
        return Err(Error::InvalidSlippage);
    }
    Ok(Fraction::new(denominator.clone(), denominator + numerator))
}

/// Checks shared by every router call, in order: native currency on both legs, expiry,
/// slippage range and recipient. Returns the recipient and the absolute deadline.
fn validate(
    options: &TradeOptions,
    native_a: bool,
    native_b: bool,
    now: u64,
) -> Result<(Address, BigInt), Error> {
    if native_a && native_b {
        return Err(Error::NativeCurrencyConflict);
    }
    let deadline = options.expiry.deadline(now)?;
    let (numerator, denominator) = slippage_parts(&options.allowed_slippage);
    if numerator.is_negative() || numerator >= denominator {
        return Err(Error::InvalidSlippage);
    }
    let to = validate_and_parse_address(&options.recipient)?;
    Ok((to, BigInt::from(deadline)))
}

/// Produces the on-chain method name to call and the hex encoded parameters to pass as
/// arguments for a given trade.
///
/// The deadline of a [`Expiry::Ttl`] is computed from the current system time.
///
/// ## Arguments
///
/// * `trade`: to produce call parameters for
/// * `options`: options for the call parameters
#[inline]
pub fn swap_call_parameters<TInput, TOutput>(
    trade: &Trade<TInput, TOutput>,
    options: &TradeOptions,
) -> Result<SwapParameters, Error>
where
    TInput: CurrencyTrait,
    TOutput: CurrencyTrait,
{
    swap_call_parameters_at(trade, options, unix_timestamp())
}

/// [`swap_call_parameters`] with the current unix time supplied by the caller.
pub fn swap_call_parameters_at<TInput, TOutput>(
    trade: &Trade<TInput, TOutput>,
    options: &TradeOptions,
    now: u64,
) -> Result<SwapParameters, Error>
where
    TInput: CurrencyTrait,
    TOutput: CurrencyTrait,
{
    let ether_in = trade.input_amount.currency.is_native();
    let ether_out = trade.output_amount.currency.is_native();
    let (to, deadline) = validate(options, ether_in, ether_out, now)?;
    let fee_on_transfer = options.fee_on_transfer;
    if fee_on_transfer && matches!(trade.trade_type, TradeType::ExactOutput) {
        return Err(Error::UnsupportedFeeOnTransferForExactOutput);
    }

    let amount_in = trade
        .maximum_amount_in(&options.allowed_slippage)?
        .quotient();
    let amount_out = trade
        .minimum_amount_out(&options.allowed_slippage)?
        .quotient();
    let path: Vec<Address> = trade.route.path.iter().map(|token| token.address()).collect();

    let amount_in_uint = to_u256(&amount_in)?;
    let amount_out_uint = to_u256(&amount_out)?;
    let deadline_uint = to_u256(&deadline)?;
    let zero = BigInt::zero();

    let parameters = match (&trade.trade_type, ether_in, ether_out) {
        (TradeType::ExactInput | TradeType::ExactOutput, true, true) => {
            return Err(Error::NativeCurrencyConflict)
        }
        (TradeType::ExactInput, true, false) => {
            let args = vec![
                CallArgument::uint(&amount_out),
                CallArgument::path(&path),
                CallArgument::address(to),
                CallArgument::uint(&deadline),
            ];
            if fee_on_transfer {
                let call = swapExactETHForTokensSupportingFeeOnTransferTokensCall {
                    amountOutMin: amount_out_uint,
                    path,
                    to,
                    deadline: deadline_uint,
                };
                encode(&call, args, &amount_in)
            } else {
                let call = swapExactETHForTokensCall {
                    amountOutMin: amount_out_uint,
                    path,
                    to,
                    deadline: deadline_uint,
                };
                encode(&call, args, &amount_in)
            }
        }
        (TradeType::ExactInput, false, true) => {
            let args = vec![
                CallArgument::uint(&amount_in),
                CallArgument::uint(&amount_out),
                CallArgument::path(&path),
                CallArgument::address(to),
                CallArgument::uint(&deadline),
            ];
            if fee_on_transfer {
                let call = swapExactTokensForETHSupportingFeeOnTransferTokensCall {
                    amountIn: amount_in_uint,
                    amountOutMin: amount_out_uint,
                    path,
                    to,
                    deadline: deadline_uint,
                };
                encode(&call, args, &zero)
            } else {
                let call = swapExactTokensForETHCall {
                    amountIn: amount_in_uint,
                    amountOutMin: amount_out_uint,
                    path,
                    to,
                    deadline: deadline_uint,
                };
                encode(&call, args, &zero)
            }
        }
        (TradeType::ExactInput, false, false) => {
            let args = vec![
                CallArgument::uint(&amount_in),
                CallArgument::uint(&amount_out),
                CallArgument::path(&path),
                CallArgument::address(to),
                CallArgument::uint(&deadline),
            ];
            if fee_on_transfer {
                let call = swapExactTokensForTokensSupportingFeeOnTransferTokensCall {
                    amountIn: amount_in_uint,
                    amountOutMin: amount_out_uint,
                    path,
                    to,
                    deadline: deadline_uint,
                };
                encode(&call, args, &zero)
            } else {
                let call = swapExactTokensForTokensCall {
                    amountIn: amount_in_uint,
                    amountOutMin: amount_out_uint,
                    path,
                    to,
                    deadline: deadline_uint,
                };
                encode(&call, args, &zero)
            }
        }
        (TradeType::ExactOutput, true, false) => {
            let args = vec![
                CallArgument::uint(&amount_out),
                CallArgument::path(&path),
                CallArgument::address(to),
                CallArgument::uint(&deadline),
            ];
            let call = swapETHForExactTokensCall {
                amountOut: amount_out_uint,
                path,
                to,
                deadline: deadline_uint,
            };
            encode(&call, args, &amount_in)
        }
        (TradeType::ExactOutput, false, true) => {
            let args = vec![
                CallArgument::uint(&amount_out),
                CallArgument::uint(&amount_in),
                CallArgument::path(&path),
                CallArgument::address(to),
                CallArgument::uint(&deadline),
            ];
            let call = swapTokensForExactETHCall {
                amountOut: amount_out_uint,
                amountInMax: amount_in_uint,
                path,
                to,
                deadline: deadline_uint,
            };
            encode(&call, args, &zero)
        }
        (TradeType::ExactOutput, false, false) => {
            let args = vec![
                CallArgument::uint(&amount_out),
                CallArgument::uint(&amount_in),
                CallArgument::path(&path),
                CallArgument::address(to),
                CallArgument::uint(&deadline),
            ];
            let call = swapTokensForExactTokensCall {
                amountOut: amount_out_uint,
                amountInMax: amount_in_uint,
                path,
                to,
                deadline: deadline_uint,
            };
            encode(&call, args, &zero)
        }
    };
    debug!(
        method = parameters.method_name,
        value = %parameters.value,
        "encoded swap"
    );
    Ok(parameters)
}

/// How the desired deposit amounts were reconciled with the pool ratio.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Reconciliation {
    /// Both reserves are zero; the deposit sets the initial price.
    Uninitialized,
    /// The desired amounts were kept.
    Balanced,
    /// The desired amount of token A was lowered to the optimal amount.
    AdjustedA,
    /// The desired amount of token B was lowered to the optimal amount.
    AdjustedB,
    /// Neither optimal amount fits its desired counterpart; the amounts are passed through
    /// unchanged.
    Unresolved,
}

/// Deposit amounts after reconciliation against the pool ratio.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LiquidityAmounts {
    pub amount_a_desired: BigInt,
    pub amount_b_desired: BigInt,
    pub amount_a_min: BigInt,
    pub amount_b_min: BigInt,
    pub reconciliation: Reconciliation,
}

/// Computes desired and minimum deposit amounts for adding `amount_a` and `amount_b` to
/// `pair`.
///
/// Minimums are `floor(desired / (1 + slippage)) + 1`. On an initialized pool the optimal
/// counter-amount of B is quoted from A; when it is below B's minimum it replaces the desired
/// B. If the optimal B exceeds the desired B the same is done for A.
///
/// The optimal B is `quote(amountA, reserveA, reserveB)` and the optimal A is
/// `quote(amountB, reserveB, reserveA)`.
pub fn reconcile_liquidity_amounts<TA, TB>(
    pair: &Pair,
    amount_a: &CurrencyAmount<TA>,
    amount_b: &CurrencyAmount<TB>,
    allowed_slippage: &Percent,
) -> Result<LiquidityAmounts, Error>
where
    TA: CurrencyTrait,
    TB: CurrencyTrait,
{
    let token_a = amount_a.currency.wrapped().clone();
    let token_b = amount_b.currency.wrapped().clone();
    if token_a.equals(&token_b) {
        return Err(Error::InvalidToken);
    }
    let reserve_a = pair.reserve_of(&token_a)?.quotient();
    let reserve_b = pair.reserve_of(&token_b)?.quotient();

    let adjusted = slippage_adjusted(allowed_slippage)?;
    let minimum = |desired: &BigInt| {
        (adjusted.clone() * Fraction::new(desired.clone(), 1)).quotient() + 1
    };

    let mut amount_a_desired = amount_a.quotient();
    let mut amount_b_desired = amount_b.quotient();
    let mut amount_a_min = minimum(&amount_a_desired);
    let mut amount_b_min = minimum(&amount_b_desired);

    let reconciliation = if reserve_a.is_zero() && reserve_b.is_zero() {
        Reconciliation::Uninitialized
    } else {
        let amount_b_optimal = quote(&amount_a_desired, &reserve_a, &reserve_b)?;
        if amount_b_optimal <= amount_b_desired {
            if amount_b_optimal < amount_b_min {
                amount_b_desired = amount_b_optimal;
                amount_b_min = minimum(&amount_b_desired);
                Reconciliation::AdjustedB
            } else {
                Reconciliation::Balanced
            }
        } else {
            let amount_a_optimal = quote(&amount_b_desired, &reserve_b, &reserve_a)?;
            if amount_a_optimal <= amount_a_desired {
                if amount_a_optimal < amount_a_min {
                    amount_a_desired = amount_a_optimal;
                    amount_a_min = minimum(&amount_a_desired);
                    Reconciliation::AdjustedA
                } else {
                    Reconciliation::Balanced
                }
            } else {
                Reconciliation::Unresolved
            }
        }
    };
    debug!(?reconciliation, "reconciled liquidity amounts");

    Ok(LiquidityAmounts {
        amount_a_desired,
        amount_b_desired,
        amount_a_min,
        amount_b_min,
        reconciliation,
    })
}

/// Produces the on-chain method name and hex encoded arguments to add `amount_a` and
/// `amount_b` of liquidity to `pair`.
///
/// The deadline of a [`Expiry::Ttl`] is computed from the current system time.
#[inline]
pub fn add_call_parameters<TA, TB>(
    pair: &Pair,
    amount_a: &CurrencyAmount<TA>,
    amount_b: &CurrencyAmount<TB>,
    options: &TradeOptions,
) -> Result<SwapParameters, Error>
where
    TA: CurrencyTrait,
    TB: CurrencyTrait,
{
    add_call_parameters_at(pair, amount_a, amount_b, options, unix_timestamp())
}

/// [`add_call_parameters`] with the current unix time supplied by the caller.
pub fn add_call_parameters_at<TA, TB>(
    pair: &Pair,
    amount_a: &CurrencyAmount<TA>,
    amount_b: &CurrencyAmount<TB>,
    options: &TradeOptions,
    now: u64,
) -> Result<SwapParameters, Error>
where
    TA: CurrencyTrait,
    TB: CurrencyTrait,
{
    let ether_a = amount_a.currency.is_native();
    let ether_b = amount_b.currency.is_native();
    let (to, deadline) = validate(options, ether_a, ether_b, now)?;

    let amounts = reconcile_liquidity_amounts(pair, amount_a, amount_b, &options.allowed_slippage)?;
    if amounts.reconciliation == Reconciliation::Unresolved {
        warn!(
            amount_a = %amounts.amount_a_desired,
            amount_b = %amounts.amount_b_desired,
            "desired liquidity amounts do not match the pool ratio"
        );
    }
    let LiquidityAmounts {
        amount_a_desired,
        amount_b_desired,
        amount_a_min,
        amount_b_min,
        ..
    } = amounts;
    let deadline_uint = to_u256(&deadline)?;

    let parameters = match (ether_a, ether_b) {
        (true, true) => return Err(Error::NativeCurrencyConflict),
        (true, false) => add_liquidity_eth(
            amount_b.currency.wrapped(),
            [&amount_b_desired, &amount_b_min, &amount_a_min],
            &amount_a_desired,
            to,
            &deadline,
        )?,
        (false, true) => add_liquidity_eth(
            amount_a.currency.wrapped(),
            [&amount_a_desired, &amount_a_min, &amount_b_min],
            &amount_b_desired,
            to,
            &deadline,
        )?,
        (false, false) => {
            let token_a = amount_a.currency.wrapped().address();
            let token_b = amount_b.currency.wrapped().address();
            let args = vec![
                CallArgument::address(token_a),
                CallArgument::address(token_b),
                CallArgument::uint(&amount_a_desired),
                CallArgument::uint(&amount_b_desired),
                CallArgument::uint(&amount_a_min),
                CallArgument::uint(&amount_b_min),
                CallArgument::address(to),
                CallArgument::uint(&deadline),
            ];
            let call = addLiquidityCall {
                tokenA: token_a,
                tokenB: token_b,
                amountADesired: to_u256(&amount_a_desired)?,
                amountBDesired: to_u256(&amount_b_desired)?,
                amountAMin: to_u256(&amount_a_min)?,
                amountBMin: to_u256(&amount_b_min)?,
                to,
                deadline: deadline_uint,
            };
            encode(&call, args, &BigInt::zero())
        }
    };
    debug!(
        method = parameters.method_name,
        value = %parameters.value,
        "encoded add liquidity"
    );
    Ok(parameters)
}

/// `token_amounts` is `[token desired, token min, ether min]`; the desired ether is sent as
/// value.
fn add_liquidity_eth(
    token: &Token,
    token_amounts: [&BigInt; 3],
    ether_desired: &BigInt,
    to: Address,
    deadline: &BigInt,
) -> Result<SwapParameters, Error> {
    let [token_desired, token_min, ether_min] = token_amounts;
    let args = vec![
        CallArgument::address(token.address()),
        CallArgument::uint(token_desired),
        CallArgument::uint(token_min),
        CallArgument::uint(ether_min),
        CallArgument::address(to),
        CallArgument::uint(deadline),
    ];
    let call = addLiquidityETHCall {
        token: token.address(),
        amountTokenDesired: to_u256(token_desired)?,
        amountTokenMin: to_u256(token_min)?,
        amountETHMin: to_u256(ether_min)?,
        to,
        deadline: to_u256(deadline)?,
    };
    Ok(encode(&call, args, ether_desired))
}

/// Produces the on-chain method name and hex encoded arguments to withdraw
/// `decrease_percent`% of `balance` liquidity tokens from `pair`.
///
/// The deadline of a [`Expiry::Ttl`] is computed from the current system time.
///
/// ## Arguments
///
/// * `pair`: the pair to withdraw from
/// * `currency_a`, `currency_b`: the two currencies to receive, either may be native
/// * `total_supply`: total supply of the pair's liquidity token
/// * `balance`: liquidity tokens held by the caller
/// * `decrease_percent`: share of `balance` to burn, from 0 to 100
/// * `options`: options for the call parameters
#[allow(clippy::too_many_arguments)]
#[inline]
pub fn remove_call_parameters<TA, TB>(
    pair: &Pair,
    currency_a: &TA,
    currency_b: &TB,
    total_supply: &CurrencyAmount<Token>,
    balance: &CurrencyAmount<Token>,
    decrease_percent: u8,
    options: &TradeOptions,
) -> Result<SwapParameters, Error>
where
    TA: CurrencyTrait,
    TB: CurrencyTrait,
{
    remove_call_parameters_at(
        pair,
        currency_a,
        currency_b,
        total_supply,
        balance,
        decrease_percent,
        options,
        unix_timestamp(),
    )
}

/// [`remove_call_parameters`] with the current unix time supplied by the caller.
#[allow(clippy::too_many_arguments)]
pub fn remove_call_parameters_at<TA, TB>(
    pair: &Pair,
    currency_a: &TA,
    currency_b: &TB,
    total_supply: &CurrencyAmount<Token>,
    balance: &CurrencyAmount<Token>,
    decrease_percent: u8,
    options: &TradeOptions,
    now: u64,
) -> Result<SwapParameters, Error>
where
    TA: CurrencyTrait,
    TB: CurrencyTrait,
{
    let ether_a = currency_a.is_native();
    let ether_b = currency_b.is_native();
    let (to, deadline) = validate(options, ether_a, ether_b, now)?;

    let token_a = currency_a.wrapped().clone();
    let token_b = currency_b.wrapped().clone();
    if token_a.equals(&token_b) {
        return Err(Error::InvalidToken);
    }
    if !total_supply.currency.equals(&pair.liquidity_token)
        || !balance.currency.equals(&pair.liquidity_token)
        || decrease_percent > 100
    {
        return Err(Error::InvalidLiquidity);
    }
    let supply = total_supply.quotient();
    let balance = balance.quotient();
    if supply.is_zero() {
        return Err(Error::InsufficientLiquidity);
    }
    if balance > supply {
        return Err(Error::InvalidLiquidity);
    }
    let reserve_a = pair.reserve_of(&token_a)?.quotient();
    let reserve_b = pair.reserve_of(&token_b)?.quotient();

    let adjusted = slippage_adjusted(&options.allowed_slippage)?;
    let burned = balance * BigInt::from(decrease_percent);
    let remove_share = Fraction::new(burned.clone(), supply * 100);
    let amount_a_min =
        (Fraction::new(reserve_a, 1) * remove_share.clone() * adjusted.clone()).quotient();
    let amount_b_min = (Fraction::new(reserve_b, 1) * remove_share * adjusted).quotient();
    let liquidity = burned / 100;

    let parameters = match (ether_a, ether_b) {
        (true, true) => return Err(Error::NativeCurrencyConflict),
        (true, false) => remove_liquidity_eth(
            &token_b,
            &liquidity,
            [&amount_b_min, &amount_a_min],
            to,
            &deadline,
        )?,
        (false, true) => remove_liquidity_eth(
            &token_a,
            &liquidity,
            [&amount_a_min, &amount_b_min],
            to,
            &deadline,
        )?,
        (false, false) => {
            let args = vec![
                CallArgument::address(token_a.address()),
                CallArgument::address(token_b.address()),
                CallArgument::uint(&liquidity),
                CallArgument::uint(&amount_a_min),
                CallArgument::uint(&amount_b_min),
                CallArgument::address(to),
                CallArgument::uint(&deadline),
            ];
            let call = removeLiquidityCall {
                tokenA: token_a.address(),
                tokenB: token_b.address(),
                liquidity: to_u256(&liquidity)?,
                amountAMin: to_u256(&amount_a_min)?,
                amountBMin: to_u256(&amount_b_min)?,
                to,
                deadline: to_u256(&deadline)?,
            };
            encode(&call, args, &BigInt::zero())
        }
    };
    debug!(
        method = parameters.method_name,
        liquidity = %liquidity,
        "encoded remove liquidity"
    );
    Ok(parameters)
}

/// `minimums` is `[token min, ether min]`.
fn remove_liquidity_eth(
    token: &Token,
    liquidity: &BigInt,
    minimums: [&BigInt; 2],
    to: Address,
    deadline: &BigInt,
) -> Result<SwapParameters, Error> {
    let [token_min, ether_min] = minimums;
    let args = vec![
        CallArgument::address(token.address()),
        CallArgument::uint(liquidity),
        CallArgument::uint(token_min),
        CallArgument::uint(ether_min),
        CallArgument::address(to),
        CallArgument::uint(deadline),
    ];
    let call = removeLiquidityETHCall {
        token: token.address(),
        liquidity: to_u256(liquidity)?,
        amountTokenMin: to_u256(token_min)?,
        amountETHMin: to_u256(ether_min)?,
        to,
        deadline: to_u256(deadline)?,
    };
    Ok(encode(&call, args, &BigInt::zero()))
}
