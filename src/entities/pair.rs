use crate::{
    constants::{fee_for_chain, FACTORY_ADDRESS, FACTORY_ADDRESS_MAP, INIT_CODE_HASH, MINIMUM_LIQUIDITY},
    error::Error,
};
use alloy_primitives::{keccak256, Address};
use alloy_sol_types::SolValue;
use num_bigint::BigInt;
use num_traits::{Signed, Zero};
use uniswap_sdk_core::{prelude::*, token};

pub fn compute_pair_address(factory: Address, token_a: Address, token_b: Address) -> Address {
    let (token_0, token_1) = if token_a < token_b {
        (token_a, token_b)
    } else {
        (token_b, token_a)
    };
    factory.create2(
        keccak256((token_0, token_1).abi_encode_packed()),
        INIT_CODE_HASH,
    )
}

/// A snapshot of a pool's two sorted tokens and their reserves.
#[derive(Clone, PartialEq, Debug)]
pub struct Pair {
    pub liquidity_token: Token,
    token_amounts: [CurrencyAmount<Token>; 2],
}

impl Pair {
    pub fn get_address(token_a: &Token, token_b: &Token) -> Address {
        let factory_address = FACTORY_ADDRESS_MAP
            .get(&token_a.chain_id)
            .unwrap_or(&FACTORY_ADDRESS);
        compute_pair_address(*factory_address, token_a.address(), token_b.address())
    }

    pub fn new(
        token_amount_a: CurrencyAmount<Token>,
        token_amount_b: CurrencyAmount<Token>,
    ) -> Result<Self, Error> {
        let token_amounts = if token_amount_a
            .currency
            .sorts_before(&token_amount_b.currency)?
        {
            [token_amount_a, token_amount_b]
        } else {
            [token_amount_b, token_amount_a]
        };
        let liquidity_token = token!(
            token_amounts[0].currency.chain_id,
            Pair::get_address(&token_amounts[0].currency, &token_amounts[1].currency),
            18,
            "UNI-V2",
            "Uniswap V2"
        );
        Ok(Self {
            liquidity_token,
            token_amounts,
        })
    }

    /// Returns true if the token is either token0 or token1
    ///
    /// ## Arguments
    ///
    /// * `token`: token to check
    pub fn involves_token(&self, token: &Token) -> bool {
        token.equals(self.token0()) || token.equals(self.token1())
    }

    /// Returns the current mid price of the pair in terms of token0, i.e. the ratio of reserve1
    /// to reserve0
    pub fn token0_price(&self) -> Result<Fraction, Error> {
        if self.reserve0().quotient().is_zero() {
            return Err(Error::InsufficientReserves);
        }
        Ok(Fraction::new(
            self.reserve1().quotient(),
            self.reserve0().quotient(),
        ))
    }

    /// Returns the current mid price of the pair in terms of token1, i.e. the ratio of reserve0
    /// to reserve1
    pub fn token1_price(&self) -> Result<Fraction, Error> {
        if self.reserve1().quotient().is_zero() {
            return Err(Error::InsufficientReserves);
        }
        Ok(Fraction::new(
            self.reserve0().quotient(),
            self.reserve1().quotient(),
        ))
    }

    /// Return the price of the given token in terms of the other token in the pair.
    ///
    /// ## Arguments
    ///
    /// * `token`: token to return price of
    pub fn price_of(&self, token: &Token) -> Result<Fraction, Error> {
        if !self.involves_token(token) {
            return Err(Error::InvalidToken);
        }
        if token.equals(self.token0()) {
            self.token0_price()
        } else {
            self.token1_price()
        }
    }

    pub fn chain_id(&self) -> u64 {
        self.token0().chain_id
    }

    pub fn token0(&self) -> &Token {
        &self.token_amounts[0].currency
    }

    pub fn token1(&self) -> &Token {
        &self.token_amounts[1].currency
    }

    pub fn reserve0(&self) -> &CurrencyAmount<Token> {
        &self.token_amounts[0]
    }

    pub fn reserve1(&self) -> &CurrencyAmount<Token> {
        &self.token_amounts[1]
    }

    pub fn reserve_of(&self, token: &Token) -> Result<&CurrencyAmount<Token>, Error> {
        if !self.involves_token(token) {
            return Err(Error::InvalidToken);
        }
        Ok(if token.equals(self.token0()) {
            self.reserve0()
        } else {
            self.reserve1()
        })
    }

    fn other_token(&self, token: &Token) -> &Token {
        if token.equals(self.token0()) {
            self.token1()
        } else {
            self.token0()
        }
    }

    /// Amount of the other token received for `input_amount`, and the pair after the swap.
    pub fn get_output_amount(
        &self,
        input_amount: &CurrencyAmount<Token>,
    ) -> Result<(CurrencyAmount<Token>, Self), Error> {
        if !self.involves_token(&input_amount.currency) {
            return Err(Error::InvalidToken);
        }
        if self.reserve0().quotient().is_zero() || self.reserve1().quotient().is_zero() {
            return Err(Error::InsufficientReserves);
        }
        let output_token = self.other_token(&input_amount.currency);
        let input_reserve = self.reserve_of(&input_amount.currency)?;
        let output_reserve = self.reserve_of(output_token)?;
        let (fee_numerator, fee_denominator) = fee_for_chain(self.chain_id());

        let input_amount_with_fee = input_amount.quotient() * BigInt::from(fee_numerator);
        let numerator = &input_amount_with_fee * output_reserve.quotient();
        let denominator =
            input_reserve.quotient() * BigInt::from(fee_denominator) + &input_amount_with_fee;
        let output_amount =
            CurrencyAmount::from_raw_amount(output_token.clone(), numerator / denominator)?;

        if output_amount.quotient().is_zero() {
            return Err(Error::InsufficientInputAmount);
        }

        let pair = Self::new(
            input_reserve.add(input_amount)?,
            output_reserve.subtract(&output_amount)?,
        )?;
        Ok((output_amount, pair))
    }

    /// Amount of the other token required to receive `output_amount`, and the pair after the
    /// swap.
    pub fn get_input_amount(
        &self,
        output_amount: &CurrencyAmount<Token>,
    ) -> Result<(CurrencyAmount<Token>, Self), Error> {
        if !self.involves_token(&output_amount.currency) {
            return Err(Error::InvalidToken);
        }
        let output_reserve = self.reserve_of(&output_amount.currency)?;
        if self.reserve0().quotient().is_zero()
            || self.reserve1().quotient().is_zero()
            || output_amount.quotient() >= output_reserve.quotient()
        {
            return Err(Error::InsufficientReserves);
        }
        let input_token = self.other_token(&output_amount.currency);
        let input_reserve = self.reserve_of(input_token)?;
        let (fee_numerator, fee_denominator) = fee_for_chain(self.chain_id());

        let numerator =
            input_reserve.quotient() * output_amount.quotient() * BigInt::from(fee_denominator);
        let denominator = (output_reserve.quotient() - output_amount.quotient())
            * BigInt::from(fee_numerator);
        let input_amount = CurrencyAmount::from_raw_amount(
            input_token.clone(),
            numerator / denominator + BigInt::from(1),
        )?;

        let pair = Self::new(
            input_reserve.add(&input_amount)?,
            output_reserve.subtract(output_amount)?,
        )?;
        Ok((input_amount, pair))
    }

    /// Liquidity tokens minted for depositing both amounts given the current `total_supply`.
    pub fn get_liquidity_minted(
        &self,
        total_supply: &CurrencyAmount<Token>,
        token_amount_a: &CurrencyAmount<Token>,
        token_amount_b: &CurrencyAmount<Token>,
    ) -> Result<CurrencyAmount<Token>, Error> {
        if !total_supply.currency.equals(&self.liquidity_token) {
            return Err(Error::InvalidLiquidity);
        }
        let token_amounts = if token_amount_a
            .currency
            .sorts_before(&token_amount_b.currency)?
        {
            (token_amount_a, token_amount_b)
        } else {
            (token_amount_b, token_amount_a)
        };
        if !token_amounts.0.currency.equals(self.token0())
            || !token_amounts.1.currency.equals(self.token1())
        {
            return Err(Error::InvalidToken);
        }

        let liquidity = if total_supply.quotient().is_zero() {
            (token_amounts.0.quotient() * token_amounts.1.quotient()).sqrt()
                - BigInt::from(MINIMUM_LIQUIDITY)
        } else {
            if self.reserve0().quotient().is_zero() || self.reserve1().quotient().is_zero() {
                return Err(Error::InsufficientReserves);
            }
            let amount0 =
                (token_amounts.0.quotient() * total_supply.quotient()) / self.reserve0().quotient();
            let amount1 =
                (token_amounts.1.quotient() * total_supply.quotient()) / self.reserve1().quotient();
            amount0.min(amount1)
        };
        if liquidity.is_zero() || liquidity.is_negative() {
            return Err(Error::InsufficientInputAmount);
        }
        Ok(CurrencyAmount::from_raw_amount(self.liquidity_token.clone(), liquidity)?)
    }

    /// Amount of `token` redeemable for `liquidity`, accounting for the protocol fee when
    /// `fee_on` is set (`k_last` is then required).
    pub fn get_liquidity_value(
        &self,
        token: &Token,
        total_supply: &CurrencyAmount<Token>,
        liquidity: &CurrencyAmount<Token>,
        fee_on: bool,
        k_last: Option<BigInt>,
    ) -> Result<CurrencyAmount<Token>, Error> {
        if !self.involves_token(token) {
            return Err(Error::InvalidToken);
        }
        if !total_supply.currency.equals(&self.liquidity_token)
            || !liquidity.currency.equals(&self.liquidity_token)
            || liquidity.quotient() > total_supply.quotient()
        {
            return Err(Error::InvalidLiquidity);
        }

        let total_supply_adjusted = if fee_on {
            let k_last = k_last.ok_or(Error::InvalidLiquidity)?;
            if k_last.is_zero() {
                total_supply.clone()
            } else {
                let root_k = (self.reserve0().quotient() * self.reserve1().quotient()).sqrt();
                let root_k_last = k_last.sqrt();
                if root_k > root_k_last {
                    let numerator = total_supply.quotient() * (&root_k - &root_k_last);
                    let denominator = root_k * BigInt::from(5) + root_k_last;
                    let fee_liquidity = numerator / denominator;
                    total_supply.add(&CurrencyAmount::from_raw_amount(
                        self.liquidity_token.clone(),
                        fee_liquidity,
                    )?)?
                } else {
                    total_supply.clone()
                }
            }
        } else {
            total_supply.clone()
        };
        if total_supply_adjusted.quotient().is_zero() {
            return Err(Error::InsufficientLiquidity);
        }

        let result = liquidity.quotient() * self.reserve_of(token)?.quotient()
            / total_supply_adjusted.quotient();
        Ok(CurrencyAmount::from_raw_amount(token.clone(), result)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::*;
    use alloy_primitives::address;
    use once_cell::sync::Lazy;

    static USDC: Lazy<Token> = Lazy::new(|| {
        token!(
            1,
            "A0b86991c6218b36c1d19D4a2e9Eb0cE3606eB48",
            6,
            "USDC",
            "USD Coin"
        )
    });

    fn amount(token: &Token, raw: u64) -> CurrencyAmount<Token> {
        CurrencyAmount::from_raw_amount(token.clone(), raw).unwrap()
    }

    #[test]
    fn computes_mainnet_pair_address() {
        assert_eq!(
            Pair::get_address(&USDC, &WETH),
            address!("B4e16d0168e52d35CaCD2c6185b44281Ec28C9Dc")
        );
        assert_eq!(
            Pair::get_address(&WETH, &USDC),
            Pair::get_address(&USDC, &WETH)
        );
    }

    #[test]
    fn new_rejects_same_token() {
        assert!(matches!(
            Pair::new(amount(&DAI, 100), amount(&DAI, 100)),
            Err(Error::Core(_))
        ));
    }

    #[test]
    fn sorts_tokens() {
        let pair = Pair::new(amount(&USDC, 100), amount(&DAI, 101)).unwrap();
        assert_eq!(*pair.token0(), *DAI);
        assert_eq!(*pair.token1(), *USDC);
        assert_eq!(pair.reserve0().quotient(), BigInt::from(101));
        assert_eq!(pair.reserve1().quotient(), BigInt::from(100));
        assert_eq!(
            pair.liquidity_token.address(),
            Pair::get_address(&DAI, &USDC)
        );
    }

    #[test]
    fn prices() {
        let pair = Pair::new(amount(&USDC, 100), amount(&DAI, 101)).unwrap();
        assert_eq!(pair.token0_price().unwrap(), Fraction::new(100, 101));
        assert_eq!(pair.token1_price().unwrap(), Fraction::new(101, 100));
        assert_eq!(pair.price_of(&DAI).unwrap(), Fraction::new(100, 101));
        assert_eq!(pair.price_of(&WETH), Err(Error::InvalidToken));
    }

    #[test]
    fn reserve_of() {
        let pair = Pair::new(amount(&USDC, 100), amount(&DAI, 101)).unwrap();
        assert_eq!(pair.reserve_of(&USDC).unwrap().quotient(), BigInt::from(100));
        assert_eq!(pair.reserve_of(&WETH), Err(Error::InvalidToken));
    }

    #[test]
    fn output_amount_applies_fee() {
        let (output, next) = PAIR_0_1.get_output_amount(&amount(&TOKEN0, 100)).unwrap();
        assert_eq!(output.currency, *TOKEN1);
        assert_eq!(output.quotient(), BigInt::from(90));
        assert_eq!(next.reserve0().quotient(), BigInt::from(1100));
        assert_eq!(next.reserve1().quotient(), BigInt::from(910));
    }

    #[test]
    fn output_amount_requires_reserves() {
        let empty = Pair::new(amount(&TOKEN0, 0), amount(&TOKEN1, 0)).unwrap();
        assert_eq!(
            empty.get_output_amount(&amount(&TOKEN0, 100)),
            Err(Error::InsufficientReserves)
        );
        assert_eq!(
            PAIR_0_1.get_output_amount(&amount(&TOKEN0, 1)),
            Err(Error::InsufficientInputAmount)
        );
    }

    #[test]
    fn input_amount_rounds_up() {
        let (input, _) = PAIR_0_1.get_input_amount(&amount(&TOKEN1, 100)).unwrap();
        assert_eq!(input.currency, *TOKEN0);
        assert_eq!(input.quotient(), BigInt::from(112));
        assert_eq!(
            PAIR_0_1.get_input_amount(&amount(&TOKEN1, 1000)),
            Err(Error::InsufficientReserves)
        );
    }

    #[test]
    fn liquidity_minted_on_empty_pool() {
        let pair = Pair::new(amount(&TOKEN0, 0), amount(&TOKEN1, 0)).unwrap();
        let supply = amount(&pair.liquidity_token, 0);
        assert_eq!(
            pair.get_liquidity_minted(&supply, &amount(&TOKEN0, 1000), &amount(&TOKEN1, 1000)),
            Err(Error::InsufficientInputAmount)
        );
        assert_eq!(
            pair.get_liquidity_minted(&supply, &amount(&TOKEN0, 1_000_000), &amount(&TOKEN1, 1)),
            Err(Error::InsufficientInputAmount)
        );
        let liquidity = pair
            .get_liquidity_minted(&supply, &amount(&TOKEN0, 1001), &amount(&TOKEN1, 1001))
            .unwrap();
        assert_eq!(liquidity.quotient(), BigInt::from(1));
    }

    #[test]
    fn liquidity_minted_on_existing_pool() {
        let pair = Pair::new(amount(&TOKEN0, 10_000), amount(&TOKEN1, 10_000)).unwrap();
        let supply = amount(&pair.liquidity_token, 10_000);
        let liquidity = pair
            .get_liquidity_minted(&supply, &amount(&TOKEN1, 2000), &amount(&TOKEN0, 2000))
            .unwrap();
        assert_eq!(liquidity.quotient(), BigInt::from(2000));
        assert_eq!(
            pair.get_liquidity_minted(&amount(&TOKEN0, 1), &amount(&TOKEN0, 1), &amount(&TOKEN1, 1)),
            Err(Error::InvalidLiquidity)
        );
    }

    #[test]
    fn liquidity_minted_requires_both_reserves() {
        let pair = Pair::new(amount(&TOKEN0, 0), amount(&TOKEN1, 1000)).unwrap();
        let supply = amount(&pair.liquidity_token, 10);
        assert_eq!(
            pair.get_liquidity_minted(&supply, &amount(&TOKEN0, 5), &amount(&TOKEN1, 5)),
            Err(Error::InsufficientReserves)
        );
    }

    #[test]
    fn liquidity_value_without_fee() {
        let pair = Pair::new(amount(&TOKEN0, 1000), amount(&TOKEN1, 1000)).unwrap();
        let supply = amount(&pair.liquidity_token, 1000);
        let value = pair
            .get_liquidity_value(&TOKEN0, &supply, &supply, false, None)
            .unwrap();
        assert_eq!(value.quotient(), BigInt::from(1000));

        let half = amount(&pair.liquidity_token, 500);
        let value = pair
            .get_liquidity_value(&TOKEN1, &supply, &half, false, None)
            .unwrap();
        assert_eq!(value.quotient(), BigInt::from(500));
    }

    #[test]
    fn liquidity_value_with_fee() {
        let pair = Pair::new(amount(&TOKEN0, 1000), amount(&TOKEN1, 1000)).unwrap();
        let supply = amount(&pair.liquidity_token, 500);
        let value = pair
            .get_liquidity_value(&TOKEN0, &supply, &supply, true, Some(BigInt::from(250_000)))
            .unwrap();
        assert_eq!(value.quotient(), BigInt::from(917));
        assert_eq!(
            pair.get_liquidity_value(&TOKEN0, &supply, &supply, true, None),
            Err(Error::InvalidLiquidity)
        );
    }
}
