use crate::{entities::Route, error::Error};
use num_bigint::BigInt;
use uniswap_sdk_core::prelude::{Currency as CurrencyTrait, *};

/// Splits a slippage tolerance into a numerator and a positive denominator.
pub(crate) fn slippage_parts(slippage_tolerance: &Percent) -> (BigInt, BigInt) {
    let numerator = slippage_tolerance.numerator().clone();
    let denominator = slippage_tolerance.denominator().clone();
    if denominator < BigInt::from(0) {
        (-numerator, -denominator)
    } else {
        (numerator, denominator)
    }
}

/// Represents a trade executed against a list of pairs.
///
/// Does not account for slippage, i.e. trades that front run this trade and move the price.
#[derive(Clone, PartialEq, Debug)]
pub struct Trade<TInput: CurrencyTrait, TOutput: CurrencyTrait> {
    /// The route of the trade, i.e. which pairs the trade goes through and the input/output
    /// currencies.
    pub route: Route<TInput, TOutput>,
    /// The type of the trade, either exact in or exact out.
    pub trade_type: TradeType,
    /// The input amount for the trade assuming no slippage.
    pub input_amount: CurrencyAmount<TInput>,
    /// The output amount for the trade assuming no slippage.
    pub output_amount: CurrencyAmount<TOutput>,
}

impl<TInput: CurrencyTrait, TOutput: CurrencyTrait> Trade<TInput, TOutput> {
    /// Constructs an exact in trade with the given amount in and route
    ///
    /// ## Arguments
    ///
    /// * `route`: route of the exact in trade
    /// * `amount_in`: the amount being passed in
    pub fn exact_in(
        route: Route<TInput, TOutput>,
        amount_in: CurrencyAmount<TInput>,
    ) -> Result<Self, Error> {
        if !amount_in.currency.equals(&route.input) {
            return Err(Error::CurrencyMismatch);
        }
        let mut amount = CurrencyAmount::from_raw_amount(
            amount_in.currency.wrapped().clone(),
            amount_in.quotient(),
        )?;
        for pair in &route.pairs {
            let (output_amount, _) = pair.get_output_amount(&amount)?;
            amount = output_amount;
        }
        let output_amount = CurrencyAmount::from_raw_amount(route.output.clone(), amount.quotient())?;
        Ok(Self {
            route,
            trade_type: TradeType::ExactInput,
            input_amount: amount_in,
            output_amount,
        })
    }

    /// Constructs an exact out trade with the given amount out and route
    ///
    /// ## Arguments
    ///
    /// * `route`: route of the exact out trade
    /// * `amount_out`: the amount returned by the trade
    pub fn exact_out(
        route: Route<TInput, TOutput>,
        amount_out: CurrencyAmount<TOutput>,
    ) -> Result<Self, Error> {
        if !amount_out.currency.equals(&route.output) {
            return Err(Error::CurrencyMismatch);
        }
        let mut amount = CurrencyAmount::from_raw_amount(
            amount_out.currency.wrapped().clone(),
            amount_out.quotient(),
        )?;
        for pair in route.pairs.iter().rev() {
            let (input_amount, _) = pair.get_input_amount(&amount)?;
            amount = input_amount;
        }
        let input_amount = CurrencyAmount::from_raw_amount(route.input.clone(), amount.quotient())?;
        Ok(Self {
            route,
            trade_type: TradeType::ExactOutput,
            input_amount,
            output_amount: amount_out,
        })
    }

    /// Get the minimum amount that must be received from this trade for the given slippage
    /// tolerance
    ///
    /// ## Arguments
    ///
    /// * `slippage_tolerance`: tolerance of unfavorable slippage from the execution price of this
    ///   trade
    pub fn minimum_amount_out(
        &self,
        slippage_tolerance: &Percent,
    ) -> Result<CurrencyAmount<TOutput>, Error> {
        let (numerator, denominator) = slippage_parts(slippage_tolerance);
        if numerator < BigInt::from(0) {
            return Err(Error::InvalidSlippage);
        }
        match self.trade_type {
            TradeType::ExactOutput => Ok(self.output_amount.clone()),
            TradeType::ExactInput => {
                let slippage_adjusted_amount_out = Fraction::new(
                    self.output_amount.quotient() * &denominator,
                    &denominator + numerator,
                );
                Ok(CurrencyAmount::from_raw_amount(
                    self.output_amount.currency.clone(),
                    slippage_adjusted_amount_out.quotient(),
                )?)
            }
        }
    }

    /// Get the maximum amount in that can be spent via this trade for the given slippage
    /// tolerance
    ///
    /// ## Arguments
    ///
    /// * `slippage_tolerance`: tolerance of unfavorable slippage from the execution price of this
    ///   trade
    pub fn maximum_amount_in(
        &self,
        slippage_tolerance: &Percent,
    ) -> Result<CurrencyAmount<TInput>, Error> {
        let (numerator, denominator) = slippage_parts(slippage_tolerance);
        if numerator < BigInt::from(0) {
            return Err(Error::InvalidSlippage);
        }
        match self.trade_type {
            TradeType::ExactInput => Ok(self.input_amount.clone()),
            TradeType::ExactOutput => {
                let slippage_adjusted_amount_in = Fraction::new(
                    self.input_amount.quotient() * (&denominator + numerator),
                    denominator,
                );
                Ok(CurrencyAmount::from_raw_amount(
                    self.input_amount.currency.clone(),
                    slippage_adjusted_amount_in.quotient(),
                )?)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::*;

    fn route_0_1() -> Route<Token, Token> {
        Route::new(vec![PAIR_0_1.clone()], TOKEN0.clone(), TOKEN1.clone()).unwrap()
    }

    #[test]
    fn exact_in_through_two_pairs() {
        let route = Route::new(
            vec![PAIR_WETH_0.clone(), PAIR_0_1.clone()],
            ETHER.clone(),
            TOKEN1.clone(),
        )
        .unwrap();
        let trade =
            Trade::exact_in(route, CurrencyAmount::from_raw_amount(ETHER.clone(), 100).unwrap())
                .unwrap();
        assert_eq!(trade.trade_type, TradeType::ExactInput);
        assert_eq!(trade.input_amount.quotient(), BigInt::from(100));
        assert_eq!(trade.output_amount.quotient(), BigInt::from(82));
        assert_eq!(trade.output_amount.currency, *TOKEN1);
    }

    #[test]
    fn exact_out_through_two_pairs() {
        let route = Route::new(
            vec![PAIR_WETH_0.clone(), PAIR_0_1.clone()],
            ETHER.clone(),
            TOKEN1.clone(),
        )
        .unwrap();
        let trade =
            Trade::exact_out(route, CurrencyAmount::from_raw_amount(TOKEN1.clone(), 100).unwrap())
                .unwrap();
        assert_eq!(trade.trade_type, TradeType::ExactOutput);
        assert_eq!(trade.input_amount.quotient(), BigInt::from(127));
        assert!(BaseCurrency::is_native(&trade.input_amount.currency));
    }

    #[test]
    fn rejects_amount_in_other_currency() {
        assert_eq!(
            Trade::exact_in(
                route_0_1(),
                CurrencyAmount::from_raw_amount(TOKEN1.clone(), 100).unwrap()
            ),
            Err(Error::CurrencyMismatch)
        );
    }

    #[test]
    fn minimum_amount_out() {
        let trade = Trade::exact_in(
            route_0_1(),
            CurrencyAmount::from_raw_amount(TOKEN0.clone(), 100).unwrap(),
        )
        .unwrap();
        assert_eq!(trade.output_amount.quotient(), BigInt::from(90));
        let zero = Percent::new(0, 100);
        assert_eq!(
            trade.minimum_amount_out(&zero).unwrap().quotient(),
            BigInt::from(90)
        );
        assert_eq!(
            trade
                .minimum_amount_out(&Percent::new(5, 100))
                .unwrap()
                .quotient(),
            BigInt::from(85)
        );
        assert_eq!(
            trade
                .minimum_amount_out(&Percent::new(200, 100))
                .unwrap()
                .quotient(),
            BigInt::from(30)
        );
        assert_eq!(
            trade.maximum_amount_in(&Percent::new(5, 100)).unwrap(),
            trade.input_amount
        );
        assert_eq!(
            trade.minimum_amount_out(&Percent::new(-1, 100)),
            Err(Error::InvalidSlippage)
        );
    }

    #[test]
    fn maximum_amount_in() {
        let trade = Trade::exact_out(
            route_0_1(),
            CurrencyAmount::from_raw_amount(TOKEN1.clone(), 100).unwrap(),
        )
        .unwrap();
        assert_eq!(trade.input_amount.quotient(), BigInt::from(112));
        assert_eq!(
            trade
                .maximum_amount_in(&Percent::new(0, 100))
                .unwrap()
                .quotient(),
            BigInt::from(112)
        );
        assert_eq!(
            trade
                .maximum_amount_in(&Percent::new(5, 100))
                .unwrap()
                .quotient(),
            BigInt::from(117)
        );
        assert_eq!(
            trade
                .maximum_amount_in(&Percent::new(200, 100))
                .unwrap()
                .quotient(),
            BigInt::from(336)
        );
        assert_eq!(
            trade.minimum_amount_out(&Percent::new(5, 100)).unwrap(),
            trade.output_amount
        );
    }
}
