use crate::{entities::Pair, error::Error};
use uniswap_sdk_core::prelude::{Currency as CurrencyTrait, *};

/// Represents a list of pairs through which a swap can occur
#[derive(Clone, PartialEq, Debug)]
pub struct Route<TInput: CurrencyTrait, TOutput: CurrencyTrait> {
    pub pairs: Vec<Pair>,
    /// The wrapped tokens visited by the swap, starting with the input and ending with the
    /// output.
    pub path: Vec<Token>,
    /// The input token
    pub input: TInput,
    /// The output token
    pub output: TOutput,
}

impl<TInput: CurrencyTrait, TOutput: CurrencyTrait> Route<TInput, TOutput> {
    /// Creates an instance of route.
    ///
    /// ## Arguments
    ///
    /// * `pairs`: An array of [`Pair`] objects, ordered by the route the swap will take
    /// * `input`: The input token
    /// * `output`: The output token
    pub fn new(pairs: Vec<Pair>, input: TInput, output: TOutput) -> Result<Self, Error> {
        let (first, last) = match (pairs.first(), pairs.last()) {
            (Some(first), Some(last)) => (first, last),
            _ => return Err(Error::InvalidRoute("PAIRS")),
        };
        let chain_id = first.chain_id();
        if !pairs.iter().all(|pair| pair.chain_id() == chain_id) {
            return Err(Error::ChainIdMismatch);
        }

        let wrapped_input = input.wrapped().clone();
        if !first.involves_token(&wrapped_input) {
            return Err(Error::InvalidRoute("INPUT"));
        }
        let wrapped_output = output.wrapped().clone();
        if !last.involves_token(&wrapped_output) {
            return Err(Error::InvalidRoute("OUTPUT"));
        }

        let mut path = Vec::with_capacity(pairs.len() + 1);
        let mut current = wrapped_input;
        for pair in &pairs {
            let next = if current.equals(pair.token0()) {
                pair.token1()
            } else if current.equals(pair.token1()) {
                pair.token0()
            } else {
                return Err(Error::InvalidRoute("PATH"));
            };
            path.push(current);
            current = next.clone();
        }
        if !current.equals(&wrapped_output) {
            return Err(Error::InvalidRoute("PATH"));
        }
        path.push(current);

        Ok(Self {
            pairs,
            path,
            input,
            output,
        })
    }

    pub fn chain_id(&self) -> u64 {
        self.pairs[0].chain_id()
    }

    /// Returns the mid price of the route, in raw output units per raw input unit.
    pub fn mid_price(&self) -> Result<Fraction, Error> {
        let mut price = Fraction::new(1, 1);
        for (pair, token) in self.pairs.iter().zip(&self.path) {
            price = price * pair.price_of(token)?;
        }
        Ok(price)
    }
}
