use anchor_lang::prelude::*;

use crate::constants::BPS_SCALE;
use crate::errors::GameError;

/// Constant-product pricing over a virtual base reserve.
///
/// With `B = base_reserve + virtual_base` and `T = token_reserve`, buying
/// `n` tokens costs `ceil(B*n / (T-n))` lamports and selling `n` returns
/// `floor(B*n / (T+n))`. Unit buy price rises as the token reserve shrinks
/// and unit sell price falls as it grows, and the ceil/floor rounding plus
/// the spread fee make a buy/sell round trip never profitable. The curve
/// never sells its last token (`n < T`); the asymptote prices it out.
///
/// Quotes are recomputed inside `buy`/`sell` from live state, so no trade
/// can slip between a quote and its execution.
pub fn quote_buy(
    base_reserve: u64,
    virtual_base: u64,
    token_reserve: u64,
    amount: u64,
) -> Result<u64> {
    require!(amount > 0, GameError::AmountZero);
    require!(amount < token_reserve, GameError::InsufficientReserve);

    let b = (base_reserve as u128)
        .checked_add(virtual_base as u128)
        .ok_or(GameError::MathOverflow)?;
    let n = amount as u128;
    let denom = (token_reserve as u128) - n;

    let cost = b
        .checked_mul(n)
        .ok_or(GameError::MathOverflow)?
        .checked_add(denom - 1)
        .ok_or(GameError::MathOverflow)?
        .checked_div(denom)
        .ok_or(GameError::MathOverflow)?;

    u64::try_from(cost).map_err(|_| GameError::MathOverflow.into())
}

pub fn quote_sell(
    base_reserve: u64,
    virtual_base: u64,
    token_reserve: u64,
    amount: u64,
) -> Result<u64> {
    require!(amount > 0, GameError::AmountZero);

    let b = (base_reserve as u128)
        .checked_add(virtual_base as u128)
        .ok_or(GameError::MathOverflow)?;
    let n = amount as u128;
    let denom = (token_reserve as u128)
        .checked_add(n)
        .ok_or(GameError::MathOverflow)?;

    let proceeds = b
        .checked_mul(n)
        .ok_or(GameError::MathOverflow)?
        .checked_div(denom)
        .ok_or(GameError::MathOverflow)?;

    u64::try_from(proceeds).map_err(|_| GameError::MathOverflow.into())
}

/// Fee taken on top of a buy and out of a sell, routed to the jackpot pool.
pub fn spread_fee(value: u64, spread_bps: u64) -> Result<u64> {
    let fee = (value as u128)
        .checked_mul(spread_bps as u128)
        .ok_or(GameError::MathOverflow)?
        .checked_div(BPS_SCALE as u128)
        .ok_or(GameError::MathOverflow)?;
    u64::try_from(fee).map_err(|_| GameError::MathOverflow.into())
}

#[cfg(test)]
mod tests {
    use super::*;

    const VIRTUAL_BASE: u64 = 1_000_000_000; // 1 SOL
    const RESERVE: u64 = 110_000_000_000_000; // 110M tokens at 6 decimals

    #[test]
    fn unit_buy_price_rises_as_reserve_shrinks() {
        let chunk = 1_000_000_000_000u64;
        let mut base = 0u64;
        let mut tokens = RESERVE;
        let mut last_cost = 0u64;
        for _ in 0..20 {
            let cost = quote_buy(base, VIRTUAL_BASE, tokens, chunk).unwrap();
            assert!(cost >= last_cost);
            last_cost = cost;
            base += cost;
            tokens -= chunk;
        }
    }

    #[test]
    fn unit_sell_price_falls_as_reserve_grows() {
        let chunk = 1_000_000_000_000u64;
        let mut base = 5_000_000_000u64;
        let mut tokens = RESERVE;
        let mut last_proceeds = u64::MAX;
        for _ in 0..4 {
            let proceeds = quote_sell(base, VIRTUAL_BASE, tokens, chunk).unwrap();
            assert!(proceeds <= last_proceeds);
            last_proceeds = proceeds;
            base -= proceeds;
            tokens += chunk;
        }
    }

    #[test]
    fn spread_holds_at_equal_state() {
        for n in [1u64, 999, 1_000_000, 40_000_000_000_000] {
            let buy = quote_buy(0, VIRTUAL_BASE, RESERVE, n).unwrap();
            let sell = quote_sell(0, VIRTUAL_BASE, RESERVE, n).unwrap();
            assert!(buy >= sell, "spread inverted at n={n}");
        }
    }

    #[test]
    fn round_trip_never_profits() {
        for n in [1u64, 12_345, 1_000_000_000, 50_000_000_000_000] {
            for spread_bps in [0u64, 100] {
                let cost = quote_buy(0, VIRTUAL_BASE, RESERVE, n).unwrap();
                let fee_in = spread_fee(cost, spread_bps).unwrap();
                // State after the buy
                let base = cost;
                let tokens = RESERVE - n;
                let proceeds = quote_sell(base, VIRTUAL_BASE, tokens, n).unwrap();
                let fee_out = spread_fee(proceeds, spread_bps).unwrap();
                assert!(
                    proceeds - fee_out <= cost + fee_in,
                    "round trip profited at n={n} spread={spread_bps}"
                );
            }
        }
    }

    #[test]
    fn buy_rejects_draining_the_reserve() {
        assert!(quote_buy(0, VIRTUAL_BASE, 1_000, 1_000).is_err());
        assert!(quote_buy(0, VIRTUAL_BASE, 1_000, 1_001).is_err());
        assert!(quote_buy(0, VIRTUAL_BASE, 1_000, 999).is_ok());
    }

    #[test]
    fn zero_amount_is_rejected() {
        assert!(quote_buy(0, VIRTUAL_BASE, RESERVE, 0).is_err());
        assert!(quote_sell(0, VIRTUAL_BASE, RESERVE, 0).is_err());
    }

    #[test]
    fn token_reserve_is_conserved_over_trades() {
        // Reserve accounting is plain addition either side of the curve.
        let mut tokens = RESERVE;
        let trades: &[(bool, u64)] = &[
            (true, 5_000_000),
            (true, 1),
            (false, 2_500_000),
            (true, 700),
            (false, 2_500_701),
        ];
        let mut bought = 0u64;
        let mut sold = 0u64;
        for &(is_buy, n) in trades {
            if is_buy {
                tokens -= n;
                bought += n;
            } else {
                tokens += n;
                sold += n;
            }
        }
        assert_eq!(tokens, RESERVE - bought + sold);
        assert_eq!(tokens, RESERVE);
    }
}
