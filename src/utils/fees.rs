//! Fee arithmetic for deposits and withdrawals. The platform keeps
//! `amount * fee_rate`; the user receives the remainder.

/// Outcome of applying the platform fee to a gross amount.
#[derive(Debug, Clone, Copy)]
pub struct FeeBreakdown {
    pub fee: f64,
    pub user_receives: f64,
    pub platform_earnings: f64,
}

/// Splits a gross amount into the user's share and the platform fee.
pub fn split_amount(amount: f64, fee_rate: f64) -> FeeBreakdown {
    let fee = amount * fee_rate;
    FeeBreakdown {
        fee,
        user_receives: amount - fee,
        platform_earnings: fee,
    }
}

/// Rounds a user-facing figure to 6 decimal places.
pub fn round6(value: f64) -> f64 {
    (value * 1_000_000.0).round() / 1_000_000.0
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    #[test]
    fn fee_and_user_share_sum_to_the_amount() {
        for &(amount, rate) in &[(2.0, 0.05), (0.0005, 0.02), (1234.567, 0.05)] {
            let split = split_amount(amount, rate);
            assert!((split.user_receives + split.fee - amount).abs() < EPS);
            assert!((split.fee - amount * rate).abs() < EPS);
            assert_eq!(split.platform_earnings, split.fee);
        }
    }

    #[test]
    fn example_withdrawal_split() {
        let split = split_amount(2.0, 0.05);
        assert!((split.fee - 0.1).abs() < EPS);
        assert!((split.user_receives - 1.9).abs() < EPS);
    }

    #[test]
    fn rounds_to_six_decimals() {
        assert_eq!(round6(1.2345678), 1.234568);
        assert_eq!(round6(1.9000000000000001), 1.9);
        assert_eq!(round6(0.0), 0.0);
    }
}
