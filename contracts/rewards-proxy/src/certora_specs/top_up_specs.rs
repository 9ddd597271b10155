// ============================================================================
// TOP-UP SPECIFICATIONS
// ============================================================================
//
// KEY PROPERTIES:
// 1. Non-positive amounts are refused with InvalidAmount
// 2. With an allowance short of the amount, the transfer leg is refused
//    with InsufficientAllowance before any balance is considered
// 3. When both legs are accepted, their combined deltas are consistent
//
// ============================================================================

#[cfg(feature = "certora")]
use cvlr_soroban_derive::rule;

#[cfg(feature = "certora")]
use cvlr::asserts::{cvlr_assert, cvlr_assume};

#[cfg(feature = "certora")]
use crate::invariants::{top_up_deltas_consistent, TopUpSnapshot};
#[cfg(feature = "certora")]
use crate::ledger::{check_spend, increased_allowance};
#[cfg(feature = "certora")]
use crate::logic_v2::check_top_up_amount;
#[cfg(feature = "certora")]
use treasury_types::Error;

/// RULE: zero or negative top-up is refused
#[cfg(feature = "certora")]
#[rule]
pub fn non_positive_top_up_refused(amount: i128) {
    cvlr_assume!(amount <= 0);

    cvlr_assert!(check_top_up_amount(amount) == Err(Error::InvalidAmount));
}

/// RULE: allowance short of the amount fails the transfer leg
#[cfg(feature = "certora")]
#[rule]
pub fn short_allowance_refused(source_allowance: i128, source_balance: i128, amount: i128) {
    cvlr_assume!(check_top_up_amount(amount).is_ok());
    cvlr_assume!(source_allowance < amount);

    cvlr_assert!(
        check_spend(source_allowance, source_balance, amount) == Err(Error::InsufficientAllowance)
    );
}

/// RULE: accepted legs compose into consistent deltas
#[cfg(feature = "certora")]
#[rule]
pub fn accepted_legs_compose(
    source_balance: i128,
    destination_balance: i128,
    source_allowance: i128,
    distributor_allowance: i128,
    amount: i128,
) {
    cvlr_assume!(check_top_up_amount(amount).is_ok());
    cvlr_assume!(check_spend(source_allowance, source_balance, amount).is_ok());
    cvlr_assume!(destination_balance >= 0 && destination_balance <= i128::MAX - amount);
    cvlr_assume!(distributor_allowance >= 0);

    if let Ok(bumped) = increased_allowance(distributor_allowance, amount) {
        let before = TopUpSnapshot {
            source_balance,
            destination_balance,
            source_allowance,
            distributor_allowance,
        };
        let after = TopUpSnapshot {
            source_balance: source_balance - amount,
            destination_balance: destination_balance + amount,
            source_allowance: source_allowance - amount,
            distributor_allowance: bumped,
        };
        cvlr_assert!(top_up_deltas_consistent(&before, &after, amount));
    }
}

// ============================================================================
// TESTS (run with cargo test)
// ============================================================================

#[cfg(test)]
mod tests {
    use crate::invariants::{top_up_deltas_consistent, TopUpSnapshot};
    use crate::ledger::{check_spend, increased_allowance};
    use crate::logic_v2::check_top_up_amount;
    use treasury_types::Error;

    #[test]
    fn test_non_positive_top_up_refused() {
        for amount in [0i128, -1, i128::MIN] {
            assert_eq!(check_top_up_amount(amount), Err(Error::InvalidAmount));
        }
        assert_eq!(check_top_up_amount(1), Ok(()));
    }

    #[test]
    fn test_short_allowance_refused() {
        // Seeded source balance covers the amount; the allowance does not
        assert_eq!(
            check_spend(0, 10_000, 1000),
            Err(Error::InsufficientAllowance)
        );
        assert_eq!(
            check_spend(999, 10_000, 1000),
            Err(Error::InsufficientAllowance)
        );
    }

    #[test]
    fn test_accepted_legs_compose() {
        let before = TopUpSnapshot {
            source_balance: 10_000,
            destination_balance: 0,
            source_allowance: 1_000,
            distributor_allowance: 500,
        };
        check_top_up_amount(1_000).unwrap();
        check_spend(before.source_allowance, before.source_balance, 1_000).unwrap();
        let bumped = increased_allowance(before.distributor_allowance, 1_000).unwrap();

        let after = TopUpSnapshot {
            source_balance: 9_000,
            destination_balance: 1_000,
            source_allowance: 0,
            distributor_allowance: bumped,
        };
        assert!(top_up_deltas_consistent(&before, &after, 1_000));
        assert_eq!(bumped, 1_500);
    }
}
