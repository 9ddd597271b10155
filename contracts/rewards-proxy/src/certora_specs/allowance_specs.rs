// ============================================================================
// ALLOWANCE SPECIFICATIONS
// ============================================================================
//
// 1. transfer-from beyond the allowance is refused, whatever the balance
// 2. an accepted transfer-from never drives the allowance below zero
// 3. the additive bump is exact and never wraps
//
// ============================================================================

#[cfg(feature = "certora")]
use cvlr_soroban_derive::rule;

#[cfg(feature = "certora")]
use cvlr::asserts::{cvlr_assert, cvlr_assume, cvlr_satisfy};

#[cfg(feature = "certora")]
use crate::invariants::allowance_increased;
#[cfg(feature = "certora")]
use crate::ledger::{check_spend, increased_allowance};
#[cfg(feature = "certora")]
use treasury_types::Error;

/// RULE: spending more than the allowance fails with InsufficientAllowance
#[cfg(feature = "certora")]
#[rule]
pub fn spend_beyond_allowance_refused(allowance: i128, balance: i128, amount: i128) {
    cvlr_assume!(amount >= 0);
    cvlr_assume!(allowance < amount);

    cvlr_assert!(check_spend(allowance, balance, amount) == Err(Error::InsufficientAllowance));
}

/// RULE: an accepted spend leaves a non-negative allowance and balance
#[cfg(feature = "certora")]
#[rule]
pub fn accepted_spend_bounded(allowance: i128, balance: i128, amount: i128) {
    cvlr_assume!(check_spend(allowance, balance, amount).is_ok());

    cvlr_assert!(amount >= 0);
    cvlr_assert!(allowance >= amount);
    cvlr_assert!(balance >= amount);
    cvlr_satisfy!(amount > 0);
}

/// RULE: increase is additive or refuses with AllowanceOverflow
#[cfg(feature = "certora")]
#[rule]
pub fn increase_additive_or_overflow(before: i128, amount: i128) {
    cvlr_assume!(before >= 0);
    cvlr_assume!(amount >= 0);

    match increased_allowance(before, amount) {
        Ok(after) => cvlr_assert!(allowance_increased(before, after, amount)),
        Err(err) => {
            cvlr_assert!(err == Error::AllowanceOverflow);
            cvlr_assert!(before > i128::MAX - amount);
        }
    }
}

// ============================================================================
// TESTS (run with cargo test)
// ============================================================================

#[cfg(test)]
mod tests {
    use crate::invariants::allowance_increased;
    use crate::ledger::{check_spend, increased_allowance};
    use treasury_types::Error;

    #[test]
    fn test_spend_beyond_allowance_refused_for_any_balance() {
        for balance in [0i128, 999, 1000, i128::MAX] {
            assert_eq!(
                check_spend(999, balance, 1000),
                Err(Error::InsufficientAllowance)
            );
        }
    }

    #[test]
    fn test_accepted_spend_bounded() {
        for (allowance, balance, amount) in [(1000i128, 1000i128, 1000i128), (1000, 5000, 1), (0, 0, 0)] {
            assert!(check_spend(allowance, balance, amount).is_ok());
            assert!(allowance - amount >= 0);
            assert!(balance - amount >= 0);
        }
    }

    #[test]
    fn test_increase_additive_or_overflow() {
        let after = increased_allowance(500, 1000).unwrap();
        assert!(allowance_increased(500, after, 1000));
        assert_eq!(
            increased_allowance(i128::MAX - 1, 2),
            Err(Error::AllowanceOverflow)
        );
        assert_eq!(increased_allowance(i128::MAX - 1, 1), Ok(i128::MAX));
    }
}
