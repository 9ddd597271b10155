// ============================================================================
// INVARIANTS MODULE
// ============================================================================
//
// Pure predicates over before/after snapshots of ledger state. The ledger
// adapter and the top-up logic check them with `debug_assert!` after every
// mutation (active in tests and in the `release-with-logs` profile), and the
// Certora rules in `certora_specs` are stated over them.
//
// CATEGORIES:
//
// 1. CONSERVATION
//    - A transfer debits exactly what it credits
//
// 2. ALLOWANCE
//    - approve replaces the prior value
//    - transfer-from consumes exactly the moved amount, never below zero
//    - top-up increases the distributor allowance additively
//
// 3. TOP-UP COMPOSITION
//    - All four deltas of a top-up share the same amount
//
// ============================================================================

use treasury_types::Amount;

// ============================================================================
// CONSERVATION
// ============================================================================

/// Invariant: a transfer of `amount` from X to Y conserves supply
///
/// Property:
///   X_before - X_after == amount && Y_after - Y_before == amount
///
/// A self-transfer (X == Y) must leave the balance untouched.
pub fn transfer_conserves(
    self_transfer: bool,
    debited_before: Amount,
    debited_after: Amount,
    credited_before: Amount,
    credited_after: Amount,
    amount: Amount,
) -> bool {
    if self_transfer {
        return debited_before == debited_after && credited_before == credited_after;
    }
    debited_before.checked_sub(debited_after) == Some(amount)
        && credited_after.checked_sub(credited_before) == Some(amount)
}

// ============================================================================
// ALLOWANCE
// ============================================================================

/// Invariant: approve sets the allowance to exactly `amount`
pub fn allowance_replaced(after: Amount, amount: Amount) -> bool {
    after == amount
}

/// Invariant: transfer-from consumes exactly `amount`
///
/// Property:
///   before >= amount && after == before - amount && after >= 0
pub fn allowance_consumed(before: Amount, after: Amount, amount: Amount) -> bool {
    before >= amount && after >= 0 && before.checked_sub(amount) == Some(after)
}

/// Invariant: increase_allowance adds exactly `amount`
pub fn allowance_increased(before: Amount, after: Amount, amount: Amount) -> bool {
    before.checked_add(amount) == Some(after)
}

// ============================================================================
// TOP-UP COMPOSITION
// ============================================================================

/// The four ledger values a top-up touches
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TopUpSnapshot {
    pub source_balance: Amount,
    pub destination_balance: Amount,
    /// source -> destination
    pub source_allowance: Amount,
    /// destination -> distributor
    pub distributor_allowance: Amount,
}

/// Invariant: a successful top-up moves all four values by the same amount
///
/// Property:
///   source_balance -n, destination_balance +n,
///   source_allowance -n, distributor_allowance +n
pub fn top_up_deltas_consistent(
    before: &TopUpSnapshot,
    after: &TopUpSnapshot,
    amount: Amount,
) -> bool {
    amount > 0
        && transfer_conserves(
            false,
            before.source_balance,
            after.source_balance,
            before.destination_balance,
            after.destination_balance,
            amount,
        )
        && allowance_consumed(before.source_allowance, after.source_allowance, amount)
        && allowance_increased(
            before.distributor_allowance,
            after.distributor_allowance,
            amount,
        )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seeded() -> TopUpSnapshot {
        TopUpSnapshot {
            source_balance: 10_000,
            destination_balance: 0,
            source_allowance: 1_000,
            distributor_allowance: 0,
        }
    }

    #[test]
    fn test_transfer_conserves() {
        assert!(transfer_conserves(false, 1000, 400, 0, 600, 600));
        assert!(!transfer_conserves(false, 1000, 400, 0, 500, 600)); // Credit short
        assert!(!transfer_conserves(false, 1000, 500, 0, 600, 600)); // Debit short
        assert!(transfer_conserves(false, 1000, 1000, 5, 5, 0)); // Zero amount
    }

    #[test]
    fn test_self_transfer_is_neutral() {
        assert!(transfer_conserves(true, 1000, 1000, 1000, 1000, 300));
        assert!(!transfer_conserves(true, 1000, 700, 1000, 700, 300));
    }

    #[test]
    fn test_allowance_replaced() {
        assert!(allowance_replaced(300, 300));
        assert!(!allowance_replaced(1300, 300)); // Additive would be wrong
    }

    #[test]
    fn test_allowance_consumed() {
        assert!(allowance_consumed(1000, 0, 1000)); // Consume all
        assert!(allowance_consumed(1000, 400, 600));
        assert!(!allowance_consumed(500, -500, 1000)); // Below zero
        assert!(!allowance_consumed(1000, 1000, 600)); // Not consumed
    }

    #[test]
    fn test_allowance_increased() {
        assert!(allowance_increased(500, 1500, 1000));
        assert!(!allowance_increased(500, 1000, 1000)); // Replaced instead
        assert!(!allowance_increased(Amount::MAX, Amount::MAX, 1)); // Overflow
    }

    #[test]
    fn test_top_up_deltas_consistent() {
        let before = seeded();
        let after = TopUpSnapshot {
            source_balance: 9_000,
            destination_balance: 1_000,
            source_allowance: 0,
            distributor_allowance: 1_000,
        };
        assert!(top_up_deltas_consistent(&before, &after, 1_000));

        // Distributor allowance untouched
        let mut partial = after.clone();
        partial.distributor_allowance = 0;
        assert!(!top_up_deltas_consistent(&before, &partial, 1_000));

        // Zero top-up is never consistent
        assert!(!top_up_deltas_consistent(&before, &before, 0));
    }
}
