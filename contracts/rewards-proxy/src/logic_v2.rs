use crate::access::require_council;
use crate::ledger::TokenLedger;
use crate::storage::get_top_up;
use soroban_sdk::{log, Address, Env, Symbol};
use treasury_types::{is_valid_top_up_amount, Amount, Error};

#[cfg(debug_assertions)]
use crate::invariants::{top_up_deltas_consistent, TopUpSnapshot};

/// Replenish this (claimable rewards) account from the source account and
/// extend the distributor's allowance by the same amount.
///
/// Steps:
/// 1. Reject non-positive amounts
/// 2. Authorize the council against this account
/// 3. Spend `amount` of the source -> this allowance into this account
/// 4. Bump this -> distributor allowance by `amount` (additive)
///
/// Any failure in step 3 or 4 is returned as-is; the host rolls back the
/// whole invocation, so step 3 never stands without step 4.
pub fn top_up_claimable_rewards(env: &Env, caller: &Address, amount: Amount) -> Result<(), Error> {
    check_top_up_amount(amount)?;
    require_council(env, caller)?;

    let top_up = get_top_up(env)?;
    let ledger = TokenLedger::load(env)?;
    let destination = ledger.account().clone();

    #[cfg(debug_assertions)]
    let before = snapshot(&ledger, &top_up.source, &top_up.distributor);

    ledger.transfer_from(&top_up.source, &destination, amount)?;
    let distributor_allowance = ledger.increase_allowance(&top_up.distributor, amount)?;

    #[cfg(debug_assertions)]
    {
        let after = snapshot(&ledger, &top_up.source, &top_up.distributor);
        assert!(top_up_deltas_consistent(&before, &after, amount));
    }

    env.events().publish(
        (Symbol::new(env, "top_up"),),
        (top_up.source, top_up.distributor, amount),
    );
    log!(env, "top_up", amount, distributor_allowance);
    Ok(())
}

/// Top-ups move a strictly positive amount
pub fn check_top_up_amount(amount: Amount) -> Result<(), Error> {
    if is_valid_top_up_amount(amount) {
        Ok(())
    } else {
        Err(Error::InvalidAmount)
    }
}

#[cfg(debug_assertions)]
fn snapshot(ledger: &TokenLedger, source: &Address, distributor: &Address) -> TopUpSnapshot {
    let destination = ledger.account();
    TopUpSnapshot {
        source_balance: ledger.balance(source),
        destination_balance: ledger.balance(destination),
        source_allowance: ledger.allowance(source, destination),
        distributor_allowance: ledger.allowance(destination, distributor),
    }
}
