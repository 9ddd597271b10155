use crate::access::require_council;
use crate::ledger::TokenLedger;
use soroban_sdk::{log, Address, Env, Symbol};
use treasury_types::{Amount, Error};

/// Council transfer of this account's tokens to `to`
pub fn transfer(env: &Env, caller: &Address, to: &Address, amount: Amount) -> Result<(), Error> {
    require_council(env, caller)?;

    let ledger = TokenLedger::load(env)?;
    ledger.transfer(to, amount)?;

    env.events()
        .publish((Symbol::new(env, "transfer"),), (to.clone(), amount));
    log!(env, "transfer", to.clone(), amount);
    Ok(())
}

/// Council sets this account's allowance for `spender` to exactly `amount`
pub fn approve(env: &Env, caller: &Address, spender: &Address, amount: Amount) -> Result<(), Error> {
    require_council(env, caller)?;

    let ledger = TokenLedger::load(env)?;
    ledger.set_allowance(spender, amount)?;

    env.events()
        .publish((Symbol::new(env, "approve"),), (spender.clone(), amount));
    log!(env, "approve", spender.clone(), amount);
    Ok(())
}

/// Council spends the allowance `owner` granted to this account, sending
/// `amount` from `owner` to `to`
pub fn transfer_from(
    env: &Env,
    caller: &Address,
    owner: &Address,
    to: &Address,
    amount: Amount,
) -> Result<(), Error> {
    require_council(env, caller)?;

    let ledger = TokenLedger::load(env)?;
    ledger.transfer_from(owner, to, amount)?;

    env.events().publish(
        (Symbol::new(env, "transfer_from"),),
        (owner.clone(), to.clone(), amount),
    );
    log!(env, "transfer_from", owner.clone(), to.clone(), amount);
    Ok(())
}
