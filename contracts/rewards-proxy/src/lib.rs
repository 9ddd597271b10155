#![no_std]

mod access;
#[cfg(any(test, feature = "certora"))]
mod certora_specs;
mod invariants;
mod ledger;
mod logic_v1;
mod logic_v2;
mod storage;

use ledger::TokenLedger;
use soroban_sdk::{contract, contractimpl, log, Address, Env, Symbol};
use storage::{get_config, get_top_up, has_config, has_top_up, set_config, set_top_up};
use treasury_types::{Amount, Error, ProxyCall, ProxyConfig, TopUpConfig};

/// Custodial rewards account.
///
/// One instance holds the future rewards, another the claimable rewards.
/// Every state-changing entry point takes the calling principal explicitly and
/// only proceeds for the council configured on that instance.
#[contract]
pub struct RewardsProxy;

#[contractimpl]
impl RewardsProxy {
    /// Initialize the account with its council and token ledger
    pub fn initialize(env: Env, council: Address, token: Address) -> Result<(), Error> {
        if has_config(&env) {
            return Err(Error::AlreadyInitialized);
        }

        council.require_auth();

        set_config(&env, &ProxyConfig { council, token });
        Ok(())
    }

    /// Fix the source account and distributor used by top-ups.
    ///
    /// Only the claimable rewards account needs this. Can be set once.
    pub fn configure_top_up(
        env: Env,
        caller: Address,
        source: Address,
        distributor: Address,
    ) -> Result<(), Error> {
        access::require_council(&env, &caller)?;
        if has_top_up(&env) {
            return Err(Error::AlreadyInitialized);
        }
        if source == env.current_contract_address() {
            return Err(Error::SelfTopUp);
        }

        set_top_up(
            &env,
            &TopUpConfig {
                source: source.clone(),
                distributor: distributor.clone(),
            },
        );

        env.events().publish(
            (Symbol::new(&env, "top_up_configured"),),
            (source, distributor),
        );
        Ok(())
    }

    /// Hand the account over to a new council
    pub fn set_council(env: Env, caller: Address, new_council: Address) -> Result<(), Error> {
        access::require_council(&env, &caller)?;

        let mut config = get_config(&env)?;
        config.council = new_council.clone();
        set_config(&env, &config);

        env.events()
            .publish((Symbol::new(&env, "council_set"),), new_council.clone());
        log!(&env, "council_set", new_council);
        Ok(())
    }

    // === Transfer Authorization ===

    /// Send `amount` of this account's tokens to `to`
    pub fn transfer(env: Env, caller: Address, to: Address, amount: Amount) -> Result<(), Error> {
        logic_v1::transfer(&env, &caller, &to, amount)
    }

    /// Set this account's allowance for `spender` to `amount` (replaces)
    pub fn approve(
        env: Env,
        caller: Address,
        spender: Address,
        amount: Amount,
    ) -> Result<(), Error> {
        logic_v1::approve(&env, &caller, &spender, amount)
    }

    /// Spend the allowance `owner` granted this account, sending to `to`
    pub fn transfer_from(
        env: Env,
        caller: Address,
        owner: Address,
        to: Address,
        amount: Amount,
    ) -> Result<(), Error> {
        logic_v1::transfer_from(&env, &caller, &owner, &to, amount)
    }

    // === Reward Top-Up ===

    /// Pull `amount` from the source account and extend the distributor's
    /// allowance by the same amount
    pub fn top_up_claimable_rewards(env: Env, caller: Address, amount: Amount) -> Result<(), Error> {
        logic_v2::top_up_claimable_rewards(&env, &caller, amount)
    }

    /// Dispatch a call message on behalf of `caller`
    pub fn execute(env: Env, caller: Address, call: ProxyCall) -> Result<(), Error> {
        match call {
            ProxyCall::Transfer(to, amount) => logic_v1::transfer(&env, &caller, &to, amount),
            ProxyCall::Approve(spender, amount) => {
                logic_v1::approve(&env, &caller, &spender, amount)
            }
            ProxyCall::TransferFrom(owner, to, amount) => {
                logic_v1::transfer_from(&env, &caller, &owner, &to, amount)
            }
            ProxyCall::TopUpClaimableRewards(amount) => {
                logic_v2::top_up_claimable_rewards(&env, &caller, amount)
            }
        }
    }

    // === View Functions ===

    /// Token balance of `id`
    pub fn balance(env: Env, id: Address) -> Result<Amount, Error> {
        Ok(TokenLedger::load(&env)?.balance(&id))
    }

    /// Remaining allowance of `spender` over `owner`
    pub fn allowance(env: Env, owner: Address, spender: Address) -> Result<Amount, Error> {
        Ok(TokenLedger::load(&env)?.allowance(&owner, &spender))
    }

    /// Whether `caller` is this account's council
    pub fn is_council(env: Env, caller: Address) -> Result<bool, Error> {
        access::is_council(&env, &caller)
    }

    pub fn council(env: Env) -> Result<Address, Error> {
        Ok(get_config(&env)?.council)
    }

    pub fn token(env: Env) -> Result<Address, Error> {
        Ok(get_config(&env)?.token)
    }

    pub fn top_up_config(env: Env) -> Result<TopUpConfig, Error> {
        get_top_up(&env)
    }
}
