use crate::invariants;
use crate::storage::get_config;
use soroban_sdk::{token, Address, Env};
use treasury_types::{is_valid_amount, Amount, Error};

/// Token ledger as seen from this custodial account.
///
/// Wraps the SEP-41 client of the configured token. Every mutating method
/// pre-checks balance and allowance so shortfalls surface as the proxy's own
/// error kinds instead of a trap inside the token contract.
pub struct TokenLedger<'a> {
    env: Env,
    client: token::Client<'a>,
    account: Address,
}

impl<'a> TokenLedger<'a> {
    /// Ledger for the token configured on this account
    pub fn load(env: &Env) -> Result<Self, Error> {
        let config = get_config(env)?;
        Ok(Self {
            env: env.clone(),
            client: token::Client::new(env, &config.token),
            account: env.current_contract_address(),
        })
    }

    /// This custodial account
    pub fn account(&self) -> &Address {
        &self.account
    }

    pub fn balance(&self, id: &Address) -> Amount {
        self.client.balance(id)
    }

    pub fn allowance(&self, owner: &Address, spender: &Address) -> Amount {
        self.client.allowance(owner, spender)
    }

    /// Move `amount` from this account to `to`
    pub fn transfer(&self, to: &Address, amount: Amount) -> Result<(), Error> {
        let debited_before = self.balance(&self.account);
        check_debit(debited_before, amount)?;
        #[cfg(debug_assertions)]
        let credited_before = self.balance(to);

        self.client.transfer(&self.account, to, &amount);

        #[cfg(debug_assertions)]
        assert!(invariants::transfer_conserves(
            *to == self.account,
            debited_before,
            self.balance(&self.account),
            credited_before,
            self.balance(to),
            amount,
        ));
        Ok(())
    }

    /// Set (replace) the allowance of `spender` over this account.
    ///
    /// SEP-41 allowances carry an expiration ledger. The allowance is written
    /// with the furthest one the network accepts
    /// (`max_live_until_ledger`); past that ledger the token reports zero
    /// and a new approve is needed.
    pub fn set_allowance(&self, spender: &Address, amount: Amount) -> Result<(), Error> {
        check_amount(amount)?;
        let expiration_ledger = self.env.ledger().max_live_until_ledger();
        self.client
            .approve(&self.account, spender, &amount, &expiration_ledger);

        debug_assert!(invariants::allowance_replaced(
            self.allowance(&self.account, spender),
            amount,
        ));
        Ok(())
    }

    /// Add `amount` on top of the current allowance of `spender`.
    ///
    /// Returns the new allowance. Re-approving also pushes the allowance
    /// expiration out to the furthest ledger the network accepts.
    pub fn increase_allowance(&self, spender: &Address, amount: Amount) -> Result<Amount, Error> {
        let before = self.allowance(&self.account, spender);
        let after = increased_allowance(before, amount)?;
        let expiration_ledger = self.env.ledger().max_live_until_ledger();
        self.client
            .approve(&self.account, spender, &after, &expiration_ledger);

        debug_assert!(invariants::allowance_increased(
            before,
            self.allowance(&self.account, spender),
            amount,
        ));
        Ok(after)
    }

    /// Spend `amount` of the (owner -> this account) allowance, moving the
    /// tokens from `owner` to `to`.
    ///
    /// Allowance is checked before balance.
    pub fn transfer_from(&self, owner: &Address, to: &Address, amount: Amount) -> Result<(), Error> {
        let allowance_before = self.allowance(owner, &self.account);
        let debited_before = self.balance(owner);
        check_spend(allowance_before, debited_before, amount)?;
        #[cfg(debug_assertions)]
        let credited_before = self.balance(to);

        self.client
            .transfer_from(&self.account, owner, to, &amount);

        debug_assert!(invariants::allowance_consumed(
            allowance_before,
            self.allowance(owner, &self.account),
            amount,
        ));
        #[cfg(debug_assertions)]
        assert!(invariants::transfer_conserves(
            owner == to,
            debited_before,
            self.balance(owner),
            credited_before,
            self.balance(to),
            amount,
        ));
        Ok(())
    }
}

// === Decisions ===
// Pure checks behind every ledger mutation, kept free of host calls so the
// Certora rules can state properties over them directly.

pub fn check_amount(amount: Amount) -> Result<(), Error> {
    if is_valid_amount(amount) {
        Ok(())
    } else {
        Err(Error::InvalidAmount)
    }
}

/// Debit of `amount` from an account holding `balance`
pub fn check_debit(balance: Amount, amount: Amount) -> Result<(), Error> {
    check_amount(amount)?;
    if balance < amount {
        return Err(Error::InsufficientBalance);
    }
    Ok(())
}

/// Transfer-from of `amount` against `allowance`, debiting an owner holding
/// `balance`. Allowance is checked before balance.
pub fn check_spend(allowance: Amount, balance: Amount, amount: Amount) -> Result<(), Error> {
    check_amount(amount)?;
    if allowance < amount {
        return Err(Error::InsufficientAllowance);
    }
    check_debit(balance, amount)
}

/// Allowance after adding `amount` on top of `before`
pub fn increased_allowance(before: Amount, amount: Amount) -> Result<Amount, Error> {
    check_amount(amount)?;
    before.checked_add(amount).ok_or(Error::AllowanceOverflow)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_debit() {
        assert_eq!(check_debit(1000, 1000), Ok(()));
        assert_eq!(check_debit(1000, 0), Ok(()));
        assert_eq!(check_debit(999, 1000), Err(Error::InsufficientBalance));
        assert_eq!(check_debit(1000, -1), Err(Error::InvalidAmount));
    }

    #[test]
    fn test_check_spend_allowance_first() {
        assert_eq!(check_spend(1000, 1000, 1000), Ok(()));
        // Both short: allowance wins
        assert_eq!(check_spend(10, 10, 1000), Err(Error::InsufficientAllowance));
        assert_eq!(check_spend(5000, 10, 1000), Err(Error::InsufficientBalance));
    }

    #[test]
    fn test_increased_allowance() {
        assert_eq!(increased_allowance(500, 1000), Ok(1500));
        assert_eq!(increased_allowance(Amount::MAX, 1), Err(Error::AllowanceOverflow));
        assert_eq!(increased_allowance(0, -1), Err(Error::InvalidAmount));
    }
}
