use soroban_sdk::{contracttype, Address};

/// Per-account configuration - written once at initialization
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ProxyConfig {
    /// The single principal allowed to act on behalf of this account
    pub council: Address,
    /// Token ledger (SEP-41 token contract) holding the account's balance
    pub token: Address,
}

/// Top-up configuration of the claimable rewards account
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TopUpConfig {
    /// Future rewards account whose allowance is spent by a top-up
    pub source: Address,
    /// Third party whose allowance is bumped by every top-up
    pub distributor: Address,
}
