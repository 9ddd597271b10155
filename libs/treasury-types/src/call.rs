use soroban_sdk::{contracttype, Address};

use crate::Amount;

/// Call message accepted by the proxy's `execute` entry point.
///
/// Each variant carries the positional arguments of the matching direct
/// entry point, minus the caller.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ProxyCall {
    /// (to, amount)
    Transfer(Address, Amount),
    /// (spender, amount)
    Approve(Address, Amount),
    /// (owner, to, amount)
    TransferFrom(Address, Address, Amount),
    /// (amount)
    TopUpClaimableRewards(Amount),
}
