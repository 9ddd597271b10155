use soroban_sdk::contracterror;

/// Failure kinds reported by the rewards proxy.
///
/// Every entry point returns `Result<_, Error>`. Returning an error makes the
/// host roll back all storage writes of the invocation, including nested
/// token contract calls, so a failed call never leaves partial effects.
#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    /// Caller is not the council configured for this account
    Unauthorized = 1,
    /// Debit exceeds the current balance
    InsufficientBalance = 2,
    /// Transfer-from exceeds the remaining allowance
    InsufficientAllowance = 3,
    /// Negative amount, or zero where a positive amount is required
    InvalidAmount = 4,
    NotInitialized = 5,
    AlreadyInitialized = 6,
    /// Top-up called on an account without source/distributor configuration
    TopUpNotConfigured = 7,
    /// Additive allowance bump would overflow i128
    AllowanceOverflow = 8,
    /// Top-up source is the claimable rewards account itself
    SelfTopUp = 9,
}
