#![no_std]

mod call;
mod config;
mod error;

pub use call::*;
pub use config::*;
pub use error::*;

/// Token amounts follow the SEP-41 token interface
pub type Amount = i128;

/// Returns true if `amount` may be moved or approved (zero allowed)
pub fn is_valid_amount(amount: Amount) -> bool {
    amount >= 0
}

/// Returns true if `amount` may be used for a top-up (strictly positive)
pub fn is_valid_top_up_amount(amount: Amount) -> bool {
    amount > 0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_amount_validation() {
        assert!(is_valid_amount(0));
        assert!(is_valid_amount(1_000));
        assert!(!is_valid_amount(-1));

        assert!(!is_valid_top_up_amount(0));
        assert!(!is_valid_top_up_amount(-5));
        assert!(is_valid_top_up_amount(1));
    }
}
