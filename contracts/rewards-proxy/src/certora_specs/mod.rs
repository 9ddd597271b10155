// ============================================================================
// CERTORA SUNBEAM FORMAL VERIFICATION SPECIFICATIONS
// ============================================================================
//
// Rules over the pure decisions the contract runs before touching the token:
// `ledger::{check_debit, check_spend, increased_allowance}` and
// `logic_v2::check_top_up_amount`.
//
// - allowance_specs.rs : transfer-from gating and additive allowance bump
// - top_up_specs.rs    : top-up amount guard and leg composition
//
// USAGE:
// - Unit tests: cargo test -p rewards-proxy
// - Certora build: cargo build --features certora -p rewards-proxy
//
// ============================================================================

pub mod allowance_specs;
pub mod top_up_specs;
