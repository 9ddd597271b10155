use soroban_sdk::{contracttype, Env};
use treasury_types::{Error, ProxyConfig, TopUpConfig};

// ============================================================================
// STORAGE LAYOUT
// ============================================================================
// Everything lives in instance storage: the config entries are tiny and read
// on every call. Balances and allowances are owned by the token contract and
// never mirrored here.
// ============================================================================

/// Storage keys for the proxy contract
#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    /// Council and token (Instance storage)
    Config,
    /// Source account and distributor for top-ups (Instance storage)
    TopUp,
}

// TTL constants
const INSTANCE_TTL_THRESHOLD: u32 = 17280; // ~1 day
const INSTANCE_TTL_EXTEND: u32 = 518400; // ~30 days

/// Extend instance storage TTL
pub fn extend_instance_ttl(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(INSTANCE_TTL_THRESHOLD, INSTANCE_TTL_EXTEND);
}

// === Config ===

pub fn has_config(env: &Env) -> bool {
    env.storage().instance().has(&DataKey::Config)
}

pub fn get_config(env: &Env) -> Result<ProxyConfig, Error> {
    let config = env
        .storage()
        .instance()
        .get(&DataKey::Config)
        .ok_or(Error::NotInitialized)?;
    extend_instance_ttl(env);
    Ok(config)
}

pub fn set_config(env: &Env, config: &ProxyConfig) {
    env.storage().instance().set(&DataKey::Config, config);
    extend_instance_ttl(env);
}

// === Top-up ===

pub fn has_top_up(env: &Env) -> bool {
    env.storage().instance().has(&DataKey::TopUp)
}

pub fn get_top_up(env: &Env) -> Result<TopUpConfig, Error> {
    env.storage()
        .instance()
        .get(&DataKey::TopUp)
        .ok_or(Error::TopUpNotConfigured)
}

pub fn set_top_up(env: &Env, top_up: &TopUpConfig) {
    env.storage().instance().set(&DataKey::TopUp, top_up);
    extend_instance_ttl(env);
}
