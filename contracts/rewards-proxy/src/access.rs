use crate::storage::get_config;
use soroban_sdk::{log, Address, Env};
use treasury_types::Error;

/// Whether `caller` is the council configured for this account.
///
/// Pure identity comparison against the account's own configuration; each
/// proxy instance carries its own council.
pub fn is_council(env: &Env, caller: &Address) -> Result<bool, Error> {
    Ok(get_config(env)?.council == *caller)
}

/// Gate for every state-changing operation.
///
/// Rejects any caller other than the council with `Unauthorized`, then has
/// the host authenticate the council's signature. Must run before the first
/// ledger call of an operation.
pub fn require_council(env: &Env, caller: &Address) -> Result<(), Error> {
    if !is_council(env, caller)? {
        log!(env, "rejected non-council caller", caller.clone());
        return Err(Error::Unauthorized);
    }
    caller.require_auth();
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::set_config;
    use crate::RewardsProxy;
    use soroban_sdk::testutils::Address as _;
    use treasury_types::ProxyConfig;

    fn setup(env: &Env) -> (Address, Address) {
        let council = Address::generate(env);
        let token = Address::generate(env);
        let contract_id = env.register(RewardsProxy, ());
        env.as_contract(&contract_id, || {
            set_config(
                env,
                &ProxyConfig {
                    council: council.clone(),
                    token,
                },
            );
        });
        (contract_id, council)
    }

    #[test]
    fn test_is_council_matches_configured_principal() {
        let env = Env::default();
        let (contract_id, council) = setup(&env);
        let stranger = Address::generate(&env);

        env.as_contract(&contract_id, || {
            assert_eq!(is_council(&env, &council), Ok(true));
            assert_eq!(is_council(&env, &stranger), Ok(false));
        });
    }

    #[test]
    fn test_require_council_rejects_stranger() {
        let env = Env::default();
        env.mock_all_auths();
        let (contract_id, _council) = setup(&env);
        let stranger = Address::generate(&env);

        env.as_contract(&contract_id, || {
            assert_eq!(require_council(&env, &stranger), Err(Error::Unauthorized));
        });
    }

    #[test]
    fn test_uninitialized_account_has_no_council() {
        let env = Env::default();
        let contract_id = env.register(RewardsProxy, ());
        let anyone = Address::generate(&env);

        env.as_contract(&contract_id, || {
            assert_eq!(is_council(&env, &anyone), Err(Error::NotInitialized));
        });
    }
}
