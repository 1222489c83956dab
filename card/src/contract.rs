use soroban_sdk::{contract, contractimpl, Address, BytesN, Env, String, Symbol};

use crate::{
    events::CardEvent,
    storage::{get_data, get_persistent, has_data, has_persistent, store_data, store_persistent},
    utils::require_trading_call,
};
use common::card::{
    interface::CardInterface,
    types::{CardMetadata, DataKey, Error, ADMIN, TRADING_CONTRACT},
};

const NAME: &str = "Collector Card";
const SYMBOL: &str = "CARD";

#[contract]
pub struct CardContract;

#[contractimpl]
impl CardInterface for CardContract {
    fn initialize(env: Env, admin: Address, trading_contract_id: Address) -> Result<(), Error> {
        admin.require_auth();
        if env.storage().instance().has::<Symbol>(&ADMIN) {
            return Err(Error::AlreadyInitialized);
        }
        store_data(&env, &ADMIN, &admin);
        store_data(&env, &TRADING_CONTRACT, &trading_contract_id);
        store_data(&env, &DataKey::CardCount, &0u64);
        CardEvent::Initialized.publish(&env);
        Ok(())
    }

    fn version() -> u32 {
        1
    }

    fn upgrade(env: Env, new_wasm_hash: BytesN<32>) {
        let admin: Address = get_data(&env, &ADMIN).unwrap();
        admin.require_auth();
        env.deployer().update_current_contract_wasm(new_wasm_hash);
        CardEvent::Upgraded(Self::version()).publish(&env);
    }

    fn update_state(env: Env, state_key: Symbol, state_value: Address) -> Result<(), Error> {
        let admin: Address = get_data(&env, &ADMIN).unwrap();
        admin.require_auth();

        if !has_data::<Symbol>(&env, &state_key) {
            return Err(Error::StateNotAlreadySet);
        }

        store_data(&env, &state_key, &state_value);
        env.events()
            .publish(("state_updated", state_key), state_value);

        Ok(())
    }

    fn name(env: Env) -> String {
        String::from_str(&env, NAME)
    }

    fn symbol(env: Env) -> String {
        String::from_str(&env, SYMBOL)
    }

    fn mint(env: Env, to: Address, card_name: String, card_uri: String) -> u64 {
        let admin: Address = get_data(&env, &ADMIN).unwrap();
        admin.require_auth();

        let count: u64 = get_data(&env, &DataKey::CardCount).unwrap_or(0);
        let card_id: u64 = count + 1;

        let metadata = CardMetadata {
            name: card_name,
            card_uri,
        };
        store_persistent(&env, &DataKey::CardMetadata(card_id), &metadata);
        store_persistent(&env, &DataKey::CardOwner(card_id), &to);
        store_data(&env, &DataKey::CardCount, &card_id);

        CardEvent::Mint(card_id, to).publish(&env);

        card_id
    }

    fn owner_of(env: Env, card_id: u64) -> Result<Address, Error> {
        get_persistent(&env, &DataKey::CardOwner(card_id)).ok_or(Error::CardNotFound)
    }

    fn exists(env: Env, card_id: u64) -> bool {
        has_persistent(&env, &DataKey::CardOwner(card_id))
    }

    fn set_approval(env: Env, owner: Address, approved: bool) {
        owner.require_auth();
        store_persistent(&env, &DataKey::OperatorApproval(owner.clone()), &approved);
        CardEvent::ApprovalSet(owner, approved).publish(&env);
    }

    fn is_approved(env: Env, card_id: u64, owner: Address) -> bool {
        let holder: Option<Address> = get_persistent(&env, &DataKey::CardOwner(card_id));
        if holder != Some(owner.clone()) {
            return false;
        }
        get_persistent(&env, &DataKey::OperatorApproval(owner)).unwrap_or(false)
    }

    fn transfer(env: Env, from: Address, to: Address, card_id: u64) -> Result<(), Error> {
        require_trading_call(&env);

        let holder: Address =
            get_persistent(&env, &DataKey::CardOwner(card_id)).ok_or(Error::CardNotFound)?;
        if holder != from {
            return Err(Error::NotCardOwner);
        }

        store_persistent(&env, &DataKey::CardOwner(card_id), &to);

        CardEvent::Transfer(card_id, from, to).publish(&env);
        Ok(())
    }

    fn card_uri(env: Env, card_id: u64) -> Result<String, Error> {
        let metadata: CardMetadata =
            get_persistent(&env, &DataKey::CardMetadata(card_id)).ok_or(Error::CardNotFound)?;
        Ok(metadata.card_uri)
    }

    fn get_metadata(env: Env, card_id: u64) -> Option<CardMetadata> {
        get_persistent(&env, &DataKey::CardMetadata(card_id))
    }

    fn card_count(env: Env) -> u64 {
        get_data(&env, &DataKey::CardCount).unwrap_or(0)
    }
}
