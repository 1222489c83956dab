use super::types::{CardMetadata, Error};
use soroban_sdk::{contractclient, Address, BytesN, Env, String, Symbol};

#[contractclient(name = "CardContractClient")]
pub trait CardInterface {
    fn initialize(
        env: Env,
        admin: Address,
        trading_contract_id: Address,
    ) -> Result<(), Error>;
    fn version() -> u32;
    fn upgrade(env: Env, new_wasm_hash: BytesN<32>);
    fn update_state(env: Env, state_key: Symbol, state_value: Address) -> Result<(), Error>;
    fn name(env: Env) -> String;
    fn symbol(env: Env) -> String;
    fn mint(env: Env, to: Address, card_name: String, card_uri: String) -> u64;
    fn owner_of(env: Env, card_id: u64) -> Result<Address, Error>;
    fn exists(env: Env, card_id: u64) -> bool;
    fn set_approval(env: Env, owner: Address, approved: bool);
    fn is_approved(env: Env, card_id: u64, owner: Address) -> bool;
    fn transfer(env: Env, from: Address, to: Address, card_id: u64) -> Result<(), Error>;
    fn card_uri(env: Env, card_id: u64) -> Result<String, Error>;
    fn get_metadata(env: Env, card_id: u64) -> Option<CardMetadata>;
    fn card_count(env: Env) -> u64;
}
