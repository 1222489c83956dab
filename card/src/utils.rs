use crate::storage::get_data;
use common::card::types::TRADING_CONTRACT;
use soroban_sdk::{Address, Env};

pub fn require_trading_call(env: &Env) {
    let trading_address: Address = get_data(env, &TRADING_CONTRACT).unwrap();
    trading_address.require_auth();
}
