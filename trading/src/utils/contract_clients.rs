use common::card::interface::CardContractClient;
use soroban_sdk::{Address, Env};

use crate::{storage::get_data, types::CARD_CONTRACT};

pub fn get_card_client<'a>(env: &'a Env) -> CardContractClient<'a> {
    let card_address: Address = get_data(env, &CARD_CONTRACT).unwrap();
    CardContractClient::new(env, &card_address)
}
