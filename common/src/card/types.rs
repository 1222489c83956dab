use soroban_sdk::{contracterror, contracttype, symbol_short, Address, String, Symbol};

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    AlreadyInitialized = 1,
    CardNotFound = 2,
    NotCardOwner = 3,
    StateNotAlreadySet = 4,
}

#[derive(Clone)]
#[contracttype]
pub enum DataKey {
    CardOwner(u64),        // Current owner of each card id
    CardMetadata(u64),     // Name and URI for each card id
    OperatorApproval(Address), // Owner has approved the trading contract
    CardCount,
}

#[contracttype]
#[derive(Clone)]
pub struct CardMetadata {
    pub name: String,
    pub card_uri: String,
}

pub const ADMIN: Symbol = symbol_short!("ADMIN");
pub const TRADING_CONTRACT: Symbol = symbol_short!("TRD_CA");
