use soroban_sdk::{panic_with_error, token, Address, Env, Vec};

use crate::{
    storage::{get_data, get_persistent, store_persistent},
    types::{DataKey, Error, Listing, ADMIN, PAUSED, PAYMENT_TOKEN},
};

pub fn get_listing_by_id(env: &Env, listing_id: u64) -> Listing {
    let listing: Option<Listing> = get_persistent(env, &DataKey::Listing(listing_id));

    if listing.is_none() {
        panic_with_error!(env, Error::ListingNotFound);
    }

    listing.unwrap()
}

pub fn store_listing(env: &Env, listing: &Listing) {
    store_persistent(env, &DataKey::Listing(listing.id), listing);
}

pub fn add_seller_listing(env: &Env, seller: &Address, listing_id: u64) {
    let mut listings: Vec<u64> = get_persistent(env, &DataKey::SellerListings(seller.clone()))
        .unwrap_or_else(|| Vec::new(env));
    listings.push_back(listing_id);
    store_persistent(env, &DataKey::SellerListings(seller.clone()), &listings);
}

pub fn pending_balance(env: &Env, payee: &Address) -> i128 {
    get_persistent(env, &DataKey::PendingBalance(payee.clone())).unwrap_or(0)
}

// Escrow credits accumulate until the payee pulls them with `withdraw`.
pub fn credit_pending(env: &Env, payee: &Address, amount: i128) {
    let balance = pending_balance(env, payee);
    store_persistent(
        env,
        &DataKey::PendingBalance(payee.clone()),
        &(balance + amount),
    );
}

pub fn take_payment(env: &Env, from: &Address, amount: i128) {
    let token_addr: Address = get_data(env, &PAYMENT_TOKEN).unwrap();
    let token_client: token::Client<'_> = token::Client::new(env, &token_addr);
    if token_client.balance(from) < amount {
        panic_with_error!(env, Error::InsufficientPayment)
    }
    token_client.transfer(from, &env.current_contract_address(), &amount);
}

pub fn pay_out(env: &Env, to: &Address, amount: i128) {
    let token_addr: Address = get_data(env, &PAYMENT_TOKEN).unwrap();
    let token_client: token::Client<'_> = token::Client::new(env, &token_addr);
    token_client.transfer(&env.current_contract_address(), to, &amount);
}

pub fn require_admin(env: &Env) -> Address {
    let admin: Address = get_data(env, &ADMIN).unwrap();
    admin.require_auth();
    admin
}

pub fn is_paused(env: &Env) -> bool {
    get_data(env, &PAUSED).unwrap_or(false)
}
