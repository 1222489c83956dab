use soroban_sdk::{Address, Env, IntoVal, Val, Vec};

use crate::types::SaleType;

pub enum TradingEvent {
    Initialized(Address, Address),
    Upgraded(u32),
    ListingCreated(u64, Address, u64, SaleType),
    BidPlaced(u64, Address, i128, u64),
    ListingSold(u64, Address, i128),
    ListingCancelled(u64, Address),
    ListingExpired(u64),
    Withdrawal(Address, i128),
    Paused,
    Unpaused,
    FeeUpdated(u32),
    FeeRecipientUpdated(Address),
}

impl TradingEvent {
    pub fn name(&self) -> &'static str {
        match self {
            TradingEvent::Initialized(..) => stringify!(Initialized),
            TradingEvent::Upgraded(..) => stringify!(Upgraded),
            TradingEvent::ListingCreated(..) => stringify!(ListingCreated),
            TradingEvent::BidPlaced(..) => stringify!(BidPlaced),
            TradingEvent::ListingSold(..) => stringify!(ListingSold),
            TradingEvent::ListingCancelled(..) => stringify!(ListingCancelled),
            TradingEvent::ListingExpired(..) => stringify!(ListingExpired),
            TradingEvent::Withdrawal(..) => stringify!(Withdrawal),
            TradingEvent::Paused => stringify!(Paused),
            TradingEvent::Unpaused => stringify!(Unpaused),
            TradingEvent::FeeUpdated(..) => stringify!(FeeUpdated),
            TradingEvent::FeeRecipientUpdated(..) => stringify!(FeeRecipientUpdated),
        }
    }

    pub fn publish(&self, env: &Env) {
        let mut v: Vec<Val> = Vec::new(&env);

        match self {
            TradingEvent::Initialized(card_contract, payment_token) => {
                v.push_back(card_contract.into_val(env));
                v.push_back(payment_token.into_val(env));
            }
            TradingEvent::Upgraded(version) => {
                v.push_back(version.into_val(env));
            }
            TradingEvent::ListingCreated(listing_id, seller, card_id, sale_type) => {
                v.push_back(listing_id.into_val(env));
                v.push_back(seller.into_val(env));
                v.push_back(card_id.into_val(env));
                v.push_back(sale_type.into_val(env));
            }
            TradingEvent::BidPlaced(listing_id, bidder, amount, end_time) => {
                v.push_back(listing_id.into_val(env));
                v.push_back(bidder.into_val(env));
                v.push_back(amount.into_val(env));
                v.push_back(end_time.into_val(env));
            }
            TradingEvent::ListingSold(listing_id, buyer, amount) => {
                v.push_back(listing_id.into_val(env));
                v.push_back(buyer.into_val(env));
                v.push_back(amount.into_val(env));
            }
            TradingEvent::ListingCancelled(listing_id, seller) => {
                v.push_back(listing_id.into_val(env));
                v.push_back(seller.into_val(env));
            }
            TradingEvent::ListingExpired(listing_id) => {
                v.push_back(listing_id.into_val(env));
            }
            TradingEvent::Withdrawal(payee, amount) => {
                v.push_back(payee.into_val(env));
                v.push_back(amount.into_val(env));
            }
            TradingEvent::Paused => {}
            TradingEvent::Unpaused => {}
            TradingEvent::FeeUpdated(fee_bps) => {
                v.push_back(fee_bps.into_val(env));
            }
            TradingEvent::FeeRecipientUpdated(recipient) => {
                v.push_back(recipient.into_val(env));
            }
        }

        env.events().publish((self.name(),), v)
    }
}
