#![no_std]

mod events;
mod pricing;
mod storage;
mod types;
mod utils;

use events::TradingEvent;
use soroban_sdk::{contract, contractimpl, Address, BytesN, Env, Symbol, Vec};
use storage::{get_data, get_persistent, has_data, store_data, store_persistent};
use types::{
    DataKey, Error, Listing, ListingStatus, SaleType, ADMIN, CARD_CONTRACT, DEFAULT_FEE_BPS,
    EXTENSION_WINDOW, FEE_RECIPIENT, MAX_FEE_BPS, MAX_TOTAL_EXTENSION, PAUSED, PAYMENT_TOKEN,
    PLATFORM_FEE,
};
use utils::{
    contract_clients::get_card_client,
    helpers::{
        add_seller_listing, credit_pending, get_listing_by_id, is_paused, pay_out,
        pending_balance, require_admin, store_listing, take_payment,
    },
};

#[contract]
pub struct TradingContract;

#[contractimpl]
impl TradingContract {
    pub fn initialize(
        env: Env,
        admin: Address,
        card_ca: Address,
        payment_token: Address,
        fee_recipient: Address,
    ) -> Result<(), Error> {
        admin.require_auth();
        if has_data::<Symbol>(&env, &ADMIN) {
            return Err(Error::AlreadyInitialized);
        }
        store_data(&env, &ADMIN, &admin);
        store_data(&env, &CARD_CONTRACT, &card_ca);
        store_data(&env, &PAYMENT_TOKEN, &payment_token);
        store_data(&env, &FEE_RECIPIENT, &fee_recipient);
        store_data(&env, &PLATFORM_FEE, &DEFAULT_FEE_BPS);
        store_data(&env, &PAUSED, &false);
        store_data(&env, &DataKey::ListingCount, &0u64);

        TradingEvent::Initialized(card_ca, payment_token).publish(&env);
        Ok(())
    }

    pub fn version() -> u32 {
        1
    }

    pub fn upgrade(env: Env, new_wasm_hash: BytesN<32>) {
        require_admin(&env);
        env.deployer().update_current_contract_wasm(new_wasm_hash);
        TradingEvent::Upgraded(Self::version()).publish(&env);
    }

    pub fn update_state(env: Env, state_key: Symbol, state_value: Address) -> Result<(), Error> {
        require_admin(&env);

        if !has_data::<Symbol>(&env, &state_key) {
            return Err(Error::StateNotAlreadySet);
        }

        store_data(&env, &state_key, &state_value);
        env.events()
            .publish(("state_updated", state_key), state_value);

        Ok(())
    }

    pub fn create_fixed_price_listing(
        env: Env,
        seller: Address,
        card_id: u64,
        price: i128,
        duration: u64,
    ) -> Result<u64, Error> {
        Self::open_listing(env, seller, card_id, price, 0, duration, SaleType::FixedPrice)
    }

    pub fn create_english_auction(
        env: Env,
        seller: Address,
        card_id: u64,
        start_price: i128,
        duration: u64,
    ) -> Result<u64, Error> {
        Self::open_listing(
            env,
            seller,
            card_id,
            start_price,
            0,
            duration,
            SaleType::EnglishAuction,
        )
    }

    pub fn create_dutch_auction(
        env: Env,
        seller: Address,
        card_id: u64,
        start_price: i128,
        end_price: i128,
        duration: u64,
    ) -> Result<u64, Error> {
        Self::open_listing(
            env,
            seller,
            card_id,
            start_price,
            end_price,
            duration,
            SaleType::DutchAuction,
        )
    }

    /// Buy a fixed-price or Dutch listing at its current price.
    ///
    /// `payment` is the amount the buyer is willing to spend; only the
    /// required price is drawn from their token balance, so overpaying
    /// never costs more than the quote.
    pub fn buy_now(env: Env, buyer: Address, listing_id: u64, payment: i128) -> Result<i128, Error> {
        if is_paused(&env) {
            return Err(Error::ContractPaused);
        }
        buyer.require_auth();

        let mut listing: Listing = get_listing_by_id(&env, listing_id);
        if listing.sale_type == SaleType::EnglishAuction {
            return Err(Error::WrongSaleType);
        }
        let now = env.ledger().timestamp();
        if listing.status != ListingStatus::Active || now >= listing.end_time {
            return Err(Error::ListingNotActive);
        }
        if buyer == listing.seller {
            return Err(Error::SelfPurchase);
        }

        let required = pricing::current_price(&listing, now);
        if payment < required {
            return Err(Error::InsufficientPayment);
        }

        listing.status = ListingStatus::Sold;
        store_listing(&env, &listing);

        let fee_bps: u32 = get_data(&env, &PLATFORM_FEE).unwrap();
        let fee_recipient: Address = get_data(&env, &FEE_RECIPIENT).unwrap();
        let (seller_amount, fee) = pricing::split_fee(required, fee_bps);
        credit_pending(&env, &listing.seller, seller_amount);
        credit_pending(&env, &fee_recipient, fee);

        take_payment(&env, &buyer, required);
        get_card_client(&env).transfer(&env.current_contract_address(), &buyer, &listing.card_id);

        TradingEvent::ListingSold(listing_id, buyer, required).publish(&env);
        Ok(required)
    }

    /// Place a bid on an English auction.
    ///
    /// The full bid is drawn into the contract; the previous highest bidder's
    /// stake becomes withdrawable. A bid landing inside the extension window
    /// pushes the close out, but never past the listing's hard close.
    pub fn place_bid(env: Env, bidder: Address, listing_id: u64, amount: i128) -> Result<(), Error> {
        if is_paused(&env) {
            return Err(Error::ContractPaused);
        }
        bidder.require_auth();

        let mut listing: Listing = get_listing_by_id(&env, listing_id);
        if listing.sale_type != SaleType::EnglishAuction {
            return Err(Error::WrongSaleType);
        }
        let now = env.ledger().timestamp();
        if listing.status != ListingStatus::Active || now >= listing.end_time {
            return Err(Error::ListingNotActive);
        }
        if bidder == listing.seller {
            return Err(Error::SelfBid);
        }
        if amount < pricing::min_next_bid(&listing) {
            return Err(Error::BidTooLow);
        }

        take_payment(&env, &bidder, amount);

        if let Some(previous_bidder) = listing.highest_bidder.clone() {
            credit_pending(&env, &previous_bidder, listing.highest_bid);
        }
        listing.highest_bidder = Some(bidder.clone());
        listing.highest_bid = amount;

        if listing.end_time - now < EXTENSION_WINDOW {
            listing.end_time = (now + EXTENSION_WINDOW).min(listing.hard_close);
        }
        store_listing(&env, &listing);

        TradingEvent::BidPlaced(listing_id, bidder, amount, listing.end_time).publish(&env);
        Ok(())
    }

    /// Settle an English auction past its end time. Callable by anyone.
    pub fn finalize_auction(env: Env, listing_id: u64) -> Result<(), Error> {
        if is_paused(&env) {
            return Err(Error::ContractPaused);
        }

        let mut listing: Listing = get_listing_by_id(&env, listing_id);
        if listing.sale_type != SaleType::EnglishAuction {
            return Err(Error::WrongSaleType);
        }
        if listing.status != ListingStatus::Active {
            return Err(Error::ListingNotActive);
        }
        if env.ledger().timestamp() < listing.end_time {
            return Err(Error::AuctionStillActive);
        }

        match listing.highest_bidder.clone() {
            Some(winner) => {
                listing.status = ListingStatus::Sold;
                store_listing(&env, &listing);

                let fee_bps: u32 = get_data(&env, &PLATFORM_FEE).unwrap();
                let fee_recipient: Address = get_data(&env, &FEE_RECIPIENT).unwrap();
                let (seller_amount, fee) = pricing::split_fee(listing.highest_bid, fee_bps);
                credit_pending(&env, &listing.seller, seller_amount);
                credit_pending(&env, &fee_recipient, fee);

                get_card_client(&env).transfer(
                    &env.current_contract_address(),
                    &winner,
                    &listing.card_id,
                );

                TradingEvent::ListingSold(listing_id, winner, listing.highest_bid).publish(&env);
            }
            None => {
                listing.status = ListingStatus::Expired;
                store_listing(&env, &listing);

                get_card_client(&env).transfer(
                    &env.current_contract_address(),
                    &listing.seller,
                    &listing.card_id,
                );

                TradingEvent::ListingExpired(listing_id).publish(&env);
            }
        }

        Ok(())
    }

    /// Cancel a listing and return the card to the seller. Also the reclaim
    /// path for fixed-price and Dutch listings whose window has lapsed.
    pub fn cancel_listing(env: Env, seller: Address, listing_id: u64) -> Result<(), Error> {
        if is_paused(&env) {
            return Err(Error::ContractPaused);
        }
        seller.require_auth();

        let mut listing: Listing = get_listing_by_id(&env, listing_id);
        if listing.seller != seller {
            return Err(Error::NotSeller);
        }
        if listing.status != ListingStatus::Active {
            return Err(Error::ListingNotActive);
        }
        if listing.sale_type == SaleType::EnglishAuction && listing.highest_bid > 0 {
            return Err(Error::CannotCancelActiveBids);
        }

        listing.status = ListingStatus::Cancelled;
        store_listing(&env, &listing);

        get_card_client(&env).transfer(&env.current_contract_address(), &seller, &listing.card_id);

        TradingEvent::ListingCancelled(listing_id, seller).publish(&env);
        Ok(())
    }

    /// Pull the caller's full escrow balance. A zero balance is a no-op.
    /// Stays available while the contract is paused so escrowed funds are
    /// never trapped.
    pub fn withdraw(env: Env, payee: Address) -> Result<i128, Error> {
        payee.require_auth();

        let balance = pending_balance(&env, &payee);
        if balance == 0 {
            return Ok(0);
        }

        // Zero before the outbound transfer; a failed transfer aborts the
        // transaction and restores the balance with it.
        store_persistent(&env, &DataKey::PendingBalance(payee.clone()), &0i128);
        pay_out(&env, &payee, balance);

        TradingEvent::Withdrawal(payee, balance).publish(&env);
        Ok(balance)
    }

    pub fn pause(env: Env) {
        require_admin(&env);
        store_data(&env, &PAUSED, &true);
        TradingEvent::Paused.publish(&env);
    }

    pub fn unpause(env: Env) {
        require_admin(&env);
        store_data(&env, &PAUSED, &false);
        TradingEvent::Unpaused.publish(&env);
    }

    pub fn set_platform_fee(env: Env, fee_bps: u32) -> Result<(), Error> {
        require_admin(&env);
        if fee_bps > MAX_FEE_BPS {
            return Err(Error::InvalidFeeBps);
        }
        store_data(&env, &PLATFORM_FEE, &fee_bps);
        TradingEvent::FeeUpdated(fee_bps).publish(&env);
        Ok(())
    }

    pub fn set_fee_recipient(env: Env, recipient: Address) {
        require_admin(&env);
        store_data(&env, &FEE_RECIPIENT, &recipient);
        TradingEvent::FeeRecipientUpdated(recipient).publish(&env);
    }

    pub fn get_listing(env: Env, listing_id: u64) -> Listing {
        get_listing_by_id(&env, listing_id)
    }

    pub fn get_current_price(env: Env, listing_id: u64) -> i128 {
        let listing: Listing = get_listing_by_id(&env, listing_id);
        pricing::current_price(&listing, env.ledger().timestamp())
    }

    pub fn get_active_listings(env: Env) -> Vec<Listing> {
        let listing_count: u64 = get_data(&env, &DataKey::ListingCount).unwrap_or(0);
        let mut listings: Vec<Listing> = Vec::new(&env);

        for id in 1..=listing_count {
            if let Some(listing) = get_persistent::<DataKey, Listing>(&env, &DataKey::Listing(id)) {
                if listing.status == ListingStatus::Active {
                    listings.push_back(listing);
                }
            }
        }

        listings
    }

    pub fn get_seller_listings(env: Env, seller: Address) -> Vec<u64> {
        get_persistent(&env, &DataKey::SellerListings(seller))
            .unwrap_or_else(|| Vec::new(&env))
    }

    pub fn get_pending_balance(env: Env, payee: Address) -> i128 {
        pending_balance(&env, &payee)
    }

    pub fn get_listing_count(env: Env) -> u64 {
        get_data(&env, &DataKey::ListingCount).unwrap_or(0)
    }

    pub fn get_platform_fee(env: Env) -> u32 {
        get_data(&env, &PLATFORM_FEE).unwrap()
    }

    pub fn get_fee_recipient(env: Env) -> Address {
        get_data(&env, &FEE_RECIPIENT).unwrap()
    }

    pub fn is_contract_paused(env: Env) -> bool {
        is_paused(&env)
    }

    fn open_listing(
        env: Env,
        seller: Address,
        card_id: u64,
        price: i128,
        end_price: i128,
        duration: u64,
        sale_type: SaleType,
    ) -> Result<u64, Error> {
        if is_paused(&env) {
            return Err(Error::ContractPaused);
        }
        seller.require_auth();

        if price <= 0 {
            return Err(Error::InvalidPrice);
        }
        if duration == 0 {
            return Err(Error::InvalidDuration);
        }
        if sale_type == SaleType::DutchAuction {
            if end_price <= 0 {
                return Err(Error::InvalidPrice);
            }
            if end_price >= price {
                return Err(Error::InvalidPriceRange);
            }
        }

        let card = get_card_client(&env);
        if !card.exists(&card_id) || card.owner_of(&card_id) != seller {
            return Err(Error::NotCardOwner);
        }
        if !card.is_approved(&card_id, &seller) {
            return Err(Error::NotApproved);
        }

        let listing_count: u64 = get_data(&env, &DataKey::ListingCount).unwrap_or(0);
        let listing_id: u64 = listing_count + 1;
        let now = env.ledger().timestamp();

        let listing = Listing {
            id: listing_id,
            seller: seller.clone(),
            card_id,
            price,
            end_price,
            start_time: now,
            end_time: now + duration,
            hard_close: now + duration + MAX_TOTAL_EXTENSION,
            highest_bidder: None,
            highest_bid: 0,
            sale_type,
            status: ListingStatus::Active,
        };

        store_listing(&env, &listing);
        store_data(&env, &DataKey::ListingCount, &listing_id);
        add_seller_listing(&env, &seller, listing_id);

        // The card sits in contract custody for the life of the listing.
        card.transfer(&seller, &env.current_contract_address(), &card_id);

        TradingEvent::ListingCreated(listing_id, seller, card_id, sale_type).publish(&env);

        Ok(listing_id)
    }
}
