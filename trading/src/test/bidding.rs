#![cfg(test)]

use super::TradingTest;
use crate::types::{Error, ListingStatus, EXTENSION_WINDOW};
use soroban_sdk::testutils::Ledger;

const START_PRICE: i128 = 2_0000000;
const ONE_DAY: u64 = 86_400;

#[test]
fn test_first_bid_at_start_price() {
    let test = TradingTest::setup();
    let listing_id: u64 = test.trading_client.create_english_auction(
        &test.seller,
        &test.card_id,
        &START_PRICE,
        &ONE_DAY,
    );

    test.trading_client
        .place_bid(&test.bidder, &listing_id, &START_PRICE);

    let listing = test.trading_client.get_listing(&listing_id);
    assert_eq!(listing.highest_bidder, Some(test.bidder.clone()));
    assert_eq!(listing.highest_bid, START_PRICE);
    assert_eq!(listing.status, ListingStatus::Active);

    // The stake is locked in the contract
    assert_eq!(
        test.token_client.balance(&test.trading_client.address),
        START_PRICE
    );
}

#[test]
fn test_bid_below_start_price_rejected() {
    let test = TradingTest::setup();
    let listing_id: u64 = test.trading_client.create_english_auction(
        &test.seller,
        &test.card_id,
        &START_PRICE,
        &ONE_DAY,
    );

    let result = test
        .trading_client
        .try_place_bid(&test.bidder, &listing_id, &(START_PRICE * 9 / 10));
    assert_eq!(result, Err(Ok(Error::BidTooLow)));
}

#[test]
fn test_minimum_increment_enforced() {
    let test = TradingTest::setup();
    let listing_id: u64 = test.trading_client.create_english_auction(
        &test.seller,
        &test.card_id,
        &START_PRICE,
        &ONE_DAY,
    );

    // 2.0 opens the bidding
    test.trading_client
        .place_bid(&test.bidder, &listing_id, &START_PRICE);

    // 2.05 is below the 5% minimum increment over 2.0
    let result = test
        .trading_client
        .try_place_bid(&test.buyer, &listing_id, &2_0500000);
    assert_eq!(result, Err(Ok(Error::BidTooLow)));

    // 2.10 clears it; the outbid 2.0 becomes withdrawable
    test.trading_client
        .place_bid(&test.buyer, &listing_id, &2_1000000);

    let listing = test.trading_client.get_listing(&listing_id);
    assert_eq!(listing.highest_bidder, Some(test.buyer.clone()));
    assert_eq!(listing.highest_bid, 2_1000000);
    assert_eq!(
        test.trading_client.get_pending_balance(&test.bidder),
        START_PRICE
    );
}

#[test]
fn test_highest_bid_is_non_decreasing() {
    let test = TradingTest::setup();
    let listing_id: u64 = test.trading_client.create_english_auction(
        &test.seller,
        &test.card_id,
        &START_PRICE,
        &ONE_DAY,
    );

    let mut previous: i128 = 0;
    for round in 0..5u32 {
        let listing = test.trading_client.get_listing(&listing_id);
        let bid = if listing.highest_bid == 0 {
            listing.price
        } else {
            listing.highest_bid + listing.highest_bid * 5 / 100
        };
        let bidder = if round % 2 == 0 { &test.bidder } else { &test.buyer };
        test.trading_client.place_bid(bidder, &listing_id, &bid);

        let updated = test.trading_client.get_listing(&listing_id).highest_bid;
        assert!(updated >= previous);
        previous = updated;
    }
}

#[test]
fn test_early_bid_does_not_extend() {
    let test = TradingTest::setup();
    let listing_id: u64 = test.trading_client.create_english_auction(
        &test.seller,
        &test.card_id,
        &START_PRICE,
        &1_000u64,
    );

    test.env.ledger().set_timestamp(100);
    test.trading_client
        .place_bid(&test.bidder, &listing_id, &START_PRICE);

    assert_eq!(test.trading_client.get_listing(&listing_id).end_time, 1_000);
}

#[test]
fn test_late_bid_extends_the_close() {
    let test = TradingTest::setup();
    let listing_id: u64 = test.trading_client.create_english_auction(
        &test.seller,
        &test.card_id,
        &START_PRICE,
        &1_000u64,
    );

    test.env.ledger().set_timestamp(999);
    test.trading_client
        .place_bid(&test.bidder, &listing_id, &START_PRICE);

    let listing = test.trading_client.get_listing(&listing_id);
    assert_eq!(listing.end_time, 999 + EXTENSION_WINDOW);
}

#[test]
fn test_extension_never_passes_hard_close() {
    let test = TradingTest::setup();
    let listing_id: u64 = test.trading_client.create_english_auction(
        &test.seller,
        &test.card_id,
        &START_PRICE,
        &1_000u64,
    );
    test.token_admin_client
        .mint(&test.buyer, &1_000_000_000_000_000_000_i128);
    test.token_admin_client
        .mint(&test.bidder, &1_000_000_000_000_000_000_i128);

    let hard_close = test.trading_client.get_listing(&listing_id).hard_close;

    let mut round = 0u32;
    loop {
        let listing = test.trading_client.get_listing(&listing_id);
        if listing.end_time == hard_close {
            break;
        }
        assert!(round < 400, "hard close never reached");

        test.env.ledger().set_timestamp(listing.end_time - 1);
        let bid = if listing.highest_bid == 0 {
            listing.price
        } else {
            listing.highest_bid + listing.highest_bid * 5 / 100
        };
        let (bidder, outbid) = if round % 2 == 0 {
            (&test.bidder, &test.buyer)
        } else {
            (&test.buyer, &test.bidder)
        };
        test.trading_client.place_bid(bidder, &listing_id, &bid);
        // reclaim the outbid stake so balances keep pace with the growing bids
        test.trading_client.withdraw(outbid);
        round += 1;
    }

    // Once pinned to the hard close, late bids no longer move it
    let listing = test.trading_client.get_listing(&listing_id);
    test.env.ledger().set_timestamp(listing.end_time - 1);
    let bid = listing.highest_bid + listing.highest_bid * 5 / 100;
    test.trading_client.place_bid(&test.bidder, &listing_id, &bid);
    assert_eq!(
        test.trading_client.get_listing(&listing_id).end_time,
        hard_close
    );
}

#[test]
fn test_bid_after_close_rejected() {
    let test = TradingTest::setup();
    let listing_id: u64 = test.trading_client.create_english_auction(
        &test.seller,
        &test.card_id,
        &START_PRICE,
        &1_000u64,
    );

    test.env.ledger().set_timestamp(1_000);
    let result = test
        .trading_client
        .try_place_bid(&test.bidder, &listing_id, &START_PRICE);
    assert_eq!(result, Err(Ok(Error::ListingNotActive)));
}

#[test]
fn test_bid_on_fixed_price_rejected() {
    let test = TradingTest::setup();
    let listing_id: u64 = test.trading_client.create_fixed_price_listing(
        &test.seller,
        &test.card_id,
        &START_PRICE,
        &ONE_DAY,
    );

    let result = test
        .trading_client
        .try_place_bid(&test.bidder, &listing_id, &START_PRICE);
    assert_eq!(result, Err(Ok(Error::WrongSaleType)));
}

#[test]
fn test_seller_cannot_bid_on_own_auction() {
    let test = TradingTest::setup();
    let listing_id: u64 = test.trading_client.create_english_auction(
        &test.seller,
        &test.card_id,
        &START_PRICE,
        &ONE_DAY,
    );

    let result = test
        .trading_client
        .try_place_bid(&test.seller, &listing_id, &START_PRICE);
    assert_eq!(result, Err(Ok(Error::SelfBid)));
}
