use crate::types::{Listing, SaleType, BPS_DENOMINATOR, MIN_BID_INCREMENT_BPS};

/// Price a buyer must pay for the listing at `now`.
///
/// Fixed-price listings always quote the listed price. English auctions quote
/// the standing bid once one exists. Dutch auctions decay linearly from
/// `price` at `start_time` to `end_price` at `end_time`, clamped at both
/// ends; the floor division error is at most one token unit.
pub fn current_price(listing: &Listing, now: u64) -> i128 {
    match listing.sale_type {
        SaleType::FixedPrice => listing.price,
        SaleType::EnglishAuction => {
            if listing.highest_bid > 0 {
                listing.highest_bid
            } else {
                listing.price
            }
        }
        SaleType::DutchAuction => {
            if now <= listing.start_time {
                return listing.price;
            }
            if now >= listing.end_time {
                return listing.end_price;
            }
            let elapsed = (now - listing.start_time) as i128;
            let window = (listing.end_time - listing.start_time) as i128;
            listing.price - (listing.price - listing.end_price) * elapsed / window
        }
    }
}

/// Smallest acceptable next bid: the start price until a bid lands, then the
/// standing bid plus the 5% minimum increment.
pub fn min_next_bid(listing: &Listing) -> i128 {
    if listing.highest_bid == 0 {
        listing.price
    } else {
        listing.highest_bid + listing.highest_bid * MIN_BID_INCREMENT_BPS / BPS_DENOMINATOR
    }
}

/// Split a gross sale amount into the seller's proceeds and the platform
/// fee. The two parts always sum back to `amount`.
pub fn split_fee(amount: i128, fee_bps: u32) -> (i128, i128) {
    let fee = amount * fee_bps as i128 / BPS_DENOMINATOR;
    (amount - fee, fee)
}
