use soroban_sdk::{contracterror, contracttype, symbol_short, Address, Symbol};

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    AlreadyInitialized = 1,
    ListingNotFound = 2,
    ListingNotActive = 3,
    WrongSaleType = 4,
    InvalidPrice = 5,
    InvalidDuration = 6,
    InvalidPriceRange = 7,
    BidTooLow = 8,
    InsufficientPayment = 9,
    NotCardOwner = 10,
    NotApproved = 11,
    SelfPurchase = 12,
    SelfBid = 13,
    CannotCancelActiveBids = 14,
    AuctionStillActive = 15,
    NotSeller = 16,
    ContractPaused = 17,
    InvalidFeeBps = 18,
    StateNotAlreadySet = 19,
}

#[derive(Clone, Debug, Copy, PartialEq, Eq)]
#[contracttype]
pub enum SaleType {
    FixedPrice = 1,
    EnglishAuction = 2,
    DutchAuction = 3,
}

#[contracttype]
#[derive(Clone, Debug, Copy, PartialEq, Eq)]
pub enum ListingStatus {
    Active = 1,
    Sold = 2,
    Cancelled = 3,
    Expired = 4,
}

#[contracttype]
#[derive(Clone, Debug)]
pub struct Listing {
    pub id: u64,
    pub seller: Address,
    pub card_id: u64,
    pub price: i128,
    pub end_price: i128, // Dutch floor price; zero for other sale types
    pub start_time: u64,
    pub end_time: u64,
    pub hard_close: u64, // anti-snipe extensions never move end_time past this
    pub highest_bidder: Option<Address>,
    pub highest_bid: i128,
    pub sale_type: SaleType,
    pub status: ListingStatus,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum DataKey {
    Listing(u64),
    ListingCount,
    SellerListings(Address),   // Listing ids created by a seller
    PendingBalance(Address),   // Withdrawable escrow balance per payee
}

pub const ADMIN: Symbol = symbol_short!("ADMIN");
pub const CARD_CONTRACT: Symbol = symbol_short!("CARD_CA");
pub const PAYMENT_TOKEN: Symbol = symbol_short!("PAY_TOKEN");
pub const FEE_RECIPIENT: Symbol = symbol_short!("FEE_RCPT");
pub const PLATFORM_FEE: Symbol = symbol_short!("FEE_BPS");
pub const PAUSED: Symbol = symbol_short!("PAUSED");

pub const DEFAULT_FEE_BPS: u32 = 100;
pub const MAX_FEE_BPS: u32 = 1_000;
pub const BPS_DENOMINATOR: i128 = 10_000;
pub const MIN_BID_INCREMENT_BPS: i128 = 500;
pub const EXTENSION_WINDOW: u64 = 300;
pub const MAX_TOTAL_EXTENSION: u64 = 86_400;
