use soroban_sdk::{contracttype, Address, Bytes, BytesN, U256};

// ============================================================================
// CONSTANTS
// ============================================================================

/// Ledgers per day (~5 second close time)
pub const DAY_IN_LEDGERS: u32 = 17280;

pub const INSTANCE_TTL_AMOUNT: u32 = 30 * DAY_IN_LEDGERS;
pub const INSTANCE_TTL_THRESHOLD: u32 = INSTANCE_TTL_AMOUNT - DAY_IN_LEDGERS;

pub const PERSISTENT_TTL_AMOUNT: u32 = 90 * DAY_IN_LEDGERS;
pub const PERSISTENT_TTL_THRESHOLD: u32 = PERSISTENT_TTL_AMOUNT - DAY_IN_LEDGERS;

/// Minimum raise over the current highest bid, in percent
pub const BID_INCREASE_PERCENT: u32 = 5;

/// Seconds a late bid extends the auction by
pub const BID_PERIOD: u64 = 3600;

// ============================================================================
// STORAGE KEYS
// ============================================================================

#[contracttype]
#[derive(Clone)]
pub enum StorageKey {
    Config,
    /// Escrow confirmation, keyed by (seller, asset) fingerprint
    Escrow(U256),
    /// Active auction: child address -> asset address
    Auction(Address),
    /// Child address that already holds a deployed auction contract
    Deployed(Address),
}

// ============================================================================
// CONFIGURATION
// ============================================================================

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct MarketConfig {
    pub owner: Address,
    /// Wasm hash every child auction is deployed from
    pub auction_template: BytesN<32>,
}

// ============================================================================
// AUCTION PAYLOADS
// ============================================================================

/// Seller-supplied parameters of a setup or revision request.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AuctionTerms {
    pub reserve_price: i128,
    pub buy_now_price: i128,
    pub auction_period: u64,
    pub beneficiary: Option<Address>,
}

/// Parameters handed to a child auction on build and on revision.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AuctionInfo {
    pub bid_increase_percent: u32,
    pub bid_period: u64,
    pub auction_period: u64,
    pub reserve_price: i128,
    pub buy_now_price: i128,
    pub highest_bid: i128,
    pub highest_bidder: Address,
    pub seller: Address,
    pub whitelisted_buyer: Address,
    pub nft_recipient: Address,
    pub beneficiary: Address,
}

impl AuctionInfo {
    /// Opening state of an auction: no bids yet, every party defaults to the seller.
    pub fn opening(seller: &Address, terms: &AuctionTerms) -> Self {
        AuctionInfo {
            bid_increase_percent: BID_INCREASE_PERCENT,
            bid_period: BID_PERIOD,
            auction_period: terms.auction_period,
            reserve_price: terms.reserve_price,
            buy_now_price: terms.buy_now_price,
            highest_bid: 0,
            highest_bidder: seller.clone(),
            seller: seller.clone(),
            whitelisted_buyer: seller.clone(),
            nft_recipient: seller.clone(),
            beneficiary: terms.beneficiary.clone().unwrap_or_else(|| seller.clone()),
        }
    }
}

/// Settlement request sent by a child auction once it has concluded.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TransferNft {
    pub asset: Address,
    pub seller: Address,
    pub query_id: u64,
    pub new_owner: Address,
    pub response_destination: Address,
    pub custom_payload: Option<Bytes>,
    pub forward_amount: i128,
    pub forward_payload: Bytes,
}
