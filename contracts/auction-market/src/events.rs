use soroban_sdk::{contractevent, Address, BytesN};

use crate::types::AuctionInfo;

/// Event emitted when the market is initialized
#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct MarketInitialized {
    #[topic]
    pub owner: Address,
    pub auction_template: BytesN<32>,
}

#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct OwnerChanged {
    #[topic]
    pub old_owner: Address,
    #[topic]
    pub new_owner: Address,
}

/// Event emitted when an asset notifies the market that it now holds it
#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct EscrowConfirmed {
    #[topic]
    pub asset: Address,
    #[topic]
    pub seller: Address,
}

#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AuctionSetUp {
    #[topic]
    pub child: Address,
    #[topic]
    pub asset: Address,
    pub info: AuctionInfo,
}

#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AuctionRevised {
    #[topic]
    pub child: Address,
    #[topic]
    pub asset: Address,
    pub info: AuctionInfo,
}

#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AuctionEndRequested {
    #[topic]
    pub child: Address,
    #[topic]
    pub asset: Address,
}

/// Event emitted when a child hands the asset to its final owner
#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AuctionSettled {
    #[topic]
    pub child: Address,
    #[topic]
    pub asset: Address,
    pub seller: Address,
    pub new_owner: Address,
}
