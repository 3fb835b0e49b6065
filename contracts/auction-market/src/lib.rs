#![no_std]

//! # Auction Market
//!
//! Coordinator for escrowed NFT auctions. A seller transfers an NFT item
//! contract to the market, the item notifies the market, and the market
//! deploys one child auction per (asset, seller) pair at an address derived
//! from the auction template and the pair. Lifecycle requests are routed to
//! that child, and only that child can settle the auction and release the
//! asset.
//!
//! State kept here:
//! - escrow registry ([`registry`]): (seller, asset) fingerprints held in custody
//! - auction directory ([`directory`]): live child address -> asset
//! - market config: owner and auction template

use soroban_sdk::{contract, contractimpl, Address, Bytes, BytesN, Env, U256};

pub mod deployer;
mod directory;
pub mod errors;
mod events;
mod fingerprint;
pub mod market;
mod registry;
mod storage;
pub mod types;

pub use deployer::{AuctionDeployer, WasmAuctionDeployer};
pub use errors::{Error, ErrorKind};
pub use types::{AuctionInfo, AuctionTerms, MarketConfig, TransferNft};

use events::{MarketInitialized, OwnerChanged};

#[contract]
pub struct AuctionMarket;

#[contractimpl]
impl AuctionMarket {
    // ========== INITIALIZATION ==========

    /// Initialize the market with its owner and the child auction wasm hash.
    ///
    /// The template is fixed for the life of the market: child addresses are
    /// derived from it.
    pub fn initialize(env: Env, owner: Address, auction_template: BytesN<32>) -> Result<(), Error> {
        if storage::is_initialized(&env) {
            return Err(Error::AlreadyInitialized);
        }

        owner.require_auth();

        storage::set_config(
            &env,
            &MarketConfig {
                owner: owner.clone(),
                auction_template: auction_template.clone(),
            },
        );
        storage::extend_instance_ttl(&env);

        MarketInitialized {
            owner,
            auction_template,
        }
        .publish(&env);

        Ok(())
    }

    // ========== AUCTION LIFECYCLE ==========

    /// Ownership-transfer notification sent by the NFT item contract `asset`.
    ///
    /// `forward_payload` is either empty or the XDR of
    /// `(beneficiary, reserve_price, buy_now_price, auction_period)`, in which
    /// case the auction is set up immediately with `prior_owner` as seller.
    pub fn on_nft_received(
        env: Env,
        asset: Address,
        prior_owner: Address,
        forward_payload: Bytes,
    ) -> Result<Option<Address>, Error> {
        let deployer = WasmAuctionDeployer::load(&env)?;
        asset.require_auth();
        storage::extend_instance_ttl(&env);

        market::confirm_escrow(&env, &deployer, &asset, &prior_owner, &forward_payload)
    }

    /// Deploy the child auction for an escrowed asset. Returns its address.
    pub fn set_up_auction(
        env: Env,
        seller: Address,
        asset: Address,
        reserve_price: i128,
        buy_now_price: i128,
        auction_period: u64,
        beneficiary: Option<Address>,
    ) -> Result<Address, Error> {
        let deployer = WasmAuctionDeployer::load(&env)?;
        seller.require_auth();
        storage::extend_instance_ttl(&env);

        let terms = AuctionTerms {
            reserve_price,
            buy_now_price,
            auction_period,
            beneficiary,
        };
        market::set_up_auction(&env, &deployer, &seller, &asset, &terms)
    }

    /// Send new parameters to a live child auction.
    pub fn revise_set_up_auction(
        env: Env,
        seller: Address,
        asset: Address,
        reserve_price: i128,
        buy_now_price: i128,
        auction_period: u64,
        beneficiary: Option<Address>,
    ) -> Result<Address, Error> {
        let deployer = WasmAuctionDeployer::load(&env)?;
        seller.require_auth();
        storage::extend_instance_ttl(&env);

        let terms = AuctionTerms {
            reserve_price,
            buy_now_price,
            auction_period,
            beneficiary,
        };
        market::revise_auction(&env, &deployer, &seller, &asset, &terms)
    }

    /// Ask the live child auction for `asset` to conclude.
    pub fn end_auction(env: Env, seller: Address, asset: Address) -> Result<Address, Error> {
        let deployer = WasmAuctionDeployer::load(&env)?;
        seller.require_auth();
        storage::extend_instance_ttl(&env);

        market::end_auction(&env, &deployer, &seller, &asset)
    }

    /// Settlement callback. `sender` must be the child derived for
    /// (`request.asset`, `request.seller`) and the auction must still be live.
    pub fn transfer_nft(env: Env, sender: Address, request: TransferNft) -> Result<(), Error> {
        let deployer = WasmAuctionDeployer::load(&env)?;
        sender.require_auth();
        storage::extend_instance_ttl(&env);

        market::settle(&env, &deployer, &sender, &request)
    }

    // ========== ACCESS CONTROL ==========

    /// Transfer market ownership
    pub fn set_owner(env: Env, current_owner: Address, new_owner: Address) -> Result<(), Error> {
        Self::require_owner(&env, &current_owner)?;

        storage::set_owner(&env, &new_owner)?;
        storage::extend_instance_ttl(&env);

        OwnerChanged {
            old_owner: current_owner,
            new_owner,
        }
        .publish(&env);

        Ok(())
    }

    // ========== VIEWS ==========

    pub fn get_owner(env: Env) -> Result<Address, Error> {
        storage::get_owner(&env)
    }

    pub fn get_auction_template(env: Env) -> Result<BytesN<32>, Error> {
        storage::get_auction_template(&env)
    }

    /// Registry key of a (seller, asset) pair
    pub fn get_fingerprint(env: Env, seller: Address, asset: Address) -> U256 {
        fingerprint::fingerprint(&env, &seller, &asset)
    }

    pub fn is_escrowed(env: Env, seller: Address, asset: Address) -> bool {
        registry::is_confirmed(&env, &fingerprint::fingerprint(&env, &seller, &asset))
    }

    /// Address the child auction for (asset, seller) has, or will have once set up
    pub fn auction_address(env: Env, asset: Address, seller: Address) -> Result<Address, Error> {
        let deployer = WasmAuctionDeployer::load(&env)?;
        Ok(deployer.child_address(&env, &asset, &seller))
    }

    pub fn is_auction_active(env: Env, child: Address) -> bool {
        directory::is_active(&env, &child)
    }

    pub fn get_auction_asset(env: Env, child: Address) -> Option<Address> {
        directory::asset_of(&env, &child)
    }

    // ========== INTERNAL HELPERS ==========

    fn require_owner(env: &Env, owner: &Address) -> Result<(), Error> {
        owner.require_auth();
        if *owner != storage::get_owner(env)? {
            return Err(Error::Unauthorized);
        }
        Ok(())
    }
}

#[cfg(test)]
mod test;
