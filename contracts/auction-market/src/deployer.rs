use soroban_sdk::{vec, xdr::ToXdr, Address, BytesN, Env, IntoVal, Symbol, Val, Vec};

use crate::errors::Error;
use crate::storage;
use crate::types::AuctionInfo;

/// Salt of the child auction for (asset, seller).
///
/// Content hash of the template identifier and the child's constructor
/// arguments `(market, asset, seller)`. Combined with the market as deployer
/// this fixes the child address before anything is deployed.
pub fn derive_salt(
    env: &Env,
    template: &BytesN<32>,
    market: &Address,
    asset: &Address,
    seller: &Address,
) -> BytesN<32> {
    let mut preimage = template.clone().to_xdr(env);
    preimage.append(&market.clone().to_xdr(env));
    preimage.append(&asset.clone().to_xdr(env));
    preimage.append(&seller.clone().to_xdr(env));
    env.crypto().sha256(&preimage).to_bytes()
}

/// Creates child auctions and delivers the coordinator's messages to them.
pub trait AuctionDeployer {
    /// Wasm hash the children are built from.
    fn template(&self) -> BytesN<32>;

    fn child_address(&self, env: &Env, asset: &Address, seller: &Address) -> Address {
        let market = env.current_contract_address();
        let salt = derive_salt(env, &self.template(), &market, asset, seller);
        env.deployer().with_current_contract(salt).deployed_address()
    }

    /// Deploy the child contract for (asset, seller) at its derived address.
    fn create(&self, env: &Env, asset: &Address, seller: &Address);

    /// Hand a deployed child the opening parameters of a new auction.
    fn build(&self, env: &Env, child: &Address, info: &AuctionInfo);

    /// Replace the parameters of a live child.
    fn revise(&self, env: &Env, child: &Address, info: &AuctionInfo);

    /// Ask a live child to conclude.
    fn end(&self, env: &Env, child: &Address);
}

/// Deploys children from the template recorded in the market config.
pub struct WasmAuctionDeployer {
    template: BytesN<32>,
}

impl WasmAuctionDeployer {
    pub fn load(env: &Env) -> Result<Self, Error> {
        Ok(WasmAuctionDeployer {
            template: storage::get_auction_template(env)?,
        })
    }
}

impl AuctionDeployer for WasmAuctionDeployer {
    fn template(&self) -> BytesN<32> {
        self.template.clone()
    }

    fn create(&self, env: &Env, asset: &Address, seller: &Address) {
        let market = env.current_contract_address();
        let salt = derive_salt(env, &self.template, &market, asset, seller);

        env.deployer()
            .with_current_contract(salt)
            .deploy_v2(self.template.clone(), (market, asset.clone(), seller.clone()));
    }

    fn build(&self, env: &Env, child: &Address, info: &AuctionInfo) {
        let args: Vec<Val> = vec![env, info.into_val(env)];
        env.invoke_contract::<()>(child, &Symbol::new(env, "build_nft_auction"), args);
    }

    fn revise(&self, env: &Env, child: &Address, info: &AuctionInfo) {
        let args: Vec<Val> = vec![env, info.into_val(env)];
        env.invoke_contract::<()>(child, &Symbol::new(env, "revise_auction"), args);
    }

    fn end(&self, env: &Env, child: &Address) {
        env.invoke_contract::<()>(child, &Symbol::new(env, "end_auction"), Vec::new(env));
    }
}
