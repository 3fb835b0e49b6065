
use core::cell::RefCell;

use soroban_sdk::{
    contract, contractimpl, contracttype,
    testutils::{Address as _, Ledger, LedgerInfo},
    Address, Bytes, BytesN, Env, Vec,
};

use crate::deployer::AuctionDeployer;
use crate::directory;
use crate::types::{AuctionInfo, AuctionTerms};
use crate::{AuctionMarket, AuctionMarketClient};

pub fn setup_test() -> (Env, Address, AuctionMarketClient<'static>, BytesN<32>) {
    let env = Env::default();
    env.mock_all_auths();

    env.ledger().set(LedgerInfo {
        timestamp: 1000,
        protocol_version: 23,
        sequence_number: 1,
        network_id: Default::default(),
        base_reserve: 10,
        min_temp_entry_ttl: 100,
        min_persistent_entry_ttl: 100,
        max_entry_ttl: 10_000_000,
    });

    let contract_id = env.register(AuctionMarket, ());
    let client = AuctionMarketClient::new(&env, &contract_id);

    let owner = Address::generate(&env);
    let template = auction_template(&env);
    client.initialize(&owner, &template);

    (env, owner, client, template)
}

pub fn auction_template(env: &Env) -> BytesN<32> {
    let mut bytes = [0u8; 32];
    bytes[0] = 0xa1;
    bytes[1] = 0x5c;
    BytesN::from_array(env, &bytes)
}

pub fn terms(reserve_price: i128, buy_now_price: i128, auction_period: u64) -> AuctionTerms {
    AuctionTerms {
        reserve_price,
        buy_now_price,
        auction_period,
        beneficiary: None,
    }
}

/// Register an NFT item owned by `owner` and move it into the market's custody.
pub fn escrow_nft(
    env: &Env,
    market: &AuctionMarketClient,
    owner: &Address,
) -> (Address, MockNftItemClient<'static>) {
    let nft_id = env.register(MockNftItem, ());
    let nft = MockNftItemClient::new(env, &nft_id);
    nft.init(owner);
    nft.transfer(owner, &1, &market.address, owner, &None, &1, &Bytes::new(env));
    (nft_id, nft)
}

// ============================================================================
// RECORDING DEPLOYER
// ============================================================================

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Sent {
    Build(Address, AuctionInfo),
    Revise(Address, AuctionInfo),
    End(Address),
}

/// Derives child addresses like the production deployer but only records the
/// deployments and messages it would send.
pub struct RecordingDeployer {
    template: BytesN<32>,
    created: RefCell<Vec<Address>>,
    sent: RefCell<Vec<Sent>>,
}

impl RecordingDeployer {
    pub fn new(env: &Env, template: &BytesN<32>) -> Self {
        RecordingDeployer {
            template: template.clone(),
            created: RefCell::new(Vec::new(env)),
            sent: RefCell::new(Vec::new(env)),
        }
    }

    pub fn created(&self) -> Vec<Address> {
        self.created.borrow().clone()
    }

    pub fn sent(&self) -> Vec<Sent> {
        self.sent.borrow().clone()
    }
}

impl AuctionDeployer for RecordingDeployer {
    fn template(&self) -> BytesN<32> {
        self.template.clone()
    }

    fn create(&self, env: &Env, asset: &Address, seller: &Address) {
        let child = self.child_address(env, asset, seller);
        self.created.borrow_mut().push_back(child);
    }

    fn build(&self, _env: &Env, child: &Address, info: &AuctionInfo) {
        self.sent
            .borrow_mut()
            .push_back(Sent::Build(child.clone(), info.clone()));
    }

    fn revise(&self, _env: &Env, child: &Address, info: &AuctionInfo) {
        self.sent
            .borrow_mut()
            .push_back(Sent::Revise(child.clone(), info.clone()));
    }

    fn end(&self, _env: &Env, child: &Address) {
        self.sent.borrow_mut().push_back(Sent::End(child.clone()));
    }
}

// ============================================================================
// MOCK NFT ITEM
// ============================================================================

#[contracttype]
enum NftKey {
    Owner,
}

/// Single NFT item: tracks its owner and notifies the new owner on transfer
/// when `forward_amount` is positive.
#[contract]
pub struct MockNftItem;

#[contractimpl]
impl MockNftItem {
    pub fn init(env: Env, owner: Address) {
        env.storage().instance().set(&NftKey::Owner, &owner);
    }

    pub fn owner(env: Env) -> Address {
        env.storage().instance().get(&NftKey::Owner).unwrap()
    }

    pub fn transfer(
        env: Env,
        from: Address,
        _query_id: u64,
        new_owner: Address,
        _response_destination: Address,
        _custom_payload: Option<Bytes>,
        forward_amount: i128,
        forward_payload: Bytes,
    ) {
        from.require_auth();
        let owner: Address = env.storage().instance().get(&NftKey::Owner).unwrap();
        if owner != from {
            panic!("not the owner");
        }
        env.storage().instance().set(&NftKey::Owner, &new_owner);

        if forward_amount > 0 {
            AuctionMarketClient::new(&env, &new_owner).on_nft_received(
                &env.current_contract_address(),
                &from,
                &forward_payload,
            );
        }
    }
}

// ============================================================================
// MOCK CHILD AUCTION
// ============================================================================

#[contracttype]
enum ChildKey {
    Info,
    Builds,
    Ended,
}

/// Stands in for a deployed child auction and keeps what the market sent it.
#[contract]
pub struct MockChild;

#[contractimpl]
impl MockChild {
    pub fn build_nft_auction(env: Env, info: AuctionInfo) {
        let builds: u32 = env.storage().instance().get(&ChildKey::Builds).unwrap_or(0);
        env.storage().instance().set(&ChildKey::Builds, &(builds + 1));
        env.storage().instance().set(&ChildKey::Info, &info);
        env.storage().instance().set(&ChildKey::Ended, &false);
    }

    pub fn revise_auction(env: Env, info: AuctionInfo) {
        env.storage().instance().set(&ChildKey::Info, &info);
    }

    pub fn end_auction(env: Env) {
        env.storage().instance().set(&ChildKey::Ended, &true);
    }

    pub fn info(env: Env) -> Option<AuctionInfo> {
        env.storage().instance().get(&ChildKey::Info)
    }

    pub fn builds(env: Env) -> u32 {
        env.storage().instance().get(&ChildKey::Builds).unwrap_or(0)
    }

    pub fn ended(env: Env) -> bool {
        env.storage().instance().get(&ChildKey::Ended).unwrap_or(false)
    }
}

/// Put a `MockChild` at the address the market derives for (asset, seller)
/// and record it as already deployed, so the production deployer only
/// messages it.
pub fn deployed_child(
    env: &Env,
    market: &AuctionMarketClient,
    asset: &Address,
    seller: &Address,
) -> MockChildClient<'static> {
    let child = market.auction_address(asset, seller);
    env.register_at(&child, MockChild, ());
    env.as_contract(&market.address, || directory::mark_deployed(env, &child));
    MockChildClient::new(env, &child)
}
