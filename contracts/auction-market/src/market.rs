//! Coordinator flows behind the contract surface.
//!
//! Callers authenticate the acting party before entering a flow. An error
//! rolls back the whole invocation. Setup, revision, termination and
//! settlement also finish every guard before their first storage write.

use soroban_sdk::{vec, xdr::FromXdr, Address, Bytes, Env, IntoVal, Symbol, Val, Vec};

use crate::deployer::AuctionDeployer;
use crate::directory;
use crate::errors::Error;
use crate::events::{AuctionEndRequested, AuctionRevised, AuctionSetUp, AuctionSettled, EscrowConfirmed};
use crate::fingerprint::fingerprint;
use crate::registry;
use crate::types::{AuctionInfo, AuctionTerms, TransferNft};

/// Escrow notification from `asset`: `prior_owner` handed it to the market.
///
/// A non-empty `forward_payload` carries setup terms, and the auction is set
/// up in the same invocation. Returns the child address in that case.
pub fn confirm_escrow<D: AuctionDeployer>(
    env: &Env,
    deployer: &D,
    asset: &Address,
    prior_owner: &Address,
    forward_payload: &Bytes,
) -> Result<Option<Address>, Error> {
    let terms = if forward_payload.is_empty() {
        None
    } else {
        Some(decode_embedded_terms(env, forward_payload)?)
    };

    registry::confirm(env, &fingerprint(env, prior_owner, asset));

    EscrowConfirmed {
        asset: asset.clone(),
        seller: prior_owner.clone(),
    }
    .publish(env);

    match terms {
        Some(terms) => set_up_auction(env, deployer, prior_owner, asset, &terms).map(Some),
        None => Ok(None),
    }
}

pub fn set_up_auction<D: AuctionDeployer>(
    env: &Env,
    deployer: &D,
    seller: &Address,
    asset: &Address,
    terms: &AuctionTerms,
) -> Result<Address, Error> {
    registry::require_confirmed(env, &fingerprint(env, seller, asset))?;

    let info = AuctionInfo::opening(seller, terms);
    validate_pricing(&info)?;

    let child = deployer.child_address(env, asset, seller);
    directory::activate(env, &child, asset)?;
    if !directory::is_deployed(env, &child) {
        deployer.create(env, asset, seller);
        directory::mark_deployed(env, &child);
    }
    deployer.build(env, &child, &info);

    AuctionSetUp {
        child: child.clone(),
        asset: asset.clone(),
        info,
    }
    .publish(env);

    Ok(child)
}

pub fn revise_auction<D: AuctionDeployer>(
    env: &Env,
    deployer: &D,
    seller: &Address,
    asset: &Address,
    terms: &AuctionTerms,
) -> Result<Address, Error> {
    registry::require_confirmed(env, &fingerprint(env, seller, asset))?;

    let info = AuctionInfo::opening(seller, terms);
    validate_pricing(&info)?;

    let child = deployer.child_address(env, asset, seller);
    directory::renew(env, &child, asset)?;
    deployer.revise(env, &child, &info);

    AuctionRevised {
        child: child.clone(),
        asset: asset.clone(),
        info,
    }
    .publish(env);

    Ok(child)
}

/// Forward a termination request. The directory and registry stay as they
/// are; the child reports the outcome through [`settle`].
pub fn end_auction<D: AuctionDeployer>(
    env: &Env,
    deployer: &D,
    seller: &Address,
    asset: &Address,
) -> Result<Address, Error> {
    let child = deployer.child_address(env, asset, seller);
    directory::require_active(env, &child)?;
    deployer.end(env, &child);

    AuctionEndRequested {
        child: child.clone(),
        asset: asset.clone(),
    }
    .publish(env);

    Ok(child)
}

/// Settlement callback from a concluded child: release the asset to
/// `request.new_owner` and forget the auction and its escrow.
pub fn settle<D: AuctionDeployer>(
    env: &Env,
    deployer: &D,
    sender: &Address,
    request: &TransferNft,
) -> Result<(), Error> {
    let child = deployer.child_address(env, &request.asset, &request.seller);
    if *sender != child {
        return Err(Error::Unauthorized);
    }
    directory::require_active(env, &child)?;

    transfer_asset(env, request);

    directory::deactivate(env, &child);
    registry::clear(env, &fingerprint(env, &request.seller, &request.asset));

    AuctionSettled {
        child,
        asset: request.asset.clone(),
        seller: request.seller.clone(),
        new_owner: request.new_owner.clone(),
    }
    .publish(env);

    Ok(())
}

// ========== INTERNAL HELPERS ==========

fn validate_pricing(info: &AuctionInfo) -> Result<(), Error> {
    if info.reserve_price < 0 || info.buy_now_price <= info.reserve_price {
        return Err(Error::InvalidPricing);
    }
    Ok(())
}

/// Payload layout: XDR tuple `(beneficiary, reserve_price, buy_now_price, auction_period)`.
///
/// Only a well-formed value of another shape maps to `MalformedPayload`;
/// bytes that are not XDR at all trap in the host decoder.
fn decode_embedded_terms(env: &Env, payload: &Bytes) -> Result<AuctionTerms, Error> {
    let (beneficiary, reserve_price, buy_now_price, auction_period) =
        <(Address, i128, i128, u64)>::from_xdr(env, payload).map_err(|_| Error::MalformedPayload)?;

    Ok(AuctionTerms {
        reserve_price,
        buy_now_price,
        auction_period,
        beneficiary: Some(beneficiary),
    })
}

/// Instruct the asset contract to move ownership from the market to the new owner.
fn transfer_asset(env: &Env, request: &TransferNft) {
    let args: Vec<Val> = vec![
        env,
        env.current_contract_address().into_val(env),
        request.query_id.into_val(env),
        request.new_owner.into_val(env),
        request.response_destination.into_val(env),
        request.custom_payload.into_val(env),
        request.forward_amount.into_val(env),
        request.forward_payload.into_val(env),
    ];
    env.invoke_contract::<()>(&request.asset, &Symbol::new(env, "transfer"), args);
}
