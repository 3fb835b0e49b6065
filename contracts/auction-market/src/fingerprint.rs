use soroban_sdk::{xdr::ToXdr, Address, Bytes, Env, U256};

/// Lookup key for a (seller, asset) pair.
///
/// `sha256(xdr(seller) ‖ xdr(asset))` read as a big-endian integer. Address
/// XDR is length-prefixed, so the concatenation is unambiguous and swapping
/// the arguments yields a different key.
pub fn fingerprint(env: &Env, seller: &Address, asset: &Address) -> U256 {
    let mut preimage = seller.clone().to_xdr(env);
    preimage.append(&asset.clone().to_xdr(env));

    let digest = env.crypto().sha256(&preimage);
    U256::from_be_bytes(env, &Bytes::from_array(env, &digest.to_array()))
}
