// Copyright 2015-2019 Parity Technologies (UK) Ltd.
// This file is part of Parity Ethereum.

// Parity Ethereum is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.

// Parity Ethereum is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.

// You should have received a copy of the GNU General Public License
// along with Parity Ethereum.  If not, see <http://www.gnu.org/licenses/>.

use crate::{
    public_to_address, Address, Error, Message, Public, Secret, SECP256K1,
    SECP256K1_HALF_N, SECP256K1_N,
};
use cbn_types::{u256_to_be_bytes, H256, U256};
use rustc_hex::ToHex;
use secp256k1::{
    ecdsa::{RecoverableSignature, RecoveryId},
    Message as SecpMessage,
};
use std::fmt;

/// Tag byte of an uncompressed SEC1 public key.
const UNCOMPRESSED_TAG: u8 = 0x04;

/// Signature encoded as `r ‖ s ‖ v`, with `v` the raw recovery id (0 or 1).
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Signature([u8; 65]);

impl Signature {
    pub fn r(&self) -> &[u8] { &self.0[0..32] }

    pub fn s(&self) -> &[u8] { &self.0[32..64] }

    pub fn v(&self) -> u8 { self.0[64] }

    pub fn from_rsv(r: &H256, s: &H256, v: u8) -> Self {
        let mut sig = [0u8; 65];
        sig[0..32].copy_from_slice(r.as_bytes());
        sig[32..64].copy_from_slice(s.as_bytes());
        sig[64] = v;
        Signature(sig)
    }

    /// Checks that the signature components are canonical: `r` and `s` in
    /// `[1, n)`, `s` in the lower half of the order and `v` in `{0, 1}`.
    pub fn is_valid(&self) -> bool {
        validate_signature_values(
            self.v(),
            &U256::from_big_endian(self.r()),
            &U256::from_big_endian(self.s()),
            true,
        )
    }
}

impl fmt::Debug for Signature {
    fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        f.debug_struct("Signature")
            .field("r", &self.0[0..32].to_hex::<String>())
            .field("s", &self.0[32..64].to_hex::<String>())
            .field("v", &self.0[64..65].to_hex::<String>())
            .finish()
    }
}

impl AsRef<[u8]> for Signature {
    fn as_ref(&self) -> &[u8] { &self.0 }
}

impl From<[u8; 65]> for Signature {
    fn from(s: [u8; 65]) -> Self { Signature(s) }
}

impl From<Signature> for [u8; 65] {
    fn from(s: Signature) -> Self { s.0 }
}

/// Reports whether `(v, r, s)` are acceptable signature values. With
/// `homestead` set, `s` above `n / 2` is rejected as malleable.
pub fn validate_signature_values(
    v: u8, r: &U256, s: &U256, homestead: bool,
) -> bool {
    if r.is_zero() || s.is_zero() {
        return false;
    }
    if homestead && *s > *SECP256K1_HALF_N {
        return false;
    }
    *r < *SECP256K1_N && *s < *SECP256K1_N && (v == 0 || v == 1)
}

pub fn sign(secret: &Secret, message: &Message) -> Result<Signature, Error> {
    let sec = secret.to_secp256k1_secret()?;
    let msg = SecpMessage::from_slice(message.as_bytes())
        .map_err(|_| Error::InvalidMessage)?;
    let s = SECP256K1.sign_ecdsa_recoverable(&msg, &sec);
    let (rec_id, data) = s.serialize_compact();
    let mut data_arr = [0; 65];

    data_arr[0..64].copy_from_slice(&data[0..64]);
    data_arr[64] = rec_id.to_i32() as u8;
    Ok(Signature(data_arr))
}

/// Recovers the 64 byte public key that produced `signature` over `message`.
pub fn recover(signature: &Signature, message: &Message) -> Result<Public, Error> {
    let pubkey = ecrecover(message, signature.as_ref())?;
    Ok(Public::from_slice(&pubkey[1..65]))
}

/// Raw public key recovery over a 65 byte `r ‖ s ‖ recovery id` signature.
///
/// The signature is used as given: no normalization of the recovery byte and
/// no range or low-`s` checks beyond what the curve library enforces. The
/// result is the 65 byte uncompressed key, tag byte included.
pub fn ecrecover(hash: &H256, sig: &[u8]) -> Result<Vec<u8>, Error> {
    if sig.len() != 65 {
        return Err(Error::InvalidSignatureLength(sig.len()));
    }
    let rec_id = RecoveryId::from_i32(sig[64] as i32)
        .map_err(|_| Error::InvalidRecoveryId(sig[64]))?;
    let rsig = RecoverableSignature::from_compact(&sig[0..64], rec_id)?;
    let msg = SecpMessage::from_slice(hash.as_bytes())
        .map_err(|_| Error::InvalidMessage)?;
    let pubkey = SECP256K1.recover_ecdsa(&msg, &rsig)?;

    Ok(pubkey.serialize_uncompressed().to_vec())
}

/// Recovers the signer address from Ethereum style `(r, s, v)` values, where
/// `v` carries the recovery id offset by 27.
///
/// `v` wider than one byte, non-canonical values and a recovered key that is
/// not uncompressed are all rejected.
pub fn recover_plain(
    sighash: &H256, r: &U256, s: &U256, v: &U256,
) -> Result<Address, Error> {
    if v.bits() > 8 {
        return Err(Error::InvalidSignature);
    }
    let v = (v.low_u64() as u8).wrapping_sub(27);
    if !validate_signature_values(v, r, s, true) {
        return Err(Error::InvalidSignature);
    }

    let mut sig = [0u8; 65];
    sig[0..32].copy_from_slice(&u256_to_be_bytes(r));
    sig[32..64].copy_from_slice(&u256_to_be_bytes(s));
    sig[64] = v;

    let public = ecrecover(sighash, &sig)?;
    if public.len() != 65 || public[0] != UNCOMPRESSED_TAG {
        return Err(Error::InvalidPublicKey);
    }
    Ok(public_to_address(&Public::from_slice(&public[1..65])))
}
