// Copyright 2019 Conflux Foundation. All rights reserved.
// Conflux is free software and distributed under GNU General Public License.
// See http://www.gnu.org/licenses/

//! Bearer checks.
//!
//! A check is signed twice. The issuer signs [`Check::hash`] with the
//! account key, which authorizes the transfer. The `lock` field holds a
//! second signature, made with a key derived from a passphrase, over the
//! narrower [`Check::lock_hash`]; whoever knows the passphrase can prove it
//! when redeeming.

use crate::{hash::keccak, keylib};
use cbn_types::{trim_leading_zeros, Address, Bytes, CoinSymbol, H256, U256};
use keylib::{ecrecover, recover_plain, sign, Secret};
use rlp::{Decodable, DecoderError, Encodable, Rlp, RlpStream};
use std::fmt;

const CHECK_ITEM_COUNT: usize = 8;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CheckError {
    #[error("invalid transaction v, r, s values")]
    InvalidSignature,
    #[error("invalid public key")]
    InvalidPublicKey,
    #[error("incorrect tx signature")]
    IncompleteSignature,
    #[error("invalid check encoding: {0}")]
    Decoder(#[from] DecoderError),
    #[error(transparent)]
    Key(#[from] keylib::Error),
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Check {
    pub nonce: u64,
    /// Last block height at which the check can be redeemed.
    pub due_block: u64,
    pub coin: CoinSymbol,
    pub value: U256,
    /// Passphrase signature as a big-endian integer, without leading zeros.
    pub lock: Bytes,
    pub v: U256,
    pub r: U256,
    pub s: U256,
}

impl Check {
    pub fn new(
        nonce: u64, due_block: u64, coin: CoinSymbol, value: U256,
    ) -> Self {
        Check {
            nonce,
            due_block,
            coin,
            value,
            ..Default::default()
        }
    }

    fn append_terms(&self, s: &mut RlpStream) {
        s.append(&self.nonce)
            .append(&self.due_block)
            .append(&self.coin)
            .append(&self.value);
    }

    /// Hash signed by the issuer: covers the lock but not the signature.
    pub fn hash(&self) -> H256 {
        let mut s = RlpStream::new_list(5);
        self.append_terms(&mut s);
        s.append(&self.lock);
        keccak(s.out())
    }

    /// Hash signed by the passphrase key.
    pub fn lock_hash(&self) -> H256 {
        let mut s = RlpStream::new_list(4);
        self.append_terms(&mut s);
        keccak(s.out())
    }

    /// Address of the issuer.
    ///
    /// `v` must be 27 or 28 and `(r, s)` canonical with a low `s`; any
    /// failure to recover a key is reported as `InvalidSignature`.
    pub fn sender(&self) -> Result<Address, CheckError> {
        recover_plain(&self.hash(), &self.r, &self.s, &self.v)
            .map_err(|_| CheckError::InvalidSignature)
    }

    /// Uncompressed public key (65 bytes, tag included) of the passphrase
    /// key that produced `lock`.
    ///
    /// Unlike [`Check::sender`] the lock is fed to recovery as is: its last
    /// byte must already be the raw recovery id and no canonicality checks
    /// are made.
    pub fn lock_pub_key(&self) -> Result<Bytes, CheckError> {
        let public = ecrecover(&self.lock_hash(), &self.lock)?;
        if public.is_empty() || public[0] != 0x04 {
            return Err(CheckError::InvalidPublicKey);
        }
        Ok(public)
    }

    /// Sets `lock` to the signature of [`Check::lock_hash`] by `passphrase`.
    pub fn with_lock(mut self, passphrase: &Secret) -> Result<Self, CheckError> {
        let signature = sign(passphrase, &self.lock_hash())?;
        self.lock = trim_leading_zeros(signature.as_ref()).to_vec();
        Ok(self)
    }

    /// Signs the check as its issuer. Must be called after the lock is set.
    pub fn sign(mut self, secret: &Secret) -> Result<Self, CheckError> {
        let signature = sign(secret, &self.hash())?;
        self.r = U256::from_big_endian(signature.r());
        self.s = U256::from_big_endian(signature.s());
        self.v = U256::from(signature.v() as u64 + 27);
        Ok(self)
    }

    /// Decodes a check from its wire form. Input that does not carry all
    /// of `v`, `r` and `s` (not a list, or a list that stops before the
    /// signature values) is reported as `IncompleteSignature`.
    pub fn decode_from_bytes(buf: &[u8]) -> Result<Check, CheckError> {
        let rlp = Rlp::new(buf);
        if !rlp.is_list() || rlp.item_count()? < CHECK_ITEM_COUNT {
            return Err(CheckError::IncompleteSignature);
        }
        Ok(rlp.as_val()?)
    }
}

impl Encodable for Check {
    fn rlp_append(&self, s: &mut RlpStream) {
        s.begin_list(CHECK_ITEM_COUNT);
        self.append_terms(s);
        s.append(&self.lock)
            .append(&self.v)
            .append(&self.r)
            .append(&self.s);
    }
}

impl Decodable for Check {
    fn decode(rlp: &Rlp) -> Result<Self, DecoderError> {
        if rlp.item_count()? != CHECK_ITEM_COUNT {
            return Err(DecoderError::RlpIncorrectListLen);
        }
        let lock: Bytes = rlp.val_at(4)?;
        if lock.first() == Some(&0) {
            return Err(DecoderError::Custom("lock has leading zero bytes"));
        }
        Ok(Check {
            nonce: rlp.val_at(0)?,
            due_block: rlp.val_at(1)?,
            coin: rlp.val_at(2)?,
            value: rlp.val_at(3)?,
            lock,
            v: rlp.val_at(5)?,
            r: rlp.val_at(6)?,
            s: rlp.val_at(7)?,
        })
    }
}

impl fmt::Display for Check {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let sender = self.sender().unwrap_or_default();
        write!(
            f,
            "Check sender: Mx{:x} nonce: {}, dueBlock: {}, value: {} {}",
            sender, self.nonce, self.due_block, self.value, self.coin
        )
    }
}

#[cfg(test)]
mod tests {
    use super::{Check, CheckError};
    use crate::keylib::{self, KeyPair, Secret};
    use cbn_types::{CoinSymbol, U256};
    use rlp::RlpStream;
    use std::str::FromStr;

    fn issuer() -> KeyPair {
        KeyPair::from_secret(
            Secret::from_str(
                "64e27afaab363f21eec05291084367f6f1297a7b280d69d672febecda94a09ea",
            )
            .unwrap(),
        )
        .unwrap()
    }

    fn passphrase() -> KeyPair {
        KeyPair::from_secret(
            Secret::from_str(
                "a100df7a048e50ed308ea696dc600215098141cb391e9527329df289f9383f65",
            )
            .unwrap(),
        )
        .unwrap()
    }

    fn signed_check() -> Check {
        Check::new(1, 999_999, CoinSymbol::from_str("CBN").unwrap(), 10.into())
            .with_lock(passphrase().secret())
            .unwrap()
            .sign(issuer().secret())
            .unwrap()
    }

    #[test]
    fn recovers_issuer() {
        let check = signed_check();
        assert_eq!(check.sender().unwrap(), issuer().address());
    }

    #[test]
    fn tampering_changes_sender() {
        let mut check = signed_check();
        check.value = 11.into();
        assert_ne!(check.sender(), Ok(issuer().address()));

        let mut check = signed_check();
        check.lock[10] ^= 0xff;
        assert_ne!(check.sender(), Ok(issuer().address()));
    }

    #[test]
    fn altered_signature_byte_changes_sender() {
        let issuer = issuer().address();
        for byte in [0usize, 13, 31] {
            let flip = U256::from(0xa5) << (8 * byte);

            let mut check = signed_check();
            check.r = check.r ^ flip;
            match check.sender() {
                Ok(sender) => assert_ne!(sender, issuer),
                Err(e) => assert_eq!(e, CheckError::InvalidSignature),
            }

            let mut check = signed_check();
            check.s = check.s ^ flip;
            match check.sender() {
                Ok(sender) => assert_ne!(sender, issuer),
                Err(e) => assert_eq!(e, CheckError::InvalidSignature),
            }
        }
    }

    #[test]
    fn lock_does_not_cover_issuer_signature() {
        let check = signed_check();
        let mut resigned = check.clone();
        resigned.r = U256::zero();
        assert_eq!(check.lock_hash(), resigned.lock_hash());
        assert_eq!(check.hash(), resigned.hash());

        let mut relocked = check.clone();
        relocked.lock = vec![1, 2, 3];
        assert_eq!(check.lock_hash(), relocked.lock_hash());
        assert_ne!(check.hash(), relocked.hash());
    }

    #[test]
    fn lock_recovers_passphrase_key() {
        let check = signed_check();
        let public = check.lock_pub_key().unwrap();
        assert_eq!(public.len(), 65);
        assert_eq!(public[0], 0x04);
        assert_eq!(&public[1..], passphrase().public().as_bytes());
    }

    #[test]
    fn lock_of_wrong_length_fails_recovery() {
        let mut check = signed_check();
        check.lock.truncate(64);
        assert_eq!(
            check.lock_pub_key(),
            Err(CheckError::Key(keylib::Error::InvalidSignatureLength(64)))
        );
    }

    #[test]
    fn sender_rejects_bad_v() {
        let mut check = signed_check();
        check.v = U256::from(29);
        assert_eq!(check.sender(), Err(CheckError::InvalidSignature));

        check.v = U256::from(27 + 256);
        assert_eq!(check.sender(), Err(CheckError::InvalidSignature));
    }

    #[test]
    fn sender_rejects_out_of_range_values() {
        let mut check = signed_check();
        check.s = *keylib::SECP256K1_N - check.s;
        assert_eq!(check.sender(), Err(CheckError::InvalidSignature));

        let mut check = signed_check();
        check.r = U256::zero();
        assert_eq!(check.sender(), Err(CheckError::InvalidSignature));
    }

    #[test]
    fn wire_round_trip() {
        let check = signed_check();
        let decoded = Check::decode_from_bytes(&rlp::encode(&check)).unwrap();
        assert_eq!(decoded, check);
        assert_eq!(decoded.sender().unwrap(), issuer().address());
    }

    #[test]
    fn missing_signature_values() {
        let check = signed_check();
        let mut s = RlpStream::new_list(5);
        s.append(&check.nonce)
            .append(&check.due_block)
            .append(&check.coin)
            .append(&check.value)
            .append(&check.lock);
        assert_eq!(
            Check::decode_from_bytes(&s.out()),
            Err(CheckError::IncompleteSignature)
        );
    }

    #[test]
    fn malformed_bytes_fail_decoding() {
        let mut s = RlpStream::new_list(8);
        s.append(&1u64).append(&1u64).append(&vec![1u8, 2]);
        for _ in 0..5 {
            s.append(&0u64);
        }
        assert!(matches!(
            Check::decode_from_bytes(&s.out()),
            Err(CheckError::Decoder(_))
        ));
    }

    #[test]
    fn non_list_input_is_incomplete() {
        assert_eq!(
            Check::decode_from_bytes(&[]),
            Err(CheckError::IncompleteSignature)
        );
        assert_eq!(
            Check::decode_from_bytes(&rlp::encode(&42u64)),
            Err(CheckError::IncompleteSignature)
        );
    }

    #[test]
    fn display() {
        let check = signed_check();
        let expected = format!(
            "Check sender: Mx{:x} nonce: 1, dueBlock: 999999, value: 10 CBN",
            issuer().address()
        );
        assert_eq!(check.to_string(), expected);
    }
}
