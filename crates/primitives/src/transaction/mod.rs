// Copyright 2019 Conflux Foundation. All rights reserved.
// Conflux is free software and distributed under GNU General Public License.
// See http://www.gnu.org/licenses/

mod data;

pub use data::{DelegateData, SendData};

use crate::{
    hash::keccak,
    keylib::{self, recover_plain, Secret},
};
use cbn_types::{Address, Bytes, CoinSymbol, H256, U256};
use rlp::{self, Decodable, DecoderError, Encodable, Rlp, RlpStream};
use std::{fmt, ops::Deref};

const SIGNED_ITEM_COUNT: usize = 10;
const UNSIGNED_ITEM_COUNT: usize = 7;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
/// Errors concerning a transaction itself, before it touches any state.
pub enum TransactionError {
    /// Signature error
    #[error("Transaction has invalid signature: {0}.")]
    InvalidSignature(String),
    /// Invalid RLP encoding
    #[error("Transaction has invalid RLP structure: {0}.")]
    InvalidRlp(String),
}

impl From<keylib::Error> for TransactionError {
    fn from(err: keylib::Error) -> Self {
        TransactionError::InvalidSignature(format!("{}", err))
    }
}

impl From<DecoderError> for TransactionError {
    fn from(err: DecoderError) -> Self {
        TransactionError::InvalidRlp(format!("{}", err))
    }
}

/// Wire tag of a payload variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum TxType {
    Send = 0x01,
    Delegate = 0x07,
}

impl TxType {
    pub fn from_u8(value: u8) -> Option<TxType> {
        match value {
            0x01 => Some(TxType::Send),
            0x07 => Some(TxType::Delegate),
            _ => None,
        }
    }
}

impl fmt::Display for TxType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{:#04x}", *self as u8)
    }
}

impl Encodable for TxType {
    fn rlp_append(&self, s: &mut RlpStream) { s.append(&(*self as u8)); }
}

impl Decodable for TxType {
    fn decode(rlp: &Rlp) -> Result<Self, DecoderError> {
        TxType::from_u8(rlp.as_val()?)
            .ok_or(DecoderError::Custom("unknown transaction type"))
    }
}

/// Typed payload of a transaction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Send(SendData),
    Delegate(DelegateData),
}

impl Action {
    pub fn tx_type(&self) -> TxType {
        match self {
            Action::Send(_) => TxType::Send,
            Action::Delegate(_) => TxType::Delegate,
        }
    }

    /// RLP of the payload alone, as embedded in the transaction.
    pub fn data_bytes(&self) -> Bytes {
        match self {
            Action::Send(data) => rlp::encode(data).to_vec(),
            Action::Delegate(data) => rlp::encode(data).to_vec(),
        }
    }

    pub fn decode_data(
        tx_type: TxType, data: &[u8],
    ) -> Result<Action, DecoderError> {
        Ok(match tx_type {
            TxType::Send => Action::Send(rlp::decode(data)?),
            TxType::Delegate => Action::Delegate(rlp::decode(data)?),
        })
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Action::Send(data) => fmt::Display::fmt(data, f),
            Action::Delegate(data) => fmt::Display::fmt(data, f),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transaction {
    pub nonce: u64,
    pub gas_price: U256,
    /// Coin the commission is paid in.
    pub gas_coin: CoinSymbol,
    pub action: Action,
    pub payload: Bytes,
    pub service_data: Bytes,
}

impl Transaction {
    fn rlp_append_unsigned(&self, s: &mut RlpStream) {
        s.append(&self.nonce)
            .append(&self.gas_price)
            .append(&self.gas_coin)
            .append(&self.action.tx_type())
            .append(&self.action.data_bytes())
            .append(&self.payload)
            .append(&self.service_data);
    }

    pub fn tx_type(&self) -> TxType { self.action.tx_type() }

    /// Hash covered by the sender's signature.
    pub fn hash_for_signing(&self) -> H256 {
        let mut s = RlpStream::new_list(UNSIGNED_ITEM_COUNT);
        self.rlp_append_unsigned(&mut s);
        keccak(s.out())
    }

    /// Signs the transaction, producing `v` in the `27 + recovery id` form.
    pub fn sign(
        self, secret: &Secret,
    ) -> Result<TransactionWithSignature, keylib::Error> {
        let sig = keylib::sign(secret, &self.hash_for_signing())?;
        Ok(TransactionWithSignature::new(
            self,
            U256::from(sig.v() as u64 + 27),
            U256::from_big_endian(sig.r()),
            U256::from_big_endian(sig.s()),
        ))
    }
}

/// Signed transaction information without verified signature.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransactionWithSignature {
    pub unsigned: Transaction,
    pub v: U256,
    pub r: U256,
    pub s: U256,
    /// Hash of the full encoding.
    hash: H256,
}

impl Deref for TransactionWithSignature {
    type Target = Transaction;

    fn deref(&self) -> &Self::Target { &self.unsigned }
}

impl Encodable for TransactionWithSignature {
    fn rlp_append(&self, s: &mut RlpStream) {
        s.begin_list(SIGNED_ITEM_COUNT);
        self.unsigned.rlp_append_unsigned(s);
        s.append(&self.v).append(&self.r).append(&self.s);
    }
}

impl Decodable for TransactionWithSignature {
    fn decode(rlp: &Rlp) -> Result<Self, DecoderError> {
        if rlp.item_count()? != SIGNED_ITEM_COUNT {
            return Err(DecoderError::RlpIncorrectListLen);
        }
        let tx_type: TxType = rlp.val_at(3)?;
        let data: Bytes = rlp.val_at(4)?;
        Ok(TransactionWithSignature {
            unsigned: Transaction {
                nonce: rlp.val_at(0)?,
                gas_price: rlp.val_at(1)?,
                gas_coin: rlp.val_at(2)?,
                action: Action::decode_data(tx_type, &data)?,
                payload: rlp.val_at(5)?,
                service_data: rlp.val_at(6)?,
            },
            v: rlp.val_at(7)?,
            r: rlp.val_at(8)?,
            s: rlp.val_at(9)?,
            hash: keccak(rlp.as_raw()),
        })
    }
}

impl TransactionWithSignature {
    pub fn new(unsigned: Transaction, v: U256, r: U256, s: U256) -> Self {
        let mut tx = TransactionWithSignature {
            unsigned,
            v,
            r,
            s,
            hash: H256::zero(),
        };
        tx.hash = keccak(rlp::encode(&tx));
        tx
    }

    pub fn from_raw(raw: &[u8]) -> Result<Self, TransactionError> {
        Ok(rlp::decode(raw)?)
    }

    pub fn hash(&self) -> H256 { self.hash }

    /// Recovers the signer from `(r, s, v)` over
    /// [`Transaction::hash_for_signing`].
    pub fn sender(&self) -> Result<Address, TransactionError> {
        Ok(recover_plain(
            &self.unsigned.hash_for_signing(),
            &self.r,
            &self.s,
            &self.v,
        )?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keylib::KeyPair;
    use std::str::FromStr;

    fn keypair() -> KeyPair {
        KeyPair::from_secret(
            Secret::from_str(
                "64e27afaab363f21eec05291084367f6f1297a7b280d69d672febecda94a09ea",
            )
            .unwrap(),
        )
        .unwrap()
    }

    fn delegate_tx() -> Transaction {
        Transaction {
            nonce: 1,
            gas_price: U256::one(),
            gas_coin: "CBN".parse().unwrap(),
            action: Action::Delegate(DelegateData {
                pub_key: vec![0x11; 32],
                coin: "CBN".parse().unwrap(),
                stake: U256::from(100),
            }),
            payload: b"memo".to_vec(),
            service_data: vec![],
        }
    }

    #[test]
    fn signed_transaction_recovers_sender() {
        let keypair = keypair();
        let tx = delegate_tx().sign(keypair.secret()).unwrap();
        assert_eq!(tx.sender().unwrap(), keypair.address());

        let raw = rlp::encode(&tx);
        let decoded = TransactionWithSignature::from_raw(&raw).unwrap();
        assert_eq!(decoded, tx);
        assert_eq!(decoded.hash(), keccak(&raw));
        assert_eq!(decoded.tx_type(), TxType::Delegate);
    }

    #[test]
    fn signature_covers_payload() {
        let keypair = keypair();
        let mut tx = delegate_tx().sign(keypair.secret()).unwrap();
        tx.unsigned.payload = b"other".to_vec();
        assert_ne!(tx.sender().ok(), Some(keypair.address()));
    }

    #[test]
    fn unknown_type_is_rejected() {
        let tx = delegate_tx().sign(keypair().secret()).unwrap();
        let mut s = RlpStream::new_list(SIGNED_ITEM_COUNT);
        s.append(&tx.nonce)
            .append(&tx.gas_price)
            .append(&tx.gas_coin)
            .append(&0x42u8)
            .append(&tx.action.data_bytes())
            .append(&tx.payload)
            .append(&tx.service_data)
            .append(&tx.v)
            .append(&tx.r)
            .append(&tx.s);
        assert!(matches!(
            TransactionWithSignature::from_raw(&s.out()),
            Err(TransactionError::InvalidRlp(_))
        ));
    }

    #[test]
    fn payload_must_match_type() {
        let tx = delegate_tx().sign(keypair().secret()).unwrap();
        let mut s = RlpStream::new_list(SIGNED_ITEM_COUNT);
        s.append(&tx.nonce)
            .append(&tx.gas_price)
            .append(&tx.gas_coin)
            .append(&TxType::Send)
            .append(&tx.action.data_bytes())
            .append(&tx.payload)
            .append(&tx.service_data)
            .append(&tx.v)
            .append(&tx.r)
            .append(&tx.s);
        assert!(TransactionWithSignature::from_raw(&s.out()).is_err());
    }

    #[test]
    fn unsigned_transaction_has_no_sender() {
        let tx = TransactionWithSignature::new(
            delegate_tx(),
            U256::zero(),
            U256::zero(),
            U256::zero(),
        );
        assert!(matches!(
            tx.sender(),
            Err(TransactionError::InvalidSignature(_))
        ));
    }
}
