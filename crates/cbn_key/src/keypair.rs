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

use crate::{Address, Error, Public, Secret, SECP256K1};
use keccak_hash::keccak;
use rustc_hex::ToHex;
use secp256k1::PublicKey;
use std::fmt;

/// Address of an uncompressed public key: the last 20 bytes of the keccak
/// hash of its 64 coordinate bytes.
pub fn public_to_address(public: &Public) -> Address {
    let hash = keccak(public);
    Address::from_slice(&hash[12..])
}

#[derive(Debug, Clone, PartialEq)]
pub struct KeyPair {
    secret: Secret,
    public: Public,
}

impl fmt::Display for KeyPair {
    fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        writeln!(f, "secret:  {}", self.secret.to_hex())?;
        writeln!(f, "public:  {}", self.public.as_bytes().to_hex::<String>())?;
        write!(f, "address: {}", self.address().as_bytes().to_hex::<String>())
    }
}

impl KeyPair {
    pub fn from_secret(secret: Secret) -> Result<KeyPair, Error> {
        let s = secret.to_secp256k1_secret()?;
        let pub_key = PublicKey::from_secret_key(&SECP256K1, &s);
        let serialized = pub_key.serialize_uncompressed();

        let public = Public::from_slice(&serialized[1..65]);

        Ok(KeyPair { secret, public })
    }

    pub fn secret(&self) -> &Secret { &self.secret }

    pub fn public(&self) -> &Public { &self.public }

    pub fn address(&self) -> Address { public_to_address(&self.public) }
}
