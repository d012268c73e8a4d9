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

use crate::Error;
use cbn_types::H256;
use secp256k1::SecretKey;
use std::{fmt, ops::Deref, str::FromStr};
use zeroize::Zeroize;

/// A 32 byte secp256k1 secret scalar, wiped from memory on drop.
#[derive(Clone, PartialEq, Eq)]
pub struct Secret {
    inner: H256,
}

impl Drop for Secret {
    fn drop(&mut self) { self.inner.0.zeroize() }
}

impl fmt::Debug for Secret {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        write!(fmt, "Secret(..)")
    }
}

impl fmt::Display for Secret {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        write!(
            fmt,
            "Secret: 0x{:x}{:x}..{:x}{:x}",
            self.inner[0], self.inner[1], self.inner[30], self.inner[31]
        )
    }
}

impl Secret {
    /// Imports and validates the key. Fails for slices that are not 32 bytes
    /// long or that do not encode a scalar in `[1, n)`.
    pub fn from_slice(key: &[u8]) -> Result<Self, Error> {
        let secret = SecretKey::from_slice(key)
            .map_err(|_| Error::InvalidSecretKey)?;
        Ok(secret.into())
    }

    pub fn to_secp256k1_secret(&self) -> Result<SecretKey, Error> {
        SecretKey::from_slice(self.inner.as_bytes())
            .map_err(|_| Error::InvalidSecretKey)
    }

    pub fn to_hex(&self) -> String { format!("{:x}", self.inner) }
}

impl FromStr for Secret {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let hash = H256::from_str(s.trim_start_matches("0x"))
            .map_err(|e| Error::Custom(format!("{:?}", e)))?;
        Secret::from_slice(hash.as_bytes())
    }
}

impl From<SecretKey> for Secret {
    fn from(key: SecretKey) -> Self {
        Secret {
            inner: H256(key.secret_bytes()),
        }
    }
}

impl Deref for Secret {
    type Target = H256;

    fn deref(&self) -> &Self::Target { &self.inner }
}
