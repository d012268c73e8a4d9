// Copyright 2019 Conflux Foundation. All rights reserved.
// Conflux is free software and distributed under GNU General Public License.
// See http://www.gnu.org/licenses/

use super::Code;
use cbn_types::Bytes;

/// An indexable key/value attached to a successful transaction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Tag {
    pub key: String,
    pub value: String,
}

/// The outcome of executing one transaction.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Response {
    pub code: Code,
    pub data: Bytes,
    pub log: String,
    pub info: String,
    pub gas_used: u64,
    pub gas_wanted: u64,
    pub tags: Vec<Tag>,
}

impl Response {
    pub fn ok(gas: u64) -> Self {
        Response {
            gas_used: gas,
            gas_wanted: gas,
            ..Default::default()
        }
    }

    pub fn rejected(code: Code, log: impl Into<String>) -> Self {
        Response {
            code,
            log: log.into(),
            ..Default::default()
        }
    }

    pub fn with_tag(mut self, key: &str, value: impl Into<String>) -> Self {
        self.tags.push(Tag {
            key: key.to_owned(),
            value: value.into(),
        });
        self
    }

    pub fn is_ok(&self) -> bool { self.code.is_ok() }
}
