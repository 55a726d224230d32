use std::collections::BTreeMap;
use std::fmt;

use crate::error::InvalidMessage;
use crate::msgs::codec::{Codec, Reader};
use crate::msgs::enums::ExtensionType;

fn hex(f: &mut fmt::Formatter<'_>, payload: &[u8]) -> fmt::Result {
    for b in payload {
        write!(f, "{b:02x}")?;
    }
    Ok(())
}

/// A session identifier as sent in a ServerHello.
///
/// Between zero and 32 opaque bytes.  An empty id means the server
/// declined to offer the session for resumption.
#[derive(Copy, Clone)]
pub struct SessionId {
    len: usize,
    data: [u8; 32],
}

impl fmt::Debug for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        hex(f, self.as_ref())
    }
}

impl PartialEq for SessionId {
    fn eq(&self, other: &Self) -> bool {
        if self.len != other.len {
            return false;
        }

        let mut diff = 0u8;
        for i in 0..self.len {
            diff |= self.data[i] ^ other.data[i];
        }

        diff == 0u8
    }
}

impl Eq for SessionId {}

impl Codec for SessionId {
    fn encode(&self, bytes: &mut Vec<u8>) {
        debug_assert!(self.len <= 32);
        bytes.push(self.len as u8);
        bytes.extend_from_slice(self.as_ref());
    }

    fn read(r: &mut Reader<'_>) -> Result<Self, InvalidMessage> {
        let len = u8::read(r)? as usize;
        if len > 32 {
            return Err(InvalidMessage::TrailingData("SessionID"));
        }

        let bytes = match r.take(len) {
            Some(bytes) => bytes,
            None => return Err(InvalidMessage::MissingData("SessionID")),
        };

        let mut out = [0u8; 32];
        out[..len].clone_from_slice(bytes);
        Ok(Self { data: out, len })
    }
}

impl SessionId {
    pub fn empty() -> Self {
        Self {
            data: [0u8; 32],
            len: 0,
        }
    }

    /// Make a `SessionId` from raw bytes; `None` if longer than 32 bytes.
    pub fn new(bytes: &[u8]) -> Option<Self> {
        if bytes.len() > 32 {
            return None;
        }

        let mut data = [0u8; 32];
        data[..bytes.len()].copy_from_slice(bytes);
        Some(Self {
            data,
            len: bytes.len(),
        })
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

impl AsRef<[u8]> for SessionId {
    fn as_ref(&self) -> &[u8] {
        &self.data[..self.len]
    }
}

/// A set of hello extensions: each extension type maps to its opaque,
/// still-encoded payload.
///
/// Iteration is in ascending order of extension type code.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Extensions {
    items: BTreeMap<u16, Vec<u8>>,
}

impl Extensions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace the payload for `typ`, returning any previous payload.
    pub fn insert(&mut self, typ: ExtensionType, payload: Vec<u8>) -> Option<Vec<u8>> {
        self.items.insert(typ.into(), payload)
    }

    pub fn get(&self, typ: ExtensionType) -> Option<&[u8]> {
        self.items
            .get(&u16::from(typ))
            .map(Vec::as_slice)
    }

    pub fn contains(&self, typ: ExtensionType) -> bool {
        self.items.contains_key(&u16::from(typ))
    }

    pub fn remove(&mut self, typ: ExtensionType) -> Option<Vec<u8>> {
        self.items.remove(&u16::from(typ))
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (ExtensionType, &[u8])> + '_ {
        self.items
            .iter()
            .map(|(typ, payload)| (ExtensionType::from(*typ), payload.as_slice()))
    }

    pub fn types(&self) -> impl Iterator<Item = ExtensionType> + '_ {
        self.items
            .keys()
            .map(|typ| ExtensionType::from(*typ))
    }
}

impl FromIterator<(ExtensionType, Vec<u8>)> for Extensions {
    fn from_iter<I: IntoIterator<Item = (ExtensionType, Vec<u8>)>>(iter: I) -> Self {
        Self {
            items: iter
                .into_iter()
                .map(|(typ, payload)| (u16::from(typ), payload))
                .collect(),
        }
    }
}

impl fmt::Debug for Extensions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        struct Payload<'a>(&'a [u8]);

        impl fmt::Debug for Payload<'_> {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                hex(f, self.0)
            }
        }

        f.debug_map()
            .entries(
                self.iter()
                    .map(|(typ, payload)| (typ, Payload(payload))),
            )
            .finish()
    }
}
