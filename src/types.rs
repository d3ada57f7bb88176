// Copyright 2023, Offchain Labs, Inc.
// For license information, see https://github.com/OffchainLabs/nitro/blob/master/LICENSE

use serde::{Deserialize, Serialize};
use std::{
    fmt,
    ops::{Deref, DerefMut},
};

/// A 160-bit EVM account address.
#[derive(Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(C)]
pub struct Bytes20(pub [u8; 20]);

impl Deref for Bytes20 {
    type Target = [u8; 20];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl DerefMut for Bytes20 {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

impl AsRef<[u8]> for Bytes20 {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl From<[u8; 20]> for Bytes20 {
    fn from(x: [u8; 20]) -> Self {
        Self(x)
    }
}

impl From<u32> for Bytes20 {
    fn from(x: u32) -> Self {
        let mut b = [0u8; 20];
        b[16..].copy_from_slice(&x.to_be_bytes());
        Self(b)
    }
}

impl From<u64> for Bytes20 {
    fn from(x: u64) -> Self {
        let mut b = [0u8; 20];
        b[12..].copy_from_slice(&x.to_be_bytes());
        Self(b)
    }
}

impl fmt::Display for Bytes20 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{}", hex::encode(self.0))
    }
}

impl fmt::Debug for Bytes20 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

/// A 256-bit EVM word.
#[derive(Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(C)]
pub struct Bytes32(pub [u8; 32]);

impl Bytes32 {
    /// Narrows the word to an address by keeping its low 20 bytes.
    /// The high 12 bytes are dropped unchecked, so callers may pass
    /// words whose padding holds arbitrary garbage.
    pub fn to_bytes20(self) -> Bytes20 {
        let mut b = [0u8; 20];
        b.copy_from_slice(&self.0[12..]);
        Bytes20(b)
    }

    /// The word as a `u64`, when it fits.
    pub fn try_to_u64(self) -> Option<u64> {
        if self.0[..24] != [0; 24] {
            return None;
        }
        let mut b = [0u8; 8];
        b.copy_from_slice(&self.0[24..]);
        Some(u64::from_be_bytes(b))
    }
}

impl Deref for Bytes32 {
    type Target = [u8; 32];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl DerefMut for Bytes32 {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

impl AsRef<[u8]> for Bytes32 {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl From<[u8; 32]> for Bytes32 {
    fn from(x: [u8; 32]) -> Self {
        Self(x)
    }
}

impl From<u32> for Bytes32 {
    fn from(x: u32) -> Self {
        let mut b = [0u8; 32];
        b[28..].copy_from_slice(&x.to_be_bytes());
        Self(b)
    }
}

impl From<u64> for Bytes32 {
    fn from(x: u64) -> Self {
        let mut b = [0u8; 32];
        b[24..].copy_from_slice(&x.to_be_bytes());
        Self(b)
    }
}

impl fmt::Display for Bytes32 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{}", hex::encode(self.0))
    }
}

impl fmt::Debug for Bytes32 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_narrowing() {
        let mut word = [0xffu8; 32];
        word[12..].copy_from_slice(&[0x22; 20]);
        let address = Bytes32::from(word).to_bytes20();
        assert_eq!(address, Bytes20::from([0x22; 20]));

        // the padding never reaches the address
        let clean = {
            let mut word = [0u8; 32];
            word[12..].copy_from_slice(&[0x22; 20]);
            Bytes32::from(word).to_bytes20()
        };
        assert_eq!(address, clean);
    }

    #[test]
    fn test_conversions() {
        assert_eq!(Bytes20::from(1234u32), Bytes20::from(1234u64));
        assert_eq!(Bytes32::from(u64::MAX).try_to_u64(), Some(u64::MAX));

        let mut large = [0u8; 32];
        large[23] = 1;
        assert_eq!(Bytes32::from(large).try_to_u64(), None);
    }

    #[test]
    fn test_display() {
        let value = Bytes32::from(0xdeadbeefu32);
        let text = format!("{value}");
        assert!(text.starts_with("0x"));
        assert!(text.ends_with("deadbeef"));
        assert_eq!(text.len(), 2 + 64);
    }
}
