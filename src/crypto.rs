// Copyright 2023, Offchain Labs, Inc.
// For license information, see https://github.com/OffchainLabs/nitro/blob/master/LICENSE

use crate::Bytes32;
use tiny_keccak::{Hasher, Keccak};

pub fn keccak<T: AsRef<[u8]>>(preimage: T) -> Bytes32 {
    let mut hasher = Keccak::v256();
    let mut output = [0u8; 32];
    hasher.update(preimage.as_ref());
    hasher.finalize(&mut output);
    output.into()
}
