// Copyright 2023, Offchain Labs, Inc.
// For license information, see https://github.com/OffchainLabs/nitro/blob/master/LICENSE

use crate::{program::Operation, Bytes20};


/// ABI-encodes a `send(address)` invocation: the selector, then the
/// address as a left-padded 32-byte word.
pub fn send_calldata(dest: Bytes20) -> Vec<u8> {
    send_calldata_with_padding(dest, [0; 12])
}

/// Same, but with caller-controlled garbage in the word's high 12 bytes.
pub fn send_calldata_with_padding(dest: Bytes20, padding: [u8; 12]) -> Vec<u8> {
    let mut data = Operation::Send.selector().to_vec();
    data.extend(padding);
    data.extend(*dest);
    data
}
