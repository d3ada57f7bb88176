// Copyright 2023, Offchain Labs, Inc.
// For license information, see https://github.com/OffchainLabs/nitro/blob/master/LICENSE

use crate::{Bytes20, Bytes32};

pub mod api;
pub mod user;

// params.CallValueTransferGas
pub const CALL_VALUE_TRANSFER_GAS: u64 = 9000;

/// Reads the 32-byte word at `offset`, treating bytes past the end of the
/// input as zero. Analogous to `vm.CALLDATALOAD`.
pub fn calldata_load(input: &[u8], offset: usize) -> Bytes32 {
    let mut word = [0u8; 32];
    if offset < input.len() {
        let len = (input.len() - offset).min(32);
        word[..len].copy_from_slice(&input[offset..offset + len]);
    }
    word.into()
}

/// The per-call environment the host hands to the program.
#[derive(Clone, Copy, Debug, Default)]
#[repr(C)]
pub struct EvmData {
    pub contract_address: Bytes20,
    pub msg_sender: Bytes20,
    pub msg_value: Bytes32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_calldata_load() {
        let input: Vec<u8> = (1..=40).collect();

        let word = calldata_load(&input, 4);
        assert_eq!(word[0], 5);
        assert_eq!(word[31], 36);

        // a read straddling the end zero-pads
        let word = calldata_load(&input, 20);
        assert_eq!(word[..20], input[20..]);
        assert_eq!(word[20..], [0; 12]);

        // reads at and past the end produce the zero word
        assert_eq!(calldata_load(&input, 40), Bytes32::default());
        assert_eq!(calldata_load(&[], 0), Bytes32::default());
        assert_eq!(calldata_load(&input, usize::MAX), Bytes32::default());
    }
}
