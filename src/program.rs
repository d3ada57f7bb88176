// Copyright 2023, Offchain Labs, Inc.
// For license information, see https://github.com/OffchainLabs/nitro/blob/master/LICENSE

use crate::{
    crypto,
    evm::{
        api::EvmApi,
        calldata_load,
        user::{UserOutcome, UserOutcomeKind},
        EvmData,
    },
};

/// Solidity ABI signature of the one exported operation.
pub const SEND_SIGNATURE: &str = "send(address)";

pub const SELECTOR_LEN: usize = 4;

/// The closed set of operations this program answers to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operation {
    Send,
}

impl Operation {
    /// The operation's 4-byte selector, the leading bytes of its
    /// signature's keccak per the solidity ABI.
    pub fn selector(self) -> [u8; SELECTOR_LEN] {
        let hash = crypto::keccak(match self {
            Self::Send => SEND_SIGNATURE,
        });
        [hash[0], hash[1], hash[2], hash[3]]
    }

    /// Routes calldata to an operation by its selector prefix.
    /// Calldata shorter than 4 bytes reads as zero-padded, the same way
    /// `calldata_load` treats the tail, and so never matches.
    pub fn route(input: &[u8]) -> Option<Self> {
        let mut selector = [0u8; SELECTOR_LEN];
        let len = input.len().min(SELECTOR_LEN);
        selector[..len].copy_from_slice(&input[..len]);

        if selector == Self::Send.selector() {
            return Some(Self::Send);
        }
        None
    }
}

/// The program's sole entry point. `Ok` carries return data and `Err`
/// revert data; this program produces neither, so both are empty.
pub fn user_main<E: EvmApi>(
    api: &mut E,
    evm_data: &EvmData,
    input: &[u8],
) -> Result<Vec<u8>, Vec<u8>> {
    match Operation::route(input) {
        Some(Operation::Send) => send(api, evm_data, input),
        None => Err(vec![]),
    }
}

/// Relays the attached value to the address named in calldata.
fn send<E: EvmApi>(api: &mut E, evm_data: &EvmData, input: &[u8]) -> Result<Vec<u8>, Vec<u8>> {
    let word = calldata_load(input, SELECTOR_LEN);
    let dest = word.to_bytes20();

    // empty payload; the host clamps the u64::MAX gas request down to
    // everything this call has left
    let (_, _, status) = api.contract_call(dest, vec![], u64::MAX, evm_data.msg_value);
    match status {
        UserOutcomeKind::Success => Ok(vec![]),
        _ => Err(vec![]),
    }
}

/// Runs the program to completion, folding its result into the outcome
/// the host reports: status 0 for success, nonzero for an abort.
pub fn run_program<E: EvmApi>(api: &mut E, evm_data: &EvmData, calldata: &[u8]) -> UserOutcome {
    match user_main(api, evm_data, calldata) {
        Ok(outs) => UserOutcome::Success(outs),
        Err(outs) => UserOutcome::Revert(outs),
    }
}
