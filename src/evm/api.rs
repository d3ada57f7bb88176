// Copyright 2023, Offchain Labs, Inc.
// For license information, see https://github.com/OffchainLabs/nitro/blob/master/LICENSE

use crate::{evm::user::UserOutcomeKind, Bytes20, Bytes32};

pub trait EvmApi: Send + 'static {
    /// Calls the contract at the given address, transferring `value` along
    /// with the payload. Returns the EVM return data's length, the gas cost,
    /// and whether the call succeeded.
    /// Analogous to `vm.CALL`.
    ///
    /// Implementations clamp the gas request to whatever the caller has
    /// left, so a `u64::MAX` request forwards the entire remaining budget.
    fn contract_call(
        &mut self,
        contract: Bytes20,
        calldata: Vec<u8>,
        gas: u64,
        value: Bytes32,
    ) -> (u32, u64, UserOutcomeKind);

    /// Gets the balance of the given account.
    /// Returns the balance and the access cost in gas.
    /// Analogous to `vm.BALANCE`.
    fn account_balance(&mut self, address: Bytes20) -> (Bytes32, u64);
}
