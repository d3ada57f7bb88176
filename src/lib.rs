// Copyright 2023, Offchain Labs, Inc.
// For license information, see https://github.com/OffchainLabs/nitro/blob/master/LICENSE

pub mod crypto;
pub mod evm;
pub mod program;
mod types;

pub use types::{Bytes20, Bytes32};

#[cfg(test)]
mod test;
