// Copyright 2023, Offchain Labs, Inc.
// For license information, see https://github.com/OffchainLabs/nitro/blob/master/LICENSE

use eyre::ErrReport;
use num_enum::{IntoPrimitive, TryFromPrimitive};
use std::fmt::{self, Display};

/// The result of running a program to completion.
#[derive(Debug)]
pub enum UserOutcome {
    Success(Vec<u8>),
    Revert(Vec<u8>),
    Failure(ErrReport),
    OutOfGas,
    OutOfStack,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, IntoPrimitive, TryFromPrimitive)]
#[repr(u8)]
pub enum UserOutcomeKind {
    Success = 0,
    Revert,
    Failure,
    OutOfGas,
    OutOfStack,
}

impl UserOutcome {
    pub fn kind(&self) -> UserOutcomeKind {
        match self {
            Self::Success(_) => UserOutcomeKind::Success,
            Self::Revert(_) => UserOutcomeKind::Revert,
            Self::Failure(_) => UserOutcomeKind::Failure,
            Self::OutOfGas => UserOutcomeKind::OutOfGas,
            Self::OutOfStack => UserOutcomeKind::OutOfStack,
        }
    }

    pub fn into_data(self) -> (UserOutcomeKind, Vec<u8>) {
        let kind = self.kind();
        let data = match self {
            Self::Success(data) | Self::Revert(data) => data,
            Self::Failure(err) => format!("{err:?}").into_bytes(),
            _ => vec![],
        };
        (kind, data)
    }

    /// The status byte the host reports to its caller. 0 means success,
    /// anything else an abort.
    pub fn status(&self) -> u8 {
        self.kind().into()
    }
}

impl PartialEq for UserOutcome {
    fn eq(&self, other: &Self) -> bool {
        use UserOutcome::*;
        match (self, other) {
            (Success(a), Success(b)) => a == b,
            (Revert(a), Revert(b)) => a == b,
            (Failure(_), Failure(_)) => true,
            (OutOfGas, OutOfGas) => true,
            (OutOfStack, OutOfStack) => true,
            _ => false,
        }
    }
}

impl Display for UserOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use UserOutcome::*;
        match self {
            Success(data) => write!(f, "success {}", hex::encode(data)),
            Revert(data) => write!(f, "revert {}", hex::encode(data)),
            Failure(err) => write!(f, "failure: {err}"),
            OutOfGas => write!(f, "out of gas"),
            OutOfStack => write!(f, "out of stack"),
        }
    }
}
