/*
 *
 *    Copyright (c) 2020-2022 Project CHIP Authors
 *
 *    Licensed under the Apache License, Version 2.0 (the "License");
 *    you may not use this file except in compliance with the License.
 *    You may obtain a copy of the License at
 *
 *        http://www.apache.org/licenses/LICENSE-2.0
 *
 *    Unless required by applicable law or agreed to in writing, software
 *    distributed under the License is distributed on an "AS IS" BASIS,
 *    WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
 *    See the License for the specific language governing permissions and
 *    limitations under the License.
 */

use core::fmt;

use crate::im::{IMStatusCode, Status};

/// The error codes surfaced by the cluster client.
///
/// Three families are distinguishable to the caller:
/// - transport failures (`TxTimeout`, `NoExchange`, `NoSession`) - produced by
///   the driver and passed through unchanged;
/// - protocol status failures - the device answered with a non-success
///   Interaction Model status; the original [`Status`] is retained on the
///   [`Error`] and can be fetched with [`Error::im_status`];
/// - decode failures (`ValueTypeMismatch`, `ValueNotFound`, `InvalidDataType`)
///   - the response did not match the cluster's declared shape.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ErrorCode {
    AttributeNotFound,
    Busy,
    ClusterNotFound,
    CommandNotFound,
    ConstraintError,
    DataVersionMismatch,
    EndpointNotFound,
    FailSafeRequired,
    Failure,
    InvalidAction,
    InvalidCommand,
    InvalidDataType,
    InvalidState,
    InvalidSubscription,
    NoExchange,
    NoSession,
    NotFound,
    ResourceExhausted,
    TxTimeout,
    UnsupportedAccess,
    UnsupportedRead,
    UnsupportedWrite,
    ValueNotFound,
    ValueTypeMismatch,
}

impl From<ErrorCode> for Error {
    fn from(code: ErrorCode) -> Self {
        Self::new(code)
    }
}

impl From<IMStatusCode> for ErrorCode {
    fn from(status: IMStatusCode) -> Self {
        match status {
            IMStatusCode::UnsupportedEndpoint => ErrorCode::EndpointNotFound,
            IMStatusCode::UnsupportedCluster => ErrorCode::ClusterNotFound,
            IMStatusCode::UnsupportedAttribute | IMStatusCode::UnreportableAttribute => {
                ErrorCode::AttributeNotFound
            }
            IMStatusCode::UnsupportedCommand => ErrorCode::CommandNotFound,
            IMStatusCode::InvalidAction => ErrorCode::InvalidAction,
            IMStatusCode::InvalidCommand => ErrorCode::InvalidCommand,
            IMStatusCode::InvalidDataType => ErrorCode::InvalidDataType,
            IMStatusCode::UnsupportedAccess => ErrorCode::UnsupportedAccess,
            IMStatusCode::UnsupportedRead => ErrorCode::UnsupportedRead,
            IMStatusCode::UnsupportedWrite => ErrorCode::UnsupportedWrite,
            IMStatusCode::Busy => ErrorCode::Busy,
            IMStatusCode::DataVersionMismatch => ErrorCode::DataVersionMismatch,
            IMStatusCode::ResourceExhausted | IMStatusCode::PathsExhausted => {
                ErrorCode::ResourceExhausted
            }
            IMStatusCode::FailSafeRequired => ErrorCode::FailSafeRequired,
            IMStatusCode::ConstraintError => ErrorCode::ConstraintError,
            IMStatusCode::NotFound => ErrorCode::NotFound,
            IMStatusCode::Timeout => ErrorCode::TxTimeout,
            IMStatusCode::InvalidSubscription | IMStatusCode::NoUpstreamSubscription => {
                ErrorCode::InvalidSubscription
            }
            _ => ErrorCode::Failure,
        }
    }
}

pub struct Error {
    code: ErrorCode,
    status: Option<Status>,
    #[cfg(all(feature = "std", feature = "backtrace"))]
    backtrace: std::backtrace::Backtrace,
}

impl Error {
    pub fn new(code: ErrorCode) -> Self {
        Self {
            code,
            status: None,
            #[cfg(all(feature = "std", feature = "backtrace"))]
            backtrace: std::backtrace::Backtrace::capture(),
        }
    }

    pub const fn code(&self) -> ErrorCode {
        self.code
    }

    /// The Interaction Model status carried by the error, if the error
    /// originated from a non-success status reported by the device.
    ///
    /// Transport and decode failures return `None` here, which is what makes
    /// a device-side rejection distinguishable from a failure to talk to -
    /// or understand - the device.
    pub const fn im_status(&self) -> Option<Status> {
        self.status
    }

    #[cfg(all(feature = "std", feature = "backtrace"))]
    pub const fn backtrace(&self) -> &std::backtrace::Backtrace {
        &self.backtrace
    }
}

impl From<Status> for Error {
    fn from(status: Status) -> Self {
        Self {
            code: status.status.into(),
            status: Some(status),
            #[cfg(all(feature = "std", feature = "backtrace"))]
            backtrace: std::backtrace::Backtrace::capture(),
        }
    }
}

impl From<IMStatusCode> for Error {
    fn from(status: IMStatusCode) -> Self {
        Status::new(status, None).into()
    }
}

impl fmt::Debug for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        #[cfg(not(all(feature = "std", feature = "backtrace")))]
        {
            write!(f, "Error::{}", self)?;
        }

        #[cfg(all(feature = "std", feature = "backtrace"))]
        {
            writeln!(f, "Error::{} {{", self)?;
            write!(f, "{}", self.backtrace())?;
            writeln!(f, "}}")?;
        }

        Ok(())
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.status {
            Some(status) => write!(f, "{:?} (IM status {:?})", self.code, status),
            None => write!(f, "{:?}", self.code),
        }
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for Error {
    fn format(&self, f: defmt::Formatter<'_>) {
        defmt::write!(f, "Error::{:?}", self.code)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}
