// Copyright 2025 the Zoomview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::string::String;

use thiserror::Error;

/// Errors from decoding view parameters.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ParamError {
    /// A numeric parameter did not hold a finite number.
    #[error("parameter `{key}` has invalid numeric value `{value}`")]
    InvalidNumber {
        /// Parameter name, such as `wx` or `rot`.
        key: String,
        /// The raw value.
        value: String,
    },
}
