// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! Error taxonomy for signing and validation.
//!
//! Every failure is terminal and surfaced immediately; there are no
//! retries and no algorithm downgrades. Callers must treat any error from
//! validation as "do not trust this payment request".

use bip70_x509::{ChainError, PathValidationError};

#[derive(thiserror::Error, Debug)]
pub enum Bip70Error {
    /// Caller misuse, e.g. signing with `pki_type = none`.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Canonical serialization or message decoding failure.
    #[error("encoding error: {0}")]
    Encoding(String),

    /// No signature algorithm mapping for the requested combination.
    #[error("unsupported algorithm: {0}")]
    UnsupportedAlgorithm(String),

    /// The request names a PKI scheme this implementation does not know.
    #[error("unsupported pki_type '{0}'")]
    UnsupportedPkiType(String),

    /// The request is unsigned (`pki_type = none`); it cannot be qualified
    /// and the caller decides policy.
    #[error("payment request is not signed (pki_type = none)")]
    Unverifiable,

    /// Certificate container or certificate parse failure.
    #[error(transparent)]
    Certificate(#[from] ChainError),

    /// A path validation stage failed; propagated unchanged.
    #[error(transparent)]
    PathValidation(#[from] PathValidationError),

    /// The request signature does not verify under the end-entity key.
    #[error("payment request signature does not verify under the end-entity certificate")]
    SignatureMismatch,

    /// Internal invariant guard: a qualified certificate was constructed
    /// from a path and a validation result that disagree on the end entity.
    #[error("CertificationPath entity certificate must match PathValidationResult certificate")]
    IdentityMismatch,
}
