// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! BIP70 Payment Protocol signing and verification.
//!
//! This crate is the primary entry point: it signs `PaymentRequest`
//! messages against an X.509 certificate chain and validates received
//! requests back to a qualified end-entity certificate.
//!
//! Design note: to keep the public API simple, the message types and X.509
//! building blocks from the member crates are re-exported at the crate
//! root (lib.rs is a publisher).

mod error;
mod qualified;
mod signer;
mod validator;

pub use error::Bip70Error;
pub use qualified::QualifiedCertificate;
pub use signer::RequestSigner;
pub use validator::RequestValidator;

pub use bip70_common::{Output, PaymentDetails, PaymentRequest, X509Certificates, PKI_TYPE_NONE};
pub use bip70_x509::{
    build_certification_path, parse_certificate_der, resolve_signature_algorithm, CertificationPath, ChainError,
    ParsedCertificate, PathValidationConfig, PathValidationError, PathValidationResult, PkiType,
    SignatureAlgorithm, TrustStore, TrustStoreLoader,
};
