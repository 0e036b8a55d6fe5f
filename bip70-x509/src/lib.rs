// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! X.509 machinery for BIP70: certificate parsing, certification path
//! construction, trust-anchored path validation, and signature algorithm
//! selection for the `x509+sha1` / `x509+sha256` PKI types.

mod algorithm;
mod chain;
mod path;
mod pki_type;
mod trust_store;

pub use algorithm::{
    algorithm_for_x509_signature_oid, private_key_algorithm_oid, resolve_signature_algorithm,
    sign_message, verify_signature, AlgorithmError, SignatureAlgorithm, SignatureError,
    OID_EC_PUBLIC_KEY, OID_RSA_ENCRYPTION,
};
pub use chain::{build_certification_path, parse_certificate_der, CertificationPath, ChainError, ParsedCertificate};
pub use path::{validate_path, PathValidationConfig, PathValidationError, PathValidationResult};
pub use pki_type::PkiType;
pub use trust_store::{TrustStore, TrustStoreLoader};
