// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! Payment request validation.

use bip70_common::{PaymentRequest, X509Certificates, PKI_TYPE_NONE};
use bip70_x509::{
    build_certification_path, resolve_signature_algorithm, validate_path, verify_signature, AlgorithmError,
    PathValidationConfig, PkiType, SignatureError, TrustStore,
};

use crate::error::Bip70Error;
use crate::qualified::QualifiedCertificate;

/// Validates signed `PaymentRequest` messages against a trust store.
///
/// The trust store is loaded once and shared read-only; independent
/// validations may run concurrently. Given identical inputs (including the
/// configured reference time) validation always returns the same result.
#[derive(Debug)]
pub struct RequestValidator {
    config: PathValidationConfig,
    trust_store: TrustStore,
}

impl RequestValidator {
    pub fn new(config: PathValidationConfig, trust_store: TrustStore) -> Self {
        Self { config, trust_store }
    }

    /// Validate a signed request end to end.
    ///
    /// Builds and validates the certificate chain, recomputes the canonical
    /// unsigned bytes, and verifies the signature under the end-entity
    /// certificate's public key. The signature check is terminal: no
    /// fallback algorithm is ever attempted.
    pub fn validate(&self, request: &PaymentRequest) -> Result<QualifiedCertificate, Bip70Error> {
        let pki_type_str = request.pki_type_str();
        if pki_type_str == PKI_TYPE_NONE {
            return Err(Bip70Error::Unverifiable);
        }
        let pki_type = PkiType::from_wire(pki_type_str)
            .ok_or_else(|| Bip70Error::UnsupportedPkiType(pki_type_str.to_string()))?;

        let pki_data = request
            .pki_data
            .as_deref()
            .ok_or_else(|| Bip70Error::Encoding("signed request is missing pki_data".to_string()))?;
        let certs = X509Certificates::parse(pki_data).map_err(Bip70Error::Encoding)?;

        let qualified = self.validate_certificate_chain(&certs)?;

        // The signature covers the request serialized with an empty
        // signature field; reproduce those bytes exactly.
        let signing_bytes = request.signing_bytes();

        let end_entity = qualified.end_entity();
        let algorithm =
            resolve_signature_algorithm(pki_type, &end_entity.spki_algorithm_oid).map_err(|e| match e {
                AlgorithmError::PkiTypeNone => Bip70Error::Unverifiable,
                AlgorithmError::UnsupportedKeyAlgorithm { .. } => Bip70Error::UnsupportedAlgorithm(e.to_string()),
            })?;

        let signature = request.signature.as_deref().unwrap_or_default();
        verify_signature(algorithm, &end_entity.spki_der, &signing_bytes, signature).map_err(|e| match e {
            SignatureError::InvalidPublicKey(msg) => Bip70Error::UnsupportedAlgorithm(msg),
            _ => Bip70Error::SignatureMismatch,
        })?;

        Ok(qualified)
    }

    /// Build and validate the certification path from a certificate
    /// container, without touching a payment request.
    ///
    /// This is the chain-qualification half of `validate`, exposed for
    /// callers that receive certificates out of band.
    pub fn validate_certificate_chain(&self, certs: &X509Certificates) -> Result<QualifiedCertificate, Bip70Error> {
        let path = build_certification_path(certs)?;
        let result = validate_path(&path, &self.config, &self.trust_store)?;
        QualifiedCertificate::new(path, result)
    }
}
