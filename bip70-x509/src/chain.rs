// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! Certificate parsing and certification path construction.
//!
//! DER parsing is delegated to `x509-parser`; this module extracts the
//! fields path validation needs into an owned `ParsedCertificate` so the
//! rest of the crate never touches borrowed ASN.1 structures.

use bip70_common::X509Certificates;

#[derive(thiserror::Error, Debug)]
pub enum ChainError {
    #[error("certificate container is empty")]
    EmptyContainer,

    #[error("malformed certificate at index {index}: {reason}")]
    MalformedCertificate { index: usize, reason: String },

    #[error("failed to load system trust store: {0}")]
    TrustStoreLoad(String),
}

/// An owned view of one parsed certificate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedCertificate {
    /// Full DER encoding; certificate identity is DER identity.
    pub der: Vec<u8>,
    /// Subject distinguished name.
    pub subject: String,
    /// Issuer distinguished name.
    pub issuer: String,
    /// DER-encoded SubjectPublicKeyInfo.
    pub spki_der: Vec<u8>,
    /// Algorithm OID of the subject public key.
    pub spki_algorithm_oid: String,
    /// DER-encoded TBSCertificate (the signed portion).
    pub tbs_der: Vec<u8>,
    /// OID of the certificate's signature algorithm.
    pub signature_oid: String,
    /// Signature bit-string contents.
    pub signature: Vec<u8>,
    /// Validity window, unix seconds, inclusive on both ends.
    pub not_before: i64,
    pub not_after: i64,
    /// Whether basicConstraints marks this certificate as a CA.
    pub is_ca: bool,
}

/// Parse one DER certificate into an owned view.
pub fn parse_certificate_der(der: &[u8]) -> Result<ParsedCertificate, String> {
    let (rest, cert) = x509_parser::parse_x509_certificate(der).map_err(|e| format!("invalid cert DER: {e}"))?;
    if !rest.is_empty() {
        return Err("trailing bytes after certificate".to_string());
    }

    let is_ca = cert
        .basic_constraints()
        .ok()
        .flatten()
        .map(|bc| bc.value.ca)
        .unwrap_or(false);

    Ok(ParsedCertificate {
        der: der.to_vec(),
        subject: cert.tbs_certificate.subject.to_string(),
        issuer: cert.tbs_certificate.issuer.to_string(),
        spki_der: cert.tbs_certificate.subject_pki.raw.to_vec(),
        spki_algorithm_oid: cert.tbs_certificate.subject_pki.algorithm.algorithm.to_string(),
        // `x509-parser` keeps the raw DER for TBSCertificate; expose it via `AsRef`.
        tbs_der: cert.tbs_certificate.as_ref().to_vec(),
        signature_oid: cert.signature_algorithm.algorithm.to_string(),
        signature: cert.signature_value.data.to_vec(),
        not_before: cert.validity().not_before.timestamp(),
        not_after: cert.validity().not_after.timestamp(),
        is_ca,
    })
}

/// An end-entity certificate plus its intermediates in chain order.
///
/// Built once, never mutated. The path terminates *at* a trust anchor but
/// does not necessarily include one; anchor discovery happens during
/// validation.
#[derive(Debug, Clone)]
pub struct CertificationPath {
    end_entity: ParsedCertificate,
    intermediates: Vec<ParsedCertificate>,
}

impl CertificationPath {
    pub fn new(end_entity: ParsedCertificate, intermediates: Vec<ParsedCertificate>) -> Self {
        Self { end_entity, intermediates }
    }

    pub fn end_entity(&self) -> &ParsedCertificate {
        &self.end_entity
    }

    /// Intermediates, closest to the leaf first.
    pub fn intermediates(&self) -> &[ParsedCertificate] {
        &self.intermediates
    }
}

/// Build a certification path from a BIP70 certificate container.
///
/// Index 0 is the mandatory end entity; indices 1..n are intermediates in
/// chain order. Order is preserved exactly as received.
pub fn build_certification_path(certs: &X509Certificates) -> Result<CertificationPath, ChainError> {
    if certs.is_empty() {
        return Err(ChainError::EmptyContainer);
    }

    let mut parsed = Vec::with_capacity(certs.len());
    for (index, der) in certs.certificate.iter().enumerate() {
        let cert = parse_certificate_der(der).map_err(|reason| ChainError::MalformedCertificate { index, reason })?;
        parsed.push(cert);
    }

    let end_entity = parsed.remove(0);
    Ok(CertificationPath::new(end_entity, parsed))
}
