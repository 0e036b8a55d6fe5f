// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! Trusted root certificates.
//!
//! A `TrustStore` is loaded once and shared read-only across validations.
//! Membership is DER identity: a certificate is an anchor only if its exact
//! DER bytes are in the store.

use crate::chain::{parse_certificate_der, ChainError, ParsedCertificate};

#[derive(Debug, Clone, Default)]
pub struct TrustStore {
    roots: Vec<ParsedCertificate>,
}

impl TrustStore {
    /// Build a store from explicit DER roots. Every root must parse.
    pub fn from_der_roots(roots_der: &[Vec<u8>]) -> Result<Self, ChainError> {
        let mut roots = Vec::with_capacity(roots_der.len());
        for (index, der) in roots_der.iter().enumerate() {
            let cert = parse_certificate_der(der).map_err(|reason| ChainError::MalformedCertificate { index, reason })?;
            roots.push(cert);
        }
        Ok(Self { roots })
    }

    /// Exact-DER membership test.
    pub fn contains_der(&self, der: &[u8]) -> bool {
        self.roots.iter().any(|r| r.der == der)
    }

    pub fn roots(&self) -> &[ParsedCertificate] {
        &self.roots
    }

    pub fn len(&self) -> usize {
        self.roots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.roots.is_empty()
    }
}

pub struct TrustStoreLoader;

impl TrustStoreLoader {
    /// Load the operating environment's trusted roots.
    ///
    /// Unparseable entries are skipped; some platform stores carry
    /// certificates `x509-parser` rejects and those cannot anchor a chain
    /// anyway. Fails only when nothing loads at all.
    pub fn from_system() -> Result<TrustStore, ChainError> {
        let loaded = rustls_native_certs::load_native_certs();

        let mut roots = Vec::new();
        for der in &loaded.certs {
            let der = der.as_ref();
            if der.is_empty() {
                continue;
            }
            if let Ok(cert) = parse_certificate_der(der) {
                roots.push(cert);
            }
        }

        if roots.is_empty() {
            let detail = loaded
                .errors
                .first()
                .map(|e| e.to_string())
                .unwrap_or_else(|| "no usable root certificates found".to_string());
            return Err(ChainError::TrustStoreLoad(detail));
        }

        Ok(TrustStore { roots })
    }
}
