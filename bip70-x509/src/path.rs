// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! Trust-anchored certification path validation.
//!
//! Validation is a fixed sequence of fallible stages, each with its own
//! error variant, short-circuiting on the first failure:
//!
//! 1. path discovery against the trust store
//! 2. temporal validity at the supplied reference time
//! 3. signature chaining, leaf to root
//! 4. basic-constraints and depth policy
//!
//! The whole sequence is deterministic: the reference time is an explicit
//! input and no clock is read here. The temporal stage covers every
//! certificate in the discovered path including the anchor, so an expired
//! root surfaces as `ExpiredOrNotYetValid` rather than a policy error.

use crate::algorithm::{algorithm_for_x509_signature_oid, verify_signature};
use crate::chain::{CertificationPath, ParsedCertificate};
use crate::trust_store::TrustStore;

/// Per-validation parameters. Immutable; supplied by the caller per call.
#[derive(Debug, Copy, Clone)]
pub struct PathValidationConfig {
    /// Unix timestamp every certificate must be valid at.
    pub reference_time: i64,
    /// Maximum number of certificates in the discovered path.
    pub max_chain_length: usize,
}

impl PathValidationConfig {
    pub fn new(reference_time: i64, max_chain_length: usize) -> Self {
        Self {
            reference_time,
            max_chain_length,
        }
    }
}

#[derive(thiserror::Error, Debug)]
pub enum PathValidationError {
    #[error("certificate chain does not terminate at a trusted root")]
    UntrustedChain,

    #[error("certificate '{subject}' is outside its validity window at the reference time")]
    ExpiredOrNotYetValid { subject: String },

    #[error("certificate '{subject}' was not signed by its issuer")]
    BrokenChainSignature { subject: String },

    #[error("{0}")]
    PolicyViolation(String),
}

/// The outcome of a successful validation.
#[derive(Debug, Clone)]
pub struct PathValidationResult {
    end_entity: ParsedCertificate,
    certificates: Vec<ParsedCertificate>,
    trust_anchor: ParsedCertificate,
}

impl PathValidationResult {
    /// The verified end-entity certificate.
    pub fn end_entity(&self) -> &ParsedCertificate {
        &self.end_entity
    }

    /// The accepted path, leaf first, anchor last.
    pub fn certificates(&self) -> &[ParsedCertificate] {
        &self.certificates
    }

    /// The trust anchor the path terminated at.
    pub fn trust_anchor(&self) -> &ParsedCertificate {
        &self.trust_anchor
    }
}

/// Validate a certification path against a trust store.
pub fn validate_path(
    path: &CertificationPath,
    config: &PathValidationConfig,
    store: &TrustStore,
) -> Result<PathValidationResult, PathValidationError> {
    let discovered = discover_path(path, config, store)?;

    // Temporal validity, inclusive bounds, anchor included.
    for cert in &discovered {
        if config.reference_time < cert.not_before || config.reference_time > cert.not_after {
            return Err(PathValidationError::ExpiredOrNotYetValid {
                subject: cert.subject.clone(),
            });
        }
    }

    // Each non-root certificate must verify under its immediate issuer.
    for pair in discovered.windows(2) {
        let subject_cert = &pair[0];
        let issuer = &pair[1];

        let Some(alg) = algorithm_for_x509_signature_oid(&subject_cert.signature_oid) else {
            return Err(PathValidationError::BrokenChainSignature {
                subject: subject_cert.subject.clone(),
            });
        };

        if verify_signature(alg, &issuer.spki_der, &subject_cert.tbs_der, &subject_cert.signature).is_err() {
            return Err(PathValidationError::BrokenChainSignature {
                subject: subject_cert.subject.clone(),
            });
        }
    }

    // Policy: every issuing certificate must be a CA, and the total length
    // must respect the configured maximum.
    if discovered.len() > config.max_chain_length {
        return Err(PathValidationError::PolicyViolation(format!(
            "certification path length {} exceeds the configured maximum {}",
            discovered.len(),
            config.max_chain_length
        )));
    }
    for cert in &discovered[1..] {
        if !cert.is_ca {
            return Err(PathValidationError::PolicyViolation(format!(
                "issuing certificate '{}' is not a CA",
                cert.subject
            )));
        }
    }

    let end_entity = discovered[0].clone();
    let trust_anchor = discovered[discovered.len() - 1].clone();
    Ok(PathValidationResult {
        end_entity,
        certificates: discovered,
        trust_anchor,
    })
}

/// Stage 1: extend the leaf through the supplied intermediates until a
/// certificate whose exact DER is in the trust store is reached.
///
/// Issuers are located by distinguished name; candidates from the supplied
/// intermediates are preferred over store roots, in the order given. Failing
/// to reach an anchor within `max_chain_length` certificates is an untrusted
/// chain, whoever is at the far end.
fn discover_path(
    path: &CertificationPath,
    config: &PathValidationConfig,
    store: &TrustStore,
) -> Result<Vec<ParsedCertificate>, PathValidationError> {
    let leaf = path.end_entity().clone();
    let mut chain = vec![leaf];

    // The leaf may itself be a pinned anchor.
    if store.contains_der(&chain[0].der) {
        return Ok(chain);
    }

    while chain.len() < config.max_chain_length {
        let current = &chain[chain.len() - 1];

        let next = path
            .intermediates()
            .iter()
            .chain(store.roots().iter())
            .find(|c| c.subject == current.issuer && c.der != current.der);

        let Some(next) = next else {
            return Err(PathValidationError::UntrustedChain);
        };

        let next = next.clone();
        let found_anchor = store.contains_der(&next.der);
        chain.push(next);

        if found_anchor {
            return Ok(chain);
        }
    }

    Err(PathValidationError::UntrustedChain)
}
