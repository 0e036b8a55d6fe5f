// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use bip70_x509::{CertificationPath, ParsedCertificate, PathValidationResult};

use crate::error::Bip70Error;

/// A validated, trust-anchored end-entity certificate bound to the
/// validation result that proved it.
///
/// Construction enforces that the path's end entity and the result's end
/// entity are the same certificate by DER identity. Validation as
/// implemented here can only pair a result with its own path, so the check
/// is a guard against programmer error, not an expected runtime failure.
#[derive(Debug, Clone)]
pub struct QualifiedCertificate {
    path: CertificationPath,
    result: PathValidationResult,
}

impl QualifiedCertificate {
    pub fn new(path: CertificationPath, result: PathValidationResult) -> Result<Self, Bip70Error> {
        if path.end_entity().der != result.end_entity().der {
            return Err(Bip70Error::IdentityMismatch);
        }
        Ok(Self { path, result })
    }

    /// The end-entity certificate's subject distinguished name.
    pub fn subject(&self) -> &str {
        &self.path.end_entity().subject
    }

    pub fn end_entity(&self) -> &ParsedCertificate {
        self.path.end_entity()
    }

    pub fn path(&self) -> &CertificationPath {
        &self.path
    }

    pub fn validation_result(&self) -> &PathValidationResult {
        &self.result
    }
}
