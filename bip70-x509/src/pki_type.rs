// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use std::fmt;

/// BIP70 PKI scheme identifier.
///
/// A closed sum type: every supported scheme appears here, and resolver
/// functions match exhaustively so adding a scheme is a compile-time event.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum PkiType {
    /// Unsigned request.
    None,
    /// X.509 certificate chain, SHA-1 digests.
    X509Sha1,
    /// X.509 certificate chain, SHA-256 digests.
    X509Sha256,
}

impl PkiType {
    /// The wire string used in `PaymentRequest.pki_type`.
    pub fn as_str(self) -> &'static str {
        match self {
            PkiType::None => "none",
            PkiType::X509Sha1 => "x509+sha1",
            PkiType::X509Sha256 => "x509+sha256",
        }
    }

    /// Parse a wire string. Returns `None` for unrecognized schemes.
    pub fn from_wire(s: &str) -> Option<Self> {
        match s {
            "none" => Some(PkiType::None),
            "x509+sha1" => Some(PkiType::X509Sha1),
            "x509+sha256" => Some(PkiType::X509Sha256),
            _ => None,
        }
    }
}

impl fmt::Display for PkiType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
