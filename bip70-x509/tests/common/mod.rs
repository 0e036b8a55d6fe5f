// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! Shared certificate fixtures for `bip70-x509` integration tests.
//!
//! Certificates are generated with `rcgen` (ECDSA P-256, SHA-256), which
//! matches the `x509+sha256` PKI type exercised throughout.

#![allow(dead_code)]

use rcgen::{BasicConstraints, Certificate, CertificateParams, DnType, IsCa, KeyPair};

/// Default validity window used by fixtures: 2020-01-01 .. 2030-01-01.
pub(crate) const NOT_BEFORE: i64 = 1577836800;
pub(crate) const NOT_AFTER: i64 = 1893456000;
/// A reference time comfortably inside the default window.
pub(crate) const REF_TIME: i64 = 1700000000;

pub(crate) struct TestCert {
    pub(crate) cert: Certificate,
    pub(crate) key: KeyPair,
}

impl TestCert {
    pub(crate) fn der(&self) -> Vec<u8> {
        self.cert.der().as_ref().to_vec()
    }

    /// PKCS#8 DER for the certificate's key pair.
    pub(crate) fn key_pkcs8(&self) -> Vec<u8> {
        self.key.serialize_der()
    }
}

fn base_params(cn: &str, not_before: i64, not_after: i64) -> CertificateParams {
    let mut params = CertificateParams::default();
    params.distinguished_name.push(DnType::CommonName, cn);
    params.not_before = time::OffsetDateTime::from_unix_timestamp(not_before).unwrap();
    params.not_after = time::OffsetDateTime::from_unix_timestamp(not_after).unwrap();
    params
}

/// Self-signed CA with the given validity window.
pub(crate) fn make_ca_with_validity(cn: &str, not_before: i64, not_after: i64) -> TestCert {
    let mut params = base_params(cn, not_before, not_after);
    params.is_ca = IsCa::Ca(BasicConstraints::Unconstrained);
    let key = KeyPair::generate().unwrap();
    let cert = params.self_signed(&key).unwrap();
    TestCert { cert, key }
}

pub(crate) fn make_ca(cn: &str) -> TestCert {
    make_ca_with_validity(cn, NOT_BEFORE, NOT_AFTER)
}

/// Certificate issued by `issuer`, optionally flagged as a CA.
pub(crate) fn issue_with_validity(
    cn: &str,
    issuer: &TestCert,
    is_ca: bool,
    not_before: i64,
    not_after: i64,
) -> TestCert {
    let mut params = base_params(cn, not_before, not_after);
    if is_ca {
        params.is_ca = IsCa::Ca(BasicConstraints::Unconstrained);
    }
    let key = KeyPair::generate().unwrap();
    let cert = params.signed_by(&key, &issuer.cert, &issuer.key).unwrap();
    TestCert { cert, key }
}

pub(crate) fn issue(cn: &str, issuer: &TestCert, is_ca: bool) -> TestCert {
    issue_with_validity(cn, issuer, is_ca, NOT_BEFORE, NOT_AFTER)
}

/// Self-signed non-CA certificate (no basicConstraints).
pub(crate) fn make_self_signed(cn: &str) -> TestCert {
    let params = base_params(cn, NOT_BEFORE, NOT_AFTER);
    let key = KeyPair::generate().unwrap();
    let cert = params.self_signed(&key).unwrap();
    TestCert { cert, key }
}
