// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! Shared certificate fixtures for `bip70` integration tests.

#![allow(dead_code)]

use rcgen::{BasicConstraints, Certificate, CertificateParams, DnType, IsCa, KeyPair};

/// Fixture validity window: 2020-01-01 .. 2030-01-01.
pub(crate) const NOT_BEFORE: i64 = 1577836800;
pub(crate) const NOT_AFTER: i64 = 1893456000;
pub(crate) const REF_TIME: i64 = 1700000000;

pub(crate) struct TestCert {
    pub(crate) cert: Certificate,
    pub(crate) key: KeyPair,
}

impl TestCert {
    pub(crate) fn der(&self) -> Vec<u8> {
        self.cert.der().as_ref().to_vec()
    }

    pub(crate) fn key_pkcs8(&self) -> Vec<u8> {
        self.key.serialize_der()
    }
}

fn base_params(cn: &str) -> CertificateParams {
    let mut params = CertificateParams::default();
    params.distinguished_name.push(DnType::CommonName, cn);
    params.not_before = time::OffsetDateTime::from_unix_timestamp(NOT_BEFORE).unwrap();
    params.not_after = time::OffsetDateTime::from_unix_timestamp(NOT_AFTER).unwrap();
    params
}

pub(crate) fn make_ca(cn: &str) -> TestCert {
    let mut params = base_params(cn);
    params.is_ca = IsCa::Ca(BasicConstraints::Unconstrained);
    let key = KeyPair::generate().unwrap();
    let cert = params.self_signed(&key).unwrap();
    TestCert { cert, key }
}

pub(crate) fn issue(cn: &str, issuer: &TestCert, is_ca: bool) -> TestCert {
    let mut params = base_params(cn);
    if is_ca {
        params.is_ca = IsCa::Ca(BasicConstraints::Unconstrained);
    }
    let key = KeyPair::generate().unwrap();
    let cert = params.signed_by(&key, &issuer.cert, &issuer.key).unwrap();
    TestCert { cert, key }
}

pub(crate) fn make_self_signed(cn: &str) -> TestCert {
    let params = base_params(cn);
    let key = KeyPair::generate().unwrap();
    let cert = params.self_signed(&key).unwrap();
    TestCert { cert, key }
}
