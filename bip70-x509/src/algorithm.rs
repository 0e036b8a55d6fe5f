// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! Signature algorithm selection and dispatch.
//!
//! BIP70 derives the concrete signature algorithm from two inputs: the
//! request's `pki_type` (which fixes the digest) and the key's algorithm
//! OID (which fixes the primitive). `resolve_signature_algorithm` is the
//! exhaustive mapping; `sign_message` / `verify_signature` dispatch to the
//! RustCrypto implementation for each variant. No fallback is ever
//! attempted: a request signed with one algorithm verifies under exactly
//! that algorithm or not at all.

use rsa::pkcs1v15;
use rsa::pkcs8::DecodePrivateKey as _;
use rsa::pkcs8::DecodePublicKey as _;
use rsa::{RsaPrivateKey, RsaPublicKey};
use sha1::Sha1;
use sha2::{Digest, Sha256};
use signature::hazmat::{PrehashSigner as _, PrehashVerifier as _};
use signature::{SignatureEncoding as _, Signer as _, Verifier as _};

use p256::elliptic_curve::sec1::ToEncodedPoint as _;

use crate::pki_type::PkiType;

/// rsaEncryption
pub const OID_RSA_ENCRYPTION: &str = "1.2.840.113549.1.1.1";
/// id-ecPublicKey
pub const OID_EC_PUBLIC_KEY: &str = "1.2.840.10045.2.1";

/// A fully determined signature algorithm: primitive, padding, and digest.
///
/// ECDSA signatures are carried in ASN.1 DER form (`ECDSA-Sig-Value`), the
/// encoding X.509 and BIP70 use on the wire.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum SignatureAlgorithm {
    /// RSASSA-PKCS1v1.5 with SHA-1.
    RsaSha1,
    /// RSASSA-PKCS1v1.5 with SHA-256.
    RsaSha256,
    /// ECDSA over P-256 with SHA-1.
    EcdsaP256Sha1,
    /// ECDSA over P-256 with SHA-256.
    EcdsaP256Sha256,
}

#[derive(thiserror::Error, Debug)]
pub enum AlgorithmError {
    #[error("don't sign with pki_type = none")]
    PkiTypeNone,

    #[error("no signature algorithm for key algorithm {key_oid} with pki_type {pki_type}")]
    UnsupportedKeyAlgorithm { pki_type: PkiType, key_oid: String },
}

#[derive(thiserror::Error, Debug)]
pub enum SignatureError {
    #[error("invalid public key: {0}")]
    InvalidPublicKey(String),

    #[error("invalid private key: {0}")]
    InvalidPrivateKey(String),

    #[error("invalid signature bytes: {0}")]
    InvalidSignature(String),

    #[error("signing failed: {0}")]
    SigningFailed(String),

    #[error("signature verification failed")]
    VerificationFailed,
}

/// Map `(pki_type, key algorithm OID)` to a concrete signature algorithm.
///
/// Pure function; fails for `pki_type = none` (signing without a PKI is a
/// caller error) and for key algorithms with no mapping.
pub fn resolve_signature_algorithm(pki_type: PkiType, key_oid: &str) -> Result<SignatureAlgorithm, AlgorithmError> {
    match (pki_type, key_oid) {
        (PkiType::None, _) => Err(AlgorithmError::PkiTypeNone),
        (PkiType::X509Sha1, OID_RSA_ENCRYPTION) => Ok(SignatureAlgorithm::RsaSha1),
        (PkiType::X509Sha256, OID_RSA_ENCRYPTION) => Ok(SignatureAlgorithm::RsaSha256),
        (PkiType::X509Sha1, OID_EC_PUBLIC_KEY) => Ok(SignatureAlgorithm::EcdsaP256Sha1),
        (PkiType::X509Sha256, OID_EC_PUBLIC_KEY) => Ok(SignatureAlgorithm::EcdsaP256Sha256),
        (pki_type, key_oid) => Err(AlgorithmError::UnsupportedKeyAlgorithm {
            pki_type,
            key_oid: key_oid.to_string(),
        }),
    }
}

/// Map an X.509 signature algorithm OID (as found in a certificate's
/// `signatureAlgorithm` field) to the matching variant, for verifying
/// issuer signatures while walking a certification path.
pub fn algorithm_for_x509_signature_oid(oid: &str) -> Option<SignatureAlgorithm> {
    match oid {
        // sha1WithRSAEncryption / sha256WithRSAEncryption
        "1.2.840.113549.1.1.5" => Some(SignatureAlgorithm::RsaSha1),
        "1.2.840.113549.1.1.11" => Some(SignatureAlgorithm::RsaSha256),
        // ecdsa-with-SHA1 / ecdsa-with-SHA256
        "1.2.840.10045.4.1" => Some(SignatureAlgorithm::EcdsaP256Sha1),
        "1.2.840.10045.4.3.2" => Some(SignatureAlgorithm::EcdsaP256Sha256),
        _ => None,
    }
}

/// Read the key algorithm OID from a PKCS#8 `PrivateKeyInfo`.
pub fn private_key_algorithm_oid(pkcs8_der: &[u8]) -> Result<String, SignatureError> {
    let info = rsa::pkcs8::PrivateKeyInfo::try_from(pkcs8_der)
        .map_err(|e| SignatureError::InvalidPrivateKey(format!("bad PKCS#8 structure: {e}")))?;
    Ok(info.algorithm.oid.to_string())
}

fn rsa_public_key(spki_der: &[u8]) -> Result<RsaPublicKey, SignatureError> {
    RsaPublicKey::from_public_key_der(spki_der)
        .map_err(|e| SignatureError::InvalidPublicKey(format!("bad RSA public key: {e}")))
}

fn p256_verifying_key(spki_der: &[u8]) -> Result<p256::ecdsa::VerifyingKey, SignatureError> {
    let pk = p256::PublicKey::from_public_key_der(spki_der)
        .map_err(|e| SignatureError::InvalidPublicKey(format!("bad P-256 public key: {e}")))?;
    let ep = pk.to_encoded_point(false);
    p256::ecdsa::VerifyingKey::from_sec1_bytes(ep.as_bytes())
        .map_err(|e| SignatureError::InvalidPublicKey(format!("bad P-256 public key: {e}")))
}

/// Verify `signature` over `message` with the public key from `spki_der`.
pub fn verify_signature(
    alg: SignatureAlgorithm,
    spki_der: &[u8],
    message: &[u8],
    signature: &[u8],
) -> Result<(), SignatureError> {
    match alg {
        SignatureAlgorithm::RsaSha1 => {
            let vk = pkcs1v15::VerifyingKey::<Sha1>::new(rsa_public_key(spki_der)?);
            let sig = pkcs1v15::Signature::try_from(signature)
                .map_err(|e| SignatureError::InvalidSignature(format!("bad RSA signature bytes: {e}")))?;
            vk.verify(message, &sig).map_err(|_| SignatureError::VerificationFailed)
        }
        SignatureAlgorithm::RsaSha256 => {
            let vk = pkcs1v15::VerifyingKey::<Sha256>::new(rsa_public_key(spki_der)?);
            let sig = pkcs1v15::Signature::try_from(signature)
                .map_err(|e| SignatureError::InvalidSignature(format!("bad RSA signature bytes: {e}")))?;
            vk.verify(message, &sig).map_err(|_| SignatureError::VerificationFailed)
        }
        SignatureAlgorithm::EcdsaP256Sha1 => {
            let vk = p256_verifying_key(spki_der)?;
            let sig = p256::ecdsa::Signature::from_der(signature)
                .map_err(|e| SignatureError::InvalidSignature(format!("bad ECDSA signature bytes: {e}")))?;
            // The ecdsa crate pairs P-256 with SHA-256 by default; SHA-1
            // goes through the prehash interface.
            let digest = Sha1::digest(message);
            vk.verify_prehash(digest.as_slice(), &sig)
                .map_err(|_| SignatureError::VerificationFailed)
        }
        SignatureAlgorithm::EcdsaP256Sha256 => {
            let vk = p256_verifying_key(spki_der)?;
            let sig = p256::ecdsa::Signature::from_der(signature)
                .map_err(|e| SignatureError::InvalidSignature(format!("bad ECDSA signature bytes: {e}")))?;
            vk.verify(message, &sig).map_err(|_| SignatureError::VerificationFailed)
        }
    }
}

/// Sign `message` with the PKCS#8 private key in `pkcs8_der`.
pub fn sign_message(alg: SignatureAlgorithm, pkcs8_der: &[u8], message: &[u8]) -> Result<Vec<u8>, SignatureError> {
    match alg {
        SignatureAlgorithm::RsaSha1 => {
            let key = RsaPrivateKey::from_pkcs8_der(pkcs8_der)
                .map_err(|e| SignatureError::InvalidPrivateKey(format!("bad RSA private key: {e}")))?;
            let sk = pkcs1v15::SigningKey::<Sha1>::new(key);
            let sig = sk
                .try_sign(message)
                .map_err(|e| SignatureError::SigningFailed(e.to_string()))?;
            Ok(sig.to_vec())
        }
        SignatureAlgorithm::RsaSha256 => {
            let key = RsaPrivateKey::from_pkcs8_der(pkcs8_der)
                .map_err(|e| SignatureError::InvalidPrivateKey(format!("bad RSA private key: {e}")))?;
            let sk = pkcs1v15::SigningKey::<Sha256>::new(key);
            let sig = sk
                .try_sign(message)
                .map_err(|e| SignatureError::SigningFailed(e.to_string()))?;
            Ok(sig.to_vec())
        }
        SignatureAlgorithm::EcdsaP256Sha1 => {
            let sk = p256::ecdsa::SigningKey::from_pkcs8_der(pkcs8_der)
                .map_err(|e| SignatureError::InvalidPrivateKey(format!("bad P-256 private key: {e}")))?;
            let digest = Sha1::digest(message);
            let sig: p256::ecdsa::Signature = sk
                .sign_prehash(digest.as_slice())
                .map_err(|e| SignatureError::SigningFailed(e.to_string()))?;
            Ok(sig.to_der().as_bytes().to_vec())
        }
        SignatureAlgorithm::EcdsaP256Sha256 => {
            let sk = p256::ecdsa::SigningKey::from_pkcs8_der(pkcs8_der)
                .map_err(|e| SignatureError::InvalidPrivateKey(format!("bad P-256 private key: {e}")))?;
            let sig: p256::ecdsa::Signature = sk
                .try_sign(message)
                .map_err(|e| SignatureError::SigningFailed(e.to_string()))?;
            Ok(sig.to_der().as_bytes().to_vec())
        }
    }
}
