// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! Payment request signing.

use bip70_common::{PaymentDetails, PaymentRequest, X509Certificates};
use bip70_x509::{
    parse_certificate_der, private_key_algorithm_oid, resolve_signature_algorithm, sign_message, AlgorithmError,
    PkiType,
};

use crate::error::Bip70Error;

/// Signs `PaymentRequest` messages, binding payment details to an X.509
/// certificate chain.
#[derive(Debug, Default)]
pub struct RequestSigner;

impl RequestSigner {
    pub fn new() -> Self {
        Self
    }

    /// Produce a complete signed request.
    ///
    /// The signature is computed over the canonical serialization of the
    /// request with the signature field set to the empty byte string.
    /// Either a fully signed request is returned or an error; no partial
    /// request ever escapes.
    ///
    /// `private_key_pkcs8` is a DER PKCS#8 `PrivateKeyInfo`; its algorithm
    /// OID selects the signature primitive while `pki_type` selects the
    /// digest. `intermediates_der` follow the end entity in chain order.
    pub fn sign(
        &self,
        details: &PaymentDetails,
        pki_type: PkiType,
        private_key_pkcs8: &[u8],
        cert_der: &[u8],
        intermediates_der: &[Vec<u8>],
    ) -> Result<PaymentRequest, Bip70Error> {
        if pki_type == PkiType::None {
            return Err(Bip70Error::InvalidArgument(
                "don't call sign with pki_type = none".to_string(),
            ));
        }

        let key_oid = private_key_algorithm_oid(private_key_pkcs8)
            .map_err(|e| Bip70Error::InvalidArgument(e.to_string()))?;
        let algorithm = resolve_signature_algorithm(pki_type, &key_oid).map_err(|e| match e {
            AlgorithmError::PkiTypeNone => Bip70Error::InvalidArgument(e.to_string()),
            AlgorithmError::UnsupportedKeyAlgorithm { .. } => Bip70Error::UnsupportedAlgorithm(e.to_string()),
        })?;

        // Reject malformed certificates before they end up in a signed
        // container.
        parse_certificate_der(cert_der)
            .map_err(|reason| Bip70Error::InvalidArgument(format!("malformed end-entity certificate: {reason}")))?;
        for (i, der) in intermediates_der.iter().enumerate() {
            parse_certificate_der(der).map_err(|reason| {
                Bip70Error::InvalidArgument(format!("malformed intermediate certificate at index {i}: {reason}"))
            })?;
        }

        let mut certs = X509Certificates::new();
        certs.add_certificate(cert_der.to_vec());
        for der in intermediates_der {
            certs.add_certificate(der.clone());
        }

        let mut request = PaymentRequest {
            payment_details_version: Some(1),
            pki_type: Some(pki_type.as_str().to_string()),
            pki_data: Some(certs.serialize()),
            serialized_payment_details: details.serialize(),
            signature: Some(Vec::new()),
        };

        let data = request.serialize();
        let signature = sign_message(algorithm, private_key_pkcs8, &data)
            .map_err(|e| Bip70Error::InvalidArgument(format!("signing failed: {e}")))?;

        request.signature = Some(signature);
        Ok(request)
    }
}
