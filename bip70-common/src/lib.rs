// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! BIP70 payment message types and canonical wire encoding.
//!
//! The BIP70 signature is computed over serialized `PaymentRequest` bytes,
//! so the encoding produced here must be reproducible: the signer and the
//! verifier independently serialize the same field values and must get
//! byte-identical output. See the `wire` module for the encoding rules.

mod payment_details;
mod payment_request;
mod x509_certificates;

pub mod wire;

pub use payment_details::{Output, PaymentDetails};
pub use payment_request::{PaymentRequest, PKI_TYPE_NONE};
pub use x509_certificates::X509Certificates;
