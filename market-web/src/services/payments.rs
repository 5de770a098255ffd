//! Payment submission gateway.
//!
//! One dispatch path for the three submission kinds (login logging, market
//! payments, account orders); the tagged [`Submission`] variants keep the
//! wire sentinels out of the forms.

use gloo_net::http::Request;
use shared::dto::Submission;
use thiserror::Error;

use crate::utils::constants::SHEET_ENDPOINT;

#[derive(Debug, Error)]
pub enum PaymentError {
    #[error("network error: {0}")]
    Network(String),

    #[error("remote endpoint rejected the submission (HTTP {0})")]
    Rejected(u16),
}

/// Lower the submission to its wire record and dispatch it. `Ok(())` means
/// the endpoint acknowledged the request with a 2xx status, nothing more;
/// the sheet does not confirm what it logged.
pub async fn submit_payment(submission: Submission) -> Result<(), PaymentError> {
    let record = submission.into_record();
    let url = format!("{}?{}", SHEET_ENDPOINT, record.to_query_string());
    let response = Request::get(&url)
        .send()
        .await
        .map_err(|err| PaymentError::Network(err.to_string()))?;
    if !response.ok() {
        return Err(PaymentError::Rejected(response.status()));
    }
    log::info!("submission logged for product {}", record.product_no);
    Ok(())
}
