use axum::{extract::rejection::JsonRejection, extract::State, Json};
use chrono::Utc;
use validator::Validate;

use crate::dtos::user_dtos::{
    SendInvoiceRequest, SendInvoiceResponse, SendOtpRequest, SendOtpResponse,
    SendSimpleInvoiceRequest, SendSimpleInvoiceResponse,
};
use crate::errors::{AppError, Result};
use crate::models::email::EmailAttachment;
use crate::services::invoice_service::InvoiceService;
use crate::services::otp_service::OTPService;
use crate::state::AppState;

const SIMPLE_INVOICE_FILENAME: &str = "invoice.pdf";

// 1. Send login OTP
pub async fn send_otp(
    State(state): State<AppState>,
    payload: std::result::Result<Json<SendOtpRequest>, JsonRejection>,
) -> Result<Json<SendOtpResponse>> {
    let Json(req) = payload?;
    req.validate()
        .map_err(|_| AppError::invalid_data("Email is required"))?;
    let email = req.email.unwrap_or_default();

    let otp = OTPService::generate_otp();
    tracing::info!("📧 Sending OTP to {}", email);
    tracing::debug!("OTP for {}: {}", email, otp);

    let message = OTPService::render_otp_email(&email, &otp)?.into_message(&email, Vec::new());

    if !state.mailer.send(&message).await {
        return Err(AppError::dispatch("Failed to send OTP email"));
    }

    tracing::info!("✅ OTP sent successfully to {}", email);

    Ok(Json(SendOtpResponse {
        success: true,
        message: "Verification code sent successfully".to_string(),
        email,
        otp: state.config.expose_otp.then_some(otp),
    }))
}

// 2. Send invoice with status-specific template
pub async fn send_invoice(
    State(state): State<AppState>,
    payload: std::result::Result<Json<SendInvoiceRequest>, JsonRejection>,
) -> Result<Json<SendInvoiceResponse>> {
    let Json(req) = payload?;
    req.validate().map_err(|_| {
        AppError::invalid_data(
            "Missing required fields: to, cloudinaryUrl, invoiceNumber and paymentStatus are required",
        )
    })?;
    let invoice = req.into_invoice();

    tracing::info!(
        "🧾 Sending invoice {} ({}) to {}",
        invoice.invoice_number,
        invoice.status_label,
        invoice.recipient
    );

    let document = state.documents.fetch(&invoice.document_url).await?;

    let message = InvoiceService::render_invoice_email(&invoice, Utc::now().date_naive())?
        .into_message(
            &invoice.recipient,
            vec![EmailAttachment::pdf(invoice.attachment_filename(), document)],
        );

    if !state.mailer.send(&message).await {
        return Err(AppError::dispatch("Failed to send invoice email"));
    }

    tracing::info!("✅ Invoice {} sent to {}", invoice.invoice_number, invoice.recipient);

    Ok(Json(SendInvoiceResponse {
        success: true,
        message: "Invoice email sent successfully".to_string(),
        email: invoice.recipient,
        invoice_number: invoice.invoice_number,
        payment_status: invoice.status_label,
    }))
}

// 3. Send invoice with the generic template
pub async fn send_simple_invoice(
    State(state): State<AppState>,
    payload: std::result::Result<Json<SendSimpleInvoiceRequest>, JsonRejection>,
) -> Result<Json<SendSimpleInvoiceResponse>> {
    let Json(req) = payload?;
    req.validate()
        .map_err(|_| AppError::invalid_data("Missing required fields: to and pdfUrl are required"))?;
    let to = req.to.unwrap_or_default();
    let pdf_url = req.pdf_url.unwrap_or_default();

    tracing::info!("🧾 Sending invoice to {}", to);

    let document = state.documents.fetch(&pdf_url).await?;

    let message = InvoiceService::render_simple_invoice_email()?.into_message(
        &to,
        vec![EmailAttachment::pdf(SIMPLE_INVOICE_FILENAME, document)],
    );

    if !state.mailer.send(&message).await {
        return Err(AppError::dispatch("Failed to send invoice email"));
    }

    tracing::info!("✅ Invoice sent to {}", to);

    Ok(Json(SendSimpleInvoiceResponse {
        success: true,
        message: "Email sent successfully".to_string(),
    }))
}
