use axum::{routing::post, Router};

use crate::{config::InvoiceForm, handlers::user, state::AppState};

pub const OTP_PATH: &str = "/send-otp";
pub const BILL_PATH: &str = "/send-bill";

pub fn user_routes(invoice_form: InvoiceForm) -> Router<AppState> {
    let send_bill = match invoice_form {
        InvoiceForm::Detailed => post(user::send_invoice),
        InvoiceForm::Simple => post(user::send_simple_invoice),
    };

    Router::new()
        // Generate and email a login code
        .route(OTP_PATH, post(user::send_otp))
        // Email an invoice PDF downloaded from remote storage
        .route(BILL_PATH, send_bill)
}
