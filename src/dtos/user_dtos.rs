use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::invoice::{Invoice, OrderDetails};

#[derive(Debug, Deserialize, Validate)]
pub struct SendOtpRequest {
    #[validate(required, length(min = 1))]
    pub email: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct SendOtpResponse {
    pub success: bool,
    pub message: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub otp: Option<String>,
}

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct SendInvoiceRequest {
    #[validate(required, length(min = 1))]
    pub to: Option<String>,

    pub customer_name: Option<String>,

    #[validate(required, length(min = 1))]
    pub invoice_number: Option<String>,

    #[serde(alias = "documentUrl")]
    #[validate(required, length(min = 1))]
    pub cloudinary_url: Option<String>,

    #[validate(required, length(min = 1))]
    pub payment_status: Option<String>,

    #[serde(default)]
    pub order_details: Option<OrderDetails>,
}

impl SendInvoiceRequest {
    /// Call after `validate()`; required fields are known to be present by then.
    pub fn into_invoice(self) -> Invoice {
        Invoice {
            recipient: self.to.unwrap_or_default(),
            customer_name: self.customer_name,
            invoice_number: self.invoice_number.unwrap_or_default(),
            document_url: self.cloudinary_url.unwrap_or_default(),
            status_label: self.payment_status.unwrap_or_default(),
            order_details: self.order_details.unwrap_or_default(),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SendInvoiceResponse {
    pub success: bool,
    pub message: String,
    pub email: String,
    pub invoice_number: String,
    pub payment_status: String,
}

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct SendSimpleInvoiceRequest {
    #[validate(required, length(min = 1))]
    pub to: Option<String>,

    #[validate(required, length(min = 1))]
    pub pdf_url: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct SendSimpleInvoiceResponse {
    pub success: bool,
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn otp_request_requires_non_empty_email() {
        let missing: SendOtpRequest = serde_json::from_value(json!({})).unwrap();
        assert!(missing.validate().is_err());

        let empty: SendOtpRequest = serde_json::from_value(json!({ "email": "" })).unwrap();
        assert!(empty.validate().is_err());

        let present: SendOtpRequest = serde_json::from_value(json!({ "email": "a@b.com" })).unwrap();
        assert!(present.validate().is_ok());
    }

    #[test]
    fn invoice_request_requires_core_fields() {
        let complete = json!({
            "to": "a@b.com",
            "invoiceNumber": "INV-1",
            "cloudinaryUrl": "https://x/y.pdf",
            "paymentStatus": "due",
        });
        let request: SendInvoiceRequest = serde_json::from_value(complete.clone()).unwrap();
        assert!(request.validate().is_ok());

        for field in ["to", "invoiceNumber", "cloudinaryUrl", "paymentStatus"] {
            let mut body = complete.clone();
            body.as_object_mut().unwrap().remove(field);
            let request: SendInvoiceRequest = serde_json::from_value(body).unwrap();
            assert!(request.validate().is_err(), "{} should be required", field);
        }
    }

    #[test]
    fn document_url_alias_and_conversion() {
        let request: SendInvoiceRequest = serde_json::from_value(json!({
            "to": "a@b.com",
            "customerName": "Asha",
            "invoiceNumber": "INV-7",
            "documentUrl": "https://x/7.pdf",
            "paymentStatus": "partial",
            "orderDetails": { "total": 100, "paidAmount": 40 },
        }))
        .unwrap();

        let invoice = request.into_invoice();
        assert_eq!(invoice.document_url, "https://x/7.pdf");
        assert_eq!(invoice.customer_name(), "Asha");
        assert_eq!(invoice.order_details.paid_amount(), "₹40.00");
    }

    #[test]
    fn null_order_details_are_accepted() {
        let request: SendInvoiceRequest = serde_json::from_value(json!({
            "to": "a@b.com",
            "invoiceNumber": "INV-8",
            "cloudinaryUrl": "https://x/8.pdf",
            "paymentStatus": "full",
            "orderDetails": null,
        }))
        .unwrap();

        assert_eq!(request.into_invoice().order_details.total(), "N/A");
    }
}
