use std::fmt;

use chrono::{Duration, NaiveDate};
use serde::Deserialize;

pub const NOT_AVAILABLE: &str = "N/A";
pub const CURRENCY_SYMBOL: &str = "₹";
pub const DEFAULT_CUSTOMER_NAME: &str = "Customer";
pub const DEFAULT_DUE_IN_DAYS: i64 = 7;

/// Settlement state of an invoice. Drives template selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaymentStatus {
    Full,
    Due,
    Partial,
}

impl PaymentStatus {
    /// Exact match on the wire label; any unknown label is treated as `Full`.
    pub fn from_label(label: &str) -> Self {
        match label {
            "due" => PaymentStatus::Due,
            "partial" => PaymentStatus::Partial,
            _ => PaymentStatus::Full,
        }
    }

    pub fn badge(&self) -> &'static str {
        match self {
            PaymentStatus::Full => "FULLY PAID",
            PaymentStatus::Due => "PAYMENT DUE",
            PaymentStatus::Partial => "PARTIALLY PAID",
        }
    }

    pub fn badge_color(&self) -> &'static str {
        match self {
            PaymentStatus::Full => "#16a34a",
            PaymentStatus::Due => "#d97706",
            PaymentStatus::Partial => "#2563eb",
        }
    }
}

/// Money value as sent by clients: a JSON number or a preformatted string.
///
/// Anything else (booleans, objects, arrays) is kept as `Other` and printed as-is, so an
/// odd client payload still produces an email instead of a 400.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum Amount {
    Number(f64),
    Text(String),
    Other(serde_json::Value),
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Amount::Number(value) => write!(f, "{}{:.2}", CURRENCY_SYMBOL, value),
            Amount::Text(value) => write!(f, "{}{}", CURRENCY_SYMBOL, value.trim()),
            Amount::Other(value) => write!(f, "{}", value),
        }
    }
}

impl Amount {
    fn is_blank(&self) -> bool {
        matches!(self, Amount::Text(text) if text.trim().is_empty())
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderDetails {
    pub total: Option<Amount>,
    pub paid_amount: Option<Amount>,
    pub due_amount: Option<Amount>,
    pub due_date: Option<String>,
    pub payment_method: Option<String>,
}

fn present_amount(amount: &Option<Amount>) -> Option<&Amount> {
    amount.as_ref().filter(|a| !a.is_blank())
}

fn present_text(text: &Option<String>) -> Option<&str> {
    text.as_deref().map(str::trim).filter(|t| !t.is_empty())
}

impl OrderDetails {
    pub fn total(&self) -> String {
        present_amount(&self.total)
            .map(ToString::to_string)
            .unwrap_or_else(|| NOT_AVAILABLE.to_string())
    }

    pub fn paid_amount(&self) -> String {
        present_amount(&self.paid_amount)
            .map(ToString::to_string)
            .unwrap_or_else(|| NOT_AVAILABLE.to_string())
    }

    /// Falls back to the invoice total, then to `N/A`.
    pub fn due_amount(&self) -> String {
        present_amount(&self.due_amount)
            .or_else(|| present_amount(&self.total))
            .map(ToString::to_string)
            .unwrap_or_else(|| NOT_AVAILABLE.to_string())
    }

    /// Falls back to `today` plus seven days.
    pub fn due_date(&self, today: NaiveDate) -> String {
        match present_text(&self.due_date) {
            Some(date) => date.to_string(),
            None => (today + Duration::days(DEFAULT_DUE_IN_DAYS))
                .format("%d %b %Y")
                .to_string(),
        }
    }

    pub fn payment_method(&self) -> String {
        present_text(&self.payment_method)
            .unwrap_or(NOT_AVAILABLE)
            .to_string()
    }
}

/// A validated invoice delivery request.
#[derive(Debug, Clone)]
pub struct Invoice {
    pub recipient: String,
    pub customer_name: Option<String>,
    pub invoice_number: String,
    pub document_url: String,
    pub status_label: String,
    pub order_details: OrderDetails,
}

impl Invoice {
    pub fn status(&self) -> PaymentStatus {
        PaymentStatus::from_label(&self.status_label)
    }

    pub fn customer_name(&self) -> &str {
        present_text(&self.customer_name).unwrap_or(DEFAULT_CUSTOMER_NAME)
    }

    pub fn attachment_filename(&self) -> String {
        format!("invoice_{}.pdf", self.invoice_number)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 16).unwrap()
    }

    #[test]
    fn unknown_status_falls_back_to_full() {
        assert_eq!(PaymentStatus::from_label("full"), PaymentStatus::Full);
        assert_eq!(PaymentStatus::from_label("due"), PaymentStatus::Due);
        assert_eq!(PaymentStatus::from_label("partial"), PaymentStatus::Partial);
        assert_eq!(PaymentStatus::from_label("refunded"), PaymentStatus::Full);
        assert_eq!(PaymentStatus::from_label("DUE"), PaymentStatus::Full);
        assert_eq!(PaymentStatus::from_label(""), PaymentStatus::Full);
    }

    #[test]
    fn empty_details_resolve_to_placeholders() {
        let details = OrderDetails::default();

        assert_eq!(details.total(), "N/A");
        assert_eq!(details.paid_amount(), "N/A");
        assert_eq!(details.due_amount(), "N/A");
        assert_eq!(details.payment_method(), "N/A");
        assert_eq!(details.due_date(today()), "23 Oct 2026");
    }

    #[test]
    fn due_amount_falls_back_to_total() {
        let details = OrderDetails {
            total: Some(Amount::Number(1200.0)),
            ..Default::default()
        };
        assert_eq!(details.due_amount(), "₹1200.00");

        let details = OrderDetails {
            total: Some(Amount::Number(1200.0)),
            due_amount: Some(Amount::Text("300".into())),
            ..Default::default()
        };
        assert_eq!(details.due_amount(), "₹300");
    }

    #[test]
    fn blank_strings_count_as_missing() {
        let details = OrderDetails {
            total: Some(Amount::Text("  ".into())),
            due_date: Some(String::new()),
            payment_method: Some(" ".into()),
            ..Default::default()
        };

        assert_eq!(details.total(), "N/A");
        assert_eq!(details.payment_method(), "N/A");
        assert_eq!(details.due_date(today()), "23 Oct 2026");
    }

    #[test]
    fn order_details_accept_numbers_and_strings() {
        let details: OrderDetails = serde_json::from_value(serde_json::json!({
            "total": 499.5,
            "paidAmount": "200.00",
            "dueDate": "2026-11-01",
            "paymentMethod": "UPI",
        }))
        .unwrap();

        assert_eq!(details.total(), "₹499.50");
        assert_eq!(details.paid_amount(), "₹200.00");
        assert_eq!(details.due_date(today()), "2026-11-01");
        assert_eq!(details.payment_method(), "UPI");
    }

    #[test]
    fn non_money_amounts_render_verbatim() {
        let details: OrderDetails = serde_json::from_value(serde_json::json!({
            "total": true,
            "dueAmount": { "value": 10 },
        }))
        .unwrap();

        assert_eq!(details.total, Some(Amount::Other(serde_json::json!(true))));
        assert_eq!(details.total(), "true");
        assert_eq!(details.due_amount(), r#"{"value":10}"#);
        assert_eq!(details.paid_amount(), "N/A");
    }

    #[test]
    fn customer_name_and_filename() {
        let invoice = Invoice {
            recipient: "a@b.com".into(),
            customer_name: None,
            invoice_number: "INV-42".into(),
            document_url: "https://x/y.pdf".into(),
            status_label: "due".into(),
            order_details: OrderDetails::default(),
        };

        assert_eq!(invoice.customer_name(), "Customer");
        assert_eq!(invoice.attachment_filename(), "invoice_INV-42.pdf");
        assert_eq!(invoice.status(), PaymentStatus::Due);
    }
}
