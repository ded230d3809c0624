use askama::Template;
use rand::Rng;

use crate::errors::Result;
use crate::models::email::RenderedEmail;

pub const OTP_VALIDITY_MINUTES: u32 = 10;
const SUBJECT: &str = "Your verification code";
const SIGNATURE: &str = "MYBIZ - Your Business Managing Partner";

#[derive(Template, Debug)]
#[template(path = "emails/otp.html")]
struct OtpHtml<'a> {
    otp: &'a str,
    email: &'a str,
    minutes: u32,
    signature: &'a str,
}

#[derive(Template, Debug)]
#[template(path = "emails/otp.txt")]
struct OtpText<'a> {
    otp: &'a str,
    minutes: u32,
    signature: &'a str,
}

pub struct OTPService;

impl OTPService {
    // Generate 6-digit OTP; the range never needs zero padding
    pub fn generate_otp() -> String {
        let mut rng = rand::thread_rng();
        rng.gen_range(100_000..=999_999).to_string()
    }

    /// Login code email. The validity window is only stated, nothing enforces it.
    pub fn render_otp_email(email: &str, otp: &str) -> Result<RenderedEmail> {
        let text = OtpText {
            otp,
            minutes: OTP_VALIDITY_MINUTES,
            signature: SIGNATURE,
        }
        .render()?;

        let html = OtpHtml {
            otp,
            email,
            minutes: OTP_VALIDITY_MINUTES,
            signature: SIGNATURE,
        }
        .render()?;

        Ok(RenderedEmail {
            subject: SUBJECT.to_string(),
            text,
            html,
        })
    }
}
