use chrono::{DateTime, Duration, Utc};
use rand::RngExt;
use uuid::Uuid;

use crate::domain::repository::OtpRepository;
use crate::domain::types::{OTP_LEN, OTP_TTL_MINS, OneTimeCode};
use crate::error::FrontdeskError;

/// Charset for one-time codes. Each position is drawn independently, so
/// leading zeros are as likely as any other digit.
const DIGITS: &[u8] = b"0123456789";

pub(crate) fn generate_otp() -> String {
    let mut rng = rand::rng();
    (0..OTP_LEN)
        .map(|_| DIGITS[rng.random_range(0..DIGITS.len())] as char)
        .collect()
}

/// Issue a fresh code for the email on the given ledger: delete-then-insert,
/// so any outstanding code for the address stops verifying. Returns the code
/// for delivery.
pub(crate) async fn issue_code<O: OtpRepository>(
    otps: &O,
    email: &str,
    now: DateTime<Utc>,
) -> Result<String, FrontdeskError> {
    let code = generate_otp();
    let row = OneTimeCode {
        id: Uuid::new_v4(),
        email: email.to_owned(),
        code: code.clone(),
        expires_at: now + Duration::minutes(OTP_TTL_MINS),
        is_used: false,
        created_at: now,
    };
    otps.replace(&row).await?;
    Ok(code)
}
