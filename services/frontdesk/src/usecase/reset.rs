use caredesk_core::clock::Clock;

use crate::domain::repository::{AccountRepository, Mailer, OtpRepository};
use crate::domain::types::{MIN_RESET_PASSWORD_LEN, normalize_email};
use crate::error::FrontdeskError;
use crate::password::PasswordHasher;
use crate::usecase::otp::issue_code;

// ── BeginReset ───────────────────────────────────────────────────────────────

pub struct BeginResetUseCase<A, O, M, C>
where
    A: AccountRepository,
    O: OtpRepository,
    M: Mailer,
    C: Clock,
{
    pub accounts: A,
    pub reset_otps: O,
    pub mailer: M,
    pub clock: C,
}

impl<A, O, M, C> BeginResetUseCase<A, O, M, C>
where
    A: AccountRepository,
    O: OtpRepository,
    M: Mailer,
    C: Clock,
{
    /// Requires an existing active account; reports the miss distinctly,
    /// which leaks account existence (accepted for this system's threat
    /// model). The delivery verdict is not part of the outcome.
    pub async fn execute(&self, email: &str) -> Result<(), FrontdeskError> {
        let email = normalize_email(email);
        if email.is_empty() {
            return Err(FrontdeskError::MissingFields);
        }

        let account = self
            .accounts
            .find_active_by_email(&email)
            .await?
            .ok_or(FrontdeskError::EmailNotFound)?;

        let now = self.clock.now();
        let code = issue_code(&self.reset_otps, &email, now).await?;
        if !self
            .mailer
            .send_reset_code(&email, &account.name, &code)
            .await
        {
            tracing::warn!(email = %email, code = %code, "reset code delivery failed");
        }
        Ok(())
    }
}

// ── VerifyResetOtp ───────────────────────────────────────────────────────────

pub struct VerifyResetOtpUseCase<O, C>
where
    O: OtpRepository,
    C: Clock,
{
    pub reset_otps: O,
    pub clock: C,
}

impl<O, C> VerifyResetOtpUseCase<O, C>
where
    O: OtpRepository,
    C: Clock,
{
    /// Checks code match and expiry only. Unlike the registration family,
    /// the used flag is not consulted and the code is not consumed here;
    /// only `ResetPassword` removes it.
    pub async fn execute(&self, email: &str, code: &str) -> Result<(), FrontdeskError> {
        let email = normalize_email(email);
        let code = code.trim();
        if email.is_empty() || code.is_empty() {
            return Err(FrontdeskError::MissingFields);
        }

        match self
            .reset_otps
            .find_matching(&email, code, self.clock.now())
            .await?
        {
            Some(_) => Ok(()),
            None => Err(FrontdeskError::InvalidOrExpiredCode),
        }
    }
}

// ── ResetPassword ────────────────────────────────────────────────────────────

pub struct ResetPasswordInput {
    pub email: String,
    pub code: String,
    pub new_password: String,
}

pub struct ResetPasswordUseCase<A, O, H, C>
where
    A: AccountRepository,
    O: OtpRepository,
    H: PasswordHasher,
    C: Clock,
{
    pub accounts: A,
    pub reset_otps: O,
    pub hasher: H,
    pub clock: C,
}

impl<A, O, H, C> ResetPasswordUseCase<A, O, H, C>
where
    A: AccountRepository,
    O: OtpRepository,
    H: PasswordHasher,
    C: Clock,
{
    /// Validation runs before any mutation: a short password leaves the
    /// stored hash untouched.
    pub async fn execute(&self, input: ResetPasswordInput) -> Result<(), FrontdeskError> {
        let email = normalize_email(&input.email);
        let code = input.code.trim();
        let new_password = input.new_password.trim();
        if email.is_empty() || code.is_empty() || new_password.is_empty() {
            return Err(FrontdeskError::MissingFields);
        }
        if new_password.len() < MIN_RESET_PASSWORD_LEN {
            return Err(FrontdeskError::short_reset_password());
        }

        let now = self.clock.now();
        if self
            .reset_otps
            .find_matching(&email, code, now)
            .await?
            .is_none()
        {
            return Err(FrontdeskError::InvalidOrExpiredCode);
        }

        let hash = self.hasher.hash(new_password)?;
        self.accounts
            .update_password_hash(&email, &hash, now)
            .await?;
        self.reset_otps.delete_matching(&email, code).await?;
        Ok(())
    }
}
