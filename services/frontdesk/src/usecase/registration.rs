use uuid::Uuid;

use caredesk_core::clock::Clock;

use crate::domain::repository::{AccountRepository, Mailer, OtpRepository};
use crate::domain::types::{Account, MIN_REGISTRATION_PASSWORD_LEN, normalize_email};
use crate::error::FrontdeskError;
use crate::password::PasswordHasher;
use crate::usecase::otp::issue_code;

// ── BeginRegistration ────────────────────────────────────────────────────────

pub struct BeginRegistrationInput {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub designation: String,
}

pub struct BeginRegistrationUseCase<A, O, M, C>
where
    A: AccountRepository,
    O: OtpRepository,
    M: Mailer,
    C: Clock,
{
    pub accounts: A,
    pub registration_otps: O,
    pub mailer: M,
    pub clock: C,
}

impl<A, O, M, C> BeginRegistrationUseCase<A, O, M, C>
where
    A: AccountRepository,
    O: OtpRepository,
    M: Mailer,
    C: Clock,
{
    pub async fn execute(&self, input: BeginRegistrationInput) -> Result<(), FrontdeskError> {
        let name = input.name.trim().to_owned();
        let email = normalize_email(&input.email);
        let phone = input.phone.trim().to_owned();
        let designation = input.designation.trim().to_owned();
        if name.is_empty() || email.is_empty() || phone.is_empty() || designation.is_empty() {
            return Err(FrontdeskError::MissingFields);
        }

        if self.accounts.find_by_email(&email).await?.is_some() {
            return Err(FrontdeskError::EmailAlreadyRegistered);
        }

        let now = self.clock.now();
        // Routine housekeeping; never fails the request.
        if let Err(e) = self.registration_otps.purge_expired(now).await {
            tracing::warn!(error = %e, "expired registration code purge failed");
        }

        let code = issue_code(&self.registration_otps, &email, now).await?;
        if !self.mailer.send_registration_code(&email, &name, &code).await {
            // The issued code stays valid and resendable; the operator can
            // read it here when mail is down.
            tracing::warn!(email = %email, code = %code, "registration code delivery failed");
            return Err(FrontdeskError::DeliveryFailure);
        }
        Ok(())
    }
}

// ── ResendRegistrationOtp ────────────────────────────────────────────────────

pub struct ResendRegistrationOtpUseCase<O, M, C>
where
    O: OtpRepository,
    M: Mailer,
    C: Clock,
{
    pub registration_otps: O,
    pub mailer: M,
    pub clock: C,
}

impl<O, M, C> ResendRegistrationOtpUseCase<O, M, C>
where
    O: OtpRepository,
    M: Mailer,
    C: Clock,
{
    /// Re-issues unconditionally: no account-existence check, matching the
    /// begin step's issuance semantics otherwise.
    pub async fn execute(&self, email: &str) -> Result<(), FrontdeskError> {
        let email = normalize_email(email);
        if email.is_empty() {
            return Err(FrontdeskError::MissingFields);
        }

        let now = self.clock.now();
        let code = issue_code(&self.registration_otps, &email, now).await?;
        if !self.mailer.send_registration_code(&email, "", &code).await {
            tracing::warn!(email = %email, code = %code, "registration code delivery failed");
            return Err(FrontdeskError::DeliveryFailure);
        }
        Ok(())
    }
}

// ── VerifyRegistrationOtp ────────────────────────────────────────────────────

pub struct VerifyRegistrationOtpUseCase<O, C>
where
    O: OtpRepository,
    C: Clock,
{
    pub registration_otps: O,
    pub clock: C,
}

impl<O, C> VerifyRegistrationOtpUseCase<O, C>
where
    O: OtpRepository,
    C: Clock,
{
    /// Consumes the code on success. Not-found, expired, and already-used
    /// all collapse into the same failure; callers cannot tell them apart.
    pub async fn execute(&self, email: &str, code: &str) -> Result<(), FrontdeskError> {
        let email = normalize_email(email);
        let code = code.trim();
        if email.is_empty() || code.is_empty() {
            return Err(FrontdeskError::MissingFields);
        }

        match self
            .registration_otps
            .find_valid(&email, code, self.clock.now())
            .await?
        {
            Some(row) => {
                self.registration_otps.mark_used(row.id).await?;
                Ok(())
            }
            None => Err(FrontdeskError::InvalidOrExpiredCode),
        }
    }
}

// ── CompleteRegistration ─────────────────────────────────────────────────────

pub struct CompleteRegistrationInput {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub designation: String,
    pub password: String,
}

pub struct CompleteRegistrationUseCase<A, O, H, C>
where
    A: AccountRepository,
    O: OtpRepository,
    H: PasswordHasher,
    C: Clock,
{
    pub accounts: A,
    pub registration_otps: O,
    pub hasher: H,
    pub clock: C,
    /// When set, completion requires a consumed registration code for the
    /// email. Off by default: the predecessor system never re-checked
    /// verification here, and `email_verified` is written as true either way.
    pub require_verified_email: bool,
}

impl<A, O, H, C> CompleteRegistrationUseCase<A, O, H, C>
where
    A: AccountRepository,
    O: OtpRepository,
    H: PasswordHasher,
    C: Clock,
{
    pub async fn execute(&self, input: CompleteRegistrationInput) -> Result<(), FrontdeskError> {
        let name = input.name.trim().to_owned();
        let email = normalize_email(&input.email);
        let phone = input.phone.trim().to_owned();
        let designation = input.designation.trim().to_owned();
        let password = input.password.trim();
        if name.is_empty()
            || email.is_empty()
            || phone.is_empty()
            || designation.is_empty()
            || password.is_empty()
        {
            return Err(FrontdeskError::MissingFields);
        }
        if password.len() < MIN_REGISTRATION_PASSWORD_LEN {
            return Err(FrontdeskError::short_registration_password());
        }

        if self.require_verified_email && !self.registration_otps.has_used_code(&email).await? {
            return Err(FrontdeskError::EmailNotVerified);
        }

        if self.accounts.find_by_email(&email).await?.is_some() {
            return Err(FrontdeskError::EmailAlreadyRegistered);
        }

        let now = self.clock.now();
        let account = Account {
            id: Uuid::now_v7(),
            name,
            email: email.clone(),
            phone,
            designation,
            password_hash: self.hasher.hash(password)?,
            is_active: true,
            email_verified: true,
            created_at: now,
            updated_at: now,
        };
        self.accounts.create(&account).await?;

        // Remaining codes for the address are dead weight once the account
        // exists.
        self.registration_otps.delete_for_email(&email).await?;
        Ok(())
    }
}
