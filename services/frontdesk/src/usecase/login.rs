use crate::domain::repository::AccountRepository;
use crate::domain::types::{AdminCredentials, LoginIdentity};
use crate::error::FrontdeskError;
use crate::password::PasswordHasher;

pub struct LoginInput {
    pub identifier: String,
    pub password: String,
}

pub struct LoginUseCase<A, H>
where
    A: AccountRepository,
    H: PasswordHasher,
{
    pub accounts: A,
    pub hasher: H,
    pub admin: AdminCredentials,
}

impl<A, H> LoginUseCase<A, H>
where
    A: AccountRepository,
    H: PasswordHasher,
{
    /// The identifier may be an email, a phone number, or a display name.
    /// The administrator bypass pair wins before any store lookup and works
    /// with an empty credential store.
    pub async fn execute(&self, input: LoginInput) -> Result<LoginIdentity, FrontdeskError> {
        let identifier = input.identifier.trim();
        let password = input.password.trim();
        if identifier.is_empty() || password.is_empty() {
            return Err(FrontdeskError::MissingFields);
        }

        if identifier == self.admin.username && password == self.admin.password {
            return Ok(LoginIdentity::administrator());
        }

        match self.accounts.find_active_by_identifier(identifier).await? {
            Some(account) if self.hasher.verify(password, &account.password_hash) => {
                Ok(account.into())
            }
            _ => Err(FrontdeskError::InvalidCredentials),
        }
    }
}
