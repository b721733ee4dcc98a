use chrono::Duration;

use caredesk_frontdesk::error::FrontdeskError;
use caredesk_frontdesk::password::{PasswordHasher as _, Sha256PasswordHasher};
use caredesk_frontdesk::usecase::reset::{
    BeginResetUseCase, ResetPasswordInput, ResetPasswordUseCase, VerifyResetOtpUseCase,
};

use crate::helpers::{MockAccountRepo, MockMailer, MockOtpRepo, test_account, test_clock};

#[tokio::test]
async fn begin_reset_should_require_an_active_account() {
    let uc = BeginResetUseCase {
        accounts: MockAccountRepo::empty(),
        reset_otps: MockOtpRepo::empty(),
        mailer: MockMailer::delivering(),
        clock: test_clock(),
    };
    let result = uc.execute("nobody@clinic.com").await;
    assert!(matches!(result, Err(FrontdeskError::EmailNotFound)));

    let mut inactive = test_account("desk@clinic.com", "opensesame");
    inactive.is_active = false;
    let uc = BeginResetUseCase {
        accounts: MockAccountRepo::new(vec![inactive]),
        reset_otps: MockOtpRepo::empty(),
        mailer: MockMailer::delivering(),
        clock: test_clock(),
    };
    let result = uc.execute("desk@clinic.com").await;
    assert!(matches!(result, Err(FrontdeskError::EmailNotFound)));
}

#[tokio::test]
async fn begin_reset_should_report_success_even_when_delivery_fails() {
    let otps = MockOtpRepo::empty();
    let uc = BeginResetUseCase {
        accounts: MockAccountRepo::new(vec![test_account("desk@clinic.com", "opensesame")]),
        reset_otps: otps.clone(),
        mailer: MockMailer::failing(),
        clock: test_clock(),
    };
    // The delivery verdict is not part of the outcome for resets.
    uc.execute("desk@clinic.com").await.unwrap();
    assert_eq!(otps.handle().lock().unwrap().len(), 1);
}

#[tokio::test]
async fn verify_reset_should_allow_replay_of_unexpired_code() {
    let otps = MockOtpRepo::empty();
    let mailer = MockMailer::delivering();
    let clock = test_clock();

    let begin = BeginResetUseCase {
        accounts: MockAccountRepo::new(vec![test_account("desk@clinic.com", "opensesame")]),
        reset_otps: otps.clone(),
        mailer: mailer.clone(),
        clock: clock.clone(),
    };
    begin.execute("desk@clinic.com").await.unwrap();
    let code = mailer.last_code();

    let verify = VerifyResetOtpUseCase {
        reset_otps: otps.clone(),
        clock: clock.clone(),
    };
    // The reset family checks expiry only, so a second verification of the
    // same code also passes.
    verify.execute("desk@clinic.com", &code).await.unwrap();
    verify.execute("desk@clinic.com", &code).await.unwrap();

    // Until the window closes.
    clock.advance(Duration::minutes(10) + Duration::seconds(1));
    let expired = verify.execute("desk@clinic.com", &code).await;
    assert!(matches!(expired, Err(FrontdeskError::InvalidOrExpiredCode)));
}

#[tokio::test]
async fn registration_codes_should_not_satisfy_reset_checks() {
    // Families live in separate ledgers; a registration issuance leaves the
    // reset ledger empty.
    let reset_otps = MockOtpRepo::empty();
    let verify = VerifyResetOtpUseCase {
        reset_otps,
        clock: test_clock(),
    };
    let result = verify.execute("desk@clinic.com", "123456").await;
    assert!(matches!(result, Err(FrontdeskError::InvalidOrExpiredCode)));
}

#[tokio::test]
async fn reset_password_should_reject_short_password_and_keep_hash() {
    let account = test_account("a@x.com", "original-pass");
    let original_hash = account.password_hash.clone();
    let accounts = MockAccountRepo::new(vec![account]);
    let otps = MockOtpRepo::empty();
    let mailer = MockMailer::delivering();
    let clock = test_clock();

    let begin = BeginResetUseCase {
        accounts: accounts.clone(),
        reset_otps: otps.clone(),
        mailer: mailer.clone(),
        clock: clock.clone(),
    };
    begin.execute("a@x.com").await.unwrap();

    let reset = ResetPasswordUseCase {
        accounts: accounts.clone(),
        reset_otps: otps.clone(),
        hasher: Sha256PasswordHasher,
        clock: clock.clone(),
    };
    let result = reset
        .execute(ResetPasswordInput {
            email: "a@x.com".to_owned(),
            code: mailer.last_code(),
            new_password: "short".to_owned(),
        })
        .await;
    assert!(matches!(result, Err(FrontdeskError::PasswordTooShort(6))));

    let unchanged = accounts.handle();
    let unchanged = unchanged.lock().unwrap();
    assert_eq!(unchanged[0].password_hash, original_hash);
}

#[tokio::test]
async fn reset_password_should_update_hash_and_retire_code() {
    let accounts = MockAccountRepo::new(vec![test_account("desk@clinic.com", "original-pass")]);
    let otps = MockOtpRepo::empty();
    let mailer = MockMailer::delivering();
    let clock = test_clock();

    let begin = BeginResetUseCase {
        accounts: accounts.clone(),
        reset_otps: otps.clone(),
        mailer: mailer.clone(),
        clock: clock.clone(),
    };
    begin.execute("desk@clinic.com").await.unwrap();
    let code = mailer.last_code();

    let reset = ResetPasswordUseCase {
        accounts: accounts.clone(),
        reset_otps: otps.clone(),
        hasher: Sha256PasswordHasher,
        clock: clock.clone(),
    };
    reset
        .execute(ResetPasswordInput {
            email: "desk@clinic.com".to_owned(),
            code: code.clone(),
            new_password: "fresh-secret".to_owned(),
        })
        .await
        .unwrap();

    let updated = accounts.handle();
    let updated = updated.lock().unwrap();
    assert_eq!(
        updated[0].password_hash,
        Sha256PasswordHasher.hash("fresh-secret").unwrap()
    );
    drop(updated);

    // The code is gone; the replay window is closed by deletion, not by the
    // used flag.
    assert!(otps.handle().lock().unwrap().is_empty());
    let verify = VerifyResetOtpUseCase {
        reset_otps: otps.clone(),
        clock: clock.clone(),
    };
    let replayed = verify.execute("desk@clinic.com", &code).await;
    assert!(matches!(replayed, Err(FrontdeskError::InvalidOrExpiredCode)));
}

#[tokio::test]
async fn reset_password_should_reject_wrong_code() {
    let account = test_account("desk@clinic.com", "original-pass");
    let original_hash = account.password_hash.clone();
    let accounts = MockAccountRepo::new(vec![account]);
    let otps = MockOtpRepo::empty();
    let mailer = MockMailer::delivering();
    let clock = test_clock();

    let begin = BeginResetUseCase {
        accounts: accounts.clone(),
        reset_otps: otps.clone(),
        mailer: mailer.clone(),
        clock: clock.clone(),
    };
    begin.execute("desk@clinic.com").await.unwrap();
    let issued = mailer.last_code();
    // Any other six digits; flip the first digit so it cannot collide.
    let wrong = format!(
        "{}{}",
        if issued.starts_with('0') { "1" } else { "0" },
        &issued[1..]
    );

    let reset = ResetPasswordUseCase {
        accounts: accounts.clone(),
        reset_otps: otps.clone(),
        hasher: Sha256PasswordHasher,
        clock: clock.clone(),
    };
    let result = reset
        .execute(ResetPasswordInput {
            email: "desk@clinic.com".to_owned(),
            code: wrong,
            new_password: "fresh-secret".to_owned(),
        })
        .await;
    assert!(matches!(result, Err(FrontdeskError::InvalidOrExpiredCode)));
    assert_eq!(
        accounts.handle().lock().unwrap()[0].password_hash,
        original_hash
    );
}
