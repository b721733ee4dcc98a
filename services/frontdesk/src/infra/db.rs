use anyhow::Context as _;
use chrono::{DateTime, Utc};
use sea_orm::sea_query::{Expr, Func};
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ColumnTrait, Condition, DatabaseConnection, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder, TransactionTrait,
};
use uuid::Uuid;

use caredesk_frontdesk_schema::{
    appointments, patients, registration_otps, reset_otps, symptoms, users,
};

use crate::domain::repository::{
    AccountRepository, AppointmentRepository, OtpRepository, PatientRepository, SymptomRepository,
};
use crate::domain::types::{
    Account, Appointment, AppointmentUpdate, OneTimeCode, Patient, PatientUpdate, Symptom,
};
use crate::error::FrontdeskError;

// ── Account repository ───────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbAccountRepository {
    pub db: DatabaseConnection,
}

impl AccountRepository for DbAccountRepository {
    async fn find_by_email(&self, email: &str) -> Result<Option<Account>, FrontdeskError> {
        let model = users::Entity::find()
            .filter(users::Column::Email.eq(email))
            .one(&self.db)
            .await
            .context("find account by email")?;
        Ok(model.map(account_from_model))
    }

    async fn find_active_by_email(&self, email: &str) -> Result<Option<Account>, FrontdeskError> {
        let model = users::Entity::find()
            .filter(users::Column::Email.eq(email))
            .filter(users::Column::IsActive.eq(true))
            .one(&self.db)
            .await
            .context("find active account by email")?;
        Ok(model.map(account_from_model))
    }

    async fn find_active_by_identifier(
        &self,
        identifier: &str,
    ) -> Result<Option<Account>, FrontdeskError> {
        // Emails are stored lowercased; names are not, so the name arm
        // lowers the column. Phone matches exactly.
        let lowered = identifier.to_lowercase();
        let model = users::Entity::find()
            .filter(users::Column::IsActive.eq(true))
            .filter(
                Condition::any()
                    .add(users::Column::Email.eq(lowered.clone()))
                    .add(users::Column::Phone.eq(identifier))
                    .add(Expr::expr(Func::lower(Expr::col(users::Column::Name))).eq(lowered)),
            )
            .one(&self.db)
            .await
            .context("find active account by identifier")?;
        Ok(model.map(account_from_model))
    }

    async fn create(&self, account: &Account) -> Result<(), FrontdeskError> {
        users::ActiveModel {
            id: Set(account.id),
            name: Set(account.name.clone()),
            email: Set(account.email.clone()),
            phone: Set(account.phone.clone()),
            designation: Set(account.designation.clone()),
            password_hash: Set(account.password_hash.clone()),
            is_active: Set(account.is_active),
            email_verified: Set(account.email_verified),
            created_at: Set(account.created_at),
            updated_at: Set(account.updated_at),
        }
        .insert(&self.db)
        .await
        .context("create account")?;
        Ok(())
    }

    async fn update_password_hash(
        &self,
        email: &str,
        password_hash: &str,
        now: DateTime<Utc>,
    ) -> Result<(), FrontdeskError> {
        users::Entity::update_many()
            .col_expr(users::Column::PasswordHash, Expr::value(password_hash))
            .col_expr(users::Column::UpdatedAt, Expr::value(now))
            .filter(users::Column::Email.eq(email))
            .exec(&self.db)
            .await
            .context("update account password hash")?;
        Ok(())
    }
}

fn account_from_model(model: users::Model) -> Account {
    Account {
        id: model.id,
        name: model.name,
        email: model.email,
        phone: model.phone,
        designation: model.designation,
        password_hash: model.password_hash,
        is_active: model.is_active,
        email_verified: model.email_verified,
        created_at: model.created_at,
        updated_at: model.updated_at,
    }
}

// ── Registration OTP repository ──────────────────────────────────────────────

#[derive(Clone)]
pub struct DbRegistrationOtpRepository {
    pub db: DatabaseConnection,
}

impl OtpRepository for DbRegistrationOtpRepository {
    async fn replace(&self, code: &OneTimeCode) -> Result<(), FrontdeskError> {
        self.db
            .transaction::<_, (), sea_orm::DbErr>(|txn| {
                let code = code.clone();
                Box::pin(async move {
                    registration_otps::Entity::delete_many()
                        .filter(registration_otps::Column::Email.eq(code.email.clone()))
                        .exec(txn)
                        .await?;
                    registration_otps::ActiveModel {
                        id: Set(code.id),
                        email: Set(code.email.clone()),
                        code: Set(code.code.clone()),
                        expires_at: Set(code.expires_at),
                        is_used: Set(false),
                        created_at: Set(code.created_at),
                    }
                    .insert(txn)
                    .await?;
                    Ok(())
                })
            })
            .await
            .context("replace registration code")?;
        Ok(())
    }

    async fn find_valid(
        &self,
        email: &str,
        code: &str,
        now: DateTime<Utc>,
    ) -> Result<Option<OneTimeCode>, FrontdeskError> {
        let model = registration_otps::Entity::find()
            .filter(registration_otps::Column::Email.eq(email))
            .filter(registration_otps::Column::Code.eq(code))
            .filter(registration_otps::Column::IsUsed.eq(false))
            .filter(registration_otps::Column::ExpiresAt.gt(now))
            .one(&self.db)
            .await
            .context("find valid registration code")?;
        Ok(model.map(registration_otp_from_model))
    }

    async fn find_matching(
        &self,
        email: &str,
        code: &str,
        now: DateTime<Utc>,
    ) -> Result<Option<OneTimeCode>, FrontdeskError> {
        let model = registration_otps::Entity::find()
            .filter(registration_otps::Column::Email.eq(email))
            .filter(registration_otps::Column::Code.eq(code))
            .filter(registration_otps::Column::ExpiresAt.gt(now))
            .one(&self.db)
            .await
            .context("find matching registration code")?;
        Ok(model.map(registration_otp_from_model))
    }

    async fn mark_used(&self, id: Uuid) -> Result<(), FrontdeskError> {
        registration_otps::ActiveModel {
            id: Set(id),
            is_used: Set(true),
            ..Default::default()
        }
        .update(&self.db)
        .await
        .context("mark registration code used")?;
        Ok(())
    }

    async fn has_used_code(&self, email: &str) -> Result<bool, FrontdeskError> {
        let count = registration_otps::Entity::find()
            .filter(registration_otps::Column::Email.eq(email))
            .filter(registration_otps::Column::IsUsed.eq(true))
            .count(&self.db)
            .await
            .context("count used registration codes")?;
        Ok(count > 0)
    }

    async fn delete_for_email(&self, email: &str) -> Result<(), FrontdeskError> {
        registration_otps::Entity::delete_many()
            .filter(registration_otps::Column::Email.eq(email))
            .exec(&self.db)
            .await
            .context("delete registration codes for email")?;
        Ok(())
    }

    async fn delete_matching(&self, email: &str, code: &str) -> Result<(), FrontdeskError> {
        registration_otps::Entity::delete_many()
            .filter(registration_otps::Column::Email.eq(email))
            .filter(registration_otps::Column::Code.eq(code))
            .exec(&self.db)
            .await
            .context("delete matching registration code")?;
        Ok(())
    }

    async fn purge_expired(&self, now: DateTime<Utc>) -> Result<(), FrontdeskError> {
        registration_otps::Entity::delete_many()
            .filter(registration_otps::Column::ExpiresAt.lt(now))
            .exec(&self.db)
            .await
            .context("purge expired registration codes")?;
        Ok(())
    }
}

fn registration_otp_from_model(model: registration_otps::Model) -> OneTimeCode {
    OneTimeCode {
        id: model.id,
        email: model.email,
        code: model.code,
        expires_at: model.expires_at,
        is_used: model.is_used,
        created_at: model.created_at,
    }
}

// ── Reset OTP repository ─────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbResetOtpRepository {
    pub db: DatabaseConnection,
}

impl OtpRepository for DbResetOtpRepository {
    async fn replace(&self, code: &OneTimeCode) -> Result<(), FrontdeskError> {
        self.db
            .transaction::<_, (), sea_orm::DbErr>(|txn| {
                let code = code.clone();
                Box::pin(async move {
                    reset_otps::Entity::delete_many()
                        .filter(reset_otps::Column::Email.eq(code.email.clone()))
                        .exec(txn)
                        .await?;
                    reset_otps::ActiveModel {
                        id: Set(code.id),
                        email: Set(code.email.clone()),
                        code: Set(code.code.clone()),
                        expires_at: Set(code.expires_at),
                        is_used: Set(false),
                        created_at: Set(code.created_at),
                    }
                    .insert(txn)
                    .await?;
                    Ok(())
                })
            })
            .await
            .context("replace reset code")?;
        Ok(())
    }

    async fn find_valid(
        &self,
        email: &str,
        code: &str,
        now: DateTime<Utc>,
    ) -> Result<Option<OneTimeCode>, FrontdeskError> {
        let model = reset_otps::Entity::find()
            .filter(reset_otps::Column::Email.eq(email))
            .filter(reset_otps::Column::Code.eq(code))
            .filter(reset_otps::Column::IsUsed.eq(false))
            .filter(reset_otps::Column::ExpiresAt.gt(now))
            .one(&self.db)
            .await
            .context("find valid reset code")?;
        Ok(model.map(reset_otp_from_model))
    }

    async fn find_matching(
        &self,
        email: &str,
        code: &str,
        now: DateTime<Utc>,
    ) -> Result<Option<OneTimeCode>, FrontdeskError> {
        let model = reset_otps::Entity::find()
            .filter(reset_otps::Column::Email.eq(email))
            .filter(reset_otps::Column::Code.eq(code))
            .filter(reset_otps::Column::ExpiresAt.gt(now))
            .one(&self.db)
            .await
            .context("find matching reset code")?;
        Ok(model.map(reset_otp_from_model))
    }

    async fn mark_used(&self, id: Uuid) -> Result<(), FrontdeskError> {
        reset_otps::ActiveModel {
            id: Set(id),
            is_used: Set(true),
            ..Default::default()
        }
        .update(&self.db)
        .await
        .context("mark reset code used")?;
        Ok(())
    }

    async fn has_used_code(&self, email: &str) -> Result<bool, FrontdeskError> {
        let count = reset_otps::Entity::find()
            .filter(reset_otps::Column::Email.eq(email))
            .filter(reset_otps::Column::IsUsed.eq(true))
            .count(&self.db)
            .await
            .context("count used reset codes")?;
        Ok(count > 0)
    }

    async fn delete_for_email(&self, email: &str) -> Result<(), FrontdeskError> {
        reset_otps::Entity::delete_many()
            .filter(reset_otps::Column::Email.eq(email))
            .exec(&self.db)
            .await
            .context("delete reset codes for email")?;
        Ok(())
    }

    async fn delete_matching(&self, email: &str, code: &str) -> Result<(), FrontdeskError> {
        reset_otps::Entity::delete_many()
            .filter(reset_otps::Column::Email.eq(email))
            .filter(reset_otps::Column::Code.eq(code))
            .exec(&self.db)
            .await
            .context("delete matching reset code")?;
        Ok(())
    }

    async fn purge_expired(&self, now: DateTime<Utc>) -> Result<(), FrontdeskError> {
        reset_otps::Entity::delete_many()
            .filter(reset_otps::Column::ExpiresAt.lt(now))
            .exec(&self.db)
            .await
            .context("purge expired reset codes")?;
        Ok(())
    }
}

fn reset_otp_from_model(model: reset_otps::Model) -> OneTimeCode {
    OneTimeCode {
        id: model.id,
        email: model.email,
        code: model.code,
        expires_at: model.expires_at,
        is_used: model.is_used,
        created_at: model.created_at,
    }
}

// ── Patient repository ───────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbPatientRepository {
    pub db: DatabaseConnection,
}

impl PatientRepository for DbPatientRepository {
    async fn list(&self) -> Result<Vec<Patient>, FrontdeskError> {
        let models = patients::Entity::find()
            .order_by_desc(patients::Column::CreatedAt)
            .all(&self.db)
            .await
            .context("list patients")?;
        Ok(models.into_iter().map(patient_from_model).collect())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Patient>, FrontdeskError> {
        let model = patients::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .context("find patient by id")?;
        Ok(model.map(patient_from_model))
    }

    async fn find_by_serial(
        &self,
        serial_number: &str,
    ) -> Result<Option<Patient>, FrontdeskError> {
        let model = patients::Entity::find()
            .filter(patients::Column::SerialNumber.eq(serial_number))
            .one(&self.db)
            .await
            .context("find patient by serial number")?;
        Ok(model.map(patient_from_model))
    }

    async fn create(&self, patient: &Patient) -> Result<(), FrontdeskError> {
        patients::ActiveModel {
            id: Set(patient.id),
            serial_number: Set(patient.serial_number.clone()),
            patient_name: Set(patient.patient_name.clone()),
            phone_number: Set(patient.phone_number.clone()),
            age: Set(patient.age),
            sex: Set(patient.sex.clone()),
            marital_status: Set(patient.marital_status.clone()),
            problem: Set(patient.problem.clone()),
            times_of_visit: Set(patient.times_of_visit),
            date_added: Set(patient.date_added),
            created_at: Set(patient.created_at),
            updated_at: Set(patient.updated_at),
        }
        .insert(&self.db)
        .await
        .context("create patient")?;
        Ok(())
    }

    async fn update(
        &self,
        id: Uuid,
        fields: &PatientUpdate,
        now: DateTime<Utc>,
    ) -> Result<(), FrontdeskError> {
        let mut model = patients::ActiveModel {
            id: Set(id),
            updated_at: Set(now),
            ..Default::default()
        };
        if let Some(v) = &fields.serial_number {
            model.serial_number = Set(v.clone());
        }
        if let Some(v) = &fields.patient_name {
            model.patient_name = Set(v.clone());
        }
        if let Some(v) = &fields.phone_number {
            model.phone_number = Set(v.clone());
        }
        if let Some(v) = fields.age {
            model.age = Set(v);
        }
        if let Some(v) = &fields.sex {
            model.sex = Set(v.clone());
        }
        if let Some(v) = &fields.marital_status {
            model.marital_status = Set(v.clone());
        }
        if let Some(v) = &fields.problem {
            model.problem = Set(v.clone());
        }
        if let Some(v) = fields.times_of_visit {
            model.times_of_visit = Set(v);
        }
        model.update(&self.db).await.context("update patient")?;
        Ok(())
    }

    async fn delete(&self, id: Uuid) -> Result<(), FrontdeskError> {
        patients::Entity::delete_by_id(id)
            .exec(&self.db)
            .await
            .context("delete patient")?;
        Ok(())
    }
}

fn patient_from_model(model: patients::Model) -> Patient {
    Patient {
        id: model.id,
        serial_number: model.serial_number,
        patient_name: model.patient_name,
        phone_number: model.phone_number,
        age: model.age,
        sex: model.sex,
        marital_status: model.marital_status,
        problem: model.problem,
        times_of_visit: model.times_of_visit,
        date_added: model.date_added,
        created_at: model.created_at,
        updated_at: model.updated_at,
    }
}

// ── Appointment repository ───────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbAppointmentRepository {
    pub db: DatabaseConnection,
}

impl AppointmentRepository for DbAppointmentRepository {
    async fn list(&self) -> Result<Vec<Appointment>, FrontdeskError> {
        let models = appointments::Entity::find()
            .order_by_asc(appointments::Column::Date)
            .order_by_asc(appointments::Column::Time)
            .all(&self.db)
            .await
            .context("list appointments")?;
        Ok(models.into_iter().map(appointment_from_model).collect())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Appointment>, FrontdeskError> {
        let model = appointments::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .context("find appointment by id")?;
        Ok(model.map(appointment_from_model))
    }

    async fn create(&self, appointment: &Appointment) -> Result<(), FrontdeskError> {
        appointments::ActiveModel {
            id: Set(appointment.id),
            patient_id: Set(appointment.patient_id),
            patient_name: Set(appointment.patient_name.clone()),
            patient_phone: Set(appointment.patient_phone.clone()),
            date: Set(appointment.date),
            time: Set(appointment.time),
            duration_minutes: Set(appointment.duration_minutes),
            notes: Set(appointment.notes.clone()),
            status: Set(appointment.status.clone()),
            created_at: Set(appointment.created_at),
            updated_at: Set(appointment.updated_at),
        }
        .insert(&self.db)
        .await
        .context("create appointment")?;
        Ok(())
    }

    async fn update(
        &self,
        id: Uuid,
        fields: &AppointmentUpdate,
        now: DateTime<Utc>,
    ) -> Result<(), FrontdeskError> {
        let mut model = appointments::ActiveModel {
            id: Set(id),
            updated_at: Set(now),
            ..Default::default()
        };
        if let Some(v) = fields.date {
            model.date = Set(v);
        }
        if let Some(v) = fields.time {
            model.time = Set(v);
        }
        if let Some(v) = fields.duration_minutes {
            model.duration_minutes = Set(v);
        }
        if let Some(v) = &fields.notes {
            model.notes = Set(v.clone());
        }
        if let Some(v) = &fields.status {
            model.status = Set(v.clone());
        }
        model.update(&self.db).await.context("update appointment")?;
        Ok(())
    }

    async fn delete(&self, id: Uuid) -> Result<(), FrontdeskError> {
        appointments::Entity::delete_by_id(id)
            .exec(&self.db)
            .await
            .context("delete appointment")?;
        Ok(())
    }

    async fn delete_for_patient(&self, patient_id: Uuid) -> Result<(), FrontdeskError> {
        appointments::Entity::delete_many()
            .filter(appointments::Column::PatientId.eq(patient_id))
            .exec(&self.db)
            .await
            .context("delete appointments for patient")?;
        Ok(())
    }
}

fn appointment_from_model(model: appointments::Model) -> Appointment {
    Appointment {
        id: model.id,
        patient_id: model.patient_id,
        patient_name: model.patient_name,
        patient_phone: model.patient_phone,
        date: model.date,
        time: model.time,
        duration_minutes: model.duration_minutes,
        notes: model.notes,
        status: model.status,
        created_at: model.created_at,
        updated_at: model.updated_at,
    }
}

// ── Symptom repository ───────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbSymptomRepository {
    pub db: DatabaseConnection,
}

impl SymptomRepository for DbSymptomRepository {
    async fn list_active(&self) -> Result<Vec<Symptom>, FrontdeskError> {
        let models = symptoms::Entity::find()
            .filter(symptoms::Column::IsActive.eq(true))
            .order_by_asc(symptoms::Column::Category)
            .order_by_asc(symptoms::Column::SymptomName)
            .all(&self.db)
            .await
            .context("list active symptoms")?;
        Ok(models
            .into_iter()
            .map(|model| Symptom {
                id: model.id,
                symptom_name: model.symptom_name,
                category: model.category,
            })
            .collect())
    }
}
