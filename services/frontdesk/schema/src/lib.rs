//! SeaORM entities for the frontdesk service.
//!
//! Two independent stores back the service: the patients store
//! ([`patients`]) and the records store (everything else). Entities from
//! different stores never join; cross-store reads go through the usecases.

pub mod appointments;
pub mod patients;
pub mod registration_otps;
pub mod reset_otps;
pub mod symptoms;
pub mod users;
