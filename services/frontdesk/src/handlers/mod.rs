pub mod appointment;
pub mod auth;
pub mod export;
pub mod patient;
pub mod symptom;
