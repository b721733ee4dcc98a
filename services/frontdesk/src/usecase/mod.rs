pub mod appointment;
pub mod export;
pub mod login;
pub mod otp;
pub mod patient;
pub mod registration;
pub mod reset;
pub mod symptom;
