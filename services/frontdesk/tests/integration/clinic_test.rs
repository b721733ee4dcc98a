use chrono::{Duration, NaiveDate, NaiveTime};
use uuid::Uuid;

use caredesk_core::clock::Clock as _;
use caredesk_frontdesk::domain::types::{AppointmentUpdate, PatientUpdate, Symptom};
use caredesk_frontdesk::error::FrontdeskError;
use caredesk_frontdesk::usecase::appointment::{
    CreateAppointmentInput, CreateAppointmentUseCase, DeleteAppointmentUseCase,
    ListAppointmentsUseCase, UpdateAppointmentUseCase,
};
use caredesk_frontdesk::usecase::patient::{
    CreatePatientInput, CreatePatientUseCase, DeletePatientUseCase, UpdatePatientUseCase,
};
use caredesk_frontdesk::usecase::symptom::ListSymptomsUseCase;

use crate::helpers::{
    MockAppointmentRepo, MockPatientRepo, MockSymptomRepo, test_clock, test_patient,
};

fn create_input(serial: &str) -> CreatePatientInput {
    CreatePatientInput {
        serial_number: serial.to_owned(),
        patient_name: "Meena Kumari".to_owned(),
        phone_number: "9876501234".to_owned(),
        age: 52,
        sex: "Female".to_owned(),
        marital_status: "Married".to_owned(),
        problem: "High Blood Pressure".to_owned(),
        times_of_visit: None,
    }
}

fn appointment_input(patient_id: Uuid) -> CreateAppointmentInput {
    CreateAppointmentInput {
        patient_id,
        date: NaiveDate::from_ymd_opt(2025, 6, 10).unwrap(),
        time: NaiveTime::from_hms_opt(10, 30, 0).unwrap(),
        duration_minutes: None,
        notes: None,
        status: None,
    }
}

// ── Patients ─────────────────────────────────────────────────────────────────

#[tokio::test]
async fn create_patient_should_default_visits_and_stamp_date() {
    let patients = MockPatientRepo::empty();
    let clock = test_clock();
    let uc = CreatePatientUseCase {
        patients: patients.clone(),
        clock: clock.clone(),
    };
    uc.execute(create_input("SN-001")).await.unwrap();

    let stored = patients.handle();
    let stored = stored.lock().unwrap();
    assert_eq!(stored.len(), 1);
    assert_eq!(stored[0].times_of_visit, 1);
    assert_eq!(stored[0].date_added, clock.now().date_naive());
}

#[tokio::test]
async fn create_patient_should_reject_duplicate_serial() {
    let patients = MockPatientRepo::empty();
    let uc = CreatePatientUseCase {
        patients: patients.clone(),
        clock: test_clock(),
    };
    uc.execute(create_input("SN-001")).await.unwrap();

    let duplicate = uc.execute(create_input("SN-001")).await;
    assert!(matches!(duplicate, Err(FrontdeskError::SerialNumberTaken)));
    assert_eq!(patients.handle().lock().unwrap().len(), 1);
}

#[tokio::test]
async fn create_patient_should_reject_blank_required_fields() {
    let uc = CreatePatientUseCase {
        patients: MockPatientRepo::empty(),
        clock: test_clock(),
    };
    let mut input = create_input("SN-002");
    input.problem = "  ".to_owned();
    let result = uc.execute(input).await;
    assert!(matches!(result, Err(FrontdeskError::MissingFields)));
}

#[tokio::test]
async fn update_patient_should_require_fields_and_an_existing_row() {
    let clock = test_clock();
    let existing = test_patient("SN-001", clock.now());
    let patients = MockPatientRepo::new(vec![existing.clone()]);
    let uc = UpdatePatientUseCase {
        patients: patients.clone(),
        clock: clock.clone(),
    };

    let empty = uc.execute(existing.id, PatientUpdate::default()).await;
    assert!(matches!(empty, Err(FrontdeskError::EmptyUpdate)));

    let missing = uc
        .execute(
            Uuid::now_v7(),
            PatientUpdate {
                age: Some(53),
                ..Default::default()
            },
        )
        .await;
    assert!(matches!(missing, Err(FrontdeskError::PatientNotFound)));

    uc.execute(
        existing.id,
        PatientUpdate {
            age: Some(53),
            times_of_visit: Some(2),
            ..Default::default()
        },
    )
    .await
    .unwrap();
    let stored = patients.handle();
    let stored = stored.lock().unwrap();
    assert_eq!(stored[0].age, 53);
    assert_eq!(stored[0].times_of_visit, 2);
}

#[tokio::test]
async fn update_patient_should_reject_serial_owned_by_another_row() {
    let clock = test_clock();
    let first = test_patient("SN-001", clock.now());
    let second = test_patient("SN-002", clock.now() + Duration::minutes(1));
    let uc = UpdatePatientUseCase {
        patients: MockPatientRepo::new(vec![first.clone(), second.clone()]),
        clock: clock.clone(),
    };
    let result = uc
        .execute(
            second.id,
            PatientUpdate {
                serial_number: Some("SN-001".to_owned()),
                ..Default::default()
            },
        )
        .await;
    assert!(matches!(result, Err(FrontdeskError::SerialNumberTaken)));
}

#[tokio::test]
async fn delete_patient_should_remove_their_appointments_only() {
    let clock = test_clock();
    let doomed = test_patient("SN-001", clock.now());
    let kept = test_patient("SN-002", clock.now() + Duration::minutes(1));
    let patients = MockPatientRepo::new(vec![doomed.clone(), kept.clone()]);
    let appointments = MockAppointmentRepo::empty();

    let create = CreateAppointmentUseCase {
        appointments: appointments.clone(),
        patients: patients.clone(),
        clock: clock.clone(),
    };
    create.execute(appointment_input(doomed.id)).await.unwrap();
    create.execute(appointment_input(doomed.id)).await.unwrap();
    create.execute(appointment_input(kept.id)).await.unwrap();

    let uc = DeletePatientUseCase {
        patients: patients.clone(),
        appointments: appointments.clone(),
    };
    uc.execute(doomed.id).await.unwrap();

    assert_eq!(patients.handle().lock().unwrap().len(), 1);
    let remaining = appointments.handle();
    let remaining = remaining.lock().unwrap();
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0].patient_id, kept.id);
}

#[tokio::test]
async fn delete_patient_should_404_on_unknown_id() {
    let uc = DeletePatientUseCase {
        patients: MockPatientRepo::empty(),
        appointments: MockAppointmentRepo::empty(),
    };
    let result = uc.execute(Uuid::now_v7()).await;
    assert!(matches!(result, Err(FrontdeskError::PatientNotFound)));
}

// ── Appointments ─────────────────────────────────────────────────────────────

#[tokio::test]
async fn create_appointment_should_snapshot_patient_and_apply_defaults() {
    let clock = test_clock();
    let patient = test_patient("SN-001", clock.now());
    let appointments = MockAppointmentRepo::empty();
    let uc = CreateAppointmentUseCase {
        appointments: appointments.clone(),
        patients: MockPatientRepo::new(vec![patient.clone()]),
        clock: clock.clone(),
    };
    uc.execute(appointment_input(patient.id)).await.unwrap();

    let stored = appointments.handle();
    let stored = stored.lock().unwrap();
    assert_eq!(stored.len(), 1);
    assert_eq!(stored[0].patient_name, patient.patient_name);
    assert_eq!(stored[0].patient_phone, patient.phone_number);
    assert_eq!(stored[0].duration_minutes, 30);
    assert_eq!(stored[0].notes, "");
    assert_eq!(stored[0].status, "scheduled");
}

#[tokio::test]
async fn create_appointment_should_404_on_unknown_patient() {
    let uc = CreateAppointmentUseCase {
        appointments: MockAppointmentRepo::empty(),
        patients: MockPatientRepo::empty(),
        clock: test_clock(),
    };
    let result = uc.execute(appointment_input(Uuid::now_v7())).await;
    assert!(matches!(result, Err(FrontdeskError::PatientNotFound)));
}

#[tokio::test]
async fn list_appointments_should_order_by_date_then_time() {
    let clock = test_clock();
    let patient = test_patient("SN-001", clock.now());
    let appointments = MockAppointmentRepo::empty();
    let create = CreateAppointmentUseCase {
        appointments: appointments.clone(),
        patients: MockPatientRepo::new(vec![patient.clone()]),
        clock: clock.clone(),
    };

    let mut late = appointment_input(patient.id);
    late.date = NaiveDate::from_ymd_opt(2025, 6, 11).unwrap();
    late.time = NaiveTime::from_hms_opt(9, 0, 0).unwrap();
    create.execute(late).await.unwrap();

    let mut early = appointment_input(patient.id);
    early.date = NaiveDate::from_ymd_opt(2025, 6, 10).unwrap();
    early.time = NaiveTime::from_hms_opt(8, 0, 0).unwrap();
    create.execute(early).await.unwrap();

    let list = ListAppointmentsUseCase {
        appointments: appointments.clone(),
    };
    let ordered = list.execute().await.unwrap();
    assert_eq!(ordered.len(), 2);
    assert!(ordered[0].date < ordered[1].date);
}

#[tokio::test]
async fn update_appointment_should_apply_partial_fields() {
    let clock = test_clock();
    let patient = test_patient("SN-001", clock.now());
    let appointments = MockAppointmentRepo::empty();
    let create = CreateAppointmentUseCase {
        appointments: appointments.clone(),
        patients: MockPatientRepo::new(vec![patient.clone()]),
        clock: clock.clone(),
    };
    let id = create.execute(appointment_input(patient.id)).await.unwrap();

    let uc = UpdateAppointmentUseCase {
        appointments: appointments.clone(),
        clock: clock.clone(),
    };

    let empty = uc.execute(id, AppointmentUpdate::default()).await;
    assert!(matches!(empty, Err(FrontdeskError::EmptyUpdate)));

    uc.execute(
        id,
        AppointmentUpdate {
            status: Some("completed".to_owned()),
            duration_minutes: Some(45),
            ..Default::default()
        },
    )
    .await
    .unwrap();
    let stored = appointments.handle();
    let stored = stored.lock().unwrap();
    assert_eq!(stored[0].status, "completed");
    assert_eq!(stored[0].duration_minutes, 45);
}

#[tokio::test]
async fn delete_appointment_should_404_on_unknown_id() {
    let uc = DeleteAppointmentUseCase {
        appointments: MockAppointmentRepo::empty(),
    };
    let result = uc.execute(Uuid::now_v7()).await;
    assert!(matches!(result, Err(FrontdeskError::AppointmentNotFound)));
}

// ── Symptoms ─────────────────────────────────────────────────────────────────

#[tokio::test]
async fn list_symptoms_should_order_by_category_then_name() {
    let uc = ListSymptomsUseCase {
        symptoms: MockSymptomRepo {
            symptoms: vec![
                Symptom {
                    id: Uuid::now_v7(),
                    symptom_name: "Insomnia".to_owned(),
                    category: "Neurological".to_owned(),
                },
                Symptom {
                    id: Uuid::now_v7(),
                    symptom_name: "High Blood Pressure".to_owned(),
                    category: "Cardiovascular".to_owned(),
                },
            ],
        },
    };
    let symptoms = uc.execute().await.unwrap();
    assert_eq!(symptoms[0].category, "Cardiovascular");
    assert_eq!(symptoms[1].category, "Neurological");
}
