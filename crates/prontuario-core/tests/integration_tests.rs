//! Integration tests for prontuario-core's public validation API.

use chrono::{Days, NaiveDate};
use prontuario_core::prelude::*;
use prontuario_core::domain::ViolationKind;

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 2, 10).unwrap()
}

fn doctor() -> Doctor {
    Doctor {
        name: "Helena Prado".into(),
        crm: "123456SP".into(),
        phone: "34912345678".into(),
        email: "helena@hospital.com.br".into(),
        birth_date: NaiveDate::from_ymd_opt(1979, 3, 2).unwrap(),
        cpf: "12345678901".into(),
        shift: Shift::Night,
        status: Status::Active,
    }
}

fn nurse() -> Nurse {
    Nurse {
        name: "Joana Lima".into(),
        coren: "654321MG".into(),
        department: RecordId::new(1),
        phone: "31987654321".into(),
        email: "joana@hospital.com.br".into(),
        birth_date: NaiveDate::from_ymd_opt(1990, 11, 20).unwrap(),
        cpf: "98765432100".into(),
        shift: Shift::FullTime,
        status: Status::Inactive,
    }
}

fn patient() -> Patient {
    Patient {
        name: "Carlos Souza".into(),
        birth_date: NaiveDate::from_ymd_opt(2001, 7, 9).unwrap(),
        sex: Sex::Male,
        cpf: "11122233344".into(),
        rg: "123456789".into(),
        mother_name: "Maria Souza".into(),
        father_name: Some("José Souza".into()),
        primary_phone: "34912345678".into(),
        secondary_phone: Some("34998765432".into()),
        email: "carlos@mail.com".into(),
        blood_type: "AB".into(),
    }
}

#[test]
fn license_numbers_follow_digits_plus_state_code() {
    for crm in ["123456SP", "1234567RJ", "000000AC", "99999999TO"] {
        let d = Doctor {
            crm: crm.into(),
            ..doctor()
        };
        assert!(
            DomainValidator::validate_doctor(&d, today()).is_ok(),
            "{crm} should pass"
        );
    }

    for crm in ["12345SP", "123456XX", "123456sp", "ABCDEFSP", "12345-SP"] {
        let d = Doctor {
            crm: crm.into(),
            ..doctor()
        };
        let err = DomainValidator::validate_doctor(&d, today()).unwrap_err();
        assert_eq!(err.kind(), ViolationKind::Format, "{crm}");
        assert_eq!(err.field(), Some("crm"));
    }
}

#[test]
fn nurse_license_error_names_coren() {
    let n = Nurse {
        coren: "12AB34MG".into(),
        ..nurse()
    };
    let err = DomainValidator::validate_nurse(&n, today()).unwrap_err();
    assert_eq!(err.field(), Some("coren"));
}

#[test]
fn phone_fields_need_eleven_digits() {
    for phone in ["3491234567", "3491234567a", "349123456789", "349 1234567"] {
        let d = Doctor {
            phone: phone.into(),
            ..doctor()
        };
        let err = DomainValidator::validate_doctor(&d, today()).unwrap_err();
        assert_eq!(err.kind(), ViolationKind::DigitLength, "{phone}");
        assert_eq!(err.field(), None);
    }
}

#[test]
fn birth_date_may_be_today_but_not_tomorrow() {
    let on_day = Doctor {
        birth_date: today(),
        ..doctor()
    };
    assert!(DomainValidator::validate_doctor(&on_day, today()).is_ok());

    let tomorrow = Doctor {
        birth_date: today().checked_add_days(Days::new(1)).unwrap(),
        ..doctor()
    };
    let err = DomainValidator::validate_doctor(&tomorrow, today()).unwrap_err();
    assert_eq!(err.kind(), ViolationKind::Temporal);
}

#[test]
fn cpf_and_rg_lengths() {
    for cpf in ["1234567890", "123456789012", "1234567890x"] {
        let p = Patient {
            cpf: cpf.into(),
            ..patient()
        };
        assert!(DomainValidator::validate_patient(&p, today()).is_err(), "{cpf}");
    }

    for rg in ["12345678", "1234567890"] {
        let p = Patient {
            rg: rg.into(),
            ..patient()
        };
        let err = DomainValidator::validate_patient(&p, today()).unwrap_err();
        assert_eq!(err.kind(), ViolationKind::DigitLength, "{rg}");
    }
}

#[test]
fn optional_patient_fields_are_checked_only_when_present() {
    let absent = Patient {
        secondary_phone: None,
        father_name: None,
        ..patient()
    };
    assert!(DomainValidator::validate_patient(&absent, today()).is_ok());

    let empty = Patient {
        secondary_phone: Some(String::new()),
        father_name: Some(String::new()),
        ..patient()
    };
    assert!(DomainValidator::validate_patient(&empty, today()).is_ok());

    let bad = Patient {
        secondary_phone: Some("123".into()),
        ..patient()
    };
    assert!(DomainValidator::validate_patient(&bad, today()).is_err());
}

#[test]
fn blood_type_is_exactly_two_characters() {
    for ok in ["O+", "AB", "A-"] {
        let p = Patient {
            blood_type: ok.into(),
            ..patient()
        };
        assert!(DomainValidator::validate_patient(&p, today()).is_ok(), "{ok}");
    }
    for bad in ["O", "AB+", ""] {
        let p = Patient {
            blood_type: bad.into(),
            ..patient()
        };
        let err = DomainValidator::validate_patient(&p, today()).unwrap_err();
        assert_eq!(err.kind(), ViolationKind::Length, "{bad}");
    }
}

#[test]
fn first_failing_rule_is_reported() {
    let d = Doctor {
        crm: "bad".into(),
        phone: "bad".into(),
        cpf: "bad".into(),
        ..doctor()
    };
    let err = DomainValidator::validate_doctor(&d, today()).unwrap_err();
    assert_eq!(err.kind(), ViolationKind::Format);

    let p = Patient {
        primary_phone: "1".into(),
        blood_type: "ABC".into(),
        ..patient()
    };
    let err = DomainValidator::validate_patient(&p, today()).unwrap_err();
    assert_eq!(err.kind(), ViolationKind::DigitLength);
}

#[test]
fn validation_is_idempotent() {
    let record = Record::from(patient());
    let first = DomainValidator::validate_record(&record, today());
    let second = DomainValidator::validate_record(&record, today());
    assert_eq!(first, second);
    assert!(first.is_ok());
}

#[test]
fn department_name_is_checked_as_text_only() {
    assert!(
        DomainValidator::validate_department(&Department::new("Centro Cirúrgico"), today())
            .is_ok()
    );
}

#[test]
fn unique_fields_follow_record_kind() {
    let fields: Vec<&str> = Record::from(doctor())
        .unique_fields()
        .into_iter()
        .map(|(f, _)| f)
        .collect();
    assert_eq!(fields, vec!["crm", "phone", "email", "cpf"]);

    let fields: Vec<&str> = Record::from(nurse())
        .unique_fields()
        .into_iter()
        .map(|(f, _)| f)
        .collect();
    assert_eq!(fields, vec!["phone", "email", "cpf"]);

    assert!(Record::from(Department::new("UTI")).unique_fields().is_empty());
}
