/// Property-based tests using proptest
/// Tests invariants of CPF shape validation and response normalization
/// that should hold for all inputs
use consulta_cpf_api::cpf::normalize_cpf;
use consulta_cpf_api::errors::AppError;
use consulta_cpf_api::models::NormalizedRecord;
use proptest::prelude::*;

// Property: CPF validation should never panic
proptest! {
    #[test]
    fn cpf_validation_never_panics(input in "\\PC*") {
        let _ = normalize_cpf(&input);
    }
}

// Property: formatting characters are transparent
proptest! {
    #[test]
    fn formatted_cpfs_reduce_to_digits(cpf in "[0-9]{11}") {
        let formatted = format!("{}.{}.{}-{}",
            &cpf[0..3], &cpf[3..6], &cpf[6..9], &cpf[9..11]);
        prop_assert_eq!(normalize_cpf(&formatted).unwrap(), cpf);
    }

    #[test]
    fn digits_survive_surrounding_noise(cpf in "[0-9]{11}", noise in "[ ./\\-abc]{0,8}") {
        let input = format!("{}{}{}", noise, cpf, noise);
        prop_assert_eq!(normalize_cpf(&input).unwrap(), cpf);
    }

    #[test]
    fn normalization_is_idempotent(cpf in "[0-9]{11}") {
        let once = normalize_cpf(&cpf).unwrap();
        prop_assert_eq!(normalize_cpf(&once).unwrap(), cpf);
    }
}

// Property: anything not reducible to 11 digits is rejected
proptest! {
    #[test]
    fn wrong_digit_counts_rejected(digits in prop::collection::vec(0u8..=9, 0..20)) {
        prop_assume!(digits.len() != 11);
        let input: String = digits.iter().map(|d| char::from(b'0' + d)).collect();
        match normalize_cpf(&input) {
            Err(AppError::MissingCpf) => prop_assert!(input.is_empty()),
            Err(AppError::InvalidCpf { digits: n }) => prop_assert_eq!(n, input.len()),
            other => prop_assert!(false, "expected rejection, got {:?}", other),
        }
    }

    #[test]
    fn letters_alone_never_validate(input in "[a-zA-Z]{1,20}") {
        prop_assert!(
            matches!(
                normalize_cpf(&input),
                Err(AppError::InvalidCpf { digits: 0 })
            ),
            "expected InvalidCpf with 0 digits"
        );
    }
}

// Property: the normalized record is always fully populated
proptest! {
    #[test]
    fn normalized_record_always_complete(nome in "\\PC*", cpf in "[0-9]{11}") {
        let data = serde_json::json!({ "nome": nome });
        let record = NormalizedRecord::from_upstream(&data, &cpf);
        prop_assert!(!record.cpf.is_empty());
        prop_assert!(!record.nome.is_empty());
        prop_assert!(!record.nasc.is_empty());
        prop_assert!(!record.nome_mae.is_empty());
    }

    #[test]
    fn input_cpf_backstops_missing_upstream_cpf(cpf in "[0-9]{11}") {
        let record = NormalizedRecord::from_upstream(&serde_json::json!({}), &cpf);
        prop_assert_eq!(record.cpf, cpf);
    }
}
