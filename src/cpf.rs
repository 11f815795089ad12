use crate::errors::AppError;
use regex::Regex;

/// Strip formatting and validate the shape of a CPF value.
///
/// Accepts anything that reduces to exactly 11 decimal digits once
/// punctuation is removed, so `"000.000.000-00"` and `"00000000000"` are
/// equivalent inputs. Check digits are not verified; the upstream service
/// is the authority on whether the document exists.
///
/// Returns the digit-only string, or the validation failure: empty input
/// is reported as missing, anything else that does not reduce to 11
/// digits as invalid.
pub fn normalize_cpf(raw: &str) -> Result<String, AppError> {
    if raw.trim().is_empty() {
        return Err(AppError::MissingCpf);
    }

    let digits: String = raw.chars().filter(|c| c.is_ascii_digit()).collect();

    let shape = Regex::new(r"^\d{11}$").unwrap();
    if !shape.is_match(&digits) {
        return Err(AppError::InvalidCpf {
            digits: digits.len(),
        });
    }

    Ok(digits)
}
