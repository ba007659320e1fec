use crate::api::ApiError;

pub fn validate_registration(name: &str, email: &str, password: &str) -> Result<(), ApiError> {
    if name.trim().is_empty() || email.trim().is_empty() || password.is_empty() {
        return Err(ApiError::validation("Todos los campos son obligatorios"));
    }
    if !email.contains('@') {
        return Err(ApiError::validation("El email no es válido"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_field_is_required() {
        assert!(validate_registration("", "ana@x.com", "secret").is_err());
        assert!(validate_registration("Ana", " ", "secret").is_err());
        assert!(validate_registration("Ana", "ana@x.com", "").is_err());
    }

    #[test]
    fn email_needs_at_sign() {
        let err = validate_registration("Ana", "ana.x.com", "secret").unwrap_err();
        assert_eq!(err.code, "VALIDATION_ERROR");
        assert!(validate_registration("Ana", "ana@x.com", "secret").is_ok());
    }
}
