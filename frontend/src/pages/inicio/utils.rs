use crate::{api::ApiError, utils::token::ADMIN_ROLE};

pub fn validate_credentials(email: &str, password: &str) -> Result<(), ApiError> {
    if email.trim().is_empty() {
        return Err(ApiError::validation("Ingresa tu email"));
    }
    if password.is_empty() {
        return Err(ApiError::validation("Ingresa tu contraseña"));
    }
    Ok(())
}

/// Where a fresh session lands.
pub fn login_destination(role: Option<&str>) -> &'static str {
    if role == Some(ADMIN_ROLE) {
        "/admin"
    } else {
        "/ventas"
    }
}
