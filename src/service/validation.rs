//! Admin request validation.

use crate::error::AppError;
use crate::model::{
    CharacterChanges, FavoriteTarget, NewCharacter, NewFavorite, NewPlanet, NewUser, PlanetChanges,
    UserChanges,
};
use regex::Regex;
use std::sync::OnceLock;

const NAME_MAX: usize = 250;
const EMAIL_MAX: usize = 120;
const PASSWORD_MAX: usize = 80;

fn email_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").expect("static email pattern"))
}

pub struct RequestValidator;

impl RequestValidator {
    pub fn new_user(body: &NewUser) -> Result<(), AppError> {
        validate_email(&body.email)?;
        validate_length("password", &body.password, 1, PASSWORD_MAX)
    }

    /// Only the fields present are checked.
    pub fn user_changes(body: &UserChanges) -> Result<(), AppError> {
        if let Some(email) = &body.email {
            validate_email(email)?;
        }
        if let Some(password) = &body.password {
            validate_length("password", password, 1, PASSWORD_MAX)?;
        }
        Ok(())
    }

    pub fn new_character(body: &NewCharacter) -> Result<(), AppError> {
        validate_length("name", body.name.trim(), 1, NAME_MAX)
    }

    pub fn character_changes(body: &CharacterChanges) -> Result<(), AppError> {
        match &body.name {
            Some(name) => validate_length("name", name.trim(), 1, NAME_MAX),
            None => Ok(()),
        }
    }

    pub fn new_planet(body: &NewPlanet) -> Result<(), AppError> {
        validate_length("name", body.name.trim(), 1, NAME_MAX)
    }

    pub fn planet_changes(body: &PlanetChanges) -> Result<(), AppError> {
        match &body.name {
            Some(name) => validate_length("name", name.trim(), 1, NAME_MAX),
            None => Ok(()),
        }
    }

    /// A favorite must point at exactly one of a planet or a character.
    pub fn new_favorite(body: &NewFavorite) -> Result<FavoriteTarget, AppError> {
        body.target().ok_or_else(|| {
            AppError::Validation("exactly one of planet_id or character_id must be set".into())
        })
    }
}

fn validate_email(email: &str) -> Result<(), AppError> {
    let email = email.trim();
    validate_length("email", email, 1, EMAIL_MAX)?;
    if !email_re().is_match(email) {
        return Err(AppError::Validation("email is not a valid address".into()));
    }
    Ok(())
}

fn validate_length(col: &str, s: &str, min: usize, max: usize) -> Result<(), AppError> {
    let len = s.chars().count();
    if len < min {
        return Err(AppError::Validation(if min == 1 {
            format!("{} is required", col)
        } else {
            format!("{} must be at least {} characters", col, min)
        }));
    }
    if len > max {
        return Err(AppError::Validation(format!("{} must be at most {} characters", col, max)));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(email: &str, password: &str) -> NewUser {
        NewUser {
            email: email.into(),
            password: password.into(),
            is_active: true,
        }
    }

    #[test]
    fn accepts_plain_addresses() {
        assert!(RequestValidator::new_user(&user("han@falcon.io", "kessel")).is_ok());
    }

    #[test]
    fn rejects_bad_email_and_empty_password() {
        let err = RequestValidator::new_user(&user("han-at-falcon", "kessel")).unwrap_err();
        assert_eq!(err.to_string(), "email is not a valid address");
        let err = RequestValidator::new_user(&user("han@falcon.io", "")).unwrap_err();
        assert_eq!(err.to_string(), "password is required");
    }

    #[test]
    fn partial_changes_only_check_present_fields() {
        assert!(RequestValidator::user_changes(&UserChanges::default()).is_ok());
        let too_long = PlanetChanges {
            name: Some("x".repeat(NAME_MAX + 1)),
            ..Default::default()
        };
        assert!(matches!(
            RequestValidator::planet_changes(&too_long),
            Err(AppError::Validation(_))
        ));
    }

    #[test]
    fn blank_names_are_rejected() {
        let c = NewCharacter {
            name: "   ".into(),
            gender: None,
            birth_year: None,
            height: None,
            eye_color: None,
            hair_color: None,
        };
        assert!(RequestValidator::new_character(&c).is_err());
    }
}
