use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Row of `users`. The password is stored but never serialized.
#[derive(Clone, Debug, PartialEq, Serialize, ToSchema)]
pub struct User {
    pub id: i64,
    pub email: String,
    #[serde(skip)]
    pub password: String,
    pub is_active: bool,
}

#[derive(Clone, Debug, Deserialize)]
pub struct NewUser {
    pub email: String,
    pub password: String,
    #[serde(default = "default_active")]
    pub is_active: bool,
}

fn default_active() -> bool {
    true
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct UserChanges {
    pub email: Option<String>,
    pub password: Option<String>,
    pub is_active: Option<bool>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn password_is_not_serialized() {
        let user = User {
            id: 1,
            email: "luke@rebels.org".into(),
            password: "tatooine".into(),
            is_active: true,
        };
        assert_eq!(
            serde_json::to_value(&user).unwrap(),
            serde_json::json!({"id": 1, "email": "luke@rebels.org", "is_active": true})
        );
    }

    #[test]
    fn new_user_defaults_to_active() {
        let u: NewUser =
            serde_json::from_str(r#"{"email":"leia@rebels.org","password":"x"}"#).unwrap();
        assert!(u.is_active);
    }
}
