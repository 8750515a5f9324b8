use serde::{Deserialize, Serialize};

use crate::model::validation::Invalid;

/// The registration form, exactly as submitted.
#[derive(Debug, Clone, FromForm)]
pub struct Registration {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    pub agree_to_terms: bool,
}

impl Registration {
    /// Check required fields, then the password confirmation, then the terms box.
    pub fn validate(&self) -> Result<(), Invalid> {
        let required = [
            ("first name", &self.first_name),
            ("last name", &self.last_name),
            ("email", &self.email),
            ("password", &self.password),
        ];
        if let Some((field, _)) = required.iter().find(|(_, value)| value.trim().is_empty()) {
            return Err(Invalid::MissingField(*field));
        }
        if self.password != self.confirm_password {
            return Err(Invalid::PasswordMismatch);
        }
        if !self.agree_to_terms {
            return Err(Invalid::TermsNotAccepted);
        }
        Ok(())
    }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name.trim(), self.last_name.trim())
    }
}

/// Body of `POST /api/users/register`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub password: String,
}

impl NewUser {
    pub fn is_complete(&self) -> bool {
        [&self.name, &self.email, &self.password]
            .iter()
            .all(|field| !field.trim().is_empty())
    }
}
