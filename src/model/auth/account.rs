use argon2::Config;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::Result;

use super::Role;

/// Email and password for each account the login page advertises.
pub const DEMO_ACCOUNTS: [(&str, &str, Role); 2] = [
    ("voter@example.com", "password", Role::Voter),
    ("admin@example.com", "password", Role::Admin),
];

/// Raw credentials, received from a user. These are never stored, since the
/// password is in plaintext.
#[derive(Clone, Deserialize, Serialize, FromForm)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

/// An account able to log in.
#[derive(Debug, PartialEq, Eq)]
pub struct Account {
    pub email: String,
    pub password_hash: String,
    pub role: Role,
}

impl Account {
    /// Create an account by hashing the given password.
    pub fn new(email: &str, password: &str, role: Role) -> Result<Self> {
        // 16 bytes is the recommended salt length for Argon2.
        let mut salt = [0_u8; 16];
        rand::thread_rng().fill(&mut salt);
        let password_hash = argon2::hash_encoded(password.as_bytes(), &salt, &Config::default())?;
        Ok(Self {
            email: email.to_string(),
            password_hash,
            role,
        })
    }

    /// Check whether the given password is correct.
    pub fn verify_password<T: AsRef<[u8]>>(&self, password: T) -> Result<bool> {
        Ok(argon2::verify_encoded(&self.password_hash, password.as_ref())?)
    }
}

/// Every account known to the server.
#[derive(Debug)]
pub struct Accounts(Vec<Account>);

impl Accounts {
    /// The two demo accounts.
    pub fn demo() -> Result<Self> {
        DEMO_ACCOUNTS
            .iter()
            .map(|(email, password, role)| Account::new(email, password, *role))
            .collect::<Result<Vec<_>>>()
            .map(Self)
    }

    /// The role of the account matching both email and password, if any.
    /// Email comparison is exact.
    pub fn authenticate(&self, credentials: &Credentials) -> Result<Option<Role>> {
        for account in self.0.iter().filter(|a| a.email == credentials.email) {
            if account.verify_password(&credentials.password)? {
                return Ok(Some(account.role));
            }
        }
        Ok(None)
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_demo_pairs_authenticate() {
        let accounts = Accounts::demo().unwrap();

        assert_eq!(
            accounts.authenticate(&Credentials::voter()).unwrap(),
            Some(Role::Voter)
        );
        assert_eq!(
            accounts.authenticate(&Credentials::admin()).unwrap(),
            Some(Role::Admin)
        );
        assert_eq!(accounts.authenticate(&Credentials::empty()).unwrap(), None);

        let wrong_password = Credentials {
            password: "Password".into(),
            ..Credentials::admin()
        };
        assert_eq!(accounts.authenticate(&wrong_password).unwrap(), None);

        let padded_email = Credentials {
            email: " voter@example.com".into(),
            ..Credentials::voter()
        };
        assert_eq!(accounts.authenticate(&padded_email).unwrap(), None);
    }

    #[test]
    fn hashes_are_salted() {
        let a = Account::new("a@example.com", "password", Role::Voter).unwrap();
        let b = Account::new("a@example.com", "password", Role::Voter).unwrap();
        assert_ne!(a.password_hash, b.password_hash);
        assert!(a.verify_password("password").unwrap());
        assert!(!a.verify_password("passwor").unwrap());
    }
}
