mod account;
mod registration;
mod role;
mod session;
mod token;

pub use account::{Account, Accounts, Credentials, DEMO_ACCOUNTS};
pub use registration::{NewUser, Registration};
pub use role::{Role, UnknownRole};
pub use session::{AdminSession, Session, IS_AUTHENTICATED_COOKIE, USER_ROLE_COOKIE};
pub use token::{AuthToken, CurrentUser, TokenResponse, AUTH_TOKEN_HEADER};
