use chrono::NaiveDate;
use serde::Serialize;

use crate::model::{
    auth::DEMO_ACCOUNTS,
    election::ElectionForm,
    notice::Notice,
};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Link {
    pub label: &'static str,
    pub href: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Feature {
    pub title: &'static str,
    pub text: &'static str,
}

/// The public landing page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LandingView {
    pub headline: &'static str,
    pub tagline: &'static str,
    pub features: Vec<Feature>,
    pub steps: Vec<Feature>,
    pub links: Vec<Link>,
}

impl Default for LandingView {
    fn default() -> Self {
        Self {
            headline: "Secure Digital Voting for Organizations",
            tagline: "Our e-ballot system provides a transparent, secure and efficient way to \
                      conduct elections and make collective decisions.",
            features: vec![
                Feature {
                    title: "Easy to Use",
                    text: "Intuitive interfaces make voting and creating ballots simple for all users.",
                },
                Feature {
                    title: "Secure",
                    text: "State-of-the-art security ensures the integrity of every vote cast.",
                },
                Feature {
                    title: "Transparent",
                    text: "Real-time results and comprehensive analytics for complete transparency.",
                },
            ],
            steps: vec![
                Feature {
                    title: "Create an Account",
                    text: "Register with your organization credentials to access the platform.",
                },
                Feature {
                    title: "Cast Your Vote",
                    text: "Securely vote on active ballots with just a few clicks.",
                },
                Feature {
                    title: "View Results",
                    text: "Access transparent, real-time results when voting concludes.",
                },
            ],
            links: vec![
                Link {
                    label: "Login",
                    href: "/login",
                },
                Link {
                    label: "Register",
                    href: "/register",
                },
            ],
        }
    }
}

/// Credentials advertised under the login form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DemoAccount {
    pub role: &'static str,
    pub email: &'static str,
    pub password: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LoginView {
    pub notice: Option<Notice>,
    pub demo_accounts: Vec<DemoAccount>,
    pub register_url: &'static str,
}

impl LoginView {
    pub fn new(notice: Option<Notice>) -> Self {
        Self {
            notice,
            demo_accounts: DEMO_ACCOUNTS
                .iter()
                .map(|(email, password, role)| DemoAccount {
                    role: role.as_str(),
                    email: *email,
                    password: *password,
                })
                .collect(),
            register_url: "/register",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RegisterView {
    pub notice: Option<Notice>,
    pub login_url: &'static str,
}

impl RegisterView {
    pub fn new(notice: Option<Notice>) -> Self {
        Self {
            notice,
            login_url: "/login",
        }
    }
}

/// The blank election creation form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CreateElectionView {
    pub notice: Option<Notice>,
    pub form: ElectionForm,
    pub cancel_url: &'static str,
}

impl CreateElectionView {
    pub fn new(today: NaiveDate, notice: Option<Notice>) -> Self {
        Self {
            notice,
            form: ElectionForm::blank(today),
            cancel_url: "/admin/dashboard",
        }
    }
}
