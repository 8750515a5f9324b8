//! Command-line companion to the E-Ballot server.
//!
//! Generates secrets for `Rocket.toml` and talks to the backend API.

use clap::{value_parser, Arg, ArgAction, ArgMatches, Command};
use data_encoding::HEXLOWER;
use rand::RngCore;

use eballot::{
    client::{ApiClient, DEFAULT_API_URL},
    model::auth::{Credentials, NewUser},
};

const PROGRAM_NAME: &str = "eballot-cli";

const ABOUT_TEXT: &str = "Utilities for the E-Ballot server.

EXIT CODES:
     0: Success.
     1: The API request failed.
     2: Bad usage.";

const API_URL: &str = "API_URL";
const BYTES: &str = "BYTES";
const EMAIL: &str = "EMAIL";
const PASSWORD: &str = "PASSWORD";
const NAME: &str = "NAME";
const TOKEN: &str = "TOKEN";

/// Bytes of randomness in a generated secret.
const DEFAULT_SECRET_BYTES: usize = 64;

/// Construct the CLI configuration.
fn cli() -> Command {
    // Make the build dirty when the toml changes.
    include_str!("../Cargo.toml");

    let email = Arg::new(EMAIL).long("email").action(ArgAction::Set).required(true);
    let password = Arg::new(PASSWORD)
        .long("password")
        .action(ArgAction::Set)
        .required(true);

    clap::command!(PROGRAM_NAME)
        .about(ABOUT_TEXT)
        .subcommand_required(true)
        .arg(
            Arg::new(API_URL)
                .long("api-url")
                .help("Base URL of the backend API")
                .default_value(DEFAULT_API_URL)
                .global(true)
                .action(ArgAction::Set),
        )
        .subcommand(
            Command::new("secret")
                .about("Print a random hex secret, e.g. for `jwt_secret` or `secret_key`")
                .arg(
                    Arg::new(BYTES)
                        .long("bytes")
                        .help("Number of random bytes")
                        .value_parser(value_parser!(usize))
                        .default_value("64")
                        .action(ArgAction::Set),
                ),
        )
        .subcommand(
            Command::new("login")
                .about("Log in and print the issued token")
                .arg(email.clone())
                .arg(password.clone()),
        )
        .subcommand(
            Command::new("register")
                .about("Register and print the issued token")
                .arg(
                    Arg::new(NAME)
                        .long("name")
                        .action(ArgAction::Set)
                        .required(true),
                )
                .arg(email)
                .arg(password),
        )
        .subcommand(
            Command::new("whoami")
                .about("Show who a token belongs to")
                .arg(
                    Arg::new(TOKEN)
                        .long("token")
                        .action(ArgAction::Set)
                        .required(true),
                ),
        )
}

/// `bytes` random bytes as lowercase hex.
fn secret(bytes: usize) -> String {
    let mut buf = vec![0_u8; bytes];
    rand::thread_rng().fill_bytes(&mut buf);
    HEXLOWER.encode(&buf)
}

fn arg(args: &ArgMatches, id: &str) -> String {
    args.get_one::<String>(id).cloned().unwrap_or_default()
}

/// Run the chosen subcommand, returning the exit code.
async fn run(args: &ArgMatches) -> u8 {
    let client = ApiClient::new(arg(args, API_URL));

    let result = match args.subcommand() {
        Some(("secret", sub)) => {
            let bytes = sub
                .get_one::<usize>(BYTES)
                .copied()
                .unwrap_or(DEFAULT_SECRET_BYTES);
            Ok(secret(bytes))
        }
        Some(("login", sub)) => {
            let credentials = Credentials {
                email: arg(sub, EMAIL),
                password: arg(sub, PASSWORD),
            };
            client.login(&credentials).await
        }
        Some(("register", sub)) => {
            let user = NewUser {
                name: arg(sub, NAME),
                email: arg(sub, EMAIL),
                password: arg(sub, PASSWORD),
            };
            client.register(&user).await
        }
        Some(("whoami", sub)) => client
            .with_token(arg(sub, TOKEN))
            .current_user()
            .await
            .map(|user| format!("{} <{}> ({})", user.name, user.email, user.role)),
        _ => return 2,
    };

    match result {
        Ok(output) => {
            println!("{output}");
            0
        }
        Err(err) => {
            eprintln!("{err}");
            1
        }
    }
}

#[rocket::main]
async fn main() {
    let args = cli().get_matches();
    let exit_code = run(&args).await;
    std::process::exit(exit_code.into())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn secrets_are_hex() {
        let first = secret(DEFAULT_SECRET_BYTES);
        assert_eq!(first.len(), 128);
        assert!(first.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
        assert_ne!(first, secret(DEFAULT_SECRET_BYTES));
        assert_eq!(secret(4).len(), 8);
    }

    #[test]
    fn correct_cli_usage() {
        let command_line = [PROGRAM_NAME, "secret"];
        let args = cli().try_get_matches_from(command_line).unwrap();
        let (name, sub) = args.subcommand().unwrap();
        assert_eq!(name, "secret");
        assert_eq!(sub.get_one::<usize>(BYTES), Some(&64));
        assert_eq!(arg(&args, API_URL), DEFAULT_API_URL);

        let command_line = [
            PROGRAM_NAME,
            "--api-url",
            "http://example.com/api",
            "login",
            "--email",
            "voter@example.com",
            "--password",
            "password",
        ];
        let args = cli().try_get_matches_from(command_line).unwrap();
        assert_eq!(arg(&args, API_URL), "http://example.com/api");
        let (_, sub) = args.subcommand().unwrap();
        assert_eq!(arg(sub, EMAIL), "voter@example.com");

        let command_line = [PROGRAM_NAME, "secret", "--bytes", "16"];
        let args = cli().try_get_matches_from(command_line).unwrap();
        let runtime = rocket::tokio::runtime::Runtime::new().unwrap();
        assert_eq!(runtime.block_on(run(&args)), 0);
    }

    #[test]
    fn bad_cli_usage() {
        // No subcommand.
        let command_line = [PROGRAM_NAME];
        cli().try_get_matches_from(command_line).unwrap_err();

        // Missing password.
        let command_line = [PROGRAM_NAME, "login", "--email", "voter@example.com"];
        cli().try_get_matches_from(command_line).unwrap_err();

        // Not a number.
        let command_line = [PROGRAM_NAME, "secret", "--bytes", "many"];
        cli().try_get_matches_from(command_line).unwrap_err();
    }
}
