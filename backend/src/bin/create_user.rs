//! Create a single user from the command line.
//!
//! Wires the registration service to the in-memory repository and the
//! outbox confirmation scheduler. On success the created user is printed to
//! stdout as JSON; a rejected sign-up prints the domain error as JSON to
//! stderr and exits with status 1.
#![cfg_attr(not(any(test, doctest)), deny(clippy::unwrap_used))]
#![cfg_attr(not(any(test, doctest)), deny(clippy::expect_used))]

use std::ffi::OsString;
use std::io::{self, Write};
use std::process::ExitCode;
use std::sync::Arc;

use backend::UserServiceSettings;
use backend::domain::ports::UserRegistration;
use backend::domain::{SignUpForm, UserRegistrationService};
use backend::outbound::email::OutboxEmailConfirmationScheduler;
use backend::outbound::persistence::InMemoryUserRepository;
use clap::Parser;
use color_eyre::eyre::{Context, Result, eyre};
use ortho_config::OrthoConfig;
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt};

/// `create-user` command arguments.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "create-user",
    about = "Register a user and schedule their confirmation email",
    version
)]
struct CliArgs {
    /// Given name; must not be blank.
    #[arg(long = "first-name", value_name = "name")]
    first_name: String,
    /// Family name.
    #[arg(long = "last-name", value_name = "name", default_value = "")]
    last_name: String,
    /// Address the confirmation email is sent to.
    #[arg(long = "email", value_name = "address")]
    email: String,
    /// Password. Accepted but not yet stored.
    #[arg(long = "password", value_name = "password", default_value = "")]
    password: String,
    /// Password confirmation. Accepted but not yet compared.
    #[arg(long = "repeat-password", value_name = "password", default_value = "")]
    repeat_password: String,
}

fn main() -> Result<ExitCode> {
    color_eyre::install()?;
    let args = CliArgs::parse();
    let settings = UserServiceSettings::load_from_iter([OsString::from("create-user")])
        .wrap_err("failed to load user service settings")?;
    init_tracing(&settings)?;

    run(
        args,
        &settings,
        &mut io::stdout().lock(),
        &mut io::stderr().lock(),
    )
}

/// Register one user, writing the user to `out` or the domain error to `err`.
fn run(
    args: CliArgs,
    settings: &UserServiceSettings,
    out: &mut impl Write,
    err: &mut impl Write,
) -> Result<ExitCode> {
    let outbox = Arc::new(OutboxEmailConfirmationScheduler::new(
        settings.confirmation_sender(),
    ));
    let service =
        UserRegistrationService::new(Arc::new(InMemoryUserRepository::new()), Arc::clone(&outbox));

    let form = SignUpForm::new(
        args.first_name,
        args.last_name,
        args.email,
        args.password,
        args.repeat_password,
    );
    match service.register(&form) {
        Ok(user) => {
            let pending = outbox
                .pending()
                .wrap_err("failed to read confirmation outbox")?;
            info!(
                user_id = %user.id(),
                pending_confirmations = pending.len(),
                "user created"
            );
            let rendered =
                serde_json::to_string_pretty(&user).wrap_err("failed to render user")?;
            writeln!(out, "{rendered}").wrap_err("failed to write user")?;
            Ok(ExitCode::SUCCESS)
        }
        Err(failure) => {
            let rendered =
                serde_json::to_string_pretty(&failure).wrap_err("failed to render error")?;
            writeln!(err, "{rendered}").wrap_err("failed to write error")?;
            Ok(ExitCode::FAILURE)
        }
    }
}

fn init_tracing(settings: &UserServiceSettings) -> Result<()> {
    let filter = settings
        .log_filter()
        .map_or_else(EnvFilter::from_default_env, EnvFilter::new);
    let builder = fmt().with_env_filter(filter).with_writer(io::stderr);
    let installed = if settings.json_logs() {
        builder.json().try_init()
    } else {
        builder.try_init()
    };
    installed.map_err(|error| eyre!("failed to install tracing subscriber: {error}"))
}

#[cfg(test)]
mod tests {
    //! Tests for argument parsing and sign-up wiring.

    use clap::error::ErrorKind;
    use rstest::{fixture, rstest};
    use serde_json::{Value, json};

    use super::*;

    #[fixture]
    fn settings() -> UserServiceSettings {
        UserServiceSettings {
            json_logs: Some(false),
            log_filter: None,
            confirmation_sender: None,
        }
    }

    fn parse(args: &[&str]) -> CliArgs {
        CliArgs::try_parse_from(std::iter::once("create-user").chain(args.iter().copied()))
            .expect("arguments parse")
    }

    fn run_captured(args: CliArgs, settings: &UserServiceSettings) -> (ExitCode, String, String) {
        let mut out = Vec::new();
        let mut err = Vec::new();
        let code = run(args, settings, &mut out, &mut err).expect("run completes");
        (
            code,
            String::from_utf8(out).expect("utf-8 stdout"),
            String::from_utf8(err).expect("utf-8 stderr"),
        )
    }

    #[rstest]
    #[case(&["--first-name", "Bruno"])]
    #[case(&["--email", "email@email.com"])]
    fn first_name_and_email_are_required(#[case] args: &[&str]) {
        let error =
            CliArgs::try_parse_from(std::iter::once("create-user").chain(args.iter().copied()))
                .expect_err("missing required argument");
        assert_eq!(error.kind(), ErrorKind::MissingRequiredArgument);
    }

    #[rstest]
    fn repeated_tracing_install_is_an_error(settings: UserServiceSettings) {
        let _first = init_tracing(&settings);
        let error = init_tracing(&settings).expect_err("subscriber already installed");
        assert!(
            error
                .to_string()
                .contains("failed to install tracing subscriber")
        );
    }

    #[rstest]
    fn optional_fields_default_to_empty() {
        let args = parse(&["--first-name", "Bruno", "--email", "email@email.com"]);
        assert_eq!(args.last_name, "");
        assert_eq!(args.password, "");
        assert_eq!(args.repeat_password, "");
    }

    #[rstest]
    fn prints_the_created_user(settings: UserServiceSettings) {
        let args = parse(&[
            "--first-name",
            "Bruno",
            "--last-name",
            "Affeldt",
            "--email",
            "email@email.com",
            "--password",
            "1234560",
            "--repeat-password",
            "1234560",
        ]);

        let (code, out, err) = run_captured(args, &settings);

        assert_eq!(code, ExitCode::SUCCESS);
        assert!(err.is_empty());
        let user: Value = serde_json::from_str(&out).expect("user json");
        assert_eq!(user["firstName"], "Bruno");
        assert_eq!(user["lastName"], "Affeldt");
        assert_eq!(user["email"], "email@email.com");
        assert!(user["id"].as_str().is_some_and(|id| !id.is_empty()));
    }

    #[rstest]
    fn blank_first_name_is_reported_as_json(settings: UserServiceSettings) {
        let args = parse(&["--first-name", " ", "--email", "email@email.com"]);

        let (code, out, err) = run_captured(args, &settings);

        assert_eq!(code, ExitCode::FAILURE);
        assert!(out.is_empty());
        let error: Value = serde_json::from_str(&err).expect("error json");
        assert_eq!(
            error,
            json!({ "code": "invalid_argument", "message": "User's first name is empty" })
        );
    }

    #[rstest]
    fn blank_email_fails_after_the_user_is_persisted(settings: UserServiceSettings) {
        let args = parse(&["--first-name", "Bruno", "--email", "  "]);

        let (code, out, err) = run_captured(args, &settings);

        assert_eq!(code, ExitCode::FAILURE);
        assert!(out.is_empty());
        let error: Value = serde_json::from_str(&err).expect("error json");
        assert_eq!(error["code"], "service_error");
        assert_eq!(error["message"], "user has no email address");
        assert_eq!(error["details"]["persisted"], true);
    }
}
