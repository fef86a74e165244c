//! Join the waitlist from the command line.
//!
//! Drives the same [`SignupForm`] a page would: fields are applied as edits,
//! validated locally, submitted once, and the resulting status is logged.
//!
//! ```text
//! join-waitlist --endpoint https://gtmos.dev --first-name Ada \
//!     --last-name Lovelace --email ada@example.com
//! ```

use std::time::Duration;

use clap::Parser;
use color_eyre::eyre::{Context, Result, bail};
use reqwest::Url;
use tracing::{error, info, warn};
use tracing_subscriber::{EnvFilter, fmt};
use waitlist_contract::Field;
use waitlist_form::{FormRejection, HttpWaitlistTransport, SignupForm, SubmitStatus};

#[derive(Debug, Parser)]
#[command(name = "join-waitlist", about = "Add a contact to the GTM OS waitlist")]
struct Cli {
    /// Site root serving `/api/waitlist`.
    #[arg(long, env = "WAITLIST_ENDPOINT", default_value = "http://127.0.0.1:8080/")]
    endpoint: Url,
    /// Contact email address.
    #[arg(long)]
    email: String,
    /// Given name.
    #[arg(long)]
    first_name: String,
    /// Family name.
    #[arg(long)]
    last_name: String,
    /// Request timeout in seconds.
    #[arg(long, default_value_t = 10)]
    timeout_secs: u64,
}

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let cli = Cli::parse();
    let transport = HttpWaitlistTransport::new(&cli.endpoint, Duration::from_secs(cli.timeout_secs))
        .wrap_err("failed to prepare waitlist transport")?;

    let mut form = SignupForm::new();
    for (field, value) in [
        (Field::FirstName, cli.first_name),
        (Field::LastName, cli.last_name),
        (Field::Email, cli.email),
    ] {
        form.set_field(field, value)?;
    }

    info!(endpoint = %transport.endpoint(), label = form.submit_label(), "submitting");
    match form.submit(&transport).await {
        Ok(SubmitStatus::Success) => {
            info!(detail = form.message(), "joined the waitlist");
            Ok(())
        }
        Ok(status) => {
            error!(?status, detail = form.message(), "waitlist signup failed");
            bail!("{}", form.message())
        }
        Err(FormRejection::Invalid(errors)) => {
            for (field, reason) in errors.iter() {
                error!(%field, reason, "invalid field");
            }
            bail!("{} field(s) need attention", errors.len())
        }
        Err(rejection) => Err(rejection.into()),
    }
}
