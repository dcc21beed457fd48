use anyhow::Context as _;
use clap::{Parser, Subcommand};
use serde::Serialize;
use std::{
    env,
    io::{self, Write},
};
use tracing_subscriber::{filter::LevelFilter, EnvFilter};
use twilioctl::{
    api::{Client, ClientConfig, ConfigError},
    storage::CredentialStorage,
    types::Call,
};

#[derive(Parser)]
#[command(name = "twilioctl", version, about = "Place and control phone calls via Twilio")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Store account credentials within the system keyring.
    Login,
    /// Place an outbound call.
    Call {
        /// The number (or SIP URI) to call.
        #[arg(long)]
        to: String,
        /// A number owned by the account to call from.
        #[arg(long)]
        from: String,
        /// URL of the TwiML document to run once answered.
        #[arg(long, required_unless_present = "twiml", conflicts_with = "twiml")]
        url: Option<String>,
        /// Inline TwiML to run once answered.
        #[arg(long)]
        twiml: Option<String>,
        /// Seconds to let the call ring.
        #[arg(long)]
        timeout: Option<u32>,
        /// Record the call.
        #[arg(long)]
        record: bool,
    },
    /// Show the current state of a call.
    Show { call_sid: String },
    /// Hang up a call.
    Hangup { call_sid: String },
    /// Mute (or with --off, unmute) a conference participant.
    Mute {
        conference_sid: String,
        call_sid: String,
        #[arg(long)]
        off: bool,
    },
    /// Show the current state of a conference.
    Conference { conference_sid: String },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(log_filter(
            &env::var(EnvFilter::DEFAULT_ENV).unwrap_or_default(),
        ))
        .with_writer(io::stderr)
        .init();

    match Cli::parse().command {
        Command::Login => login(),
        Command::Call {
            to,
            from,
            url,
            twiml,
            timeout,
            record,
        } => {
            let call = Call {
                url,
                twiml,
                timeout,
                record: record.then_some(true),
                ..Call::new(to, from)
            };
            print_json(&connect()?.place_call(&call).await?)
        }
        Command::Show { call_sid } => print_json(&connect()?.call_resource(&call_sid).await?),
        Command::Hangup { call_sid } => Ok(connect()?.disconnect_call(&call_sid).await?),
        Command::Mute {
            conference_sid,
            call_sid,
            off,
        } => Ok(connect()?.set_mute(&conference_sid, &call_sid, !off).await?),
        Command::Conference { conference_sid } => {
            print_json(&connect()?.conference(&conference_sid).await?)
        }
    }
}

/// `info` unless `RUST_LOG` says otherwise. Directives that fail to parse are skipped.
fn log_filter(directives: &str) -> EnvFilter {
    EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .parse_lossy(directives)
}

fn connect() -> anyhow::Result<Client> {
    Ok(Client::from_config(reqwest::Client::new(), load_config()?))
}

/// Credentials come from the environment first, then from the keyring.
fn load_config() -> anyhow::Result<ClientConfig> {
    match ClientConfig::from_env() {
        Ok(config) => Ok(config),
        Err(ConfigError::Missing(_)) => {
            let storage = CredentialStorage::load()?.context(
                "no credentials found: set TWILIO_ACCOUNT_SID and TWILIO_AUTH_TOKEN, or run `twilioctl login`",
            )?;
            Ok(ClientConfig::new(storage.account_sid, storage.auth_token)?)
        }
        Err(err) => Err(err.into()),
    }
}

fn login() -> anyhow::Result<()> {
    let storage = CredentialStorage {
        account_sid: interactive_prompt("your account SID")?,
        auth_token: interactive_prompt("your auth token")?,
    };

    // Reject obviously empty input before it lands in the keyring.
    ClientConfig::new(storage.account_sid.as_str(), storage.auth_token.as_str())?;
    storage.save()?;

    tracing::info!(account_sid = %storage.account_sid, "Stored credentials");
    Ok(())
}

/// Quick and dirty function to read a line from the user.
fn interactive_prompt(prompt_type: &str) -> io::Result<String> {
    let mut response = String::new();
    print!("Please enter {prompt_type}: ");
    io::stdout().flush()?;
    io::stdin().read_line(&mut response)?;

    Ok(response.trim_end().to_string())
}

fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
