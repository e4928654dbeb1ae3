//! Self-test CLI for the docvault encryption subsystem.
//!
//! Loads the key configuration, runs the envelope health check, and prints
//! the status report as JSON plus a human-readable pass/fail line. Exits
//! non-zero on a failed self-test.

use clap::Parser;
use docvault_envelope::{EnvelopeVault, KeyConfig, KeyProvisioner};
use std::sync::Arc;

#[derive(Parser, Debug)]
#[command(name = "docvault", version, about = "docvault encryption self-test and status")]
struct Args {
    /// Public key PEM with newlines escaped as \n
    #[arg(long, env = "DOCVAULT_PUBLIC_KEY", hide_env_values = true)]
    public_key: Option<String>,

    /// Private key PEM with newlines escaped as \n
    #[arg(long, env = "DOCVAULT_PRIVATE_KEY", hide_env_values = true)]
    private_key: Option<String>,

    /// Generate an ephemeral key pair when PEM configuration is missing
    #[arg(long, env = "DOCVAULT_ALLOW_EPHEMERAL_KEYS")]
    allow_ephemeral: bool,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();
    let config = KeyConfig {
        public_key_pem: args.public_key,
        private_key_pem: args.private_key,
        allow_ephemeral: args.allow_ephemeral,
    };

    let vault = EnvelopeVault::new(Arc::new(KeyProvisioner::new(config)));

    // Self-test first so the status report reflects the resolved pair.
    let passed = vault.verify_self_test();
    let status = vault.report_status();

    match serde_json::to_string_pretty(&status) {
        Ok(json) => println!("{json}"),
        Err(e) => eprintln!("status serialization failed: {e}"),
    }
    println!("self-test: {}", if passed { "PASS" } else { "FAIL" });

    if !passed {
        std::process::exit(1);
    }
}
