/// powgate - Proof-of-Work License Gate
///
/// This binary gates application startup behind a license check:
/// 1. Resolve the POW credential and PRIVATE_KEY from env / .env / config file
/// 2. Recompute the key from the credential and compare digests
/// 3. Decode the project identifier and look it up in the fetched allow list
/// 4. Exit 0 when the license is valid, 1 otherwise

// Module declarations
mod config;
mod error;
mod verification;

use std::process::exit;

use config::load_config;
use error::VerifyError;
use verification::{Verifier, current_username};

fn main() {
    let list_url = match std::env::args().nth(1) {
        Some(url) => url,
        None => {
            eprintln!("Usage: powgate <POW_LIST_URL>");
            eprintln!("Example: powgate https://example.com/pow_list.txt");
            exit(1);
        }
    };

    let username = match current_username() {
        Ok(name) => name,
        Err(e) => {
            eprintln!("❌ {}", e);
            exit(1);
        }
    };

    let config = match load_config() {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("❌ Failed to load configuration: {}", e);
            exit(1);
        }
    };

    eprintln!("🔍 Verifying license (user '{}')...", username);

    let verdict = Verifier::new(config, &username).verify(&list_url);

    if !verdict.valid {
        eprintln!("❌ {}", verdict.message);
        if let Some(VerifyError::MissingConfig(_)) = verdict.error {
            print_env_hint();
        }
        exit(1);
    }

    eprintln!("✅ {}", verdict.message);
    println!("License verified. Application can proceed.");
}

/// Show the operator what a minimal .env file looks like
fn print_env_hint() {
    eprintln!();
    eprintln!("Create a .env file next to the binary with:");
    eprintln!("  POW=\"YOUR_BASE64_ENCODED_PROOF_OF_WORK\"");
    eprintln!("  PRIVATE_KEY=\"YOUR_PRIVATE_KEY\"");
}
