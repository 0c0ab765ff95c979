//! Main entry point for the NEAR light client CLI

#![deny(warnings, missing_docs, trivial_casts, unused_qualifications)]
#![forbid(unsafe_code)]

use near_light_client_cli::application::APP;

/// Boot the NEAR light client CLI
fn main() {
    abscissa_core::boot(&APP);
}
