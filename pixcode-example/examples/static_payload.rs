//! Static payment code example.
//!
//! Builds one payment code from `PIX_*` environment variables and prints it.
//!
//! Run with: `PIX_AMOUNT=25.90 cargo run --example static_payload`

mod common;

use common::{ExampleConfig, init_logging};
use pixcode::prelude::*;
use tracing::{error, info};

fn main() -> anyhow::Result<()> {
    init_logging();

    let config = ExampleConfig::from_env();
    info!(key = %config.key, amount = %config.amount, "building payment code");

    let request = config.request()?;
    let payload = match build_payload(&request) {
        Ok(payload) => payload,
        Err(e) => {
            error!("failed to build payment code: {e}");
            return Err(e.into());
        }
    };

    info!(valid = verify_checksum(&payload), "payment code ready");
    println!("{payload}");
    Ok(())
}
