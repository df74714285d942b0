//! Batch payment code example.
//!
//! Builds payment codes for several orders on separate threads. Each build is
//! independent, so no coordination is needed between them.
//!
//! Run with: `cargo run --example batch_payloads`

mod common;

use common::{DEFAULT_KEY, DEFAULT_MERCHANT_CITY, DEFAULT_MERCHANT_NAME, init_logging};
use pixcode::prelude::*;
use rust_decimal::Decimal;
use std::thread;
use tracing::{info, warn};

fn main() -> anyhow::Result<()> {
    init_logging();

    let orders: Vec<PaymentRequest> = (1..=8u32)
        .map(|n| {
            let amount = Amount::new(Decimal::new(i64::from(n) * 1_250, 3))?;
            Ok(PaymentRequest::new(
                DEFAULT_KEY,
                DEFAULT_MERCHANT_NAME,
                DEFAULT_MERCHANT_CITY,
                amount,
            )
            .with_description(format!("Pedido numero {n} da loja de testes"))
            .with_transaction_id(format!("PEDIDO{n:04}")))
        })
        .collect::<Result<_>>()?;

    let results = thread::scope(|scope| {
        let handles: Vec<_> = orders
            .iter()
            .map(|order| scope.spawn(move || build_payload(order)))
            .collect();
        handles
            .into_iter()
            .map(|handle| handle.join().map_err(|_| anyhow::anyhow!("worker panicked")))
            .collect::<anyhow::Result<Vec<_>>>()
    })?;

    for (order, result) in orders.iter().zip(results) {
        match result {
            Ok(payload) => {
                info!(txid = order.transaction_id(), "encoded");
                println!("{payload}");
            }
            Err(e) => warn!(txid = order.transaction_id(), "skipped: {e}"),
        }
    }

    Ok(())
}
