use anyhow::Context;

use stockbook_app::AppConfig;
use stockbook_app::scenarios;

fn main() -> anyhow::Result<()> {
    let config = AppConfig::from_env().context("loading configuration")?;
    stockbook_observability::init(&config.logging);

    let report = scenarios::run_all(&config).context("running scenarios")?;

    tracing::info!(
        checkout = ?report.ecommerce.checkout,
        rejected = report.ecommerce.rejected,
        "e-commerce scenario finished"
    );
    tracing::info!(
        revenues = ?report.delivery.revenues,
        cart_total = %report.delivery.cart_total,
        fulfilment = ?report.delivery.fulfilment,
        rejected = report.delivery.rejected,
        "food delivery scenario finished"
    );
    tracing::info!(
        books = report.library.listing.len(),
        rejected = report.library.rejected,
        available = report.library.available_after_return,
        "library scenario finished"
    );

    Ok(())
}
