//! End-to-end walk through the storefront core: browse, filter, switch
//! currency, fill the cart, and run the simulated checkout.

use anyhow::Result;
use chrono::Utc;
use rust_decimal_macros::dec;
use uuid::Uuid;

use solezone_catalog::demo::demo_catalog;
use solezone_catalog::{CategoryFilter, SortMode};
use solezone_checkout::OrderNumber;
use solezone_core::ProductId;
use solezone_currency::Currency;
use solezone_session::StorefrontSession;

fn main() -> Result<()> {
    solezone_observability::init();

    let mut session = StorefrontSession::new(demo_catalog());
    tracing::info!(session = %session.id(), products = session.catalog().len(), "catalog loaded");

    // Browse: basketball shoes under $190, cheapest first.
    session.set_category(CategoryFilter::Only("Basketball".to_string()));
    session.set_sort(SortMode::PriceAsc);
    session.set_max_text("190");
    print_results(&session, "basketball under $190");

    // The same filter, viewed in lari: bounds rescale with the currency.
    session.set_currency(Currency::Gel);
    print_results(&session, "same filter, priced in GEL");

    // Shop: heart one shoe, bag another in two sizes.
    session.set_currency(Currency::Usd);
    session.reset_filters();
    session.toggle_wishlist(ProductId::new(4));
    session.add_to_cart(ProductId::new(1), dec!(42))?;
    session.add_to_cart(ProductId::new(1), dec!(42))?;
    session.add_to_cart(ProductId::new(12), dec!(44))?;
    println!(
        "cart: {} item(s), subtotal {}",
        session.cart().item_count(),
        session.format_price(session.cart().subtotal())
    );

    // Checkout: information -> shipping -> payment -> processing -> done.
    session.begin_checkout()?;
    session.advance_checkout()?;
    session.advance_checkout()?;
    if let Some(checkout) = session.checkout() {
        let totals = checkout.totals();
        println!(
            "order summary: subtotal {}, shipping {}, total {}",
            session.format_price(totals.subtotal),
            session.format_price(totals.shipping),
            session.format_price(totals.total)
        );
    }
    session.place_order()?;

    let order_number = OrderNumber((Uuid::now_v7().as_u128() % 100_000) as u32);
    session.complete_checkout(order_number, Utc::now())?;
    println!("order placed: {order_number}");

    Ok(())
}

fn print_results(session: &StorefrontSession, label: &str) {
    let products = session.products();
    println!("{label}: {} result(s)", products.len());
    for product in &products {
        println!(
            "  #{} {} {} at {}",
            product.id(),
            product.brand(),
            product.name(),
            session.format_price(product.price())
        );
    }
    let as_json = serde_json::to_string(&products).unwrap_or_default();
    tracing::debug!(%label, results = %as_json, "filter recomputed");
}
