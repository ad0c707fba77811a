use std::sync::Arc;

use clap::{Args, Subcommand};
use techmart::{CartLineId, Quantity, pricing};
use techmart_app::{
    cart::{CartController, CartEvent, CartOutcome, NoticeLevel},
    context::AppContext,
    payments::{CheckoutRedirect, PaymentError, Redirector},
};
use tokio::sync::mpsc::UnboundedReceiver;

#[derive(Debug, Args)]
pub(crate) struct CartCommand {
    #[command(subcommand)]
    command: CartSubcommand,
}

#[derive(Debug, Subcommand)]
enum CartSubcommand {
    /// Show cart lines and totals
    Show,

    /// Add one unit to a line
    Increase(LineArgs),

    /// Remove one unit from a line, deleting it at one unit
    Decrease(LineArgs),

    /// Delete a line
    Remove(LineArgs),

    /// Start hosted checkout for the whole cart
    Checkout,
}

#[derive(Debug, Args)]
struct LineArgs {
    /// Cart line id
    line_id: String,
}

/// Prints the hosted checkout URL for the shopper to open.
#[derive(Debug)]
struct PrintRedirector;

impl Redirector for PrintRedirector {
    fn redirect(&self, target: CheckoutRedirect) -> Result<(), PaymentError> {
        println!("continue to checkout: {}", target.url);

        Ok(())
    }
}

pub(crate) async fn run(command: CartCommand, context: &AppContext) -> Result<(), String> {
    let (mut controller, mut events) = context.cart_controller(Arc::new(PrintRedirector));

    let loaded = controller.load().await;

    let outcome = match command.command {
        CartSubcommand::Show => {
            ensure_loaded(&loaded)?;

            loaded
        }
        CartSubcommand::Increase(args) => {
            ensure_loaded(&loaded)?;

            let (line, quantity) = current_quantity(&controller, args)?;

            controller.increase(&line, quantity).await
        }
        CartSubcommand::Decrease(args) => {
            ensure_loaded(&loaded)?;

            let (line, quantity) = current_quantity(&controller, args)?;

            controller.decrease(&line, quantity).await
        }
        // Deleting only needs the id, so it also works on a cart that cannot be read.
        CartSubcommand::Remove(args) => {
            controller.remove(&CartLineId::new(args.line_id)).await
        }
        CartSubcommand::Checkout => {
            ensure_loaded(&loaded)?;

            if controller.lines().is_empty() {
                return Err("cart is empty".to_string());
            }

            controller.checkout().await
        }
    };

    print_events(&mut events);
    print_cart(&controller)?;

    match outcome {
        CartOutcome::Skipped => Err("the storefront did not accept the request".to_string()),
        CartOutcome::Stale => Err("the cart changed but could not be re-read".to_string()),
        _ => Ok(()),
    }
}

fn ensure_loaded(loaded: &CartOutcome) -> Result<(), String> {
    if *loaded == CartOutcome::Skipped {
        return Err("failed to load cart".to_string());
    }

    Ok(())
}

fn current_quantity(
    controller: &CartController,
    args: LineArgs,
) -> Result<(CartLineId, Quantity), String> {
    let line = CartLineId::new(args.line_id);

    let quantity = controller
        .lines()
        .line(&line)
        .map(|found| found.quantity)
        .ok_or_else(|| format!("no cart line with id {line}"))?;

    Ok((line, quantity))
}

fn print_events(events: &mut UnboundedReceiver<CartEvent>) {
    while let Ok(event) = events.try_recv() {
        match event {
            CartEvent::Notice(notice) => {
                let marker = match notice.level {
                    NoticeLevel::Success => "✔",
                    NoticeLevel::Error => "❗",
                };

                println!("{marker} {}", notice.message);
            }
            CartEvent::CartChanged => {}
        }
    }
}

fn print_cart(controller: &CartController) -> Result<(), String> {
    for unreadable in controller.lines().unreadable() {
        let id = unreadable.id.as_ref().map_or("<no id>", CartLineId::as_str);

        println!("{id}  unreadable line: {}", unreadable.reason);
    }

    if controller.lines().is_empty() {
        println!("No Data");

        return Ok(());
    }

    for line in controller.lines() {
        let unit = line
            .product
            .unit_price()
            .map_err(|error| format!("invalid price for {}: {error}", line.id))?;
        let total = line
            .total()
            .map_err(|error| format!("invalid price for {}: {error}", line.id))?;

        println!(
            "{}  {}  [{}]  {} × {} = {}",
            line.id,
            line.product.product_name,
            line.product.category,
            line.quantity,
            pricing::format_inr(&unit),
            pricing::format_inr(&total),
        );
    }

    let total_price = controller
        .total_price()
        .map_err(|error| format!("failed to total cart: {error}"))?;

    println!("Total Quantity  {}", controller.total_quantity());
    println!("Grand Total     {}", pricing::format_inr(&total_price));

    Ok(())
}
