use clap::{Args, Subcommand};
use techmart::{Product, pricing};
use techmart_app::context::AppContext;

#[derive(Debug, Args)]
pub(crate) struct CatalogCommand {
    #[command(subcommand)]
    command: CatalogSubcommand,
}

#[derive(Debug, Subcommand)]
enum CatalogSubcommand {
    /// Show every home page rail
    Home,

    /// List products in one category
    Category(CategoryArgs),
}

#[derive(Debug, Args)]
struct CategoryArgs {
    /// Category slug, e.g. `mobiles`
    name: String,
}

pub(crate) async fn run(command: CatalogCommand, context: &AppContext) -> Result<(), String> {
    match command.command {
        CatalogSubcommand::Home => {
            for (rail, products) in context.catalog.home().await {
                println!("== {}", rail.heading);

                print_products(&products)?;
            }
        }
        CatalogSubcommand::Category(args) => {
            let products = context.catalog.category_products(&args.name).await;

            print_products(&products)?;
        }
    }

    Ok(())
}

fn print_products(products: &[Product]) -> Result<(), String> {
    if products.is_empty() {
        println!("No Data");
    }

    for product in products {
        let price = product
            .unit_price()
            .map_err(|error| format!("invalid price for {}: {error}", product.id))?;

        println!(
            "{}  {}  {}",
            product.id,
            product.product_name,
            pricing::format_inr(&price)
        );
    }

    Ok(())
}
