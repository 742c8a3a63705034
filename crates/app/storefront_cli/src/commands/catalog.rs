use storefront_client::Client;
use storefront_core::format::{Page, format_rating, format_vnd, product_line, stock_label};
use storefront_core::models::{Product, Review};

use crate::Result;
use crate::cli::{ImageArgs, ProductsCommand};

pub async fn products(client: &Client, command: ProductsCommand) -> Result<()> {
    match command {
        ProductsCommand::List(page) => {
            print_products(&client.products().list(page.or(Page::CATALOG)).await?);
        }
        ProductsCommand::Search { name, page } => {
            let found = client.products().search(&name, page.or(Page::CATALOG)).await?;
            if found.is_empty() {
                println!("No products match {name:?}");
            }
            print_products(&found);
        }
        ProductsCommand::Show { id } => show(client, id).await?,
        ProductsCommand::Recommend { id: Some(id) } => {
            print_products(&client.products().recommendations(id).await);
        }
        ProductsCommand::Recommend { id: None } => {
            print_products(&client.interactions().my_recommendations().await);
        }
    }
    Ok(())
}

async fn show(client: &Client, id: i64) -> Result<()> {
    let product = client.products().get(id).await?;
    if client.session().is_authenticated() {
        let reply = client.interactions().record(id).await;
        log::debug!("interaction for product {id}: {}", reply.text());
    }

    println!("#{} {}", product.id, product.product_name);
    println!("price: {}", format_vnd(product.price));
    println!("{}", stock_label(product.quantity));
    if let Some(category) = &product.category {
        println!("category: {category}");
    }
    if let Some(rating) = format_rating(product.rating, product.rating_count) {
        println!("rating: {rating}");
    }

    let chain = client.images().display_chain(&product);
    println!("image: {}", chain.current());
    for fallback in chain.sources().iter().skip(1) {
        println!("  fallback: {fallback}");
    }

    if let Some(description) = &product.description {
        println!();
        println!("{description}");
    }

    let reviews = client.reviews().for_product(id).await?;
    if !reviews.is_empty() {
        println!();
        println!("reviews:");
        for review in &reviews {
            println!("  {}", review_line(review));
        }
    }
    Ok(())
}

/// Resolved locally; the server is never contacted.
pub fn image(client: &Client, args: ImageArgs) {
    let images = client.images();
    let fallback = args.fallback.as_deref().unwrap_or(images.placeholder());
    let url = match args.product {
        Some(id) => images.product_image_url(id, fallback),
        None => images.resolve(args.reference.as_deref(), fallback),
    };
    println!("{url}");
}

fn print_products(products: &[Product]) {
    for product in products {
        println!("{}", product_line(product));
    }
}

pub(super) fn review_line(review: &Review) -> String {
    let stars = review
        .rating
        .map(|r| "★".repeat(usize::from(r.min(5))))
        .unwrap_or_default();
    format!(
        "{stars} {}: {}",
        review.user_name.as_deref().unwrap_or("anonymous"),
        review.content.as_deref().unwrap_or("")
    )
}
