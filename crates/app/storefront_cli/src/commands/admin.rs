use storefront_client::{Client, ImageUpload};
use storefront_core::format::Page;
use storefront_core::models::{ProductRequest, UserProfile};

use super::joined;
use crate::cli::{AdminCommand, ProductArgs};
use crate::{Error, Result};

pub async fn run(client: &Client, command: AdminCommand) -> Result<()> {
    if !client.session().is_admin() {
        log::warn!(
            "refusing admin command; token roles: {}",
            joined(client.session().roles())
        );
        return Err(Error::NotAdmin);
    }

    let admin = client.admin();
    match command {
        AdminCommand::Users(page) => {
            for user in admin.users(page.or(Page::ADMIN)).await? {
                println!("{}", user_line(&user));
            }
        }
        AdminCommand::User { id } => println!("{}", user_line(&admin.user(id).await?)),
        AdminCommand::DeleteUser { id } => println!("{}", admin.delete_user(id).await?.text()),
        AdminCommand::AddProduct(args) => {
            let (request, image) = product_payload(args)?;
            println!("{}", admin.create_product(&request, image).await?.text());
        }
        AdminCommand::UpdateProduct { id, product } => {
            let (request, image) = product_payload(product)?;
            println!("{}", admin.update_product(id, &request, image).await?.text());
        }
        AdminCommand::DeleteProduct { id } => {
            println!("{}", admin.delete_product(id).await?.text())
        }
        AdminCommand::Interactions { product_id } => {
            let stats = client.interactions().for_product(product_id).await;
            println!("product #{product_id}: {} interactions", stats.count);
        }
    }
    Ok(())
}

fn product_payload(args: ProductArgs) -> Result<(ProductRequest, Option<ImageUpload>)> {
    let image = match &args.image {
        Some(path) => Some(ImageUpload::from_path(path)?),
        None => None,
    };
    let request = ProductRequest {
        product_name: args.name,
        price: args.price,
        quantity: args.quantity,
        category: args.category,
        description: args.description,
    };
    Ok((request, image))
}

fn user_line(user: &UserProfile) -> String {
    format!(
        "#{} {}  [{}]  {}",
        user.id,
        user.email,
        joined(&user.roles),
        user.address.as_deref().unwrap_or("-")
    )
}
