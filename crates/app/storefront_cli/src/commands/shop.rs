use storefront_client::Client;
use storefront_core::format::format_vnd;
use storefront_core::models::{Order, OrderSummary, Rating, ReviewRequest};

use super::catalog::review_line;
use crate::cli::{CartCommand, InvoicesCommand, OrdersCommand, PayCommand, ReviewsCommand};
use crate::{Error, Result};

pub async fn cart(client: &Client, command: CartCommand) -> Result<()> {
    let cart = client.cart();
    match command {
        CartCommand::List => {
            let items = cart.items().await?;
            if items.is_empty() {
                println!("Cart is empty");
                return Ok(());
            }
            for item in &items {
                println!(
                    "#{} {} x{}  {}",
                    item.product_id,
                    item.product_name,
                    item.quantity,
                    format_vnd(item.line_total())
                );
            }
            let total: f64 = items.iter().map(|i| i.line_total()).sum();
            println!("total: {}", format_vnd(total));
        }
        CartCommand::Set {
            product_id,
            quantity,
        } => println!("{}", cart.update_item(product_id, quantity).await?.text()),
        CartCommand::Remove { product_id } => {
            println!("{}", cart.remove_item(product_id).await?.text())
        }
    }
    Ok(())
}

pub async fn orders(client: &Client, command: OrdersCommand) -> Result<()> {
    let orders = client.orders();
    match command {
        OrdersCommand::List => {
            for summary in orders.mine().await? {
                println!("{}", summary_line(&summary));
            }
        }
        OrdersCommand::Show { id } => print_order(&orders.get(id).await?),
        OrdersCommand::Create { payment_method } => {
            let order = orders.create(payment_method).await?;
            log::info!("order placed with payment method {payment_method}");
            print_order(&order);
        }
        OrdersCommand::Delete { id } => println!("{}", orders.delete(id).await?.text()),
    }
    Ok(())
}

pub async fn invoices(client: &Client, command: InvoicesCommand) -> Result<()> {
    match command {
        InvoicesCommand::Create {
            order_id,
            payment_method,
        } => {
            let invoice = client.invoices().create(order_id, payment_method).await?;
            println!(
                "invoice #{} for order #{}: {}",
                invoice.id,
                invoice.order_id,
                format_vnd(invoice.total_amount)
            );
        }
        InvoicesCommand::Delete { id } => {
            if !client.invoices().delete(id).await? {
                return Err(Error::Custom(format!("invoice #{id} was not deleted")));
            }
            println!("invoice #{id} deleted");
        }
    }
    Ok(())
}

pub async fn pay(client: &Client, command: PayCommand) -> Result<()> {
    let payments = client.payments();
    match command {
        PayCommand::Url {
            order_id,
            total,
            info,
        } => {
            let info = info.unwrap_or_else(|| format!("Payment for order {order_id}"));
            println!("{}", payments.create_vnpay_url(total, &info, order_id).await?);
        }
        PayCommand::Return { query } => {
            println!("{}", payments.vnpay_return(&query).await?.summary());
        }
        PayCommand::AddMethod { name } => {
            println!("{}", payments.add_method(&name).await?.text());
        }
    }
    Ok(())
}

pub async fn reviews(client: &Client, command: ReviewsCommand) -> Result<()> {
    let reviews = client.reviews();
    match command {
        ReviewsCommand::List { product_id } => {
            for review in reviews.for_product(product_id).await? {
                println!("{}", review_line(&review));
            }
        }
        ReviewsCommand::Add {
            product_id,
            rating,
            content,
        } => {
            let rating = Rating::new(rating)
                .ok_or_else(|| Error::Custom(format!("rating must be 1 to 5, got {rating}")))?;
            let review = reviews
                .create(product_id, &ReviewRequest { rating, content })
                .await?;
            println!("{}", review_line(&review));
        }
        ReviewsCommand::Delete {
            product_id,
            review_id,
        } => {
            if !reviews.delete(product_id, review_id).await? {
                return Err(Error::Custom(format!("review #{review_id} was not deleted")));
            }
            println!("review #{review_id} deleted");
        }
    }
    Ok(())
}

fn summary_line(summary: &OrderSummary) -> String {
    let created = summary
        .create_at
        .as_ref()
        .map(ToString::to_string)
        .unwrap_or_else(|| "-".to_string());
    let mut line = format!(
        "#{} {created} {} {} ({} items)",
        summary.id,
        summary.status,
        format_vnd(summary.total_price),
        summary.total_items
    );
    if let Some(method) = &summary.payment_method_name {
        line.push_str(&format!(" via {method}"));
    }
    if let Some(url) = &summary.payment_url {
        line.push_str(&format!("\n    pay at {url}"));
    }
    line
}

fn print_order(order: &Order) {
    println!("status: {}", order.status);
    for item in &order.cart_items {
        println!(
            "  #{} {} x{}  {}",
            item.product_id,
            item.product_name,
            item.quantity,
            format_vnd(item.line_total())
        );
    }
    println!("total: {}", format_vnd(order.total_price));
    if let Some(address) = &order.address {
        println!("ship to: {address}");
    }
    if let Some(url) = &order.payment_url {
        println!("pay at: {url}");
    }
}
