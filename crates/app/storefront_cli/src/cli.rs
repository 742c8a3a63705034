use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use storefront_core::format::Page;

/// Command-line storefront client.
#[derive(Parser, Debug)]
#[command(name = "storefront", version, about = "Browse and shop from the terminal")]
pub struct Cli {
    /// API root, including the `/api` prefix. Overrides `STOREFRONT_API_URL`.
    #[arg(long, global = true)]
    pub api_url: Option<String>,

    /// File holding the access and refresh tokens. Overrides `STOREFRONT_SESSION_FILE`.
    #[arg(long, global = true)]
    pub session_file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the version.
    Version,

    /// Log in and keep the tokens for later commands.
    Login(Credentials),

    /// End the session. Local tokens are forgotten even if the server fails.
    Logout,

    /// Show who the stored token belongs to, without calling the server.
    Whoami,

    /// Create an account.
    Register(Credentials),

    /// Show the profile, or update it when any field is given.
    Profile(ProfileArgs),

    /// Swap the refresh token for a new token pair.
    Refresh,

    /// Password recovery by one-time code.
    #[command(subcommand)]
    Password(PasswordCommand),

    #[command(subcommand)]
    Products(ProductsCommand),

    /// Resolve an image reference to the URL a browser would load.
    Image(ImageArgs),

    #[command(subcommand)]
    Cart(CartCommand),

    #[command(subcommand)]
    Orders(OrdersCommand),

    #[command(subcommand)]
    Invoices(InvoicesCommand),

    /// Payment gateway helpers.
    #[command(subcommand)]
    Pay(PayCommand),

    #[command(subcommand)]
    Reviews(ReviewsCommand),

    /// Administration. Refused locally unless the token carries an admin role.
    #[command(subcommand)]
    Admin(AdminCommand),
}

#[derive(Args, Debug)]
pub struct Credentials {
    #[arg(long)]
    pub email: String,

    #[arg(long, env = "STOREFRONT_PASSWORD", hide_env_values = true)]
    pub password: String,
}

#[derive(Args, Debug)]
pub struct ProfileArgs {
    #[arg(long)]
    pub email: Option<String>,

    #[arg(long)]
    pub address: Option<String>,

    #[arg(long)]
    pub password: Option<String>,
}

impl ProfileArgs {
    pub fn is_update(&self) -> bool {
        self.email.is_some() || self.address.is_some() || self.password.is_some()
    }
}

#[derive(Subcommand, Debug)]
pub enum PasswordCommand {
    /// Mail a one-time code to `email`.
    Reset {
        #[arg(long)]
        email: String,
    },
    Verify {
        #[arg(long)]
        email: String,
        #[arg(long)]
        otp: String,
    },
    Change {
        #[arg(long)]
        email: String,
        #[arg(long)]
        new_password: String,
        #[arg(long)]
        otp: Option<String>,
    },
}

/// Zero-based paging flags.
#[derive(Args, Debug, Clone, Copy)]
pub struct PageArgs {
    #[arg(long, default_value_t = 0)]
    pub page: u32,

    #[arg(long)]
    pub size: Option<u32>,
}

impl PageArgs {
    pub fn or(self, default: Page) -> Page {
        Page::new(self.page, self.size.unwrap_or(default.size))
    }
}

#[derive(Subcommand, Debug)]
pub enum ProductsCommand {
    List(PageArgs),
    /// Product details, image sources and reviews.
    Show { id: i64 },
    Search {
        name: String,
        #[command(flatten)]
        page: PageArgs,
    },
    /// Similar products, or personal picks when no id is given.
    Recommend { id: Option<i64> },
}

#[derive(Args, Debug)]
pub struct ImageArgs {
    /// Absolute URL, server path or bare upload filename.
    pub reference: Option<String>,

    /// Use the product image endpoint instead of a reference.
    #[arg(long, conflicts_with = "reference")]
    pub product: Option<i64>,

    /// Returned when the reference is empty. Defaults to the placeholder.
    #[arg(long)]
    pub fallback: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum CartCommand {
    List,
    /// Set the quantity of a product, adding it when absent.
    Set { product_id: i64, quantity: i64 },
    Remove { product_id: i64 },
}

#[derive(Subcommand, Debug)]
pub enum OrdersCommand {
    List,
    Show { id: i64 },
    /// Order everything in the cart.
    Create {
        #[arg(long, default_value_t = 1)]
        payment_method: i64,
    },
    Delete { id: i64 },
}

#[derive(Subcommand, Debug)]
pub enum InvoicesCommand {
    Create {
        order_id: i64,
        #[arg(long, default_value_t = 1)]
        payment_method: i64,
    },
    Delete { id: i64 },
}

#[derive(Subcommand, Debug)]
pub enum PayCommand {
    /// Print the gateway checkout URL for an order.
    Url {
        order_id: i64,
        total: f64,
        #[arg(long)]
        info: Option<String>,
    },
    /// Forward the gateway's return query string and print the outcome.
    Return { query: String },
    /// Register a payment method by name.
    AddMethod { name: String },
}

#[derive(Subcommand, Debug)]
pub enum ReviewsCommand {
    List {
        product_id: i64,
    },
    Add {
        product_id: i64,
        #[arg(value_parser = clap::value_parser!(u8).range(1..=5))]
        rating: u8,
        content: String,
    },
    Delete {
        product_id: i64,
        review_id: i64,
    },
}

#[derive(Subcommand, Debug)]
pub enum AdminCommand {
    Users(PageArgs),
    User { id: i64 },
    DeleteUser { id: i64 },
    AddProduct(ProductArgs),
    UpdateProduct {
        id: i64,
        #[command(flatten)]
        product: ProductArgs,
    },
    DeleteProduct { id: i64 },
    /// Interaction statistics for a product.
    Interactions { product_id: i64 },
}

#[derive(Args, Debug)]
pub struct ProductArgs {
    #[arg(long)]
    pub name: String,

    #[arg(long)]
    pub price: f64,

    #[arg(long, default_value_t = 0)]
    pub quantity: i64,

    #[arg(long)]
    pub category: Option<String>,

    #[arg(long)]
    pub description: Option<String>,

    /// Image file to upload with the product.
    #[arg(long)]
    pub image: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn command_tree_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn paging_defaults_per_listing() {
        let cli = Cli::try_parse_from(["storefront", "products", "list", "--page", "2"])
            .expect("parse");
        match cli.command {
            Commands::Products(ProductsCommand::List(page)) => {
                assert_eq!(page.or(Page::CATALOG), Page::new(2, 30));
                assert_eq!(page.or(Page::ADMIN), Page::new(2, 20));
            }
            other => panic!("wrong command: {other:?}"),
        }
    }

    #[test]
    fn review_rating_is_bounded() {
        assert!(Cli::try_parse_from(["storefront", "reviews", "add", "1", "6", "great"]).is_err());
        assert!(Cli::try_parse_from(["storefront", "reviews", "add", "1", "5", "great"]).is_ok());
    }
}
