use storefront_client::Client;
use storefront_core::models::{LoginRequest, RegisterRequest, UpdateProfileRequest};

use super::joined;
use crate::Result;
use crate::cli::{Credentials, PasswordCommand, ProfileArgs};

pub async fn login(client: &Client, credentials: Credentials) -> Result<()> {
    let request = LoginRequest {
        email: credentials.email,
        password: credentials.password,
    };
    client.user().login(&request).await?;

    if client.session().is_admin() {
        println!("Logged in as {} (admin)", request.email);
    } else {
        println!("Logged in as {}", request.email);
    }
    Ok(())
}

pub async fn logout(client: &Client) -> Result<()> {
    let reply = client.logout().await?;
    match reply.text() {
        "" => println!("Logged out"),
        text => println!("{text}"),
    }
    Ok(())
}

/// Reads the stored token only; nothing is sent to the server.
pub fn whoami(client: &Client) {
    let session = client.session();
    if !session.is_authenticated() {
        println!("Not logged in");
        return;
    }

    let claims = session.claims();
    let subject = claims
        .as_ref()
        .and_then(|c| c.subject())
        .unwrap_or("(unknown)");
    println!("user: {subject}");
    println!("roles: {}", joined(session.roles()));
    println!("admin: {}", if session.is_admin() { "yes" } else { "no" });
    if let Some(expires) = claims.as_ref().and_then(|c| c.expires_at()) {
        println!("expires: {}", expires.format("%Y-%m-%d %H:%M UTC"));
    }
}

pub async fn register(client: &Client, credentials: Credentials) -> Result<()> {
    let request = RegisterRequest {
        email: credentials.email,
        password: credentials.password,
    };
    let reply = client.user().register(&request).await?;
    match reply.text() {
        "" => println!("Registered {}", request.email),
        text => println!("{text}"),
    }
    Ok(())
}

pub async fn profile(client: &Client, args: ProfileArgs) -> Result<()> {
    let mut profile = client.user().profile().await?;

    if args.is_update() {
        let request = UpdateProfileRequest {
            email: args.email,
            address: args.address,
            password: args.password,
        };
        let reply = client.user().update_profile(profile.id, &request).await?;
        log::info!("profile updated: {}", reply.text());
        profile = client.user().profile().await?;
    }

    println!("#{} {}", profile.id, profile.email);
    println!("address: {}", profile.address.as_deref().unwrap_or("-"));
    println!("roles: {}", joined(&profile.roles));
    Ok(())
}

pub async fn refresh(client: &Client) -> Result<()> {
    client.user().refresh().await?;
    println!("Token refreshed");
    Ok(())
}

pub async fn password(client: &Client, command: PasswordCommand) -> Result<()> {
    let user = client.user();
    let reply = match command {
        PasswordCommand::Reset { email } => user.reset_password(&email).await?,
        PasswordCommand::Verify { email, otp } => user.verify_otp(&email, &otp).await?,
        PasswordCommand::Change {
            email,
            new_password,
            otp,
        } => {
            user.change_password(&email, &new_password, otp.as_deref())
                .await?
        }
    };
    println!("{}", reply.text());
    Ok(())
}
