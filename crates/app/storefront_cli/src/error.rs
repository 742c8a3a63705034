use storefront_client::ClientError;
use storefront_core::config::ConfigError;
use storefront_core::session::SessionError;
use thiserror::Error;

pub type Result<T> = core::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("{}", .0)]
    Custom(String),

    #[error("this command needs an admin account")]
    NotAdmin,

    #[error("IO::{:?}: {}", .0, .0)]
    Io(#[from] std::io::Error),

    #[error("FlexiLogger::{:?}: {}", .0, .0)]
    FlexiLogger(#[from] flexi_logger::FlexiLoggerError),

    #[error("Client::{}", .0)]
    Client(#[from] ClientError),

    #[error("Session::{}", .0)]
    Session(#[from] SessionError),

    #[error("Config::{}", .0)]
    Config(#[from] ConfigError),
}

impl Error {
    /// One line for the terminal. Server messages and local refusals are
    /// shown as-is; anything else collapses to a generic notice and the
    /// detail stays in the log.
    pub fn user_message(&self) -> String {
        match self {
            Error::Custom(message) => message.clone(),
            Error::NotAdmin => self.to_string(),
            Error::Client(ClientError::Status { message, .. }) => message.clone(),
            Error::Client(ClientError::LoginRejected(reason)) => reason.clone(),
            Error::Client(ClientError::NotAuthenticated(_)) => {
                "not logged in; run `storefront login` first".to_string()
            }
            Error::Config(e) => e.to_string(),
            _ => "Something went wrong, please try again.".to_string(),
        }
    }
}
