pub mod client;
pub mod credentials;
pub mod error;

pub use client::{ApiClient, ListPage};
pub use credentials::{CredentialProvider, EnvCredentials, StaticCredentials};
pub use error::FetchError;
