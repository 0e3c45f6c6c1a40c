//! A thin client for the Mailchimp v3 API.
//!
//! The client derives the regional endpoint from the API key's datacenter
//! suffix, signs every request with an `Authorization: apikey <key>` header
//! and reshapes JSON responses into a [`ResponseCollection`]. There is no
//! retry, pagination or rate-limit handling; every method is a direct mapping
//! from a call to one HTTP request.
//!
//! ## Example
//!
//! ```no_run
//! use mailchimp_client::{Client, Params};
//! use serde_json::json;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), mailchimp_client::Error> {
//!     let client = Client::new("ea400f0d078e0ddddf638e95e69f9b0f-us10")?;
//!
//!     let mut params = Params::new();
//!     params.insert("count".to_string(), json!(10));
//!     let lists = client.get("lists", params).await?;
//!     println!("{}", lists.as_value());
//!
//!     let mut params = Params::new();
//!     params.insert("name".to_string(), json!("Newsletter"));
//!     let created = client.post("lists", params).await?;
//!     println!("{}", created.as_value());
//!
//!     Ok(())
//! }
//! ```

pub mod client;
pub mod error;
pub mod models;

pub use client::{Client, Method};
pub use error::Error;
pub use models::{Params, ResponseCollection};
