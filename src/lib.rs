//! Thinkverse client SDK for Rust.
//!
//! An async client for the Thinkverse social blogging platform: cookie-based
//! session auth with CSRF handling, centralized 401 interception, and typed
//! wrappers for every REST resource (auth, users, posts, comments,
//! messages).
//!
//! # Quick start
//!
//! ```rust,no_run
//! use thinkverse_sdk::{SessionEvent, ThinkverseClient};
//!
//! #[tokio::main]
//! async fn main() -> thinkverse_sdk::Result<()> {
//!     let client = ThinkverseClient::from_env()?
//!         .on_unauthorized(|route| println!("send the user to {route}"));
//!
//!     // Restore a cookie session from a previous run, if any.
//!     client.auth().check().await?;
//!
//!     let mut events = client.session().subscribe();
//!     client.auth().login("ada", "correct horse battery").await?;
//!     assert!(matches!(events.recv().await, Ok(SessionEvent::LoggedIn(_))));
//!
//!     let like = client.posts().toggle_like(42).await?;
//!     println!("liked: {} ({} likes)", like.is_liked, like.likes_count);
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod client;
pub mod config;
pub mod cookies;
pub mod csrf;
pub mod error;
pub mod http;
pub mod session;
pub mod types;

pub use client::{RequestScope, ThinkverseClient};
pub use config::ClientConfig;
pub use error::{Error, Result};
pub use session::{SessionEvent, SessionManager, SessionState};
pub use types::*;
