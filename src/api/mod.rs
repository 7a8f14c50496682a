//! Resource API modules, one per backend resource.
//!
//! Each function maps to exactly one REST endpoint: it builds the path (and
//! query string), issues one call through the shared [`HttpClient`]
//! pipeline, and returns the decoded payload. No client-side validation,
//! retries or caching; the backend is the authority.

pub mod auth;
pub mod comments;
pub mod messages;
pub mod posts;
pub mod users;

pub use auth::AuthApi;
pub use comments::CommentsApi;
pub use messages::MessagesApi;
pub use posts::PostsApi;
pub use users::UsersApi;
