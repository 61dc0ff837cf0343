//! Adapters from upstream response types.
//!
//! The upstream collaborator that computed the response usually hands us an
//! `axum`/`http` value; these adapters turn it into a [`ResponseValue`]
//! without touching the body.
//!
//! [`ResponseValue`]: crate::http::response::ResponseValue

pub mod axum;

pub use self::axum::from_axum_response;
