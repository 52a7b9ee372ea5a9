pub mod api_client;
pub mod components;
pub mod date_utils;
pub mod icons;
pub mod modal;

use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

/// Future returned by form save handlers. Browser futures are not `Send`;
/// they are driven by `spawn_local`.
pub type SaveFuture = Pin<Box<dyn Future<Output = Result<(), String>>>>;

/// Async save handler injected into form modals: the modal validates,
/// calls this, and stays open showing the error when it fails.
pub type SaveHandler<P> = Arc<dyn Fn(P) -> SaveFuture + Send + Sync>;
