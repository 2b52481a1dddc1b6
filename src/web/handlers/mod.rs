use axum::Router;
use std::sync::Arc;
use crate::AppContext;

pub mod webhook;

pub fn router(ctx: Arc<AppContext>) -> Router {
    webhook::webhook_router(ctx)
}
