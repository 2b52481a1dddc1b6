pub mod config;
pub mod error;
pub mod sink;
pub mod utils;
pub mod web;

use std::sync::Arc;
use sink::PayloadSink;

pub use config::Config;
pub use error::ListenerError;

pub struct AppContext {
    pub sink: Arc<dyn PayloadSink>,
}
