//! Catalog engine: remote catalog access and effect execution.
mod engine;
mod gateway;
mod query;
mod types;
mod wire;

pub use engine::{ChannelEventSink, EngineHandle, EventSink};
pub use gateway::{FetchGateway, FetchSettings, ReqwestGateway};
pub use query::page_url;
pub use types::{EngineError, EngineEvent, FailureKind, FetchError};
pub use wire::decode_page;
