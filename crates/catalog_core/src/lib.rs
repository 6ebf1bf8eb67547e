//! Catalog core: pure browse state machine and view-model helpers.
//!
//! Filter changes, scroll-triggered loads and fetch completions arrive as
//! [`Msg`] values; [`update`] applies them to a [`BrowseSession`] and answers
//! with [`Effect`]s for the IO layer. Completions are matched against the
//! context captured at dispatch so late results for an abandoned filter or
//! page never reach the visible list.
mod effect;
mod error;
mod filter;
mod item;
mod msg;
mod pagination;
mod state;
mod store;
mod update;
mod view_model;

pub use effect::Effect;
pub use error::{BrowseError, ErrorInfo, ErrorKind, StaleReason};
pub use filter::{FilterSnapshot, FilterState};
pub use item::{genre_options, CatalogPage, Item, ItemId};
pub use msg::Msg;
pub use pagination::{
    FetchOutcome, FetchRequestContext, PageNumber, PaginationController, RequestId,
};
pub use state::BrowseSession;
pub use store::ResultStore;
pub use update::update;
pub use view_model::{BrowsePhase, BrowseState};
