use crate::FetchRequestContext;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Fetch one catalog page. The context must come back with the completion.
    FetchPage(FetchRequestContext),
}
