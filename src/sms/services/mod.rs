//! Service layer for message dispatch.

mod dispatch;

pub use dispatch::{DispatchError, DispatchResult, DispatchService};
