//! Shared request/response types.

mod pagination;
mod response;

pub use pagination::PaginationParams;
pub use response::MessageResponse;
