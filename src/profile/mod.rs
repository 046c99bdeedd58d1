//! Profile lookups used to resolve the caller of a request

mod service;

pub use service::ProfileService;
