//! Console client: HTTP backend access and the effect driver.
mod backend;
mod driver;
mod hooks;
mod http;
mod wire;

pub use backend::{Backend, BackendError};
pub use driver::{Driver, DriverHandle};
pub use hooks::PageHooks;
pub use http::{HttpBackend, HttpSettings};
