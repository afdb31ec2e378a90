mod client;
mod source;

pub use client::PacedClient;
pub use source::{HttpPageSource, PageSource};
