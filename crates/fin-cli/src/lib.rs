pub(crate) mod client;

pub use client::{Client, ClientError, CliClientResult};
