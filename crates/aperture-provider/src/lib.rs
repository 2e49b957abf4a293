//! Clients for the gateway's external collaborators.
//!
//! Both clients talk to third-party HTTP APIs through reqwest with
//! bounded timeouts and no retries: the image-generation endpoint and a
//! TinyURL-style shortening endpoint.

pub mod openai;
pub mod tinyurl;

pub use openai::{OpenAiImageClient, OpenAiSettings};
pub use tinyurl::TinyUrlShortener;
