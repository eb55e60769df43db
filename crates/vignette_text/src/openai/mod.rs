//! OpenAI chat-completions collaborator.

mod client;
mod dto;
mod prompts;

pub use client::OpenAiClient;
