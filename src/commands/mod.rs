pub mod agent;
pub mod ask;
pub mod chat;
pub mod completions;
pub mod prompts;
