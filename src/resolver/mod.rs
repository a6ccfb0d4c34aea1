//! Answer resolution core
//!
//! Pure, synchronous text matching against the compiled-in knowledge
//! tables. Two surfaces share it: the per-agent resolver scores a
//! question against one agent's knowledge base, and the global resolver
//! matches the quick-response table and suggests a specialist agent.
//! Every path returns a non-empty string; there are no error conditions.

pub mod global;
pub mod knowledge;
pub mod normalize;
