// Verse lookup: prompt building, upstream call, numbered-list parsing,
// plus the localization strings and document export the UI relies on.
// All LLM calls go through llm_client.

pub mod export;
pub mod handlers;
pub mod localization;
pub mod lookup;
pub mod models;
pub mod parser;
pub mod prompts;
