// Landing page copy generation.
// All LLM calls go through llm_client; this module only builds prompts and
// wires the selected template to the content generator.

pub mod content;
pub mod generator;
pub mod handlers;
pub mod prompts;
