// Content schedule generation: prompt rendering, the pluggable generator,
// the generation allowance and the single live schedule.
// All LLM calls go through llm_client.

pub mod generator;
pub mod handlers;
pub mod prompts;
pub mod quota;
pub mod session;
