// CV tailoring: fixed prompt → selected LLM provider → keyword match score.
// All LLM calls go through llm_client; scoring is local and never fed back to the model.

pub mod handlers;
pub mod prompts;
