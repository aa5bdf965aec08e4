// Cross-cutting prompt fragments. Feature-specific prompts live next to the
// code that sends them (see generation/prompts.rs).

/// Appended to every system prompt that expects a JSON answer.
pub const JSON_ONLY_SYSTEM: &str = "You MUST respond with valid JSON only. \
    Do NOT include any text outside the JSON object. \
    Do NOT use markdown code fences. \
    Do NOT include explanations or apologies.";
