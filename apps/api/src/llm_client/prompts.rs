// Cross-cutting prompt fragments. Feature-specific prompts live next to the
// code that sends them (see generation/prompts.rs).

/// System prompt fragment that enforces JSON-only output.
pub const JSON_ONLY_SYSTEM: &str = "You MUST respond with valid JSON only. \
    Do NOT include any text outside the JSON object. \
    Do NOT use markdown code fences. \
    Do NOT include explanations or apologies.";

/// Keeps generated marketing copy honest about the business.
pub const NO_FABRICATION_INSTRUCTION: &str = "\
    Do NOT invent statistics, customer names, awards, certifications or testimonials \
    attributed to real people. Where the copy needs social proof, write clearly generic \
    placeholder text (for example \"Customer name\") instead of fabricated facts.";
