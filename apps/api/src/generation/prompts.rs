// Prompt constants for landing page copy generation.
// Reuses cross-cutting fragments from llm_client::prompts.

/// System prompt for copy generation. JSON-only output.
pub const CONTENT_SYSTEM: &str = "You are a senior conversion copywriter who writes \
    landing page copy for small and mid-sized businesses. \
    You MUST respond with valid JSON only. \
    Do NOT include any text outside the JSON object. \
    Do NOT use markdown code fences.";

/// Copy generation prompt. Every `{placeholder}` is replaced before sending.
pub const CONTENT_PROMPT_TEMPLATE: &str = r#"Write the copy for a landing page built on the "{template_name}" template.

TEMPLATE
- Description: {template_description}
- Category: {template_category}
- Visual style: {style}
- Sections to fill (in order): {features_json}

BUSINESS
- Category: {category}
- Industry: {industry}
- Target audience: {audience}

Return a JSON object with this EXACT shape:
{
  "hero": {"headline": "...", "subheadline": "...", "cta_label": "..."},
  "sections": [
    {"section": "<one of the sections listed above>", "heading": "...", "body": "..."}
  ],
  "seo": {"title": "...", "description": "..."}
}

Rules:
- Provide exactly one entry in "sections" per section listed above, in the same order.
- Match the tone to the visual style: {style_tone}.
- Headline at most 10 words. Meta description at most 160 characters.
- {no_fabrication_instruction}
"#;

/// Tone guidance per style, substituted into `{style_tone}`.
pub fn style_tone(style: crate::selection::models::StylePreference) -> &'static str {
    use crate::selection::models::StylePreference::*;

    match style {
        Minimalist => "short, calm sentences with no filler",
        Modern => "confident and clear, light on jargon",
        Bold => "punchy, energetic, high-contrast statements",
        Elegant => "refined, understated and polished",
        Playful => "warm, witty and informal",
    }
}
