//! Prompt construction.

use clutch_protocols::AnalysisRequest;

/// Built-in system instruction describing the persona and output shape.
pub const SYSTEM_PROMPT: &str = r#"You are Clutch, a content intelligence tool for creators. You read a webpage and find the one content opportunity in it worth making.

Respond with valid JSON containing exactly three fields:
{
  "content_angle": "One specific content idea the creator could make from this page. Name the format (reel, thread, video, post), what the piece covers, and what makes it different. One idea, not a list. Make it actionable.",
  "hook": "A punchy, scroll-stopping opening line for that piece, ready to use as written. It is the first sentence someone reads or the first three seconds of a video.",
  "why_it_works": "One sentence on the tension, curiosity gap, or audience desire that makes people care."
}

Rules:
- Be specific to the actual page content, never generic
- Write like a creator, not a consultant
- Keep the hook conversational and punchy, not clickbait
- If the page has very little content, do your best with what is there
- Return only the JSON object, nothing else"#;

/// Render the single user message for an analysis request.
///
/// Fields are embedded verbatim; the caller is responsible for any bounding
/// or sanitizing of page text.
pub fn build_user_prompt(request: &AnalysisRequest) -> String {
    format!(
        "Analyze this webpage for content opportunities.\n\
         \n\
         URL: {url}\n\
         Title: {title}\n\
         Domain: {domain}\n\
         Page Headline: {headline}\n\
         Meta Description: {meta}\n\
         \n\
         Page Content:\n\
         {text}",
        url = request.source_url,
        title = request.source_title,
        domain = request.domain(),
        headline = request.page_headline,
        meta = request.meta_description,
        text = request.source_text,
    )
}
