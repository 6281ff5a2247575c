//! Prompt template for medical summaries.

/// Sampling temperature for summary completions. Kept low so the model
/// sticks to the requested JSON shape.
pub const SUMMARY_TEMPERATURE: f32 = 0.1;

const PREAMBLE: &str = "You are a medical summarization AI.
Create a **very short, clear, structured JSON summary** from the extracted OCR text.

Keep the response:
- **strictly in JSON**
- **max 2–3 lines per field**
- **no extra commentary**
- **no long paragraphs**
- **no markdown**

Extract only:
- diagnosis (short phrase)
- medications (array of {\"name\": \"\", \"dose\": \"\", \"frequency\": \"\"})
- lab_summary (2–3 key findings max)
- recommendations (short)
- follow_up (short)
- warnings (only if serious)

OCR text:
";

const RESPONSE_SHAPE: &str = "

Return ONLY this JSON:
{
    \"diagnosis\": \"\",
    \"medications\": [],
    \"lab_summary\": \"\",
    \"recommendations\": \"\",
    \"follow_up\": \"\",
    \"warnings\": \"\"
}
";

/// Build the summary prompt around `ocr_text`.
///
/// The text is inserted as-is: no trimming, escaping, or truncation.
pub fn build_summary_prompt(ocr_text: &str) -> String {
    let mut prompt = String::with_capacity(PREAMBLE.len() + ocr_text.len() + RESPONSE_SHAPE.len());
    prompt.push_str(PREAMBLE);
    prompt.push_str(ocr_text);
    prompt.push_str(RESPONSE_SHAPE);
    prompt
}
