// Prompt text for the tailoring call. The CV and JD are spliced in with `format!`,
// so braces inside user text are never interpreted as placeholders.

/// Opening line of the tailoring prompt.
pub const TAILOR_PREAMBLE: &str =
    "You are an expert CV/Resume writer. Tailor the CV below to match the job description.";

/// Output rules appended after the CV and JD.
pub const TAILOR_INSTRUCTIONS: &str = "\
CRITICAL INSTRUCTIONS:
1. Output ONLY the tailored CV content - NO introductions, NO explanations, NO commentary
2. Start directly with the candidate's name/header
3. Keep it to ONE PAGE maximum - be concise
4. Use keywords from the job description naturally
5. Highlight relevant experience and skills matching the job
6. Make it ATS-friendly
7. Maintain truthfulness - don't add fake experience
8. Format should be ready for immediate copy-paste or download

OUTPUT FORMAT: Pure CV text only, ready to use.";

/// Builds the full tailoring prompt for one CV / JD pair.
pub fn build_tailor_prompt(cv_text: &str, job_description: &str) -> String {
    format!(
        "{TAILOR_PREAMBLE}\n\nMY CV:\n{cv_text}\n\nJOB DESCRIPTION:\n{job_description}\n\n{TAILOR_INSTRUCTIONS}"
    )
}
