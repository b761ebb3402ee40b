/// Character budget for the embedded CV excerpt; bounds the outbound
/// payload and the model's context usage.
pub const CV_EXCERPT_LIMIT: usize = 10_000;

/// Renders the analysis instruction for one CV / job-reference pair.
/// The excerpt is the raw prefix of the CV text (no attempt to cut at a
/// semantic boundary), with line breaks mapped 1:1 to spaces so the
/// quoting in the template stays intact.
pub fn build_analysis_prompt(cv_text: &str, job_reference: &str) -> String {
    let excerpt: String = cv_text
        .chars()
        .take(CV_EXCERPT_LIMIT)
        .map(|c| if c == '\n' || c == '\r' { ' ' } else { c })
        .collect();
    format!(
        r#"You are an expert CV Analyst. Analyze the following CV against the Job URL/Description provided.

CV Text (Excerpts):
"{}"

Job URL/Description: "{}"

**Goal**: Provide a structured JSON response matching strictly the following schema.

**Scoring Definitions**:
1. **Overall Match (%)**: A weighted combination of Experience, Education, and Skills summarizing the compatibility.
2. **Experience Match (%)**: Measures alignment of years of experience, roles held, and level of responsibility.
3. **Education Match (%)**: Measures alignment of degree level, field of study, and relevant certifications.
4. **Skills Match (%)**: Measures match of explicitly required hard and soft skills.

**Feedback Sections**:
- **Strengths**: Dedicated section for what works well.
   - Rules: Only directly related to the job description. Max 3-4 points. Clear, non-judgmental.
   - Purpose: Reinforce confidence.
- **Areas to Improve**: Explains what limits the score.
   - Rules: Relate to the lower scores. No personal judgments. Max 3 points. Focus on gaps (e.g. missing tools, insufficient years).
   - Purpose: Explain the match score limit and provide actionable direction.

**Output Rules**:
- Scores must be explainable.
- Feedback must be constructive.
- Return ONLY raw JSON. No markdown formatting.

**JSON Schema**:
{{
    "scores": {{
        "overall": number (0-100),
        "experience": number (0-100),
        "education": number (0-100),
        "skills": number (0-100)
    }},
    "strengths": ["string", "string", ...],
    "improvements": ["string", "string", ...]
}}
"#,
        excerpt, job_reference
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn long_cv_text_is_cut_at_the_excerpt_limit() {
        let cv = "x".repeat(CV_EXCERPT_LIMIT + 500);
        let prompt = build_analysis_prompt(&cv, "https://example.com/job/1");
        let longest_run = prompt
            .split(|c: char| c != 'x')
            .map(|run| run.len())
            .max()
            .unwrap();
        assert_eq!(longest_run, CV_EXCERPT_LIMIT);
    }

    #[test]
    fn truncation_takes_the_prefix() {
        let mut cv = "prefix marker ".to_string();
        cv.push_str(&"y".repeat(CV_EXCERPT_LIMIT * 2));
        let prompt = build_analysis_prompt(&cv, "job");
        assert!(prompt.contains("prefix marker"));
    }

    #[test]
    fn short_cv_text_is_embedded_with_newlines_collapsed() {
        let prompt = build_analysis_prompt("line one\nline two\r\nline three", "backend role");
        assert!(prompt.contains("line one line two  line three"));
        assert!(prompt.contains(r#"Job URL/Description: "backend role""#));
    }

    #[test]
    fn newline_collapse_preserves_excerpt_length() {
        let cv = format!("{}\n{}", "a".repeat(6_000), "b".repeat(6_000));
        let prompt = build_analysis_prompt(&cv, "job");
        let embedded = format!("{} {}", "a".repeat(6_000), "b".repeat(CV_EXCERPT_LIMIT - 6_001));
        assert!(prompt.contains(&embedded));
    }
}
