use crate::pkg::internal::ai::spec::AnalysisResult;
use crate::prelude::{Error, Result};

/// Two-phase parse of the raw model reply: strict JSON first, then a
/// retry with markdown code fences stripped. Models wrap their output in
/// fences often enough despite being told not to.
pub fn parse_analysis(raw: &str) -> Result<AnalysisResult> {
    let analysis: AnalysisResult = match serde_json::from_str(raw) {
        Ok(parsed) => parsed,
        Err(_) => {
            let cleaned = strip_code_fences(raw);
            serde_json::from_str(cleaned.trim()).map_err(|e| {
                Error::Normalization(format!("model reply was not valid JSON: {}", e))
            })?
        }
    };
    validate(&analysis)?;
    Ok(analysis)
}

fn strip_code_fences(raw: &str) -> String {
    raw.replace("```json", "").replace("```", "")
}

fn validate(analysis: &AnalysisResult) -> Result<()> {
    for (name, score) in analysis.scores.iter() {
        let value = score.as_f64().ok_or_else(|| {
            Error::Normalization(format!("score '{}' is not a finite number", name))
        })?;
        if !(0.0..=100.0).contains(&value) {
            return Err(Error::Normalization(format!(
                "score '{}' is out of range: {}",
                name, value
            )));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const REPLY: &str = r#"{"scores":{"overall":82,"experience":80,"education":70,"skills":85},"strengths":["Strong backend experience"],"improvements":["Add cloud certifications"]}"#;

    #[test]
    fn parses_a_raw_json_reply() {
        let analysis = parse_analysis(REPLY).unwrap();
        assert_eq!(analysis.scores.overall.as_f64(), Some(82.0));
        assert_eq!(analysis.strengths, vec!["Strong backend experience"]);
        assert_eq!(analysis.improvements, vec!["Add cloud certifications"]);
    }

    #[test]
    fn fence_stripping_is_transparent() {
        let fenced = format!("```json\n{}\n```", REPLY);
        assert_eq!(parse_analysis(&fenced).unwrap(), parse_analysis(REPLY).unwrap());
    }

    #[test]
    fn non_json_reply_is_an_error() {
        let err = parse_analysis("not json at all").unwrap_err();
        assert!(!err.to_string().is_empty());
    }

    #[test]
    fn missing_score_field_is_an_error() {
        let reply = r#"{"scores":{"overall":82,"experience":80,"education":70},"strengths":[],"improvements":[]}"#;
        assert!(parse_analysis(reply).is_err());
    }

    #[test]
    fn non_numeric_score_is_an_error() {
        let reply = r#"{"scores":{"overall":"82","experience":80,"education":70,"skills":85},"strengths":[],"improvements":[]}"#;
        assert!(parse_analysis(reply).is_err());
    }

    #[test]
    fn out_of_range_score_is_an_error() {
        let reply = r#"{"scores":{"overall":182,"experience":80,"education":70,"skills":85},"strengths":[],"improvements":[]}"#;
        let err = parse_analysis(reply).unwrap_err();
        assert!(err.to_string().contains("out of range"));
    }

    #[test]
    fn fractional_scores_are_accepted() {
        let reply = r#"{"scores":{"overall":82.5,"experience":80.1,"education":70.0,"skills":85.9},"strengths":[],"improvements":[]}"#;
        let analysis = parse_analysis(reply).unwrap();
        assert_eq!(analysis.scores.skills.as_f64(), Some(85.9));
    }
}
