//! Wire models for the analysis backend and response decoding.
//!
//! The analysis response has no dedicated discriminant besides the echoed
//! `method` string, so decoding branches on `method` first and only then
//! looks at the shape:
//!
//! ```json
//! {"method": "tfidf", "result": {"score": 82.4, "remark": "...", "matched": [], "missing": []}}
//! {"method": "semantic", "score": 71, "remark": "..."}
//! ```
//!
//! Semantic responses that nest `score`/`remark` under `result` are accepted
//! too, and a body carrying an `error` string is treated as a failure
//! whatever its status.

use crate::domain::{AnalysisMode, AnalysisResult, FetchError, KeywordMatch, SemanticMatch};
use serde::Deserialize;

/// Top-level analysis response body.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AnalysisResponse {
    /// Echo of the requested method.
    #[serde(default)]
    pub method: Option<String>,

    /// Nested result object (always present for `tfidf`).
    #[serde(default)]
    pub result: Option<ResultBody>,

    /// Top-level score (semantic responses).
    #[serde(default)]
    pub score: Option<f64>,

    /// Top-level remark (semantic responses).
    #[serde(default)]
    pub remark: Option<String>,

    /// Error reported by the backend in an otherwise successful response.
    #[serde(default)]
    pub error: Option<String>,
}

/// Nested `result` object.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ResultBody {
    #[serde(default)]
    pub score: Option<f64>,

    #[serde(default)]
    pub remark: Option<String>,

    /// Matched keywords; absent or `null` means none.
    #[serde(default)]
    pub matched: Option<Vec<String>>,

    /// Missing keywords; absent or `null` means none.
    #[serde(default)]
    pub missing: Option<Vec<String>>,
}

/// Error body shapes the backend may return.
#[derive(Debug, Default, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    error: Option<serde_json::Value>,
    #[serde(default)]
    detail: Option<serde_json::Value>,
    #[serde(default)]
    message: Option<serde_json::Value>,
}

/// Decodes the job-role catalog body: a JSON array of strings.
///
/// # Errors
///
/// Returns [`FetchError::Decode`] if the body is not an array of strings.
pub fn decode_job_roles(body: &str) -> Result<Vec<String>, FetchError> {
    serde_json::from_str::<Vec<String>>(body).map_err(|e| FetchError::Decode(e.to_string()))
}

/// Decodes a successful analysis response into an [`AnalysisResult`].
///
/// # Errors
///
/// - [`FetchError::Rejected`] if the body carries a non-empty `error` string
/// - [`FetchError::Decode`] if `method` is missing or unknown, or the
///   fields required by that method are absent
pub fn decode_analysis(body: &str) -> Result<AnalysisResult, FetchError> {
    let response: AnalysisResponse =
        serde_json::from_str(body).map_err(|e| FetchError::Decode(e.to_string()))?;

    if let Some(error) = response.error.as_deref().map(str::trim).filter(|e| !e.is_empty()) {
        return Err(FetchError::Rejected(error.to_string()));
    }

    let method = response
        .method
        .as_deref()
        .ok_or_else(|| FetchError::Decode("missing `method`".to_string()))?;

    match method {
        m if m == AnalysisMode::KeywordMatch.wire_id() => {
            let result = response
                .result
                .ok_or_else(|| FetchError::Decode("missing `result` object".to_string()))?;
            let score = result
                .score
                .ok_or_else(|| FetchError::Decode("missing `result.score`".to_string()))?;

            Ok(AnalysisResult::KeywordMatch(KeywordMatch {
                score,
                remark: result.remark.unwrap_or_default(),
                matched_keywords: result.matched.unwrap_or_default(),
                missing_keywords: result.missing.unwrap_or_default(),
            }))
        }
        m if m == AnalysisMode::SemanticMatch.wire_id() => {
            let nested = response.result.unwrap_or_default();
            let score = response
                .score
                .or(nested.score)
                .ok_or_else(|| FetchError::Decode("missing `score`".to_string()))?;
            let remark = response.remark.or(nested.remark).unwrap_or_default();

            Ok(AnalysisResult::SemanticMatch(SemanticMatch { score, remark }))
        }
        other => Err(FetchError::Decode(format!("unknown method `{other}`"))),
    }
}

/// Extracts a human-readable error from a failed response body, if any.
///
/// Looks at `error`, then `detail`, then `message`; only non-empty string
/// values count.
#[must_use]
pub fn error_detail(body: &str) -> Option<String> {
    let parsed: ErrorBody = serde_json::from_str(body).ok()?;

    [parsed.error, parsed.detail, parsed.message]
        .into_iter()
        .flatten()
        .find_map(|value| match value {
            serde_json::Value::String(s) if !s.trim().is_empty() => Some(s),
            _ => None,
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_keyword_response() {
        let body = r#"{"method":"tfidf","result":{"score":82.456,"remark":"Good fit","matched":["python"],"missing":["docker","kubernetes"]}}"#;
        let result = decode_analysis(body).unwrap();

        assert_eq!(
            result,
            AnalysisResult::KeywordMatch(KeywordMatch {
                score: 82.456,
                remark: "Good fit".into(),
                matched_keywords: vec!["python".into()],
                missing_keywords: vec!["docker".into(), "kubernetes".into()],
            })
        );
    }

    #[test]
    fn keyword_lists_may_be_absent_or_null() {
        let body = r#"{"method":"tfidf","result":{"score":10,"remark":"Weak","matched":null}}"#;
        let AnalysisResult::KeywordMatch(m) = decode_analysis(body).unwrap() else {
            panic!("expected keyword result");
        };
        assert!(m.matched_keywords.is_empty());
        assert!(m.missing_keywords.is_empty());
    }

    #[test]
    fn decodes_flat_semantic_response() {
        let body = r#"{"method":"semantic","score":71,"remark":"Reasonable alignment"}"#;
        assert_eq!(
            decode_analysis(body).unwrap(),
            AnalysisResult::SemanticMatch(SemanticMatch {
                score: 71.0,
                remark: "Reasonable alignment".into(),
            })
        );
    }

    #[test]
    fn decodes_nested_semantic_response() {
        let body = r#"{"method":"semantic","result":{"score":64.2,"remark":"Partial"}}"#;
        let result = decode_analysis(body).unwrap();
        assert_eq!(result.mode(), AnalysisMode::SemanticMatch);
        assert!((result.score() - 64.2).abs() < f64::EPSILON);
        assert_eq!(result.remark(), "Partial");
    }

    #[test]
    fn method_decides_the_variant_not_the_shape() {
        // Semantic method with a keyword-shaped body stays semantic.
        let body = r#"{"method":"semantic","result":{"score":50,"remark":"Ok","matched":["x"]}}"#;
        assert_eq!(decode_analysis(body).unwrap().mode(), AnalysisMode::SemanticMatch);

        // Keyword method without the nested object is rejected.
        let body = r#"{"method":"tfidf","score":50,"remark":"Ok"}"#;
        assert!(matches!(decode_analysis(body), Err(FetchError::Decode(_))));
    }

    #[test]
    fn error_body_is_a_rejection() {
        let body = r#"{"error":"Job role is required for TF-IDF method"}"#;
        assert_eq!(
            decode_analysis(body),
            Err(FetchError::Rejected("Job role is required for TF-IDF method".into()))
        );
    }

    #[test]
    fn unknown_or_missing_method_fails() {
        assert!(matches!(
            decode_analysis(r#"{"method":"bm25","score":1}"#),
            Err(FetchError::Decode(_))
        ));
        assert!(matches!(decode_analysis(r#"{"score":1}"#), Err(FetchError::Decode(_))));
        assert!(matches!(decode_analysis("not json"), Err(FetchError::Decode(_))));
    }

    #[test]
    fn job_roles_must_be_string_array() {
        assert_eq!(
            decode_job_roles(r#"["data_scientist","web_developer"]"#).unwrap(),
            vec!["data_scientist".to_string(), "web_developer".to_string()]
        );
        assert!(decode_job_roles(r#"{"roles":[]}"#).is_err());
    }

    #[test]
    fn error_detail_prefers_string_fields() {
        assert_eq!(error_detail(r#"{"error":"boom"}"#), Some("boom".into()));
        assert_eq!(error_detail(r#"{"detail":"Not Found"}"#), Some("Not Found".into()));
        assert_eq!(error_detail(r#"{"detail":[{"loc":["body","file"]}]}"#), None);
        assert_eq!(error_detail("<html>502</html>"), None);
        assert_eq!(error_detail(r#"{"error":"  "}"#), None);
    }
}
