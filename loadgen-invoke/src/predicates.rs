//! Per-workload expectations on a successful sync response body

use crate::validator::is_truthy;
use loadgen_payload::Workload;
use serde_json::Value;

/// Predicate applied to a parsed sync response body
pub type OutputPredicate = fn(&Value) -> bool;

fn output(body: &Value) -> Option<&Value> {
    body.get("output").filter(|output| is_truthy(output))
}

/// `output.wordCount` is a number greater than zero
pub fn word_count_positive(body: &Value) -> bool {
    output(body)
        .and_then(|output| output.get("wordCount"))
        .and_then(Value::as_f64)
        .is_some_and(|count| count > 0.0)
}

/// `output.groups` is present, whatever its value
pub fn has_groups(body: &Value) -> bool {
    output(body).is_some_and(|output| output.get("groups").is_some())
}

pub fn predicate_for(workload: Workload) -> OutputPredicate {
    match workload {
        Workload::WordStats => word_count_positive,
        Workload::JsonTransform => has_groups,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_word_count_positive() {
        assert!(word_count_positive(&json!({"output": {"wordCount": 42}})));
        assert!(!word_count_positive(&json!({"output": {"wordCount": 0}})));
        assert!(!word_count_positive(&json!({"output": {"wordCount": "many"}})));
        assert!(!word_count_positive(&json!({"output": null})));
        assert!(!word_count_positive(&json!({})));
    }

    #[test]
    fn test_has_groups() {
        assert!(has_groups(&json!({"output": {"groups": {"eng": 3}}})));
        assert!(has_groups(&json!({"output": {"groups": null}})));
        assert!(!has_groups(&json!({"output": {"rows": []}})));
        assert!(!has_groups(&json!({"groups": {}})));
    }

    #[test]
    fn test_predicate_for_workload() {
        let body = json!({"output": {"wordCount": 3}});
        assert!(predicate_for(Workload::WordStats)(&body));
        assert!(!predicate_for(Workload::JsonTransform)(&body));
    }
}
