use tracing::{debug, trace};

/// One matcher in a prioritized extraction chain.
pub trait ExtractionRule: Send + Sync {
    fn name(&self) -> &'static str;
    fn apply(&self, text: &str) -> Option<String>;
}

/// The value a chain produced together with the rule that produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Extraction {
    pub value: String,
    pub rule: &'static str,
}

impl Extraction {
    pub fn new(value: impl Into<String>, rule: &'static str) -> Self {
        Self {
            value: value.into(),
            rule,
        }
    }
}

/// Evaluates `rules` first to last and returns the first non-empty result.
pub fn extract_with_rules(
    field: &'static str,
    text: &str,
    rules: &[Box<dyn ExtractionRule>],
) -> Option<Extraction> {
    for rule in rules {
        match rule.apply(text) {
            Some(value) if !value.trim().is_empty() => {
                debug!(field, rule = rule.name(), "rule matched");
                return Some(Extraction::new(value.trim(), rule.name()));
            }
            _ => trace!(field, rule = rule.name(), "rule missed"),
        }
    }

    debug!(field, attempts = rules.len(), "no rule matched");
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Fixed(&'static str, Option<&'static str>);

    impl ExtractionRule for Fixed {
        fn name(&self) -> &'static str {
            self.0
        }

        fn apply(&self, _text: &str) -> Option<String> {
            self.1.map(str::to_string)
        }
    }

    #[test]
    fn first_successful_rule_wins() {
        let rules: Vec<Box<dyn ExtractionRule>> = vec![
            Box::new(Fixed("miss", None)),
            Box::new(Fixed("hit", Some("  first  "))),
            Box::new(Fixed("later", Some("second"))),
        ];
        let found = extract_with_rules("test", "", &rules).expect("a rule should match");
        assert_eq!(found, Extraction::new("first", "hit"));
    }

    #[test]
    fn blank_results_fall_through() {
        let rules: Vec<Box<dyn ExtractionRule>> = vec![
            Box::new(Fixed("blank", Some("   "))),
            Box::new(Fixed("real", Some("value"))),
        ];
        let found = extract_with_rules("test", "", &rules).expect("a rule should match");
        assert_eq!(found.rule, "real");
    }

    #[test]
    fn empty_chain_yields_nothing() {
        assert!(extract_with_rules("test", "anything", &[]).is_none());
    }
}
