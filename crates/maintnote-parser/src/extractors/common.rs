use regex::Regex;

use crate::registry::ExtractionRule;

/// Compiles a pattern literal from one of the static rule tables.
pub(crate) fn compile(pattern: &str) -> Regex {
    Regex::new(pattern).unwrap_or_else(|err| panic!("invalid built-in pattern {pattern}: {err}"))
}

/// Returns capture `group` of the first match anywhere in the text.
pub(crate) struct CaptureRule {
    name: &'static str,
    pattern: Regex,
    group: usize,
}

impl CaptureRule {
    pub fn new(name: &'static str, pattern: &str) -> Self {
        Self::with_group(name, pattern, 1)
    }

    pub fn with_group(name: &'static str, pattern: &str, group: usize) -> Self {
        Self {
            name,
            pattern: compile(pattern),
            group,
        }
    }
}

impl ExtractionRule for CaptureRule {
    fn name(&self) -> &'static str {
        self.name
    }

    fn apply(&self, text: &str) -> Option<String> {
        self.pattern
            .captures(text)
            .and_then(|caps| caps.get(self.group))
            .map(|m| m.as_str().trim().to_string())
    }
}

/// Like [`CaptureRule`] but evaluated line by line, so `.*` never crosses a
/// line break and the first matching line wins.
pub(crate) struct LineCaptureRule {
    inner: CaptureRule,
}

impl LineCaptureRule {
    pub fn with_group(name: &'static str, pattern: &str, group: usize) -> Self {
        Self {
            inner: CaptureRule::with_group(name, pattern, group),
        }
    }
}

impl ExtractionRule for LineCaptureRule {
    fn name(&self) -> &'static str {
        self.inner.name
    }

    fn apply(&self, text: &str) -> Option<String> {
        text.lines().find_map(|line| self.inner.apply(line))
    }
}

/// Yields a constant when the pattern occurs anywhere in the text.
pub(crate) struct FixedRule {
    name: &'static str,
    pattern: Regex,
    value: &'static str,
}

impl FixedRule {
    pub fn new(name: &'static str, pattern: &str, value: &'static str) -> Self {
        Self {
            name,
            pattern: compile(pattern),
            value,
        }
    }
}

impl ExtractionRule for FixedRule {
    fn name(&self) -> &'static str {
        self.name
    }

    fn apply(&self, text: &str) -> Option<String> {
        self.pattern
            .is_match(text)
            .then(|| self.value.to_string())
    }
}

/// Returns the whole first match of a shape pattern.
pub(crate) struct ShapeRule {
    name: &'static str,
    pattern: Regex,
}

impl ShapeRule {
    pub fn new(name: &'static str, pattern: &str) -> Self {
        Self {
            name,
            pattern: compile(pattern),
        }
    }
}

impl ExtractionRule for ShapeRule {
    fn name(&self) -> &'static str {
        self.name
    }

    fn apply(&self, text: &str) -> Option<String> {
        self.pattern.find(text).map(|m| m.as_str().to_string())
    }
}

/// Wraps a plain heuristic function.
pub(crate) struct FnRule {
    name: &'static str,
    func: fn(&str) -> Option<String>,
}

impl FnRule {
    pub fn new(name: &'static str, func: fn(&str) -> Option<String>) -> Self {
        Self { name, func }
    }
}

impl ExtractionRule for FnRule {
    fn name(&self) -> &'static str {
        self.name
    }

    fn apply(&self, text: &str) -> Option<String> {
        (self.func)(text)
    }
}
