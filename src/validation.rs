use std::collections::BTreeMap;

use serde::Serialize;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Constraint {
    /// Present, and for text not blank.
    Required,
    /// Maximum length in characters.
    MaxLength(usize),
    /// Inclusive integer range.
    Range(i64, i64),
}

#[derive(Clone, Copy, Debug)]
pub struct FieldRule {
    pub field: &'static str,
    pub constraint: Constraint,
    pub message: &'static str,
}

impl FieldRule {
    pub const fn new(field: &'static str, constraint: Constraint, message: &'static str) -> Self {
        Self { field, constraint, message }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldValue<'a> {
    Absent,
    Text(&'a str),
    Integer(i64),
    /// A value with no constraints beyond presence, e.g. a timestamp.
    Present,
}

impl<'a> From<Option<&'a str>> for FieldValue<'a> {
    fn from(value: Option<&'a str>) -> Self {
        value.map_or(FieldValue::Absent, FieldValue::Text)
    }
}

impl From<Option<i64>> for FieldValue<'_> {
    fn from(value: Option<i64>) -> Self {
        value.map_or(FieldValue::Absent, FieldValue::Integer)
    }
}

impl From<Option<i32>> for FieldValue<'_> {
    fn from(value: Option<i32>) -> Self {
        value.map_or(FieldValue::Absent, |v| FieldValue::Integer(v.into()))
    }
}

/// An input shape checked against a static rule table before it reaches the store.
pub trait Validate {
    const RULES: &'static [FieldRule];

    fn field(&self, name: &str) -> FieldValue<'_>;
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ValidationErrors(BTreeMap<String, Vec<String>>);

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn single(field: impl Into<String>, message: impl Into<String>) -> Self {
        let mut errors = Self::new();
        errors.add(field, message);
        errors
    }

    pub fn add(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.0.entry(field.into()).or_default().push(message.into());
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn messages(&self, field: &str) -> &[String] {
        self.0.get(field).map(Vec::as_slice).unwrap_or_default()
    }
}

impl std::fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut first = true;
        for (field, messages) in &self.0 {
            for message in messages {
                if !first {
                    f.write_str("; ")?;
                }
                write!(f, "{field}: {message}")?;
                first = false;
            }
        }
        Ok(())
    }
}

pub fn validate<T: Validate>(value: &T) -> Result<(), ValidationErrors> {
    let mut errors = ValidationErrors::new();

    for rule in T::RULES {
        if !satisfies(rule.constraint, value.field(rule.field)) {
            errors.add(rule.field, rule.message);
        }
    }

    if errors.is_empty() { Ok(()) } else { Err(errors) }
}

fn satisfies(constraint: Constraint, value: FieldValue<'_>) -> bool {
    match (constraint, value) {
        (Constraint::Required, FieldValue::Absent) => false,
        (Constraint::Required, FieldValue::Text(s)) => !s.trim().is_empty(),
        (Constraint::Required, _) => true,
        // absent values are the Required rule's concern
        (_, FieldValue::Absent) => true,
        (Constraint::MaxLength(max), FieldValue::Text(s)) => s.chars().count() <= max,
        (Constraint::Range(min, max), FieldValue::Integer(n)) => (min..=max).contains(&n),
        _ => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Sample {
        name: Option<String>,
        size: Option<i64>,
    }

    impl Validate for Sample {
        const RULES: &'static [FieldRule] = &[
            FieldRule::new("name", Constraint::Required, "name is required"),
            FieldRule::new("name", Constraint::MaxLength(5), "name too long"),
            FieldRule::new("size", Constraint::Required, "size is required"),
            FieldRule::new("size", Constraint::Range(1, 10), "size out of range"),
        ];

        fn field(&self, name: &str) -> FieldValue<'_> {
            match name {
                "name" => self.name.as_deref().into(),
                "size" => self.size.into(),
                _ => FieldValue::Absent,
            }
        }
    }

    #[test]
    fn accepts_valid_value() {
        let sample = Sample { name: Some("abc".into()), size: Some(10) };
        assert!(validate(&sample).is_ok());
    }

    #[test]
    fn reports_every_failing_field() {
        let sample = Sample { name: Some("   ".into()), size: Some(11) };
        let errors = validate(&sample).unwrap_err();

        assert_eq!(errors.fields().collect::<Vec<_>>(), vec!["name", "size"]);
        assert_eq!(errors.messages("name"), ["name is required"]);
        assert_eq!(errors.messages("size"), ["size out of range"]);
    }

    #[test]
    fn missing_fields_only_fail_required() {
        let sample = Sample { name: None, size: None };
        let errors = validate(&sample).unwrap_err();

        assert_eq!(errors.messages("name"), ["name is required"]);
        assert_eq!(errors.messages("size"), ["size is required"]);
    }

    #[test]
    fn max_length_counts_characters_not_bytes() {
        let sample = Sample { name: Some("ação!".into()), size: Some(1) };
        assert!(validate(&sample).is_ok());

        let sample = Sample { name: Some("açãooo".into()), size: Some(1) };
        assert_eq!(validate(&sample).unwrap_err().messages("name"), ["name too long"]);
    }

    #[test]
    fn display_joins_messages() {
        let mut errors = ValidationErrors::single("b", "second");
        errors.add("a", "first");
        assert_eq!(errors.to_string(), "a: first; b: second");
    }
}
