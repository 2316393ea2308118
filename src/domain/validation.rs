//! Stateless field validation used by the project form.

/// The value being checked. Length rules only apply to text, range rules
/// only apply to numbers.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue<'a> {
    Text(&'a str),
    Number(i64),
}

/// A field value together with the rules it has to satisfy.
#[derive(Debug, Clone, PartialEq)]
pub struct Validatable<'a> {
    pub value: FieldValue<'a>,
    pub required: bool,
    pub min_length: Option<usize>,
    pub max_length: Option<usize>,
    pub min: Option<i64>,
    pub max: Option<i64>,
}

impl<'a> Validatable<'a> {
    pub fn text(value: &'a str) -> Self {
        Self::with_value(FieldValue::Text(value))
    }

    pub fn number(value: i64) -> Self {
        Self::with_value(FieldValue::Number(value))
    }

    fn with_value(value: FieldValue<'a>) -> Self {
        Self {
            value,
            required: false,
            min_length: None,
            max_length: None,
            min: None,
            max: None,
        }
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub fn min_length(mut self, len: usize) -> Self {
        self.min_length = Some(len);
        self
    }

    pub fn max_length(mut self, len: usize) -> Self {
        self.max_length = Some(len);
        self
    }

    pub fn min(mut self, min: i64) -> Self {
        self.min = Some(min);
        self
    }

    pub fn max(mut self, max: i64) -> Self {
        self.max = Some(max);
        self
    }
}

/// Returns `true` when every rule attached to `input` holds.
pub fn validate(input: &Validatable<'_>) -> bool {
    match input.value {
        FieldValue::Text(text) => {
            let len = text.chars().count();
            if input.required && text.trim().is_empty() {
                return false;
            }
            if input.min_length.is_some_and(|min| len < min) {
                return false;
            }
            if input.max_length.is_some_and(|max| len > max) {
                return false;
            }
            true
        }
        FieldValue::Number(number) => {
            // A number always has a non-empty textual form.
            if input.min.is_some_and(|min| number < min) {
                return false;
            }
            if input.max.is_some_and(|max| number > max) {
                return false;
            }
            true
        }
    }
}
