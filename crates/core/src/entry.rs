use serde_json::Value;

/// One instruction within a tactic.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Step {
    pub description: String,

    /// Illustrative image URL.
    pub image: Option<String>,

    /// CSS `max-width` value applied to the image.
    pub image_size: Option<String>,
}

impl Step {
    /// Reads a step from raw JSON. A missing description becomes empty text;
    /// empty `image`/`image_size` strings are treated as absent.
    pub fn from_value(value: &Value) -> Self {
        Self {
            description: value.get("description").map(text_of).unwrap_or_default(),
            image: value.get("image").and_then(non_empty_str),
            image_size: value.get("image_size").and_then(non_empty_str),
        }
    }
}

/// The shapes a tactic entry may be authored in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TacticEntry {
    /// `[step, step, ...]`
    StepList(Vec<Step>),
    /// `{ "steps": [step, ...] }`
    StepsField(Vec<Step>),
    /// `{ "description": ..., "image": ... }`
    InlineStep(Step),
    Unrecognized,
}

impl TacticEntry {
    /// Resolves the shape once. An array wins over everything; a `steps` array
    /// wins over an inline `description`.
    pub fn classify(value: &Value) -> Self {
        if let Some(items) = value.as_array() {
            return TacticEntry::StepList(items.iter().map(Step::from_value).collect());
        }

        if let Some(items) = value.get("steps").and_then(Value::as_array) {
            return TacticEntry::StepsField(items.iter().map(Step::from_value).collect());
        }

        if value.is_object() && value.get("description").is_some_and(is_truthy) {
            return TacticEntry::InlineStep(Step::from_value(value));
        }

        TacticEntry::Unrecognized
    }

    /// Ordered steps as the map panel sees them: an inline entry is a single step.
    pub fn steps(&self) -> &[Step] {
        match self {
            TacticEntry::StepList(steps) | TacticEntry::StepsField(steps) => steps,
            TacticEntry::InlineStep(step) => std::slice::from_ref(step),
            TacticEntry::Unrecognized => &[],
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            TacticEntry::StepList(_) => "step_list",
            TacticEntry::StepsField(_) => "steps_field",
            TacticEntry::InlineStep(_) => "inline_step",
            TacticEntry::Unrecognized => "unrecognized",
        }
    }
}

/// JavaScript-style truthiness for JSON values.
pub(crate) fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|x| x != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

fn non_empty_str(value: &Value) -> Option<String> {
    value
        .as_str()
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

fn text_of(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) if n.is_i64() || n.is_u64() => n.to_string(),
        Value::Number(n) => n.as_f64().map(number_text).unwrap_or_default(),
        Value::Bool(b) => b.to_string(),
        _ => String::new(),
    }
}

/// Formats a float the way JavaScript stringifies it for whole values:
/// `1.0` is `1`, `-0.0` is `0`.
fn number_text(x: f64) -> String {
    if x == 0.0 {
        "0".to_string()
    } else if x.fract() == 0.0 && x.abs() < 1e21 {
        format!("{x:.0}")
    } else {
        x.to_string()
    }
}
