use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Payload for `POST /api/v1/shifter/schedule/`
///
/// Absent query parameters stay `None` and are sent as `null`, never dropped.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleQuery {
    pub course_name: Option<String>,
    pub course_semester: Option<String>,
    pub course_years: Option<String>,
}

impl ScheduleQuery {
    pub const COURSE_PARAM: &'static str = "course";
    pub const SEMESTER_PARAM: &'static str = "sem";
    pub const YEAR_PARAM: &'static str = "year";

    /// Build a query from decoded `key=value` pairs.
    /// The first occurrence of a key wins, later duplicates are ignored.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let mut query = Self::default();

        for (key, value) in pairs {
            let slot = match key.as_ref() {
                Self::COURSE_PARAM => &mut query.course_name,
                Self::SEMESTER_PARAM => &mut query.course_semester,
                Self::YEAR_PARAM => &mut query.course_years,
                _ => continue,
            };
            if slot.is_none() {
                *slot = Some(value.into());
            }
        }

        query
    }
}

/// Error body returned by the backend on a non-success status.
///
/// `detail` is usually a string or an object with a `msg` field. Validation
/// failures send a list of such objects.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct BackendErrorBody {
    #[serde(default)]
    pub detail: Option<Value>,
}

impl BackendErrorBody {
    /// Human-readable message carried by the body, if any
    pub fn message(&self) -> Option<String> {
        match self.detail.as_ref()? {
            Value::Null => None,
            Value::String(text) => Some(text.clone()),
            Value::Object(fields) => match fields.get("msg").and_then(Value::as_str) {
                Some(msg) if !msg.is_empty() => Some(msg.to_string()),
                _ => Some(Value::Object(fields.clone()).to_string()),
            },
            Value::Array(items) => {
                let messages: Vec<&str> = items
                    .iter()
                    .filter_map(|item| item.get("msg").and_then(Value::as_str))
                    .collect();
                if messages.is_empty() {
                    None
                } else {
                    Some(messages.join("; "))
                }
            }
            other => Some(other.to_string()),
        }
    }
}
