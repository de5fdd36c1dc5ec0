use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Priority of a task. Persisted under the canonical tokens the existing
/// data files carry ("Alta", "Média", "Baixa"); the numeric rank exists
/// only for ordering and is never written out.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Priority {
    #[serde(rename = "Alta")]
    High,
    #[serde(rename = "Média")]
    Medium,
    #[serde(rename = "Baixa")]
    Low,
}

impl Priority {
    /// Every level, highest rank first.
    pub const ALL: [Priority; 3] = [Priority::High, Priority::Medium, Priority::Low];

    /// Sort rank: High=3, Medium=2, Low=1.
    pub fn rank(&self) -> u8 {
        match self {
            Priority::High => 3,
            Priority::Medium => 2,
            Priority::Low => 1,
        }
    }

    /// Canonical token, the one stored on disk and shown in listings.
    pub fn token(&self) -> &'static str {
        match self {
            Priority::High => "Alta",
            Priority::Medium => "Média",
            Priority::Low => "Baixa",
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

impl FromStr for Priority {
    type Err = ValidationError;

    /// Normalizes case (first letter upper, rest lower) before requiring
    /// membership in the closed set, so "alta" and "BAIXA" pass while
    /// "Urgente" is rejected.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match capitalize(s.trim()).as_str() {
            "Alta" => Ok(Priority::High),
            "Média" => Ok(Priority::Medium),
            "Baixa" => Ok(Priority::Low),
            _ => Err(ValidationError::InvalidPriority(s.trim().to_string())),
        }
    }
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.as_str().to_lowercase().chars())
            .collect(),
        None => String::new(),
    }
}

/// A single task record. The serde renames pin the field names of the
/// existing JSON files, so old data keeps loading unchanged.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Task {
    #[serde(rename = "descricao")]
    pub description: String,
    #[serde(rename = "tempo_estimado")]
    pub estimated_minutes: u32,
    #[serde(rename = "prioridade")]
    pub priority: Priority,
    #[serde(
        rename = "data_conclusao",
        default,
        skip_serializing_if = "Option::is_none",
        with = "br_date"
    )]
    pub due_date: Option<NaiveDate>,
}

impl Task {
    pub fn new(
        description: String,
        estimated_minutes: u32,
        priority: Priority,
        due_date: Option<NaiveDate>,
    ) -> Self {
        Self {
            description,
            estimated_minutes,
            priority,
            due_date,
        }
    }
}

/// Due dates are stored as dd/mm/yyyy strings, the existing files'
/// encoding, not chrono's default ISO form.
mod br_date {
    use chrono::NaiveDate;
    use serde::{Deserialize, Deserializer, Serializer};

    use crate::time::DATE_FORMAT;

    pub fn serialize<S>(date: &Option<NaiveDate>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match date {
            Some(d) => serializer.serialize_str(&d.format(DATE_FORMAT).to_string()),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw: Option<String> = Option::deserialize(deserializer)?;
        raw.map(|s| NaiveDate::parse_from_str(&s, DATE_FORMAT).map_err(serde::de::Error::custom))
            .transpose()
    }
}
