use crate::error::{BotError, Result};
use serde_json::Value;
use std::collections::HashMap;

const BUILTIN_LOCALES: &[(&str, &str)] = &[
    ("en", include_str!("../../locales/en.json")),
    ("fr", include_str!("../../locales/fr.json")),
];

/// A message key plus its named arguments, rendered later in the reader's language.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Text {
    pub key: &'static str,
    pub args: Vec<(&'static str, String)>,
}

impl Text {
    pub fn new(key: &'static str) -> Self {
        Self {
            key,
            args: Vec::new(),
        }
    }

    pub fn arg(mut self, name: &'static str, value: impl ToString) -> Self {
        self.args.push((name, value.to_string()));
        self
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.args
            .iter()
            .find(|(arg, _)| *arg == name)
            .map(|(_, value)| value.as_str())
    }
}

#[derive(Debug)]
pub struct Localization {
    default_language: String,
    tables: HashMap<String, HashMap<String, String>>,
}

impl Localization {
    /// Locales compiled into the binary.
    pub fn builtin(default_language: &str) -> Result<Self> {
        Self::from_sources(default_language, BUILTIN_LOCALES.iter().copied())
    }

    pub fn from_sources<'a>(
        default_language: &str,
        sources: impl IntoIterator<Item = (&'a str, &'a str)>,
    ) -> Result<Self> {
        let mut tables = HashMap::new();
        for (language_id, json) in sources {
            let root: Value = serde_json::from_str(json)?;
            let mut table = HashMap::new();
            flatten("", &root, &mut table);
            tables.insert(language_id.to_string(), table);
        }

        if !tables.contains_key(default_language) {
            return Err(BotError::Config(format!(
                "No locale available for default language '{}'",
                default_language
            )));
        }

        Ok(Self {
            default_language: default_language.to_string(),
            tables,
        })
    }

    pub fn default_language(&self) -> &str {
        &self.default_language
    }

    pub fn has_language(&self, language_id: &str) -> bool {
        self.tables.contains_key(language_id)
    }

    /// Look up `key` for `language_id` and fill `{name}` placeholders.
    /// Unknown languages use the default one; unknown keys come back verbatim.
    pub fn get_string(&self, language_id: &str, key: &str, args: &[(&str, String)]) -> String {
        let template = self
            .tables
            .get(language_id)
            .and_then(|table| table.get(key))
            .or_else(|| {
                self.tables
                    .get(&self.default_language)
                    .and_then(|table| table.get(key))
            });

        match template {
            Some(template) => args.iter().fold(template.clone(), |acc, (name, value)| {
                acc.replace(&format!("{{{}}}", name), value)
            }),
            None => key.to_string(),
        }
    }

    pub fn render(&self, language_id: &str, text: &Text) -> String {
        self.get_string(language_id, text.key, &text.args)
    }
}

fn flatten(prefix: &str, value: &Value, out: &mut HashMap<String, String>) {
    match value {
        Value::Object(map) => {
            for (name, child) in map {
                let key = if prefix.is_empty() {
                    name.clone()
                } else {
                    format!("{}.{}", prefix, name)
                };
                flatten(&key, child, out);
            }
        }
        Value::String(s) => {
            out.insert(prefix.to_string(), s.clone());
        }
        other => {
            out.insert(prefix.to_string(), other.to_string());
        }
    }
}
