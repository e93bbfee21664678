use serde_json::{Map, Value};

use crate::{input_file::InputFile, requests::Method, Result};

/// Parameters of one Bot API call: scalar/structured fields plus uploads.
///
/// Unset fields are absent (never `null`). Uploads are kept apart so the
/// transport can choose between a JSON body and `multipart/form-data`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Params {
    fields: Map<String, Value>,
    files: Vec<(String, InputFile)>,
}

impl Params {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_method<M: Method>(method: &M) -> Result<Self> {
        let fields = match serde_json::to_value(method)? {
            Value::Object(map) => map,
            Value::Null => Map::new(),
            other => {
                return Err(crate::Error::precondition(format!(
                    "{} payload is not an object: {other}",
                    M::NAME
                )))
            }
        };

        let mut params = Params {
            fields: fields
                .into_iter()
                .filter(|(_, v)| !v.is_null())
                .collect(),
            files: Vec::new(),
        };

        for (name, file) in method.uploads() {
            if file.is_upload() {
                params.fields.remove(name);
                params.files.push((name.to_string(), file.clone()));
            }
        }

        Ok(params)
    }

    /// Set a field; `null` removes it.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) -> &mut Self {
        let key = key.into();
        let value = value.into();
        if value.is_null() {
            self.fields.remove(&key);
        } else {
            self.fields.insert(key, value);
        }
        self
    }

    /// Add a file field. References go into the field map as strings.
    pub fn insert_file(&mut self, key: impl Into<String>, file: InputFile) -> &mut Self {
        let key = key.into();
        match file {
            InputFile::FileId(s) | InputFile::Url(s) => {
                self.fields.insert(key, Value::String(s));
            }
            upload => {
                self.fields.remove(&key);
                self.files.push((key, upload));
            }
        }
        self
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    pub fn fields(&self) -> &Map<String, Value> {
        &self.fields
    }

    pub fn files(&self) -> &[(String, InputFile)] {
        &self.files
    }

    pub fn has_uploads(&self) -> bool {
        !self.files.is_empty()
    }

    pub fn to_json(&self) -> Value {
        Value::Object(self.fields.clone())
    }

    /// Text parts of a multipart body: strings as-is, everything else
    /// (numbers, booleans, markup, arrays) JSON-encoded.
    pub fn form_fields(&self) -> Vec<(String, String)> {
        self.fields
            .iter()
            .map(|(k, v)| {
                let text = match v {
                    Value::String(s) => s.clone(),
                    other => other.to_string(),
                };
                (k.clone(), text)
            })
            .collect()
    }

    pub fn into_parts(self) -> (Map<String, Value>, Vec<(String, InputFile)>) {
        (self.fields, self.files)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn insert_skips_null_and_references_stay_fields() {
        let mut p = Params::new();
        p.insert("chat_id", 42)
            .insert("caption", Value::Null)
            .insert_file("photo", InputFile::file_id("AgAD"));

        assert_eq!(p.to_json(), json!({"chat_id": 42, "photo": "AgAD"}));
        assert!(!p.has_uploads());
    }

    #[test]
    fn uploads_are_kept_apart() {
        let mut p = Params::new();
        p.insert("chat_id", 42)
            .insert_file("photo", InputFile::memory("a.png", vec![0u8; 4]));

        assert!(p.has_uploads());
        assert!(p.get("photo").is_none());
        assert_eq!(p.files()[0].0, "photo");
    }

    #[test]
    fn form_fields_encode_non_strings_as_json() {
        let mut p = Params::new();
        p.insert("chat_id", 42)
            .insert("caption", "hi")
            .insert("disable_notification", true)
            .insert("reply_markup", json!({"force_reply": true}));

        let mut fields = p.form_fields();
        fields.sort();
        assert_eq!(
            fields,
            vec![
                ("caption".to_string(), "hi".to_string()),
                ("chat_id".to_string(), "42".to_string()),
                ("disable_notification".to_string(), "true".to_string()),
                (
                    "reply_markup".to_string(),
                    "{\"force_reply\":true}".to_string()
                ),
            ]
        );
    }
}
