//! Whole-file JSON loading for the optional resume backing file.

use std::path::Path;

use tracing::warn;

use crate::models::resume::ResumeData;

/// Reads the full dataset from `path`. A missing file or malformed JSON is
/// not fatal: both log a warning and return `None`, and the caller falls
/// back to the seed dataset.
pub fn load_data(path: &Path) -> Option<ResumeData> {
    let contents = match std::fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(e) => {
            warn!("Could not read data file {}: {e}", path.display());
            return None;
        }
    };

    match serde_json::from_str(&contents) {
        Ok(data) => Some(data),
        Err(e) => {
            warn!("Data file {} is not valid JSON: {e}", path.display());
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn loads_a_valid_data_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{
                "user": [{{
                    "name": "Jackie Stewart",
                    "phone_number": "+4478322678",
                    "email_address": "jack@resume.com"
                }}],
                "skill": [{{
                    "name": "Python",
                    "proficiency": "1-2 Years",
                    "logo": "example-logo.png"
                }}]
            }}"#
        )
        .unwrap();

        let data = load_data(file.path()).unwrap();
        assert_eq!(data.user[0].name, "Jackie Stewart");
        assert_eq!(data.skill[0].name, "Python");
        assert!(data.experience.is_empty());
    }

    #[test]
    fn missing_file_returns_none() {
        let dir = tempfile::tempdir().unwrap();
        assert!(load_data(&dir.path().join("no_such_file.json")).is_none());
    }

    #[test]
    fn malformed_json_returns_none() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{{invalid_json}}").unwrap();
        assert!(load_data(file.path()).is_none());
    }
}
