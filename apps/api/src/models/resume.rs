//! Record types for each resume section, plus the `Resource` trait that
//! drives required-field validation and per-field patching.
//!
//! Field updates go through an explicit per-kind allow-list (`set_field`)
//! rather than anything reflective; an unknown key is a validation error.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::errors::AppError;

/// A resume record kind with a fixed set of required fields.
///
/// `FIELDS` is the canonical field order; it is used both to report
/// missing fields on create and as the patch allow-list.
pub trait Resource: Clone + Serialize + Send + Sync + 'static {
    /// Route segment and JSON-file key, lowercase.
    const KIND: &'static str;
    /// Capitalized name used in "<Display> not found" messages.
    const DISPLAY: &'static str;
    const FIELDS: &'static [&'static str];

    /// Builds a record from a JSON object. Every required field must be
    /// present; unrecognized keys are ignored.
    fn from_fields(fields: &Map<String, Value>) -> Result<Self, AppError>;

    /// Overwrites a single field in place. Unknown keys are rejected.
    fn set_field(&mut self, key: &str, value: &Value) -> Result<(), AppError>;

    /// Rejects the object if any required field is absent, listing every
    /// missing field name (not just the first).
    fn check_missing(fields: &Map<String, Value>) -> Result<(), AppError> {
        let missing: Vec<&str> = Self::FIELDS
            .iter()
            .copied()
            .filter(|f| !fields.contains_key(*f))
            .collect();
        if missing.is_empty() {
            Ok(())
        } else {
            Err(AppError::Validation(format!(
                "Missing fields: {}",
                missing.join(", ")
            )))
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub name: String,
    pub phone_number: String,
    pub email_address: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Experience {
    pub title: String,
    pub company: String,
    pub start_date: String,
    pub end_date: String,
    pub description: String,
    pub logo: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Education {
    pub course: String,
    pub school: String,
    pub start_date: String,
    pub end_date: String,
    pub grade: String,
    pub logo: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Skill {
    pub name: String,
    pub proficiency: String,
    pub logo: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub title: String,
    pub description: String,
    pub technologies: Vec<String>,
    pub link: String,
}

/// The full resume dataset, as stored in the optional backing file.
/// Sections absent from the file default to empty.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ResumeData {
    #[serde(default)]
    pub user: Vec<User>,
    #[serde(default)]
    pub experience: Vec<Experience>,
    #[serde(default)]
    pub education: Vec<Education>,
    #[serde(default)]
    pub skill: Vec<Skill>,
    #[serde(default)]
    pub project: Vec<Project>,
}

impl Resource for User {
    const KIND: &'static str = "user";
    const DISPLAY: &'static str = "User";
    const FIELDS: &'static [&'static str] = &["name", "phone_number", "email_address"];

    fn from_fields(fields: &Map<String, Value>) -> Result<Self, AppError> {
        Self::check_missing(fields)?;
        Ok(User {
            name: string_field(fields, "name")?,
            phone_number: string_field(fields, "phone_number")?,
            email_address: string_field(fields, "email_address")?,
        })
    }

    fn set_field(&mut self, key: &str, value: &Value) -> Result<(), AppError> {
        match key {
            "name" => self.name = string_value(key, value)?,
            "phone_number" => self.phone_number = string_value(key, value)?,
            "email_address" => self.email_address = string_value(key, value)?,
            _ => return Err(invalid_field(key)),
        }
        Ok(())
    }
}

impl Resource for Experience {
    const KIND: &'static str = "experience";
    const DISPLAY: &'static str = "Experience";
    const FIELDS: &'static [&'static str] = &[
        "title",
        "company",
        "start_date",
        "end_date",
        "description",
        "logo",
    ];

    fn from_fields(fields: &Map<String, Value>) -> Result<Self, AppError> {
        Self::check_missing(fields)?;
        Ok(Experience {
            title: string_field(fields, "title")?,
            company: string_field(fields, "company")?,
            start_date: string_field(fields, "start_date")?,
            end_date: string_field(fields, "end_date")?,
            description: string_field(fields, "description")?,
            logo: string_field(fields, "logo")?,
        })
    }

    fn set_field(&mut self, key: &str, value: &Value) -> Result<(), AppError> {
        match key {
            "title" => self.title = string_value(key, value)?,
            "company" => self.company = string_value(key, value)?,
            "start_date" => self.start_date = string_value(key, value)?,
            "end_date" => self.end_date = string_value(key, value)?,
            "description" => self.description = string_value(key, value)?,
            "logo" => self.logo = string_value(key, value)?,
            _ => return Err(invalid_field(key)),
        }
        Ok(())
    }
}

impl Resource for Education {
    const KIND: &'static str = "education";
    const DISPLAY: &'static str = "Education";
    const FIELDS: &'static [&'static str] = &[
        "course",
        "school",
        "start_date",
        "end_date",
        "grade",
        "logo",
    ];

    fn from_fields(fields: &Map<String, Value>) -> Result<Self, AppError> {
        Self::check_missing(fields)?;
        Ok(Education {
            course: string_field(fields, "course")?,
            school: string_field(fields, "school")?,
            start_date: string_field(fields, "start_date")?,
            end_date: string_field(fields, "end_date")?,
            grade: string_field(fields, "grade")?,
            logo: string_field(fields, "logo")?,
        })
    }

    fn set_field(&mut self, key: &str, value: &Value) -> Result<(), AppError> {
        match key {
            "course" => self.course = string_value(key, value)?,
            "school" => self.school = string_value(key, value)?,
            "start_date" => self.start_date = string_value(key, value)?,
            "end_date" => self.end_date = string_value(key, value)?,
            "grade" => self.grade = string_value(key, value)?,
            "logo" => self.logo = string_value(key, value)?,
            _ => return Err(invalid_field(key)),
        }
        Ok(())
    }
}

impl Resource for Skill {
    const KIND: &'static str = "skill";
    const DISPLAY: &'static str = "Skill";
    const FIELDS: &'static [&'static str] = &["name", "proficiency", "logo"];

    fn from_fields(fields: &Map<String, Value>) -> Result<Self, AppError> {
        Self::check_missing(fields)?;
        Ok(Skill {
            name: string_field(fields, "name")?,
            proficiency: string_field(fields, "proficiency")?,
            logo: string_field(fields, "logo")?,
        })
    }

    fn set_field(&mut self, key: &str, value: &Value) -> Result<(), AppError> {
        match key {
            "name" => self.name = string_value(key, value)?,
            "proficiency" => self.proficiency = string_value(key, value)?,
            "logo" => self.logo = string_value(key, value)?,
            _ => return Err(invalid_field(key)),
        }
        Ok(())
    }
}

impl Resource for Project {
    const KIND: &'static str = "project";
    const DISPLAY: &'static str = "Project";
    const FIELDS: &'static [&'static str] = &["title", "description", "technologies", "link"];

    fn from_fields(fields: &Map<String, Value>) -> Result<Self, AppError> {
        Self::check_missing(fields)?;
        Ok(Project {
            title: string_field(fields, "title")?,
            description: string_field(fields, "description")?,
            technologies: string_list_field(fields, "technologies")?,
            link: string_field(fields, "link")?,
        })
    }

    fn set_field(&mut self, key: &str, value: &Value) -> Result<(), AppError> {
        match key {
            "title" => self.title = string_value(key, value)?,
            "description" => self.description = string_value(key, value)?,
            "technologies" => self.technologies = string_list_value(key, value)?,
            "link" => self.link = string_value(key, value)?,
            _ => return Err(invalid_field(key)),
        }
        Ok(())
    }
}

fn invalid_field(key: &str) -> AppError {
    AppError::Validation(format!("Invalid field: {key}"))
}

fn string_value(key: &str, value: &Value) -> Result<String, AppError> {
    value
        .as_str()
        .map(str::to_string)
        .ok_or_else(|| AppError::Validation(format!("Invalid value for field: {key}")))
}

fn string_list_value(key: &str, value: &Value) -> Result<Vec<String>, AppError> {
    value
        .as_array()
        .map(|items| {
            items
                .iter()
                .map(|v| string_value(key, v))
                .collect::<Result<Vec<_>, _>>()
        })
        .ok_or_else(|| AppError::Validation(format!("Invalid value for field: {key}")))?
}

// Presence is guaranteed by check_missing, so indexing is safe here.
fn string_field(fields: &Map<String, Value>, key: &str) -> Result<String, AppError> {
    string_value(key, &fields[key])
}

fn string_list_field(fields: &Map<String, Value>, key: &str) -> Result<Vec<String>, AppError> {
    string_list_value(key, &fields[key])
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn object(value: Value) -> Map<String, Value> {
        value.as_object().unwrap().clone()
    }

    #[test]
    fn from_fields_lists_every_missing_field() {
        let fields = object(json!({ "description": "A sample project" }));
        let err = Project::from_fields(&fields).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Missing fields: title, technologies, link"
        );
    }

    #[test]
    fn from_fields_ignores_unrecognized_keys() {
        let fields = object(json!({
            "title": "Sample Project",
            "description": "A sample project",
            "technologies": ["Rust", "Axum"],
            "link": "https://example.com",
            "stars": 42
        }));
        let project = Project::from_fields(&fields).unwrap();
        assert_eq!(project.title, "Sample Project");
        assert_eq!(project.technologies, vec!["Rust", "Axum"]);
    }

    #[test]
    fn from_fields_rejects_wrongly_typed_values() {
        let fields = object(json!({
            "title": "Sample Project",
            "description": "A sample project",
            "technologies": "Rust",
            "link": "https://example.com"
        }));
        let err = Project::from_fields(&fields).unwrap_err();
        assert_eq!(err.to_string(), "Invalid value for field: technologies");
    }

    #[test]
    fn set_field_rejects_unknown_keys() {
        let mut skill = Skill {
            name: "Python".into(),
            proficiency: "1-2 Years".into(),
            logo: "example-logo.png".into(),
        };
        let err = skill.set_field("rating", &json!("high")).unwrap_err();
        assert_eq!(err.to_string(), "Invalid field: rating");
        assert_eq!(skill.name, "Python");
    }

    #[test]
    fn resume_data_sections_default_to_empty() {
        let data: ResumeData = serde_json::from_value(json!({
            "user": [{
                "name": "Jackie Stewart",
                "phone_number": "+4478322678",
                "email_address": "jack@resume.com"
            }]
        }))
        .unwrap();
        assert_eq!(data.user.len(), 1);
        assert!(data.experience.is_empty());
        assert!(data.project.is_empty());
    }
}
