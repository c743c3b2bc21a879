//! In-memory resume store.
//!
//! One ordered `ResourceCollection` per resume section, owned by a
//! `ResumeStore` and shared between handlers as `Arc<RwLock<ResumeStore>>`.
//! Records are addressed by position: an id is only valid until the next
//! mutation, and deleting index `k` shifts every later id down by one.
//! The lock is the single-writer discipline; no guard is held across an
//! await point.

use std::sync::{Arc, RwLock};

use serde_json::{Map, Value};

use crate::errors::AppError;
use crate::models::resume::{Education, Experience, Project, Resource, ResumeData, Skill, User};

pub type SharedStore = Arc<RwLock<ResumeStore>>;

/// An ordered collection of records for one resume section.
#[derive(Debug, Clone)]
pub struct ResourceCollection<T> {
    items: Vec<T>,
}

impl<T> Default for ResourceCollection<T> {
    fn default() -> Self {
        Self { items: Vec::new() }
    }
}

impl<T: Resource> ResourceCollection<T> {
    pub fn new(items: Vec<T>) -> Self {
        Self { items }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Full ordered snapshot: insertion order, or the caller-supplied order
    /// after a `replace_all`.
    pub fn list(&self) -> Vec<T> {
        self.items.clone()
    }

    /// Validates that every required field is present (listing all missing
    /// names at once), appends the record, and returns it with its assigned
    /// id: the pre-append collection length, as a string.
    pub fn create(&mut self, fields: &Map<String, Value>) -> Result<(String, T), AppError> {
        let record = T::from_fields(fields)?;
        let id = self.items.len().to_string();
        self.items.push(record.clone());
        Ok((id, record))
    }

    /// Resolves an id token and returns the record at that position.
    pub fn get(&self, id_token: Option<&str>) -> Result<(usize, T), AppError> {
        let index = self.resolve_id(id_token)?;
        Ok((index, self.items[index].clone()))
    }

    /// Applies `updates` in body order. Stops at the first key outside the
    /// field allow-list; fields applied before it remain applied.
    pub fn patch(
        &mut self,
        id_token: Option<&str>,
        updates: &Map<String, Value>,
    ) -> Result<(usize, T), AppError> {
        let index = self.resolve_id(id_token)?;
        let record = &mut self.items[index];
        for (key, value) in updates {
            record.set_field(key, value)?;
        }
        Ok((index, record.clone()))
    }

    /// Removes the record at the resolved position; subsequent ids shift
    /// down by one.
    pub fn delete(&mut self, id_token: Option<&str>) -> Result<(), AppError> {
        let index = self.resolve_id(id_token)?;
        self.items.remove(index);
        Ok(())
    }

    /// Discards the collection and replaces it with the supplied ordered
    /// records.
    pub fn replace_all(&mut self, items: Vec<T>) {
        self.items = items;
    }

    /// Id validation, in order: presence, lexical form, range. Each failure
    /// has its own message and callers surface the first one verbatim.
    fn resolve_id(&self, id_token: Option<&str>) -> Result<usize, AppError> {
        let token = id_token.ok_or_else(|| AppError::Validation("Missing id".to_string()))?;
        let index: usize = token
            .parse()
            .map_err(|_| AppError::Validation("Invalid id".to_string()))?;
        if index >= self.items.len() {
            return Err(AppError::Validation(format!("{} not found", T::DISPLAY)));
        }
        Ok(index)
    }
}

impl ResourceCollection<User> {
    /// Users are identified by email address, not position.
    pub fn find_by_email(&self, email: &str) -> Option<usize> {
        self.items.iter().position(|u| u.email_address == email)
    }

    pub fn replace_at(&mut self, index: usize, user: User) -> User {
        self.items[index] = user;
        self.items[index].clone()
    }

    pub fn push(&mut self, user: User) {
        self.items.push(user);
    }
}

/// All resume sections, one collection each.
#[derive(Debug, Clone, Default)]
pub struct ResumeStore {
    pub user: ResourceCollection<User>,
    pub experience: ResourceCollection<Experience>,
    pub education: ResourceCollection<Education>,
    pub skill: ResourceCollection<Skill>,
    pub project: ResourceCollection<Project>,
}

impl ResumeStore {
    pub fn from_data(data: ResumeData) -> Self {
        Self {
            user: ResourceCollection::new(data.user),
            experience: ResourceCollection::new(data.experience),
            education: ResourceCollection::new(data.education),
            skill: ResourceCollection::new(data.skill),
            project: ResourceCollection::new(data.project),
        }
    }

    /// The default dataset served when no backing file is configured.
    pub fn seed() -> Self {
        Self::from_data(ResumeData {
            user: vec![User {
                name: "Jackie Stewart".into(),
                phone_number: "+4478322678".into(),
                email_address: "jack@resume.com".into(),
            }],
            experience: vec![Experience {
                title: "Software Developer".into(),
                company: "A Cool Company".into(),
                start_date: "October 2022".into(),
                end_date: "Present".into(),
                description: "Writing Python Code".into(),
                logo: "example-logo.png".into(),
            }],
            education: vec![Education {
                course: "Computer Science".into(),
                school: "University of Tech".into(),
                start_date: "September 2019".into(),
                end_date: "July 2022".into(),
                grade: "80%".into(),
                logo: "example-logo.png".into(),
            }],
            skill: vec![Skill {
                name: "Python".into(),
                proficiency: "1-2 Years".into(),
                logo: "example-logo.png".into(),
            }],
            project: vec![],
        })
    }

    pub fn shared(self) -> SharedStore {
        Arc::new(RwLock::new(self))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn project_fields() -> Map<String, Value> {
        json!({
            "title": "Sample Project",
            "description": "A sample project",
            "technologies": ["Rust", "Axum"],
            "link": "https://example.com/sample"
        })
        .as_object()
        .unwrap()
        .clone()
    }

    #[test]
    fn create_assigns_pre_append_length_as_id() {
        let mut projects: ResourceCollection<Project> = ResourceCollection::default();

        let (id, _) = projects.create(&project_fields()).unwrap();
        assert_eq!(id, "0");

        let (id, record) = projects.create(&project_fields()).unwrap();
        assert_eq!(id, "1");
        assert_eq!(projects.len(), 2);
        assert_eq!(projects.list()[1], record);
    }

    #[test]
    fn create_with_missing_fields_leaves_collection_unchanged() {
        let mut projects: ResourceCollection<Project> = ResourceCollection::default();
        let mut fields = project_fields();
        fields.remove("title");

        let err = projects.create(&fields).unwrap_err();
        assert_eq!(err.to_string(), "Missing fields: title");
        assert!(projects.is_empty());
    }

    #[test]
    fn id_validation_order_is_presence_form_range() {
        let projects: ResourceCollection<Project> = ResourceCollection::default();

        assert_eq!(projects.get(None).unwrap_err().to_string(), "Missing id");
        assert_eq!(
            projects.get(Some("abc")).unwrap_err().to_string(),
            "Invalid id"
        );
        assert_eq!(
            projects.get(Some("-1")).unwrap_err().to_string(),
            "Invalid id"
        );
        assert_eq!(
            projects.get(Some("0")).unwrap_err().to_string(),
            "Project not found"
        );
    }

    #[test]
    fn delete_shifts_subsequent_ids_down() {
        let mut projects: ResourceCollection<Project> = ResourceCollection::default();
        for i in 0..3 {
            let mut fields = project_fields();
            fields.insert("title".into(), json!(format!("Project {i}")));
            projects.create(&fields).unwrap();
        }

        projects.delete(Some("1")).unwrap();

        assert_eq!(projects.len(), 2);
        let (_, record) = projects.get(Some("1")).unwrap();
        assert_eq!(record.title, "Project 2");
    }

    #[test]
    fn patch_stops_at_first_invalid_field_without_rollback() {
        let mut projects: ResourceCollection<Project> = ResourceCollection::default();
        projects.create(&project_fields()).unwrap();

        let updates = json!({
            "title": "New Project",
            "bogus": "value",
            "link": "https://example.com/new"
        })
        .as_object()
        .unwrap()
        .clone();

        let err = projects.patch(Some("0"), &updates).unwrap_err();
        assert_eq!(err.to_string(), "Invalid field: bogus");

        let (_, record) = projects.get(Some("0")).unwrap();
        assert_eq!(record.title, "New Project"); // applied before the failure
        assert_eq!(record.link, "https://example.com/sample"); // never reached
    }

    #[test]
    fn replace_all_installs_the_supplied_order() {
        let mut skills: ResourceCollection<Skill> = ResourceCollection::default();
        skills.create(
            json!({ "name": "Python", "proficiency": "1-2 Years", "logo": "a.png" })
                .as_object()
                .unwrap(),
        )
        .unwrap();

        let reordered = vec![
            Skill {
                name: "Rust".into(),
                proficiency: "2-4 Years".into(),
                logo: "b.png".into(),
            },
            Skill {
                name: "Python".into(),
                proficiency: "1-2 Years".into(),
                logo: "a.png".into(),
            },
        ];
        skills.replace_all(reordered.clone());

        assert_eq!(skills.list(), reordered);
    }

    #[test]
    fn find_by_email_matches_users_positionally() {
        let store = ResumeStore::seed();
        assert_eq!(store.user.find_by_email("jack@resume.com"), Some(0));
        assert_eq!(store.user.find_by_email("nobody@resume.com"), None);
    }
}
