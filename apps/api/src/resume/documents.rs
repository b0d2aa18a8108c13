//! Static mapping from résumé file name to its typed record.

use std::collections::BTreeMap;

use bytes::Bytes;
use serde::de::DeserializeOwned;

use super::ResumeError;
use crate::models::resume::{About, Education, Experience, Projects, ResumeBundle, Skills};

/// Every document that makes up a bundle, in fetch order.
pub const DOCUMENT_FILES: [&str; 5] = [
    About::FILE_NAME,
    Experience::FILE_NAME,
    Projects::FILE_NAME,
    Skills::FILE_NAME,
    Education::FILE_NAME,
];

/// A record that is stored as one JSON file in the content repository.
pub trait ResumeDocument: DeserializeOwned {
    const FILE_NAME: &'static str;
}

impl ResumeDocument for About {
    const FILE_NAME: &'static str = "about.json";
}

impl ResumeDocument for Experience {
    const FILE_NAME: &'static str = "experience.json";
}

impl ResumeDocument for Projects {
    const FILE_NAME: &'static str = "projects.json";
}

impl ResumeDocument for Skills {
    const FILE_NAME: &'static str = "skills.json";
}

impl ResumeDocument for Education {
    const FILE_NAME: &'static str = "education.json";
}

pub fn decode_document<T: ResumeDocument>(raw: &[u8]) -> Result<T, ResumeError> {
    serde_json::from_slice(raw).map_err(|source| ResumeError::Parse {
        file: T::FILE_NAME,
        source,
    })
}

/// Undecoded document bodies keyed by file name, exactly as served.
#[derive(Debug, Clone, Default)]
pub struct RawDocuments {
    docs: BTreeMap<&'static str, Bytes>,
}

impl RawDocuments {
    pub fn insert(&mut self, file: &'static str, body: Bytes) {
        self.docs.insert(file, body);
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &Bytes)> {
        self.docs.iter().map(|(file, body)| (*file, body))
    }

    fn decode<T: ResumeDocument>(&self) -> Result<T, ResumeError> {
        let raw = self
            .docs
            .get(T::FILE_NAME)
            .ok_or(ResumeError::Missing(T::FILE_NAME))?;
        decode_document(raw)
    }

    /// Decodes all five documents. Fails on the first missing or invalid one.
    pub fn to_bundle(&self) -> Result<ResumeBundle, ResumeError> {
        Ok(ResumeBundle {
            about: self.decode()?,
            experience: self.decode()?,
            projects: self.decode()?,
            skills: self.decode()?,
            education: self.decode()?,
        })
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_files_are_distinct() {
        let mut files = DOCUMENT_FILES.to_vec();
        files.sort();
        files.dedup();
        assert_eq!(files.len(), 5);
    }

    #[test]
    fn test_fixture_documents_decode() {
        let bundle = fixtures::bundle();
        assert_eq!(bundle.skills.technical_skills, vec!["Rust", "Go", "PostgreSQL"]);
        assert_eq!(bundle.education.entries.len(), 2);
    }

    #[test]
    fn test_missing_document_is_reported_by_name() {
        let mut raw = RawDocuments::default();
        raw.insert("about.json", Bytes::from_static(fixtures::ABOUT.as_bytes()));
        let err = raw.to_bundle().unwrap_err();
        assert!(matches!(err, ResumeError::Missing("experience.json")));
    }

    #[test]
    fn test_incomplete_documents_still_decode() {
        let projects = decode_document::<Projects>(
            br#"{"title":"Projects","entries":[{"title":"x","description":"d"}]}"#,
        )
        .unwrap();
        assert_eq!(projects.entries[0].technologies, "");

        let skills =
            decode_document::<Skills>(br#"{"title":"Skills","technicalSkills":null}"#).unwrap();
        assert!(skills.technical_skills.is_empty());
    }

    #[test]
    fn test_schema_mismatch_names_the_file() {
        let mut raw = fixtures::raw_documents();
        raw.insert("skills.json", Bytes::from_static(br#"{"title": 3}"#));
        let err = raw.to_bundle().unwrap_err();
        match err {
            ResumeError::Parse { file, .. } => assert_eq!(file, "skills.json"),
            other => panic!("unexpected error: {other}"),
        }
    }
}
