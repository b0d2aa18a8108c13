use serde::{Deserialize, Deserializer};

// Content documents are hand-edited; absent fields and `null` lists decode to
// empty values so one incomplete entry does not drop the whole résumé.

/// The "about" document: headline paragraph plus spoken languages.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct About {
    pub title: String,
    pub paragraph1: String,
    pub languages: String,
    pub languages_content: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Job {
    pub title: String,
    pub company: String,
    pub period: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub responsibilities: Vec<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Experience {
    pub title: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub jobs: Vec<Job>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Project {
    pub title: String,
    pub technologies: String,
    pub description: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Projects {
    pub title: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub entries: Vec<Project>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Skills {
    pub title: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub technical_skills: Vec<String>,
}

/// Optional titled list hanging off an education entry (honours, courses, ...).
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AdditionalInfo {
    pub title: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub items: Vec<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct EducationEntry {
    pub degree: String,
    pub institution: String,
    pub period: String,
    pub description: String,
    pub additional_info: Option<AdditionalInfo>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Education {
    pub title: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub entries: Vec<EducationEntry>,
}

/// All five résumé documents. Built in one piece; never partially updated.
#[derive(Debug, Clone)]
pub struct ResumeBundle {
    pub about: About,
    pub experience: Experience,
    pub projects: Projects,
    pub skills: Skills,
    pub education: Education,
}

fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}
