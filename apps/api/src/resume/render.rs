//! Renders a `ResumeBundle` into the system prompt.
//!
//! Pure and deterministic: the same bundle and options always produce the
//! same bytes. Section order is fixed: About, Skills, Experience, Education,
//! Projects, then the closing sections.

use super::prompts::{ABOUT_THIS_BOT, FRAMING_TEMPLATE};
use crate::models::resume::{About, Education, Experience, Projects, ResumeBundle, Skills};

/// Values that are not part of the résumé documents themselves.
#[derive(Debug, Clone, Copy)]
pub struct PromptOptions<'a> {
    pub owner: &'a str,
    /// Rendered as a "Visa Status" section when set.
    pub visa_status: Option<&'a str>,
}

pub fn build_system_prompt(bundle: &ResumeBundle, options: &PromptOptions<'_>) -> String {
    let mut out = FRAMING_TEMPLATE.replace("{owner}", options.owner);
    out.push_str("\n\n");

    render_about(&mut out, &bundle.about);
    render_skills(&mut out, &bundle.skills);
    render_experience(&mut out, &bundle.experience);
    render_education(&mut out, &bundle.education);
    render_projects(&mut out, &bundle.projects);

    if let Some(visa) = options.visa_status {
        out.push_str("\n## Visa Status\n");
        out.push_str(visa);
        out.push('\n');
    }

    out.push_str("\n## About this Bot\n");
    out.push_str(&ABOUT_THIS_BOT.replace("{owner}", options.owner));
    out.push('\n');

    out
}

fn render_about(out: &mut String, about: &About) {
    out.push_str(&format!(
        "## {}\n{}\n{} {}\n\n",
        about.title, about.paragraph1, about.languages, about.languages_content
    ));
}

fn render_skills(out: &mut String, skills: &Skills) {
    out.push_str(&format!("## {}\n", skills.title));
    for skill in &skills.technical_skills {
        out.push_str(&format!("- {skill}\n"));
    }
    out.push('\n');
}

fn render_experience(out: &mut String, experience: &Experience) {
    out.push_str(&format!("## {}\n", experience.title));
    for job in &experience.jobs {
        out.push_str(&format!(
            "- **{} at {}** [{}]:\n",
            job.title, job.company, job.period
        ));
        for responsibility in &job.responsibilities {
            out.push_str(&format!("  {responsibility}\n"));
        }
        out.push('\n');
    }
}

fn render_education(out: &mut String, education: &Education) {
    out.push_str(&format!("## {}\n", education.title));
    for entry in &education.entries {
        out.push_str(&format!(
            "- **{}**, {} ({}). {}\n",
            entry.degree, entry.institution, entry.period, entry.description
        ));
        if let Some(info) = &entry.additional_info {
            out.push_str(&format!("  **{}**\n", info.title));
            for item in &info.items {
                out.push_str(&format!("  - {item}\n"));
            }
        }
    }
    out.push('\n');
}

fn render_projects(out: &mut String, projects: &Projects) {
    out.push_str(&format!("## {}\n", projects.title));
    for project in &projects.entries {
        out.push_str(&format!(
            "- **{}** ({})\n  {}\n",
            project.title, project.technologies, project.description
        ));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resume::documents::fixtures;

    const OPTIONS: PromptOptions<'static> = PromptOptions {
        owner: "Arda",
        visa_status: None,
    };

    #[test]
    fn test_render_is_deterministic() {
        let first = build_system_prompt(&fixtures::bundle(), &OPTIONS);
        for _ in 0..5 {
            assert_eq!(build_system_prompt(&fixtures::bundle(), &OPTIONS), first);
        }
    }

    #[test]
    fn test_sections_in_fixed_order() {
        let prompt = build_system_prompt(&fixtures::bundle(), &OPTIONS);
        let positions: Vec<usize> = [
            "## About Me",
            "## Skills",
            "## Experience",
            "## Education",
            "## Projects",
            "## About this Bot",
        ]
        .iter()
        .map(|heading| prompt.find(heading).unwrap_or_else(|| panic!("{heading} missing")))
        .collect();

        assert!(positions.windows(2).all(|w| w[0] < w[1]), "{positions:?}");
        assert!(prompt.starts_with("You are Arda's AI Assistant."));
    }

    #[test]
    fn test_about_and_skills_layout() {
        let prompt = build_system_prompt(&fixtures::bundle(), &OPTIONS);
        assert!(prompt.contains(
            "## About Me\nBackend engineer with fifteen years of experience.\nLanguages: English, Japanese, Turkish\n\n"
        ));
        assert!(prompt.contains("## Skills\n- Rust\n- Go\n- PostgreSQL\n\n"));
    }

    #[test]
    fn test_experience_layout() {
        let prompt = build_system_prompt(&fixtures::bundle(), &OPTIONS);
        assert!(prompt.contains(
            "- **Senior Engineer at Acme** [2020 - Present]:\n  Built the billing service.\n  Mentored new hires.\n\n"
        ));
    }

    #[test]
    fn test_additional_info_only_when_present() {
        let prompt = build_system_prompt(&fixtures::bundle(), &OPTIONS);
        assert!(prompt.contains(
            "- **MSc Computer Science**, Tokyo Tech (2008 - 2010). Distributed systems.\n  **Scholarships**\n  - MEXT Scholarship\n"
        ));
        assert!(prompt.contains(
            "- **BSc Computer Engineering**, METU (2002 - 2006). Graduated with honours.\n\n## Projects"
        ));
        assert_eq!(prompt.matches("**Scholarships**").count(), 1);
    }

    #[test]
    fn test_projects_layout() {
        let prompt = build_system_prompt(&fixtures::bundle(), &OPTIONS);
        assert!(prompt.contains("## Projects\n- **ai.arda.tr** (Rust, Gemini)\n  Résumé chat bot.\n"));
    }

    #[test]
    fn test_visa_section_is_optional() {
        let without = build_system_prompt(&fixtures::bundle(), &OPTIONS);
        assert!(!without.contains("## Visa Status"));

        let with = build_system_prompt(
            &fixtures::bundle(),
            &PromptOptions {
                owner: "Arda",
                visa_status: Some("Permanent Resident (Japan)"),
            },
        );
        assert!(with.contains("\n## Visa Status\nPermanent Resident (Japan)\n\n## About this Bot\n"));
    }

    #[test]
    fn test_owner_substituted_everywhere() {
        let prompt = build_system_prompt(
            &fixtures::bundle(),
            &PromptOptions {
                owner: "Kim",
                visa_status: None,
            },
        );
        assert!(!prompt.contains("{owner}"));
        assert!(prompt.contains("represent Kim in the best possible light"));
    }
}
