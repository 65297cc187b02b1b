//! Normalization of scraped LinkedIn payloads into the shared profile shape.

use devscope_core::{Certification, Education, Experience, LinkedInProfile};

use crate::types::RawLinkedInProfile;

/// Map a scraped payload into a [`LinkedInProfile`], filling every absent
/// field with its empty value. The handle stands in for a missing name so
/// the profile always identifies someone.
#[must_use]
pub fn normalize_profile(handle: &str, raw: RawLinkedInProfile) -> LinkedInProfile {
    LinkedInProfile {
        name: raw.name.filter(|n| !n.is_empty()).unwrap_or_else(|| handle.to_string()),
        headline: raw.headline.unwrap_or_default(),
        location: raw.location.unwrap_or_default(),
        photo_url: raw.photo_url.unwrap_or_default(),
        summary: raw.summary.unwrap_or_default(),
        experience: raw
            .experience
            .into_iter()
            .map(|e| Experience {
                title: e.title.unwrap_or_default(),
                company: e.company.unwrap_or_default(),
                duration: e.duration.unwrap_or_default(),
                description: e.description.unwrap_or_default(),
                location: e.location.unwrap_or_default(),
            })
            .collect(),
        education: raw
            .education
            .into_iter()
            .map(|e| Education {
                school: e.school.unwrap_or_default(),
                degree: e.degree.unwrap_or_default(),
                field: e.field.unwrap_or_default(),
                duration: e.duration.unwrap_or_default(),
            })
            .collect(),
        skills: raw.skills,
        certifications: raw
            .certifications
            .into_iter()
            .map(|c| Certification {
                name: c.name.unwrap_or_default(),
                issuer: c.issuer.unwrap_or_default(),
                date: c.date.unwrap_or_default(),
            })
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_payload_normalizes_to_handle_and_empties() {
        let raw: RawLinkedInProfile = serde_json::from_str("{}").expect("empty object parses");
        let profile = normalize_profile("jane-doe", raw);
        assert_eq!(profile.name, "jane-doe");
        assert_eq!(profile.headline, "");
        assert!(profile.experience.is_empty());
        assert!(profile.skills.is_empty());
    }

    #[test]
    fn partial_experience_entries_fill_missing_fields() {
        let raw: RawLinkedInProfile = serde_json::from_value(serde_json::json!({
            "name": "Jane Doe",
            "experience": [{ "title": "Engineer" }],
            "skills": ["Rust", "SQL"]
        }))
        .expect("parses");
        let profile = normalize_profile("jane-doe", raw);
        assert_eq!(profile.name, "Jane Doe");
        assert_eq!(profile.experience.len(), 1);
        assert_eq!(profile.experience[0].title, "Engineer");
        assert_eq!(profile.experience[0].company, "");
        assert_eq!(profile.skills, vec!["Rust", "SQL"]);
    }
}
