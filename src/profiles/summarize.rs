use serde::Serialize;

use super::model::Profile;

/// Non-skill fields handed to the presentation layer as-is.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProfileHeader {
    pub photo_reference: String,
    pub name: String,
    pub tagline: String,
    pub location: String,
    pub about: String,
}

impl ProfileHeader {
    pub fn from_profile(profile: &Profile) -> Self {
        Self {
            photo_reference: profile.photo_reference.clone(),
            name: profile.name.clone(),
            tagline: profile.tagline.clone(),
            location: profile.location.clone(),
            about: profile.about.clone(),
        }
    }

    /// Label/value pairs in display order.
    pub fn fields(&self) -> Vec<(String, String)> {
        vec![
            ("Name".into(), null_safe(&self.name)),
            ("Tagline".into(), null_safe(&self.tagline)),
            ("Location".into(), null_safe(&self.location)),
            ("About".into(), null_safe(&self.about)),
        ]
    }
}

fn null_safe(value: &str) -> String {
    if value.trim().is_empty() {
        "Unset".into()
    } else {
        value.to_string()
    }
}
