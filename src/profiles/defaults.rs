use crate::config::SeedSettings;

use super::model::Profile;

pub const DEFAULT_PHOTO_REFERENCE: &str = "Photo";

pub fn default_profile() -> Profile {
    Profile {
        name: "Pavel Krigin".into(),
        tagline: "iOS developer, less than a year of experience".into(),
        location: "Podgorica".into(),
        about: "Researcher of Swift and technologies in the field of iOS development. \
                Currently in intensive training and comfortable with the Swift basics. \
                Took part in a 24-hour hackathon where the team built a boat-sharing \
                service for the Adriatic coast."
            .into(),
        photo_reference: DEFAULT_PHOTO_REFERENCE.into(),
        skills: vec![
            "OOP and SOLID".into(),
            "MVC/MVP/MVVM/VIPER".into(),
            "UIKit".into(),
            "SwiftUI".into(),
        ],
    }
}

/// Builds the seed profile, letting any configured field win over the built-in value.
pub fn seeded_profile(seed: &SeedSettings) -> Profile {
    let mut profile = default_profile();
    override_field(&mut profile.name, &seed.name);
    override_field(&mut profile.tagline, &seed.tagline);
    override_field(&mut profile.location, &seed.location);
    override_field(&mut profile.about, &seed.about);
    override_field(&mut profile.photo_reference, &seed.photo_reference);
    if let Some(skills) = &seed.skills {
        profile.skills = skills
            .iter()
            .map(|skill| skill.trim())
            .filter(|skill| !skill.is_empty())
            .map(str::to_string)
            .collect();
    }
    profile
}

fn override_field(target: &mut String, value: &Option<String>) {
    if let Some(value) = value {
        *target = value.clone();
    }
}
