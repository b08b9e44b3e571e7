use log::Level;

use crate::components::typewriter::TypewriterTiming;

pub const OWNER_NAME: &str = "Tanish Rastogi";
pub const OWNER_SHORT_NAME: &str = "Tanish";

pub const ROLE_TITLES: [&str; 4] = [
    "AI Developer",
    "Web Developer",
    "Robot Programmer",
    "Software Engineer",
];

pub const HERO_TYPING: TypewriterTiming = TypewriterTiming {
    type_speed: 70,
    delete_speed: 50,
    delay_speed: 1400,
};

pub const TAGLINE: &str =
    "Engineering with intent: reproducible systems, expressive interfaces, and a bias for clarity.";

// Fraction of a wrapped element that has to be onscreen before it reveals.
pub const REVEAL_THRESHOLD: f64 = 0.15;

pub const CONTACT_EMAIL: &str = "tanish@example.com";
pub const GITHUB_URL: &str = "https://github.com/tanish";
pub const FOOTER_URL: &str = "https://github.com/codertanish";

pub fn mailto() -> String {
    format!("mailto:{}", CONTACT_EMAIL)
}

pub fn role_titles() -> Vec<String> {
    ROLE_TITLES.iter().map(|t| t.to_string()).collect()
}

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug // Verbose console output while developing locally
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_titles_are_non_empty() {
        assert!(!ROLE_TITLES.is_empty());
        assert!(ROLE_TITLES.iter().all(|t| !t.trim().is_empty()));
        assert_eq!(role_titles().first().map(String::as_str), Some("AI Developer"));
    }

    #[test]
    fn reveal_threshold_is_a_fraction() {
        assert!(REVEAL_THRESHOLD > 0.0 && REVEAL_THRESHOLD <= 1.0);
    }

    #[test]
    fn mailto_points_at_contact_email() {
        assert_eq!(mailto(), "mailto:tanish@example.com");
    }
}
