//! Hardcoded site copy: rotating facts and tips, prefilled messages and the
//! course buttons that get their own WhatsApp link.

/// Facts cycled through the `rotator-fact` slot.
pub const FACTS: &[&str] = &[
    "Did you know? The first computer bug was an actual moth.",
    "Did you know? Python was named after Monty Python, not the snake.",
    "Fact: Real projects on your portfolio beat certificates for many entry jobs.",
    "Did you know? This website was single handedly made and designed by Obi Emmanuel C.",
    "Tip: Learning consistency beats learning speed — daily practice wins.",
    "Fact: 90% of digital jobs require at least basic coding knowledge.",
];

/// Tips cycled through the `rotator-tip` slot.
pub const TIPS: &[&str] = &[
    "Tip: Finish tiny projects — completion matters more than size.",
    "Tip: Readability over cleverness when writing code.",
    "Tip: Practice debugging; it's the job.",
    "Tip: Version control (Git) is your best friend.",
    "Tip: Learn how to Google smart — it’s an actual skill.",
];

/// Message for every `.whatsapp-link` anchor.
pub const GENERIC_MESSAGE: &str = "Hello Emanuel, I’m interested in one of your courses!";

/// Message for the `wh-home` button.
pub const HOME_MESSAGE: &str = "Hello, I am interested in courses at Emanuel's Tech World.";

/// Course buttons as `(slot id, course name)`.
pub const COURSES: &[(&str, &str)] = &[
    ("wh-webdesign", "Web Design"),
    ("wh-python", "Python Programming"),
    ("wh-cyber", "Cyber Security"),
    ("wh-blockchain", "Blockchain Technology"),
    ("wh-uiux", "UI/UX Design"),
    ("wh-marketing", "Digital Marketing"),
    ("wh-gamedev", "Game Development"),
    ("wh-hacking", "Ethical Hacking & Pen Testing"),
    ("wh-robotics", "Robotics & IoT"),
    ("wh-cloud", "Cloud DevOps Engineering"),
    ("wh-db", "Database Administration"),
    ("wh-vrar", "Virtual & Augmented Reality"),
];

/// Prefilled enquiry for a single course.
pub fn course_message(course: &str) -> String {
    format!(
        "Hello, I am interested in the {} course at Emanuel's Tech World.",
        course
    )
}

/// Owned copies of a constant list, ready for a `RotationList`.
pub fn to_owned_list(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_course_message() {
        assert_eq!(
            course_message("Web Design"),
            "Hello, I am interested in the Web Design course at Emanuel's Tech World."
        );
    }

    #[test]
    fn test_course_ids_unique() {
        let ids: HashSet<_> = COURSES.iter().map(|(id, _)| *id).collect();
        assert_eq!(ids.len(), COURSES.len());
        assert_eq!(COURSES.len(), 12);
    }

    #[test]
    fn test_rotation_content_not_empty() {
        assert_eq!(to_owned_list(FACTS).len(), 6);
        assert_eq!(to_owned_list(TIPS).len(), 5);
    }
}
