//! Fixed lookup tables mapping scenario tags to categories and priorities.

use crate::result::TestPriority;

/// Category used when no tag matches.
pub const DEFAULT_CATEGORY: &str = "General";

const CATEGORY_TAGS: &[(&str, &str)] = &[
    ("@functional", "Functional"),
    ("@ui-ux", "UI/UX"),
    ("@responsive", "Responsive"),
    ("@performance", "Performance"),
    ("@accessibility", "Accessibility"),
    ("@cross-browser", "Cross-Browser"),
    ("@mobile", "Mobile"),
    ("@desktop", "Desktop"),
    ("@tablet", "Tablet"),
];

// Test-type tags that imply a priority when no explicit priority tag is set.
const HIGH_BY_TYPE: &[&str] = &["@functional", "@performance"];
const MEDIUM_BY_TYPE: &[&str] = &["@ui-ux", "@responsive", "@accessibility"];

const CATEGORY_DESCRIPTIONS: &[(&str, &str)] = &[
    ("Functional", "Verifies core website functionality and user workflows"),
    ("UI/UX", "Tests user interface design and user experience elements"),
    ("Responsive", "Ensures website works correctly across different screen sizes"),
    ("Performance", "Validates website loading speed and performance metrics"),
    ("Accessibility", "Checks website accessibility compliance and usability"),
    ("Cross-Browser", "Tests website compatibility across different browsers"),
    ("Mobile", "Validates mobile-specific functionality and responsive design"),
    ("Desktop", "Tests desktop-specific features and layout"),
    ("Tablet", "Ensures proper functionality on tablet devices"),
];

const DEFAULT_DESCRIPTION: &str = "General website testing";

/// Category, priority, and description derived from one tag set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Classification {
    pub category: String,
    pub priority: TestPriority,
    pub description: String,
}

/// Maps tag sets onto report labels.
#[derive(Debug, Clone, Copy, Default)]
pub struct TagClassifier;

impl TagClassifier {
    pub fn new() -> Self {
        TagClassifier
    }

    pub fn classify<S: AsRef<str>>(&self, tags: &[S]) -> Classification {
        let tags = normalize(tags);
        let category = category_from_tags(&tags);
        Classification {
            priority: priority_from_tags(&tags),
            description: description_for(category).to_string(),
            category: category.to_string(),
        }
    }

    pub fn category<S: AsRef<str>>(&self, tags: &[S]) -> &'static str {
        category_from_tags(&normalize(tags))
    }

    pub fn priority<S: AsRef<str>>(&self, tags: &[S]) -> TestPriority {
        priority_from_tags(&normalize(tags))
    }
}

/// Default description for a category label.
pub fn description_for(category: &str) -> &'static str {
    CATEGORY_DESCRIPTIONS
        .iter()
        .find(|(c, _)| *c == category)
        .map(|(_, d)| *d)
        .unwrap_or(DEFAULT_DESCRIPTION)
}

fn normalize<S: AsRef<str>>(tags: &[S]) -> Vec<String> {
    tags.iter()
        .map(|t| {
            let t = t.as_ref().trim();
            if t.starts_with('@') {
                t.to_string()
            } else {
                format!("@{t}")
            }
        })
        .collect()
}

fn category_from_tags(tags: &[String]) -> &'static str {
    tags.iter()
        .find_map(|tag| {
            CATEGORY_TAGS
                .iter()
                .find(|(t, _)| *t == tag.as_str())
                .map(|(_, category)| *category)
        })
        .unwrap_or(DEFAULT_CATEGORY)
}

fn priority_from_tags(tags: &[String]) -> TestPriority {
    let has = |name: &str| tags.iter().any(|t| t == name);

    if has("@critical") || has("@high") {
        return TestPriority::High;
    }
    if has("@medium") {
        return TestPriority::Medium;
    }
    if has("@low") {
        return TestPriority::Low;
    }

    for tag in tags {
        if HIGH_BY_TYPE.contains(&tag.as_str()) {
            return TestPriority::High;
        }
        if MEDIUM_BY_TYPE.contains(&tag.as_str()) {
            return TestPriority::Medium;
        }
    }
    TestPriority::Medium
}
