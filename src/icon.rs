//! The static icon catalog.
//!
//! Icons are stroke glyphs drawn on a 24x24 grid. Each entry's category is
//! derived from its name once, when the catalog is built; searches never
//! re-classify.

use std::collections::HashMap;
use std::fmt;
use std::sync::OnceLock;

use crate::style::IconRef;

/// Side length of the grid every icon body is drawn on.
pub const ICON_GRID: u32 = 24;

/// Coarse icon grouping used by search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IconCategory {
    Arrows,
    Files,
    Users,
    Other,
}

impl IconCategory {
    /// Keyword classifier: the first matching keyword wins.
    pub fn classify(name: &str) -> Self {
        if name.contains("Arrow") {
            Self::Arrows
        } else if name.contains("File") {
            Self::Files
        } else if name.contains("User") {
            Self::Users
        } else {
            Self::Other
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Arrows => "Arrows",
            Self::Files => "Files",
            Self::Users => "Users",
            Self::Other => "Other",
        }
    }
}

impl fmt::Display for IconCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One catalog entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IconDef {
    pub name: &'static str,
    pub category: IconCategory,
    /// SVG child elements on the 24x24 grid (no enclosing `<svg>`).
    pub body: &'static str,
}

impl IconDef {
    /// The handle stored in an icon style.
    pub fn reference(&self) -> IconRef {
        IconRef::new(self.name)
    }
}

/// Catalog source: (name, body).
const ICONS: &[(&str, &str)] = &[
    ("ArrowDown", r#"<path d="M12 5v14"/><path d="m19 12-7 7-7-7"/>"#),
    ("ArrowLeft", r#"<path d="m12 19-7-7 7-7"/><path d="M19 12H5"/>"#),
    ("ArrowRight", r#"<path d="M5 12h14"/><path d="m12 5 7 7-7 7"/>"#),
    ("ArrowUp", r#"<path d="m5 12 7-7 7 7"/><path d="M12 19V5"/>"#),
    ("BarChart", r#"<path d="M3 3v18h18"/><path d="M18 17V9"/><path d="M13 17V5"/><path d="M8 17v-3"/>"#),
    ("Camera", r#"<path d="M14.5 4h-5L7 7H4a2 2 0 0 0-2 2v9a2 2 0 0 0 2 2h16a2 2 0 0 0 2-2V9a2 2 0 0 0-2-2h-3z"/><circle cx="12" cy="13" r="3"/>"#),
    ("Circle", r#"<circle cx="12" cy="12" r="10"/>"#),
    ("Cloud", r#"<path d="M17.5 19H9a7 7 0 1 1 6.71-9h1.79a4.5 4.5 0 1 1 0 9Z"/>"#),
    ("Code", r#"<polyline points="16 18 22 12 16 6"/><polyline points="8 6 2 12 8 18"/>"#),
    ("File", r#"<path d="M15 2H6a2 2 0 0 0-2 2v16a2 2 0 0 0 2 2h12a2 2 0 0 0 2-2V7Z"/><path d="M14 2v4a2 2 0 0 0 2 2h4"/>"#),
    ("FileText", r#"<path d="M15 2H6a2 2 0 0 0-2 2v16a2 2 0 0 0 2 2h12a2 2 0 0 0 2-2V7Z"/><path d="M14 2v4a2 2 0 0 0 2 2h4"/><path d="M10 9H8"/><path d="M16 13H8"/><path d="M16 17H8"/>"#),
    ("Heart", r#"<path d="M19 14c1.49-1.46 3-3.21 3-5.5A5.5 5.5 0 0 0 16.5 3c-1.76 0-3 .5-4.5 2-1.5-1.5-2.74-2-4.5-2A5.5 5.5 0 0 0 2 8.5c0 2.3 1.5 4.05 3 5.5l7 7Z"/>"#),
    ("Home", r#"<path d="M3 9l9-7 9 7v11a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2z"/><polyline points="9 22 9 12 15 12 15 22"/>"#),
    ("Moon", r#"<path d="M12 3a6 6 0 0 0 9 9 9 9 0 1 1-9-9Z"/>"#),
    ("Music", r#"<path d="M9 18V5l12-2v13"/><circle cx="6" cy="18" r="3"/><circle cx="18" cy="16" r="3"/>"#),
    ("Settings", r#"<circle cx="12" cy="12" r="3"/><path d="M12 2v3M12 19v3M4.22 4.22l2.12 2.12M17.66 17.66l2.12 2.12M2 12h3M19 12h3M4.22 19.78l2.12-2.12M17.66 6.34l2.12-2.12"/>"#),
    ("Square", r#"<rect x="3" y="3" width="18" height="18" rx="2"/>"#),
    ("Star", r#"<polygon points="12 2 15.09 8.26 22 9.27 17 14.14 18.18 21.02 12 17.77 5.82 21.02 7 14.14 2 9.27 8.91 8.26 12 2"/>"#),
    ("Sun", r#"<circle cx="12" cy="12" r="4"/><path d="M12 2v2M12 20v2M4.93 4.93l1.41 1.41M17.66 17.66l1.41 1.41M2 12h2M20 12h2M6.34 17.66l-1.41 1.41M19.07 4.93l-1.41 1.41"/>"#),
    ("Triangle", r#"<path d="M13.73 4a2 2 0 0 0-3.46 0l-8 14A2 2 0 0 0 4 21h16a2 2 0 0 0 1.73-3Z"/>"#),
    ("User", r#"<path d="M19 21v-2a4 4 0 0 0-4-4H9a4 4 0 0 0-4 4v2"/><circle cx="12" cy="7" r="4"/>"#),
    ("UserPlus", r#"<path d="M16 21v-2a4 4 0 0 0-4-4H6a4 4 0 0 0-4 4v2"/><circle cx="9" cy="7" r="4"/><path d="M19 8v6"/><path d="M22 11h-6"/>"#),
    ("Users", r#"<path d="M16 21v-2a4 4 0 0 0-4-4H6a4 4 0 0 0-4 4v2"/><circle cx="9" cy="7" r="4"/><path d="M22 21v-2a4 4 0 0 0-3-3.87"/><path d="M16 3.13a4 4 0 0 1 0 7.75"/>"#),
    ("Wrench", r#"<path d="M14.7 6.3a1 1 0 0 0 0 1.4l1.6 1.6a1 1 0 0 0 1.4 0l3.77-3.77a6 6 0 0 1-7.94 7.94l-6.91 6.91a2.12 2.12 0 0 1-3-3l6.91-6.91a6 6 0 0 1 7.94-7.94l-3.76 3.76z"/>"#),
    ("Zap", r#"<polygon points="13 2 3 14 12 14 11 22 21 10 12 10 13 2"/>"#),
];

/// Popular search keywords offered as suggestions.
pub const SEARCH_SUGGESTIONS: [&str; 10] = [
    "arrow", "cloud", "star", "heart", "user", "home", "settings", "tool", "chart", "music",
];

/// A keyed lookup table of icons, built once.
#[derive(Debug)]
pub struct IconCatalog {
    icons: Vec<IconDef>,
    by_name: HashMap<&'static str, usize>,
}

impl IconCatalog {
    /// Builds a catalog from (name, body) pairs, classifying each entry.
    pub fn from_entries(entries: &[(&'static str, &'static str)]) -> Self {
        let icons: Vec<IconDef> = entries
            .iter()
            .map(|&(name, body)| IconDef {
                name,
                category: IconCategory::classify(name),
                body,
            })
            .collect();
        let by_name = icons.iter().enumerate().map(|(i, def)| (def.name, i)).collect();
        Self { icons, by_name }
    }

    /// The process-wide built-in catalog.
    pub fn global() -> &'static IconCatalog {
        static CATALOG: OnceLock<IconCatalog> = OnceLock::new();
        CATALOG.get_or_init(|| Self::from_entries(ICONS))
    }

    /// Resolves a handle to its catalog entry.
    pub fn get(&self, icon: &IconRef) -> Option<&IconDef> {
        self.by_name.get(icon.as_str()).map(|&i| &self.icons[i])
    }

    /// Returns the number of icons in the catalog.
    pub fn len(&self) -> usize {
        self.icons.len()
    }

    /// Returns true if the catalog contains no icons.
    pub fn is_empty(&self) -> bool {
        self.icons.is_empty()
    }

    /// Iterates in catalog order.
    pub fn iter(&self) -> impl Iterator<Item = &IconDef> {
        self.icons.iter()
    }
}

impl<'a> IntoIterator for &'a IconCatalog {
    type Item = &'a IconDef;
    type IntoIter = std::slice::Iter<'a, IconDef>;

    fn into_iter(self) -> Self::IntoIter {
        self.icons.iter()
    }
}
