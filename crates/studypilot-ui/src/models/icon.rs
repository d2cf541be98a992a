//! Icon identifiers referenced from site content

use serde::{Deserialize, Serialize};

/// Line icons available to content and chrome
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum IconKind {
    BookOpen,
    Clock,
    GraduationCap,
    Menu,
    Phone,
    School,
    Star,
    Users,
    X,
}
