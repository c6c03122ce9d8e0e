//! Record kinds, feed tabs, and roles for the portal.
//!
//! All enums use `snake_case` serialization via `#[serde(rename_all = "snake_case")]`
//! and expose `as_str()` for the value stored in SQL.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// ContentType
// ---------------------------------------------------------------------------

/// Discriminant for feed items and search hits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum ContentType {
    Journal,
    Circular,
    Event,
}

impl ContentType {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Journal => "journal",
            Self::Circular => "circular",
            Self::Event => "event",
        }
    }
}

impl fmt::Display for ContentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// ContentTab
// ---------------------------------------------------------------------------

/// Home feed tab. Decides which collections a feed load reads.
///
/// ```text
/// all       → posts + circulars + events
/// news      → posts
/// circulars → circulars
/// oms       → circulars
/// events    → events
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum ContentTab {
    #[default]
    All,
    News,
    Circulars,
    Oms,
    Events,
}

impl ContentTab {
    #[must_use]
    pub const fn includes_posts(self) -> bool {
        matches!(self, Self::All | Self::News)
    }

    #[must_use]
    pub const fn includes_circulars(self) -> bool {
        matches!(self, Self::All | Self::Circulars | Self::Oms)
    }

    #[must_use]
    pub const fn includes_events(self) -> bool {
        matches!(self, Self::All | Self::Events)
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::News => "news",
            Self::Circulars => "circulars",
            Self::Oms => "oms",
            Self::Events => "events",
        }
    }
}

impl fmt::Display for ContentTab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// EventKind
// ---------------------------------------------------------------------------

/// Kind of organizational event.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum EventKind {
    Conference,
    #[default]
    Meeting,
    Workshop,
}

impl EventKind {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Conference => "conference",
            Self::Meeting => "meeting",
            Self::Workshop => "workshop",
        }
    }
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// HolidayType
// ---------------------------------------------------------------------------

/// Holiday classification on the institute calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum HolidayType {
    Gazetted,
    Restricted,
    Optional,
    Institution,
}

impl HolidayType {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Gazetted => "gazetted",
            Self::Restricted => "restricted",
            Self::Optional => "optional",
            Self::Institution => "institution",
        }
    }
}

impl fmt::Display for HolidayType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// MenuKind
// ---------------------------------------------------------------------------

/// Where a navigation entry points.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum MenuKind {
    #[default]
    Internal,
    External,
    Page,
}

impl MenuKind {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Internal => "internal",
            Self::External => "external",
            Self::Page => "page",
        }
    }
}

impl fmt::Display for MenuKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// UserRole
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum UserRole {
    #[default]
    Admin,
    Employee,
}

impl UserRole {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::Employee => "employee",
        }
    }
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
