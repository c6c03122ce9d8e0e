//! Profile update builder.
//!
//! Outer `Option` selects the field; inner `Option` clears it when `None`.

use serde::Serialize;

#[derive(Debug, Clone, Default, Serialize, PartialEq, Eq)]
pub struct ProfileUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub full_name: Option<Option<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<Option<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub department: Option<Option<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub designation: Option<Option<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<Option<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bio: Option<Option<String>>,
}

impl ProfileUpdate {
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.full_name.is_none()
            && self.avatar_url.is_none()
            && self.department.is_none()
            && self.designation.is_none()
            && self.phone.is_none()
            && self.bio.is_none()
    }

    /// `(column, value)` pairs for every selected field, in schema order.
    pub(crate) fn assignments(&self) -> Vec<(&'static str, Option<&str>)> {
        [
            ("full_name", &self.full_name),
            ("avatar_url", &self.avatar_url),
            ("department", &self.department),
            ("designation", &self.designation),
            ("phone", &self.phone),
            ("bio", &self.bio),
        ]
        .into_iter()
        .filter_map(|(column, field)| field.as_ref().map(|v| (column, v.as_deref())))
        .collect()
    }
}

#[derive(Debug, Default)]
pub struct ProfileUpdateBuilder(ProfileUpdate);

impl ProfileUpdateBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn full_name(mut self, val: Option<String>) -> Self {
        self.0.full_name = Some(val);
        self
    }

    #[must_use]
    pub fn avatar_url(mut self, val: Option<String>) -> Self {
        self.0.avatar_url = Some(val);
        self
    }

    #[must_use]
    pub fn department(mut self, val: Option<String>) -> Self {
        self.0.department = Some(val);
        self
    }

    #[must_use]
    pub fn designation(mut self, val: Option<String>) -> Self {
        self.0.designation = Some(val);
        self
    }

    #[must_use]
    pub fn phone(mut self, val: Option<String>) -> Self {
        self.0.phone = Some(val);
        self
    }

    #[must_use]
    pub fn bio(mut self, val: Option<String>) -> Self {
        self.0.bio = Some(val);
        self
    }

    #[must_use]
    pub fn build(self) -> ProfileUpdate {
        self.0
    }
}
