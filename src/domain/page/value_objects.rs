use crate::domain::errors::{DomainError, DomainResult};
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};
use utoipa::ToSchema;

macro_rules! positive_id {
    ($name:ident, $label:literal) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub struct $name(i64);

        impl $name {
            pub fn new(id: i64) -> DomainResult<Self> {
                if id <= 0 {
                    Err(DomainError::Validation(concat!($label, " id must be positive").into()))
                } else {
                    Ok(Self(id))
                }
            }

            /// Resolves a caller-supplied reference. An id that cannot exist
            /// is reported the same way as one that does not.
            pub fn existing(id: i64) -> DomainResult<Self> {
                Self::new(id).map_err(|_| DomainError::not_found(concat!($label, " not found")))
            }
        }

        impl From<$name> for i64 {
            fn from(value: $name) -> Self {
                value.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

positive_id!(PageId, "page");
positive_id!(ModuleId, "module");
positive_id!(RevisionId, "revision");
positive_id!(MediaId, "media");

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageTitle(String);

impl PageTitle {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(DomainError::Validation("title is required".into()));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }

    /// Title given to a duplicated page.
    pub fn copy_of(&self) -> Self {
        Self(format!("{} (Copy)", self.0))
    }
}

impl fmt::Display for PageTitle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// URL-safe page identifier, unique across all pages.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PageSlug(String);

impl PageSlug {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(DomainError::Validation("slug cannot be empty".into()));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }

    /// `<slug>-<n>`, used while searching for a free slug.
    pub fn with_suffix(&self, n: u64) -> Self {
        Self(format!("{}-{n}", self.0))
    }
}

impl fmt::Display for PageSlug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Serialized rich text. May be empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageContent(String);

impl PageContent {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl From<String> for PageContent {
    fn from(value: String) -> Self {
        Self(value)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageTemplate(String);

impl PageTemplate {
    pub const DEFAULT: &'static str = "standard";

    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(DomainError::Validation("template cannot be empty".into()));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl Default for PageTemplate {
    fn default() -> Self {
        Self(Self::DEFAULT.to_string())
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum PageStatus {
    #[default]
    Draft,
    Published,
    Scheduled,
}

impl PageStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            PageStatus::Draft => "draft",
            PageStatus::Published => "published",
            PageStatus::Scheduled => "scheduled",
        }
    }
}

impl fmt::Display for PageStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PageStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "draft" => Ok(PageStatus::Draft),
            "published" => Ok(PageStatus::Published),
            "scheduled" => Ok(PageStatus::Scheduled),
            other => Err(DomainError::Validation(format!(
                "unknown page status '{other}'"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_must_be_positive() {
        assert!(PageId::new(0).is_err());
        assert!(RevisionId::new(-3).is_err());
        assert_eq!(i64::from(ModuleId::new(7).unwrap()), 7);
    }

    #[test]
    fn impossible_reference_reads_as_missing() {
        let err = PageId::existing(0).unwrap_err();
        assert!(matches!(err, DomainError::NotFound(ref msg) if msg == "page not found"));
        assert!(matches!(RevisionId::existing(-1), Err(DomainError::NotFound(_))));
        assert_eq!(i64::from(PageId::existing(3).unwrap()), 3);
    }

    #[test]
    fn blank_title_is_rejected() {
        let err = PageTitle::new("   ").unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
    }

    #[test]
    fn copy_title_appends_suffix() {
        let title = PageTitle::new("Hello, World!").unwrap();
        assert_eq!(title.copy_of().as_str(), "Hello, World! (Copy)");
    }

    #[test]
    fn slug_suffix() {
        let slug = PageSlug::new("about").unwrap();
        assert_eq!(slug.with_suffix(3).as_str(), "about-3");
    }

    #[test]
    fn status_parses_known_values_only() {
        assert_eq!("scheduled".parse::<PageStatus>().unwrap(), PageStatus::Scheduled);
        assert!("archived".parse::<PageStatus>().is_err());
        assert_eq!(PageStatus::default(), PageStatus::Draft);
    }
}
