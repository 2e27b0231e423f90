//! Page history: immutable snapshots and the rules deciding when one is taken.
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::page::entity::Page;
use crate::domain::page::module::PageModule;
use crate::domain::page::value_objects::{PageContent, PageId, RevisionId};
use crate::domain::user::UserId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Captured state of one module at snapshot time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModuleSnapshot {
    pub id: i64,
    pub module_type: String,
    pub content: String,
    #[serde(default)]
    pub settings: Option<String>,
    pub sort_order: i64,
    pub is_visible: bool,
}

impl From<&PageModule> for ModuleSnapshot {
    fn from(module: &PageModule) -> Self {
        Self {
            id: module.id.into(),
            module_type: module.module_type.clone(),
            content: module.content.clone(),
            settings: module.settings.clone(),
            sort_order: module.sort_order,
            is_visible: module.is_visible,
        }
    }
}

impl ModuleSnapshot {
    /// Serialized form stored alongside the revision.
    pub fn encode_all(modules: &[ModuleSnapshot]) -> DomainResult<String> {
        serde_json::to_string(modules)
            .map_err(|err| DomainError::Persistence(format!("cannot encode modules: {err}")))
    }

    pub fn decode_all(raw: &str) -> DomainResult<Vec<ModuleSnapshot>> {
        if raw.trim().is_empty() {
            return Ok(Vec::new());
        }
        serde_json::from_str(raw)
            .map_err(|err| DomainError::Persistence(format!("corrupt revision modules: {err}")))
    }
}

#[derive(Debug, Clone)]
pub struct PageRevision {
    pub id: RevisionId,
    pub page_id: PageId,
    pub content: PageContent,
    pub modules: Vec<ModuleSnapshot>,
    pub author_id: UserId,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewPageRevision {
    pub page_id: PageId,
    pub content: PageContent,
    pub modules: Vec<ModuleSnapshot>,
    pub author_id: UserId,
    pub created_at: DateTime<Utc>,
}

pub struct RevisionSnapshot;

impl RevisionSnapshot {
    /// Snapshot the page's current content and module set. `modules` must be
    /// every module currently attached to the page.
    pub fn capture(
        page: &Page,
        modules: &[PageModule],
        author_id: UserId,
        at: DateTime<Utc>,
    ) -> NewPageRevision {
        let mut ordered: Vec<&PageModule> = modules.iter().collect();
        ordered.sort_by_key(|module| (module.sort_order, module.id));
        NewPageRevision {
            page_id: page.id,
            content: page.content.clone(),
            modules: ordered.into_iter().map(ModuleSnapshot::from).collect(),
            author_id,
            created_at: at,
        }
    }
}

/// How a page write interacts with history.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevisionPolicy {
    Skip,
    /// Snapshot only when the write supplies content different from the stored value.
    OnContentChange { author_id: UserId },
    Always { author_id: UserId },
}

impl RevisionPolicy {
    /// Returns the author to attribute the snapshot to, or `None` when the
    /// write should proceed without one.
    pub fn requires_snapshot(
        &self,
        current: &Page,
        incoming_content: Option<&PageContent>,
    ) -> Option<UserId> {
        match *self {
            RevisionPolicy::Skip => None,
            RevisionPolicy::Always { author_id } => Some(author_id),
            RevisionPolicy::OnContentChange { author_id } => match incoming_content {
                Some(content) if *content != current.content => Some(author_id),
                _ => None,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::page::value_objects::{
        ModuleId, PageSlug, PageStatus, PageTemplate, PageTitle,
    };

    fn page(content: &str) -> Page {
        let now = Utc::now();
        Page {
            id: PageId::new(4).unwrap(),
            title: PageTitle::new("Home").unwrap(),
            slug: PageSlug::new("home").unwrap(),
            content: PageContent::new(content),
            excerpt: String::new(),
            featured_image_id: None,
            template: PageTemplate::default(),
            parent_id: None,
            author_id: UserId::new(1).unwrap(),
            status: PageStatus::Draft,
            published_at: None,
            scheduled_at: None,
            created_at: now,
            updated_at: now,
        }
    }

    fn module(id: i64, sort_order: i64) -> PageModule {
        let now = Utc::now();
        PageModule {
            id: ModuleId::new(id).unwrap(),
            page_id: PageId::new(4).unwrap(),
            module_type: "text".into(),
            content: format!("block {id}"),
            settings: None,
            sort_order,
            is_visible: true,
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn unchanged_content_does_not_snapshot() {
        let editor = UserId::new(2).unwrap();
        let policy = RevisionPolicy::OnContentChange { author_id: editor };
        let current = page("same");
        assert_eq!(policy.requires_snapshot(&current, None), None);
        assert_eq!(
            policy.requires_snapshot(&current, Some(&PageContent::new("same"))),
            None
        );
        assert_eq!(
            policy.requires_snapshot(&current, Some(&PageContent::new("changed"))),
            Some(editor)
        );
    }

    #[test]
    fn always_and_skip_ignore_content() {
        let editor = UserId::new(2).unwrap();
        let current = page("same");
        assert_eq!(
            RevisionPolicy::Always { author_id: editor }.requires_snapshot(&current, None),
            Some(editor)
        );
        assert_eq!(
            RevisionPolicy::Skip.requires_snapshot(&current, Some(&PageContent::new("x"))),
            None
        );
    }

    #[test]
    fn capture_orders_modules_and_keeps_current_content() {
        let editor = UserId::new(3).unwrap();
        let at = Utc::now();
        let snapshot = RevisionSnapshot::capture(
            &page("before"),
            &[module(2, 5), module(1, 1), module(3, 1)],
            editor,
            at,
        );
        assert_eq!(snapshot.content.as_str(), "before");
        assert_eq!(snapshot.author_id, editor);
        assert_eq!(snapshot.created_at, at);
        let ids: Vec<i64> = snapshot.modules.iter().map(|m| m.id).collect();
        assert_eq!(ids, vec![1, 3, 2]);
    }

    #[test]
    fn modules_survive_encoding() {
        let snapshots = vec![ModuleSnapshot::from(&module(1, 0))];
        let raw = ModuleSnapshot::encode_all(&snapshots).unwrap();
        assert!(raw.starts_with('['));
        assert_eq!(ModuleSnapshot::decode_all(&raw).unwrap(), snapshots);
        assert!(ModuleSnapshot::decode_all("").unwrap().is_empty());
        assert!(ModuleSnapshot::decode_all("{not json").is_err());
    }
}
