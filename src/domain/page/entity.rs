// src/domain/page/entity.rs
use crate::domain::page::value_objects::{
    MediaId, PageContent, PageId, PageSlug, PageStatus, PageTemplate, PageTitle,
};
use crate::domain::user::UserId;
use chrono::{DateTime, Utc};

#[derive(Debug, Clone)]
pub struct Page {
    pub id: PageId,
    pub title: PageTitle,
    pub slug: PageSlug,
    pub content: PageContent,
    pub excerpt: String,
    pub featured_image_id: Option<MediaId>,
    pub template: PageTemplate,
    pub parent_id: Option<PageId>,
    pub author_id: UserId,
    pub status: PageStatus,
    pub published_at: Option<DateTime<Utc>>,
    pub scheduled_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Page {
    /// The first publish fixes `published_at`; later publishes keep it.
    pub fn publish(&mut self, now: DateTime<Utc>) {
        self.status = PageStatus::Published;
        self.published_at.get_or_insert(now);
        self.updated_at = now;
    }

    pub fn unpublish(&mut self, now: DateTime<Utc>) {
        self.status = PageStatus::Draft;
        self.updated_at = now;
    }

    pub fn is_published(&self) -> bool {
        self.status == PageStatus::Published
    }
}

#[derive(Debug, Clone)]
pub struct NewPage {
    pub title: PageTitle,
    pub slug: PageSlug,
    pub content: PageContent,
    pub excerpt: String,
    pub featured_image_id: Option<MediaId>,
    pub template: PageTemplate,
    pub parent_id: Option<PageId>,
    pub author_id: UserId,
    pub status: PageStatus,
    pub published_at: Option<DateTime<Utc>>,
    pub scheduled_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

/// Partial page update. Only fields holding `Some` are written; for
/// nullable columns the inner `Option` distinguishes "clear" from "set".
#[derive(Debug, Clone)]
pub struct PageUpdate {
    pub id: PageId,
    pub title: Option<PageTitle>,
    pub slug: Option<PageSlug>,
    pub content: Option<PageContent>,
    pub excerpt: Option<String>,
    pub template: Option<PageTemplate>,
    pub status: Option<PageStatus>,
    pub parent_id: Option<Option<PageId>>,
    pub featured_image_id: Option<Option<MediaId>>,
    pub scheduled_at: Option<Option<DateTime<Utc>>>,
    /// Written only when the stored `published_at` is still unset.
    pub first_published_at: Option<DateTime<Utc>>,
    pub updated_at: DateTime<Utc>,
}

impl PageUpdate {
    pub fn new(id: PageId, updated_at: DateTime<Utc>) -> Self {
        Self {
            id,
            title: None,
            slug: None,
            content: None,
            excerpt: None,
            template: None,
            status: None,
            parent_id: None,
            featured_image_id: None,
            scheduled_at: None,
            first_published_at: None,
            updated_at,
        }
    }

    pub fn with_title(mut self, title: PageTitle) -> Self {
        self.title = Some(title);
        self
    }

    pub fn with_slug(mut self, slug: PageSlug) -> Self {
        self.slug = Some(slug);
        self
    }

    pub fn with_content(mut self, content: PageContent) -> Self {
        self.content = Some(content);
        self
    }

    pub fn with_excerpt(mut self, excerpt: impl Into<String>) -> Self {
        self.excerpt = Some(excerpt.into());
        self
    }

    pub fn with_template(mut self, template: PageTemplate) -> Self {
        self.template = Some(template);
        self
    }

    /// Setting `published` also stamps the first-publish time if missing.
    pub fn with_status(mut self, status: PageStatus) -> Self {
        self.status = Some(status);
        if status == PageStatus::Published {
            self.first_published_at = Some(self.updated_at);
        }
        self
    }

    pub fn with_parent(mut self, parent_id: Option<PageId>) -> Self {
        self.parent_id = Some(parent_id);
        self
    }

    pub fn with_featured_image(mut self, featured_image_id: Option<MediaId>) -> Self {
        self.featured_image_id = Some(featured_image_id);
        self
    }

    pub fn with_scheduled_at(mut self, scheduled_at: Option<DateTime<Utc>>) -> Self {
        self.scheduled_at = Some(scheduled_at);
        self
    }

    /// Apply the patch to an in-memory page, mirroring what the store does.
    pub fn apply_to(&self, page: &mut Page) {
        if let Some(title) = &self.title {
            page.title = title.clone();
        }
        if let Some(slug) = &self.slug {
            page.slug = slug.clone();
        }
        if let Some(content) = &self.content {
            page.content = content.clone();
        }
        if let Some(excerpt) = &self.excerpt {
            page.excerpt = excerpt.clone();
        }
        if let Some(template) = &self.template {
            page.template = template.clone();
        }
        if let Some(status) = self.status {
            page.status = status;
        }
        if let Some(parent_id) = self.parent_id {
            page.parent_id = parent_id;
        }
        if let Some(featured_image_id) = self.featured_image_id {
            page.featured_image_id = featured_image_id;
        }
        if let Some(scheduled_at) = self.scheduled_at {
            page.scheduled_at = scheduled_at;
        }
        if let Some(first) = self.first_published_at {
            page.published_at.get_or_insert(first);
        }
        page.updated_at = self.updated_at;
    }
}

/// Admin listing filter. `search` matches title or slug as a substring.
#[derive(Debug, Clone, Default)]
pub struct PageFilter {
    pub status: Option<PageStatus>,
    pub template: Option<String>,
    pub search: Option<String>,
}

impl PageFilter {
    pub fn matches(&self, page: &Page) -> bool {
        if self.status.is_some_and(|status| status != page.status) {
            return false;
        }
        if self
            .template
            .as_deref()
            .is_some_and(|template| template != page.template.as_str())
        {
            return false;
        }
        match self.search.as_deref().map(str::trim) {
            Some(term) if !term.is_empty() => {
                let term = term.to_lowercase();
                page.title.as_str().to_lowercase().contains(&term)
                    || page.slug.as_str().to_lowercase().contains(&term)
            }
            _ => true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn sample_page() -> Page {
        let now = Utc::now();
        Page {
            id: PageId::new(1).unwrap(),
            title: PageTitle::new("About").unwrap(),
            slug: PageSlug::new("about").unwrap(),
            content: PageContent::new("<p>hi</p>"),
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

    #[test]
    fn first_publish_fixes_timestamp() {
        let mut page = sample_page();
        let first = Utc::now();
        page.publish(first);
        page.unpublish(first + Duration::seconds(5));
        assert_eq!(page.status, PageStatus::Draft);
        assert_eq!(page.published_at, Some(first));

        let again = first + Duration::seconds(10);
        page.publish(again);
        assert!(page.is_published());
        assert_eq!(page.published_at, Some(first));
        assert_eq!(page.updated_at, again);
    }

    #[test]
    fn patch_touches_only_present_fields() {
        let mut page = sample_page();
        page.parent_id = Some(PageId::new(9).unwrap());
        let later = page.updated_at + Duration::seconds(1);
        let update = PageUpdate::new(page.id, later).with_title(PageTitle::new("New").unwrap());
        update.apply_to(&mut page);
        assert_eq!(page.title.as_str(), "New");
        assert_eq!(page.slug.as_str(), "about");
        assert_eq!(page.parent_id, Some(PageId::new(9).unwrap()));
        assert_eq!(page.updated_at, later);
    }

    #[test]
    fn patch_can_clear_nullable_fields() {
        let mut page = sample_page();
        page.parent_id = Some(PageId::new(9).unwrap());
        PageUpdate::new(page.id, Utc::now())
            .with_parent(None)
            .apply_to(&mut page);
        assert_eq!(page.parent_id, None);
    }

    #[test]
    fn status_published_stamps_missing_first_publish() {
        let mut page = sample_page();
        let now = Utc::now();
        PageUpdate::new(page.id, now)
            .with_status(PageStatus::Published)
            .apply_to(&mut page);
        assert_eq!(page.published_at, Some(now));

        let later = now + Duration::seconds(30);
        PageUpdate::new(page.id, later)
            .with_status(PageStatus::Published)
            .apply_to(&mut page);
        assert_eq!(page.published_at, Some(now));
    }

    #[test]
    fn filter_matches_search_on_title_or_slug() {
        let page = sample_page();
        let by_title = PageFilter {
            search: Some("ABO".into()),
            ..PageFilter::default()
        };
        assert!(by_title.matches(&page));
        let wrong_status = PageFilter {
            status: Some(PageStatus::Published),
            ..PageFilter::default()
        };
        assert!(!wrong_status.matches(&page));
        let wrong_template = PageFilter {
            template: Some("landing".into()),
            ..PageFilter::default()
        };
        assert!(!wrong_template.matches(&page));
    }
}
