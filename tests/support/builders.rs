// tests/support/builders.rs
use chrono::{DateTime, Utc};

use super::mocks::{EDITOR_ID, fixed_now};
use pagewright::application::commands::pages::CreatePageCommand;
use pagewright::domain::page::{
    NewPage, PageContent, PageSlug, PageStatus, PageTemplate, PageTitle,
};
use pagewright::domain::user::UserId;

pub struct PageBuilder {
    title: String,
    slug: Option<String>,
    content: String,
    template: Option<String>,
    status: PageStatus,
    author_id: i64,
    created_at: DateTime<Utc>,
}

impl PageBuilder {
    pub fn new() -> Self {
        Self {
            title: "About".into(),
            slug: None,
            content: "<p>about us</p>".into(),
            template: None,
            status: PageStatus::Draft,
            author_id: EDITOR_ID,
            created_at: fixed_now(),
        }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn slug(mut self, slug: impl Into<String>) -> Self {
        self.slug = Some(slug.into());
        self
    }

    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.content = content.into();
        self
    }

    pub fn template(mut self, template: impl Into<String>) -> Self {
        self.template = Some(template.into());
        self
    }

    pub fn published(mut self) -> Self {
        self.status = PageStatus::Published;
        self
    }

    pub fn author(mut self, author_id: i64) -> Self {
        self.author_id = author_id;
        self
    }

    pub fn created_at(mut self, at: DateTime<Utc>) -> Self {
        self.created_at = at;
        self
    }

    pub fn command(self) -> CreatePageCommand {
        CreatePageCommand {
            title: self.title,
            slug: self.slug,
            content: Some(self.content),
            template: self.template,
            status: Some(self.status),
            ..CreatePageCommand::default()
        }
    }

    /// Domain insert; without an explicit slug the title is lowercased and
    /// spaces become hyphens.
    pub fn build(self) -> NewPage {
        let slug = self
            .slug
            .unwrap_or_else(|| self.title.to_lowercase().replace(' ', "-"));
        NewPage {
            title: PageTitle::new(self.title).unwrap(),
            slug: PageSlug::new(slug).unwrap(),
            content: PageContent::new(self.content),
            excerpt: String::new(),
            featured_image_id: None,
            template: self
                .template
                .map(|template| PageTemplate::new(template).unwrap())
                .unwrap_or_default(),
            parent_id: None,
            author_id: UserId::new(self.author_id).unwrap(),
            status: self.status,
            published_at: (self.status == PageStatus::Published).then_some(self.created_at),
            scheduled_at: None,
            created_at: self.created_at,
        }
    }
}

impl Default for PageBuilder {
    fn default() -> Self {
        Self::new()
    }
}
