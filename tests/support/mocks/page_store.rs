// tests/support/mocks/page_store.rs
use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::Mutex;

use pagewright::domain::errors::{DomainError, DomainResult};
use pagewright::domain::page::{
    ModuleId, NewPage, NewPageModule, NewPageRevision, Page, PageFilter, PageId, PageModule,
    PageModuleRepository, PageModuleUpdate, PageReadRepository, PageRevision,
    PageRevisionRepository, PageSlug, PageUpdate, PageWriteRepository, RevisionId,
    RevisionPolicy, RevisionSnapshot,
};

#[derive(Default)]
struct StoreState {
    pages: BTreeMap<PageId, Page>,
    modules: BTreeMap<ModuleId, PageModule>,
    revisions: Vec<PageRevision>,
    next_page_id: i64,
    next_module_id: i64,
    next_revision_id: i64,
}

impl StoreState {
    fn slug_taken(&self, slug: &PageSlug, except: Option<PageId>) -> bool {
        self.pages
            .values()
            .any(|page| &page.slug == slug && Some(page.id) != except)
    }

    fn modules_of(&self, page_id: PageId) -> Vec<PageModule> {
        let mut modules: Vec<PageModule> = self
            .modules
            .values()
            .filter(|module| module.page_id == page_id)
            .cloned()
            .collect();
        modules.sort_by_key(|module| (module.sort_order, module.id));
        modules
    }

    fn push_revision(&mut self, snapshot: NewPageRevision) -> RevisionId {
        self.next_revision_id += 1;
        let id = RevisionId::new(self.next_revision_id).expect("positive revision id");
        self.revisions.push(PageRevision {
            id,
            page_id: snapshot.page_id,
            content: snapshot.content,
            modules: snapshot.modules,
            author_id: snapshot.author_id,
            created_at: snapshot.created_at,
        });
        id
    }
}

/// Backs every page-side repository port with one shared map, enforcing the
/// same slug uniqueness and cascade rules as the SQLite schema.
#[derive(Default)]
pub struct InMemoryPageStore {
    state: Mutex<StoreState>,
}

impl InMemoryPageStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn revision_count(&self) -> usize {
        self.state.lock().unwrap().revisions.len()
    }

    pub fn module_count(&self) -> usize {
        self.state.lock().unwrap().modules.len()
    }

    /// Claim a slug behind the services' back, as a concurrent writer would.
    pub fn occupy_slug(&self, page: NewPage) -> Page {
        let mut state = self.state.lock().unwrap();
        state.next_page_id += 1;
        let id = PageId::new(state.next_page_id).expect("positive page id");
        let stored = into_page(id, page);
        state.pages.insert(stored.id, stored.clone());
        stored
    }
}

fn into_page(id: PageId, page: NewPage) -> Page {
    Page {
        id,
        title: page.title,
        slug: page.slug,
        content: page.content,
        excerpt: page.excerpt,
        featured_image_id: page.featured_image_id,
        template: page.template,
        parent_id: page.parent_id,
        author_id: page.author_id,
        status: page.status,
        published_at: page.published_at,
        scheduled_at: page.scheduled_at,
        created_at: page.created_at,
        updated_at: page.created_at,
    }
}

fn slug_conflict(slug: &PageSlug) -> DomainError {
    DomainError::conflict(format!("a page with slug '{slug}' already exists"))
}

#[async_trait]
impl PageWriteRepository for InMemoryPageStore {
    async fn insert(&self, page: NewPage) -> DomainResult<Page> {
        let mut state = self.state.lock().unwrap();
        if state.slug_taken(&page.slug, None) {
            return Err(slug_conflict(&page.slug));
        }
        state.next_page_id += 1;
        let id = PageId::new(state.next_page_id).expect("positive page id");
        let stored = into_page(id, page);
        state.pages.insert(stored.id, stored.clone());
        Ok(stored)
    }

    async fn update(&self, update: PageUpdate, policy: RevisionPolicy) -> DomainResult<Page> {
        let mut state = self.state.lock().unwrap();
        let current = state
            .pages
            .get(&update.id)
            .cloned()
            .ok_or_else(|| DomainError::not_found("page not found"))?;

        // Validate everything before the snapshot so a rejected write leaves no trace.
        if let Some(slug) = &update.slug {
            if state.slug_taken(slug, Some(update.id)) {
                return Err(slug_conflict(slug));
            }
        }

        if let Some(author_id) = policy.requires_snapshot(&current, update.content.as_ref()) {
            let modules = state.modules_of(current.id);
            let snapshot =
                RevisionSnapshot::capture(&current, &modules, author_id, update.updated_at);
            state.push_revision(snapshot);
        }

        let page = state
            .pages
            .get_mut(&update.id)
            .ok_or_else(|| DomainError::not_found("page not found"))?;
        update.apply_to(page);
        Ok(page.clone())
    }

    async fn delete(&self, id: PageId) -> DomainResult<()> {
        let mut state = self.state.lock().unwrap();
        if state.pages.remove(&id).is_none() {
            return Err(DomainError::not_found("page not found"));
        }
        state.modules.retain(|_, module| module.page_id != id);
        state.revisions.retain(|revision| revision.page_id != id);
        for page in state.pages.values_mut() {
            if page.parent_id == Some(id) {
                page.parent_id = None;
            }
        }
        Ok(())
    }
}

#[async_trait]
impl PageReadRepository for InMemoryPageStore {
    async fn find_by_id(&self, id: PageId) -> DomainResult<Option<Page>> {
        Ok(self.state.lock().unwrap().pages.get(&id).cloned())
    }

    async fn find_by_slug(&self, slug: &PageSlug) -> DomainResult<Option<Page>> {
        let state = self.state.lock().unwrap();
        Ok(state.pages.values().find(|page| &page.slug == slug).cloned())
    }

    async fn find_published_by_slug(&self, slug: &PageSlug) -> DomainResult<Option<Page>> {
        let state = self.state.lock().unwrap();
        Ok(state
            .pages
            .values()
            .find(|page| &page.slug == slug && page.is_published())
            .cloned())
    }

    async fn list(&self, filter: &PageFilter) -> DomainResult<Vec<Page>> {
        let state = self.state.lock().unwrap();
        let mut pages: Vec<Page> = state
            .pages
            .values()
            .filter(|page| filter.matches(page))
            .cloned()
            .collect();
        pages.sort_by(|a, b| b.updated_at.cmp(&a.updated_at).then(b.id.cmp(&a.id)));
        Ok(pages)
    }

    async fn list_published(&self) -> DomainResult<Vec<Page>> {
        let state = self.state.lock().unwrap();
        let mut pages: Vec<Page> = state
            .pages
            .values()
            .filter(|page| page.is_published())
            .cloned()
            .collect();
        pages.sort_by(|a, b| {
            b.published_at
                .cmp(&a.published_at)
                .then(b.id.cmp(&a.id))
        });
        Ok(pages)
    }
}

#[async_trait]
impl PageModuleRepository for InMemoryPageStore {
    async fn list_by_page(&self, page_id: PageId) -> DomainResult<Vec<PageModule>> {
        Ok(self.state.lock().unwrap().modules_of(page_id))
    }

    async fn insert(&self, module: NewPageModule) -> DomainResult<PageModule> {
        let mut state = self.state.lock().unwrap();
        if !state.pages.contains_key(&module.page_id) {
            return Err(DomainError::not_found("page not found"));
        }
        state.next_module_id += 1;
        let stored = PageModule {
            id: ModuleId::new(state.next_module_id).expect("positive module id"),
            page_id: module.page_id,
            module_type: module.module_type,
            content: module.content,
            settings: module.settings,
            sort_order: module.sort_order,
            is_visible: module.is_visible,
            created_at: module.created_at,
            updated_at: module.created_at,
        };
        state.modules.insert(stored.id, stored.clone());
        Ok(stored)
    }

    async fn update(&self, update: PageModuleUpdate) -> DomainResult<PageModule> {
        let mut state = self.state.lock().unwrap();
        let module = state
            .modules
            .get_mut(&update.id)
            .filter(|module| module.page_id == update.page_id)
            .ok_or_else(|| DomainError::not_found("module not found"))?;
        update.apply_to(module);
        Ok(module.clone())
    }

    async fn delete(&self, page_id: PageId, id: ModuleId) -> DomainResult<()> {
        let mut state = self.state.lock().unwrap();
        match state.modules.get(&id) {
            Some(module) if module.page_id == page_id => {
                state.modules.remove(&id);
                Ok(())
            }
            _ => Err(DomainError::not_found("module not found")),
        }
    }
}

#[async_trait]
impl PageRevisionRepository for InMemoryPageStore {
    async fn list_by_page(&self, page_id: PageId) -> DomainResult<Vec<PageRevision>> {
        let state = self.state.lock().unwrap();
        let mut revisions: Vec<PageRevision> = state
            .revisions
            .iter()
            .filter(|revision| revision.page_id == page_id)
            .cloned()
            .collect();
        revisions.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));
        Ok(revisions)
    }

    async fn find_for_page(
        &self,
        page_id: PageId,
        id: RevisionId,
    ) -> DomainResult<Option<PageRevision>> {
        let state = self.state.lock().unwrap();
        Ok(state
            .revisions
            .iter()
            .find(|revision| revision.id == id && revision.page_id == page_id)
            .cloned())
    }
}
