// src/application/services/mod.rs
use std::sync::Arc;

use crate::{
    application::{
        ApplicationResult,
        commands::{pages::PageCommandService, users::UserCommandService},
        dto::AuthenticatedUser,
        ports::{
            security::{PasswordHasher, TokenManager},
            time::Clock,
            util::SlugGenerator,
        },
        queries::{
            pages::PageQueryService, public::PublicPageQueryService, users::UserQueryService,
        },
    },
    domain::{
        page::{
            PageModuleRepository, PageReadRepository, PageRevisionRepository,
            PageWriteRepository, services::PageSlugService,
        },
        user::UserRepository,
    },
};

pub struct ApplicationServices {
    pub user_commands: Arc<UserCommandService>,
    pub user_queries: Arc<UserQueryService>,
    pub page_commands: Arc<PageCommandService>,
    pub page_queries: Arc<PageQueryService>,
    pub public_pages: Arc<PublicPageQueryService>,
    token_manager: Arc<dyn TokenManager>,
}

impl ApplicationServices {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        user_repo: Arc<dyn UserRepository>,
        page_write_repo: Arc<dyn PageWriteRepository>,
        page_read_repo: Arc<dyn PageReadRepository>,
        module_repo: Arc<dyn PageModuleRepository>,
        revision_repo: Arc<dyn PageRevisionRepository>,
        password_hasher: Arc<dyn PasswordHasher>,
        token_manager: Arc<dyn TokenManager>,
        clock: Arc<dyn Clock>,
        slugger: Arc<dyn SlugGenerator>,
    ) -> Self {
        let user_commands = Arc::new(UserCommandService::new(
            Arc::clone(&user_repo),
            Arc::clone(&password_hasher),
            Arc::clone(&token_manager),
            Arc::clone(&clock),
        ));
        let user_queries = Arc::new(UserQueryService::new(
            Arc::clone(&user_repo),
            Arc::clone(&clock),
        ));

        let slug_service = Arc::new(PageSlugService::new(
            Arc::clone(&page_read_repo),
            Arc::clone(&slugger),
        ));

        let page_commands = Arc::new(PageCommandService::new(
            Arc::clone(&page_write_repo),
            Arc::clone(&page_read_repo),
            Arc::clone(&module_repo),
            Arc::clone(&revision_repo),
            Arc::clone(&user_repo),
            Arc::clone(&slug_service),
            Arc::clone(&clock),
        ));
        let page_queries = Arc::new(PageQueryService::new(
            Arc::clone(&page_read_repo),
            Arc::clone(&module_repo),
            Arc::clone(&revision_repo),
            Arc::clone(&user_repo),
        ));
        let public_pages = Arc::new(PublicPageQueryService::new(
            Arc::clone(&page_read_repo),
            Arc::clone(&module_repo),
            Arc::clone(&user_repo),
        ));

        Self {
            user_commands,
            user_queries,
            page_commands,
            page_queries,
            public_pages,
            token_manager,
        }
    }

    pub fn token_manager(&self) -> Arc<dyn TokenManager> {
        Arc::clone(&self.token_manager)
    }

    /// Resolve a raw bearer token. Capability checks happen in the services.
    pub async fn authenticate(&self, token: &str) -> ApplicationResult<AuthenticatedUser> {
        self.token_manager.authenticate(token).await
    }
}
