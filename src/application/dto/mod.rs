pub mod auth;
pub mod pages;
pub mod users;

pub use auth::{AuthTokenDto, AuthenticatedUser, TokenSubject};
pub use pages::{
    AuthorView, ModuleSnapshotDto, PageDto, PageModuleDto, PageRevisionDto, PublicPageDto,
    PublicPageSummaryDto,
};
pub use users::{CapabilityView, UserDto, UserProfileDto};
