mod layout;
mod not_found;
mod project_detail;
mod projects;

pub use layout::AppLayout;
pub use not_found::PageNotFound;
pub use project_detail::ProjectDetail;
pub use projects::Projects;
