pub mod repository;

pub use repository::GitOps;
