pub mod blame;
pub mod catalog;
pub mod contents;
pub mod description;
pub mod diff;
pub mod history;
pub mod object;
pub mod path;
pub mod refs;
pub mod repository;

#[cfg(test)]
pub(crate) mod fixtures;

pub use object::{GitObject, ObjectKind};
pub use repository::GitRepository;
