// Core domain exports
pub mod allele;
pub mod matcher;
pub mod slug;

pub use allele::{Allele, Field};
pub use matcher::slug_match;
pub use slug::Slug;
