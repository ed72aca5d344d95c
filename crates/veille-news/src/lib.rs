//! News provider adapters.
//!
//! One adapter per provider, each mapping that provider's JSON response into
//! the shared [`veille_core::ArticleRecord`] shape. Adapters read every field
//! defensively (missing values become empty strings) and report failures as
//! narrow [`SourceError`] variants; degrading a failed source to an empty
//! batch is the pipeline's job, not theirs.

pub mod error;
mod fields;
pub mod mediastack;
pub mod newsdata;
pub mod source;

pub use error::SourceError;
pub use mediastack::MediastackClient;
pub use newsdata::NewsdataClient;
pub use source::NewsSource;
