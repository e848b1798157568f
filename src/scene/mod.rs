//! Record store and typed record model.
//!
//! A parsed document is a flat collection of tagged records addressed by
//! local handle. [`SceneDocument`] is the store; [`Record`] carries the
//! class discriminant and typed field accessors; [`FieldValue`] is the
//! tagged value representation with cross-references as a first-class
//! variant.

mod error;
mod record;
mod store;
mod value;

pub use error::SceneError;
pub use record::Record;
pub use store::SceneDocument;
pub use value::{FieldValue, ObjectRef};
