//! Static kiosk data: the parts catalog, part selection state, and
//! loading phrases.

mod error;
mod load;
mod model;
mod phrases;
mod selection;

/// Catalog error type.
pub use error::CatalogError;
/// Catalog loading.
pub use load::PartsCatalog;
/// Catalog models.
pub use model::{Difficulty, PartData};
/// Loading phrase lists and rotation.
pub use phrases::{GENERAL_LOADING_PHRASES, PhraseRotation, SKETCH_LOADING_PHRASES};
/// Part selection state.
pub use selection::PartSelection;
