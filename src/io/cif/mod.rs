//! PDBx/mmCIF block reader exposing categories as positionally aligned columns.

mod category;
mod reader;
mod tokenizer;

pub use category::Category;
pub use reader::CifFile;
pub use tokenizer::CifValue;
