pub mod collapse;
pub mod highlight;
pub mod lazy;
pub mod selection;
pub mod viewer;

pub use collapse::{collapse_rows, expand_row};
pub use highlight::Highlight;
pub use lazy::LazyLoader;
pub use selection::{SelectedPhoto, Selection, photo_label};
