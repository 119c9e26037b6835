pub mod book;
pub mod input;
pub mod markup;
pub mod page;
pub mod pipeline;
pub mod shape;
pub mod view;


pub use input::{InputEvent, SearchInput};
pub use page::{html_document, render_page};
pub use pipeline::LookupSession;
pub use shape::{shape_entries, shape_entry};
