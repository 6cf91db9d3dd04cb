mod entry;
mod layout;
mod page;

pub use entry::{IndexEntry, OutputFormat};
pub use layout::{BookLayout, PagePlan};
pub use page::PageRecord;
