//! Presentation adapters over the analysis output. Both consumers read
//! only the report records, never the raw dataset.

pub mod console;
pub mod html;
