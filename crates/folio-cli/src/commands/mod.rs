pub mod classify;
pub mod footnotes;
pub mod plan;
