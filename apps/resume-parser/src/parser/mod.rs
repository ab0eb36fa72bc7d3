// Resume parsing: title-case keyword extraction behind POST /parse.

pub mod extractor;
pub mod handlers;
pub mod models;
pub mod title_case;
