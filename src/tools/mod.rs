pub mod clean;
pub mod digest;
pub mod enrich;
pub mod extract;
pub mod fetch;
pub mod scrape;
