pub mod catalog;
pub mod ranking;
pub mod recommendations;
pub mod title_index;

pub use catalog::{load_catalog, Catalog, CatalogSource, JsonFileSource};
pub use ranking::{top_k, Neighbor, SimilarityMatrix};
pub use recommendations::{recommend, Recommendation};
pub use title_index::TitleIndex;
