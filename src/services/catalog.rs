use std::{
    fs::File,
    io::BufReader,
    path::{Path, PathBuf},
    time::Instant,
};

use serde::de::DeserializeOwned;

use crate::{
    error::{AppError, AppResult},
    services::{ranking::SimilarityMatrix, title_index::TitleIndex},
};

/// The title index and similarity matrix, loaded together and immutable
/// afterwards. Row `i` of the matrix describes title `i` of the index.
#[derive(Debug, Clone)]
pub struct Catalog {
    index: TitleIndex,
    matrix: SimilarityMatrix,
}

impl Catalog {
    /// Pairs an index with its matrix, rejecting artifacts of different size
    pub fn new(index: TitleIndex, matrix: SimilarityMatrix) -> AppResult<Self> {
        if index.len() != matrix.side() {
            return Err(AppError::ShapeMismatch(format!(
                "title list has {} entries but similarity matrix is {}x{}",
                index.len(),
                matrix.side(),
                matrix.side()
            )));
        }
        Ok(Self { index, matrix })
    }

    /// Builds a catalog straight from in-memory artifacts
    pub fn from_parts(titles: Vec<String>, rows: Vec<Vec<f64>>) -> AppResult<Self> {
        Self::new(TitleIndex::new(titles), SimilarityMatrix::from_rows(rows)?)
    }

    pub fn index(&self) -> &TitleIndex {
        &self.index
    }

    pub fn matrix(&self) -> &SimilarityMatrix {
        &self.matrix
    }

    pub fn len(&self) -> usize {
        self.index.len()
    }

    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }
}

/// Somewhere a catalog can be loaded from
#[cfg_attr(test, mockall::automock)]
pub trait CatalogSource: Send + Sync {
    fn load(&self) -> AppResult<Catalog>;

    /// Source description for logging
    fn describe(&self) -> String;
}

/// Loads the two offline artifacts from JSON files:
/// titles as an array of strings, similarities as an array of rows.
#[derive(Debug, Clone)]
pub struct JsonFileSource {
    titles_path: PathBuf,
    similarity_path: PathBuf,
}

impl JsonFileSource {
    pub fn new(titles_path: impl Into<PathBuf>, similarity_path: impl Into<PathBuf>) -> Self {
        Self {
            titles_path: titles_path.into(),
            similarity_path: similarity_path.into(),
        }
    }
}

impl CatalogSource for JsonFileSource {
    fn load(&self) -> AppResult<Catalog> {
        let started = Instant::now();

        let titles: Vec<String> = read_json(&self.titles_path)?;
        tracing::info!(
            path = %self.titles_path.display(),
            titles = titles.len(),
            "Movie titles loaded"
        );

        let rows: Vec<Vec<f64>> = read_json(&self.similarity_path)?;
        tracing::info!(
            path = %self.similarity_path.display(),
            rows = rows.len(),
            "Similarity matrix loaded"
        );

        let catalog = Catalog::from_parts(titles, rows)?;
        tracing::info!(
            items = catalog.len(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "Catalog ready"
        );

        Ok(catalog)
    }

    fn describe(&self) -> String {
        format!(
            "titles={} similarity={}",
            self.titles_path.display(),
            self.similarity_path.display()
        )
    }
}

fn read_json<T: DeserializeOwned>(path: &Path) -> AppResult<T> {
    let file = File::open(path).map_err(|e| {
        tracing::error!(path = %path.display(), error = %e, "Failed to open artifact");
        e
    })?;
    Ok(serde_json::from_reader(BufReader::new(file))?)
}

/// Loads a catalog, logging where it came from
pub fn load_catalog(source: &dyn CatalogSource) -> AppResult<Catalog> {
    tracing::info!(source = %source.describe(), "Loading catalog");
    source.load()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_temp(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_load_from_json_files() {
        let titles = write_temp(r#"["A", "B", "C"]"#);
        let sim = write_temp("[[1.0, 0.5, 0.1], [0.5, 1.0, 0.2], [0.1, 0.2, 1.0]]");

        let catalog = JsonFileSource::new(titles.path(), sim.path()).load().unwrap();
        assert_eq!(catalog.len(), 3);
        assert_eq!(catalog.index().resolve("C"), Some(2));
        assert_eq!(catalog.matrix().row(1).unwrap(), &[0.5, 1.0, 0.2]);
    }

    #[test]
    fn test_empty_catalog() {
        let catalog = Catalog::from_parts(Vec::new(), Vec::new()).unwrap();
        assert!(catalog.is_empty());
        assert_eq!(catalog.len(), 0);
    }

    #[test]
    fn test_count_mismatch_rejected() {
        let titles = write_temp(r#"["A", "B", "C"]"#);
        let sim = write_temp("[[1.0, 0.5], [0.5, 1.0]]");

        let err = JsonFileSource::new(titles.path(), sim.path())
            .load()
            .unwrap_err();
        assert!(matches!(err, AppError::ShapeMismatch(_)));
    }

    #[test]
    fn test_missing_file() {
        let sim = write_temp("[[1.0]]");
        let err = JsonFileSource::new("/nonexistent/titles.json", sim.path())
            .load()
            .unwrap_err();
        assert!(matches!(err, AppError::Io(_)));
    }

    #[test]
    fn test_malformed_json() {
        let titles = write_temp(r#"["A", 3]"#);
        let sim = write_temp("[[1.0, 0.0], [0.0, 1.0]]");
        let err = JsonFileSource::new(titles.path(), sim.path())
            .load()
            .unwrap_err();
        assert!(matches!(err, AppError::Json(_)));
    }

    #[test]
    fn test_load_catalog_uses_source() {
        let mut source = MockCatalogSource::new();
        source
            .expect_describe()
            .return_const("mock".to_string());
        source.expect_load().times(1).returning(|| {
            Catalog::from_parts(
                vec!["A".into(), "B".into()],
                vec![vec![1.0, 0.3], vec![0.3, 1.0]],
            )
        });

        let catalog = load_catalog(&source).unwrap();
        assert_eq!(catalog.len(), 2);
    }

    #[test]
    fn test_load_catalog_propagates_errors() {
        let mut source = MockCatalogSource::new();
        source
            .expect_describe()
            .return_const("mock".to_string());
        source
            .expect_load()
            .returning(|| Err(AppError::ShapeMismatch("3 titles, 2x2 matrix".into())));

        assert!(matches!(
            load_catalog(&source),
            Err(AppError::ShapeMismatch(_))
        ));
    }
}
