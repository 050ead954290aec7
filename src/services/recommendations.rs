use crate::{
    error::AppResult,
    models::RecommendedTitle,
    services::{catalog::Catalog, ranking::top_k},
};

/// Outcome of a recommendation lookup.
///
/// An unknown title is an expected result, not an error, so callers can tell
/// "never heard of it" apart from "nothing to recommend".
#[derive(Debug, Clone, PartialEq)]
pub enum Recommendation {
    Found(Vec<RecommendedTitle>),
    NotFound,
}

/// Recommends up to `k` titles similar to `movie_name`.
///
/// Resolves the name through the title index, ranks its matrix row and maps
/// the resulting positions back to titles.
pub fn recommend(catalog: &Catalog, movie_name: &str, k: usize) -> AppResult<Recommendation> {
    let Some(position) = catalog.index().resolve(movie_name) else {
        tracing::debug!(movie_name, "Title not in catalog");
        return Ok(Recommendation::NotFound);
    };

    let neighbors = top_k(catalog.matrix(), position, k)?;

    let titles = neighbors
        .into_iter()
        .map(|neighbor| {
            Ok(RecommendedTitle {
                position: neighbor.position,
                title: catalog.index().name_of(neighbor.position)?.to_string(),
                score: neighbor.score,
            })
        })
        .collect::<AppResult<Vec<_>>>()?;

    Ok(Recommendation::Found(titles))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> Catalog {
        Catalog::from_parts(
            vec!["A".into(), "B".into(), "C".into(), "D".into()],
            vec![
                vec![1.0, 0.2, 0.4, 0.3],
                vec![0.2, 1.0, 0.9, 0.1],
                vec![0.4, 0.9, 1.0, 0.5],
                vec![0.3, 0.1, 0.5, 1.0],
            ],
        )
        .unwrap()
    }

    fn titles(result: Recommendation) -> Vec<String> {
        match result {
            Recommendation::Found(found) => found.into_iter().map(|r| r.title).collect(),
            Recommendation::NotFound => panic!("expected recommendations"),
        }
    }

    #[test]
    fn test_recommend_by_name() {
        let result = recommend(&catalog(), "B", 2).unwrap();
        assert_eq!(titles(result), vec!["C", "A"]);
    }

    #[test]
    fn test_recommend_caps_at_catalog_size() {
        let result = recommend(&catalog(), "B", 5).unwrap();
        assert_eq!(titles(result), vec!["C", "A", "D"]);
    }

    #[test]
    fn test_scores_carried_through() {
        match recommend(&catalog(), "B", 1).unwrap() {
            Recommendation::Found(found) => {
                assert_eq!(found[0].position, 2);
                assert_eq!(found[0].score, 0.9);
            }
            Recommendation::NotFound => panic!("expected recommendations"),
        }
    }

    #[test]
    fn test_unknown_title() {
        assert_eq!(
            recommend(&catalog(), "Z", 5).unwrap(),
            Recommendation::NotFound
        );
    }

    #[test]
    fn test_zero_k_is_found_but_empty() {
        assert_eq!(
            recommend(&catalog(), "A", 0).unwrap(),
            Recommendation::Found(Vec::new())
        );
    }
}
