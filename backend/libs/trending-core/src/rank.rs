use crate::error::ScoreError;

/// One page of a ranked collection
#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub total: usize,
    pub has_more: bool,
}

/// Sort items by descending final score and slice out one page
///
/// The sort is stable: items with equal scores keep their pre-sort relative
/// order, so ranking output is deterministic. `page` is 1-indexed;
/// `has_more` is true iff `page * page_size < total`. Operates purely on the
/// already-materialized collection — fetching is the caller's concern.
pub fn rank_and_paginate<T>(
    items: Vec<T>,
    mut score_of: impl FnMut(&T) -> f64,
    page: u32,
    page_size: usize,
) -> Result<Page<T>, ScoreError> {
    if page < 1 {
        return Err(ScoreError::InvalidPage(page));
    }

    let total = items.len();

    let mut scored: Vec<(T, f64)> = items
        .into_iter()
        .map(|item| {
            let score = score_of(&item);
            (item, score)
        })
        .collect();

    // Vec::sort_by is stable; comparing b to a sorts descending while
    // preserving the original order of ties.
    scored.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));

    let start = (page as usize - 1).saturating_mul(page_size);
    let page_items: Vec<T> = scored
        .into_iter()
        .skip(start)
        .take(page_size)
        .map(|(item, _)| item)
        .collect();

    Ok(Page {
        items: page_items,
        total,
        has_more: (page as usize).saturating_mul(page_size) < total,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Ranked {
        id: &'static str,
        score: f64,
    }

    fn ranked(id: &'static str, score: f64) -> Ranked {
        Ranked { id, score }
    }

    #[test]
    fn sorts_descending_by_score() {
        let items = vec![ranked("low", 1.0), ranked("high", 9.0), ranked("mid", 4.0)];

        let page = rank_and_paginate(items, |r| r.score, 1, 10).unwrap();

        let ids: Vec<&str> = page.items.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec!["high", "mid", "low"]);
        assert_eq!(page.total, 3);
        assert!(!page.has_more);
    }

    #[test]
    fn equal_scores_preserve_original_order() {
        let items = vec![
            ranked("first", 5.0),
            ranked("second", 5.0),
            ranked("third", 5.0),
        ];

        let page = rank_and_paginate(items, |r| r.score, 1, 10).unwrap();

        let ids: Vec<&str> = page.items.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec!["first", "second", "third"]);
    }

    #[test]
    fn second_page_of_forty_five_items() {
        // 45 ranked items, page 2 of size 20 -> ranks 21-40, more remaining
        let items: Vec<Ranked> = (0..45)
            .map(|i| Ranked {
                id: "item",
                score: (45 - i) as f64,
            })
            .collect();

        let page = rank_and_paginate(items, |r| r.score, 2, 20).unwrap();

        assert_eq!(page.items.len(), 20);
        assert_eq!(page.total, 45);
        assert!(page.has_more);
        assert_eq!(page.items[0].score, 25.0);
        assert_eq!(page.items[19].score, 6.0);
    }

    #[test]
    fn last_partial_page_has_no_more() {
        let items: Vec<Ranked> = (0..45)
            .map(|i| Ranked {
                id: "item",
                score: i as f64,
            })
            .collect();

        let page = rank_and_paginate(items, |r| r.score, 3, 20).unwrap();

        assert_eq!(page.items.len(), 5);
        assert!(!page.has_more);
    }

    #[test]
    fn page_past_the_end_is_empty() {
        let items = vec![ranked("only", 1.0)];

        let page = rank_and_paginate(items, |r| r.score, 7, 20).unwrap();

        assert!(page.items.is_empty());
        assert_eq!(page.total, 1);
        assert!(!page.has_more);
    }

    #[test]
    fn page_zero_is_rejected() {
        let items = vec![ranked("only", 1.0)];

        let err = rank_and_paginate(items, |r| r.score, 0, 20).unwrap_err();

        assert_eq!(err, ScoreError::InvalidPage(0));
    }

    #[test]
    fn empty_input_yields_empty_page() {
        let items: Vec<Ranked> = Vec::new();

        let page = rank_and_paginate(items, |r| r.score, 1, 20).unwrap();

        assert!(page.items.is_empty());
        assert_eq!(page.total, 0);
        assert!(!page.has_more);
    }
}
