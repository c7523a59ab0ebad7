use core::num::IntErrorKind;

/// Number of questions shown on a single page.
pub const QUESTIONS_PER_PAGE: usize = 10;

/// Returns the slice of `items` shown on the (one-based) `page`. Pages past the
/// end are empty. Page zero is treated as the first page.
pub fn paginate<T>(items: &[T], page: usize) -> &[T] {
    let start = page.max(1).saturating_sub(1).saturating_mul(QUESTIONS_PER_PAGE);
    let Some(rest) = items.get(start..) else {
        return &[];
    };
    &rest[..rest.len().min(QUESTIONS_PER_PAGE)]
}

/// Extracts the first `page` parameter from a query string. Missing or
/// malformed values fall back to the first page, and non-positive values are
/// clamped to it. Numbers too large to represent saturate, landing past the
/// last page.
pub fn page_from_query(query: Option<&str>) -> usize {
    let Some(query) = query else {
        return 1;
    };

    let Some(value) = query
        .split('&')
        .filter_map(|chunk| chunk.split_once('='))
        .find_map(|(key, value)| (key == "page").then_some(value))
    else {
        return 1;
    };

    let Ok(value) = urlencoding::decode(value) else {
        return 1;
    };

    match value.trim().parse::<i64>() {
        Ok(page) if page > 0 => usize::try_from(page).unwrap_or(usize::MAX),
        Err(err) if *err.kind() == IntErrorKind::PosOverflow => usize::MAX,
        _ => 1,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn items(len: usize) -> Vec<usize> {
        (0..len).collect()
    }

    #[test]
    fn first_page_is_truncated() {
        let all = items(25);
        assert_eq!(paginate(&all, 1), &all[..10]);
        assert_eq!(paginate(&all, 2), &all[10..20]);
        assert_eq!(paginate(&all, 3), &all[20..]);
    }

    #[test]
    fn pages_past_the_end_are_empty() {
        let all = items(25);
        assert!(paginate(&all, 4).is_empty());
        assert!(paginate(&all, usize::MAX).is_empty());
        assert!(paginate::<usize>(&[], 1).is_empty());
    }

    #[test]
    fn page_length_matches_remaining_items() {
        for len in [0, 1, 9, 10, 11, 20, 37] {
            let all = items(len);
            for page in 1..=6 {
                let expected = QUESTIONS_PER_PAGE.min(len.saturating_sub((page - 1) * QUESTIONS_PER_PAGE));
                let slice = paginate(&all, page);
                assert_eq!(slice.len(), expected, "len {len}, page {page}");
                if let Some(&first) = slice.first() {
                    assert_eq!(first, (page - 1) * QUESTIONS_PER_PAGE);
                    assert!(slice.windows(2).all(|pair| pair[1] == pair[0] + 1));
                }
            }
        }
    }

    #[test]
    fn page_zero_is_first_page() {
        let all = items(15);
        assert_eq!(paginate(&all, 0), paginate(&all, 1));
    }

    #[test]
    fn parses_page_parameter() {
        assert_eq!(page_from_query(None), 1);
        assert_eq!(page_from_query(Some("")), 1);
        assert_eq!(page_from_query(Some("page=3")), 3);
        assert_eq!(page_from_query(Some("foo=bar&page=2")), 2);
        assert_eq!(page_from_query(Some("page=abc")), 1);
        assert_eq!(page_from_query(Some("page=0")), 1);
        assert_eq!(page_from_query(Some("page=-4")), 1);
        assert_eq!(page_from_query(Some("page")), 1);
        assert_eq!(page_from_query(Some("page=99999999999999999999")), usize::MAX);
        assert_eq!(page_from_query(Some("page=-99999999999999999999")), 1);
    }

    #[test]
    fn oversized_page_is_past_the_end() {
        let all = items(15);
        assert!(paginate(&all, page_from_query(Some("page=99999999999999999999"))).is_empty());
    }

    #[test]
    fn decodes_and_takes_first_page_parameter() {
        assert_eq!(page_from_query(Some("page=%32")), 2);
        assert_eq!(page_from_query(Some("page=2&page=3")), 2);
        assert_eq!(page_from_query(Some("pages=4&page=3")), 3);
        assert_eq!(page_from_query(Some("page=%FF")), 1);
    }
}
