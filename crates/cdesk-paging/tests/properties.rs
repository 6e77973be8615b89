use cdesk_paging::{
    PageDefaults, PageLink, PagingEngine, RenderDispatcher, Screen, SectionKind, SectionRegistry,
    clamp_page, claim_fallback, claim_real, compute_total_pages, page_window, slice,
};
use proptest::prelude::*;
use serde_json::json;

fn records(n: usize) -> Vec<serde_json::Value> {
    (0..n).map(|i| json!({"id": i})).collect()
}

proptest! {
    #[test]
    fn total_pages_is_ceiling(total in 0usize..10_000, per_page in 1usize..500) {
        let pages = compute_total_pages(total, per_page).unwrap();
        let expected = if total == 0 { 0 } else { (total + per_page - 1) / per_page };
        prop_assert_eq!(pages, expected);
    }

    #[test]
    fn clamp_is_idempotent(page in 0usize..1_000, total in 0usize..1_000) {
        let once = clamp_page(page, total);
        prop_assert_eq!(clamp_page(once, total), once);
        prop_assert!(once >= 1 && once <= total.max(1));
    }

    #[test]
    fn slices_are_full_except_last(total in 1usize..400, per_page in 1usize..50) {
        let data: Vec<usize> = (0..total).collect();
        let pages = compute_total_pages(total, per_page).unwrap();
        for page in 1..=pages {
            let cut = slice(&data, page, per_page);
            if page < pages {
                prop_assert_eq!(cut.len(), per_page);
            } else {
                let remainder = total % per_page;
                let expected = if remainder == 0 { per_page } else { remainder };
                prop_assert_eq!(cut.len(), expected);
            }
            prop_assert_eq!(cut.start_index, (page - 1) * per_page);
        }
        prop_assert!(slice(&data, pages + 1, per_page).is_empty());
    }

    #[test]
    fn window_is_well_formed(current in 1usize..200, total in 1usize..200, radius in 0usize..4) {
        let links = page_window(current, total, radius);
        let current = clamp_page(current, total);

        prop_assert_eq!(links.first(), Some(&PageLink::Page(1)));
        prop_assert_eq!(links.last(), Some(&PageLink::Page(total)));
        prop_assert!(links.contains(&PageLink::Page(current)));
        for pair in links.windows(2) {
            prop_assert!(!(pair[0] == PageLink::Ellipsis && pair[1] == PageLink::Ellipsis));
        }
        let pages: Vec<usize> = links
            .iter()
            .filter_map(|link| match link {
                PageLink::Page(page) => Some(*page),
                PageLink::Ellipsis => None,
            })
            .collect();
        prop_assert!(pages.windows(2).all(|pair| pair[0] < pair[1]));
    }

    #[test]
    fn real_ownership_is_monotonic(real in 0usize..40, sample in 1usize..40) {
        let mut registry = SectionRegistry::new();
        registry.register(SectionKind::Users, PageDefaults::default());
        claim_real(&mut registry, SectionKind::Users, records(real)).unwrap();
        let before = registry.get(SectionKind::Users).unwrap().clone();

        let outcome = claim_fallback(&mut registry, SectionKind::Users, || records(sample)).unwrap();
        prop_assert!(!outcome.is_applied());
        prop_assert_eq!(registry.get(SectionKind::Users).unwrap(), &before);
    }

    #[test]
    fn current_page_stays_in_range(
        steps in prop::collection::vec((0usize..60, 0usize..20), 1..8),
    ) {
        // No panel is mounted, so every repaint is skipped rather than failing.
        let mut engine = PagingEngine::new(RenderDispatcher::default(), Screen::new());
        engine.register_section(SectionKind::Sites, PageDefaults::new(7).unwrap());
        for (size, page) in steps {
            engine.claim_real(SectionKind::Sites, records(size)).unwrap();
            prop_assert_eq!(engine.go_to_page(SectionKind::Sites, page), Ok(None));
            let state = engine.registry().get(SectionKind::Sites).unwrap();
            prop_assert!(state.current_page() >= 1);
            prop_assert!(state.current_page() <= state.total_pages().max(1));
            prop_assert_eq!(state.total_pages(), size.div_ceil(7));
        }
    }
}
