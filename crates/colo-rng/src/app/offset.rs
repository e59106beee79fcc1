//! Timebase offset search workflow

use crate::domain::offset::{WindowHit, WindowSearch};
use rayon::prelude::*;
use std::sync::atomic::{AtomicU64, Ordering};

const WINDOW_CHUNK: u32 = 1 << 20;

/// Scan every step of a window search in parallel
///
/// Hits are returned in ascending step order.
pub fn find_window_hits(search: &WindowSearch) -> Vec<WindowHit> {
    (0..search.steps)
        .into_par_iter()
        .filter_map(|step| search.hit_at(step))
        .collect()
}

/// Scan a window search, reporting progress as (steps scanned, total)
pub fn find_window_hits_with_progress<F>(search: &WindowSearch, on_progress: F) -> Vec<WindowHit>
where
    F: Fn(u64, u64) + Sync,
{
    let total = search.steps as u64;
    let progress = AtomicU64::new(0);
    let chunks = search.steps.div_ceil(WINDOW_CHUNK);

    (0..chunks)
        .into_par_iter()
        .flat_map_iter(|chunk| {
            let start = chunk * WINDOW_CHUNK;
            let end = start.saturating_add(WINDOW_CHUNK).min(search.steps);
            let found: Vec<WindowHit> = (start..end).filter_map(|step| search.hit_at(step)).collect();

            let len = (end - start) as u64;
            let done = progress.fetch_add(len, Ordering::Relaxed) + len;
            on_progress(done, total);

            found
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small_search() -> WindowSearch {
        WindowSearch {
            target: 500,
            base: 0,
            step: 7,
            window: 10,
            steps: 3_000_000,
        }
    }

    #[test]
    fn test_find_window_hits_in_order() {
        let hits = find_window_hits(&small_search());
        let steps: Vec<u32> = hits.iter().map(|h| h.step).collect();

        // Seeds 490, 497 and 504 are the only ones within 10 of the target
        assert_eq!(steps, vec![70, 71, 72]);
        assert!(hits.iter().all(|h| h.offset.unsigned_abs() <= 10));
    }

    #[test]
    fn test_progress_variant_matches_plain() {
        let search = small_search();
        let reported = AtomicU64::new(0);

        let hits = find_window_hits_with_progress(&search, |done, total| {
            assert_eq!(total, 3_000_000);
            reported.fetch_max(done, Ordering::Relaxed);
        });

        assert_eq!(hits, find_window_hits(&search));
        assert_eq!(reported.load(Ordering::Relaxed), 3_000_000);
    }

    #[test]
    fn test_empty_search() {
        let search = WindowSearch {
            steps: 0,
            ..WindowSearch::default()
        };
        assert!(find_window_hits(&search).is_empty());
        assert!(find_window_hits_with_progress(&search, |_, _| {}).is_empty());
    }
}
