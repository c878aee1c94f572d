// src/services/place_search.rs
// DOCUMENTATION: Per-cell category search, fan-out and deduplication
// PURPOSE: Collect paged nearby-search results for every (point, category)
// pair and reduce them to one appearance per place across all categories

use crate::models::{Category, CategorySpec, CATEGORIES};
use crate::services::google_maps_client::{MapsApi, NearbyPage, NearbyPlace};
use crate::services::grid_generator::GridPoint;
use std::collections::HashSet;
use std::time::Duration;

/// Maximum result pages followed per (point, category) search
const MAX_PAGES: u32 = 3;
/// Retry budget per continuation call
const MAX_RETRIES: u32 = 3;
/// Continuation tokens are rejected until they warm up upstream; every
/// continuation attempt waits this long first.
const PAGE_TOKEN_DELAY: Duration = Duration::from_secs(2);

/// Raw search results accumulated per category, in table order
pub struct CategoryBuckets {
    buckets: Vec<Vec<NearbyPlace>>,
}

impl CategoryBuckets {
    pub fn new() -> Self {
        Self {
            buckets: CATEGORIES.iter().map(|_| Vec::new()).collect(),
        }
    }

    pub fn extend(&mut self, category: Category, places: Vec<NearbyPlace>) {
        self.buckets[category as usize].extend(places);
    }
}

impl Default for CategoryBuckets {
    fn default() -> Self {
        Self::new()
    }
}

/// Deduplicate accumulated results across all categories.
///
/// One shared identifier set, consumed in table order: a place matching
/// several category keywords is kept by the earliest category and dropped
/// everywhere else. The set lives only for this call; nothing survives the
/// request. Returns the kept places per category plus the distinct count.
pub fn dedup_by_place_id(buckets: CategoryBuckets) -> (Vec<(Category, Vec<NearbyPlace>)>, usize) {
    let mut seen_ids: HashSet<String> = HashSet::new();
    let mut kept = Vec::with_capacity(CATEGORIES.len());

    for (spec, places) in CATEGORIES.iter().zip(buckets.buckets) {
        let mut unique = Vec::new();
        for place in places {
            if seen_ids.insert(place.place_id.clone()) {
                unique.push(place);
            }
        }
        kept.push((spec.category, unique));
    }

    let total = seen_ids.len();
    (kept, total)
}

/// Category searcher
/// DOCUMENTATION: One nearby search per (grid point, category table row),
/// with bounded pagination and bounded continuation retries
pub struct PlaceSearcher;

impl PlaceSearcher {
    /// Search one grid point for one category, following result pages.
    ///
    /// A failed initial call abandons this (point, category) pair with a log
    /// entry and yields whatever was collected — the request never fails on
    /// it. Continuation failures abandon only the remaining pages.
    pub async fn collect_places(
        client: &dyn MapsApi,
        point: GridPoint,
        spec: &CategorySpec,
        radius: u32,
    ) -> Vec<NearbyPlace> {
        let mut collected = Vec::new();

        let first = match client
            .nearby_search(point.location(), radius, spec.keyword, spec.place_type)
            .await
        {
            Ok(page) => page,
            Err(e) => {
                log::error!(
                    "Search failed: {} at ({}, {}): {}",
                    spec.keyword,
                    point.lat,
                    point.lng,
                    e
                );
                return collected;
            }
        };

        log::debug!("Search results: {} - {} places", spec.keyword, first.places.len());
        collected.extend(first.places);

        let mut next_token = first.next_page_token;
        let mut page_count = 1;

        while let Some(token) = next_token {
            if page_count >= MAX_PAGES {
                break;
            }
            page_count += 1;

            match Self::fetch_page_with_retry(client, &token, spec.keyword, page_count).await {
                Some(page) => {
                    collected.extend(page.places);
                    next_token = page.next_page_token;
                }
                // Retries exhausted: keep the pages already collected
                None => break,
            }
        }

        collected
    }

    async fn fetch_page_with_retry(
        client: &dyn MapsApi,
        token: &str,
        keyword: &str,
        page_count: u32,
    ) -> Option<NearbyPage> {
        for attempt in 1..=MAX_RETRIES {
            tokio::time::sleep(PAGE_TOKEN_DELAY).await;

            match client.nearby_search_page(token).await {
                Ok(page) => {
                    log::debug!(
                        "Additional results: {} - page {} - {} places",
                        keyword,
                        page_count,
                        page.places.len()
                    );
                    return Some(page);
                }
                Err(e) => {
                    if attempt == MAX_RETRIES {
                        log::error!("Page fetch failed: {} - {}", keyword, e);
                    }
                }
            }
        }

        None
    }

    /// Fan the category table out over every grid point.
    ///
    /// Strictly sequential: the point loop outside, the category table
    /// inside. Pairs are independent, so ordering only affects wall-clock
    /// time, never the result set.
    pub async fn search_grid(
        client: &dyn MapsApi,
        points: &[GridPoint],
        radius: u32,
    ) -> CategoryBuckets {
        let mut buckets = CategoryBuckets::new();

        for (idx, point) in points.iter().enumerate() {
            log::info!("Searching point {}/{}", idx + 1, points.len());

            for spec in CATEGORIES.iter() {
                let places = Self::collect_places(client, *point, spec, radius).await;
                buckets.extend(spec.category, places);
            }
        }

        buckets
    }
}
