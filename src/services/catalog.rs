//! Catalog service: client-side track filtering and derived genre facets.

use std::collections::HashMap;

use crate::constants::{FACET_COUNT, GRADIENT_PALETTE};
use crate::models::{GenreSummary, Track};

/// Filter a fetched page by case-insensitive substring over title, artist,
/// or any tag. An empty query returns the page unchanged.
pub fn filter_tracks(tracks: &[Track], query: &str) -> Vec<Track> {
    let needle = query.trim().to_lowercase();
    tracks
        .iter()
        .filter(|t| t.matches(&needle))
        .cloned()
        .collect()
}

/// Derive up to four genre facets from tag frequency across the fetched
/// page. Facets are ordered by count descending (ties alphabetical) and
/// colored by cycling the gradient palette in rank order.
pub fn derive_facets(tracks: &[Track]) -> Vec<GenreSummary> {
    let mut counts: HashMap<&str, u64> = HashMap::new();
    let mut covers: HashMap<&str, &str> = HashMap::new();

    for track in tracks {
        for tag in &track.tags {
            *counts.entry(tag.as_str()).or_insert(0) += 1;
            if !track.cover.is_empty() {
                covers.entry(tag.as_str()).or_insert(track.cover.as_str());
            }
        }
    }

    let mut ranked: Vec<(&str, u64)> = counts.into_iter().collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
    ranked.truncate(FACET_COUNT);

    ranked
        .into_iter()
        .enumerate()
        .map(|(i, (tag, count))| GenreSummary {
            name: capitalize(tag),
            tracks: count,
            image: covers.get(tag).unwrap_or(&"").to_string(),
            color: GRADIENT_PALETTE[i % GRADIENT_PALETTE.len()].to_string(),
        })
        .collect()
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        None => String::new(),
        Some(first) => first.to_uppercase().chain(chars).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Attribution;

    fn track(id: &str, title: &str, artist: &str, tags: &[&str]) -> Track {
        Track {
            id: id.to_string(),
            title: title.to_string(),
            artist: artist.to_string(),
            duration: "3:00".to_string(),
            cover: String::new(),
            tags: tags.iter().map(|t| t.to_string()).collect(),
            plays: String::new(),
            color: String::new(),
            audio_url: String::new(),
            attribution: Attribution::default(),
        }
    }

    #[test]
    fn empty_query_returns_page_unchanged() {
        let page = vec![
            track("1", "Night Drive", "Neon", &["synthwave"]),
            track("2", "Morning Haze", "Mist", &["ambient"]),
        ];
        assert_eq!(filter_tracks(&page, ""), page);
        assert_eq!(filter_tracks(&page, "   "), page);
    }

    #[test]
    fn filtered_result_is_a_matching_subset() {
        let page = vec![
            track("1", "Night Drive", "Neon", &["synthwave"]),
            track("2", "Morning Haze", "Mist", &["ambient", "chill"]),
            track("3", "Chilly Winds", "Neon", &["folk"]),
        ];
        let filtered = filter_tracks(&page, "CHILL");
        let ids: Vec<_> = filtered.iter().map(|t| t.id.as_str()).collect();
        assert_eq!(ids, vec!["2", "3"]);
        assert!(filtered.iter().all(|t| t.matches("chill")));
    }

    #[test]
    fn no_match_yields_empty_list() {
        let page = vec![track("1", "Night Drive", "Neon", &["synthwave"])];
        assert!(filter_tracks(&page, "opera").is_empty());
    }

    #[test]
    fn facets_keep_top_four_tags_with_cycled_colors() {
        let page = vec![
            track("1", "a", "x", &["jazz", "lofi"]),
            track("2", "b", "x", &["jazz", "lofi", "piano"]),
            track("3", "c", "x", &["jazz", "lofi", "piano", "rain"]),
            track("4", "d", "x", &["jazz", "ambient", "rain"]),
            track("5", "e", "x", &["jazz"]),
        ];
        let facets = derive_facets(&page);
        assert_eq!(facets.len(), 4);
        assert_eq!(facets[0].name, "Jazz");
        assert_eq!(facets[0].tracks, 5);
        assert_eq!(facets[1].name, "Lofi");
        // piano and rain tie at 2; alphabetical order breaks the tie
        assert_eq!(facets[2].name, "Piano");
        assert_eq!(facets[3].name, "Rain");
        for (i, facet) in facets.iter().enumerate() {
            assert_eq!(facet.color, GRADIENT_PALETTE[i]);
        }
    }

    #[test]
    fn fewer_tags_than_four_yields_fewer_facets() {
        let page = vec![track("1", "a", "x", &["jazz"])];
        let facets = derive_facets(&page);
        assert_eq!(facets.len(), 1);
    }
}
