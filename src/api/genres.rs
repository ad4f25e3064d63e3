// Top-genres aggregation against the catalog API
use crate::api::error::ApiError;
use crate::config::Config;
use crate::constants::{FACET_COUNT, GENRE_QUERY_LIST};
use crate::models::GenreSummary;
use serde::Deserialize;

const PLACEHOLDER_IMAGE: &str = "";

#[derive(Deserialize)]
struct CatalogHeaders {
    status: String,
    #[serde(default)]
    error_message: String,
    #[serde(default)]
    results_count: u64,
}

#[derive(Deserialize)]
struct CatalogTrack {
    #[serde(default)]
    album_image: String,
}

#[derive(Deserialize)]
struct CatalogPage {
    headers: CatalogHeaders,
    #[serde(default)]
    results: Vec<CatalogTrack>,
}

/// Query the catalog once per genre in the fixed list and keep the four
/// biggest genres by track count.
///
/// A failed genre query degrades to a zero-count entry instead of failing
/// the whole aggregation; only a missing credential aborts up front.
pub async fn fetch_top_genres(config: &Config) -> Result<Vec<GenreSummary>, ApiError> {
    let client_id = config
        .catalog_client_id
        .as_deref()
        .ok_or(ApiError::MissingCredential)?;

    let mut summaries = Vec::with_capacity(GENRE_QUERY_LIST.len());
    for genre in GENRE_QUERY_LIST {
        summaries.push(fetch_genre_count(config, client_id, genre).await);
    }

    Ok(top_genres(summaries))
}

async fn fetch_genre_count(config: &Config, client_id: &str, genre: &str) -> GenreSummary {
    let url = format!(
        "{}/tracks/?client_id={}&format=json&limit=1&tags={}&order=popularity_total_desc",
        config.catalog_url, client_id, genre
    );

    let fallback = GenreSummary {
        name: capitalize(genre),
        tracks: 0,
        image: PLACEHOLDER_IMAGE.to_string(),
        color: genre_token(genre).to_string(),
    };

    let page: CatalogPage = match crate::utils::http::client().get(&url).send().await {
        Ok(response) => match response.json().await {
            Ok(page) => page,
            Err(e) => {
                log::warn!("[Genres] Malformed page for {}: {}", genre, e);
                return fallback;
            }
        },
        Err(e) => {
            log::warn!("[Genres] Fetch failed for {}: {}", genre, e);
            return fallback;
        }
    };

    if page.headers.status != "success" {
        log::warn!(
            "[Genres] Catalog error for {}: {}",
            genre,
            page.headers.error_message
        );
        return fallback;
    }

    GenreSummary {
        name: capitalize(genre),
        tracks: page.headers.results_count,
        image: page
            .results
            .first()
            .map(|t| t.album_image.clone())
            .unwrap_or_else(|| PLACEHOLDER_IMAGE.to_string()),
        color: genre_token(genre).to_string(),
    }
}

/// Sort by track count descending and keep the top four. Equal counts are
/// ordered by name so the dashboard is stable across refreshes.
fn top_genres(mut summaries: Vec<GenreSummary>) -> Vec<GenreSummary> {
    summaries.sort_by(|a, b| b.tracks.cmp(&a.tracks).then_with(|| a.name.cmp(&b.name)));
    summaries.truncate(FACET_COUNT);
    summaries
}

/// Fixed gradient token per genre tag.
fn genre_token(genre: &str) -> &'static str {
    match genre {
        "electronic" | "hiphop" | "world" => "blue-violet",
        "ambient" | "classical" | "relaxation" | "soundtrack" => "teal-green",
        "jazz" | "pop" | "lounge" => "coral-orange",
        "rock" | "songwriter" | "metal" => "gold-red",
        _ => "blue-violet",
    }
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn summary(name: &str, tracks: u64) -> GenreSummary {
        GenreSummary {
            name: name.to_string(),
            tracks,
            image: String::new(),
            color: genre_token(&name.to_lowercase()).to_string(),
        }
    }

    #[test]
    fn keeps_top_four_by_count() {
        let input = vec![
            summary("Jazz", 120),
            summary("Rock", 900),
            summary("Pop", 450),
            summary("Ambient", 30),
            summary("Metal", 600),
            summary("Lounge", 700),
        ];
        let top = top_genres(input);
        let names: Vec<_> = top.iter().map(|g| g.name.as_str()).collect();
        assert_eq!(names, vec!["Rock", "Lounge", "Metal", "Pop"]);
    }

    #[test]
    fn equal_counts_are_ordered_by_name() {
        let input = vec![
            summary("World", 10),
            summary("Ambient", 10),
            summary("Jazz", 10),
            summary("Rock", 10),
            summary("Electronic", 10),
        ];
        let top = top_genres(input);
        let names: Vec<_> = top.iter().map(|g| g.name.as_str()).collect();
        assert_eq!(names, vec!["Ambient", "Electronic", "Jazz", "Rock"]);
    }

    #[test]
    fn every_listed_genre_has_a_token() {
        for genre in GENRE_QUERY_LIST {
            let token = genre_token(genre);
            assert!(crate::constants::GRADIENT_PALETTE.contains(&token));
        }
    }

    #[test]
    fn names_are_capitalized() {
        assert_eq!(capitalize("hiphop"), "Hiphop");
        assert_eq!(capitalize(""), "");
    }
}
