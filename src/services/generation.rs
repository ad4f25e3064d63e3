//! Generation service: request validation and result shaping.
//!
//! Validation runs before any network call; an invalid form never reaches
//! the backend.

use crate::constants::{
    GENERATION_DURATION_MAX_SECS, GENERATION_DURATION_MIN_SECS, GRADIENT_PALETTE,
    MAX_DESCRIPTION_CHARS,
};
use crate::models::{GenerateRequest, GenerateResponse, GeneratedTrack};
use crate::utils::formatting::derived_title;

pub fn validate_description(description: &str) -> Result<(), String> {
    let trimmed = description.trim();
    if trimmed.is_empty() {
        return Err("Describe the music you want to generate".to_string());
    }
    let chars = trimmed.chars().count();
    if chars > MAX_DESCRIPTION_CHARS {
        return Err(format!(
            "Description is too long ({} of {} characters)",
            chars, MAX_DESCRIPTION_CHARS
        ));
    }
    Ok(())
}

/// An empty name is fine (the backend picks a default); otherwise only
/// letters, digits, hyphens, and underscores are allowed.
pub fn validate_file_name(file_name: &str) -> Result<(), String> {
    let trimmed = file_name.trim();
    if trimmed.is_empty() {
        return Ok(());
    }
    if trimmed
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
    {
        Ok(())
    } else {
        Err("File name may only contain letters, digits, '-' and '_'".to_string())
    }
}

/// Validate the form and assemble the request body.
pub fn build_request(
    description: &str,
    duration: u32,
    file_name: &str,
) -> Result<GenerateRequest, String> {
    validate_description(description)?;
    validate_file_name(file_name)?;

    let duration = duration.clamp(GENERATION_DURATION_MIN_SECS, GENERATION_DURATION_MAX_SECS);
    let file_name = {
        let trimmed = file_name.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        }
    };

    Ok(GenerateRequest {
        description: description.trim().to_string(),
        duration: duration as f32,
        file_name,
    })
}

/// Shape the backend's answer into the track that gets persisted. The color
/// cycles the palette by how many tracks the user has generated so far.
pub fn track_from_response(
    description: &str,
    duration: u32,
    response: &GenerateResponse,
    generated_so_far: u64,
) -> GeneratedTrack {
    GeneratedTrack {
        file_name: response.file_name.clone(),
        description: description.trim().to_string(),
        duration,
        title: derived_title(description),
        cover: String::new(),
        color: GRADIENT_PALETTE[(generated_so_far as usize) % GRADIENT_PALETTE.len()].to_string(),
        created_at: String::new(),
        audio_url: response.audio_url.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn description_boundary_is_five_hundred_chars() {
        let ok = "x".repeat(500);
        assert!(validate_description(&ok).is_ok());

        let too_long = "x".repeat(501);
        let err = validate_description(&too_long).unwrap_err();
        assert!(err.contains("501"));

        assert!(validate_description("   ").is_err());
    }

    #[test]
    fn file_name_rejects_spaces_and_dots() {
        assert!(validate_file_name("my-track_01").is_ok());
        assert!(validate_file_name("").is_ok());
        assert!(validate_file_name("my track").is_err());
        assert!(validate_file_name("track.wav").is_err());
        assert!(validate_file_name("naïve").is_err());
    }

    #[test]
    fn build_request_omits_empty_file_name() {
        let request = build_request("ambient piano", 15, "  ").unwrap();
        assert_eq!(request.description, "ambient piano");
        assert_eq!(request.duration, 15.0);
        assert!(request.file_name.is_none());

        let named = build_request("ambient piano", 15, "calm_piano").unwrap();
        assert_eq!(named.file_name.as_deref(), Some("calm_piano"));
    }

    #[test]
    fn invalid_form_never_builds_a_request() {
        assert!(build_request("", 15, "").is_err());
        assert!(build_request("ambient piano", 15, "a b").is_err());
    }

    #[test]
    fn response_is_shaped_into_a_titled_track() {
        let response = GenerateResponse {
            file_name: "x.wav".to_string(),
            audio_url: "http://localhost:8000/x.wav".to_string(),
        };
        let track = track_from_response("ambient piano", 15, &response, 4);
        assert_eq!(track.title, "ambient piano");
        assert_eq!(track.duration, 15);
        assert_eq!(track.color, GRADIENT_PALETTE[0]);
        assert!(track.created_at.is_empty());
    }
}
