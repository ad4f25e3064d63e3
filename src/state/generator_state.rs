use crate::constants::GENERATION_DURATION_DEFAULT_SECS;
use crate::models::GeneratedTrack;

/// Form and progress state of the generation screen.
pub struct GeneratorState {
    pub description: String,
    pub duration_secs: u32,
    pub file_name: String,
    pub generating: bool,
    /// Validation or backend error, shown inline under the form.
    pub error: Option<String>,
    /// The most recent successful generation, offered for playback.
    pub last_generated: Option<GeneratedTrack>,
}

impl Default for GeneratorState {
    fn default() -> Self {
        Self {
            description: String::new(),
            duration_secs: GENERATION_DURATION_DEFAULT_SECS,
            file_name: String::new(),
            generating: false,
            error: None,
            last_generated: None,
        }
    }
}

impl GeneratorState {
    pub fn reset_form(&mut self) {
        self.description.clear();
        self.file_name.clear();
        self.duration_secs = GENERATION_DURATION_DEFAULT_SECS;
        self.error = None;
    }
}
