use clawkit_core::KnownSkill;

/// Skills worth knowing about before writing a new one.
static KNOWN_SKILLS: &[KnownSkill] = &[
    KnownSkill {
        name: "weather",
        repository: None,
        description: "Current conditions and forecasts, no API key required",
    },
    KnownSkill {
        name: "github",
        repository: None,
        description: "Issues, pull requests and CI runs through the gh CLI",
    },
    KnownSkill {
        name: "notion",
        repository: None,
        description: "Create and search pages and databases in Notion",
    },
    KnownSkill {
        name: "obsidian",
        repository: None,
        description: "Read and write notes in an Obsidian vault",
    },
    KnownSkill {
        name: "spotify-player",
        repository: None,
        description: "Control Spotify playback from the terminal",
    },
    KnownSkill {
        name: "himalaya",
        repository: Some("https://github.com/pimalaya/himalaya"),
        description: "Read, search and send email over IMAP/SMTP",
    },
    KnownSkill {
        name: "summarize",
        repository: Some("https://github.com/steipete/summarize"),
        description: "Summarize URLs, podcasts and local files",
    },
    KnownSkill {
        name: "openai-whisper",
        repository: Some("https://github.com/openai/whisper"),
        description: "Local speech-to-text transcription",
    },
];

/// The built-in catalog, in display order.
pub fn known_skills() -> &'static [KnownSkill] {
    KNOWN_SKILLS
}
