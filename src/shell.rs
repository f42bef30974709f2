use log::debug;

use crate::config::thumbnail_url;
use crate::error::Error;
use crate::{CompletionService, LanguageOption, TranscriptService, extract_video_id};

/// Interaction state. Every failure transition returns to `Idle`; nothing here
/// terminates the process.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum State {
    Idle,
    LinkEntered,
    IdentifierResolved {
        video_id: String,
    },
    LanguagesListed {
        video_id: String,
        options: Vec<LanguageOption>,
    },
    LanguageSelected {
        video_id: String,
        options: Vec<LanguageOption>,
        code: String,
    },
    Submitted,
    TranscriptFetched,
    Summarized,
}

/// Discrete user input events
#[derive(Debug, Clone)]
pub enum Event {
    LinkEntered(String),
    LanguageChosen(String),
    Submitted,
}

/// Render-technology-independent outputs, emitted in order
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Output {
    Languages(Vec<String>),
    Thumbnail(String),
    Notice(String),
    Summary(String),
    Error(String),
}

/// Presentation Shell: orchestrates one interaction at a time over the two
/// external services. One event in flight, no shared state across interactions.
pub struct Shell<'a, T, C> {
    transcripts: &'a T,
    completions: &'a C,
    state: State,
}

impl<'a, T, C> Shell<'a, T, C>
where
    T: TranscriptService,
    C: CompletionService,
{
    pub fn new(transcripts: &'a T, completions: &'a C) -> Self {
        Shell {
            transcripts,
            completions,
            state: State::Idle,
        }
    }

    pub fn state(&self) -> &State {
        &self.state
    }

    /// Listed options for the current interaction, when available
    pub fn language_options(&self) -> Option<&[LanguageOption]> {
        match &self.state {
            State::LanguagesListed { options, .. } | State::LanguageSelected { options, .. } => Some(options),
            _ => None,
        }
    }

    /// Advance the state machine by one input event, returning everything the
    /// front-end should render. Events with no transition in the current state
    /// are ignored.
    pub async fn handle(&mut self, event: Event) -> Vec<Output> {
        match event {
            // A new link restarts the interaction from any state
            Event::LinkEntered(link) => self.on_link(&link).await,
            Event::LanguageChosen(name) => self.on_language(&name),
            Event::Submitted => self.on_submit().await,
        }
    }

    async fn on_link(&mut self, link: &str) -> Vec<Output> {
        self.state = State::LinkEntered;

        let video_id = match extract_video_id(link) {
            Some(id) => id,
            None => {
                debug!("Could not extract a video ID from: {link}");
                self.state = State::Idle;
                return vec![Output::Error(Error::InvalidLink.to_string())];
            }
        };

        debug!("Resolved video ID: {video_id}");
        self.state = State::IdentifierResolved {
            video_id: video_id.clone(),
        };

        match self.transcripts.list_languages(&video_id).await {
            Ok(options) => {
                let names = options.iter().map(|o| o.name.clone()).collect();
                self.state = State::LanguagesListed { video_id, options };
                vec![Output::Languages(names)]
            }
            Err(e) => {
                self.state = State::Idle;
                vec![Output::Error(e.to_string())]
            }
        }
    }

    fn on_language(&mut self, name: &str) -> Vec<Output> {
        let (video_id, options) = match &self.state {
            State::LanguagesListed { video_id, options } => (video_id.clone(), options.clone()),
            // Re-selection before submit is allowed
            State::LanguageSelected { video_id, options, .. } => (video_id.clone(), options.clone()),
            _ => return vec![],
        };

        match options.iter().find(|o| o.name == name) {
            Some(option) => {
                debug!("Selected language: {} ({})", option.name, option.code);
                let code = option.code.clone();
                self.state = State::LanguageSelected { video_id, options, code };
                vec![]
            }
            None => vec![Output::Error(format!("Unknown language: {name}"))],
        }
    }

    async fn on_submit(&mut self) -> Vec<Output> {
        let (video_id, code) = match &self.state {
            State::LanguageSelected { video_id, code, .. } => (video_id.clone(), code.clone()),
            _ => return vec![],
        };

        self.state = State::Submitted;
        let mut outputs = vec![
            Output::Thumbnail(thumbnail_url(&video_id)),
            Output::Notice("Extracting transcript...".to_string()),
        ];

        let transcript_text = match self.transcripts.fetch_text(&video_id, &code).await {
            Ok(text) => text,
            Err(e) => {
                self.state = State::Idle;
                outputs.push(Output::Error(e.to_string()));
                return outputs;
            }
        };

        self.state = State::TranscriptFetched;
        outputs.push(Output::Notice("Generating summary...".to_string()));

        match self.completions.generate(&transcript_text).await {
            Ok(summary) => {
                self.state = State::Summarized;
                outputs.push(Output::Summary(summary));
            }
            Err(e) => {
                self.state = State::Idle;
                outputs.push(Output::Error(e.to_string()));
            }
        }
        outputs
    }
}
