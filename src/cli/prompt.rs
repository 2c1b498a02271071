//! Interactive prompts for `brag add`

use crate::application::EntryDraft;
use crate::domain::entry::split_tags;
use crate::error::{BragError, Result};
use dialoguer::{Confirm, Input, Select};

/// Field values given on the command line
#[derive(Debug, Clone, Default)]
pub struct AddArgs {
    pub topic: Option<String>,
    pub title: Option<String>,
    pub impact: Option<String>,
    pub tags: Option<String>,
}

impl AddArgs {
    /// Whether every required field was supplied
    pub fn is_complete(&self) -> bool {
        self.topic.is_some() && self.title.is_some() && self.impact.is_some()
    }
}

fn prompt_error(e: dialoguer::Error) -> BragError {
    BragError::Prompt(e.to_string())
}

/// Build a draft, prompting for whatever the arguments left out.
/// Tags are only prompted for when something else was prompted too.
pub fn complete_draft(args: AddArgs, topics: &[String]) -> Result<EntryDraft> {
    let interactive = !args.is_complete();

    let topic = match args.topic {
        Some(topic) => topic,
        None => {
            let index = Select::new()
                .with_prompt("Select a topic")
                .items(topics)
                .default(0)
                .interact()
                .map_err(prompt_error)?;
            topics[index].clone()
        }
    };

    let title = match args.title {
        Some(title) => title,
        None => ask_text("What did you do?")?,
    };

    let impact = match args.impact {
        Some(impact) => impact,
        None => ask_text("What was the impact? (Who benefited? What changed? Any metrics?)")?,
    };

    let tags = match args.tags {
        Some(tags) => split_tags(&tags),
        None if interactive => {
            let input: String = Input::new()
                .with_prompt("Tags (optional, comma-separated)")
                .allow_empty(true)
                .interact_text()
                .map_err(prompt_error)?;
            split_tags(&input)
        }
        None => Vec::new(),
    };

    Ok(EntryDraft {
        topic,
        title,
        impact,
        tags,
    })
}

fn ask_text(prompt: &str) -> Result<String> {
    Input::<String>::new()
        .with_prompt(prompt)
        .interact_text()
        .map_err(prompt_error)
}

/// Ask before saving a previewed entry
pub fn confirm_save() -> Result<bool> {
    Confirm::new()
        .with_prompt("Save this entry?")
        .default(true)
        .interact()
        .map_err(prompt_error)
}
