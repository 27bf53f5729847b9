use clap::Subcommand;
use std::io::Read;
use tempo_core::Config;

#[derive(Subcommand)]
pub enum NoteAction {
    /// Create a new notebook
    New {
        /// Notebook name
        name: String,
        /// Hex color (defaults to the configured color)
        #[arg(long)]
        color: Option<String>,
    },
    /// List notebooks
    List,
    /// Print a notebook's content
    Show {
        /// Notebook id (see `note list`)
        id: String,
    },
    /// Replace a notebook's content
    Set {
        /// Notebook id
        id: String,
        /// New content; reads stdin when omitted
        content: Option<String>,
    },
    /// Delete a notebook
    Remove {
        /// Notebook id
        id: String,
    },
}

pub fn run(action: NoteAction) -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load();
    let mut tracker = super::open_tracker(&config)?;

    match action {
        NoteAction::New { name, color } => {
            let color = color.unwrap_or_else(|| config.ui.default_color.clone());
            let notebook = tracker.create_notebook(&name, &color)?;
            println!("Created notebook {} ({})", notebook.name, notebook.id);
        }
        NoteAction::List => {
            for notebook in tracker.notes().list() {
                let preview: String = notebook.content.chars().take(50).collect();
                let preview = if preview.is_empty() { "(empty)" } else { &preview };
                println!("{}\t{}\t{}", notebook.id, notebook.name, preview);
            }
        }
        NoteAction::Show { id } => {
            let notebook = tracker
                .notes()
                .get(&id)
                .ok_or_else(|| format!("no notebook with id '{id}'"))?;
            println!("# {}", notebook.name);
            println!("{}", notebook.content);
        }
        NoteAction::Set { id, content } => {
            let content = match content {
                Some(content) => content,
                None => {
                    let mut buffer = String::new();
                    std::io::stdin().read_to_string(&mut buffer)?;
                    buffer
                }
            };
            tracker.set_notebook_content(&id, &content)?;
            println!("Saved");
        }
        NoteAction::Remove { id } => {
            let removed = tracker.remove_notebook(&id)?;
            println!("Removed notebook: {}", removed.name);
        }
    }
    Ok(())
}
