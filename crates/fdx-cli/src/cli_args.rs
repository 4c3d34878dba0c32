use clap::{Args, Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "fdx-cli")]
#[command(about = "Production Binder screenplay browser CLI")]
pub(crate) struct Cli {
    #[command(subcommand)]
    pub(crate) command: Mode,
}

#[derive(Debug, Subcommand)]
pub(crate) enum Mode {
    /// List scene ordinals and headings.
    Scenes(ScenesArgs),
    /// Print one scene's elements.
    Show(ShowArgs),
    /// List distinct character names across the document.
    Characters(CharactersArgs),
    /// Find the first scene containing a text fragment.
    Search(SearchArgs),
    /// Dump the whole screenplay as JSON.
    Export(ExportArgs),
    /// Browse the screenplay interactively.
    View(ViewArgs),
}

#[derive(Debug, Args)]
pub(crate) struct ScenesArgs {
    #[arg(long = "file")]
    pub(crate) file: String,
}

#[derive(Debug, Args)]
pub(crate) struct ShowArgs {
    #[arg(long = "file")]
    pub(crate) file: String,
    #[arg(long = "scene")]
    pub(crate) scene: usize,
    #[arg(long = "character")]
    pub(crate) character: Option<String>,
}

#[derive(Debug, Args)]
pub(crate) struct CharactersArgs {
    #[arg(long = "file")]
    pub(crate) file: String,
}

#[derive(Debug, Args)]
pub(crate) struct SearchArgs {
    #[arg(long = "file")]
    pub(crate) file: String,
    #[arg(long = "query")]
    pub(crate) query: String,
}

#[derive(Debug, Args)]
pub(crate) struct ExportArgs {
    #[arg(long = "file")]
    pub(crate) file: String,
}

#[derive(Debug, Args)]
pub(crate) struct ViewArgs {
    #[arg(long = "file")]
    pub(crate) file: String,
}
