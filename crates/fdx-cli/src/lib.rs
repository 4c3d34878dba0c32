use std::ffi::OsString;

use clap::Parser;
use fdx_core::FdxError;

mod cli_args;
mod commands;
mod error_map;
mod source_loader;
mod tui;
mod tui_actions;
mod tui_render;
mod tui_state;

pub(crate) use cli_args::{
    CharactersArgs, Cli, ExportArgs, Mode, ScenesArgs, SearchArgs, ShowArgs, ViewArgs,
};
pub(crate) use error_map::{
    emit_error, map_export_json, map_source_path, map_source_read, map_tui_io,
};
pub(crate) use source_loader::{load_screenplay_file, LoadedScreenplay};
#[cfg(test)]
pub(crate) use source_loader::resolve_screenplay_path;

pub fn run_cli_from_args<I, T>(args: I) -> i32
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let cli = match Cli::try_parse_from(args) {
        Ok(cli) => cli,
        Err(error) => return error.exit_code(),
    };
    match run(cli) {
        Ok(code) => code,
        Err(error) => emit_error(error),
    }
}

fn run(cli: Cli) -> Result<i32, FdxError> {
    match cli.command {
        Mode::Scenes(args) => run_scenes(args),
        Mode::Show(args) => run_show(args),
        Mode::Characters(args) => run_characters(args),
        Mode::Search(args) => run_search(args),
        Mode::Export(args) => run_export(args),
        Mode::View(args) => run_view(args),
    }
}

fn run_scenes(args: ScenesArgs) -> Result<i32, FdxError> {
    let loaded = load_screenplay_file(&args.file)?;
    print_lines(commands::scenes_lines(&loaded.screenplay));
    Ok(0)
}

fn run_show(args: ShowArgs) -> Result<i32, FdxError> {
    let loaded = load_screenplay_file(&args.file)?;
    let lines = commands::show_lines(&loaded.screenplay, args.scene, args.character.as_deref())?;
    print_lines(lines);
    Ok(0)
}

fn run_characters(args: CharactersArgs) -> Result<i32, FdxError> {
    let loaded = load_screenplay_file(&args.file)?;
    print_lines(commands::characters_lines(&loaded.screenplay));
    Ok(0)
}

fn run_search(args: SearchArgs) -> Result<i32, FdxError> {
    let loaded = load_screenplay_file(&args.file)?;
    print_lines(commands::search_lines(&loaded.screenplay, &args.query));
    Ok(0)
}

fn run_export(args: ExportArgs) -> Result<i32, FdxError> {
    let loaded = load_screenplay_file(&args.file)?;
    print_lines(commands::export_lines(&loaded.screenplay)?);
    Ok(0)
}

fn run_view(args: ViewArgs) -> Result<i32, FdxError> {
    let loaded = load_screenplay_file(&args.file)?;
    tui::run_view_mode(&loaded)
}

fn print_lines(lines: Vec<String>) {
    for line in lines {
        println!("{}", line);
    }
}

#[cfg(test)]
mod tests;
