//! Interactive menu loop over the movie store.
//!
//! One state, awaiting a command; every handler returns here. The loop is
//! generic over the line source and sink so sessions can be scripted in
//! tests. A connection is opened per operation and dropped as soon as the
//! handler finishes with it.

use std::io::{self, BufRead, Write};
use std::path::Path;

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;
use cinelog_catalog::{Movie, MovieDraft};
use cinelog_db::{
    delete_movie, get_movie, insert_movie, list_movies, open_database, update_movie, Connection,
};

use crate::error::CliError;
use crate::observer::OperationObserver;
use crate::prompt;

const MENU: &str = "\n===== Movie Catalog =====\n\
1. List movies\n\
2. Find movie by id\n\
3. Add movie\n\
4. Update movie\n\
5. Delete movie\n\
0. Quit";

/// Whether the session keeps going after a handler.
enum Flow {
    Continue,
    Exit,
}

/// Run the menu loop until the quit command or end of input.
pub fn run<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    db_path: &Path,
    observer: &dyn OperationObserver,
) -> Result<(), CliError> {
    loop {
        writeln!(output, "{MENU}")?;
        let Some(choice) = prompt::read_menu_choice(input, output)? else {
            return Ok(());
        };

        let flow = match choice.trim() {
            "1" => {
                run_list(output, db_path, observer)?;
                Flow::Continue
            }
            "2" => run_get(input, output, db_path, observer)?,
            "3" => run_create(input, output, db_path, observer)?,
            "4" => run_update(input, output, db_path, observer)?,
            "5" => run_delete(input, output, db_path, observer)?,
            "0" => return Ok(()),
            other => {
                writeln!(
                    output,
                    "{}",
                    format!("Unknown option: {other:?}").if_supports_color(Stdout, |t| t.yellow()),
                )?;
                Flow::Continue
            }
        };

        if let Flow::Exit = flow {
            return Ok(());
        }
    }
}

/// Open the store for one operation, reporting a failure to the observer.
fn open_store(
    db_path: &Path,
    operation: &str,
    observer: &dyn OperationObserver,
) -> Result<Connection, CliError> {
    match open_database(db_path) {
        Ok(conn) => Ok(conn),
        Err(e) => {
            observer.failed(operation, &e);
            Err(e.into())
        }
    }
}

fn run_list<W: Write>(
    output: &mut W,
    db_path: &Path,
    observer: &dyn OperationObserver,
) -> Result<(), CliError> {
    observer.started("list");
    let conn = open_store(db_path, "list", observer)?;
    let movies = match list_movies(&conn) {
        Ok(movies) => movies,
        Err(e) => {
            observer.failed("list", &e);
            return Err(e.into());
        }
    };
    observer.succeeded("list", &format!("{} movies", movies.len()));

    writeln!(output, "\n=== Movies ===")?;
    if movies.is_empty() {
        writeln!(
            output,
            "{}",
            "No movies yet.".if_supports_color(Stdout, |t| t.dimmed()),
        )?;
    }
    for movie in &movies {
        writeln!(
            output,
            "ID: {} | Title: {} | Director: {} | Duration: {} min | Released: {} | Genre: {}",
            movie.id,
            movie.title,
            movie.director,
            movie.duration_minutes,
            format_date(movie),
            movie.genre.as_deref().unwrap_or("-"),
        )?;
    }
    Ok(())
}

fn run_get<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    db_path: &Path,
    observer: &dyn OperationObserver,
) -> Result<Flow, CliError> {
    writeln!(output, "\n=== Find movie ===")?;
    let Some(id) = prompt::read_id(input, output, "Movie id")? else {
        return Ok(Flow::Exit);
    };

    observer.started("get");
    let conn = open_store(db_path, "get", observer)?;
    match get_movie(&conn, id) {
        Ok(Some(movie)) => {
            observer.succeeded("get", &format!("movie {id}"));
            print_movie(output, &movie)?;
        }
        Ok(None) => {
            observer.not_found("get", id);
            print_not_found(output)?;
        }
        Err(e) => {
            observer.failed("get", &e);
            return Err(e.into());
        }
    }
    Ok(Flow::Continue)
}

fn run_create<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    db_path: &Path,
    observer: &dyn OperationObserver,
) -> Result<Flow, CliError> {
    writeln!(output, "\n=== Add movie ===")?;
    let Some(draft) = collect_draft(input, output)? else {
        return Ok(Flow::Exit);
    };

    observer.started("create");
    let conn = open_store(db_path, "create", observer)?;
    match insert_movie(&conn, &draft) {
        Ok(id) => {
            observer.succeeded("create", &format!("movie {id}"));
            writeln!(
                output,
                "{} Movie added with id {id}.",
                "\u{2714}".if_supports_color(Stdout, |t| t.green()),
            )?;
        }
        Err(e) => {
            observer.failed("create", &e);
            return Err(e.into());
        }
    }
    Ok(Flow::Continue)
}

fn run_update<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    db_path: &Path,
    observer: &dyn OperationObserver,
) -> Result<Flow, CliError> {
    writeln!(output, "\n=== Update movie ===")?;
    let Some(id) = prompt::read_id(input, output, "Movie id")? else {
        return Ok(Flow::Exit);
    };
    let Some(draft) = collect_draft(input, output)? else {
        return Ok(Flow::Exit);
    };

    observer.started("update");
    let conn = open_store(db_path, "update", observer)?;
    match update_movie(&conn, id, &draft) {
        Ok(0) => {
            observer.not_found("update", id);
            print_not_found(output)?;
        }
        Ok(_) => {
            observer.succeeded("update", &format!("movie {id}"));
            writeln!(
                output,
                "{} Movie updated.",
                "\u{2714}".if_supports_color(Stdout, |t| t.green()),
            )?;
        }
        Err(e) => {
            observer.failed("update", &e);
            return Err(e.into());
        }
    }
    Ok(Flow::Continue)
}

fn run_delete<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    db_path: &Path,
    observer: &dyn OperationObserver,
) -> Result<Flow, CliError> {
    writeln!(output, "\n=== Delete movie ===")?;
    let Some(id) = prompt::read_id(input, output, "Movie id")? else {
        return Ok(Flow::Exit);
    };

    observer.started("delete");
    let conn = open_store(db_path, "delete", observer)?;
    match delete_movie(&conn, id) {
        Ok(0) => {
            observer.not_found("delete", id);
            print_not_found(output)?;
        }
        Ok(_) => {
            observer.succeeded("delete", &format!("movie {id}"));
            writeln!(
                output,
                "{} Movie deleted.",
                "\u{2714}".if_supports_color(Stdout, |t| t.green()),
            )?;
        }
        Err(e) => {
            observer.failed("delete", &e);
            return Err(e.into());
        }
    }
    Ok(Flow::Continue)
}

/// Prompt for the full replacement field set used by create and update.
fn collect_draft<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
) -> io::Result<Option<MovieDraft>> {
    let Some(title) = prompt::read_required_text(input, output, "Title")? else {
        return Ok(None);
    };
    let Some(director) = prompt::read_required_text(input, output, "Director")? else {
        return Ok(None);
    };
    let Some(duration_minutes) = prompt::read_duration(input, output, "Duration")? else {
        return Ok(None);
    };
    let Some(release_date) = prompt::read_optional_date(input, output, "Release date")? else {
        return Ok(None);
    };
    let Some(genre) = prompt::read_optional_text(input, output, "Genre")? else {
        return Ok(None);
    };

    Ok(Some(MovieDraft {
        title,
        director,
        duration_minutes,
        release_date,
        genre,
    }))
}

fn print_movie<W: Write>(output: &mut W, movie: &Movie) -> io::Result<()> {
    writeln!(output, "Title: {}", movie.title)?;
    writeln!(output, "Director: {}", movie.director)?;
    writeln!(output, "Duration: {} min", movie.duration_minutes)?;
    writeln!(output, "Released: {}", format_date(movie))?;
    writeln!(output, "Genre: {}", movie.genre.as_deref().unwrap_or("-"))?;
    Ok(())
}

fn print_not_found<W: Write>(output: &mut W) -> io::Result<()> {
    writeln!(
        output,
        "{} Movie not found.",
        "?".if_supports_color(Stdout, |t| t.yellow()),
    )?;
    Ok(())
}

fn format_date(movie: &Movie) -> String {
    movie
        .release_date
        .map(|d| d.to_string())
        .unwrap_or_else(|| "-".to_string())
}
