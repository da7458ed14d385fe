use chrono::NaiveDate;
use cinelog_catalog::MovieDraft;
use cinelog_db::*;

fn inception() -> MovieDraft {
    MovieDraft {
        title: "Inception".to_string(),
        director: "Nolan".to_string(),
        duration_minutes: 148,
        release_date: NaiveDate::from_ymd_opt(2010, 7, 16),
        genre: Some("Sci-Fi".to_string()),
    }
}

fn bare(title: &str) -> MovieDraft {
    MovieDraft {
        title: title.to_string(),
        director: "Someone".to_string(),
        duration_minutes: 100,
        release_date: None,
        genre: None,
    }
}

#[test]
fn insert_then_get_returns_all_fields() {
    let conn = open_memory().unwrap();
    let id = insert_movie(&conn, &inception()).unwrap();

    let movie = get_movie(&conn, id).unwrap().unwrap();
    assert_eq!(movie.id, id);
    assert_eq!(movie.title, "Inception");
    assert_eq!(movie.director, "Nolan");
    assert_eq!(movie.duration_minutes, 148);
    assert_eq!(movie.release_date, NaiveDate::from_ymd_opt(2010, 7, 16));
    assert_eq!(movie.genre.as_deref(), Some("Sci-Fi"));
}

#[test]
fn omitted_optionals_stay_absent() {
    let conn = open_memory().unwrap();
    let id = insert_movie(&conn, &bare("Quiet")).unwrap();

    let movie = get_movie(&conn, id).unwrap().unwrap();
    assert_eq!(movie.release_date, None);
    assert_eq!(movie.genre, None);
}

#[test]
fn get_missing_returns_none() {
    let conn = open_memory().unwrap();
    assert!(get_movie(&conn, 42).unwrap().is_none());
}

#[test]
fn list_preserves_insertion_order() {
    let conn = open_memory().unwrap();
    let first = insert_movie(&conn, &bare("First")).unwrap();
    let second = insert_movie(&conn, &bare("Second")).unwrap();
    assert!(second > first);

    let movies = list_movies(&conn).unwrap();
    assert_eq!(movies.len(), 2);
    assert_eq!(movies[0].title, "First");
    assert_eq!(movies[1].title, "Second");

    assert_eq!(delete_movie(&conn, first).unwrap(), 1);
    let movies = list_movies(&conn).unwrap();
    assert_eq!(movies.len(), 1);
    assert_eq!(movies[0].title, "Second");
}

#[test]
fn update_replaces_all_fields() {
    let conn = open_memory().unwrap();
    let id = insert_movie(&conn, &inception()).unwrap();

    // Resubmit director/duration, change the title, omit genre and date
    let replacement = MovieDraft {
        title: "Inception (Director's Cut)".to_string(),
        director: "Nolan".to_string(),
        duration_minutes: 148,
        release_date: None,
        genre: None,
    };
    assert_eq!(update_movie(&conn, id, &replacement).unwrap(), 1);

    let movie = get_movie(&conn, id).unwrap().unwrap();
    assert_eq!(movie.title, "Inception (Director's Cut)");
    assert_eq!(movie.director, "Nolan");
    assert_eq!(movie.duration_minutes, 148);
    // Full replace: omitted optionals are cleared, not left untouched
    assert_eq!(movie.release_date, None);
    assert_eq!(movie.genre, None);
}

#[test]
fn update_missing_id_changes_nothing() {
    let conn = open_memory().unwrap();
    let id = insert_movie(&conn, &inception()).unwrap();

    assert_eq!(update_movie(&conn, id + 100, &bare("Ghost")).unwrap(), 0);

    let movies = list_movies(&conn).unwrap();
    assert_eq!(movies.len(), 1);
    assert_eq!(movies[0].title, "Inception");
}

#[test]
fn delete_then_get_returns_none() {
    let conn = open_memory().unwrap();
    let id = insert_movie(&conn, &inception()).unwrap();

    assert_eq!(delete_movie(&conn, id).unwrap(), 1);
    assert!(get_movie(&conn, id).unwrap().is_none());
    assert_eq!(delete_movie(&conn, id).unwrap(), 0);
}

#[test]
fn ids_are_not_reused_after_delete() {
    let conn = open_memory().unwrap();
    let first = insert_movie(&conn, &bare("First")).unwrap();
    assert_eq!(delete_movie(&conn, first).unwrap(), 1);

    let second = insert_movie(&conn, &bare("Second")).unwrap();
    assert!(second > first);
}
