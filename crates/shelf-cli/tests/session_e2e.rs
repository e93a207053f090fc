use assert_cmd::Command;
use predicates::prelude::*;

fn shelf() -> Command {
    Command::cargo_bin("shelf").unwrap()
}

#[test]
fn test_seeded_session_renders_sample_book() {
    shelf()
        .write_stdin("quit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("The Hobbit"))
        .stdout(predicate::str::contains("Tolkien"))
        .stdout(predicate::str::contains("295 pp"));
}

#[test]
fn test_empty_flag_starts_blank() {
    shelf()
        .arg("--empty")
        .write_stdin("quit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("The shelf is empty."))
        .stdout(predicate::str::contains("The Hobbit").not());
}

#[test]
fn test_session_ends_cleanly_on_end_of_input() {
    shelf().write_stdin("").assert().success();
}

#[test]
fn test_add_toggle_delete_flow() {
    // Seeded shelf -> submit a valid form -> toggle the first record ->
    // delete the second -> back to one book
    let script = "add\n\
                  The Fellowship of the Ring\n\
                  Tolkien\n\
                  423\n\
                  No\n\
                  toggle 1\n\
                  delete 2\n\
                  quit\n";

    shelf()
        .write_stdin(script)
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Added to shelf: The Fellowship of the Ring",
        ))
        .stdout(predicate::str::contains("423 pp"))
        .stdout(predicate::str::contains("Marked as read: The Hobbit"))
        .stdout(predicate::str::contains(
            "Removed from shelf: The Fellowship of the Ring",
        ));
}

#[test]
fn test_toggle_twice_restores_unread() {
    shelf()
        .write_stdin("toggle 1\ntoggle 1\nquit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Marked as read: The Hobbit"))
        .stdout(predicate::str::contains("Marked as unread: The Hobbit"));
}

#[test]
fn test_invalid_form_reports_field_errors() {
    // Scripted sessions cancel on a failed submission instead of reprompting
    let script = "add\n\
                  Hobbit3\n\
                  \n\
                  -5\n\
                  No\n\
                  quit\n";

    shelf()
        .write_stdin(script)
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "✗ title: Title can only contain letters, spaces, hyphens, and apostrophes",
        ))
        .stdout(predicate::str::contains("✗ author: Author is required"))
        .stdout(predicate::str::contains(
            "✗ pages: Pages must be a positive number",
        ))
        .stdout(predicate::str::contains("Nothing added."));
}

#[test]
fn test_unknown_index_is_reported_and_session_continues() {
    shelf()
        .write_stdin("toggle 9\nlist\nquit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Index 9 not found on the shelf"));
}

#[test]
fn test_export_prints_json() {
    shelf()
        .write_stdin("export\nquit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""title": "The Hobbit""#))
        .stdout(predicate::str::contains(r#""author": "Tolkien""#))
        .stdout(predicate::str::contains(r#""read": "No""#));
}

#[test]
fn test_help_lists_session_commands() {
    shelf()
        .write_stdin("help\nquit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("toggle"))
        .stdout(predicate::str::contains("delete"))
        .stdout(predicate::str::contains("export"));
}

#[test]
fn test_delete_range_in_one_line() {
    let script = "add\n\
                  Dune\n\
                  Herbert\n\
                  412\n\
                  Yes\n\
                  delete 1-2\n\
                  list\n\
                  quit\n";

    shelf()
        .write_stdin(script)
        .assert()
        .success()
        .stdout(predicate::str::contains("Removed from shelf: The Hobbit"))
        .stdout(predicate::str::contains("Removed from shelf: Dune"))
        .stdout(predicate::str::contains("The shelf is empty."));
}
