use super::*;
use clap::CommandFactory;
use resources::{BlogSubcommand, TeamSubcommand, UserSubcommand};

fn parse(args: &[&str]) -> Cli {
    let mut argv = vec!["cms", "--api-url", "http://api.test/api/v1", "--state-dir", "/tmp/cms-test"];
    argv.extend_from_slice(args);
    Cli::try_parse_from(argv).unwrap()
}

#[test]
fn command_tree_is_consistent() {
    Cli::command().debug_assert();
}

#[test]
fn blog_list_filters_parse() {
    let cli = parse(&["blogs", "list", "--status", "published", "--tag", "Rust", "--page", "2"]);
    let Command::Blogs(command) = cli.command else { panic!("expected blogs") };
    let BlogSubcommand::List { page, status, tag } = command.command else { panic!("expected list") };
    assert_eq!(page.page, 2);
    assert_eq!(status, Some(models::EntityStatus::Published));
    assert_eq!(tag.as_deref(), Some("Rust"));
}

#[test]
fn unknown_status_is_rejected() {
    let argv = ["cms", "--state-dir", "/tmp/x", "blogs", "list", "--status", "live"];
    assert!(Cli::try_parse_from(argv).is_err());
}

#[test]
fn unknown_role_is_rejected() {
    let argv = ["cms", "--state-dir", "/tmp/x", "users", "list", "--role", "superuser"];
    assert!(Cli::try_parse_from(argv).is_err());
}

#[test]
fn user_create_takes_role() {
    let cli = parse(&["users", "create", "--name", "Bo", "--email", "bo@x.io", "--password", "pw", "--role", "Editor"]);
    let Command::Users(command) = cli.command else { panic!("expected users") };
    let UserSubcommand::Create(args) = command.command else { panic!("expected create") };
    assert_eq!(args.role, Some(models::Role::Editor));
}

#[test]
fn repeated_social_flags_collect_in_order() {
    let cli = parse(&["teams", "create", "--social", "github=https://github.com/ada", "--social", "https://ada.dev"]);
    let Command::Teams(command) = cli.command else { panic!("expected teams") };
    let TeamSubcommand::Create(args) = command.command else { panic!("expected create") };
    assert_eq!(
        args.socials,
        vec![
            ("github".to_owned(), "https://github.com/ada".to_owned()),
            ("website".to_owned(), "https://ada.dev".to_owned()),
        ]
    );
}

#[test]
fn reorder_requires_ids() {
    let argv = ["cms", "--state-dir", "/tmp/x", "teams", "reorder"];
    assert!(Cli::try_parse_from(argv).is_err());
}

// =============================================================================
// CONSOLE ROUTES
// =============================================================================

#[test]
fn commands_map_to_console_routes() {
    let cases = [
        (vec!["login", "--email", "a@b.c", "--password", "pw"], "/login"),
        (vec!["whoami"], "/dashboard"),
        (vec!["settings", "password"], "/settings"),
        (vec!["blogs", "list"], "/blogs"),
        (vec!["blogs", "create", "--title", "T"], "/blogs/new"),
        (vec!["case-studies", "update", "cs1", "--title", "T"], "/case-studies/cs1/edit"),
        (vec!["teams", "delete", "t1", "--yes"], "/teams"),
        (vec!["users", "update", "u1", "--active", "false"], "/users/u1/edit"),
    ];
    for (args, expected) in cases {
        assert_eq!(parse(&args).command.console_path(), expected, "{args:?}");
    }
}

#[test]
fn failed_prefers_server_message() {
    assert_eq!(failed(Some("Email taken"), "fallback").to_string(), "Email taken");
    assert_eq!(failed(None, "fallback").to_string(), "fallback");
}
