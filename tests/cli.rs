use clap::Parser;
use gmail_digest::cli::{AuthCommand, Cli, Command};

#[test]
fn parses_auth_login() {
    let cli = Cli::try_parse_from(["gmail-digest", "auth", "login"]).expect("cli parse should work");
    match cli.command {
        Command::Auth(auth) => assert!(matches!(auth.command, AuthCommand::Login)),
        _ => panic!("expected auth command"),
    }
}

#[test]
fn parses_list() {
    let cli = Cli::try_parse_from(["gmail-digest", "list", "--limit", "3", "--q", "from:foo"])
        .expect("cli parse should work");
    match cli.command {
        Command::List(list) => {
            assert_eq!(list.limit, 3);
            assert_eq!(list.q.as_deref(), Some("from:foo"));
        }
        _ => panic!("expected list command"),
    }
}

#[test]
fn parses_digest_with_defaults() {
    let cli = Cli::try_parse_from(["gmail-digest", "digest"]).expect("cli parse should work");
    assert_eq!(cli.profile, "default");
    assert!(!cli.json);
    match cli.command {
        Command::Digest(digest) => {
            assert_eq!(digest.limit, 50);
            assert_eq!(digest.q, None);
            assert_eq!(digest.out, None);
            assert!(!digest.no_file);
        }
        _ => panic!("expected digest command"),
    }
}

#[test]
fn parses_digest_overrides() {
    let cli = Cli::try_parse_from([
        "gmail-digest",
        "--profile",
        "work",
        "--json",
        "digest",
        "--limit",
        "5",
        "--out",
        "today.md",
        "--no-file",
    ])
    .expect("cli parse should work");

    assert_eq!(cli.profile, "work");
    assert!(cli.json);
    match cli.command {
        Command::Digest(digest) => {
            assert_eq!(digest.limit, 5);
            assert_eq!(digest.out.as_deref().and_then(|p| p.to_str()), Some("today.md"));
            assert!(digest.no_file);
        }
        _ => panic!("expected digest command"),
    }
}
