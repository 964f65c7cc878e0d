//! Focused unit tests covering argument parsing, configuration resolution and
//! catalog path validation.

use super::helpers::CatalogFile;
use super::*;
use crate::catalog::{DEFAULT_CATALOG, open_engine, require_catalog};
use crate::service::{
    FeedConfig, QueryConfig, feed_config_from_layers_for_test, search_config_from_layers_for_test,
};
use camino::Utf8PathBuf;
use ortho_config::MergeComposer;
use rstest::rstest;
use serde_json::json;

#[rstest]
fn feed_config_applies_defaults() {
    let config = FeedConfig::from(FeedArgs::default());
    assert_eq!(config.catalog, Utf8PathBuf::from(DEFAULT_CATALOG));
    assert_eq!(config.page, 1);
    assert_eq!(config.limit, 20);
}

#[rstest]
#[case::search(
    QueryConfig::try_from(SearchArgs::default()),
    ARG_QUERY,
    ENV_SEARCH_QUERY
)]
#[case::autocomplete(
    QueryConfig::try_from(AutocompleteArgs::default()),
    ARG_QUERY,
    ENV_AUTOCOMPLETE_QUERY
)]
#[case::place(QueryConfig::try_from(PlaceArgs::default()), ARG_NAME, ENV_PLACE_NAME)]
fn converting_without_text_errors(
    #[case] outcome: Result<QueryConfig, CliError>,
    #[case] expected_field: &'static str,
    #[case] expected_env: &'static str,
) {
    match outcome.expect_err("missing text should error") {
        CliError::MissingArgument { field, env } => {
            assert_eq!(field, expected_field);
            assert_eq!(env, expected_env);
        }
        other => panic!("expected MissingArgument, found {other:?}"),
    }
}

#[rstest]
fn query_config_keeps_text_verbatim() {
    let args = SearchArgs {
        query: Some("  Delhi ".to_owned()),
        catalog: Some(Utf8PathBuf::from("places.csv")),
    };
    let config = QueryConfig::try_from(args).expect("config should build");
    assert_eq!(config.text, "  Delhi ");
    assert_eq!(config.catalog, Utf8PathBuf::from("places.csv"));
}

#[rstest]
fn require_catalog_accepts_files() {
    let file = CatalogFile::three_landmarks();
    require_catalog(file.path()).expect("catalog file exists");
}

#[rstest]
fn require_catalog_reports_missing_files() {
    let file = CatalogFile::three_landmarks();
    let missing = file.missing_path();
    match require_catalog(&missing).expect_err("expected failure") {
        CliError::MissingSourceFile { field, path } => {
            assert_eq!(field, ARG_CATALOG);
            assert_eq!(path, missing);
        }
        other => panic!("expected MissingSourceFile, found {other:?}"),
    }
}

#[rstest]
fn require_catalog_rejects_directories() {
    let file = CatalogFile::three_landmarks();
    match require_catalog(&file.directory_path()).expect_err("expected directory rejection") {
        CliError::SourcePathNotFile { field, .. } => assert_eq!(field, ARG_CATALOG),
        other => panic!("expected SourcePathNotFile, found {other:?}"),
    }
}

#[rstest]
fn open_engine_reports_malformed_catalogs() {
    let file = CatalogFile::with_contents("State,City,Name\nDelhi,Delhi,Red Fort\n");
    match open_engine(file.path()).expect_err("missing columns should fail") {
        CliError::LoadCatalog { path, source } => {
            assert_eq!(path.as_path(), file.path());
            assert!(matches!(
                *source,
                discover_data::DataLoadError::MissingColumn { .. }
            ));
        }
        other => panic!("expected LoadCatalog, found {other:?}"),
    }
}

#[rstest]
fn open_engine_serves_the_loaded_catalog() {
    let file = CatalogFile::three_landmarks();
    let engine = open_engine(file.path()).expect("catalog should load");
    assert_eq!(engine.catalog().len(), 3);
}

#[rstest]
fn merge_layers_maps_configuration_errors() {
    let mut composer = MergeComposer::new();
    composer.push_cli(json!({ "page": "two" }));

    let err = feed_config_from_layers_for_test(composer.layers())
        .expect_err("invalid config layer should map to CliError::Configuration");
    match err {
        CliError::Configuration(_) => {}
        other => panic!("expected CliError::Configuration, found {other:?}"),
    }
}

#[rstest]
fn merge_layers_honours_precedence() {
    let mut composer = MergeComposer::new();
    composer.push_file(
        json!({
            "catalog": "from-file.csv",
            "page": 4,
            "limit": 50,
        }),
        None,
    );
    composer.push_environment(json!({
        "page": 2,
        "limit": 10,
    }));
    composer.push_cli(json!({ "limit": 3 }));

    let config =
        feed_config_from_layers_for_test(composer.layers()).expect("merged config should build");
    assert_eq!(config.catalog, Utf8PathBuf::from("from-file.csv"));
    assert_eq!(config.page, 2);
    assert_eq!(config.limit, 3);
}

#[rstest]
fn merge_layers_supply_missing_query_from_environment() {
    let mut composer = MergeComposer::new();
    composer.push_environment(json!({ "query": "beach" }));

    let config =
        search_config_from_layers_for_test(composer.layers()).expect("merged config should build");
    assert_eq!(config.text, "beach");
    assert_eq!(config.catalog, Utf8PathBuf::from(DEFAULT_CATALOG));
}

#[rstest]
fn parses_feed_flags() {
    let cli = Cli::try_parse_from(["discover", "feed", "--page", "2", "--limit", "5"])
        .expect("feed flags should parse");
    match cli.command {
        Command::Feed(args) => {
            assert_eq!(args.page, Some(2));
            assert_eq!(args.limit, Some(5));
            assert_eq!(args.catalog, None);
        }
        other => panic!("expected feed command, found {other:?}"),
    }
    assert!(!cli.verbose);
}

#[rstest]
fn parses_positional_text_and_global_verbose() {
    let cli = Cli::try_parse_from(["discover", "place", "Taj", "--catalog", "x.csv", "-v"])
        .expect("place arguments should parse");
    assert!(cli.verbose);
    match cli.command {
        Command::Place(args) => {
            assert_eq!(args.name.as_deref(), Some("Taj"));
            assert_eq!(args.catalog, Some(Utf8PathBuf::from("x.csv")));
        }
        other => panic!("expected place command, found {other:?}"),
    }
}

#[rstest]
#[case::no_subcommand(&["discover"])]
#[case::negative_page(&["discover", "feed", "--page", "-1"])]
#[case::unknown_flag(&["discover", "demo", "--top", "3"])]
fn rejects_invalid_invocations(#[case] argv: &[&str]) {
    let err = Cli::try_parse_from(argv.iter().copied())
        .expect_err("invocation should be rejected");
    assert!(matches!(CliError::from(err), CliError::ArgumentParsing(_)));
}
