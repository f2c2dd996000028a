use super::*;

#[test]
fn no_command_is_none() {
    let cli = Cli::try_parse_from(["tastingmap-cli"]).expect("expected valid cli args");
    assert!(cli.command.is_none());
    assert!(cli.catalog.is_none());
}

#[test]
fn parses_geocode_command() {
    let cli = Cli::try_parse_from([
        "tastingmap-cli",
        "--catalog",
        "data/venues.yaml",
        "geocode",
        "--source",
        "gps.csv",
        "--dry-run",
    ])
    .expect("expected valid cli args");

    assert_eq!(cli.catalog.as_deref(), Some(Path::new("data/venues.yaml")));
    assert!(matches!(
        cli.command,
        Some(Commands::Geocode {
            ref source,
            output: None,
            dry_run: true,
        }) if source == Path::new("gps.csv")
    ));
}

#[test]
fn geocode_requires_source() {
    assert!(Cli::try_parse_from(["tastingmap-cli", "geocode"]).is_err());
}

#[test]
fn parses_nearby_with_negative_longitude() {
    let cli = Cli::try_parse_from([
        "tastingmap-cli",
        "nearby",
        "--lat",
        "38.03",
        "--lng",
        "-78.48",
        "--radius",
        "10",
        "--limit",
        "5",
        "--category",
        "winery",
        "--category",
        "cidery",
    ])
    .expect("expected valid cli args");

    let Some(Commands::Nearby {
        lat,
        lng,
        radius,
        limit,
        filter,
    }) = cli.command
    else {
        panic!("expected nearby command");
    };
    assert!((lat - 38.03).abs() < f64::EPSILON);
    assert!((lng + 78.48).abs() < f64::EPSILON);
    assert_eq!(radius, Some(10.0));
    assert_eq!(limit, Some(5));
    assert_eq!(
        filter.categories,
        vec![BeverageType::Winery, BeverageType::Cidery]
    );
    assert!(filter.region.is_none());
}

#[test]
fn parses_nearby_with_negative_radius() {
    let cli = Cli::try_parse_from([
        "tastingmap-cli",
        "nearby",
        "--lat",
        "38.0",
        "--lng",
        "-78.0",
        "--radius",
        "-1",
    ])
    .expect("expected valid cli args");

    let Some(Commands::Nearby { radius, .. }) = cli.command else {
        panic!("expected nearby command");
    };
    assert_eq!(radius, Some(-1.0));
}

#[test]
fn help_is_answered_by_the_parser() {
    let err = Cli::try_parse_from(["tastingmap-cli", "--help"]).unwrap_err();
    assert_eq!(err.kind(), clap::error::ErrorKind::DisplayHelp);
}

#[test]
fn nearby_requires_lat_and_lng() {
    assert!(Cli::try_parse_from(["tastingmap-cli", "nearby", "--lat", "38.0"]).is_err());
    assert!(Cli::try_parse_from(["tastingmap-cli", "nearby", "--lat", "x", "--lng", "1"]).is_err());
}

#[test]
fn unknown_category_is_rejected() {
    assert!(Cli::try_parse_from(["tastingmap-cli", "venues", "--category", "meadery"]).is_err());
}

#[test]
fn parses_search_with_region() {
    let cli = Cli::try_parse_from([
        "tastingmap-cli",
        "search",
        "vineyard",
        "--region",
        "Blue Ridge",
    ])
    .expect("expected valid cli args");

    assert!(matches!(
        cli.command,
        Some(Commands::Search { ref query, ref filter })
            if query == "vineyard" && filter.region.as_deref() == Some("Blue Ridge")
    ));
}

#[test]
fn parses_regions_command() {
    let cli = Cli::try_parse_from(["tastingmap-cli", "regions"]).expect("expected valid cli args");
    assert!(matches!(cli.command, Some(Commands::Regions)));
}

#[test]
fn filter_args_without_categories_do_not_filter_categories() {
    let args = FilterArgs {
        categories: vec![],
        region: Some("Blue Ridge".to_string()),
    };
    let filter = args.to_filter();
    assert!(filter.categories.is_none());
    assert_eq!(filter.region.as_deref(), Some("Blue Ridge"));
}

#[test]
fn filter_args_collect_categories_into_a_set() {
    let args = FilterArgs {
        categories: vec![BeverageType::Brewery, BeverageType::Brewery],
        region: None,
    };
    let filter = args.to_filter();
    assert_eq!(filter.categories.map(|c| c.len()), Some(1));
}
