//! Unit tests for the ScryGlass CSV adapter.

use super::*;

fn parse(input: &str) -> Result<Vec<Card>> {
    ScryGlassAdapter::new().parse(&mut input.as_bytes())
}

fn serialize(collection: &Collection) -> String {
    let mut out = Vec::new();
    ScryGlassAdapter::new()
        .serialize(collection, &mut out)
        .unwrap();
    String::from_utf8(out).unwrap()
}

fn sample_export() -> String {
    r#"Count,Name,Edition,Card Number,Set Code,ID
3,Shock,Core Set,120,CORE,12345
1,Llanowar Elves,Dominaria,168,DOM,442160
4,"Jace, the Mind Sculptor",Worldwake,31,WWK,195297"#
        .to_string()
}

mod parse_tests {
    use super::*;

    #[test]
    fn parses_all_fields_in_order() {
        let cards = parse(&sample_export()).unwrap();
        assert_eq!(cards.len(), 3);

        let shock = &cards[0];
        assert_eq!(shock.id(), "12345");
        assert_eq!(shock.count(), 3);
        assert_eq!(shock.name(), Some("Shock"));
        assert_eq!(shock.set_name(), Some("Core Set"));
        assert_eq!(shock.card_number(), Some("120"));
        assert_eq!(shock.set_code(), Some("CORE"));

        assert_eq!(cards[1].id(), "442160");
        assert_eq!(cards[2].name(), Some("Jace, the Mind Sculptor"));
        assert_eq!(cards[2].count(), 4);
    }

    #[test]
    fn skips_header_only_file() {
        let cards = parse("Count,Name,Edition,Card Number,Set Code,ID\n").unwrap();
        assert!(cards.is_empty());
    }

    #[test]
    fn empty_input_has_no_cards() {
        assert!(parse("").unwrap().is_empty());
    }

    #[test]
    fn header_text_is_not_checked() {
        let cards = parse("whatever\n2,Opt,Ixalan,65,XLN,435216\n").unwrap();
        assert_eq!(cards.len(), 1);
        assert_eq!(cards[0].count(), 2);
    }

    #[test]
    fn trims_whitespace_around_fields() {
        let input = "Count, Name, Edition, Card Number, Set Code, ID\n 2 , Opt , Ixalan , 65 , XLN , 435216 \n";
        let cards = parse(input).unwrap();
        assert_eq!(cards[0].count(), 2);
        assert_eq!(cards[0].name(), Some("Opt"));
        assert_eq!(cards[0].id(), "435216");
    }

    #[test]
    fn empty_descriptive_fields_are_absent() {
        let cards = parse("header\n5,,,,,999\n").unwrap();
        assert_eq!(cards[0].id(), "999");
        assert_eq!(cards[0].name(), None);
        assert_eq!(cards[0].set_code(), None);
    }

    #[test]
    fn ignores_extra_trailing_fields() {
        let cards = parse("header\n1,Opt,Ixalan,65,XLN,435216,foil\n").unwrap();
        assert_eq!(cards[0].id(), "435216");
    }

    #[test]
    fn keeps_duplicate_rows_for_the_collection_to_resolve() {
        let cards = parse("header\n1,Opt,Ixalan,65,XLN,1\n2,Opt,Ixalan,65,XLN,1\n").unwrap();
        assert_eq!(cards.len(), 2);
    }
}

mod parse_error_tests {
    use super::*;

    #[test]
    fn short_row_is_format_error() {
        let err = parse("header\n3,Shock,Core Set,120,CORE\n").unwrap_err();
        match err {
            Error::Format { format, message } => {
                assert_eq!(format, CollectionFormat::ScryGlass);
                assert!(message.contains("line 2"), "{message}");
            }
            other => panic!("expected format error, got {other:?}"),
        }
    }

    #[test]
    fn non_numeric_count_is_format_error() {
        let err = parse("header\nthree,Shock,Core Set,120,CORE,12345\n").unwrap_err();
        assert!(matches!(err, Error::Format { .. }));
        assert!(err.to_string().contains("'three'"));
    }

    #[test]
    fn empty_id_is_format_error() {
        let err = parse("header\n3,Shock,Core Set,120,CORE,\n").unwrap_err();
        assert!(matches!(err, Error::Format { .. }));
    }

    #[test]
    fn error_after_valid_rows_still_fails() {
        let input = format!("{}\n1,Broken\n", sample_export());
        assert!(matches!(parse(&input), Err(Error::Format { .. })));
    }
}

mod serialize_tests {
    use super::*;

    #[test]
    fn writes_header_for_empty_collection() {
        let out = serialize(&Collection::new());
        assert_eq!(out.trim_end(), "Count,Name,Edition,Card Number,Set Code,ID");
    }

    #[test]
    fn writes_rows_in_collection_order() {
        let collection: Collection = parse(&sample_export()).unwrap().into_iter().collect();
        let out = serialize(&collection);
        let lines: Vec<&str> = out.lines().collect();

        assert_eq!(lines[0], "Count,Name,Edition,Card Number,Set Code,ID");
        assert_eq!(lines[1], "3,Shock,Core Set,120,CORE,12345");
        assert_eq!(lines[2], "1,Llanowar Elves,Dominaria,168,DOM,442160");
        assert_eq!(lines[3], "4,\"Jace, the Mind Sculptor\",Worldwake,31,WWK,195297");
        assert_eq!(lines.len(), 4);
    }

    #[test]
    fn absent_fields_are_written_empty() {
        let collection: Collection = vec![Card::new("12345", 3)].into_iter().collect();
        let out = serialize(&collection);
        assert_eq!(out.lines().nth(1), Some("3,,,,,12345"));
    }

    #[test]
    fn round_trip_preserves_cards() {
        let original: Collection = parse(&sample_export()).unwrap().into_iter().collect();
        let reparsed: Collection = parse(&serialize(&original)).unwrap().into_iter().collect();
        assert_eq!(original, reparsed);
    }
}
