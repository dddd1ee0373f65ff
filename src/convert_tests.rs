//! Unit tests for run options and the read-only path.

use super::*;
use std::fs;
use tempfile::TempDir;

mod options_tests {
    use super::*;

    #[test]
    fn new_options_are_read_only() {
        let options = ConvertOptions::new("in.csv", CollectionFormat::ScryGlass);
        assert_eq!(options.input, PathBuf::from("in.csv"));
        assert_eq!(options.output, None);
        assert_eq!(options.to, None);
        assert!(!options.merge);
        assert!(options.destination().is_none());
    }

    #[test]
    fn output_sets_path_and_format() {
        let options = ConvertOptions::new("in.csv", CollectionFormat::ScryGlass)
            .output("out.coll2")
            .to(CollectionFormat::Decked)
            .merge(true);
        assert_eq!(
            options.destination(),
            Some((Path::new("out.coll2"), CollectionFormat::Decked))
        );
        assert!(options.merge);
    }

    #[test]
    fn destination_needs_both_path_and_format() {
        let mut options = ConvertOptions::new("in.csv", CollectionFormat::ScryGlass);
        options.output = Some(PathBuf::from("out.coll2"));
        assert!(options.destination().is_none());

        options.output = None;
        options.to = Some(CollectionFormat::Decked);
        assert!(options.destination().is_none());
    }
}

mod read_only_tests {
    use super::*;

    #[test]
    fn without_destination_nothing_is_written() {
        let dir = TempDir::new().unwrap();
        let input = dir.path().join("in.csv");
        fs::write(&input, "header\n3,Shock,Core Set,120,CORE,12345\n").unwrap();

        let summary = convert(&ConvertOptions::new(&input, CollectionFormat::ScryGlass)).unwrap();

        assert_eq!(summary.source_cards, 1);
        assert!(!summary.written);
        assert_eq!(summary.merge, None);
        assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 1);
    }

    #[test]
    fn output_without_format_writes_nothing() {
        let dir = TempDir::new().unwrap();
        let input = dir.path().join("in.csv");
        let output = dir.path().join("out.coll2");
        fs::write(&input, "header\n3,Shock,Core Set,120,CORE,12345\n").unwrap();

        let mut options = ConvertOptions::new(&input, CollectionFormat::ScryGlass);
        options.output = Some(output.clone());

        let summary = convert(&options).unwrap();
        assert!(!summary.written);
        assert!(!output.exists());
    }

    #[test]
    fn missing_input_is_an_empty_source() {
        let dir = TempDir::new().unwrap();
        let options = ConvertOptions::new(dir.path().join("nope.csv"), CollectionFormat::ScryGlass);

        let summary = convert(&options).unwrap();
        assert_eq!(summary.source_cards, 0);
    }
}
