//! Tests for command-line interface parsing and file processing

#[cfg(test)]
mod tests {
    use clap::Parser;
    use image::{Rgb, RgbImage};
    use remex::ConversionError;
    use remex::io::cli::{Cli, Command, FileProcessor, extraction_output_paths, labelled_rasters};
    use remex::{Raster, extract_chipset_groups};
    use simplelog::LevelFilter;
    use std::path::{Path, PathBuf};
    use tempfile::TempDir;

    fn write_png(path: &Path, width: u32, height: u32) {
        RgbImage::from_fn(width, height, |x, y| Rgb([x as u8, y as u8, 50]))
            .save(path)
            .unwrap();
    }

    fn processor(args: &[&str]) -> FileProcessor {
        let mut full_args = vec!["remex"];
        full_args.extend_from_slice(args);
        FileProcessor::new(Cli::parse_from(full_args))
    }

    // Tests CLI parsing with only the subcommand and target
    // Verified by changing flag defaults
    #[test]
    fn test_cli_parse_minimal_args() {
        let cli = Cli::parse_from(["remex", "expand", "water.png"]);

        assert_eq!(
            cli.command,
            Command::Expand {
                target: PathBuf::from("water.png"),
                output: None,
            }
        );
        assert!(!cli.quiet);
        assert!(!cli.verbose);
        assert!(cli.skip_existing());
        assert!(cli.should_show_progress());
        assert_eq!(cli.log_level(), LevelFilter::Warn);
    }

    // Tests global flags are accepted before and after the subcommand
    // Verified by removing global = true from the flags
    #[test]
    fn test_cli_global_flags() {
        let cli = Cli::parse_from(["remex", "-q", "extract", "chipset.png", "-n", "-o", "out/tiles"]);

        assert!(cli.quiet);
        assert!(!cli.skip_existing());
        assert!(!cli.should_show_progress());
        assert_eq!(cli.log_level(), LevelFilter::Error);
        assert_eq!(cli.command.target(), Path::new("chipset.png"));
        assert_eq!(cli.command.output(), Some(Path::new("out/tiles")));
        assert_eq!(cli.command.required_dimensions(), (480, 256));

        let verbose = Cli::parse_from(["remex", "expand", "a.png", "--verbose"]);
        assert_eq!(verbose.log_level(), LevelFilter::Info);
        assert_eq!(verbose.command.required_dimensions(), (48, 64));
    }

    // Tests a subcommand is required
    // Verified by making the subcommand optional
    #[test]
    fn test_cli_requires_subcommand() {
        assert!(Cli::try_parse_from(["remex", "chipset.png"]).is_err());
    }

    // Tests extraction names follow the legacy scheme
    // Verified by numbering the animated block
    #[test]
    fn test_extraction_output_paths() {
        let paths = extraction_output_paths(Path::new("out/chipset"));
        let names: Vec<String> = paths
            .iter()
            .map(|path| path.to_string_lossy().to_string())
            .collect();

        assert_eq!(names.len(), 18);
        assert_eq!(names[0], "out/chipset_w0.png");
        assert_eq!(names[2], "out/chipset_w2.png");
        assert_eq!(names[3], "out/chipset_an.png");
        assert_eq!(names[4], "out/chipset_at0.png");
        assert_eq!(names[15], "out/chipset_at11.png");
        assert_eq!(names[16], "out/chipset_lo.png");
        assert_eq!(names[17], "out/chipset_hi.png");
    }

    // Tests rasters are labelled in output order
    // Verified by listing decoration sheets first
    #[test]
    fn test_labelled_rasters_order() {
        let extraction = extract_chipset_groups(&Raster::new_rgb(480, 256)).unwrap();
        let labelled = labelled_rasters(&extraction);

        assert_eq!(labelled.len(), extraction_output_paths(Path::new("x")).len());
        assert_eq!(labelled[0].0, "water tile");
        assert_eq!(labelled[3].0, "animated tile");
        assert_eq!(labelled[4].0, "autotile");
        assert_eq!(labelled[16].0, "low deco sheet");
        assert_eq!(labelled[17].0, "high deco sheet");
    }

    // Tests default output locations next to the input
    // Verified by writing outputs to the working directory
    #[test]
    fn test_default_output_paths() {
        let expand = processor(&["expand", "tiles/grass.png"]);
        assert_eq!(
            expand.output_paths(Path::new("tiles/grass.png")),
            vec![PathBuf::from("tiles/grass_expanded.png")]
        );

        let explicit = processor(&["expand", "grass.png", "-o", "sheets/grass"]);
        assert_eq!(
            explicit.output_paths(Path::new("grass.png")),
            vec![PathBuf::from("sheets/grass.png")]
        );

        let extract = processor(&["extract", "tiles/world.png"]);
        let paths = extract.output_paths(Path::new("tiles/world.png"));
        assert_eq!(paths[0], PathBuf::from("tiles/world_w0.png"));
    }

    // Tests error handling for missing targets
    // Verified by removing error return for nonexistent files
    #[test]
    fn test_process_nonexistent_file() {
        let mut processor = processor(&["-q", "expand", "nonexistent.png"]);
        assert!(processor.process().is_err());
    }

    // Tests error handling for files that are not images
    // Verified by ignoring decode failures
    #[test]
    fn test_process_invalid_file() {
        let temp_dir = TempDir::new().unwrap();
        let txt_file = temp_dir.path().join("test.txt");
        std::fs::write(&txt_file, "not a png").unwrap();

        let mut processor = processor(&["-q", "expand", txt_file.to_str().unwrap()]);
        assert!(processor.process().is_err());
    }

    // Tests a single wrongly sized input is an error
    // Verified by skipping wrongly sized single files
    #[test]
    fn test_process_wrong_size_file() {
        let temp_dir = TempDir::new().unwrap();
        let input = temp_dir.path().join("small.png");
        write_png(&input, 40, 64);

        let mut processor = processor(&["-q", "expand", input.to_str().unwrap()]);
        assert!(matches!(
            processor.process(),
            Err(ConversionError::InvalidDimensions {
                actual: (40, 64),
                ..
            })
        ));
        assert!(!temp_dir.path().join("small_expanded.png").exists());
    }

    // Tests expanding one autotile writes one 128x96 sheet
    // Verified by saving the source instead of the expansion
    #[test]
    fn test_process_expand_file() {
        let temp_dir = TempDir::new().unwrap();
        let input = temp_dir.path().join("grass.png");
        write_png(&input, 48, 64);

        let mut processor = processor(&["-q", "expand", input.to_str().unwrap()]);
        processor.process().unwrap();

        let output = temp_dir.path().join("grass_expanded.png");
        assert_eq!(image::image_dimensions(&output).unwrap(), (128, 96));
    }

    // Tests extracting one chipset writes all eighteen files
    // Verified by stopping after the autotiles
    #[test]
    fn test_process_extract_file() {
        let temp_dir = TempDir::new().unwrap();
        let input = temp_dir.path().join("world.png");
        write_png(&input, 480, 256);
        let prefix = temp_dir.path().join("out/world");

        let mut processor = processor(&[
            "-q",
            "extract",
            input.to_str().unwrap(),
            "-o",
            prefix.to_str().unwrap(),
        ]);
        processor.process().unwrap();

        for path in extraction_output_paths(&prefix) {
            assert!(path.exists(), "{} missing", path.display());
        }
        let high = temp_dir.path().join("out/world_hi.png");
        assert_eq!(image::image_dimensions(&high).unwrap(), (96, 384));
    }

    // Tests existing outputs are skipped unless --no-skip is given
    // Verified by inverting boolean logic in skip_existing
    #[test]
    fn test_skip_existing_output() {
        let temp_dir = TempDir::new().unwrap();
        let input = temp_dir.path().join("grass.png");
        write_png(&input, 48, 64);
        let output = temp_dir.path().join("grass_expanded.png");
        std::fs::write(&output, "placeholder").unwrap();

        let mut skipping = processor(&["-q", "expand", input.to_str().unwrap()]);
        assert!(skipping.collect_files().unwrap().is_empty());
        skipping.process().unwrap();
        assert_eq!(std::fs::read(&output).unwrap(), b"placeholder");

        let mut overwriting = processor(&["-q", "-n", "expand", input.to_str().unwrap()]);
        overwriting.process().unwrap();
        assert_eq!(image::image_dimensions(&output).unwrap(), (128, 96));
    }

    // Tests directory scans keep only correctly sized PNG files, sorted
    // Verified by collecting every file in the directory
    #[test]
    fn test_collect_directory() {
        let temp_dir = TempDir::new().unwrap();
        write_png(&temp_dir.path().join("b.png"), 48, 64);
        write_png(&temp_dir.path().join("a.png"), 48, 64);
        write_png(&temp_dir.path().join("wide.png"), 128, 96);
        std::fs::write(temp_dir.path().join("notes.txt"), "text").unwrap();

        let processor = processor(&["-q", "expand", temp_dir.path().to_str().unwrap()]);
        let files = processor.collect_files().unwrap();

        assert_eq!(
            files,
            vec![temp_dir.path().join("a.png"), temp_dir.path().join("b.png")]
        );
    }

    // Tests a batch run converts every file and a rerun converts nothing
    // Verified by removing the directory branch
    #[test]
    fn test_process_directory_twice() {
        let temp_dir = TempDir::new().unwrap();
        write_png(&temp_dir.path().join("a.png"), 48, 64);
        write_png(&temp_dir.path().join("b.png"), 48, 64);
        let target = temp_dir.path().to_str().unwrap();

        processor(&["-q", "expand", target]).process().unwrap();
        assert!(temp_dir.path().join("a_expanded.png").exists());
        assert!(temp_dir.path().join("b_expanded.png").exists());

        // Expanded sheets are the wrong size and existing outputs are skipped
        let rerun = processor(&["-q", "expand", target]);
        assert!(rerun.collect_files().unwrap().is_empty());
    }

    // Tests --output is refused for directory targets
    // Verified by applying the output to every file
    #[test]
    fn test_output_with_directory_target() {
        let temp_dir = TempDir::new().unwrap();
        let processor = processor(&[
            "-q",
            "expand",
            temp_dir.path().to_str().unwrap(),
            "-o",
            "sheet.png",
        ]);

        assert!(matches!(
            processor.collect_files(),
            Err(ConversionError::InvalidParameter {
                parameter: "output",
                ..
            })
        ));
    }
}
