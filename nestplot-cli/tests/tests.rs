#[cfg(test)]
mod tests {
    use std::fs;
    use std::io::{Cursor, Write};
    use std::path::PathBuf;

    use anyhow::Result;
    use float_cmp::approx_eq;
    use test_case::test_case;
    use zip::write::SimpleFileOptions;

    use nestplot::entities::{LabelSource, PieceId};
    use nestplot::geometry::primitives::{Point, Rect};
    use nestplot::interior::AnchorStrategyConfig;
    use nestplot::render::{
        Color, DrawingSink, GlyphProvider, LayoutRenderer, PageOrientation, ShapeStyle,
    };
    use nestplot_cli::config::{PlotConfig, SLICES_BIN_SIZE};
    use nestplot_cli::font::{Glyph, StrokeFont};
    use nestplot_cli::io;
    use nestplot_cli::io::archive::parse_slices_archive;
    use nestplot_cli::io::cli::InputVariant;
    use nestplot_cli::io::positions::{parse_counted_positions, parse_headered_positions};
    use nestplot_cli::io::shapes::parse_shapes;
    use nestplot_cli::io::slices::{DEFAULT_TAG, parse_named_slices, parse_slice_labels};
    use nestplot_cli::io::svg_sink::SvgPageSink;

    const SHAPES: &str = "\
100 50
3
0,0 10,0 10,10 0,10
0,0 20,0 abc 20,5 1,2,3

not a vertex
5,5 15,5 10,12
";

    const COUNTED_POSITIONS: &str = "\
2
1 0 0 0
3 90 20 0
0
2
1 0
x 0 5 5
1
2 180 50 10
";

    const SLICES: &str = "\
12-1-A) 0 0 10 0 10 5 0 5
12-2 4 0 8 0 8 3
foo 1 1 2 2 3 3
7-1 0 0 bad 3 0 3 3 0 3
";

    const HEADERED_POSITIONS: &str = "\
1
12-1-A) 0 0 0
12-2 90 20 0
broken line
2
3
7-1 45 100 100 extra
";

    fn init_logger() {
        let _ = env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Debug)
            .is_test(true)
            .try_init();
    }

    fn temp_folder(name: &str) -> PathBuf {
        let folder = std::env::temp_dir().join(format!("nestplot_{name}_{}", std::process::id()));
        let _ = fs::remove_dir_all(&folder);
        fs::create_dir_all(&folder).unwrap();
        folder
    }

    fn zip_archive(entries: &[(&str, &str)]) -> Vec<u8> {
        let mut writer = zip::ZipWriter::new(Cursor::new(Vec::new()));
        for (name, content) in entries {
            writer.start_file(*name, SimpleFileOptions::default()).unwrap();
            writer.write_all(content.as_bytes()).unwrap();
        }
        writer.finish().unwrap().into_inner()
    }

    #[test]
    fn shapes_file_is_parsed() {
        let shapes = parse_shapes(SHAPES).unwrap();
        assert_eq!((shapes.bin_width, shapes.bin_height), (100.0, 50.0));
        assert_eq!(shapes.pieces.len(), 3);

        let ids = shapes.pieces.iter().map(|p| p.id.clone()).collect::<Vec<_>>();
        assert_eq!(ids, vec![PieceId::Index(1), PieceId::Index(2), PieceId::Index(3)]);

        //malformed tokens are skipped
        assert_eq!(
            shapes.pieces[1].outline,
            vec![Point(0.0, 0.0), Point(20.0, 0.0), Point(20.0, 5.0)]
        );
        assert_eq!(shapes.pieces[2].pivot, Point(5.0, 5.0));
    }

    #[test_case(""; "empty")]
    #[test_case("100\n0\n0,0 1,0 1,1"; "single dimension")]
    #[test_case("wide high\n0\n0,0 1,0 1,1"; "not a number")]
    fn shapes_file_needs_bin_size(content: &str) {
        assert!(parse_shapes(content).is_err());
    }

    #[test]
    fn counted_positions_are_parsed() {
        init_logger();
        let bins = parse_counted_positions(COUNTED_POSITIONS);
        //the empty bin and the bin with only malformed records are dropped
        assert_eq!(bins.len(), 2);

        assert_eq!(bins[0].number, 1);
        assert_eq!(bins[0].placements.len(), 2);
        assert_eq!(bins[0].placements[1].piece_id, PieceId::Index(3));
        assert_eq!(bins[0].placements[1].rotation, 90.0);

        assert_eq!(bins[1].number, 2);
        assert_eq!(bins[1].placements.len(), 1);
        assert_eq!(bins[1].placements[0].piece_id, PieceId::Index(2));
        assert_eq!((bins[1].placements[0].x, bins[1].placements[0].y), (50.0, 10.0));
    }

    #[test]
    fn counted_positions_stop_at_end_of_file() {
        let bins = parse_counted_positions("5\n1 0 0 0\n2 0 1 1\n");
        assert_eq!(bins.len(), 1);
        assert_eq!(bins[0].placements.len(), 2);
    }

    #[test]
    fn headered_positions_are_parsed() {
        init_logger();
        let bins = parse_headered_positions(HEADERED_POSITIONS);
        assert_eq!(bins.len(), 2);
        assert_eq!(bins[0].number, 1);
        assert_eq!(bins[0].placements.len(), 2);
        assert_eq!(bins[0].placements[0].piece_id, PieceId::Name("12-1-A)".into()));
        assert_eq!(bins[1].number, 2);
        assert_eq!(bins[1].placements[0].rotation, 45.0);
    }

    #[test]
    fn slice_labels_are_first_tokens() {
        let labels = parse_slice_labels("16-3-A) 1 2 3\n\n51-2\n  7 x\n");
        assert_eq!(labels, vec!["16-3-A)", "51-2", "7"]);
    }

    #[test]
    fn named_slices_are_mirrored_per_block() {
        init_logger();
        let slices = parse_named_slices(SLICES);
        assert_eq!(slices.tag, "12-1-A)");
        //"foo" has no block number
        assert_eq!(slices.pieces.len(), 3);

        let piece = |name: &str| {
            slices
                .pieces
                .iter()
                .find(|p| p.id == PieceId::Name(name.into()))
                .unwrap()
        };

        //block 12 spans x in [0, 10]
        assert_eq!(
            piece("12-2").outline,
            vec![Point(6.0, 0.0), Point(2.0, 0.0), Point(2.0, 3.0)]
        );
        assert_eq!(piece("12-2").pivot, Point(2.0, 0.0));

        //"bad" is skipped, block 7 spans x in [0, 3]
        assert_eq!(
            piece("7-1").outline,
            vec![Point(3.0, 0.0), Point(0.0, 0.0), Point(0.0, 3.0), Point(3.0, 3.0)]
        );
    }

    #[test]
    fn empty_slices_file_gets_default_tag() {
        let slices = parse_named_slices("");
        assert_eq!(slices.tag, DEFAULT_TAG);
        assert!(slices.pieces.is_empty());
    }

    #[test]
    fn slices_archive_is_read() {
        let bytes = zip_archive(&[("slices.txt", SLICES), ("positions.txt", HEADERED_POSITIONS)]);
        let archive = parse_slices_archive(Cursor::new(bytes)).unwrap();
        assert_eq!(archive.slices, SLICES);
        assert_eq!(archive.positions, HEADERED_POSITIONS);
    }

    #[test]
    fn slices_archive_without_positions_is_rejected() {
        let bytes = zip_archive(&[("slices.txt", SLICES)]);
        assert!(parse_slices_archive(Cursor::new(bytes)).is_err());
        assert!(parse_slices_archive(Cursor::new(b"not a zip".to_vec())).is_err());
    }

    #[test]
    fn every_builtin_glyph_decodes() {
        let font = StrokeFont::romans().unwrap();
        for c in ('0'..='9').chain('A'..='Z').chain('a'..='z').chain(" -._/()".chars()) {
            assert!(font.glyph(c).is_some(), "missing glyph {c:?}");
        }
    }

    #[test]
    fn glyph_is_decoded_in_local_coordinates() {
        let one = Glyph::decode("H\\NJPISFS[").unwrap();
        assert_eq!(one.advance, 20);
        //the top of the stroke sits at cap height, 21 above the baseline
        assert_eq!(one.strokes, vec![vec![(6, 17), (8, 18), (11, 21), (11, 0)]]);

        let space = Glyph::decode("JZ").unwrap();
        assert_eq!(space.advance, 16);
        assert!(space.strokes.is_empty());

        let minus = Glyph::decode("E_IR[R").unwrap();
        assert_eq!(minus.strokes, vec![vec![(4, 9), (22, 9)]]);
        assert!(Glyph::decode("H").is_err());
    }

    #[test_case("1", 20.0; "digit")]
    #[test_case("16", 40.0; "two digits")]
    #[test_case("-", 26.0; "hyphen")]
    #[test_case(" ", 16.0; "space")]
    #[test_case("ä", 16.0; "unknown character advances like a space")]
    fn text_is_measured(text: &str, width: f64) {
        let font = StrokeFont::romans().unwrap();
        let run = font.shape_text(text, 0.5);
        assert!(approx_eq!(f64, run.advance, width * 0.5));
        assert_eq!(font.text_width(text) as f64, width);
    }

    #[test]
    fn strokes_follow_the_cursor() {
        let font = StrokeFont::romans().unwrap();
        let run = font.shape_text("11", 1.0);
        assert_eq!(run.strokes.len(), 2);
        let first = Rect::bounding(&run.strokes[0]);
        let second = Rect::bounding(&run.strokes[1]);
        assert!(approx_eq!(f64, second.x_min - first.x_min, 20.0));
        assert!(approx_eq!(f64, first.y_max, 21.0));
        assert!(approx_eq!(f64, first.y_min, 0.0));
    }

    #[test]
    fn variant_defaults() {
        let shapes = PlotConfig::for_variant(InputVariant::Shapes);
        assert_eq!(shapes.anchor_strategy, AnchorStrategyConfig::erosion(10.0));
        assert_eq!(shapes.page.orientation, PageOrientation::Landscape);
        assert_eq!(shapes.page.frame(Some((100.0, 50.0))).unwrap().page_size(), (100.0, 50.0));
        assert!(shapes.page.frame(None).is_err());

        let slices = PlotConfig::for_variant(InputVariant::Slices);
        assert_eq!(slices.anchor_strategy, AnchorStrategyConfig::pole(1.0));
        let frame = slices.page.frame(None).unwrap();
        assert_eq!((frame.bin_width, frame.bin_height), SLICES_BIN_SIZE);
        assert_eq!(frame.page_size(), (1220.0, 2020.0));
    }

    #[test]
    fn partial_config_file_is_completed_with_defaults() {
        let json = r##"{
            "anchor_strategy": {"Pole": {"precision": 0.25}},
            "page": {"orientation": "Portrait", "margin": 5.0},
            "theme": {"piece_fills": ["#112233", "#445566"], "suffix_label": "#00ff00"}
        }"##;
        let config: PlotConfig = serde_json::from_str(json).unwrap();
        assert_eq!(
            config.anchor_strategy,
            AnchorStrategyConfig::Pole {
                precision: 0.25,
                max_depth: 16
            }
        );
        assert_eq!(config.page.margin, 5.0);
        assert_eq!(config.page.bin_width, None);
        assert_eq!(config.theme.piece_fills, vec![Color(0x11, 0x22, 0x33), Color(0x44, 0x55, 0x66)]);
        assert_eq!(config.theme.suffix_label, Color(0x00, 0xFF, 0x00));
        assert_eq!(config.theme.primary_label, Color::RED);
        assert!(!config.parallel);

        let round_trip: PlotConfig =
            serde_json::from_str(&serde_json::to_string(&config).unwrap()).unwrap();
        assert_eq!(round_trip, config);
    }

    #[test]
    fn config_file_overrides_variant_defaults() {
        let json = serde_json::json!({
            "anchor_strategy": {"Erosion": {"step": 2.5}},
            "page": {"margin": 0.0},
            "theme": {"label_stroke_width": 0.3},
            "parallel": true
        });
        let config = PlotConfig::from_json(json, InputVariant::Slices).unwrap();
        assert_eq!(config.anchor_strategy, AnchorStrategyConfig::erosion(2.5));
        assert_eq!(config.page.orientation, PageOrientation::Portrait);
        assert_eq!(config.page.margin, 0.0);
        assert_eq!(config.page.bin_width, Some(SLICES_BIN_SIZE.0));
        assert_eq!(config.theme.label_stroke_width, 0.3);
        assert_eq!(config.theme.primary_label, Color::RED);
        assert!(config.parallel);

        assert!(PlotConfig::from_json(serde_json::json!([1, 2]), InputVariant::Shapes).is_err());
    }

    #[test]
    fn invalid_color_in_config_is_rejected() {
        let json = r##"{"theme": {"bin_stroke": "#12345"}}"##;
        assert!(serde_json::from_str::<PlotConfig>(json).is_err());
    }

    #[test]
    fn svg_sink_requires_open_page() {
        let mut sink = SvgPageSink::new(&std::env::temp_dir(), "unused");
        let style = ShapeStyle {
            fill: None,
            fill_opacity: 1.0,
            stroke: Color::BLACK,
            stroke_width: 1.0,
        };
        let square = [Point(0.0, 0.0), Point(1.0, 0.0), Point(1.0, 1.0)];
        assert!(sink.draw_polygon(&square, &style).is_err());
        assert!(sink.end_page().is_err());

        sink.begin_page(1, 10.0, 10.0).unwrap();
        assert!(sink.begin_page(2, 10.0, 10.0).is_err());
        sink.draw_polygon(&square, &style).unwrap();
        sink.draw_polyline(&square, Color::RED, 0.5).unwrap();
        sink.end_page().unwrap();

        assert_eq!(sink.pages().len(), 1);
        let svg = sink.pages()[0].1.to_string();
        assert!(svg.contains("scale(1 -1)"));
        assert!(svg.contains("stroke-linecap=\"round\""));
        assert!(svg.contains("#FF0000"));
    }

    #[test]
    fn shapes_run_writes_one_svg_per_bin() -> Result<()> {
        init_logger();
        let folder = temp_folder("shapes_run");
        let shapes_path = folder.join("job.txt");
        let positions_path = folder.join("positions.txt");
        let labels_path = folder.join("labels.txt");
        fs::write(&shapes_path, SHAPES)?;
        fs::write(&positions_path, COUNTED_POSITIONS)?;
        fs::write(&labels_path, "16-3-A)\n51-2\n")?;

        let input = io::load_input(
            InputVariant::Shapes,
            &[shapes_path, positions_path, labels_path],
        )?;
        assert_eq!(input.stem, "job");
        assert_eq!(input.catalog.len(), 3);
        assert!(matches!(input.labels, LabelSource::Indexed(ref l) if l.len() == 2));
        assert_eq!(input.labels.label_for(&PieceId::Index(3)), "3");

        let config = PlotConfig::for_variant(InputVariant::Shapes);
        let strategy = config.anchor_strategy.build()?;
        let font = StrokeFont::romans()?;
        let renderer = LayoutRenderer::new(
            &input.catalog,
            &input.labels,
            &font,
            strategy.as_ref(),
            config.page.frame(input.bin_size)?,
            &config.theme,
        );
        let output = folder.join("out");
        fs::create_dir_all(&output)?;
        let mut sink = SvgPageSink::new(&output, &input.stem);
        let stats = renderer.render(&input.bins, &mut sink, true)?;

        assert_eq!(stats.n_pages, 2);
        assert_eq!(stats.n_pieces, 3);
        assert!(output.join("job_1.svg").exists());
        assert!(output.join("job_2.svg").exists());
        Ok(())
    }

    #[test]
    fn slices_run_uses_tag_as_stem() -> Result<()> {
        let folder = temp_folder("slices_run");
        let archive_path = folder.join("run.zip");
        fs::write(
            &archive_path,
            zip_archive(&[("slices.txt", SLICES), ("positions.txt", HEADERED_POSITIONS)]),
        )?;

        let input = io::load_input(InputVariant::Slices, &[archive_path])?;
        assert_eq!(input.stem, "12");
        assert_eq!(input.bin_size, None);
        assert_eq!(input.bins.len(), 2);
        assert!(matches!(input.labels, LabelSource::Identifier));
        Ok(())
    }

    #[test_case(InputVariant::Shapes, 1; "shapes needs positions")]
    #[test_case(InputVariant::Slices, 3; "slices takes at most two files")]
    fn wrong_number_of_input_files_is_rejected(variant: InputVariant, n: usize) {
        let files = vec![PathBuf::from("does_not_matter.txt"); n];
        assert!(io::load_input(variant, &files).is_err());
    }
}
