#[cfg(test)]
mod tests {
    use float_cmp::approx_eq;
    use test_case::test_case;

    use nestplot::entities::{Bin, PieceCatalog, PieceDefinition, PieceId, PlacementRecord};
    use nestplot::geometry::geo_traits::{CollidesWith, DistanceTo, Shape, Transformable};
    use nestplot::geometry::primitives::{Point, Rect, SPolygon};
    use nestplot::geometry::{Transformation, erode, repair_ring};
    use nestplot::interior::{
        Anchor, AnchorStrategyConfig, Erosion, InteriorPointStrategy, PoleOfInaccessibility,
    };
    use nestplot::placement::{place_bin, place_piece};

    fn init_logger() {
        let _ = env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Debug)
            .is_test(true)
            .try_init();
    }

    fn square(side: f64) -> Vec<Point> {
        let h = side / 2.0;
        vec![Point(-h, -h), Point(h, -h), Point(h, h), Point(-h, h)]
    }

    /// Thick horizontal bar with a thin vertical arm on the left
    fn flag_shape() -> Vec<Point> {
        vec![
            Point(0.0, 0.0),
            Point(200.0, 0.0),
            Point(200.0, 60.0),
            Point(20.0, 60.0),
            Point(20.0, 160.0),
            Point(0.0, 160.0),
        ]
    }

    fn l_shape() -> Vec<Point> {
        vec![
            Point(0.0, 0.0),
            Point(100.0, 0.0),
            Point(100.0, 30.0),
            Point(30.0, 30.0),
            Point(30.0, 100.0),
            Point(0.0, 100.0),
        ]
    }

    /// Two 100 wide legs on a 100 high base, the notch between the legs is 100 wide
    fn u_shape() -> Vec<Point> {
        vec![
            Point(0.0, 0.0),
            Point(300.0, 0.0),
            Point(300.0, 300.0),
            Point(200.0, 300.0),
            Point(200.0, 100.0),
            Point(100.0, 100.0),
            Point(100.0, 300.0),
            Point(0.0, 300.0),
        ]
    }

    fn unit_square() -> Vec<Point> {
        vec![
            Point(0.0, 0.0),
            Point(1.0, 0.0),
            Point(1.0, 1.0),
            Point(0.0, 1.0),
        ]
    }

    fn assert_point_eq(a: Point, b: Point, epsilon: f64) {
        assert!(
            approx_eq!(f64, a.0, b.0, epsilon = epsilon) && approx_eq!(f64, a.1, b.1, epsilon = epsilon),
            "{a:?} != {b:?}"
        );
    }

    #[test_case(0.0; "zero")]
    #[test_case(37.5; "acute")]
    #[test_case(90.0; "quarter")]
    #[test_case(-135.0; "negative")]
    #[test_case(725.0; "more than a full turn")]
    fn rotation_round_trip(degrees: f64) {
        let pivot = Point(3.0, -7.0);
        for p in l_shape() {
            let back = p.rotate_about(degrees, pivot).rotate_about(-degrees, pivot);
            assert_point_eq(back, p, 1e-9);
        }
    }

    #[test]
    fn rotation_is_counterclockwise() {
        let p = Point(2.0, 1.0).rotate_about(90.0, Point(1.0, 1.0));
        assert_point_eq(p, Point(1.0, 2.0), 1e-12);
    }

    #[test]
    fn rotation_about_pivot_keeps_the_pivot_fixed() {
        let pivot = Point(4.0, 5.0);
        let t = Transformation::from_rotation_about(1.2, pivot);
        assert_point_eq(pivot.transform_clone(&t), pivot, 1e-12);
        for p in l_shape() {
            let moved = p.transform_clone(&t);
            assert!(approx_eq!(
                f64,
                pivot.distance_to(&moved),
                pivot.distance_to(&p),
                epsilon = 1e-9
            ));
        }
    }

    #[test]
    fn bounding_box_of_nothing_is_zero() {
        let nothing: [Point; 0] = [];
        assert_eq!(Rect::bounding(&nothing), Rect::ZERO);
        let bbox = Rect::bounding(&l_shape());
        assert_eq!((bbox.x_min, bbox.y_min, bbox.x_max, bbox.y_max), (0.0, 0.0, 100.0, 100.0));
    }

    #[test]
    fn polygon_is_normalized_counterclockwise() {
        let mut clockwise = l_shape();
        clockwise.reverse();
        let poly = SPolygon::new(clockwise).unwrap();
        assert!(poly.area > 0.0);
        assert!(approx_eq!(f64, poly.area, 100.0 * 100.0 - 70.0 * 70.0, epsilon = 1e-9));
        assert!(poly.collides_with(&Point(10.0, 10.0)));
        assert!(!poly.collides_with(&Point(60.0, 60.0)));
        assert!(approx_eq!(f64, poly.distance_to_boundary(&Point(15.0, 50.0)), 15.0, epsilon = 1e-9));
    }

    #[test]
    fn repair_keeps_largest_loop_of_figure_eight() {
        //two triangles meeting at (1,1), the right one four times larger
        let bowtie = vec![
            Point(0.0, 0.0),
            Point(3.0, 3.0),
            Point(3.0, -1.0),
            Point(0.0, 2.0),
        ];
        let repaired = repair_ring(&bowtie).expect("a loop with area should survive");
        let crossing_x = 1.0;
        assert!(repaired.area > 0.0);
        assert!(
            repaired
                .vertices
                .iter()
                .all(|p| p.0 >= crossing_x - 1e-9),
            "expected the right loop: {:?}",
            repaired.vertices
        );
    }

    #[test_case(vec![]; "empty")]
    #[test_case(vec![Point(1.0, 1.0), Point(2.0, 2.0)]; "two points")]
    #[test_case(vec![Point(0.0, 0.0), Point(1.0, 0.0), Point(2.0, 0.0)]; "collinear")]
    #[test_case(vec![Point(5.0, 5.0), Point(5.0, 5.0), Point(5.0, 5.0), Point(5.0, 5.0)]; "repeated")]
    #[test_case(vec![Point(0.0, 0.0), Point(f64::NAN, 1.0), Point(1.0, 1.0)]; "non finite")]
    fn repair_rejects_degenerate_rings(vertices: Vec<Point>) {
        assert!(repair_ring(&vertices).is_none());
    }

    #[test]
    fn placement_without_rotation_is_a_translation() {
        let outline = vec![Point(2.0, 3.0), Point(6.0, 3.0), Point(4.0, 8.0)];
        let piece = PieceDefinition::new(PieceId::Index(1), outline.clone()).unwrap();
        assert_eq!(piece.pivot, Point(2.0, 3.0));

        let record = PlacementRecord::new(PieceId::Index(1), 0.0, 10.0, 20.0).unwrap();
        let placed = place_piece(&piece, &record);
        let expected = outline.iter().map(|p| p.translate((8.0, 17.0))).collect::<Vec<_>>();
        assert_eq!(placed, expected);
    }

    #[test_case(15.0; "15")]
    #[test_case(90.0; "90")]
    #[test_case(180.0; "180")]
    #[test_case(233.7; "233.7")]
    #[test_case(-45.0; "-45")]
    fn placement_aligns_rotated_bbox_with_target(rotation: f64) {
        let piece = PieceDefinition::new(PieceId::Index(1), l_shape()).unwrap();
        let record = PlacementRecord::new(PieceId::Index(1), rotation, 412.5, -33.0).unwrap();
        let placed = place_piece(&piece, &record);

        assert_point_eq(Rect::bounding(&placed).min_corner(), Point(412.5, -33.0), 1e-9);
        let area = SPolygon::calculate_area(&placed).abs();
        assert!(approx_eq!(f64, area, 100.0 * 100.0 - 70.0 * 70.0, epsilon = 1e-6));
    }

    #[test]
    fn unit_square_rotated_a_quarter() {
        let piece = PieceDefinition::new(PieceId::Index(1), unit_square()).unwrap();
        let record = PlacementRecord::new(PieceId::Index(1), 90.0, 5.0, 5.0).unwrap();
        let placed = place_piece(&piece, &record);

        let expected = [
            Point(6.0, 5.0),
            Point(6.0, 6.0),
            Point(5.0, 6.0),
            Point(5.0, 5.0),
        ];
        for (p, e) in placed.iter().zip(expected) {
            assert_point_eq(*p, e, 1e-12);
        }
    }

    #[test]
    fn placement_at_the_edge_of_the_float_range_does_not_panic() {
        let big = f64::MAX / 2.0;
        let outline = vec![
            Point(big, big),
            Point(1.9 * big, big),
            Point(1.9 * big, 1.9 * big),
            Point(big, 1.9 * big),
        ];
        let piece = PieceDefinition::new(PieceId::Index(1), outline).unwrap();
        let record = PlacementRecord::new(PieceId::Index(1), 45.0, -big, big).unwrap();
        let placed = place_piece(&piece, &record);
        assert_eq!(placed.len(), 4);
        //overflowing vertices are reported as such rather than aborting the run
        assert!(placed.iter().any(|p| !p.is_finite()));
    }

    #[test]
    fn placement_of_unknown_piece_is_skipped() {
        init_logger();
        let catalog: PieceCatalog = [
            PieceDefinition::new(PieceId::Index(1), unit_square()).unwrap(),
            PieceDefinition::new("frame".into(), l_shape()).unwrap(),
        ]
        .into_iter()
        .collect();
        let bin = Bin::new(
            1,
            vec![
                PlacementRecord::new(PieceId::Index(1), 0.0, 0.0, 0.0).unwrap(),
                PlacementRecord::new(PieceId::Index(7), 0.0, 5.0, 5.0).unwrap(),
                PlacementRecord::new("frame".into(), 90.0, 10.0, 0.0).unwrap(),
            ],
        );
        let placed = place_bin(&catalog, &bin);
        assert_eq!(placed.len(), 2);
        assert_eq!(placed[0].index, 0);
        assert_eq!(placed[1].id, PieceId::Name("frame".into()));
        assert_eq!(placed[1].index, 2);
    }

    #[test]
    fn invalid_records_are_rejected() {
        assert!(PlacementRecord::new(PieceId::Index(1), f64::NAN, 0.0, 0.0).is_err());
        assert!(PieceDefinition::new(PieceId::Index(1), vec![]).is_err());
        let mut catalog = PieceCatalog::new();
        catalog
            .insert(PieceDefinition::new(PieceId::Index(1), unit_square()).unwrap())
            .unwrap();
        assert!(
            catalog
                .insert(PieceDefinition::new(PieceId::Index(1), l_shape()).unwrap())
                .is_err()
        );
    }

    #[test]
    fn erosion_of_square_converges_to_centroid() {
        init_logger();
        let step = 10.0;
        let anchor = Erosion::new(step).unwrap().anchor(&square(100.0));
        assert_point_eq(anchor.point, Point(0.0, 0.0), 1e-6);
        assert!(approx_eq!(f64, anchor.size, 100.0, epsilon = step));
    }

    #[test]
    fn pole_of_square_is_its_center() {
        init_logger();
        let precision = 1.0;
        let anchor = PoleOfInaccessibility::new(precision)
            .unwrap()
            .anchor(&square(100.0));
        assert_point_eq(anchor.point, Point(0.0, 0.0), precision);
        assert!(approx_eq!(f64, anchor.size, 100.0, epsilon = 2.0 * precision));
    }

    #[test_case(AnchorStrategyConfig::erosion(5.0); "erosion")]
    #[test_case(AnchorStrategyConfig::pole(0.5); "pole")]
    fn anchor_lies_inside_non_convex_shape(config: AnchorStrategyConfig) {
        init_logger();
        let strategy = config.build().unwrap();
        let shape = SPolygon::new(flag_shape()).unwrap();
        let anchor = strategy.anchor(&flag_shape());
        assert!(shape.collides_with(&anchor.point), "{anchor:?}");
        assert!(approx_eq!(
            f64,
            anchor.size,
            2.0 * shape.distance_to_boundary(&anchor.point),
            epsilon = 1e-9
        ));
        //the bar (60 high) holds the widest inscribed circle, not the arm
        assert!(anchor.point.1 < 60.0, "{anchor:?}");
        assert!(anchor.size > 50.0 && anchor.size < 60.0 + 1e-6, "{anchor:?}");
    }

    #[test]
    fn erosion_keeps_region_beyond_reflex_corners() {
        //(58, 58) lies 58 away from the boundary, so eroding by 50 must leave something
        let shape = SPolygon::new(u_shape()).unwrap();
        assert!(approx_eq!(f64, shape.distance_to_boundary(&Point(58.0, 58.0)), 58.0, epsilon = 1e-9));
        assert!(!erode(&shape, 50.0).is_empty());
    }

    #[test]
    fn erosion_anchor_of_u_shape_lies_near_the_pole() {
        init_logger();
        let shape = SPolygon::new(u_shape()).unwrap();
        let erosion = Erosion::new(10.0).unwrap().anchor(&u_shape());
        let pole = PoleOfInaccessibility::new(1.0).unwrap().anchor(&u_shape());

        assert!(shape.collides_with(&erosion.point), "{erosion:?}");
        assert!(shape.collides_with(&pole.point), "{pole:?}");
        //the widest inscribed circles sit in the corners of the base, radius ~58.6
        assert!(erosion.size > 100.0, "{erosion:?}");
        assert!(erosion.size <= pole.size + 2.0, "{erosion:?} vs {pole:?}");
    }

    #[test_case(AnchorStrategyConfig::erosion(10.0); "erosion")]
    #[test_case(AnchorStrategyConfig::pole(1.0); "pole")]
    fn degenerate_input_yields_sentinel(config: AnchorStrategyConfig) {
        let strategy = config.build().unwrap();
        assert_eq!(strategy.anchor(&[]), Anchor::SENTINEL);
        assert_eq!(
            strategy.anchor(&[Point(1.0, 1.0), Point(2.0, 2.0), Point(1.0, 1.0)]),
            Anchor::SENTINEL
        );
        assert_eq!(
            strategy.anchor(&[Point(0.0, 0.0), Point(1.0, 1.0), Point(2.0, 2.0)]),
            Anchor::SENTINEL
        );
    }

    #[test_case(AnchorStrategyConfig::erosion(0.5); "erosion")]
    #[test_case(AnchorStrategyConfig::pole(0.1); "pole")]
    fn self_intersecting_input_is_repaired(config: AnchorStrategyConfig) {
        let strategy = config.build().unwrap();
        let bowtie = [
            Point(0.0, 0.0),
            Point(3.0, 3.0),
            Point(3.0, -1.0),
            Point(0.0, 2.0),
        ];
        let anchor = strategy.anchor(&bowtie);
        assert_ne!(anchor, Anchor::SENTINEL);
        assert!(anchor.point.0 > 1.0 && anchor.point.0 < 3.0, "{anchor:?}");
        assert!(anchor.size > 0.0);
    }

    #[test]
    fn anchor_strategy_parameters_are_validated() {
        assert!(Erosion::new(0.0).is_err());
        assert!(Erosion::new(f64::INFINITY).is_err());
        assert!(PoleOfInaccessibility::new(-1.0).is_err());
        assert!(AnchorStrategyConfig::erosion(-2.0).build().is_err());
    }

    #[test]
    fn centroid_of_repaired_shape_matches_erosion_when_step_exceeds_inradius() {
        let anchor = Erosion::new(10.0).unwrap().anchor(&unit_square());
        let centroid = SPolygon::new(unit_square()).unwrap().centroid();
        assert_point_eq(anchor.point, centroid, 1e-12);
        assert!(approx_eq!(f64, anchor.size, 1.0, epsilon = 1e-12));
    }
}
