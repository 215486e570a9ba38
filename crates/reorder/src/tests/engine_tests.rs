use super::*;
use proptest::prelude::*;

#[test]
fn dropping_on_touching_edge_of_previous_neighbour_is_noop() {
    // [A, B, C]: B onto A's trailing edge stays where it is.
    assert_eq!(destination_index(1, 0, Some(Edge::Bottom), Axis::Vertical), 1);
    assert!(drop_indicator(1, 0, Some(Edge::Bottom), Axis::Vertical).is_none());
}

#[test]
fn dropping_on_touching_edge_of_next_neighbour_is_noop() {
    assert_eq!(destination_index(1, 2, Some(Edge::Top), Axis::Vertical), 1);
    assert_eq!(destination_index(1, 2, Some(Edge::Left), Axis::Horizontal), 1);
}

#[test]
fn far_edge_of_neighbour_is_a_real_move() {
    assert_eq!(destination_index(1, 0, Some(Edge::Top), Axis::Vertical), 0);
    assert_eq!(destination_index(1, 2, Some(Edge::Bottom), Axis::Vertical), 2);
    assert_eq!(destination_index(0, 2, Some(Edge::Right), Axis::Horizontal), 2);
}

#[test]
fn perpendicular_edges_count_as_leading() {
    assert_eq!(destination_index(3, 1, Some(Edge::Right), Axis::Vertical), 1);
    assert_eq!(destination_index(3, 1, Some(Edge::Bottom), Axis::Horizontal), 1);
}

#[test]
fn missing_edge_takes_target_slot() {
    assert_eq!(destination_index(0, 3, None, Axis::Vertical), 3);
    assert_eq!(destination_index(3, 0, None, Axis::Vertical), 0);
}

#[test]
fn dragging_last_onto_leading_edge_of_second() {
    let maps = ["m1", "m2", "m3", "m4", "m5"];
    let finish = destination_index(4, 1, Some(Edge::Top), Axis::Vertical);
    let moved = reorder(&maps, 4, finish).expect("reorder");
    assert_eq!(moved, vec!["m1", "m5", "m2", "m3", "m4"]);
}

#[test]
fn out_of_range_reorder_leaves_input_untouched() {
    let maps = vec!["a", "b"];
    let err = reorder(&maps, 0, 2).expect_err("finish out of range");
    assert!(matches!(err, ReorderError::OutOfRange { index: 2, len: 2 }));
    assert_eq!(maps, vec!["a", "b"]);

    let empty: Vec<&str> = Vec::new();
    assert!(reorder(&empty, 0, 0).is_err());
}

#[test]
fn move_by_saturates_at_both_ends() {
    let maps = ["a", "b", "c"];
    assert_eq!(move_by(&maps, 0, -1).expect("up"), vec!["a", "b", "c"]);
    assert_eq!(move_by(&maps, 0, 5).expect("down"), vec!["b", "c", "a"]);
    assert_eq!(move_by(&maps, 2, -1).expect("up"), vec!["a", "c", "b"]);
    assert!(move_by(&maps, 3, 1).is_err());
}

#[test]
fn edge_and_axis_parse_errors_use_domain_error() {
    assert_eq!(" Bottom ".parse::<Edge>(), Ok(Edge::Bottom));
    assert_eq!("HORIZONTAL".parse::<Axis>(), Ok(Axis::Horizontal));

    let err = "middle".parse::<Edge>().expect_err("unknown edge");
    assert_eq!(err.kind, "edge");
    assert_eq!(err.to_string(), "unrecognized edge 'middle'");
    let err = "diagonal".parse::<Axis>().expect_err("unknown axis");
    assert_eq!(err.kind, "axis");
}

#[test]
fn indicator_reports_destination_for_real_moves() {
    let indicator = drop_indicator(4, 1, Some(Edge::Top), Axis::Vertical).expect("real move");
    assert_eq!(indicator.destination_index, 1);
    assert_eq!(indicator.target_index, 1);
    assert!(drop_indicator(2, 2, Some(Edge::Top), Axis::Vertical).is_none());
}

fn sequence_and_index() -> impl Strategy<Value = (Vec<u32>, usize)> {
    prop::collection::vec(any::<u32>(), 1..64)
        .prop_flat_map(|seq| {
            let len = seq.len();
            (Just(seq), 0..len)
        })
}

fn sequence_and_two_indices() -> impl Strategy<Value = (Vec<u32>, usize, usize)> {
    prop::collection::vec(any::<u32>(), 1..64)
        .prop_flat_map(|seq| {
            let len = seq.len();
            (Just(seq), 0..len, 0..len)
        })
}

proptest! {
    #[test]
    fn reorder_to_same_index_is_identity((seq, index) in sequence_and_index()) {
        prop_assert_eq!(reorder(&seq, index, index).expect("in range"), seq);
    }

    #[test]
    fn reorder_preserves_multiset_and_length((seq, start, finish) in sequence_and_two_indices()) {
        let moved = reorder(&seq, start, finish).expect("in range");
        prop_assert_eq!(moved.len(), seq.len());
        prop_assert_eq!(moved[finish], seq[start]);

        let mut before = seq.clone();
        let mut after = moved.clone();
        before.sort_unstable();
        after.sort_unstable();
        prop_assert_eq!(before, after);
    }

    #[test]
    fn reorder_keeps_relative_order_of_others((seq, start, finish) in sequence_and_two_indices()) {
        let tagged: Vec<(usize, u32)> = seq.iter().copied().enumerate().collect();
        let moved = reorder(&tagged, start, finish).expect("in range");
        let rest: Vec<usize> = moved.iter().map(|(i, _)| *i).filter(|i| *i != start).collect();
        let expected: Vec<usize> = (0..seq.len()).filter(|i| *i != start).collect();
        prop_assert_eq!(rest, expected);
    }

    #[test]
    fn destination_stays_in_bounds(
        len in 1usize..64,
        start_seed in any::<usize>(),
        target_seed in any::<usize>(),
        edge in prop::option::of(prop_oneof![
            Just(Edge::Top),
            Just(Edge::Bottom),
            Just(Edge::Left),
            Just(Edge::Right),
        ]),
        horizontal in any::<bool>(),
    ) {
        let start = start_seed % len;
        let target = target_seed % len;
        let axis = if horizontal { Axis::Horizontal } else { Axis::Vertical };
        let destination = destination_index(start, target, edge, axis);
        prop_assert!(destination < len);
    }
}
