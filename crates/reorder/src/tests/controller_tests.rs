use super::*;

type Fixture = (DragReorderController, OrderedList<&'static str>, Vec<ItemId>);

fn setup(names: &[&'static str]) -> Fixture {
    let list = OrderedList::from_payloads(names.iter().copied(), 16).expect("seed");
    let ids = list.ids();
    let controller = DragReorderController::new(EditorInstanceId::new(), Axis::Vertical);
    (controller, list, ids)
}

#[test]
fn drop_on_leading_edge_produces_single_intent() {
    let (mut controller, list, ids) = setup(&["m1", "m2", "m3", "m4", "m5"]);
    let instance = controller.instance();

    assert_eq!(
        controller.handle(&DragEvent::start(instance, ids[4]), &list),
        DragOutcome::Started { source_id: ids[4] }
    );
    assert_eq!(controller.dragging_item(), Some(ids[4]));

    let outcome = controller.handle(
        &DragEvent::release(instance, ids[4], Some(ids[1]), Some(Edge::Top)),
        &list,
    );
    assert_eq!(
        outcome,
        DragOutcome::Reorder(ReorderIntent {
            item_id: ids[4],
            start_index: 4,
            finish_index: 1,
        })
    );
    assert!(!controller.is_dragging());
}

#[test]
fn hover_on_touching_edge_hides_indicator() {
    let (mut controller, list, ids) = setup(&["a", "b", "c"]);
    let instance = controller.instance();
    controller.handle(&DragEvent::start(instance, ids[1]), &list);

    let outcome = controller.handle(
        &DragEvent::over(instance, ids[1], Some(ids[0]), Some(Edge::Bottom)),
        &list,
    );
    assert_eq!(outcome, DragOutcome::Hover(None));

    let outcome = controller.handle(
        &DragEvent::over(instance, ids[1], Some(ids[0]), Some(Edge::Top)),
        &list,
    );
    let DragOutcome::Hover(Some(indicator)) = outcome else {
        panic!("expected visible indicator, got {outcome:?}");
    };
    assert_eq!(indicator.destination_index, 0);
    assert_eq!(controller.indicator(), Some(indicator));

    let outcome = controller.handle(
        &DragEvent::release(instance, ids[1], Some(ids[0]), Some(Edge::Bottom)),
        &list,
    );
    assert_eq!(outcome, DragOutcome::Settled);
    assert_eq!(controller.indicator(), None);
}

#[test]
fn events_from_another_instance_are_ignored() {
    let (mut controller, list, ids) = setup(&["a", "b"]);
    let other = EditorInstanceId::new();

    assert_eq!(
        controller.handle(&DragEvent::start(other, ids[0]), &list),
        DragOutcome::Ignored(IgnoreReason::ForeignInstance)
    );
    assert!(!controller.is_dragging());

    let instance = controller.instance();
    controller.handle(&DragEvent::start(instance, ids[0]), &list);
    assert_eq!(
        controller.handle(
            &DragEvent::release(other, ids[0], Some(ids[1]), Some(Edge::Bottom)),
            &list
        ),
        DragOutcome::Ignored(IgnoreReason::ForeignInstance)
    );
    assert_eq!(controller.dragging_item(), Some(ids[0]));
}

#[test]
fn only_one_item_drags_at_a_time() {
    let (mut controller, list, ids) = setup(&["a", "b"]);
    let instance = controller.instance();
    controller.handle(&DragEvent::start(instance, ids[0]), &list);

    assert_eq!(
        controller.handle(&DragEvent::start(instance, ids[1]), &list),
        DragOutcome::Ignored(IgnoreReason::AlreadyDragging)
    );
    assert_eq!(
        controller.handle(&DragEvent::release(instance, ids[1], Some(ids[0]), None), &list),
        DragOutcome::Ignored(IgnoreReason::SourceMismatch)
    );
    assert_eq!(controller.dragging_item(), Some(ids[0]));
}

#[test]
fn drop_outside_target_cancels() {
    let (mut controller, list, ids) = setup(&["a", "b"]);
    let instance = controller.instance();
    controller.handle(&DragEvent::start(instance, ids[0]), &list);

    assert_eq!(
        controller.handle(&DragEvent::release(instance, ids[0], None, None), &list),
        DragOutcome::Cancelled(CancelReason::OutsideTarget)
    );
    assert!(!controller.is_dragging());
}

#[test]
fn cancel_and_stray_events_without_gesture() {
    let (mut controller, list, ids) = setup(&["a", "b"]);
    let instance = controller.instance();

    assert_eq!(
        controller.handle(&DragEvent::cancel(instance, ids[0]), &list),
        DragOutcome::Ignored(IgnoreReason::NotDragging)
    );

    controller.handle(&DragEvent::start(instance, ids[0]), &list);
    assert_eq!(
        controller.handle(&DragEvent::cancel(instance, ids[0]), &list),
        DragOutcome::Cancelled(CancelReason::Aborted)
    );
    assert_eq!(controller.dragging_item(), None);
}

#[test]
fn target_removed_mid_gesture_cancels() {
    let (mut controller, mut list, ids) = setup(&["a", "b", "c"]);
    let instance = controller.instance();
    controller.handle(&DragEvent::start(instance, ids[0]), &list);
    list.remove(ids[2]).expect("remove");

    assert_eq!(
        controller.handle(
            &DragEvent::release(instance, ids[0], Some(ids[2]), Some(Edge::Top)),
            &list
        ),
        DragOutcome::Cancelled(CancelReason::StaleItem)
    );
}

#[test]
fn unknown_source_cannot_start() {
    let (mut controller, list, _) = setup(&["a"]);
    let instance = controller.instance();
    assert_eq!(
        controller.handle(&DragEvent::start(instance, ItemId::new()), &list),
        DragOutcome::Ignored(IgnoreReason::UnknownSource)
    );
}
