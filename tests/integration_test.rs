// End-to-end tests for the stack visualizer library

use pretty_assertions::assert_eq;
use stackviz::interpreter::Interpreter;
use stackviz::layout::{
    Composition, FrameGeometry, FrameLayout, GridComposer, LayoutConfig, Row, RowKind,
};
use stackviz::memory::StackModel;
use stackviz::render::SvgTemplates;
use std::fs;
use std::num::NonZeroUsize;
use std::path::Path;

fn compose(source: &str, columns: usize) -> Composition {
    let templates = SvgTemplates::new();
    let composer = GridComposer::new(
        FrameLayout::new(LayoutConfig::default()),
        NonZeroUsize::new(columns).unwrap(),
        &templates,
    );
    composer.compose(source).expect("composition failed")
}

/// Geometry of every frame, replaying the run by hand
fn frames(source: &str) -> Vec<FrameGeometry> {
    let layout = FrameLayout::new(LayoutConfig::default());
    let mut interpreter = Interpreter::new();
    let mut geometries = Vec::new();

    for (nr, line) in source.lines().map(str::trim).filter(|l| !l.is_empty()).enumerate() {
        interpreter.execute_line(line).expect("execution failed");
        interpreter.stack_mut().set_frame_number(nr + 1);
        interpreter.stack_mut().set_frame_label(Some(line.to_string()));
        geometries.push(layout.layout(interpreter.stack()));
    }
    geometries
}

#[test]
fn test_three_pushes_in_one_row() {
    let source = "push a\npush b\npush c";
    let composition = compose(source, 3);

    assert_eq!(composition.frame_count(), 3);
    assert!(composition.warnings.is_empty());
    assert!(composition.canvas.frames.iter().all(|f| f.y == 0.0));

    let frame_width = 70.0 + 60.0 + 50.0 + 2.0 * 10.0;
    assert_eq!(composition.canvas.width, 3.0 * frame_width);

    for (k, frame) in frames(source).iter().enumerate() {
        // header plus k + 1 slot rows
        assert_eq!(frame.rows.len(), k + 2);
        assert_eq!(frame.body_rows().count(), k + 1);
        assert_eq!(frame.pointed_row().and_then(Row::slot_index), Some(k));
    }
}

#[test]
fn test_push_only_stack_pointer_row() {
    let source = (0..7).map(|i| format!("push v{}", i)).collect::<Vec<_>>().join("\n");
    for (k, frame) in frames(&source).iter().enumerate() {
        let pointed = frame.pointed_row().expect("arrow");
        assert_eq!(pointed.slot_index(), Some(k));
        assert_eq!(pointed.label(), Some(format!("v{}", k).as_str()));
    }
}

#[test]
fn test_frame_setup_before_any_push() {
    let mut interpreter = Interpreter::new();
    interpreter.execute_line("mov ebp, esp").unwrap();
    assert_eq!(interpreter.stack().base_pointer(), -1);
    assert_eq!(interpreter.stack().stack_pointer(), -1);

    interpreter.execute_line("push a").unwrap();
    interpreter.execute_line("mov ebp, esp").unwrap();
    assert_eq!(interpreter.stack().base_pointer(), 0);
    assert_eq!(interpreter.stack().stack_pointer(), 0);

    let geometry = FrameLayout::new(LayoutConfig::default()).layout(interpreter.stack());
    let row = geometry.body_rows().next().unwrap();
    assert_eq!(row.offset_label.as_deref(), Some("EBP"));
}

#[test]
fn test_offsets_around_base_pointer() {
    let mut stack = StackModel::from_slots(["arg", "ret", "old ebp"]);
    stack.set_base_pointer_to_stack_pointer();
    let geometry = FrameLayout::new(LayoutConfig::default()).layout(&stack);

    let by_slot = |slot: usize| {
        geometry
            .body_rows()
            .find(|r| r.slot_index() == Some(slot))
            .and_then(|r| r.offset_label.clone())
    };
    assert_eq!(by_slot(2).as_deref(), Some("EBP"));
    assert_eq!(by_slot(1).as_deref(), Some("[ebp+4]"));
}

#[test]
fn test_malformed_line_warns_and_keeps_frame() {
    let composition = compose("push a\nfoo bar\n\npush b", 4);

    assert_eq!(composition.frame_count(), 3);
    assert_eq!(composition.warnings.len(), 1);
    assert_eq!(composition.warnings[0].line, 2);

    let geometries = frames("push a\nfoo bar\n\npush b");
    assert_eq!(geometries[1].title(), Some("foo bar"));
    assert_eq!(geometries[1].body_rows().count(), 1);
}

#[test]
fn test_large_reservation_collapses() {
    let source = "push ret\npush old ebp\nmov ebp, esp\nsub esp, 80h\npush saved";
    let last = frames(source).pop().unwrap();

    // 2 + 32 + 1 slots on the stack, but only a handful of rows drawn
    let ellipses = last
        .body_rows()
        .filter(|r| matches!(r.kind, RowKind::Ellipsis { .. }))
        .count();
    assert_eq!(ellipses, 1);
    assert_eq!(last.body_rows().count(), 6);
    assert_eq!(last.pointed_row().and_then(Row::label), Some("saved"));
}

#[test]
fn test_demo_program() {
    let path = Path::new("demos/function_call.asm");
    let source = fs::read_to_string(path).expect("Failed to read demo file");

    let composition = compose(&source, 4);
    assert_eq!(composition.frame_count(), 8);
    assert!(composition.warnings.is_empty());
    assert_eq!(composition.canvas.frames[4].x, 0.0);
    assert!(composition.canvas.frames[4].y > 0.0);
    assert!(composition.markup.contains("1: push arg2"));
    assert!(composition.markup.contains(">EBP</text>"));
}
