use egui::pos2;
use pixel_grid::input::{InputEvent, PointerInput};
use pixel_grid::surface::DrawOp;
use pixel_grid::{Editor, GridConfig, RecordingSurface};

// 4x4 grid of 10px pixels on a 40x40 canvas
fn create_test_editor() -> (Editor, RecordingSurface) {
    let mut surface = RecordingSurface::new();
    let mut editor = Editor::new(GridConfig::new(40, 40, 10, 10).unwrap());
    editor.start(&mut surface);
    surface.take_ops();
    (editor, surface)
}

fn filled(editor: &Editor) -> Vec<usize> {
    editor
        .grid()
        .pixels()
        .iter()
        .enumerate()
        .filter(|(_, pixel)| !pixel.is_empty())
        .map(|(index, _)| index)
        .collect()
}

#[test]
fn test_pen_down_fills_first_pixel_black() {
    let (mut editor, mut surface) = create_test_editor();
    editor.dispatch(&InputEvent::select_tool("pen"), &mut surface);
    editor.dispatch(&PointerInput::down(pos2(5.0, 5.0)).into(), &mut surface);

    assert_eq!(filled(&editor), [0]);
    assert!(surface
        .ops()
        .iter()
        .any(|op| matches!(op, DrawOp::Fill(_, color) if color == "black")));
}

#[test]
fn test_drag_then_release_stops_painting() {
    let (mut editor, mut surface) = create_test_editor();
    editor.dispatch(&InputEvent::select_tool("pen"), &mut surface);
    editor.dispatch(&PointerInput::down(pos2(5.0, 5.0)).into(), &mut surface);
    editor.dispatch(&PointerInput::moved(pos2(35.0, 35.0)).into(), &mut surface);

    assert_eq!(filled(&editor), [0, 15]);

    editor.dispatch(&PointerInput::up(pos2(35.0, 35.0)).into(), &mut surface);
    let fills_before = surface.count_fills();
    editor.dispatch(&PointerInput::moved(pos2(15.0, 15.0)).into(), &mut surface);
    editor.dispatch(&PointerInput::moved(pos2(25.0, 5.0)).into(), &mut surface);

    assert_eq!(filled(&editor), [0, 15]);
    assert_eq!(surface.count_fills(), fills_before);
}

#[test]
fn test_color_change_while_erasing() {
    let (mut editor, mut surface) = create_test_editor();
    editor.dispatch(&InputEvent::select_tool("eraser"), &mut surface);
    editor.dispatch(&InputEvent::color_change("#ff0000"), &mut surface);

    editor.dispatch(&PointerInput::down(pos2(5.0, 5.0)).into(), &mut surface);
    editor.dispatch(&PointerInput::up(pos2(5.0, 5.0)).into(), &mut surface);
    assert_eq!(surface.count_fills(), 0);
    assert!(filled(&editor).is_empty());
    assert_eq!(editor.grid().color, "#ff0000");

    editor.dispatch(&InputEvent::select_tool("pen"), &mut surface);
    editor.dispatch(&PointerInput::down(pos2(15.0, 5.0)).into(), &mut surface);
    assert!(surface
        .ops()
        .iter()
        .any(|op| matches!(op, DrawOp::Fill(_, color) if color == "#ff0000")));
}

#[test]
fn test_click_outside_canvas_is_noop() {
    let (mut editor, mut surface) = create_test_editor();
    editor.dispatch(&InputEvent::select_tool("pen"), &mut surface);
    editor.dispatch(&PointerInput::down(pos2(45.0, 45.0)).into(), &mut surface);

    assert!(filled(&editor).is_empty());
    assert_eq!(surface.count_fills(), 0);
}

#[test]
fn test_surface_origin_offsets_pointer() {
    let mut surface = RecordingSurface::with_origin(pos2(100.0, 50.0));
    let mut editor = Editor::new(GridConfig::new(40, 40, 10, 10).unwrap());
    editor.start(&mut surface);

    editor.dispatch(&InputEvent::select_tool("pen"), &mut surface);
    editor.dispatch(&PointerInput::down(pos2(125.0, 65.0)).into(), &mut surface);

    // (125, 65) in client space is (25, 15) on the surface: row 1, column 2
    assert_eq!(filled(&editor), [6]);
}
