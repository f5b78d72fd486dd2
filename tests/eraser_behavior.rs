use noodle_board::input::StaticPlatform;
use noodle_board::{Board, BoardConfig, BoardEvent, Point, PointerEvent, PointerKind, Tool};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::cell::RefCell;
use std::rc::Rc;

fn board() -> Board {
    Board::with_rng(
        BoardConfig::default(),
        Box::new(StaticPlatform::desktop()),
        200.0,
        120.0,
        1.0,
        StdRng::seed_from_u64(5),
    )
    .unwrap()
}

fn mouse(x: f32, y: f32) -> PointerEvent {
    PointerEvent::new(3, PointerKind::Mouse, Point::new(x, y))
}

fn line(board: &mut Board, from: (f32, f32), to: (f32, f32)) {
    board.pointer_down(mouse(from.0, from.1));
    board.pointer_move(mouse(to.0, to.1));
    board.pointer_up(3);
}

fn erase(board: &mut Board, path: &[(f32, f32)]) {
    board.select_tool(Tool::Eraser);
    board.pointer_down(mouse(path[0].0, path[0].1));
    for &(x, y) in &path[1..] {
        board.pointer_move(mouse(x, y));
    }
    board.pointer_up(3);
}

#[test]
fn test_erase_across_pen_stroke() {
    let mut board = board();
    line(&mut board, (0.0, 0.0), (100.0, 0.0));
    assert_eq!(board.drawing().len(), 1);

    erase(&mut board, &[(50.0, -1.0), (50.0, 1.0)]);
    assert!(board.drawing().is_empty());
}

#[test]
fn test_eraser_never_records_a_stroke() {
    let mut board = board();
    erase(&mut board, &[(10.0, 10.0), (80.0, 80.0), (150.0, 20.0)]);
    assert!(board.drawing().is_empty());
    assert_eq!(board.surface().pixel(80, 80), Some([255, 255, 255, 255]));
}

#[test]
fn test_erasing_is_all_or_nothing() {
    let mut board = board();
    line(&mut board, (10.0, 20.0), (190.0, 20.0));
    line(&mut board, (10.0, 90.0), (190.0, 90.0));
    let survivor = board.drawing().strokes()[1].clone();

    // touch only the very end of the first stroke
    erase(&mut board, &[(185.0, 30.0), (188.0, 30.0)]);

    assert_eq!(board.drawing().strokes(), &[survivor]);
    // no ink left anywhere along the removed stroke
    for x in (10..190).step_by(10) {
        assert_eq!(board.surface().pixel(x, 20), Some([255, 255, 255, 255]));
    }
    assert_eq!(board.surface().pixel(100, 90), Some([0, 0, 0, 255]));
}

#[test]
fn test_thick_brush_is_easier_to_hit() {
    let mut board = board();
    board.select_tool(Tool::Brush);
    board.pointer_down(mouse(10.0, 60.0).with_pressure(1.0));
    board.pointer_move(mouse(190.0, 60.0).with_pressure(1.0));
    board.pointer_up(3);
    let width = board.drawing().strokes()[0].segments()[0].width;
    assert!(width > 16.0);

    // 12 (eraser) + 2 (pen) would miss at this distance, the brush's half width reaches it
    erase(&mut board, &[(100.0, 60.0 + 12.0 + width / 2.0 - 0.5)]);
    assert_eq!(board.drawing().len(), 1, "a tap does not erase");

    let y = 60.0 + 12.0 + width / 2.0 - 0.5;
    erase(&mut board, &[(100.0, y), (101.0, y)]);
    assert!(board.drawing().is_empty());
}

#[test]
fn test_erase_notifies_and_misses_stay_quiet() {
    let erased = Rc::new(RefCell::new(Vec::new()));
    let mut board = board();
    let sink = Rc::clone(&erased);
    board.subscribe(Box::new(move |event: &BoardEvent| {
        if let BoardEvent::StrokesErased { remaining } = event {
            sink.borrow_mut().push(*remaining);
        }
    }));

    line(&mut board, (10.0, 20.0), (190.0, 20.0));
    line(&mut board, (10.0, 90.0), (190.0, 90.0));

    erase(&mut board, &[(100.0, 50.0), (110.0, 55.0)]);
    assert!(erased.borrow().is_empty());

    erase(&mut board, &[(100.0, 85.0), (100.0, 95.0)]);
    assert_eq!(*erased.borrow(), vec![1]);
}
