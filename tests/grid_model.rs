use egui::pos2;
use pixel_grid::surface::DrawOp;
use pixel_grid::{Grid, GridConfig, RecordingSurface};

fn create_test_grid(config: GridConfig) -> (Grid, RecordingSurface) {
    let mut surface = RecordingSurface::new();
    let mut grid = Grid::new(config);
    grid.build(&mut surface);
    surface.take_ops();
    (grid, surface)
}

#[test]
fn test_every_point_maps_to_one_stable_pixel() {
    let config = GridConfig::new(60, 40, 20, 10).unwrap();
    let (grid, _) = create_test_grid(config);
    assert_eq!(grid.pixels().len(), config.pixel_count());

    for y in 0..40 {
        for x in 0..60 {
            let point = pos2(x as f32 + 0.5, y as f32 + 0.5);
            let index = grid.position_to_index(point).expect("point inside canvas");
            assert_eq!(grid.position_to_index(point), Some(index));
            assert!(grid.pixel(index).unwrap().rect().contains(point));
        }
    }
}

#[test]
fn test_click_then_clear_round_trip() {
    let (mut grid, mut surface) = create_test_grid(GridConfig::new(40, 40, 10, 10).unwrap());
    let point = pos2(22.0, 31.0);
    let index = grid.position_to_index(point).unwrap();

    grid.click(point, &mut surface);
    assert!(!grid.pixel(index).unwrap().is_empty());
    grid.clear(point, &mut surface);
    assert!(grid.pixel(index).unwrap().is_empty());
}

#[test]
fn test_repeated_clear_touches_surface_once() {
    let (mut grid, mut surface) = create_test_grid(GridConfig::new(40, 40, 10, 10).unwrap());
    grid.click(pos2(5.0, 5.0), &mut surface);
    grid.clear(pos2(5.0, 5.0), &mut surface);
    grid.clear(pos2(5.0, 5.0), &mut surface);
    grid.clear(pos2(6.0, 7.0), &mut surface);
    assert_eq!(surface.count_clears(), 1);
}

#[test]
fn test_repeated_fill_same_color() {
    let (mut grid, mut surface) = create_test_grid(GridConfig::new(40, 40, 10, 10).unwrap());
    grid.click(pos2(5.0, 5.0), &mut surface);
    let after_first = grid.pixel(0).cloned();
    grid.click(pos2(5.0, 5.0), &mut surface);
    assert_eq!(grid.pixel(0).cloned(), after_first);
    assert_eq!(surface.ops()[0], surface.ops()[1]);
}

#[test]
fn test_out_of_range_clicks_are_ignored() {
    let (mut grid, mut surface) = create_test_grid(GridConfig::new(40, 40, 10, 10).unwrap());
    for point in [pos2(45.0, 45.0), pos2(40.0, 5.0), pos2(5.0, 40.0), pos2(-1.0, 5.0)] {
        grid.click(point, &mut surface);
        grid.clear(point, &mut surface);
    }
    assert!(surface.ops().is_empty());
    assert!(grid.pixels().iter().all(|pixel| pixel.is_empty()));
}

#[test]
fn test_build_draws_each_outline() {
    let mut surface = RecordingSurface::new();
    let mut grid = Grid::new(GridConfig::new(30, 20, 10, 10).unwrap());
    grid.build(&mut surface);

    let strokes: Vec<_> = surface
        .ops()
        .iter()
        .filter_map(|op| match op {
            DrawOp::Stroke(rect) => Some(rect.min),
            _ => None,
        })
        .collect();
    assert_eq!(
        strokes,
        [
            pos2(0.0, 0.0),
            pos2(10.0, 0.0),
            pos2(20.0, 0.0),
            pos2(0.0, 10.0),
            pos2(10.0, 10.0),
            pos2(20.0, 10.0),
        ]
    );
}
