//! Integration tests for quadrant rendering.
//!
//! Tests verify which logical cells each render pass draws, that passes are
//! deterministic, and that degenerate tables render without panicking.
#![allow(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::indexing_slicing,
    clippy::float_cmp,
    clippy::panic
)]

mod common;

use std::collections::HashSet;

use common::*;
use gridview::render::DrawOp;
use gridview::{
    Column, DataSource, GridConfig, GridError, Quadrant, RecordingSurface, VirtualTable,
};

fn quadrant_sets(t: &VirtualTable<RecordingSurface>) -> Vec<HashSet<(usize, usize)>> {
    Quadrant::ALL
        .iter()
        .map(|&q| t.quadrant_cells(q).into_iter().collect())
        .collect()
}

// ============================================================================
// Cell placement
// ============================================================================

#[test]
fn test_rendering_twice_is_identical() {
    let mut t = demo_table(1280.0, 720.0);
    t.handle_scroll(731.0, 4321.0);
    let first = quadrant_sets(&t);
    t.handle_scroll(0.0, 0.0);
    let second = quadrant_sets(&t);
    assert_eq!(first, second);
}

#[test]
fn test_no_cell_drawn_twice() {
    let mut t = demo_table(1280.0, 720.0);
    for (dx, dy) in [(0.0, 0.0), (400.0, 96.0), (1.0e9, 1.0e9)] {
        t.handle_scroll(dx, dy);
        let cells = all_cells(&t);
        assert_eq!(cells.len(), cell_set(&t).len());
    }
}

#[test]
fn test_header_covers_every_column() {
    let mut t = demo_table(1280.0, 720.0);
    for dx in [0.0, 900.0, 1.0e9] {
        t.handle_scroll(dx, 0.0);
        let header: HashSet<usize> = all_cells(&t)
            .into_iter()
            .filter(|&(row, _)| row == 0)
            .map(|(_, col)| col)
            .collect();
        assert_eq!(header, (0..20).collect::<HashSet<_>>());
    }
}

#[test]
fn test_cells_land_in_their_quadrant() {
    let mut t = table(uniform_columns(6, 100.0, 2), 40, 350.0, 320.0);
    t.handle_scroll(120.0, 200.0);
    for q in Quadrant::ALL {
        for (row, col) in t.quadrant_cells(q) {
            assert_eq!(t.frozen().assign(row, col), q, "cell ({row}, {col})");
        }
    }
}

#[test]
fn test_body_rows_follow_visible_range() {
    let mut t = table(uniform_columns(3, 100.0, 1), 100, 300.0, 320.0);
    t.handle_scroll(0.0, 320.0);
    let rows = t.visible_rows().unwrap();
    assert_eq!(rows.start, 10);

    let body_rows: HashSet<usize> = all_cells(&t)
        .into_iter()
        .map(|(row, _)| row)
        .filter(|&row| row != 0)
        .collect();
    assert_eq!(body_rows, (10..=20).collect::<HashSet<_>>());
}

#[test]
fn test_scene_holds_one_visual_per_cell() {
    let mut t = demo_table(800.0, 600.0);
    t.handle_scroll(300.0, 3000.0);
    assert_eq!(
        t.surface().scene().visual_count(),
        t.quadrants().cell_count()
    );
}

#[test]
fn test_each_pass_requests_one_redraw() {
    let mut t = demo_table(800.0, 600.0);
    assert_eq!(t.surface().batch_draws(), 1);
    for _ in 0..5 {
        t.handle_scroll(10.0, 10.0);
    }
    assert_eq!(t.surface().batch_draws(), 6);
}

// ============================================================================
// Degenerate tables
// ============================================================================

#[test]
fn test_zero_columns_renders_nothing() {
    let t = VirtualTable::new(
        RecordingSurface::new(400.0, 300.0),
        Vec::new(),
        DataSource::new(vec![Vec::new(); 10]),
        GridConfig::default(),
    )
    .unwrap();
    assert_eq!(t.visible_cols(), None);
    assert_eq!(t.quadrants().cell_count(), 0);
}

#[test]
fn test_empty_data_draws_header_only() {
    let t = VirtualTable::new(
        RecordingSurface::new(400.0, 300.0),
        uniform_columns(3, 100.0, 1),
        DataSource::default(),
        GridConfig::default(),
    )
    .unwrap();
    assert_eq!(t.scroll().max_scroll_top(), 0.0);
    let cells = all_cells(&t);
    assert_eq!(cells.len(), 3);
    assert!(cells.iter().all(|&(row, _)| row == 0));
}

#[test]
fn test_tiny_viewport_still_draws_header() {
    let mut t = table(uniform_columns(5, 100.0, 1), 100, 1.0, 1.0);
    t.handle_scroll(3.0, 3.0);
    let header: Vec<(usize, usize)> = all_cells(&t).into_iter().filter(|c| c.0 == 0).collect();
    assert_eq!(header.len(), 5);
}

#[test]
fn test_short_data_rows_are_skipped() {
    // Second data row has only one field
    let data = DataSource::new(vec![
        vec!["a".into(), "b".into()],
        vec!["c".into()],
        vec!["e".into(), "f".into()],
    ]);
    let t = VirtualTable::new(
        RecordingSurface::new(400.0, 300.0),
        columns(&[100.0, 100.0], 1),
        data,
        GridConfig::default(),
    )
    .unwrap();
    let cells = cell_set(&t);
    assert!(cells.contains(&(2, 0)));
    assert!(!cells.contains(&(2, 1)));
    assert!(cells.contains(&(3, 1)));
}

#[test]
fn test_invalid_column_width_rejected() {
    let result = VirtualTable::new(
        RecordingSurface::new(400.0, 300.0),
        vec![Column::new("A", 100.0), Column::new("B", 0.0)],
        DataSource::default(),
        GridConfig::default(),
    );
    assert!(matches!(
        result,
        Err(GridError::InvalidColumnWidth { index: 1, .. })
    ));
}

// ============================================================================
// Painted output
// ============================================================================

#[test]
fn test_paint_emits_clipped_groups_and_labels() {
    let t = table(columns(&[100.0, 100.0, 100.0], 1), 5, 150.0, 320.0);
    let ops = t.surface().paint();

    assert!(matches!(ops.first(), Some(DrawOp::Save)));
    assert!(matches!(ops.get(1), Some(DrawOp::Clip { .. })));
    assert!(matches!(ops.last(), Some(DrawOp::Restore)));

    let texts: Vec<&str> = ops
        .iter()
        .filter_map(|op| match op {
            DrawOp::Text { text, .. } => Some(text.as_str()),
            _ => None,
        })
        .collect();
    assert!(texts.contains(&"C0"));
    assert!(texts.contains(&"r0c0"));
    assert!(texts.contains(&"r4c1"));
}

#[test]
fn test_frozen_corner_painted_last() {
    let t = table(columns(&[100.0, 100.0, 100.0], 1), 5, 150.0, 320.0);
    let ops = t.surface().paint();
    let last_text = ops.iter().rev().find_map(|op| match op {
        DrawOp::Text { text, .. } => Some(text.clone()),
        _ => None,
    });
    assert_eq!(last_text.as_deref(), Some("C0"));
}

#[test]
fn test_long_labels_truncated_with_ellipsis() {
    let t = demo_table(1280.0, 720.0);
    let ops = t.surface().paint();
    // 180px column leaves 164px for the label
    assert!(ops.iter().any(|op| matches!(
        op,
        DrawOp::Text { text, .. } if text.starts_with("EMP")
    )));
    for op in &ops {
        if let DrawOp::Text { text, .. } = op {
            assert!(text.chars().count() * 14 * 6 / 10 <= 164 || text.ends_with('…'));
        }
    }
}
