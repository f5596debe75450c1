use super::*;

fn placed(id: &str, layer: usize, order: usize, x: f64, y: f64) -> PlacedNode {
    PlacedNode {
        id: id.to_string(),
        layer,
        order,
        x,
        y,
    }
}

// ── Direction ────────────────────────────────────────────────────────────

#[test]
fn test_direction_default_is_tb() {
    assert_eq!(Direction::default(), Direction::TB);
}

#[test]
fn test_direction_parse_case_insensitive() {
    assert_eq!("tb".parse::<Direction>().unwrap(), Direction::TB);
    assert_eq!("TD".parse::<Direction>().unwrap(), Direction::TB);
    assert_eq!(" bt ".parse::<Direction>().unwrap(), Direction::BT);
    assert_eq!("Lr".parse::<Direction>().unwrap(), Direction::LR);
    assert_eq!("RL".parse::<Direction>().unwrap(), Direction::RL);
}

#[test]
fn test_direction_parse_rejects_unknown() {
    let err = "diagonal".parse::<Direction>().unwrap_err();
    assert!(matches!(
        err,
        LayoutError::InvalidOption {
            option: "direction",
            ..
        }
    ));
    assert!(err.to_string().contains("diagonal"));
}

#[test]
fn test_direction_display_roundtrip() {
    for d in [Direction::TB, Direction::BT, Direction::LR, Direction::RL] {
        assert_eq!(d.to_string().parse::<Direction>().unwrap(), d);
    }
}

#[test]
fn test_direction_place() {
    assert_eq!(Direction::TB.place(200.0, -75.0), Point::new(-75.0, 200.0));
    assert_eq!(Direction::BT.place(200.0, -75.0), Point::new(-75.0, -200.0));
    assert_eq!(Direction::LR.place(200.0, -75.0), Point::new(200.0, -75.0));
    assert_eq!(Direction::RL.place(200.0, -75.0), Point::new(-200.0, -75.0));
}

#[test]
fn test_direction_extents() {
    let size = Size::new(120.0, 40.0);
    assert_eq!(Direction::TB.extents(size), (40.0, 120.0));
    assert_eq!(Direction::BT.extents(size), (40.0, 120.0));
    assert_eq!(Direction::LR.extents(size), (120.0, 40.0));
    assert_eq!(Direction::RL.extents(size), (120.0, 40.0));
}

#[test]
fn test_direction_serializes_as_name() {
    assert_eq!(serde_json::to_string(&Direction::LR).unwrap(), "\"LR\"");
}

// ── Layout ───────────────────────────────────────────────────────────────

#[test]
fn test_layout_lookup() {
    let layout = Layout::assemble(
        LayoutMode::Hierarchical,
        Direction::TB,
        vec![placed("A", 0, 0, 0.0, 0.0), placed("B", 1, 0, 0.0, 200.0)],
    );
    assert_eq!(layout.len(), 2);
    assert_eq!(layout.layer_count, 2);
    assert_eq!(layout.layer_of("B"), Some(1));
    assert_eq!(layout.position("B"), Some(Point::new(0.0, 200.0)));
    assert!(layout.node("Z").is_none());

    let coords = layout.coordinates();
    assert_eq!(coords.len(), 2);
    assert_eq!(coords["A"], Point::new(0.0, 0.0));
    assert_eq!(layout.layers()["B"], 1);
}

#[test]
fn test_layout_empty() {
    let layout = Layout::empty(Direction::LR);
    assert!(layout.is_empty());
    assert_eq!(layout.mode, LayoutMode::Empty);
    assert_eq!(layout.direction, Direction::LR);
    assert_eq!(layout.layer_count, 0);
    assert!(layout.coordinates().is_empty());
    assert!(layout.bounds().is_none());
}

#[test]
fn test_layout_bounds() {
    let layout = Layout::assemble(
        LayoutMode::Grid,
        Direction::TB,
        vec![
            placed("A", 0, 0, -150.0, 0.0),
            placed("B", 0, 1, 150.0, 0.0),
            placed("C", 1, 0, 0.0, 200.0),
        ],
    );
    let b = layout.bounds().unwrap();
    assert_eq!(b.min_x, -150.0);
    assert_eq!(b.max_x, 150.0);
    assert_eq!(b.min_y, 0.0);
    assert_eq!(b.max_y, 200.0);
    assert_eq!(b.width(), 300.0);
    assert_eq!(b.height(), 200.0);
    assert_eq!(b.area(), 60000.0);
}

#[test]
fn test_layout_reversed_lookup_uses_original_orientation() {
    let mut layout = Layout::assemble(LayoutMode::Hierarchical, Direction::TB, Vec::new());
    layout.reversed_edges.push(("C".to_string(), "A".to_string()));
    assert!(layout.is_reversed("C", "A"));
    assert!(!layout.is_reversed("A", "C"));
}

#[test]
fn test_layout_json_omits_index() {
    let layout = Layout::assemble(
        LayoutMode::Grid,
        Direction::TB,
        vec![placed("A", 0, 0, 0.0, 0.0)],
    );
    let json: serde_json::Value = serde_json::to_value(&layout).unwrap();
    assert_eq!(json["mode"], "grid");
    assert_eq!(json["direction"], "TB");
    assert_eq!(json["nodes"][0]["id"], "A");
    assert!(json.get("index").is_none());
}
