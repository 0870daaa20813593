//! Save → restore cycles through the public `Item` API, the way a document
//! loader drives the primitives.

use drawaid::render::{DrawOp, FixedStyle, RecordingSurface};
use drawaid::{
    BoxItem, Diagram, DrawContext, Ellipse, Item, ItemKind, Line, LoadError, Matrix, Point,
    SimpleItem, Style,
};

fn restore(item: &Item) -> Item {
    let saved = item.attributes();
    let pairs = saved.iter().map(|(n, v)| (n.as_str(), v.as_str()));
    Item::restore(item.kind(), item.id().map(str::to_string), pairs)
        .unwrap_or_else(|e| panic!("restore failed: {:?}", e))
}

fn draw(item: &Item) -> Vec<DrawOp> {
    let style = FixedStyle(Style::default());
    let mut surface = RecordingSurface::new();
    item.draw(&mut DrawContext::new(&mut surface, &style));
    surface.into_ops()
}

#[test]
fn line_round_trip() {
    let mut line = Line::new(Some("line-1".into()));
    line.set_matrix(Matrix::IDENTITY.translated(12.5, -3.0).scaled(2.0, 1.0));
    line.load("points", "[(0.0, 0.0), (1.0 , 9.0), (5.5, 3.25), (10.0, 10.0)]")
        .unwrap();
    line.set_horizontal(true);
    line.set_orthogonal(true).unwrap();
    let original = Item::from(line);

    let restored = restore(&original);
    assert_eq!(restored.id(), Some("line-1"));
    assert_eq!(restored.matrix(), original.matrix());
    assert_eq!(restored.attributes(), original.attributes());

    let (Item::Line(a), Item::Line(b)) = (&original, &restored) else {
        panic!("expected lines");
    };
    assert_eq!(a.handles().len(), 4);
    assert_eq!(b.orthogonal(), a.orthogonal());
    assert_eq!(b.horizontal(), a.horizontal());
    let pa: Vec<Point> = a.handles().iter().map(|h| h.pos).collect();
    let pb: Vec<Point> = b.handles().iter().map(|h| h.pos).collect();
    assert_eq!(pa, pb);
    assert_eq!(draw(&original), draw(&restored));
}

#[test]
fn box_round_trip() {
    let mut bx = BoxItem::new(Some("box-1".into()));
    bx.set_width(0.1 + 0.2).unwrap();
    bx.set_height(1.0 / 3.0).unwrap();
    bx.set_matrix(Matrix::from_coefficients([0.5, 0.25, -0.25, 0.5, 100.0, 7.0]));
    let original = Item::from(bx);

    let restored = restore(&original);
    let (Item::Box(a), Item::Box(b)) = (&original, &restored) else {
        panic!("expected boxes");
    };
    assert_eq!(a.width(), b.width());
    assert_eq!(a.height(), b.height());
    assert_eq!(a.matrix(), b.matrix());
}

#[test]
fn ellipse_round_trip() {
    let mut e = Ellipse::new(None);
    e.set_width(33.0).unwrap();
    e.set_height(0.0).unwrap();
    let original = Item::from(e);

    let restored = restore(&original);
    assert_eq!(restored.id(), None);
    assert_eq!(restored.attributes(), original.attributes());
    assert_eq!(draw(&original), draw(&restored));
}

#[test]
fn line_growth_from_fresh_instance() {
    let points = "[(0.0, 0.0), (1.0, 1.0), (2.0, 2.0), (3.0, 3.0), (4.0, 4.0), (5.0, 5.0)]";
    let item = Item::restore(ItemKind::Line, None, [("points", points)]).unwrap();
    let Item::Line(line) = item else {
        panic!("expected a line");
    };
    let flags: Vec<bool> = line.handles().iter().map(|h| h.connectable).collect();
    assert_eq!(flags, [false, true, true, true, true, false]);
    assert_eq!(line.ports().len(), 5);
}

#[test]
fn orthogonal_before_points_matches_after() {
    let points = "[(0.0, 0.0), (2.0, 8.0), (7.0, 1.0), (10.0, 10.0)]";
    let early = Item::restore(
        ItemKind::Line,
        None,
        [("orthogonal", "True"), ("horizontal", "False"), ("points", points)],
    )
    .unwrap();
    let late = Item::restore(
        ItemKind::Line,
        None,
        [("horizontal", "False"), ("points", points), ("orthogonal", "True")],
    )
    .unwrap();
    assert_eq!(early.attributes(), late.attributes());
}

#[test]
fn unknown_attributes_are_skipped() {
    let item = Item::restore(
        ItemKind::Ellipse,
        None,
        [("width", "4.0"), ("fill-color", "(1.0, 0.0, 0.0)"), ("height", "2.0")],
    )
    .unwrap();
    let Item::Ellipse(e) = item else {
        panic!("expected an ellipse");
    };
    assert_eq!((e.width().raw(), e.height().raw()), (4.0, 2.0));
}

#[test]
fn malformed_value_aborts_restore() {
    let err = Item::restore(ItemKind::Line, None, [("matrix", "(1.0, 0.0, 0.0")]).unwrap_err();
    assert!(matches!(err, LoadError::Malformed { ref attribute, .. } if attribute == "matrix"));
}

#[test]
fn overflowing_float_is_rejected() {
    let err = Item::restore(
        ItemKind::Box,
        None,
        [("matrix", "(1e400, 0.0, 0.0, 1.0, 0.0, 0.0)")],
    )
    .unwrap_err();
    assert!(matches!(err, LoadError::Malformed { ref attribute, .. } if attribute == "matrix"));
}

#[test]
fn shortened_orthogonal_line_still_round_trips() {
    let mut line = Line::new(None);
    line.load("points", "[(0.0, 0.0), (3.0, 7.0), (10.0, 10.0)]").unwrap();
    line.set_orthogonal(true).unwrap();
    line.load("points", "[(0.0, 0.0), (10.0, 10.0)]").unwrap();
    let original = Item::from(line);

    let restored = restore(&original);
    assert_eq!(restored.attributes(), original.attributes());
}

#[test]
fn restored_items_detach_cleanly() {
    let diagram = Diagram::shared();
    let mut items: Vec<Item> = [ItemKind::Line, ItemKind::Box, ItemKind::Ellipse]
        .into_iter()
        .map(|kind| Item::new(kind, None))
        .collect();
    for item in &mut items {
        Diagram::add(&diagram, item);
    }
    assert_eq!(diagram.borrow().len(), 3);

    items[1].detach();
    items[1].detach();
    assert_eq!(diagram.borrow().len(), 2);

    for item in &mut items {
        item.detach();
    }
    assert!(diagram.borrow().is_empty());
}
