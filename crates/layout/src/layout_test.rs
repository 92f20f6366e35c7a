#![cfg(test)]

use crate::algorithms::SizeBounds;
use crate::test_utils::{
    CHAR_WIDTH, CountingMeasurer, LINE_HEIGHT, MissingFontMeasurer, child, col, find_text, image,
    init_logging, lay_out, measurer, rect, root_size, row, snapshot, text,
};
use crate::{LayoutEngine, LayoutError};
use layoutimg_style::StyleError;
use layoutimg_style::defaults::UNBOUNDED;
use layoutimg_types::geometry::{Axis, Point, Rect, Size};

#[test]
fn test_text_height_depends_only_on_font_size() {
    let a = lay_out(&image().with_child(text("aa").with_attribute("background-color", "blue")));
    let b = lay_out(&image().with_child(text("gh").with_attribute("background-color", "blue")));
    assert_eq!(root_size(&a).height, root_size(&b).height);
    assert_eq!(root_size(&a).height, LINE_HEIGHT);
}

#[test]
fn test_stacked_rows_double_height() {
    let one_row = || row().with_attribute("background-color", "blue").with_child(text("A"));
    let single = lay_out(&image().with_attribute("width", "200").with_child(one_row()));
    let double = lay_out(
        &image()
            .with_attribute("width", "200")
            .with_child(one_row())
            .with_child(one_row()),
    );
    assert_eq!(root_size(&single).height * 2, root_size(&double).height);

    let second = child(&double, double.root(), 1);
    assert_eq!(rect(&double, second), Rect::new(0, LINE_HEIGHT, 200, LINE_HEIGHT));
}

#[test]
fn test_side_by_side_cols_share_height() {
    let one_col = |s| col().with_attribute("background-color", "blue").with_child(text(s));
    let single = lay_out(&image().with_child(one_col("A")));
    let double = lay_out(&image().with_child(one_col("A")).with_child(one_col("B")));
    assert_eq!(root_size(&single).height, root_size(&double).height);
    assert_eq!(root_size(&double).width, 2 * CHAR_WIDTH);
    let second = child(&double, double.root(), 1);
    assert_eq!(rect(&double, second).origin(), Point::new(CHAR_WIDTH, 0));
}

#[test]
fn test_flow_none_child_is_still_in_bounding_box() {
    let tree = lay_out(
        &image()
            .with_child(text("ab").with_attribute("x", "50").with_attribute("flow", "none"))
            .with_child(text("cd")),
    );
    let pinned = find_text(&tree, "ab");
    let follower = find_text(&tree, "cd");

    assert_eq!(rect(&tree, pinned), Rect::new(50, 0, 2 * CHAR_WIDTH, LINE_HEIGHT));
    // The pinned node did not move the cursor.
    assert_eq!(rect(&tree, follower).origin(), Point::origin());
    // But the parent's auto width covers it.
    assert_eq!(root_size(&tree).width, 50 + 2 * CHAR_WIDTH);
}

#[test]
fn test_row_min_width_fills_parent() {
    let tree = lay_out(
        &image()
            .with_attribute("width", "300")
            .with_child(row().with_child(col().with_child(text("A")))),
    );
    let the_row = child(&tree, tree.root(), 0);
    let the_col = child(&tree, the_row, 0);
    assert_eq!(rect(&tree, the_col).width, CHAR_WIDTH);
    assert_eq!(rect(&tree, the_row), Rect::new(0, 0, 300, LINE_HEIGHT));
}

#[test]
fn test_percentages_use_the_immediate_parent() {
    let tree = lay_out(
        &image().with_attribute("width", "400").with_child(
            row()
                .with_attribute("width", "50%")
                .with_attribute("min-width", "0")
                .with_child(col().with_attribute("width", "50%").with_child(text("A"))),
        ),
    );
    let the_row = child(&tree, tree.root(), 0);
    let the_col = child(&tree, the_row, 0);
    assert_eq!(rect(&tree, the_row).width, 200);
    assert_eq!(rect(&tree, the_col).width, 100);
    // Text min-width defaults to 100% of the col.
    assert_eq!(rect(&tree, find_text(&tree, "A")).width, 100);
}

#[test]
fn test_col_min_height_follows_fixed_row_height() {
    let tree = lay_out(
        &image().with_child(
            row()
                .with_attribute("height", "200")
                .with_child(col().with_child(text("A"))),
        ),
    );
    let the_row = child(&tree, tree.root(), 0);
    let the_col = child(&tree, the_row, 0);
    assert_eq!(rect(&tree, the_col).height, 200);
    assert_eq!(rect(&tree, the_row).height, 200);
}

#[test]
fn test_xy_flow_staircases_text_siblings() {
    let tree = lay_out(&image().with_child(text("ab")).with_child(text("cd")));
    let second = find_text(&tree, "cd");
    assert_eq!(
        rect(&tree, second).origin(),
        Point::new(2 * CHAR_WIDTH, LINE_HEIGHT)
    );
    assert_eq!(root_size(&tree), Size::new(4 * CHAR_WIDTH, 2 * LINE_HEIGHT));
}

#[test]
fn test_explicit_position_overrides_cursor() {
    let tree = lay_out(
        &image()
            .with_child(row().with_child(text("A")))
            .with_child(row().with_attribute("y", "300").with_child(text("B"))),
    );
    let pinned = child(&tree, tree.root(), 1);
    assert_eq!(rect(&tree, pinned).origin(), Point::new(0, 300));
    // Its child starts from the overridden position.
    assert_eq!(rect(&tree, find_text(&tree, "B")).origin(), Point::new(0, 300));
    assert_eq!(root_size(&tree).height, 300 + LINE_HEIGHT);
}

#[test]
fn test_out_of_order_child_does_not_pull_cursor_back() {
    let tree = lay_out(
        &image()
            .with_child(row().with_child(text("A")))
            .with_child(row().with_attribute("y", "0").with_child(text("B")))
            .with_child(row().with_child(text("C"))),
    );
    // The second row overlaps the first, but the cursor stays at the first row's bottom.
    let third = child(&tree, tree.root(), 2);
    assert_eq!(rect(&tree, third).origin(), Point::new(0, LINE_HEIGHT));
}

#[test]
fn test_sizes_respect_bounds() {
    let tree = lay_out(
        &image()
            .with_attribute("width", "500")
            .with_attribute("max-height", "150")
            .with_child(
                row()
                    .with_attribute("min-width", "0")
                    .with_attribute("max-width", "300")
                    .with_attribute("width", "400")
                    .with_child(
                        text("hello")
                            .with_attribute("min-width", "0")
                            .with_attribute("max-width", "100"),
                    )
                    .with_child(
                        text("x")
                            .with_attribute("min-width", "0")
                            .with_attribute("min-height", "100"),
                    ),
            )
            .with_child(
                col()
                    .with_attribute("min-height", "0")
                    .with_attribute("max-width", "20")
                    .with_child(text("abc").with_attribute("min-width", "0")),
            ),
    );

    // Every bound in this tree is in pixels, so the percentage base is irrelevant.
    for (_, node) in tree.iter() {
        for axis in Axis::BOTH {
            let bounds = SizeBounds::resolve(node.env(), axis, 0).unwrap();
            let size = node.size().get(axis);
            assert!(
                bounds.contains(size),
                "<{}> {:?} {} outside {:?}",
                node.tag(),
                axis,
                size,
                bounds
            );
        }
    }
    assert_eq!(rect(&tree, find_text(&tree, "hello")).width, 100);
    assert_eq!(rect(&tree, find_text(&tree, "x")).height, 100);
    assert_eq!(rect(&tree, child(&tree, tree.root(), 0)).width, 300);
    assert_eq!(root_size(&tree).height, 150);
}

#[test]
fn test_far_edges_saturate() {
    let tree = lay_out(
        &image()
            .with_child(
                text("a")
                    .with_attribute("x", "2147483600")
                    .with_attribute("width", "100"),
            )
            .with_child(text("b")),
    );
    let pinned = find_text(&tree, "a");
    assert_eq!(rect(&tree, pinned).x, 2_147_483_600);
    assert_eq!(rect(&tree, pinned).right(), i32::MAX);

    // The cursor stops at the largest representable edge.
    let follower = find_text(&tree, "b");
    assert_eq!(rect(&tree, follower).origin(), Point::new(i32::MAX, LINE_HEIGHT));
    // The image's own default max-width still applies.
    assert_eq!(root_size(&tree), Size::new(UNBOUNDED, 2 * LINE_HEIGHT));
}

#[test]
fn test_auto_container_is_tight_bounding_box() {
    let tree = lay_out(
        &image().with_child(
            col()
                .with_attribute("x", "10")
                .with_attribute("y", "10")
                .with_child(text("abc").with_attribute("flow", "y"))
                .with_child(text("a").with_attribute("x", "200").with_attribute("flow", "none"))
                .with_child(text("ab")),
        ),
    );
    let container = child(&tree, tree.root(), 0);
    let origin = rect(&tree, container).origin();
    let expected_width = tree
        .children(container)
        .map(|c| rect(&tree, c).right() - origin.x)
        .max()
        .unwrap();
    let expected_height = tree
        .children(container)
        .map(|c| rect(&tree, c).bottom() - origin.y)
        .max()
        .unwrap();

    assert_eq!(rect(&tree, container).size(), Size::new(expected_width, expected_height));
    assert_eq!(expected_width, 200 + CHAR_WIDTH - 10);
    assert_eq!(expected_height, 2 * LINE_HEIGHT);
}

#[test]
fn test_layout_is_deterministic() {
    let root = image()
        .with_attribute("width", "321")
        .with_child(row().with_child(text("one")).with_child(text("two")))
        .with_child(col().with_attribute("width", "33%").with_child(text("three")));
    let first = lay_out(&root);
    let second = lay_out(&root);
    assert_eq!(snapshot(&first), snapshot(&second));

    // Laying out the same tree again yields the same geometry.
    let mut again = first.clone();
    LayoutEngine::default().layout(&mut again, &measurer()).unwrap();
    assert_eq!(snapshot(&again), snapshot(&first));
}

#[test]
fn test_fixed_width_text_is_not_measured() {
    init_logging();
    let engine = LayoutEngine::default();
    let counting = CountingMeasurer::new(measurer());

    let mut tree = engine
        .build(&image().with_child(text("fixed").with_attribute("width", "120")))
        .unwrap();
    engine.resolve_inherit(&mut tree).unwrap();
    engine.layout(&mut tree, &counting).unwrap();
    assert_eq!(counting.calls.get(), 0);
    assert_eq!(rect(&tree, find_text(&tree, "fixed")).width, 120);

    let mut tree = engine.build(&image().with_child(text("auto"))).unwrap();
    engine.resolve_inherit(&mut tree).unwrap();
    engine.layout(&mut tree, &counting).unwrap();
    assert_eq!(counting.calls.get(), 1);
}

#[test]
fn test_line_height_ratio_is_configurable() {
    init_logging();
    let engine = LayoutEngine::new(crate::LayoutConfig {
        line_height_ratio: 2.0,
        ..Default::default()
    });
    let mut tree = engine
        .build(&image().with_attribute("font-size", "10").with_child(text("a")))
        .unwrap();
    engine.resolve_inherit(&mut tree).unwrap();
    engine.layout(&mut tree, &measurer()).unwrap();
    assert_eq!(root_size(&tree).height, 20);
}

#[test]
fn test_layout_requires_resolved_tree() {
    init_logging();
    let engine = LayoutEngine::default();
    let mut tree = engine.build(&image().with_child(text("a"))).unwrap();
    let err = engine.layout(&mut tree, &measurer()).unwrap_err();
    assert!(matches!(
        err,
        LayoutError::Style(StyleError::UnresolvedInherit { .. })
    ));
}

#[test]
fn test_measurer_errors_propagate() {
    init_logging();
    let engine = LayoutEngine::default();
    let mut tree = engine
        .build(&image().with_attribute("font", "Missing.ttf").with_child(text("a")))
        .unwrap();
    engine.resolve_inherit(&mut tree).unwrap();
    let err = engine.layout(&mut tree, &MissingFontMeasurer).unwrap_err();
    assert!(matches!(err, LayoutError::Render(_)));
}
