use chart_geom::api::{
    AxisSpec, AxisSpecs, AxisTicksDimensions, AxisTicksDimensionsMap, AxisTitleStyle, ChartTheme,
    LegendStyle, compute_axes_reserved_space, compute_chart_dimensions,
};
use chart_geom::core::{AxisId, Dimensions, Margins, Position};

fn theme() -> ChartTheme {
    ChartTheme::default()
        .with_chart_margins(Margins::uniform(10.0))
        .with_chart_paddings(Margins::default())
        .with_axis_title_style(AxisTitleStyle {
            font_size: 12.0,
            padding: 5.0,
        })
        .with_legend(LegendStyle {
            vertical_width: 30.0,
            horizontal_height: 20.0,
        })
}

fn axis(id: &str, position: Position) -> AxisSpec {
    AxisSpec::new(id, "group_1", position).with_ticks(10.0, 10.0)
}

fn maps(axes: Vec<(AxisSpec, AxisTicksDimensions)>) -> (AxisTicksDimensionsMap, AxisSpecs) {
    let mut ticks = AxisTicksDimensionsMap::new();
    let mut specs = AxisSpecs::new();
    for (spec, dimensions) in axes {
        ticks.insert(spec.id.clone(), dimensions);
        specs.insert(spec.id.clone(), spec);
    }
    (ticks, specs)
}

fn label(width: f64, height: f64) -> AxisTicksDimensions {
    AxisTicksDimensions::from_label_size(width, height)
}

#[test]
fn no_axes_subtracts_margins_and_paddings() {
    let theme = ChartTheme::default()
        .with_chart_margins(Margins::uniform(10.0))
        .with_chart_paddings(Margins::uniform(10.0));
    let parent = Dimensions::from_size(100.0, 100.0);

    let dimensions = compute_chart_dimensions(
        parent,
        &theme,
        &AxisTicksDimensionsMap::new(),
        &AxisSpecs::new(),
        false,
        None,
    );

    assert_eq!(dimensions, Dimensions::new(20.0, 20.0, 60.0, 60.0));
}

#[test]
fn left_axis_replaces_left_margin() {
    let (ticks, specs) = maps(vec![(axis("left", Position::Left), label(30.0, 12.0))]);
    let parent = Dimensions::from_size(200.0, 100.0);

    let dimensions = compute_chart_dimensions(parent, &theme(), &ticks, &specs, false, None);

    assert_eq!(dimensions, Dimensions::new(10.0, 60.0, 130.0, 80.0));
}

#[test]
fn axis_title_adds_font_size_and_padding() {
    let (ticks, specs) = maps(vec![(
        axis("left", Position::Left).with_title("Price"),
        label(30.0, 12.0),
    )]);
    let parent = Dimensions::from_size(200.0, 100.0);

    let dimensions = compute_chart_dimensions(parent, &theme(), &ticks, &specs, false, None);

    assert_eq!(dimensions.left, 77.0);
    assert_eq!(dimensions.width, 113.0);
}

#[test]
fn axes_on_the_same_side_stack() {
    let (ticks, specs) = maps(vec![
        (axis("left_1", Position::Left), label(30.0, 12.0)),
        (axis("left_2", Position::Left), label(30.0, 12.0)),
    ]);
    let parent = Dimensions::from_size(200.0, 100.0);

    let dimensions = compute_chart_dimensions(parent, &theme(), &ticks, &specs, false, None);

    assert_eq!(dimensions.left, 120.0);
    assert_eq!(dimensions.width, 70.0);
}

#[test]
fn bottom_axis_reserves_label_height() {
    let (ticks, specs) = maps(vec![(axis("bottom", Position::Bottom), label(40.0, 20.0))]);
    let parent = Dimensions::from_size(200.0, 100.0);

    let dimensions = compute_chart_dimensions(parent, &theme(), &ticks, &specs, false, None);

    assert_eq!(dimensions, Dimensions::new(10.0, 10.0, 180.0, 40.0));
}

#[test]
fn axes_on_every_side() {
    let (ticks, specs) = maps(vec![
        (axis("top", Position::Top), label(40.0, 20.0)),
        (axis("bottom", Position::Bottom), label(40.0, 20.0)),
        (axis("left", Position::Left), label(30.0, 12.0)),
        (axis("right", Position::Right), label(30.0, 12.0)),
    ]);
    let parent = Dimensions::from_size(300.0, 200.0);

    let reserved = compute_axes_reserved_space(&theme(), &ticks, &specs);
    assert_eq!(reserved, Margins::new(50.0, 50.0, 60.0, 60.0));

    let dimensions = compute_chart_dimensions(parent, &theme(), &ticks, &specs, false, None);
    assert_eq!(dimensions, Dimensions::new(50.0, 60.0, 180.0, 100.0));
}

#[test]
fn hidden_axis_takes_no_space() {
    let (ticks, specs) = maps(vec![(
        axis("left", Position::Left).with_hide(true),
        label(30.0, 12.0),
    )]);
    let parent = Dimensions::from_size(200.0, 100.0);

    let with_hidden = compute_chart_dimensions(parent, &theme(), &ticks, &specs, false, None);
    let without_axes = compute_chart_dimensions(
        parent,
        &theme(),
        &AxisTicksDimensionsMap::new(),
        &AxisSpecs::new(),
        false,
        None,
    );

    assert_eq!(with_hidden, without_axes);
    assert_eq!(with_hidden, Dimensions::new(10.0, 10.0, 180.0, 80.0));
}

#[test]
fn axis_missing_from_either_map_takes_no_space() {
    let parent = Dimensions::from_size(200.0, 100.0);
    let expected = Dimensions::new(10.0, 10.0, 180.0, 80.0);

    let mut specs_only = AxisSpecs::new();
    specs_only.insert(AxisId::new("left"), axis("left", Position::Left));
    let dimensions = compute_chart_dimensions(
        parent,
        &theme(),
        &AxisTicksDimensionsMap::new(),
        &specs_only,
        false,
        None,
    );
    assert_eq!(dimensions, expected);

    let mut ticks_only = AxisTicksDimensionsMap::new();
    ticks_only.insert(AxisId::new("left"), label(30.0, 12.0));
    let dimensions = compute_chart_dimensions(
        parent,
        &theme(),
        &ticks_only,
        &AxisSpecs::new(),
        false,
        None,
    );
    assert_eq!(dimensions, expected);
}

#[test]
fn legend_reserves_space_on_its_side() {
    let parent = Dimensions::from_size(200.0, 100.0);
    let ticks = AxisTicksDimensionsMap::new();
    let specs = AxisSpecs::new();
    let compute = |show_legend: bool, position: Option<Position>| {
        compute_chart_dimensions(parent, &theme(), &ticks, &specs, show_legend, position)
    };

    assert_eq!(
        compute(true, Some(Position::Left)),
        Dimensions::new(10.0, 40.0, 150.0, 80.0)
    );
    assert_eq!(
        compute(true, Some(Position::Right)),
        Dimensions::new(10.0, 10.0, 150.0, 80.0)
    );
    assert_eq!(
        compute(true, Some(Position::Top)),
        Dimensions::new(30.0, 10.0, 180.0, 60.0)
    );
    assert_eq!(
        compute(true, Some(Position::Bottom)),
        Dimensions::new(10.0, 10.0, 180.0, 60.0)
    );
    assert_eq!(
        compute(false, Some(Position::Left)),
        Dimensions::new(10.0, 10.0, 180.0, 80.0)
    );
    assert_eq!(compute(true, None), Dimensions::new(10.0, 10.0, 180.0, 80.0));
}

#[test]
fn degenerate_parent_passes_negative_size_through() {
    let parent = Dimensions::from_size(10.0, 10.0);

    let dimensions = compute_chart_dimensions(
        parent,
        &theme(),
        &AxisTicksDimensionsMap::new(),
        &AxisSpecs::new(),
        false,
        None,
    );

    assert_eq!(dimensions.width, -10.0);
    assert_eq!(dimensions.height, -10.0);
    assert!(dimensions.is_degenerate());
}
