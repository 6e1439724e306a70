//! End-to-end scenarios through the public render API.

use std::collections::HashMap;

use glam::DVec2;
use pretty_assertions::assert_eq;
use selah::{
    Canvas, DisplayMode, LineRole, Percent, PositionPatch, Rect, RenderRequest, SceneItem,
    SceneNode, SlideContent, SlideInput, Surface, Theme,
};

fn themed(content: SlideContent) -> SlideInput {
    SlideInput::Themed(content)
}

#[test]
fn hebrew_title_scenario() {
    // theme with title at {x:0, y:3, w:100, h:8}, content {title: "שלום"},
    // original mode: exactly one title line, RTL, no titleTranslation
    let mut theme = Theme::default();
    theme.positions.insert(
        LineRole::Title,
        PositionPatch {
            x: Some(Percent(0.0)),
            y: Some(Percent(3.0)),
            width: Some(Percent(100.0)),
            height: Some(Percent(8.0)),
            ..Default::default()
        },
    );
    let content = themed(SlideContent {
        title: Some("שלום".into()),
        ..Default::default()
    });
    let scene = selah::render(&RenderRequest::new(
        Some(&theme),
        Some(&content),
        DisplayMode::Original,
    ));

    let lines: Vec<_> = scene.lines().collect();
    assert_eq!(lines.len(), 1);
    assert_eq!(lines[0].role, LineRole::Title);
    assert!(lines[0].rtl);
    assert_eq!(lines[0].rect, Rect::new(0.0, 3.0, 100.0, 8.0));
    assert!(scene.line_for(LineRole::TitleTranslation).is_none());
}

#[test]
fn bilingual_reference_scenario() {
    let content = themed(SlideContent {
        reference: Some("Genesis 1:1".into()),
        ..Default::default()
    });
    let scene = selah::render(&RenderRequest::new(
        None,
        Some(&content),
        DisplayMode::Bilingual,
    ));
    let reference = scene.reference_lines().next().expect("reference line");
    assert_eq!(reference.line.text, "בראשית א׳:א׳ | Genesis 1:1");
}

#[test]
fn single_language_scenario() {
    // originalLanguage "es": transliteration/translation suppressed, and
    // original carries the newline-joined concatenation
    let content = themed(SlideContent {
        original: Some("Cristo me ama".into()),
        translation: Some("Jesus loves me".into()),
        original_language: Some("es".into()),
        ..Default::default()
    });
    let scene = selah::render(&RenderRequest::new(
        None,
        Some(&content),
        DisplayMode::Bilingual,
    ));
    assert!(scene.line_for(LineRole::Transliteration).is_none());
    assert!(scene.line_for(LineRole::Translation).is_none());
    assert_eq!(
        scene.line_for(LineRole::Original).unwrap().text,
        "Cristo me ama\nJesus loves me"
    );
}

#[test]
fn two_phase_measurement_converges() {
    let content = themed(SlideContent {
        original: Some("ברוך אתה".into()),
        transliteration: Some("baruch ata".into()),
        translation: Some("blessed are You".into()),
        ..Default::default()
    });

    // phase one: no measurements; the auto-height original is pending
    let first = selah::render(&RenderRequest::new(
        None,
        Some(&content),
        DisplayMode::Bilingual,
    ));
    assert!(first.pending_measurements.contains(&LineRole::Original));

    // phase two: host measured the painted lines
    let mut measured: HashMap<LineRole, Percent> = HashMap::new();
    measured.insert(LineRole::Original, Percent(12.0));
    measured.insert(LineRole::Transliteration, Percent(8.0));
    let mut req = RenderRequest::new(None, Some(&content), DisplayMode::Bilingual);
    req.measurer = &measured;
    let second = selah::render(&req);

    assert!(!second.pending_measurements.contains(&LineRole::Original));
    let translit = second.line_for(LineRole::Transliteration).unwrap();
    // default original y is 35, measured height 12, default gap 1.5
    assert_eq!(translit.rect.y, Percent(48.5));
    let translation = second.line_for(LineRole::Translation).unwrap();
    // 48.5 + measured 8 + gap 1.5
    assert_eq!(translation.rect.y, Percent(58.0));
    // measured heights replace stored heights for auto-height boxes
    assert_eq!(second.line_for(LineRole::Original).unwrap().rect.height, Percent(12.0));
}

#[test]
fn scale_matches_every_surface() {
    let content = themed(SlideContent {
        title: Some("one canvas".into()),
        ..Default::default()
    });
    let surfaces = [
        Surface::Fixed(DVec2::new(960.0, 540.0)),
        Surface::FillViewport(DVec2::new(3840.0, 2160.0)),
        Surface::Native,
    ];
    let mut trees = Vec::new();
    for surface in surfaces {
        let mut req = RenderRequest::new(None, Some(&content), DisplayMode::Bilingual);
        req.surface = surface;
        let scene = selah::render(&req);
        trees.push((scene.scale, scene.nodes));
    }
    // geometry is identical across surfaces; only the scale differs
    assert_eq!(trees[0].1, trees[1].1);
    assert_eq!(trees[1].1, trees[2].1);
    assert_eq!(trees[0].0.raw(), 0.5);
    assert_eq!(trees[1].0.raw(), 2.0);
    assert_eq!(trees[2].0.raw(), 1.0);
}

#[test]
fn theme_json_round_trip_renders() {
    let json = r##"{
        "canvas": { "width": 1920, "height": 1080 },
        "positions": {
            "original": { "y": 30.0, "autoHeight": true },
            "translation": {
                "positionMode": "flow",
                "flowAnchor": "original",
                "flowGap": 2.0
            }
        },
        "styles": {
            "original": { "fontSize": 110, "weight": 700 },
            "translation": { "color": "#ffd700" }
        },
        "lineOrder": ["original", "translation", "reference"],
        "background": { "type": "color", "color": "#000000" }
    }"##;
    let theme: Theme = serde_json::from_str(json).unwrap();
    let content = themed(SlideContent {
        original: Some("אין עוד מלבדו".into()),
        translation: Some("There is none besides Him".into()),
        ..Default::default()
    });
    let scene = selah::render(&RenderRequest::new(
        Some(&theme),
        Some(&content),
        DisplayMode::Bilingual,
    ));

    assert!(matches!(scene.nodes[0], SceneNode::Background(_)));
    let original = scene.line_for(LineRole::Original).unwrap();
    assert!(original.rtl);
    assert_eq!(original.weight, 700);
    let translation = scene.line_for(LineRole::Translation).unwrap();
    assert!(!translation.rtl);
    assert_eq!(translation.color, "#ffd700");
    // flow: original pinned at 30, auto-height unmeasured means height 0
    assert_eq!(translation.rect.y, Percent(32.0));
}

#[test]
fn scene_serializes_for_browser_overlay() {
    let content = themed(SlideContent {
        title: Some("שבת שלום".into()),
        ..Default::default()
    });
    let scene = selah::render(&RenderRequest::new(
        None,
        Some(&content),
        DisplayMode::Original,
    ));
    let json = serde_json::to_value(&scene).unwrap();
    assert_eq!(json["scale"], 1.0);
    let nodes = json["nodes"].as_array().unwrap();
    assert_eq!(nodes.len(), 1);
    assert_eq!(nodes[0]["kind"], "line");
    assert_eq!(nodes[0]["role"], "title");
    assert_eq!(nodes[0]["rtl"], true);
}

#[test]
fn malformed_theme_values_do_not_fault() {
    // negative sizes, out-of-range coordinates, cyclic anchors: render
    // must still produce a scene
    let json = r#"{
        "canvas": { "width": 0, "height": -20 },
        "positions": {
            "original": {
                "x": 140.0, "width": 300.0,
                "positionMode": "flow", "flowAnchor": "translation"
            },
            "translation": { "positionMode": "flow", "flowAnchor": "original" }
        },
        "styles": { "original": { "fontSize": -50 } }
    }"#;
    let theme: Theme = serde_json::from_str(json).unwrap();
    let content = themed(SlideContent {
        original: Some("עמיד".into()),
        translation: Some("resilient".into()),
        ..Default::default()
    });
    let scene = selah::render(&RenderRequest::new(
        Some(&theme),
        Some(&content),
        DisplayMode::Bilingual,
    ));
    // canvas floored, both cyclic lines placed
    assert_eq!(scene.canvas, Canvas::sanitized(Some(0.0), Some(-20.0)));
    assert!(scene.line_for(LineRole::Original).is_some());
    assert!(scene.line_for(LineRole::Translation).is_some());
    for node in &scene.nodes {
        assert!(node.rect().y.is_finite());
    }
}

#[test]
fn quick_mode_boxes_carry_their_own_style() {
    let json = r##"{
        "backgroundBoxes": [
            { "x": 0, "y": 0, "width": 100, "height": 100,
              "color": "#112233", "texture": "grid" }
        ],
        "textBoxes": [
            { "x": 10, "y": 40, "width": 80, "height": 20,
              "text": "הודעה חשובה",
              "style": {
                  "fontSize": 140,
                  "borders": { "top": { "width": 2, "color": "#fff" } },
                  "cornerRadii": { "topLeft": 12 },
                  "textOpacity": 0.9,
                  "backgroundOpacity": 0.5
              } }
        ],
        "imageBoxes": [
            { "x": 70, "y": 5, "width": 25, "height": 25, "url": "logo.png" }
        ]
    }"##;
    let slide: SlideInput = serde_json::from_str(json).unwrap();
    assert!(matches!(slide, SlideInput::Presentation(_)));
    let scene = selah::render(&RenderRequest::new(
        None,
        Some(&slide),
        DisplayMode::Bilingual,
    ));
    assert_eq!(scene.nodes.len(), 3);
    let tb = scene
        .nodes
        .iter()
        .find_map(|n| match n {
            SceneNode::TextBox(tb) => Some(tb),
            _ => None,
        })
        .unwrap();
    assert!(tb.rtl);
    assert_eq!(tb.style.borders.top.width, 2.0);
    assert_eq!(tb.style.corner_radii.top_left, 12.0);
    assert_eq!(tb.style.text_opacity, 0.9);
    assert_eq!(tb.style.background_opacity, 0.5);
}
