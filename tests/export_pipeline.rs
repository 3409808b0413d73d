//! End-to-end: action script -> design state -> mounted preview -> artifacts.

use std::cell::RefCell;
use std::io::{Cursor, Read};
use std::rc::Rc;
use std::sync::Arc;

use logo_forge::{
    Action, DesignState, ExportError, ExportFormat, ExportPipeline, ExportRequest, IconCatalog,
    KeyEvent, PreviewHost, ResvgRasterizer, ShortcutRegistry, SizePx, Surface, SubjectKind,
    bind_design_state,
};
use resvg::usvg::fontdb;

const SCRIPT: &str = r##"[
    {"type": "SET_ICON", "payload": "Heart"},
    {"type": "UPDATE_ICON_STYLE", "payload": {"size": 120, "strokeColor": "#ff0000"}},
    {"type": "APPLY_PALETTE", "payload": "discord"},
    {"type": "UPDATE_BACKGROUND", "payload": {"shadow": "lg", "direction": "to-br"}}
]"##;

fn pipeline() -> ExportPipeline<ResvgRasterizer> {
    ExportPipeline::with_rasterizer(ResvgRasterizer::with_fontdb(Arc::new(
        fontdb::Database::new(),
    )))
}

fn scripted_state() -> DesignState {
    let mut state = DesignState::new();
    for action in Action::script_from_json(SCRIPT).unwrap() {
        assert!(state.dispatch(action));
    }
    state
}

fn host_for(state: &DesignState) -> PreviewHost {
    let mut host = PreviewHost::new();
    host.mount(Surface::project(
        state.present(),
        IconCatalog::global(),
        SizePx::square(320),
    ));
    host
}

#[test]
fn scripted_design_exports_every_format() {
    let state = scripted_state();
    assert_eq!(state.history().past().len(), 4);
    let host = host_for(&state);
    let pipeline = pipeline();

    let svg = pipeline
        .export(&host, &ExportRequest::new(ExportFormat::Vector))
        .unwrap();
    let doc = String::from_utf8(svg.bytes).unwrap();
    assert!(doc.contains("<foreignObject"));
    assert!(doc.contains(r#"x1="0%" y1="0%" x2="100%" y2="100%""#));
    assert!(doc.contains(r#"filter="url(#logo-shadow)""#));

    let png = pipeline
        .export(&host, &ExportRequest::new(ExportFormat::Raster).with_size(100))
        .unwrap();
    let image = image::load_from_memory(&png.bytes).unwrap();
    assert_eq!((image.width(), image.height()), (200, 200));

    let bundle = pipeline
        .export(&host, &ExportRequest::new(ExportFormat::IconBundle))
        .unwrap();
    let zip = zip::ZipArchive::new(Cursor::new(bundle.bytes)).unwrap();
    assert_eq!(zip.len(), 8);

    assert_eq!(host.live_clones(), 0);
    assert_eq!(host.surface().unwrap().viewport(), SizePx::square(320));
}

#[test]
fn text_design_renders_through_resvg() {
    let script = r#"[
        {"type": "SET_LOGO_TYPE", "payload": "text"},
        {"type": "UPDATE_TEXT_STYLE", "payload": {"text": "LOGO", "fontSize": 40}}
    ]"#;
    let mut state = DesignState::new();
    for action in Action::script_from_json(script).unwrap() {
        state.dispatch(action);
    }
    assert_eq!(state.present().kind(), SubjectKind::Text);
    assert_eq!(state.present().text_style().unwrap().text, "LO");

    let host = host_for(&state);
    let svg = pipeline()
        .export(&host, &ExportRequest::new(ExportFormat::Vector))
        .unwrap();
    assert!(String::from_utf8(svg.bytes).unwrap().contains(">LO</span>"));

    let mut zip = zip::ZipArchive::new(Cursor::new(
        pipeline()
            .export(&host, &ExportRequest::new(ExportFormat::IconBundle).with_manifest(false))
            .unwrap()
            .bytes,
    ))
    .unwrap();
    assert_eq!(zip.len(), 7);
    let mut config = String::new();
    zip.by_name("browserconfig.xml")
        .unwrap()
        .read_to_string(&mut config)
        .unwrap();
    assert!(config.contains("square310x310logo"));
}

#[test]
fn export_without_preview_reports_single_failure() {
    let failure = pipeline()
        .export(&PreviewHost::new(), &ExportRequest::new(ExportFormat::IconBundle))
        .unwrap_err();
    assert_eq!(failure.to_string(), "Failed to download logo. Please try again.");
    assert_eq!(failure.cause(), &ExportError::MissingRenderTarget);
}

#[test]
fn keyboard_shortcuts_drive_history() {
    let state = Rc::new(RefCell::new(scripted_state()));
    let registry = ShortcutRegistry::new();
    let binding = bind_design_state(&registry, Rc::clone(&state));

    let outcome = registry.dispatch(KeyEvent::ctrl('z'));
    assert!(outcome.default_prevented);
    assert_eq!(state.borrow().history().future().len(), 1);

    registry.dispatch(KeyEvent::meta('Y'));
    assert!(!state.borrow().can_redo());

    drop(binding);
    registry.dispatch(KeyEvent::ctrl('z'));
    assert!(!state.borrow().can_redo());
}
