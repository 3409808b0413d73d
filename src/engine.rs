//! The design-state engine: actions, the pure transition function and the
//! history-backed state container.
//!
//! # Example
//!
//! ```
//! use logo_forge::{Action, DesignState, IconRef, IconStylePatch};
//!
//! let mut state = DesignState::new();
//! state.dispatch(Action::SetIcon(IconRef::from("Star")));
//! state.dispatch(Action::UpdateIconStyle(IconStylePatch {
//!     size: Some(96),
//!     ..Default::default()
//! }));
//! assert_eq!(state.present().icon_style().unwrap().size, 96);
//!
//! state.undo();
//! assert_eq!(state.present().icon_style().unwrap().size, 48);
//! ```

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::history::{History, HistoryConfig};
use crate::layout::LayoutId;
use crate::palettes::{ColorPalette, find_palette};
use crate::style::{
    BackgroundPatch, IconRef, IconStylePatch, StyleModel, Subject, SubjectKind, TextStylePatch,
};

// ============================================================================
// Actions
// ============================================================================

/// A discrete state transition.
///
/// Serialized as `{"type": "SET_ICON", "payload": "Star"}`; unit actions
/// carry no payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "payload", rename_all = "SCREAMING_SNAKE_CASE")]
#[cfg_attr(feature = "jsonschema", derive(schemars::JsonSchema))]
pub enum Action {
    Undo,
    Redo,
    Reset,
    SetLogoType(SubjectKind),
    SetIcon(IconRef),
    UpdateIconStyle(IconStylePatch),
    UpdateTextStyle(TextStylePatch),
    UpdateBackground(BackgroundPatch),
    SetLayout(LayoutId),
    /// Palette id, e.g. `"spotify"`.
    ApplyPalette(String),
}

impl Action {
    /// Parses a JSON array of actions.
    pub fn script_from_json(json: &str) -> Result<Vec<Action>, serde_json::Error> {
        serde_json::from_str(json)
    }
}

/// Computes the successor of `current` for a model-editing action.
///
/// Returns `None` for actions that do not edit the model directly (history
/// navigation, reset, kind switch and unknown palettes). Merges aimed at the
/// inactive subject kind return an unchanged clone.
pub fn transition(current: &StyleModel, action: &Action) -> Option<StyleModel> {
    let mut next = current.clone();
    match action {
        Action::SetIcon(icon) => {
            if let Subject::Icon(style) = &mut next.subject {
                style.icon = Some(icon.clone());
            }
        }
        Action::UpdateIconStyle(patch) => {
            if let Subject::Icon(style) = &mut next.subject {
                patch.apply_to(style);
            }
        }
        Action::UpdateTextStyle(patch) => {
            if let Subject::Text(style) = &mut next.subject {
                patch.apply_to(style);
            }
        }
        Action::UpdateBackground(patch) => patch.apply_to(&mut next.background),
        Action::SetLayout(layout) => next.layout = LayoutId::new(layout.preset().id),
        Action::ApplyPalette(id) => apply_palette(&mut next, find_palette(id)?),
        Action::Undo | Action::Redo | Action::Reset | Action::SetLogoType(_) => return None,
    }
    Some(next)
}

/// Copies palette colors into the active subject and the background gradient.
fn apply_palette(model: &mut StyleModel, palette: &ColorPalette) {
    let colors = &palette.colors;
    match &mut model.subject {
        Subject::Icon(style) => {
            style.stroke_color = colors.primary;
            style.fill_color = colors.secondary;
        }
        Subject::Text(style) => {
            style.text_color = colors.primary;
            style.border_color = colors.secondary;
        }
    }
    model.background.gradient_from = colors.gradient_from;
    model.background.gradient_to = Some(colors.gradient_to);
}

// ============================================================================
// DesignState
// ============================================================================

/// The undoable design state.
///
/// Every mutating operation returns whether the present snapshot changed.
/// History operations never fail.
#[derive(Debug, Clone)]
pub struct DesignState {
    history: History<StyleModel>,
}

impl Default for DesignState {
    fn default() -> Self {
        Self::new()
    }
}

impl DesignState {
    /// A default icon design with unbounded history.
    pub fn new() -> Self {
        Self::with_config(StyleModel::default(), HistoryConfig::default())
    }

    pub fn with_config(initial: StyleModel, config: HistoryConfig) -> Self {
        Self {
            history: History::with_config(initial, config),
        }
    }

    pub fn present(&self) -> &StyleModel {
        self.history.present()
    }

    pub fn history(&self) -> &History<StyleModel> {
        &self.history
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    /// Applies one action. Returns true if the present snapshot changed.
    pub fn dispatch(&mut self, action: Action) -> bool {
        match action {
            Action::Undo => self.undo(),
            Action::Redo => self.redo(),
            Action::Reset => self.reset(),
            Action::SetLogoType(kind) => self.set_kind(kind),
            action => self.apply(&action),
        }
    }

    /// Applies a model-editing action through [`transition`].
    pub fn apply(&mut self, action: &Action) -> bool {
        let Some(next) = transition(self.present(), action) else {
            if let Action::ApplyPalette(id) = action {
                warn!(palette = %id, "unknown palette, ignoring");
            }
            return false;
        };
        let changed = self.history.commit(next);
        debug!(?action, changed, depth = self.history.past().len(), "applied action");
        changed
    }

    pub fn undo(&mut self) -> bool {
        let changed = self.history.undo();
        debug!(changed, "undo");
        changed
    }

    pub fn redo(&mut self) -> bool {
        let changed = self.history.redo();
        debug!(changed, "redo");
        changed
    }

    /// Restores a default icon design, keeping the layout and dropping all
    /// history. Returns true if the present snapshot changed.
    pub fn reset(&mut self) -> bool {
        let fresh = StyleModel::for_kind(SubjectKind::Icon, self.present().layout.clone());
        let changed = *self.present() != fresh;
        self.history.reset(fresh);
        debug!(changed, "reset design");
        changed
    }

    /// Replaces the whole model with defaults for `kind`, keeping only the
    /// layout. Recorded in history like any other edit.
    pub fn set_kind(&mut self, kind: SubjectKind) -> bool {
        let next = StyleModel::for_kind(kind, self.present().layout.clone());
        let changed = self.history.commit(next);
        debug!(?kind, changed, "set subject kind");
        changed
    }

    /// Applies a palette by id as a single history entry.
    pub fn apply_palette(&mut self, id: &str) -> bool {
        self.apply(&Action::ApplyPalette(id.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Color;
    use crate::style::{IconStyle, TextStyle};

    fn set_icon(name: &str) -> Action {
        Action::SetIcon(IconRef::from(name))
    }

    fn icon_size(size: u32) -> Action {
        Action::UpdateIconStyle(IconStylePatch {
            size: Some(size),
            ..Default::default()
        })
    }

    #[test]
    fn star_resize_undo_scenario() {
        let mut state = DesignState::new();
        let initial = state.present().clone();

        assert!(state.dispatch(set_icon("Star")));
        let with_star = state.present().clone();
        assert_eq!(
            with_star.icon_style().unwrap().icon,
            Some(IconRef::from("Star"))
        );
        assert_eq!(with_star.icon_style().unwrap().size, 48);
        assert_eq!(state.history().past(), &[initial.clone()]);

        assert!(state.dispatch(icon_size(96)));
        assert_eq!(state.present().icon_style().unwrap().size, 96);
        assert_eq!(state.history().past().len(), 2);

        assert!(state.undo());
        assert_eq!(state.present(), &with_star);
        assert_eq!(state.history().past(), &[initial]);
        assert_eq!(state.history().future().len(), 1);
        assert_eq!(
            state.history().future()[0].icon_style().unwrap().size,
            96
        );
    }

    #[test]
    fn n_edits_then_n_undos_restore_initial() {
        let mut state = DesignState::new();
        let initial = state.present().clone();
        let actions = [
            set_icon("Heart"),
            icon_size(64),
            Action::UpdateBackground(BackgroundPatch {
                padding: Some(4),
                ..Default::default()
            }),
            Action::SetLayout(LayoutId::from("wide-preview")),
            Action::ApplyPalette("spotify".into()),
        ];
        for action in actions.iter().cloned() {
            assert!(state.dispatch(action));
        }
        for _ in 0..actions.len() {
            assert!(state.undo());
        }
        assert_eq!(state.present(), &initial);
        assert!(state.history().past().is_empty());
        assert!(!state.undo());
    }

    #[test]
    fn undo_redo_round_trip() {
        let mut state = DesignState::new();
        state.dispatch(set_icon("Sun"));
        state.dispatch(icon_size(72));
        let before = state.present().clone();

        assert!(state.undo());
        assert!(state.redo());
        assert_eq!(state.present(), &before);
        assert!(!state.can_redo());
    }

    #[test]
    fn edit_after_undo_clears_future() {
        let mut state = DesignState::new();
        state.dispatch(set_icon("Moon"));
        state.undo();
        assert!(state.can_redo());

        state.dispatch(set_icon("Cloud"));
        assert!(!state.can_redo());
        assert!(!state.redo());
        assert_eq!(
            state.present().icon_style().unwrap().icon,
            Some(IconRef::from("Cloud"))
        );
    }

    #[test]
    fn reselecting_layout_is_noop() {
        let mut state = DesignState::new();
        state.dispatch(set_icon("Zap"));
        state.undo();
        let past = state.history().past().clone();
        let future = state.history().future().clone();

        assert!(!state.dispatch(Action::SetLayout(LayoutId::default())));
        assert_eq!(state.history().past(), &past);
        assert_eq!(state.history().future(), &future);
    }

    #[test]
    fn layout_changes_are_undoable() {
        let mut state = DesignState::new();
        state.dispatch(Action::SetLayout(LayoutId::from("preview-left")));
        assert_eq!(state.present().layout.as_str(), "preview-left");
        state.undo();
        assert_eq!(state.present().layout, LayoutId::default());
    }

    #[test]
    fn set_kind_round_trip_resets_icon_style() {
        let mut state = DesignState::new();
        state.dispatch(set_icon("Star"));
        state.dispatch(icon_size(120));

        assert!(state.set_kind(SubjectKind::Text));
        assert_eq!(state.present().text_style(), Some(&TextStyle::default()));
        assert!(state.set_kind(SubjectKind::Icon));
        assert_eq!(state.present().icon_style(), Some(&IconStyle::default()));
    }

    #[test]
    fn set_kind_keeps_layout_and_same_kind_is_noop() {
        let mut state = DesignState::new();
        state.dispatch(Action::SetLayout(LayoutId::from("preview-top")));
        let depth = state.history().past().len();

        assert!(!state.set_kind(SubjectKind::Icon));
        assert_eq!(state.history().past().len(), depth);

        state.dispatch(Action::SetLogoType(SubjectKind::Text));
        assert_eq!(state.present().layout.as_str(), "preview-top");
    }

    #[test]
    fn merge_into_inactive_kind_is_noop() {
        let mut state = DesignState::new();
        let text_patch = Action::UpdateTextStyle(TextStylePatch {
            text: Some("A".into()),
            ..Default::default()
        });
        assert!(!state.dispatch(text_patch));
        assert!(!state.can_undo());

        state.set_kind(SubjectKind::Text);
        let depth = state.history().past().len();
        assert!(!state.dispatch(set_icon("Star")));
        assert!(!state.dispatch(icon_size(10)));
        assert_eq!(state.history().past().len(), depth);
    }

    #[test]
    fn reset_keeps_layout_and_clears_history() {
        let mut state = DesignState::new();
        state.dispatch(Action::SetLayout(LayoutId::from("wide-preview")));
        state.set_kind(SubjectKind::Text);
        state.undo();

        assert!(state.dispatch(Action::Reset));
        assert_eq!(state.present().kind(), SubjectKind::Icon);
        assert_eq!(state.present().layout.as_str(), "wide-preview");
        assert!(!state.can_undo());
        assert!(!state.can_redo());
    }

    #[test]
    fn reset_of_pristine_design_reports_no_change() {
        let mut state = DesignState::new();
        assert!(!state.dispatch(Action::Reset));

        state.dispatch(set_icon("Star"));
        state.undo();
        assert!(state.can_redo());
        assert!(!state.reset());
        assert!(!state.can_redo());
    }

    #[test]
    fn unknown_layout_collapses_to_default() {
        let mut state = DesignState::new();
        assert!(!state.dispatch(Action::SetLayout(LayoutId::from("bogus"))));
        assert_eq!(state.present().layout, LayoutId::default());
        assert!(!state.can_undo());

        state.dispatch(Action::SetLayout(LayoutId::from("preview-top")));
        assert!(state.dispatch(Action::SetLayout(LayoutId::from("bogus"))));
        assert_eq!(state.present().layout.as_str(), "default");
    }

    #[test]
    fn palette_is_one_history_entry() {
        let mut state = DesignState::new();
        assert!(state.apply_palette("spotify"));
        assert_eq!(state.history().past().len(), 1);

        let palette = find_palette("spotify").unwrap();
        let model = state.present();
        let icon = model.icon_style().unwrap();
        assert_eq!(icon.stroke_color, palette.colors.primary);
        assert_eq!(icon.fill_color, palette.colors.secondary);
        assert_eq!(model.background.gradient_from, palette.colors.gradient_from);
        assert_eq!(model.background.gradient_to, Some(palette.colors.gradient_to));
    }

    #[test]
    fn palette_on_text_subject_sets_text_colors() {
        let mut state = DesignState::new();
        state.set_kind(SubjectKind::Text);
        state.apply_palette("spotify");

        let palette = find_palette("spotify").unwrap();
        let text = state.present().text_style().unwrap();
        assert_eq!(text.text_color, palette.colors.primary);
        assert_eq!(text.border_color, palette.colors.secondary);
    }

    #[test]
    fn unknown_palette_is_ignored() {
        let mut state = DesignState::new();
        assert!(!state.apply_palette("no-such-palette"));
        assert!(!state.can_undo());
    }

    #[test]
    fn bounded_state_keeps_newest_entries() {
        let mut state = DesignState::with_config(StyleModel::default(), HistoryConfig::bounded(1));
        state.dispatch(icon_size(10));
        state.dispatch(icon_size(20));
        assert!(state.undo());
        assert!(!state.undo());
        assert_eq!(state.present().icon_style().unwrap().size, 10);
    }

    #[test]
    fn action_wire_format() {
        let json = r##"[
            {"type": "SET_ICON", "payload": "Star"},
            {"type": "UPDATE_ICON_STYLE", "payload": {"size": 96, "strokeColor": "#ff0000"}},
            {"type": "UPDATE_BACKGROUND", "payload": {"gradientTo": null}},
            {"type": "SET_LOGO_TYPE", "payload": "text"},
            {"type": "UNDO"}
        ]"##;
        let script = Action::script_from_json(json).unwrap();
        assert_eq!(script[0], set_icon("Star"));
        assert_eq!(
            script[1],
            Action::UpdateIconStyle(IconStylePatch {
                size: Some(96),
                stroke_color: Some(Color::rgb(255, 0, 0)),
                ..Default::default()
            })
        );
        assert_eq!(
            script[2],
            Action::UpdateBackground(BackgroundPatch {
                gradient_to: Some(None),
                ..Default::default()
            })
        );
        assert_eq!(script[3], Action::SetLogoType(SubjectKind::Text));
        assert_eq!(script[4], Action::Undo);
    }
}
