//! # Document Builder
//!
//! Owns the canonical layout of one report for the duration of an edit
//! session.
//!
//! ## Lifecycle
//!
//! ```text
//! Report → Builder::new → dispatch(Action)* → save(store) → Report
//!                 ↑                                 │
//!                 └──── local state kept on failure ┘
//! ```
//!
//! Every operation goes through [`reduce`], so the builder itself only
//! tracks which state is current, a version counter, and the outcome of the
//! last save.

use crate::actions::{reduce, Action};
use crate::element_editor::ElementEditor;
use crate::ids::next_element_id;
use crate::sample_layout::sample_layout;
use crate::sortable::SortableList;
use crate::state::{BuilderState, Panel};
use crate::store::ReportStore;
use crate::BuilderError;
use folio_model::{Element, ElementContent, ElementKind, Report};
use tracing::{debug, info, warn};

/// Outcome of the most recent save, surfaced to the user as a notification
#[derive(Debug, Clone, PartialEq, Default)]
pub enum SaveStatus {
    #[default]
    Idle,
    Saved,
    Failed(String),
}

#[derive(Debug)]
pub struct Builder {
    /// Report being edited; its `layout` is replaced by `state` on save
    report: Report,

    state: BuilderState,

    /// Increments on every action that changes state
    version: u64,

    save_status: SaveStatus,
}

impl Builder {
    /// Start editing `report`; its layout is renumbered to dense positions
    pub fn new(report: Report) -> Self {
        let state = BuilderState::from_layout(report.layout.clone());
        Self {
            report,
            state,
            version: 0,
            save_status: SaveStatus::Idle,
        }
    }

    pub fn state(&self) -> &BuilderState {
        &self.state
    }

    pub fn elements(&self) -> &[Element] {
        &self.state.elements
    }

    pub fn selected(&self) -> Option<&Element> {
        self.state.selected_element()
    }

    pub fn panel(&self) -> Panel {
        self.state.panel
    }

    pub fn version(&self) -> u64 {
        self.version
    }

    pub fn save_status(&self) -> &SaveStatus {
        &self.save_status
    }

    /// Snapshot of the report with the current layout
    pub fn report(&self) -> Report {
        Report {
            layout: self.state.elements.clone(),
            ..self.report.clone()
        }
    }

    pub fn into_report(self) -> Report {
        Report {
            layout: self.state.elements,
            ..self.report
        }
    }

    /// Apply an action through the reducer
    pub fn dispatch(&mut self, action: Action) -> Result<(), BuilderError> {
        debug!(action = action.name(), version = self.version, "dispatch");

        let next = reduce(&self.state, &action)?;
        if next != self.state {
            self.version += 1;
            self.state = next;
        }
        Ok(())
    }

    /// Append a new element with default content; returns its id
    pub fn add(&mut self, kind: ElementKind) -> Result<String, BuilderError> {
        let id = self.fresh_id();
        self.dispatch(Action::AddElement {
            id: id.clone(),
            kind,
        })?;
        Ok(id)
    }

    pub fn select(&mut self, element_id: &str) -> Result<(), BuilderError> {
        self.dispatch(Action::SelectElement {
            element_id: element_id.to_string(),
        })
    }

    pub fn update(&mut self, element_id: &str, content: ElementContent) -> Result<(), BuilderError> {
        self.dispatch(Action::UpdateContent {
            element_id: element_id.to_string(),
            content,
        })
    }

    pub fn delete(&mut self, element_id: &str) -> Result<(), BuilderError> {
        self.dispatch(Action::DeleteElement {
            element_id: element_id.to_string(),
        })
    }

    pub fn reorder(&mut self, active_id: &str, over_id: &str) -> Result<(), BuilderError> {
        self.dispatch(Action::ReorderElement {
            active_id: active_id.to_string(),
            over_id: over_id.to_string(),
        })
    }

    pub fn set_panel(&mut self, panel: Panel) -> Result<(), BuilderError> {
        self.dispatch(Action::SetPanel { panel })
    }

    /// Replace the layout with the demonstration layout
    pub fn load_sample(&mut self) -> Result<(), BuilderError> {
        let elements = sample_layout(next_element_id);
        self.dispatch(Action::ReplaceLayout { elements })
    }

    /// Property editor for an element, if it exists
    pub fn editor(&self, element_id: &str) -> Option<ElementEditor<'_>> {
        self.state.find(element_id).map(ElementEditor::new)
    }

    /// Property editor for the current selection
    pub fn selected_editor(&self) -> Option<ElementEditor<'_>> {
        self.state.selected_element().map(ElementEditor::new)
    }

    /// Reorderable view of the layout
    pub fn sortable(&self) -> SortableList<'_> {
        SortableList::new(&self.state.elements, self.state.selected.as_deref())
    }

    /// Persist the current layout through `store`
    ///
    /// Local state is never rolled back: on failure the layout stays as it
    /// was and the error is recorded in [`SaveStatus::Failed`].
    pub async fn save<S: ReportStore>(&mut self, store: &S) -> Result<(), BuilderError> {
        let report_id = self.report.id.clone();
        let layout = self.state.elements.clone();
        let result = store.save_layout(&report_id, &layout).await;

        match result {
            Ok(saved) => {
                info!(report_id = %report_id, elements = layout.len(), "report saved");
                self.report.name = saved.name;
                self.report.description = saved.description;
                self.report.created_at = saved.created_at;
                self.report.updated_at = saved.updated_at;
                self.save_status = SaveStatus::Saved;
                Ok(())
            }
            Err(err) => {
                let message = err.to_string();
                warn!(report_id = %report_id, error = %message, "error saving report");
                self.save_status = SaveStatus::Failed(message.clone());
                Err(BuilderError::Save(message))
            }
        }
    }

    // Ids already in the layout (e.g. from a previous session) are skipped
    fn fresh_id(&self) -> String {
        loop {
            let id = next_element_id();
            if !self.state.contains(&id) {
                return id;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_version_increments() {
        let mut builder = Builder::new(Report::new("1", "Test"));
        assert_eq!(builder.version(), 0);

        let id = builder.add(ElementKind::Text).unwrap();
        assert_eq!(builder.version(), 1);

        // no-op actions leave the version alone
        builder.update("missing", ElementContent::default_for(ElementKind::Text)).unwrap();
        assert_eq!(builder.version(), 1);

        builder.delete(&id).unwrap();
        assert_eq!(builder.version(), 2);
    }

    #[test]
    fn test_add_selects_without_switching_panel() {
        let mut builder = Builder::new(Report::new("1", "Test"));
        let id = builder.add(ElementKind::Chart).unwrap();

        assert_eq!(builder.selected().unwrap().id, id);
        assert_eq!(builder.panel(), Panel::Elements);

        builder.select(&id).unwrap();
        assert_eq!(builder.panel(), Panel::Properties);
    }

    #[test]
    fn test_load_sample_replaces_layout() {
        let mut builder = Builder::new(Report::new("1", "Test"));
        let id = builder.add(ElementKind::Image).unwrap();
        builder.select(&id).unwrap();

        builder.load_sample().unwrap();

        assert_eq!(builder.elements().len(), 6);
        assert!(builder.selected().is_none());
        assert!(builder.state().is_dense());
        assert!(builder.state().find(&id).is_none());
    }

    #[test]
    fn test_loaded_layout_is_renumbered() {
        let report = Report::new("1", "Test").with_layout(vec![
            Element::with_defaults("a", ElementKind::Text, 3),
            Element::with_defaults("b", ElementKind::Text, 7),
        ]);
        let builder = Builder::new(report);

        assert!(builder.state().is_dense());
        assert_eq!(builder.report().layout[1].position, 1);
    }
}
