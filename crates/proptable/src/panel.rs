//! Host-side props panel state.
//!
//! [`PropsPanel`] is the observer a host registers for target changes. It
//! keeps the latest [`PropsPayload`] and turns it into a [`PanelView`] on
//! demand. The panel knows nothing about the host's event system: the host
//! calls [`PropsPanel::receive`] when new props arrive and
//! [`PropsPanel::target_changed`] when navigation moves to another target.
//!
//! ```rust
//! use proptable::{PanelView, PrettyType, PrettyValue, PropertyDefinition, PropsPanel,
//!     PropsPayload, TypeDescriptor};
//!
//! let mut panel = PropsPanel::new();
//! panel.set_active(true);
//! assert_eq!(panel.view(&PrettyType, &PrettyValue), PanelView::Hidden);
//!
//! panel.receive(Some(PropsPayload::new(
//!     TypeDescriptor::named("Button"),
//!     vec![PropertyDefinition::new("label", "string")],
//! )));
//! assert!(matches!(panel.view(&PrettyType, &PrettyValue), PanelView::Table(_)));
//!
//! panel.target_changed();
//! assert_eq!(panel.view(&PrettyType, &PrettyValue), PanelView::Hidden);
//! ```

use crate::format::{TypeFormatter, ValueFormatter};
use crate::model::RenderLimits;
use crate::payload::PropsPayload;
use crate::table::TableResult;

/// What the panel should paint.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PanelView {
    /// Nothing: the panel is inactive or has no payload.
    Hidden,
    /// Host-supplied override content, shown verbatim.
    Legacy(String),
    /// The props table for the current payload.
    Table(TableResult),
}

/// Observer state for one props panel.
#[derive(Clone, Debug, Default)]
pub struct PropsPanel {
    active: bool,
    legacy: Option<String>,
    payload: Option<PropsPayload>,
}

impl PropsPanel {
    pub fn new() -> Self {
        PropsPanel::default()
    }

    /// Sets override content that replaces the table whenever present.
    pub fn with_legacy(mut self, legacy: impl Into<String>) -> Self {
        self.legacy = Some(legacy.into());
        self
    }

    /// Marks the panel as visible or hidden in the host.
    pub fn set_active(&mut self, active: bool) {
        self.active = active;
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Replaces the current payload wholesale.
    ///
    /// `None` clears the panel, which is distinct from receiving an empty
    /// payload: an empty payload with a type still shows the notice.
    pub fn receive(&mut self, payload: Option<PropsPayload>) {
        tracing::debug!(
            present = payload.is_some(),
            definitions = payload.as_ref().map_or(0, |p| p.prop_definitions.len()),
            "props payload received"
        );
        self.payload = payload;
    }

    /// Clears the payload when the host navigates to another target.
    pub fn target_changed(&mut self) {
        self.receive(None);
    }

    /// The current payload, if any.
    pub fn payload(&self) -> Option<&PropsPayload> {
        self.payload.as_ref()
    }

    /// Computes the view for the current state.
    ///
    /// Legacy content wins over everything, even an inactive panel. Otherwise
    /// the table is built fresh from the payload on every call.
    pub fn view<T, V>(&self, types: &T, values: &V) -> PanelView
    where
        T: TypeFormatter + ?Sized,
        V: ValueFormatter + ?Sized,
    {
        self.view_or(&RenderLimits::default(), types, values)
    }

    /// Like [`PropsPanel::view`], with limits the payload leaves out taken
    /// from `fallback`.
    pub fn view_or<T, V>(&self, fallback: &RenderLimits, types: &T, values: &V) -> PanelView
    where
        T: TypeFormatter + ?Sized,
        V: ValueFormatter + ?Sized,
    {
        if let Some(legacy) = &self.legacy {
            return PanelView::Legacy(legacy.clone());
        }
        match (&self.payload, self.active) {
            (Some(payload), true) => {
                PanelView::Table(payload.build_table_or(fallback, types, values))
            }
            _ => PanelView::Hidden,
        }
    }
}
