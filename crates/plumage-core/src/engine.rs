//! The stylesheet pipeline: controls + model + session in, stylesheet + report out.

use crate::assemble::{StylesheetParts, assemble};
use crate::classify::{AttributeColumns, NONE_CHOICE, classify};
use crate::controls::StyleControls;
use crate::encode::attribute::DEFAULT_MAX_SIZE;
use crate::encode::{
    SizeStatistic, base_rules, categorical_color_rules, line_color, sizing_rules,
    weight_color_rules,
};
use crate::inspector;
use crate::model::GraphModel;
use crate::overlay::overlay_rule;
use crate::palette::Palette;
use crate::session::{Selection, Session, TapEvent};
use crate::style::{StyleRule, Stylesheet};
use std::sync::Arc;

/// Result of one [`StyleEngine::run`].
#[derive(Debug, Clone)]
pub struct RunOutput {
    pub stylesheet: Stylesheet,
    pub report: String,
    /// `false` when the tap repeated the previous one and the prior report was reused.
    pub report_recomputed: bool,
    pub session: Session,
}

/// Stylesheet generation over one loaded dataset. Cheap to clone; the model is shared.
#[derive(Debug, Clone)]
pub struct StyleEngine {
    model: Arc<GraphModel>,
    defaults: StyleControls,
    columns: AttributeColumns,
}

impl StyleEngine {
    pub fn new(model: impl Into<Arc<GraphModel>>) -> Self {
        let model = model.into();
        let columns = classify(&model);
        Self {
            model,
            defaults: StyleControls::default(),
            columns,
        }
    }

    /// Replaces the defaults user controls are merged over.
    pub fn with_default_controls(mut self, defaults: StyleControls) -> Self {
        self.defaults = defaults;
        self
    }

    pub fn model(&self) -> &GraphModel {
        &self.model
    }

    pub fn columns(&self) -> &AttributeColumns {
        &self.columns
    }

    /// `controls` deep-merged over the engine defaults. A non-object control value is
    /// ignored.
    pub fn resolve_controls(&self, controls: &StyleControls) -> StyleControls {
        let mut merged = self.defaults.clone();
        if controls.as_value().is_object() {
            merged.deep_merge(controls.as_value());
        }
        merged
    }

    fn sizing(&self, controls: &StyleControls) -> Vec<StyleRule> {
        let choice = controls.get_str("encoding.numeric").unwrap_or(NONE_CHOICE);
        let Some(stat) = SizeStatistic::from_choice(choice, &self.columns) else {
            return Vec::new();
        };
        let max_size = controls
            .get_f64("encoding.maxSize")
            .unwrap_or(DEFAULT_MAX_SIZE);
        sizing_rules(&self.model, &stat, max_size)
    }

    fn coloring(&self, controls: &StyleControls) -> Vec<StyleRule> {
        let column = controls
            .get_str("encoding.categorical")
            .unwrap_or(NONE_CHOICE);
        if column == NONE_CHOICE || column.is_empty() {
            return Vec::new();
        }
        if !self.columns.is_categorical(column) {
            tracing::warn!(column, "unknown categorical attribute; skipping node coloring");
            return Vec::new();
        }
        let palette = Palette::from_choice(controls.get_str("encoding.palette"))
            .unwrap_or_else(|err| {
                let fallback = Palette::default();
                tracing::warn!(%err, %fallback, "falling back to default palette");
                fallback
            });
        categorical_color_rules(&self.model, column, palette)
    }

    /// Builds the full stylesheet for `controls` (merged over the defaults) with `selection`
    /// highlighted.
    pub fn stylesheet(
        &self,
        controls: &StyleControls,
        selection: Option<&Selection>,
    ) -> Stylesheet {
        let controls = self.resolve_controls(controls);

        let base = Vec::from(base_rules(&controls));
        let sizing = self.sizing(&controls);
        let coloring = self.coloring(&controls);
        let weight = if controls.is_enabled("edge.weightColoring") {
            weight_color_rules(&self.model, &line_color(&controls))
        } else {
            Vec::new()
        };
        let overlay = overlay_rule(selection);

        tracing::debug!(
            base = base.len(),
            sizing = sizing.len(),
            coloring = coloring.len(),
            weight = weight.len(),
            overlay = overlay.is_some(),
            "assembled stylesheet"
        );
        assemble(StylesheetParts {
            base,
            sizing,
            coloring,
            weight,
            overlay,
        })
    }

    /// One pipeline run. A tap that repeats the previous one keeps the previous report; the
    /// stylesheet is rebuilt every time.
    pub fn run(
        &self,
        mut session: Session,
        controls: &StyleControls,
        tap: Option<TapEvent>,
    ) -> RunOutput {
        let report_recomputed = match tap {
            Some(tap) if session.is_repeat(&tap) => {
                tracing::debug!("repeated tap; reusing report");
                false
            }
            Some(tap) => {
                let report = inspector::report(&self.model, Some(&tap.selection));
                session.record(tap, report);
                true
            }
            None if session.report().is_none() => {
                let report = inspector::report(&self.model, session.selection());
                session.set_report(report);
                true
            }
            None => false,
        };

        let stylesheet = self.stylesheet(controls, session.selection());
        let report = session
            .report()
            .map(str::to_string)
            .unwrap_or_else(|| inspector::PLACEHOLDER.to_string());

        RunOutput {
            stylesheet,
            report,
            report_recomputed,
            session,
        }
    }
}
