//! Panel view models.
//!
//! Each render is a pure function of the dataset and the current selector
//! values; the caller replaces the whole panel with the result.

use crate::dataset::{Dataset, TacticTable};
use crate::entry::{Step, TacticEntry};
use crate::selector::capitalize_first;

pub const NO_MAP_TACTICS: &str = "No tactics available for the selected map and side.";
pub const NO_OPERATOR_TACTICS: &str = "No tactics available for the selected operator.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepImage {
    pub src: String,
    pub alt: String,
    /// Applied as `max-width`; `None` leaves the image unconstrained.
    pub max_width: Option<String>,
}

impl StepImage {
    /// Inline `style` attribute value (empty when unconstrained).
    pub fn style(&self) -> String {
        match &self.max_width {
            Some(w) => format!("max-width: {w};"),
            None => String::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedStep {
    /// 1-based position within its tactic.
    pub number: usize,
    pub description: String,
    pub image: Option<StepImage>,
}

impl RenderedStep {
    /// The bold prefix, e.g. `Step 2:`.
    pub fn label(&self) -> String {
        format!("Step {}:", self.number)
    }

    pub fn text(&self) -> String {
        format!("{} {}", self.label(), self.description)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SectionBody {
    Steps(Vec<RenderedStep>),
    /// Plain description under the heading, without step numbering.
    Description {
        text: String,
        image: Option<StepImage>,
    },
    /// Heading only.
    Empty,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TacticSection {
    pub heading: String,
    pub body: SectionBody,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Panel {
    /// Informational empty state for incomplete data coverage.
    Fallback(&'static str),
    Sections(Vec<TacticSection>),
}

impl Panel {
    pub fn is_fallback(&self) -> bool {
        matches!(self, Panel::Fallback(_))
    }

    pub fn sections(&self) -> &[TacticSection] {
        match self {
            Panel::Fallback(_) => &[],
            Panel::Sections(sections) => sections,
        }
    }
}

/// Renders one step at its 1-based `position`.
pub fn render_step(step: &Step, position: usize) -> RenderedStep {
    RenderedStep {
        number: position,
        description: step.description.clone(),
        image: step.image.as_ref().map(|src| StepImage {
            src: src.clone(),
            alt: format!("Step {position} Image"),
            max_width: step.image_size.clone(),
        }),
    }
}

fn render_steps(steps: &[Step]) -> Vec<RenderedStep> {
    steps
        .iter()
        .enumerate()
        .map(|(i, step)| render_step(step, i + 1))
        .collect()
}

pub fn render_map_panel(dataset: &Dataset, map: &str, side: &str) -> Panel {
    let Some(table) = dataset.map_tactics(map, side) else {
        tracing::debug!(map, side, "no map tactics");
        return Panel::Fallback(NO_MAP_TACTICS);
    };

    let sections = render_table(table, |tactic_type, entry| match entry {
        TacticEntry::Unrecognized => {
            tracing::warn!(map, side, tactic_type, "skipping unrecognized tactic entry");
            SectionBody::Empty
        }
        entry => SectionBody::Steps(render_steps(entry.steps())),
    });
    tracing::debug!(map, side, sections = sections.len(), "rendered map tactics");
    Panel::Sections(sections)
}

/// Unlike the map panel, an inline entry renders as plain text rather than
/// "Step 1:", and a bare step array is not recognized.
pub fn render_operator_panel(dataset: &Dataset, operator: &str) -> Panel {
    let Some(table) = dataset.operator_tactics(operator) else {
        tracing::debug!(operator, "no operator tactics");
        return Panel::Fallback(NO_OPERATOR_TACTICS);
    };

    let sections = render_table(table, |tactic_type, entry| match entry {
        TacticEntry::StepsField(steps) => SectionBody::Steps(render_steps(steps)),
        TacticEntry::InlineStep(step) => SectionBody::Description {
            text: step.description.clone(),
            image: step.image.as_ref().map(|src| StepImage {
                src: src.clone(),
                alt: format!("{tactic_type} Image"),
                max_width: step.image_size.clone(),
            }),
        },
        other => {
            tracing::warn!(
                operator,
                tactic_type,
                kind = other.kind(),
                "skipping operator tactic entry"
            );
            SectionBody::Empty
        }
    });
    tracing::debug!(operator, sections = sections.len(), "rendered operator tactics");
    Panel::Sections(sections)
}

fn render_table(
    table: &TacticTable,
    mut body: impl FnMut(&str, &TacticEntry) -> SectionBody,
) -> Vec<TacticSection> {
    table
        .iter()
        .map(|(tactic_type, raw)| {
            let entry = TacticEntry::classify(raw);
            TacticSection {
                heading: capitalize_first(tactic_type),
                body: body(tactic_type, &entry),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn dataset(value: serde_json::Value) -> Dataset {
        Dataset::from_value(value).unwrap()
    }

    fn step_texts(body: &SectionBody) -> Vec<String> {
        match body {
            SectionBody::Steps(steps) => steps.iter().map(RenderedStep::text).collect(),
            other => panic!("expected steps, got {other:?}"),
        }
    }

    #[test]
    fn house_attack_bomb_scenario() {
        let ds = dataset(json!({
            "maps": { "house": { "attack": { "bomb": [
                { "description": "Push A" },
                { "description": "Push B" }
            ]}}}
        }));

        let panel = render_map_panel(&ds, "house", "attack");
        let sections = panel.sections();
        assert_eq!(sections.len(), 1);
        assert_eq!(sections[0].heading, "Bomb");
        assert_eq!(
            step_texts(&sections[0].body),
            ["Step 1: Push A", "Step 2: Push B"]
        );
    }

    #[test]
    fn absent_map_or_side_shows_only_fallback() {
        let ds = dataset(json!({
            "maps": { "house": { "attack": { "bomb": [{ "description": "Push A" }] } } }
        }));

        for (map, side) in [("house", "defense"), ("bank", "attack"), ("", "")] {
            let panel = render_map_panel(&ds, map, side);
            assert_eq!(panel, Panel::Fallback(NO_MAP_TACTICS));
            assert!(panel.sections().is_empty());
        }
    }

    #[test]
    fn switching_to_an_uncovered_side_replaces_content() {
        let ds = dataset(json!({
            "maps": { "house": { "attack": { "bomb": [{ "description": "Push A" }] } } }
        }));

        assert!(!render_map_panel(&ds, "house", "attack").is_fallback());
        assert!(render_map_panel(&ds, "house", "defense").is_fallback());
    }

    #[test]
    fn n_steps_are_numbered_in_input_order() {
        let steps: Vec<_> = (0..7)
            .map(|i| json!({ "description": format!("s{i}") }))
            .collect();
        let ds = dataset(json!({ "maps": { "m": { "s": { "t": steps } } } }));

        let panel = render_map_panel(&ds, "m", "s");
        let SectionBody::Steps(rendered) = &panel.sections()[0].body else {
            panic!("expected steps");
        };
        assert_eq!(rendered.len(), 7);
        for (i, step) in rendered.iter().enumerate() {
            assert_eq!(step.number, i + 1);
            assert_eq!(step.description, format!("s{i}"));
        }
    }

    #[test]
    fn steps_field_renders_like_bare_array() {
        let steps = json!([
            { "description": "Drone", "image": "d.png" },
            { "description": "Plant" }
        ]);
        let ds = dataset(json!({
            "maps": { "m": {
                "bare": { "t": steps.clone() },
                "wrapped": { "t": { "steps": steps } }
            }}
        }));

        assert_eq!(
            render_map_panel(&ds, "m", "bare"),
            render_map_panel(&ds, "m", "wrapped")
        );
    }

    #[test]
    fn inline_description_differs_between_panels() {
        let entry = json!({ "description": "Hold the stairs" });
        let ds = dataset(json!({
            "maps": { "m": { "s": { "anchor": entry.clone() } } },
            "operators": { "ash": { "anchor": entry } }
        }));

        let map_panel = render_map_panel(&ds, "m", "s");
        assert_eq!(
            step_texts(&map_panel.sections()[0].body),
            ["Step 1: Hold the stairs"]
        );

        let op_panel = render_operator_panel(&ds, "ash");
        let section = &op_panel.sections()[0];
        assert_eq!(section.heading, "Anchor");
        assert_eq!(
            section.body,
            SectionBody::Description {
                text: "Hold the stairs".to_string(),
                image: None,
            }
        );
    }

    #[test]
    fn image_width_constraint_is_optional() {
        let free = render_step(
            &Step {
                description: "a".into(),
                image: Some("a.png".into()),
                image_size: None,
            },
            1,
        );
        let image = free.image.unwrap();
        assert_eq!(image.max_width, None);
        assert_eq!(image.style(), "");
        assert_eq!(image.alt, "Step 1 Image");

        let sized = render_step(
            &Step {
                description: "b".into(),
                image: Some("b.png".into()),
                image_size: Some("300px".into()),
            },
            3,
        );
        let image = sized.image.unwrap();
        assert_eq!(image.src, "b.png");
        assert_eq!(image.style(), "max-width: 300px;");
        assert_eq!(image.alt, "Step 3 Image");
    }

    #[test]
    fn step_without_image_has_no_image() {
        let step = render_step(&Step::default(), 1);
        assert!(step.image.is_none());
        assert_eq!(step.label(), "Step 1:");
    }

    #[test]
    fn unrecognized_map_entries_render_heading_only() {
        let ds = dataset(json!({
            "maps": { "m": { "s": {
                "rotate": { "note": "todo" },
                "bomb": [{ "description": "go" }]
            }}}
        }));

        let panel = render_map_panel(&ds, "m", "s");
        let sections = panel.sections();
        assert_eq!(sections[0].heading, "Rotate");
        assert_eq!(sections[0].body, SectionBody::Empty);
        assert_eq!(sections[1].heading, "Bomb");
    }

    #[test]
    fn tactic_types_render_in_authored_order() {
        let ds = dataset(json!({
            "operators": { "thermite": {
                "zeta": { "description": "z" },
                "alpha": { "description": "a" }
            }}
        }));
        let panel = render_operator_panel(&ds, "thermite");
        let headings: Vec<&str> = panel
            .sections()
            .iter()
            .map(|s| s.heading.as_str())
            .collect();
        assert_eq!(headings, ["Zeta", "Alpha"]);
    }

    #[test]
    fn operator_steps_field_is_numbered() {
        let ds = dataset(json!({
            "operators": { "thermite": { "breach": { "steps": [
                { "description": "Place charge", "image": "t.png", "image_size": "200px" },
                { "description": "Detonate" }
            ]}}}
        }));

        let panel = render_operator_panel(&ds, "thermite");
        let SectionBody::Steps(steps) = &panel.sections()[0].body else {
            panic!("expected steps");
        };
        assert_eq!(steps[0].text(), "Step 1: Place charge");
        assert_eq!(
            steps[0].image.as_ref().map(StepImage::style).as_deref(),
            Some("max-width: 200px;")
        );
        assert_eq!(steps[1].text(), "Step 2: Detonate");
    }

    #[test]
    fn operator_inline_image_uses_tactic_type_alt() {
        let ds = dataset(json!({
            "operators": { "ash": { "breach": {
                "description": "Shoot the wall",
                "image": "ash.png",
                "image_size": "50%"
            }}}
        }));

        let panel = render_operator_panel(&ds, "ash");
        let SectionBody::Description { image: Some(image), .. } = &panel.sections()[0].body else {
            panic!("expected description with image");
        };
        assert_eq!(image.alt, "breach Image");
        assert_eq!(image.style(), "max-width: 50%;");
    }

    #[test]
    fn operator_panel_ignores_bare_arrays() {
        let ds = dataset(json!({
            "operators": { "ash": { "entry": [{ "description": "x" }] } }
        }));
        let panel = render_operator_panel(&ds, "ash");
        assert_eq!(panel.sections()[0].heading, "Entry");
        assert_eq!(panel.sections()[0].body, SectionBody::Empty);
    }

    #[test]
    fn absent_operator_shows_fallback() {
        let ds = dataset(json!({ "operators": { "ash": {} } }));
        assert_eq!(
            render_operator_panel(&ds, "ash"),
            Panel::Fallback(NO_OPERATOR_TACTICS)
        );
        assert_eq!(
            render_operator_panel(&ds, "sledge"),
            Panel::Fallback(NO_OPERATOR_TACTICS)
        );
    }

    #[test]
    fn rendering_is_idempotent() {
        let ds = dataset(json!({
            "maps": { "m": { "s": { "t": [{ "description": "x" }] } } }
        }));
        assert_eq!(render_map_panel(&ds, "m", "s"), render_map_panel(&ds, "m", "s"));
    }
}
