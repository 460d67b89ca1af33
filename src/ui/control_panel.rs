//! Side panel: a reset button plus one stepper per threshold.
//!
//! Geometry is derived from the config on every call to [`ControlPanel::layout`];
//! the stepper records only carry their values.

use macroquad::prelude::*;

use super::{Button, PanelStyle, draw_centered_text, draw_text_from};
use crate::config::PanelConfig;
use crate::domain::{Stepper, Threshold, Thresholds};

/// What a pointer press on the panel asks the outer loop to do
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PanelAction {
    /// Nothing was hit
    None,
    /// The grid should be re-randomized
    ResetRequested,
    /// A stepper moved (or tried to move past its bound)
    ThresholdChanged { kind: Threshold, value: u8 },
}

/// Hit regions and text anchors for one stepper
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StepperRegions {
    pub kind: Threshold,
    pub decrement: Rect,
    pub increment: Rect,
    pub label_at: Vec2,
    pub value_center: Vec2,
}

#[derive(Clone, Debug, PartialEq)]
pub struct PanelLayout {
    pub panel: Rect,
    pub reset: Rect,
    pub steppers: Vec<StepperRegions>,
    /// Top-left of the generation/population readout
    pub status_at: Vec2,
}

/// Readout shown under the steppers
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PanelStatus {
    pub generation: u64,
    pub population: usize,
}

pub struct ControlPanel {
    /// Left edge of the panel in window coordinates
    origin_x: f32,
    height: f32,
    geometry: PanelConfig,
    style: PanelStyle,
    steppers: Vec<Stepper>,
    /// Thresholds used for any rule without a stepper
    fixed: Thresholds,
}

impl ControlPanel {
    pub fn new(
        origin_x: f32,
        height: f32,
        geometry: PanelConfig,
        style: PanelStyle,
        initial: Thresholds,
    ) -> Self {
        let steppers = if geometry.adjustable_rules {
            Threshold::ALL
                .iter()
                .map(|&kind| Stepper::new(kind, initial.get(kind)))
                .collect()
        } else {
            Vec::new()
        };

        Self {
            origin_x,
            height,
            geometry,
            style,
            steppers,
            fixed: initial,
        }
    }

    pub fn steppers(&self) -> &[Stepper] {
        &self.steppers
    }

    /// Current thresholds: stepper values layered over the fixed defaults
    pub fn thresholds(&self) -> Thresholds {
        self.steppers.iter().fold(self.fixed, |mut acc, stepper| {
            acc.set(stepper.kind, stepper.value);
            acc
        })
    }

    /// Widget regions for the current stepper list
    pub fn layout(&self) -> PanelLayout {
        let g = &self.geometry;
        let left_x = self.origin_x + g.stepper_x;
        let right_x = left_x + g.stepper_gap;

        let steppers: Vec<_> = self
            .steppers
            .iter()
            .enumerate()
            .map(|(slot, stepper)| {
                let y = g.first_rule_y + slot as f32 * g.rule_spacing;
                StepperRegions {
                    kind: stepper.kind,
                    decrement: Rect::new(left_x, y, g.stepper_size, g.stepper_size),
                    increment: Rect::new(right_x, y, g.stepper_size, g.stepper_size),
                    label_at: vec2(left_x, y - g.label_rise),
                    value_center: vec2((left_x + right_x) / 2.0, y + g.stepper_size / 2.0),
                }
            })
            .collect();

        let status_y = g.first_rule_y + steppers.len() as f32 * g.rule_spacing - g.label_rise;

        PanelLayout {
            panel: Rect::new(self.origin_x, 0.0, g.width, self.height),
            reset: Rect::new(
                self.origin_x + g.reset_x,
                g.reset_y,
                g.reset_width,
                g.reset_height,
            ),
            steppers,
            status_at: vec2(left_x, status_y),
        }
    }

    /// Hit-test a primary press. Reset wins over steppers; within the
    /// stepper list the first region containing the point wins.
    pub fn handle_pointer_down(&mut self, position: Vec2) -> PanelAction {
        let layout = self.layout();

        if layout.reset.contains(position) {
            return PanelAction::ResetRequested;
        }

        for (stepper, regions) in self.steppers.iter_mut().zip(&layout.steppers) {
            let value = if regions.decrement.contains(position) {
                stepper.decrement()
            } else if regions.increment.contains(position) {
                stepper.increment()
            } else {
                continue;
            };

            log::debug!("{} -> {}", stepper.label, value);
            return PanelAction::ThresholdChanged {
                kind: stepper.kind,
                value,
            };
        }

        PanelAction::None
    }

    /// Draw the panel widgets. Does not touch panel state.
    pub fn render(&self, pointer: Vec2, font: Option<&Font>, status: PanelStatus) {
        let layout = self.layout();
        let style = &self.style;

        draw_rectangle(
            layout.panel.x,
            layout.panel.y,
            layout.panel.w,
            layout.panel.h,
            style.background,
        );

        Button::new(layout.reset, "Reset").draw(pointer, style, font);

        for (stepper, regions) in self.steppers.iter().zip(&layout.steppers) {
            draw_text_from(&stepper.label, regions.label_at, style, font);
            Button::new(regions.decrement, "<").draw(pointer, style, font);
            Button::new(regions.increment, ">").draw(pointer, style, font);
            draw_centered_text(&stepper.value.to_string(), regions.value_center, style, font);
        }

        draw_text_from(
            &format!("Generation: {}", status.generation),
            layout.status_at,
            style,
            font,
        );
        draw_text_from(
            &format!("Population: {}", status.population),
            layout.status_at + vec2(0.0, style.font_size as f32 + 6.0),
            style,
            font,
        );
    }
}
