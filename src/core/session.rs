//! Interactive derivation session
//!
//! A session holds the measured extents of one part plus the live choices
//! (preset, axis, offset, step, thickness). Every mutation re-runs all
//! stages from axis resolution to validation, so the result always reflects
//! the current choices.

use thiserror::Error;
use tracing::{debug, info};

use crate::core::axis::Axis;
use crate::core::config::{PropertyNames, ScaleRange, Settings};
use crate::core::document::{read_property, write_property, Document, DocumentError};
use crate::core::format::format_result;
use crate::core::measure::{parse_triple, MeasurementError, ToMeasurement};
use crate::core::offset::calculate_offsets;
use crate::core::resolver::resolve_preferred_axis;
use crate::core::users::UserTable;
use crate::core::validate::{is_valid_result, rejection_hint};
use crate::entities::preset::{CoordinateMode, Preset};

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("No preset selected")]
    NoPreset,

    #[error("Preset '{0}' has no offset; offset and step cannot be changed")]
    OffsetDisabled(String),

    #[error("Thickness is not available for preset '{0}'")]
    ThicknessUnavailable(String),

    #[error("Base size '{result}' is not valid.\n\n{hint}")]
    NotValid { result: String, hint: String },

    #[error("User '{logon}' is not allowed to save base sizes (read-only mode)")]
    ReadOnly { logon: String },

    #[error(transparent)]
    Measurement(#[from] MeasurementError),

    #[error(transparent)]
    Document(#[from] DocumentError),
}

/// Outcome of the validation stage
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Validity {
    Valid,
    Invalid,
}

/// Stage the session has reached
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Idle,
    PresetChosen,
    AxisResolved,
    OffsetComputed,
    Formatted,
    Validated(Validity),
}

/// Who saves the result and under which rules
#[derive(Debug, Clone, Copy)]
pub struct CommitContext<'r> {
    pub logon: &'r str,
    pub users: &'r UserTable,
    pub props: &'r PropertyNames,
    pub modifier_template: &'r str,
    pub allow_all_users: bool,
    pub allow_property_creation: bool,
}

/// Properties written by a commit
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitReport {
    pub base_size: String,
    pub preset: String,
    pub modifier: String,
    /// Set when the document had no creator yet
    pub creator: Option<String>,
}

#[derive(Debug, Clone)]
pub struct Session<'a> {
    measurements: [f64; 3],
    offset_range: ScaleRange,
    step_range: ScaleRange,
    thickness_value: Option<String>,

    preset: Option<&'a Preset>,
    axis: Axis,
    offset: i32,
    step: u32,
    thickness_enabled: bool,

    calculated: Option<[f64; 3]>,
    result: String,
    state: SessionState,
}

impl<'a> Session<'a> {
    /// Start a session for one set of extents
    pub fn new(
        x: impl ToMeasurement,
        y: impl ToMeasurement,
        z: impl ToMeasurement,
        settings: &Settings,
    ) -> Result<Self, MeasurementError> {
        let measurements = parse_triple(x, y, z)?;
        debug!(?measurements, "Session started");
        Ok(Self {
            measurements,
            offset_range: settings.offset,
            step_range: settings.step,
            thickness_value: None,
            preset: None,
            axis: Axis::X,
            offset: 0,
            step: 0,
            thickness_enabled: false,
            calculated: None,
            result: String::new(),
            state: SessionState::Idle,
        })
    }

    /// Make a thickness value available to presets with a thickness slot
    pub fn with_thickness(mut self, value: Option<String>) -> Self {
        self.thickness_value = value.filter(|v| !v.trim().is_empty());
        self
    }

    /// Pick a preset; axis, offset, step and thickness reset to its defaults
    pub fn select_preset(&mut self, preset: &'a Preset) -> Result<(), SessionError> {
        info!(preset = preset.name.as_str(), "Preset selected");
        self.preset = Some(preset);
        self.state = SessionState::PresetChosen;
        self.axis = resolve_preferred_axis(
            self.measurements[0],
            self.measurements[1],
            self.measurements[2],
            preset,
        )?;
        self.offset = self.offset_range.clamp(preset.initial_offset());
        self.step = self.clamp_step(i64::from(preset.initial_step()));
        self.thickness_enabled = self.thickness_available();
        self.recompute()
    }

    /// Override the preferred axis
    ///
    /// Ignored for presets without a preference: those always work on X.
    pub fn select_axis(&mut self, axis: Axis) -> Result<(), SessionError> {
        let preset = self.preset.ok_or(SessionError::NoPreset)?;
        if preset.preference.is_none() {
            debug!(%axis, "Preset has no preference, axis selection ignored");
            return Ok(());
        }
        debug!(%axis, "Axis selected");
        self.axis = axis;
        self.recompute()
    }

    /// Set the offset, clamped to the allowed range
    pub fn set_offset(&mut self, offset: i32) -> Result<(), SessionError> {
        let preset = self.offset_preset()?;
        self.offset = self.offset_range.clamp(offset);
        if self.offset != offset {
            debug!(requested = offset, used = self.offset, "Offset clamped");
        }
        debug!(preset = preset.name.as_str(), offset = self.offset, "Offset set");
        self.recompute()
    }

    /// Set the step, clamped to the allowed range
    pub fn set_step(&mut self, step: u32) -> Result<(), SessionError> {
        let preset = self.offset_preset()?;
        self.step = self.clamp_step(i64::from(step));
        if self.step != step {
            debug!(requested = step, used = self.step, "Step clamped");
        }
        debug!(preset = preset.name.as_str(), step = self.step, "Step set");
        self.recompute()
    }

    /// Switch the thickness slot on or off
    pub fn set_thickness(&mut self, enabled: bool) -> Result<(), SessionError> {
        let preset = self.preset.ok_or(SessionError::NoPreset)?;
        if enabled && !self.thickness_available() {
            return Err(SessionError::ThicknessUnavailable(preset.name.clone()));
        }
        self.thickness_enabled = enabled;
        self.recompute()
    }

    fn offset_preset(&self) -> Result<&'a Preset, SessionError> {
        let preset = self.preset.ok_or(SessionError::NoPreset)?;
        if !preset.offset_enabled() {
            return Err(SessionError::OffsetDisabled(preset.name.clone()));
        }
        Ok(preset)
    }

    fn clamp_step(&self, step: i64) -> u32 {
        let min = i64::from(self.step_range.min.max(0));
        let max = i64::from(self.step_range.max.max(0));
        // both bounds are non-negative i32 values
        u32::try_from(step.clamp(min, max.max(min))).unwrap_or(0)
    }

    fn thickness_available(&self) -> bool {
        self.preset
            .is_some_and(|p| p.mode() == CoordinateMode::BoxWithThickness)
            && self.thickness_value.is_some()
    }

    /// Re-run offset, formatting and validation for the current choices
    fn recompute(&mut self) -> Result<(), SessionError> {
        let preset = self.preset.ok_or(SessionError::NoPreset)?;
        let [x, y, z] = self.measurements;
        self.state = SessionState::AxisResolved;

        let (cx, cy, cz) = calculate_offsets(x, y, z, preset, self.axis, self.offset, self.step)?;
        self.calculated = Some([cx, cy, cz]);
        self.state = SessionState::OffsetComputed;

        self.result = format_result(
            cx,
            cy,
            cz,
            preset,
            self.axis,
            self.thickness_enabled,
            self.thickness_value.as_deref(),
        );
        self.state = SessionState::Formatted;

        let validity = if is_valid_result(&self.result, preset) {
            Validity::Valid
        } else {
            Validity::Invalid
        };
        self.state = SessionState::Validated(validity);
        debug!(result = self.result.as_str(), ?validity, "Recomputed base size");
        Ok(())
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn is_valid(&self) -> bool {
        self.state == SessionState::Validated(Validity::Valid)
    }

    pub fn preset(&self) -> Option<&'a Preset> {
        self.preset
    }

    pub fn measurements(&self) -> [f64; 3] {
        self.measurements
    }

    pub fn calculated(&self) -> Option<[f64; 3]> {
        self.calculated
    }

    pub fn result(&self) -> &str {
        &self.result
    }

    pub fn axis(&self) -> Axis {
        self.axis
    }

    pub fn offset(&self) -> i32 {
        self.offset
    }

    pub fn step(&self) -> u32 {
        self.step
    }

    pub fn thickness_enabled(&self) -> bool {
        self.thickness_enabled
    }

    pub fn thickness_value(&self) -> Option<&str> {
        self.thickness_value.as_deref()
    }

    /// Explanation for an invalid result, if the session holds one
    pub fn rejection(&self) -> Option<String> {
        match (self.state, self.preset) {
            (SessionState::Validated(Validity::Invalid), Some(preset)) => Some(rejection_hint(preset)),
            _ => None,
        }
    }

    /// Write the validated result to a document
    ///
    /// Writes the base size, the preset name and the modifier; the creator is
    /// written only if the document has none yet.
    pub fn commit(
        &self,
        doc: &mut dyn Document,
        ctx: &CommitContext<'_>,
    ) -> Result<CommitReport, SessionError> {
        let preset = self.preset.ok_or(SessionError::NoPreset)?;
        if !self.is_valid() {
            return Err(SessionError::NotValid {
                result: self.result.clone(),
                hint: rejection_hint(preset),
            });
        }
        if ctx.users.is_read_only(ctx.logon, ctx.allow_all_users) {
            return Err(SessionError::ReadOnly {
                logon: ctx.logon.to_string(),
            });
        }

        let modifier = ctx.users.modifier_for(ctx.logon, ctx.modifier_template);
        let creator = match read_property(doc, &ctx.props.creator) {
            Some(_) => None,
            None => Some(modifier.clone()),
        };

        let create = ctx.allow_property_creation;
        write_property(doc, &ctx.props.base_size, &self.result, create)?;
        write_property(doc, &ctx.props.base_size_preset, &preset.name, create)?;
        write_property(doc, &ctx.props.modifier, &modifier, create)?;
        if let Some(creator) = &creator {
            write_property(doc, &ctx.props.creator, creator, create)?;
        }

        info!(
            document = doc.name(),
            base_size = self.result.as_str(),
            preset = preset.name.as_str(),
            "Base size committed"
        );
        Ok(CommitReport {
            base_size: self.result.clone(),
            preset: preset.name.clone(),
            modifier,
            creator,
        })
    }
}
