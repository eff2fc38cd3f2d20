//! Scenario runner
//!
//! Executes scenario steps against a live [`SiteContext`]. Drive steps act
//! on the stores and on the field opened by `begin_edit`; assert steps end
//! the run early with a failed report. Authoring mistakes (typing with no
//! open field, unknown key names) are hard errors, not failed assertions.

use stagedoor_core::events::{Event, KeyCode};
use stagedoor_core::storage::SharedStorage;
use stagedoor_widgets::EditableText;

use crate::config::RecordKeys;
use crate::context::SiteContext;
use crate::report::ScenarioReport;
use crate::scenario::{Scenario, ScenarioError, ScenarioStep};

/// Final outcome of a scenario run
#[derive(Debug)]
pub enum RunOutcome {
    Passed { report: ScenarioReport },
    Failed { report: ScenarioReport },
}

impl RunOutcome {
    pub fn report(&self) -> &ScenarioReport {
        match self {
            RunOutcome::Passed { report } => report,
            RunOutcome::Failed { report } => report,
        }
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, RunOutcome::Failed { .. })
    }
}

pub struct ScenarioRunner {
    storage: SharedStorage,
    keys: RecordKeys,
    ctx: SiteContext,
    field: Option<EditableText>,
}

impl ScenarioRunner {
    pub fn new(storage: SharedStorage, keys: RecordKeys) -> Self {
        let ctx = SiteContext::new(storage.clone(), &keys);
        Self {
            storage,
            keys,
            ctx,
            field: None,
        }
    }

    /// The live context (for inspection after a run)
    pub fn context(&self) -> &SiteContext {
        &self.ctx
    }

    pub fn run(&mut self, scenario: &Scenario) -> Result<RunOutcome, ScenarioError> {
        for (index, step) in scenario.steps.iter().enumerate() {
            let executed = index + 1;
            match step {
                ScenarioStep::Authenticate { secret } => {
                    self.ctx.session.authenticate(secret);
                }
                ScenarioStep::Deauthenticate => self.ctx.session.deauthenticate(),
                ScenarioStep::ToggleEditMode => self.ctx.session.toggle_edit_mode(),
                ScenarioStep::BeginEdit { slot } => {
                    let mut field = self.ctx.field(slot);
                    field.handle_event(&Event::pointer_down(0));
                    self.field = Some(field);
                }
                ScenarioStep::TypeText { text } => {
                    self.active_field(index, "type_text")?
                        .handle_event(&Event::text_input(0, text.clone()));
                }
                ScenarioStep::PressKey { key } => {
                    let code = parse_key(key).ok_or_else(|| ScenarioError::UnknownKey {
                        index,
                        key: key.clone(),
                    })?;
                    self.active_field(index, "press_key")?
                        .handle_event(&Event::key_down(0, code));
                }
                ScenarioStep::SetBuffer { text } => {
                    self.active_field(index, "set_buffer")?.set_buffer(text.clone());
                }
                ScenarioStep::Commit => {
                    // Blur is the universal commit gesture
                    self.active_field(index, "commit")?.handle_event(&Event::blur(0));
                }
                ScenarioStep::Cancel => {
                    self.active_field(index, "cancel")?.cancel();
                }
                ScenarioStep::SetTheme { variant } => {
                    self.ctx.theme.set_variant_id(variant);
                }
                ScenarioStep::Reload => {
                    self.field = None;
                    self.ctx = SiteContext::new(self.storage.clone(), &self.keys);
                }
                ScenarioStep::AssertResolved { slot, value } => {
                    let actual = self.ctx.content.resolve(slot);
                    if &actual != value {
                        return Ok(RunOutcome::Failed {
                            report: ScenarioReport::failed(
                                "assert_resolved",
                                index,
                                format!("slot `{slot}` resolved to `{actual}`, expected `{value}`"),
                                executed,
                            ),
                        });
                    }
                }
                ScenarioStep::AssertVariant { value } => {
                    let actual = self.ctx.theme.variant().id();
                    if actual != value {
                        return Ok(RunOutcome::Failed {
                            report: ScenarioReport::failed(
                                "assert_variant",
                                index,
                                format!("active variant is `{actual}`, expected `{value}`"),
                                executed,
                            ),
                        });
                    }
                }
                ScenarioStep::AssertStyle { name, value } => {
                    let actual = self.ctx.theme.style_value(name);
                    if actual.as_deref() != Some(value.as_str()) {
                        return Ok(RunOutcome::Failed {
                            report: ScenarioReport::failed(
                                "assert_style",
                                index,
                                format!(
                                    "style `{name}` is `{}`, expected `{value}`",
                                    actual.as_deref().unwrap_or("<unset>")
                                ),
                                executed,
                            ),
                        });
                    }
                }
                ScenarioStep::AssertAdmin {
                    is_admin,
                    is_edit_mode,
                } => {
                    let actual = (self.ctx.session.is_admin(), self.ctx.session.is_edit_mode());
                    if actual != (*is_admin, *is_edit_mode) {
                        return Ok(RunOutcome::Failed {
                            report: ScenarioReport::failed(
                                "assert_admin",
                                index,
                                format!(
                                    "session is admin={} edit_mode={}, expected admin={} edit_mode={}",
                                    actual.0, actual.1, is_admin, is_edit_mode
                                ),
                                executed,
                            ),
                        });
                    }
                }
                ScenarioStep::AssertEditing { value } => {
                    let actual = self
                        .field
                        .as_ref()
                        .map(EditableText::is_editing)
                        .unwrap_or(false);
                    if actual != *value {
                        return Ok(RunOutcome::Failed {
                            report: ScenarioReport::failed(
                                "assert_editing",
                                index,
                                format!("field editing={actual}, expected {value}"),
                                executed,
                            ),
                        });
                    }
                }
            }
        }

        Ok(RunOutcome::Passed {
            report: ScenarioReport::passed(scenario.steps.len()),
        })
    }

    fn active_field(
        &mut self,
        index: usize,
        step: &'static str,
    ) -> Result<&mut EditableText, ScenarioError> {
        self.field
            .as_mut()
            .ok_or(ScenarioError::NoActiveField { index, step })
    }
}

fn parse_key(name: &str) -> Option<KeyCode> {
    match name {
        "enter" => Some(KeyCode::ENTER),
        "escape" | "esc" => Some(KeyCode::ESCAPE),
        "backspace" => Some(KeyCode::BACKSPACE),
        "tab" => Some(KeyCode::TAB),
        "space" => Some(KeyCode::SPACE),
        "delete" => Some(KeyCode::DELETE),
        _ => None,
    }
}
