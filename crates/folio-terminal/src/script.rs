//! Scripts: the ordered output of one executed command.
//!
//! A script is a queue of steps drained strictly in order. A `Reveal` step
//! blocks the script until its line is fully shown; other steps run
//! instantly. Independent scripts advance side by side.

use std::collections::VecDeque;

use folio_types::config::{PacingConfig, Project, ThemeMode};

use crate::animator::{Progress, Reveal};
use crate::buffer::{LineBuffer, LineKind};

/// One scripted action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Step {
    /// Append a line and animate `text` into it.
    Reveal { text: String, kind: LineKind },
    /// Switch the visual theme.
    SetTheme(ThemeMode),
    /// Hand the project at `index` to the host.
    OpenProject { index: usize, project: Project },
}

/// Hook invoked when a project is opened.
pub(crate) type OpenHook = Box<dyn FnMut(usize, &Project)>;

/// Mutable session state a script may touch.
pub(crate) struct ScriptCtx<'a> {
    pub buffer: &'a mut LineBuffer,
    pub theme: &'a mut ThemeMode,
    pub pacing: &'a PacingConfig,
    pub on_open: &'a mut Option<OpenHook>,
}

/// Whether a script has more work.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ScriptState {
    Pending,
    Finished,
}

#[derive(Debug)]
pub(crate) struct Script {
    id: u64,
    steps: VecDeque<Step>,
    active: Option<Reveal>,
}

impl Script {
    pub fn new(id: u64, steps: Vec<Step>) -> Self {
        Self {
            id,
            steps: steps.into(),
            active: None,
        }
    }

    pub fn id(&self) -> u64 {
        self.id
    }

    /// Run steps until a reveal is waiting for time or the queue is empty,
    /// spending at most `dt_ms` of animation time.
    pub fn drive(&mut self, ctx: &mut ScriptCtx<'_>, dt_ms: u32) -> ScriptState {
        let mut budget = dt_ms;
        loop {
            if let Some(reveal) = self.active.as_mut() {
                match reveal.advance(ctx.buffer, budget, ctx.pacing) {
                    Progress::Running => return ScriptState::Pending,
                    Progress::Done { leftover_ms } => {
                        budget = leftover_ms;
                        self.active = None;
                    },
                    Progress::Orphaned => {
                        log::debug!("script {} orphaned by clear", self.id);
                        self.steps.clear();
                        self.active = None;
                        return ScriptState::Finished;
                    },
                }
            }

            let Some(step) = self.steps.pop_front() else {
                return ScriptState::Finished;
            };
            match step {
                Step::Reveal { text, kind } => {
                    self.active = Reveal::start(ctx.buffer, &text, kind, ctx.pacing);
                },
                Step::SetTheme(mode) => {
                    log::info!("theme set to {}", mode.as_str());
                    *ctx.theme = mode;
                },
                Step::OpenProject { index, project } => {
                    log::info!("opening project {index}: {}", project.title);
                    if let Some(hook) = ctx.on_open.as_mut() {
                        hook(index, &project);
                    }
                },
            }
        }
    }
}
