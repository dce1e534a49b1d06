//! Terminal session: input handling, command dispatch, and the script driver.

use folio_types::config::{PacingConfig, Project, TerminalConfig, ThemeMode};
use folio_types::input::{InputEvent, Key};

use crate::buffer::{Line, LineBuffer, LineKind};
use crate::catalog;
use crate::commands::Command;
use crate::draft::DraftInput;
use crate::history::{HistoryNavigator, Recall};
use crate::script::{OpenHook, Script, ScriptCtx, ScriptState, Step};

/// Label that starts every unknown-command line; views render it in the
/// error color.
pub const UNKNOWN_COMMAND_LABEL: &str = "Unknown command:";

/// Placeholder shown in the input field until the first command is run.
pub const PLACEHOLDER: &str = "Type a command... (/help)";

/// All state of one interactive terminal.
pub struct Session {
    prompt: String,
    pacing: PacingConfig,
    projects: Vec<Project>,
    buffer: LineBuffer,
    draft: DraftInput,
    history: HistoryNavigator,
    theme: ThemeMode,
    scripts: Vec<Script>,
    next_script_id: u64,
    on_open: Option<OpenHook>,
}

impl Session {
    /// Create a session showing the welcome banner.
    pub fn new(config: &TerminalConfig) -> Self {
        let mut buffer = LineBuffer::new();
        buffer.append(LineKind::System, config.welcome.as_str(), false);
        Self {
            prompt: config.prompt.clone(),
            pacing: config.pacing.clone(),
            projects: config.projects.clone(),
            buffer,
            draft: DraftInput::new(),
            history: HistoryNavigator::new(),
            theme: config.theme,
            scripts: Vec::new(),
            next_script_id: 0,
            on_open: None,
        }
    }

    /// Install the host callback fired by a successful `/open <n>`.
    ///
    /// Receives the zero-based index and the resolved project.
    pub fn set_open_hook(&mut self, hook: impl FnMut(usize, &Project) + 'static) {
        self.on_open = Some(Box::new(hook));
    }

    // -- Keyboard --

    /// Apply one input event. Returns `false` when the event is not the
    /// session's to handle (resize, quit, scrolling).
    pub fn handle_input(&mut self, event: &InputEvent) -> bool {
        match event {
            InputEvent::TextInput(ch) => {
                self.type_char(*ch);
                true
            },
            InputEvent::KeyPress(Key::PageUp | Key::PageDown) => false,
            InputEvent::KeyPress(key) => {
                self.press_key(*key);
                true
            },
            InputEvent::Resize { .. } | InputEvent::Quit => false,
        }
    }

    /// Type a character into the draft.
    pub fn type_char(&mut self, ch: char) {
        self.draft.insert(ch);
    }

    /// React to a navigation or editing key.
    pub fn press_key(&mut self, key: Key) {
        match key {
            Key::Enter => self.submit(),
            Key::Up => self.history_up(),
            Key::Down => self.history_down(),
            Key::Backspace => self.draft.backspace(),
            Key::Delete => self.draft.delete(),
            Key::Left => self.draft.move_left(),
            Key::Right => self.draft.move_right(),
            Key::Home => self.draft.move_home(),
            Key::End => self.draft.move_end(),
            // Scrolling belongs to the view.
            Key::PageUp | Key::PageDown => {},
        }
    }

    /// Submit the draft: execute it and record it in history.
    pub fn submit(&mut self) {
        let raw = self.draft.take();
        self.execute(&raw);
        if !raw.trim().is_empty() {
            self.history.record(&raw);
        }
    }

    fn history_up(&mut self) {
        if let Some(entry) = self.history.up() {
            self.draft.set(entry);
        }
    }

    fn history_down(&mut self) {
        match self.history.down() {
            Recall::Unchanged => {},
            Recall::Entry(entry) => self.draft.set(entry),
            Recall::Cleared => self.draft.clear(),
        }
    }

    // -- Interpreter --

    /// Execute a raw input line.
    ///
    /// The echo line and the first line of output (if any) are appended
    /// before this returns; the rest is revealed by `advance`.
    pub fn execute(&mut self, raw: &str) {
        let cmd = raw.trim();
        if cmd.is_empty() {
            return;
        }
        self.buffer
            .append(LineKind::Input, format!("{} {cmd}", self.prompt), false);

        let command = Command::parse(cmd);
        log::debug!("dispatch {command:?}");
        let steps = match command {
            Command::Clear => {
                self.clear();
                return;
            },
            Command::Projects => self
                .project_list_lines()
                .into_iter()
                .map(output)
                .collect(),
            Command::Open(Some(number)) => self.open_steps(number),
            Command::Open(None) => vec![output(
                "Usage: /open <project-number>. List with /projects".to_string(),
            )],
            Command::Skills => catalog::skill_lines().into_iter().map(output).collect(),
            Command::Experience => catalog::experience_lines()
                .into_iter()
                .map(output)
                .collect(),
            Command::Theme(Some(mode)) => vec![
                Step::SetTheme(mode),
                output(format!("Theme set to {}", mode.as_str())),
            ],
            Command::Theme(None) => vec![output("Usage: /theme dark|light".to_string())],
            Command::Canned(text) => vec![output(text.to_string())],
            Command::Unknown(cmd) => vec![Step::Reveal {
                text: format!("{UNKNOWN_COMMAND_LABEL} {cmd}. Type /help"),
                kind: LineKind::Mixed,
            }],
        };
        self.spawn(steps);
    }

    fn project_list_lines(&self) -> Vec<String> {
        let fmt = |i: usize, p: &Project| format!("{}. {} - {}", i + 1, p.title, p.description);
        if self.projects.is_empty() {
            catalog::default_projects()
                .iter()
                .enumerate()
                .map(|(i, p)| fmt(i, p))
                .collect()
        } else {
            self.projects
                .iter()
                .enumerate()
                .map(|(i, p)| fmt(i, p))
                .collect()
        }
    }

    /// Resolve project `number` (1-based): the host list first, then the
    /// built-in list at the same position.
    fn resolve_project(&self, number: u64) -> Option<(usize, Project)> {
        let index = usize::try_from(number - 1).ok()?;
        self.projects
            .get(index)
            .cloned()
            .or_else(|| catalog::default_projects().into_iter().nth(index))
            .map(|p| (index, p))
    }

    fn open_steps(&self, number: u64) -> Vec<Step> {
        match self.resolve_project(number) {
            Some((index, project)) => vec![
                output(format!("Opening project {number}: {}", project.title)),
                Step::OpenProject { index, project },
            ],
            None => vec![output(format!("Project {number} not found."))],
        }
    }

    /// Wipe the scroll log and abandon every running script.
    fn clear(&mut self) {
        if !self.scripts.is_empty() {
            log::debug!("clear cancels {} script(s)", self.scripts.len());
        }
        self.scripts.clear();
        self.buffer.reset();
    }

    /// Start a script: run it up to its first wait, keep it if unfinished.
    fn spawn(&mut self, steps: Vec<Step>) {
        let id = self.next_script_id;
        self.next_script_id += 1;
        let mut script = Script::new(id, steps);
        let mut ctx = ScriptCtx {
            buffer: &mut self.buffer,
            theme: &mut self.theme,
            pacing: &self.pacing,
            on_open: &mut self.on_open,
        };
        if script.drive(&mut ctx, 0) == ScriptState::Pending {
            log::debug!("script {id} pending");
            self.scripts.push(script);
        }
    }

    // -- Driver --

    /// Advance every running script by `dt_ms` of elapsed time.
    pub fn advance(&mut self, dt_ms: u32) {
        if self.scripts.is_empty() {
            return;
        }
        let mut ctx = ScriptCtx {
            buffer: &mut self.buffer,
            theme: &mut self.theme,
            pacing: &self.pacing,
            on_open: &mut self.on_open,
        };
        self.scripts.retain_mut(|script| {
            let state = script.drive(&mut ctx, dt_ms);
            if state == ScriptState::Finished {
                log::debug!("script {} finished", script.id());
            }
            state == ScriptState::Pending
        });
    }

    // -- Accessors --

    pub fn lines(&self) -> &[Line] {
        self.buffer.lines()
    }

    pub fn buffer(&self) -> &LineBuffer {
        &self.buffer
    }

    /// Buffer revision; changes on every line mutation.
    pub fn revision(&self) -> u64 {
        self.buffer.revision()
    }

    pub fn draft(&self) -> &DraftInput {
        &self.draft
    }

    pub fn history(&self) -> &HistoryNavigator {
        &self.history
    }

    pub fn theme(&self) -> ThemeMode {
        self.theme
    }

    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    /// Whether any command output is still being revealed.
    pub fn is_busy(&self) -> bool {
        !self.scripts.is_empty()
    }

    /// Placeholder to show in the empty input field, if any.
    pub fn placeholder(&self) -> Option<&'static str> {
        (self.buffer.len() == 1).then_some(PLACEHOLDER)
    }
}

fn output(text: String) -> Step {
    Step::Reveal {
        text,
        kind: LineKind::Output,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    const PROMPT: &str = "vidant's_portfolio:~$";

    fn session() -> Session {
        Session::new(&TerminalConfig::default())
    }

    /// Run until every script has finished.
    fn settle(s: &mut Session) {
        for _ in 0..100_000 {
            if !s.is_busy() {
                return;
            }
            s.advance(16);
        }
        panic!("session never settled");
    }

    fn texts(s: &Session) -> Vec<String> {
        s.lines().iter().map(|l| l.text.clone()).collect()
    }

    fn submit(s: &mut Session, line: &str) {
        for ch in line.chars() {
            s.type_char(ch);
        }
        s.press_key(Key::Enter);
    }

    fn recorder(s: &mut Session) -> Rc<RefCell<Vec<(usize, String)>>> {
        let opened = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&opened);
        s.set_open_hook(move |i, p| sink.borrow_mut().push((i, p.title.clone())));
        opened
    }

    #[test]
    fn starts_with_welcome_banner() {
        let s = session();
        assert_eq!(s.lines().len(), 1);
        assert_eq!(s.lines()[0].kind, LineKind::System);
        assert!(s.lines()[0].text.starts_with("Welcome"));
        assert_eq!(s.placeholder(), Some(PLACEHOLDER));
    }

    #[test]
    fn echo_is_appended_synchronously() {
        let mut s = session();
        s.execute("  /about  ");
        let echo = &s.lines()[1];
        assert_eq!(echo.kind, LineKind::Input);
        assert_eq!(echo.text, format!("{PROMPT} /about"));
        assert!(!echo.animating);
        // First output line already exists, still empty.
        assert_eq!(s.lines().len(), 3);
        assert_eq!(s.lines()[2].text, "");
        assert!(s.lines()[2].animating);
        assert_eq!(s.placeholder(), None);
    }

    #[test]
    fn whitespace_input_is_ignored() {
        let mut s = session();
        submit(&mut s, "   ");
        assert_eq!(s.lines().len(), 1);
        assert!(s.history().is_empty());
        assert!(s.draft().is_empty());
    }

    #[test]
    fn about_reveals_canned_text() {
        let mut s = session();
        s.execute("/about");
        settle(&mut s);
        let last = s.lines().last().unwrap();
        assert_eq!(last.text, catalog::canned("/about").unwrap());
        assert_eq!(last.kind, LineKind::Output);
        assert!(!last.animating);
    }

    #[test]
    fn help_is_one_multiline_block() {
        let mut s = session();
        s.execute("/help");
        settle(&mut s);
        assert_eq!(s.lines().len(), 3);
        assert!(s.lines()[2].text.contains('\n'));
    }

    #[test]
    fn projects_default_list_in_order() {
        let mut s = session();
        s.execute("/projects");
        settle(&mut s);
        let t = texts(&s);
        assert_eq!(t.len(), 6);
        assert!(t[2].starts_with("1. Netflix Portfolio - "));
        assert!(t[3].starts_with("2. E-Commerce Platform - "));
        assert!(t[4].starts_with("3. Task Management App - "));
        assert_eq!(
            t[5],
            "4. AI Chat Bot - NLP powered assistant (Python, OpenAI API)"
        );
    }

    #[test]
    fn list_lines_animate_sequentially() {
        let mut s = session();
        s.execute("/projects");
        // Only the first item exists until it has fully revealed.
        for _ in 0..50 {
            let shown: Vec<_> = s.lines()[2..].iter().collect();
            let animating = shown.iter().filter(|l| l.animating).count();
            assert!(animating <= 1);
            for done in &shown[..shown.len() - 1] {
                assert!(!done.animating);
            }
            s.advance(40);
        }
    }

    #[test]
    fn projects_prefers_host_list() {
        let config = TerminalConfig {
            projects: vec![Project::new("Compiler", "A toy compiler")],
            ..TerminalConfig::default()
        };
        let mut s = Session::new(&config);
        s.execute("/projects");
        settle(&mut s);
        let t = texts(&s);
        assert_eq!(t.len(), 3);
        assert_eq!(t[2], "1. Compiler - A toy compiler");
    }

    #[test]
    fn open_valid_invokes_hook_after_confirmation() {
        let mut s = session();
        let opened = recorder(&mut s);
        s.execute("/open 2");
        assert!(opened.borrow().is_empty());
        s.advance(100);
        assert!(opened.borrow().is_empty(), "hook fired before line finished");
        settle(&mut s);
        assert_eq!(
            s.lines().last().unwrap().text,
            "Opening project 2: E-Commerce Platform"
        );
        assert_eq!(
            *opened.borrow(),
            vec![(1, "E-Commerce Platform".to_string())]
        );
    }

    #[test]
    fn open_out_of_range_reports_not_found() {
        let mut s = session();
        let opened = recorder(&mut s);
        s.execute("/open 9");
        settle(&mut s);
        assert_eq!(s.lines().last().unwrap().text, "Project 9 not found.");
        assert!(opened.borrow().is_empty());
    }

    #[test]
    fn open_invalid_reports_usage() {
        let mut s = session();
        let opened = recorder(&mut s);
        s.execute("/open abc");
        settle(&mut s);
        assert_eq!(
            s.lines().last().unwrap().text,
            "Usage: /open <project-number>. List with /projects"
        );
        assert!(opened.borrow().is_empty());
    }

    #[test]
    fn open_falls_back_to_default_list_past_host_list() {
        let config = TerminalConfig {
            projects: vec![Project::new("Compiler", "A toy compiler")],
            ..TerminalConfig::default()
        };
        let mut s = Session::new(&config);
        let opened = recorder(&mut s);
        s.execute("/open 1");
        s.execute("/open 3");
        settle(&mut s);
        assert_eq!(
            *opened.borrow(),
            vec![
                (0, "Compiler".to_string()),
                (2, "Task Management App".to_string())
            ]
        );
    }

    #[test]
    fn theme_light_switches_immediately() {
        let mut s = session();
        s.execute("/theme light");
        assert_eq!(s.theme(), ThemeMode::Light);
        settle(&mut s);
        assert_eq!(s.lines().last().unwrap().text, "Theme set to light");
    }

    #[test]
    fn theme_invalid_keeps_theme() {
        let mut s = session();
        s.execute("/theme purple");
        settle(&mut s);
        assert_eq!(s.theme(), ThemeMode::Dark);
        assert_eq!(s.lines().last().unwrap().text, "Usage: /theme dark|light");
    }

    #[test]
    fn bare_open_and_theme_report_usage() {
        let mut s = session();
        let opened = recorder(&mut s);
        s.execute("/open");
        settle(&mut s);
        let last = s.lines().last().unwrap();
        assert_eq!(last.kind, LineKind::Output);
        assert_eq!(
            last.text,
            "Usage: /open <project-number>. List with /projects"
        );
        assert!(opened.borrow().is_empty());

        s.execute("/theme");
        settle(&mut s);
        let last = s.lines().last().unwrap();
        assert_eq!(last.kind, LineKind::Output);
        assert_eq!(last.text, "Usage: /theme dark|light");
        assert_eq!(s.theme(), ThemeMode::Dark);
    }

    #[test]
    fn unknown_command_is_mixed() {
        let mut s = session();
        s.execute("/foo");
        settle(&mut s);
        let last = s.lines().last().unwrap();
        assert_eq!(last.kind, LineKind::Mixed);
        assert_eq!(last.text, "Unknown command: /foo. Type /help");
    }

    #[test]
    fn clear_empties_buffer_and_drops_echo() {
        let mut s = session();
        s.execute("/about");
        settle(&mut s);
        s.execute("/clear");
        assert!(s.lines().is_empty());
        assert!(!s.is_busy());
    }

    #[test]
    fn clear_aborts_in_flight_animation() {
        let mut s = session();
        s.execute("/projects");
        s.advance(100);
        s.execute("/clear");
        let rev = s.revision();
        for _ in 0..200 {
            s.advance(50);
        }
        assert!(s.lines().is_empty());
        assert_eq!(s.revision(), rev);
    }

    #[test]
    fn commands_after_clear_still_work() {
        let mut s = session();
        s.execute("/projects");
        s.advance(100);
        s.execute("/clear");
        s.execute("/theme dark");
        settle(&mut s);
        assert_eq!(
            texts(&s),
            vec![format!("{PROMPT} /theme dark"), "Theme set to dark".to_string()]
        );
    }

    #[test]
    fn separate_commands_interleave() {
        let mut s = session();
        s.execute("/skills");
        s.execute("/about");
        // Both scripts have their first output line in flight.
        let kinds: Vec<_> = s.lines().iter().map(|l| l.kind).collect();
        assert_eq!(
            kinds,
            vec![
                LineKind::System,
                LineKind::Input,
                LineKind::Output,
                LineKind::Input,
                LineKind::Output
            ]
        );
        settle(&mut s);
        assert_eq!(s.lines().len(), 7);
    }

    #[test]
    fn submit_records_raw_history_and_clears_draft() {
        let mut s = session();
        submit(&mut s, " /help ");
        assert!(s.draft().is_empty());
        assert_eq!(s.history().entries().next(), Some(" /help "));
        assert_eq!(s.history().cursor(), None);
    }

    #[test]
    fn history_navigation_updates_draft() {
        let mut s = session();
        submit(&mut s, "/help");
        submit(&mut s, "/about");
        s.press_key(Key::Up);
        assert_eq!(s.draft().text(), "/about");
        s.press_key(Key::Up);
        assert_eq!(s.draft().text(), "/help");
        s.press_key(Key::Down);
        assert_eq!(s.draft().text(), "/about");
        s.press_key(Key::Down);
        assert!(s.draft().is_empty());
        assert_eq!(s.history().cursor(), None);
    }

    #[test]
    fn handle_input_routes_editing_events() {
        let mut s = session();
        for ch in "/hepl".chars() {
            assert!(s.handle_input(&InputEvent::TextInput(ch)));
        }
        s.handle_input(&InputEvent::KeyPress(Key::Backspace));
        s.handle_input(&InputEvent::KeyPress(Key::Backspace));
        s.handle_input(&InputEvent::TextInput('l'));
        s.handle_input(&InputEvent::TextInput('p'));
        assert_eq!(s.draft().text(), "/help");
        assert!(!s.handle_input(&InputEvent::KeyPress(Key::PageUp)));
        assert!(!s.handle_input(&InputEvent::Quit));
        assert!(s.handle_input(&InputEvent::KeyPress(Key::Enter)));
        assert_eq!(s.lines()[1].text, format!("{PROMPT} /help"));
    }

    #[test]
    fn down_without_recall_keeps_draft() {
        let mut s = session();
        submit(&mut s, "/help");
        s.type_char('/');
        s.press_key(Key::Down);
        assert_eq!(s.draft().text(), "/");
    }
}
