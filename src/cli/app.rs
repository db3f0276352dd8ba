use super::ui;
use crate::api::PersonApi;
use crate::core::PersonField;
use crate::session::{Session, SubmitOutcome};
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Terminal,
    backend::{Backend, CrosstermBackend},
    style::{Color, Style},
    text::Line,
    widgets::{Block, Borders},
};
use std::io;
use tui_textarea::TextArea;

pub struct App<A: PersonApi> {
    pub session: Session<A>,
    pub inputs: Vec<TextArea<'static>>,
    pub focus: usize,
    /// Row index within the current page.
    pub selected: usize,
    pub exit: bool,
}

impl<A: PersonApi> App<A> {
    pub fn new(session: Session<A>) -> Self {
        let mut app = Self {
            session,
            inputs: Vec::new(),
            focus: 0,
            selected: 0,
            exit: false,
        };
        app.reset_inputs();
        app
    }

    fn new_input(field: PersonField, value: &str) -> TextArea<'static> {
        let mut textarea = TextArea::new(vec![value.to_string()]);
        textarea.set_cursor_line_style(Style::default());
        textarea.set_placeholder_text(field.label());
        textarea.move_cursor(tui_textarea::CursorMove::End);
        textarea
    }

    /// Rebuilds the dialog inputs from the session's form values.
    fn reset_inputs(&mut self) {
        let form = self.session.form();
        self.inputs = PersonField::ALL
            .iter()
            .map(|field| Self::new_input(*field, form.value(*field)))
            .collect();
        self.focus = 0;
        self.style_inputs();
    }

    /// Borders follow focus; a failed field shows its message under the box.
    pub fn style_inputs(&mut self) {
        let errors = self.session.form().errors().clone();
        for (index, field) in PersonField::ALL.iter().enumerate() {
            let border = if errors.for_field(*field).is_some() {
                Color::Red
            } else if index == self.focus {
                Color::Yellow
            } else {
                Color::DarkGray
            };
            let mut block = Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(border))
                .title(format!(" {} ", field.label()));
            if let Some(error) = errors.for_field(*field) {
                block = block.title_bottom(
                    Line::from(format!(" {} ", error.message())).style(Style::default().fg(Color::Red)),
                );
            }
            self.inputs[index].set_block(block);
        }
    }

    pub fn focused_field(&self) -> PersonField {
        PersonField::ALL[self.focus]
    }

    pub fn input_value(&self, field: PersonField) -> String {
        self.inputs[field.index()].lines().join(" ")
    }

    pub async fn run(&mut self) -> io::Result<()> {
        // Setup terminal
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;

        self.session.refresh().await;
        let res = self.run_loop(&mut terminal).await;

        // Restore terminal
        disable_raw_mode()?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
        terminal.show_cursor()?;

        res
    }

    async fn run_loop<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            terminal.draw(|f| ui::draw(f, self))?;

            if let Event::Key(key) = event::read()?
                && key.kind == KeyEventKind::Press
            {
                self.handle_key(key).await;
            }
            if self.exit {
                return Ok(());
            }
        }
    }

    pub async fn handle_key(&mut self, key: KeyEvent) {
        if self.session.is_dialog_open() {
            self.handle_dialog_key(key).await;
        } else {
            self.handle_table_key(key).await;
        }
    }

    async fn handle_table_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc | KeyCode::Char('q') => self.exit = true,
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.exit = true
            }
            KeyCode::Char('a') => {
                self.session.open_dialog();
                self.focus = 0;
                self.style_inputs();
            }
            KeyCode::Char('r') => {
                self.session.refresh().await;
                self.clamp_selection();
            }
            KeyCode::Down | KeyCode::Char('j') => {
                let rows = self.session.visible().len();
                if self.selected + 1 < rows {
                    self.selected += 1;
                }
            }
            KeyCode::Up | KeyCode::Char('k') => {
                self.selected = self.selected.saturating_sub(1);
            }
            KeyCode::Right | KeyCode::Char('n') => {
                if self.session.next_page() {
                    self.selected = 0;
                }
            }
            KeyCode::Left | KeyCode::Char('p') => {
                if self.session.prev_page() {
                    self.selected = 0;
                }
            }
            KeyCode::Char('d') | KeyCode::Delete => {
                if let Some(id) = self.selected_id() {
                    self.session.delete(id).await;
                    self.clamp_selection();
                }
            }
            _ => {}
        }
    }

    async fn handle_dialog_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.exit = true
            }
            KeyCode::Esc => {
                self.sync_form();
                self.session.close_dialog();
                self.style_inputs();
            }
            KeyCode::Tab | KeyCode::Down => {
                self.focus = (self.focus + 1) % self.inputs.len();
                self.style_inputs();
            }
            KeyCode::BackTab | KeyCode::Up => {
                self.focus = (self.focus + self.inputs.len() - 1) % self.inputs.len();
                self.style_inputs();
            }
            KeyCode::Enter => {
                self.sync_form();
                match self.session.submit_form().await {
                    SubmitOutcome::Created(_) => {
                        self.reset_inputs();
                        self.clamp_selection();
                    }
                    SubmitOutcome::Invalid(errors) => {
                        if let Some(first) = errors.iter().next() {
                            self.focus = first.field.index();
                        }
                        self.style_inputs();
                    }
                    SubmitOutcome::Failed => self.style_inputs(),
                }
            }
            _ => {
                self.inputs[self.focus].input(key);
            }
        }
    }

    fn sync_form(&mut self) {
        for field in PersonField::ALL {
            let value = self.input_value(field);
            self.session.form_mut().set(field, value);
        }
    }

    pub fn selected_id(&self) -> Option<u32> {
        self.session.visible().get(self.selected).map(|p| p.id)
    }

    fn clamp_selection(&mut self) {
        let rows = self.session.visible().len();
        self.selected = self.selected.min(rows.saturating_sub(1));
    }
}
