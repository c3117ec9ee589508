//! Interactive box-model playground.
//!
//! Seven input fields, one box. Tab moves between fields, typing edits the
//! focused field, and Enter applies it: the buffer is delivered as a change
//! event, exactly like a form control firing `onchange`, and the sketch of
//! the target element redraws. Esc (or Ctrl+C) quits.
//!
//! Each field shows its annotation history: every value it ever applied,
//! oldest first, read back out of the document.

use std::io::{self, Write};

use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEvent, KeyModifiers},
    execute, queue,
    style::Print,
    terminal::{self, Clear, ClearType},
};
use unicode_segmentation::UnicodeSegmentation;

use boxbind::testing::{CONTROL_CLASSES, TARGET_SELECTOR, annotations, demo_binder, demo_page};
use boxbind::{ChangeEvent, Document, EventQueue, ResolvedBox, StyleBinder};

/// One form field: a control selector plus the text being edited.
struct Field {
    label: &'static str,
    selector: String,
    buffer: String,
}

struct Playground {
    doc: Document,
    binder: StyleBinder,
    fields: Vec<Field>,
    focus: usize,
    quit: bool,
}

impl Playground {
    fn new() -> Self {
        let doc = demo_page();
        let binder = demo_binder(&doc);

        let fields = CONTROL_CLASSES
            .iter()
            .map(|&class| Field {
                label: class,
                selector: format!(".{class}"),
                buffer: String::new(),
            })
            .collect();

        Self {
            doc,
            binder,
            fields,
            focus: 0,
            quit: false,
        }
    }

    /// Commit the focused field: deliver its buffer as a change event.
    ///
    /// Validation happens inside the binder; a rejected value just leaves
    /// the box as it was (and shows up in the log file).
    fn commit_focused(&mut self) {
        let field = &self.fields[self.focus];
        let Some(source) = self.doc.query_selector(&field.selector) else {
            return;
        };

        let mut queue = EventQueue::new();
        queue.push(ChangeEvent::new(source, field.buffer.clone()));
        self.binder.pump(&mut self.doc, &mut queue);
    }

    fn on_key(&mut self, key: KeyEvent) {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            self.quit = true;
            return;
        }

        match key.code {
            KeyCode::Esc => self.quit = true,
            KeyCode::Tab | KeyCode::Down => {
                self.focus = (self.focus + 1) % self.fields.len();
            }
            KeyCode::BackTab | KeyCode::Up => {
                self.focus = (self.focus + self.fields.len() - 1) % self.fields.len();
            }
            KeyCode::Enter => self.commit_focused(),
            KeyCode::Backspace => {
                let buffer = &mut self.fields[self.focus].buffer;
                if let Some((idx, _)) = buffer.grapheme_indices(true).last() {
                    buffer.truncate(idx);
                }
            }
            KeyCode::Char(c) => self.fields[self.focus].buffer.push(c),
            _ => {}
        }
    }

    /// Inline hint shown while editing: `?` marks text the field's binding
    /// would reject on Enter.
    fn field_hint(field: &Field) -> &'static str {
        if field.buffer.is_empty() {
            return " ";
        }
        let ok = if field.label == "box-sizing" {
            bmcss::parser::parse_box_sizing(&field.buffer).is_ok()
        } else {
            bmcss::parser::parse_px(&field.buffer).is_ok()
        };
        if ok { " " } else { "?" }
    }

    /// Compose the whole screen as text lines.
    fn compose(&self) -> Vec<String> {
        let mut lines = Vec::new();
        lines.push("box-model playground   Tab: next field, Enter: apply, Esc: quit".to_string());
        lines.push(String::new());

        for (i, field) in self.fields.iter().enumerate() {
            let marker = if i == self.focus { '>' } else { ' ' };
            let hint = Self::field_hint(field);
            let history = annotations(&self.doc, &field.selector).join(" ");
            lines.push(format!(
                "{marker} {:<13} [{:<10}]{hint} {history}",
                field.label, field.buffer
            ));
        }
        lines.push(String::new());

        if let Some(target) = self.doc.query_selector(TARGET_SELECTOR) {
            let resolved = ResolvedBox::from_element(&self.doc, target);
            lines.push(format!(
                "computed: width={} height={} padding={} margin={} border={} radius={} sizing={}",
                resolved.width,
                resolved.height,
                resolved.padding,
                resolved.margin,
                resolved
                    .border
                    .as_ref()
                    .map(|b| b.to_string())
                    .unwrap_or_else(|| "none".to_string()),
                resolved.border_radius,
                resolved.box_sizing,
            ));
            lines.push(String::new());

            let label = self.doc.text_content(target);
            lines.extend(resolved.render(&label));
        }

        lines
    }

    fn render(&self, stdout: &mut impl Write) -> io::Result<()> {
        let (cols, rows) = terminal::size()?;

        queue!(stdout, Clear(ClearType::All))?;
        for (y, line) in self.compose().into_iter().take(rows as usize).enumerate() {
            let clipped: String = line.chars().take(cols as usize).collect();
            queue!(stdout, cursor::MoveTo(0, y as u16), Print(clipped))?;
        }
        stdout.flush()
    }

    fn run(&mut self) -> io::Result<()> {
        let mut stdout = io::stdout();
        terminal::enable_raw_mode()?;
        execute!(stdout, terminal::EnterAlternateScreen, cursor::Hide)?;

        let result = self.event_loop(&mut stdout);

        // Restore terminal state on exit, even after an error.
        execute!(stdout, cursor::Show, terminal::LeaveAlternateScreen)?;
        terminal::disable_raw_mode()?;

        result
    }

    fn event_loop(&mut self, stdout: &mut impl Write) -> io::Result<()> {
        while !self.quit {
            self.render(stdout)?;

            if event::poll(std::time::Duration::from_millis(100))? {
                if let Event::Key(key) = event::read()? {
                    self.on_key(key);
                }
            }
        }
        Ok(())
    }
}

fn main() -> io::Result<()> {
    boxbind::init_logger("boxmodel.log", log::Level::Debug);
    log::info!("playground starting");

    Playground::new().run()
}
