//! Keyboard handling.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::models::{EditableFields, IssueDraft, IssueField};

use super::{App, Focus, FormTarget};

impl App {
    /// Route a key press to whatever has focus.
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }
        self.mark_dirty();

        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            self.quit();
            return;
        }

        if self.splash_visible {
            self.dismiss_splash();
            return;
        }

        match self.focus {
            Focus::Table => self.handle_table_key(key),
            Focus::Search => self.handle_search_key(key),
            Focus::AddForm => self.handle_form_key(FormTarget::Draft, key),
            Focus::EditForm => self.handle_form_key(FormTarget::Selection, key),
        }
    }

    /// Insert pasted text into the focused text input. Line breaks become
    /// spaces since every field is a single line.
    pub fn handle_paste(&mut self, text: &str) {
        self.mark_dirty();
        let text: String = text
            .chars()
            .map(|c| if c == '\n' || c == '\r' { ' ' } else { c })
            .collect();

        match self.focus {
            Focus::Table => {}
            Focus::Search => {
                let term = format!("{}{}", self.store.search(), text);
                self.set_search(term);
            }
            Focus::AddForm | Focus::EditForm => {
                let target = if self.focus == Focus::AddForm {
                    FormTarget::Draft
                } else {
                    FormTarget::Selection
                };
                let field = self.form_field(target);
                if field.is_choice() {
                    return;
                }
                let value = format!("{}{}", self.form_value(target, field), text);
                self.write_form_value(target, field, &value);
            }
        }
    }

    fn handle_table_key(&mut self, key: KeyEvent) {
        // Any key but a second `d` disarms a pending delete
        let armed = self.delete_armed.take();

        match key.code {
            KeyCode::Char('q') => self.quit(),
            KeyCode::Up | KeyCode::Char('k') => self.move_selection_up(),
            KeyCode::Down | KeyCode::Char('j') => self.move_selection_down(),
            KeyCode::Home => self.selected_row = 0,
            KeyCode::End => {
                self.selected_row = self.store.filtered().len().saturating_sub(1);
            }
            KeyCode::Char('/') => self.focus = Focus::Search,
            KeyCode::Char('a') => {
                self.focus = Focus::AddForm;
                self.add_field = IssueField::Title;
            }
            KeyCode::Char('n') => {
                self.store.set_draft(IssueDraft::quick());
                self.focus = Focus::AddForm;
                self.add_field = IssueField::Title;
            }
            KeyCode::Char('e') | KeyCode::Enter => self.open_edit(),
            KeyCode::Char('d') | KeyCode::Delete => {
                let Some(id) = self.selected_issue_id() else {
                    return;
                };
                if armed.as_ref() == Some(&id) {
                    self.request_remove(&id);
                } else {
                    self.delete_armed = Some(id);
                }
            }
            KeyCode::Char('r') => self.request_load(),
            KeyCode::Char('t') => self.toggle_theme(),
            KeyCode::Esc => self.store.dismiss_notification(),
            _ => {}
        }
    }

    fn handle_search_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char(c) => {
                let mut term = self.store.search().to_string();
                term.push(c);
                self.set_search(term);
            }
            KeyCode::Backspace => {
                let mut term = self.store.search().to_string();
                term.pop();
                self.set_search(term);
            }
            KeyCode::Esc => {
                self.set_search(String::new());
                self.focus = Focus::Table;
            }
            KeyCode::Enter | KeyCode::Tab | KeyCode::Down => self.focus = Focus::Table,
            _ => {}
        }
    }

    fn handle_form_key(&mut self, target: FormTarget, key: KeyEvent) {
        if target == FormTarget::Selection && self.store.selection().is_none() {
            self.focus = Focus::Table;
            return;
        }

        let field = self.form_field(target);
        match key.code {
            KeyCode::Esc => self.close_form(target),
            KeyCode::Enter => match target {
                FormTarget::Draft => self.request_add(),
                FormTarget::Selection => self.request_commit(),
            },
            KeyCode::Tab | KeyCode::Down => self.set_form_field(target, field.next()),
            KeyCode::BackTab | KeyCode::Up => self.set_form_field(target, field.prev()),
            KeyCode::Left if field.is_choice() => self.cycle_form_value(target, false),
            KeyCode::Right if field.is_choice() => self.cycle_form_value(target, true),
            KeyCode::Char(' ') if field.is_choice() => self.cycle_form_value(target, true),
            KeyCode::Char(c) if !field.is_choice() => {
                let mut value = self.form_value(target, field);
                value.push(c);
                self.write_form_value(target, field, &value);
            }
            KeyCode::Backspace if !field.is_choice() => {
                let mut value = self.form_value(target, field);
                value.pop();
                self.write_form_value(target, field, &value);
            }
            _ => {}
        }
    }

    // ------------------------------------------------------------------
    // Helpers
    // ------------------------------------------------------------------

    fn open_edit(&mut self) {
        let Some(id) = self.selected_issue_id() else {
            return;
        };
        match self.store.begin_edit(&id) {
            Ok(_) => {
                self.focus = Focus::EditForm;
                self.edit_field = IssueField::Title;
            }
            Err(err) => self.report_rejection(err),
        }
    }

    fn close_form(&mut self, target: FormTarget) {
        if target == FormTarget::Selection {
            self.store.discard_edit();
        }
        self.focus = Focus::Table;
    }

    fn set_search(&mut self, term: String) {
        self.store.set_search(term);
        self.selected_row = 0;
    }

    fn form_field(&self, target: FormTarget) -> IssueField {
        match target {
            FormTarget::Draft => self.add_field,
            FormTarget::Selection => self.edit_field,
        }
    }

    fn set_form_field(&mut self, target: FormTarget, field: IssueField) {
        match target {
            FormTarget::Draft => self.add_field = field,
            FormTarget::Selection => self.edit_field = field,
        }
    }

    fn form_value(&self, target: FormTarget, field: IssueField) -> String {
        match target {
            FormTarget::Draft => self.store.draft().field_value(field),
            FormTarget::Selection => self
                .store
                .selection()
                .map(|issue| issue.field_value(field))
                .unwrap_or_default(),
        }
    }

    fn write_form_value(&mut self, target: FormTarget, field: IssueField, value: &str) {
        let result = match target {
            FormTarget::Draft => self.store.update_draft_field(field, value),
            FormTarget::Selection => self.store.update_selection_field(field, value),
        };
        if let Err(err) = result {
            self.report_rejection(err);
        }
    }

    fn cycle_form_value(&mut self, target: FormTarget, forward: bool) {
        let field = self.form_field(target);
        let current = self.form_value(target, field);
        if let Some(value) = field.cycle(&current, forward) {
            self.write_form_value(target, field, &value);
        }
    }
}
