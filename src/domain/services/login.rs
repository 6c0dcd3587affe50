#[cfg(test)]
#[path = "login_test.rs"]
mod tests;

use tui_textarea::Input;

use crate::domain::models::LoginError;
use crate::domain::models::Session;
use crate::domain::models::TextArea;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum LoginField {
    UserID,
    UserName,
}

pub struct LoginForm<'a> {
    pub user_id: tui_textarea::TextArea<'a>,
    pub user_name: tui_textarea::TextArea<'a>,
    pub focus: LoginField,
    pub error: Option<String>,
}

impl<'a> LoginForm<'a> {
    pub fn new(user_id: &str, user_name: &str) -> LoginForm<'a> {
        let mut form = LoginForm {
            user_id: TextArea::field("User ID", user_id),
            user_name: TextArea::field("User Name", user_name),
            focus: LoginField::UserID,
            error: None,
        };
        form.sync_focus();

        return form;
    }

    fn focused(&mut self) -> &mut tui_textarea::TextArea<'a> {
        match self.focus {
            LoginField::UserID => return &mut self.user_id,
            LoginField::UserName => return &mut self.user_name,
        }
    }

    fn sync_focus(&mut self) {
        TextArea::set_focus(&mut self.user_id, self.focus == LoginField::UserID);
        TextArea::set_focus(&mut self.user_name, self.focus == LoginField::UserName);
    }

    pub fn toggle_focus(&mut self) {
        self.focus = match self.focus {
            LoginField::UserID => LoginField::UserName,
            LoginField::UserName => LoginField::UserID,
        };
        self.sync_focus();
    }

    pub fn input(&mut self, input: Input) {
        self.focused().input(input);
    }

    /// Fields are single line, so pasted line breaks are dropped.
    pub fn paste(&mut self, text: &str) {
        let flattened = text.replace(['\r', '\n'], "");
        self.focused().insert_str(flattened);
    }

    pub fn user_id_value(&self) -> String {
        return self.user_id.lines().join("");
    }

    pub fn user_name_value(&self) -> String {
        return self.user_name.lines().join("");
    }

    /// Creates the session when both fields are filled in, otherwise keeps the
    /// validation message for display.
    pub fn submit(&mut self, language: &str) -> Result<Session, LoginError> {
        let res = Session::new(&self.user_id_value(), &self.user_name_value(), language);
        match &res {
            Ok(_) => {
                self.error = None;
            }
            Err(err) => {
                tracing::debug!(error = %err, "Login rejected");
                self.error = Some(err.to_string());
            }
        }

        return res;
    }
}
