use crossterm::event::KeyCode;
use crossterm::event::KeyEvent;
use crossterm::event::KeyModifiers;
use tui_textarea::Input;

use super::LoginField;
use super::LoginForm;
use crate::domain::models::LoginError;

fn type_text(form: &mut LoginForm, text: &str) {
    for char in text.chars() {
        form.input(Input::from(KeyEvent::new(
            KeyCode::Char(char),
            KeyModifiers::NONE,
        )));
    }
}

#[test]
fn it_starts_on_the_user_id_field() {
    let form = LoginForm::new("", "");
    assert_eq!(form.focus, LoginField::UserID);
    assert_eq!(form.error, None);
}

#[test]
fn it_types_into_the_focused_field() {
    let mut form = LoginForm::new("", "");
    type_text(&mut form, "u-17");
    form.toggle_focus();
    type_text(&mut form, "Ada");

    assert_eq!(form.user_id_value(), "u-17");
    assert_eq!(form.user_name_value(), "Ada");
}

#[test]
fn it_flattens_pasted_text() {
    let mut form = LoginForm::new("", "");
    form.paste("u-\n17\r\n");
    assert_eq!(form.user_id_value(), "u-17");
}

#[test]
fn it_prefills_fields() {
    let form = LoginForm::new("u-17", "Ada");
    assert_eq!(form.user_id_value(), "u-17");
    assert_eq!(form.user_name_value(), "Ada");
}

#[test]
fn it_rejects_blank_fields() {
    let mut form = LoginForm::new("u-17", "  ");
    let res = form.submit("en");

    assert_eq!(res, Err(LoginError::MissingFields));
    assert_eq!(form.error, Some("⚠️ Please enter both fields".to_string()));
}

#[test]
fn it_creates_a_session_and_clears_the_error() {
    let mut form = LoginForm::new("", "Ada");
    assert!(form.submit("en").is_err());

    type_text(&mut form, "u-17");
    let session = form.submit("fr").unwrap();

    assert_eq!(session.user_id(), "u-17");
    assert_eq!(session.user_name(), "Ada");
    assert_eq!(session.language(), "fr");
    assert_eq!(form.error, None);
}
