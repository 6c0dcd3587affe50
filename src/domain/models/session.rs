#[cfg(test)]
#[path = "session_test.rs"]
mod tests;

use thiserror::Error;

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum LoginError {
    #[error("⚠️ Please enter both fields")]
    MissingFields,
}

/// Identity of the logged in user. Only exists once the login form has been
/// submitted with both fields filled in, and is never changed afterwards.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Session {
    user_id: String,
    user_name: String,
    language: String,
}

impl Session {
    /// Values are kept exactly as entered. Blank means empty or whitespace
    /// only.
    pub fn new(user_id: &str, user_name: &str, language: &str) -> Result<Session, LoginError> {
        if user_id.trim().is_empty() || user_name.trim().is_empty() {
            return Err(LoginError::MissingFields);
        }

        return Ok(Session {
            user_id: user_id.to_string(),
            user_name: user_name.to_string(),
            language: language.to_string(),
        });
    }

    pub fn user_id(&self) -> &str {
        return &self.user_id;
    }

    pub fn user_name(&self) -> &str {
        return &self.user_name;
    }

    pub fn language(&self) -> &str {
        return &self.language;
    }
}
