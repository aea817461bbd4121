use tracing::debug;

use super::Alert;

#[derive(Clone, PartialEq, Eq)]
pub enum LoginAction {
    Username(String),
    Password(String),
    Submit,
    Clear,
}

impl std::fmt::Debug for LoginAction {
    fn fmt(
        &self,
        f: &mut std::fmt::Formatter<'_>,
    ) -> std::fmt::Result {
        match self {
            Self::Username(name) => f.debug_tuple("Username").field(name).finish(),
            Self::Password(_) => f.debug_tuple("Password").field(&"***").finish(),
            Self::Submit => f.write_str("Submit"),
            Self::Clear => f.write_str("Clear"),
        }
    }
}

/// State of the login form. Nothing is authenticated; the form only checks
/// that both fields are filled in.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct LoginScreen {
    pub username: String,
    pub password: String,
    pub alert: Option<Alert>,
}

impl std::fmt::Debug for LoginScreen {
    fn fmt(
        &self,
        f: &mut std::fmt::Formatter<'_>,
    ) -> std::fmt::Result {
        f.debug_struct("LoginScreen")
            .field("username", &self.username)
            .field("password", &"***")
            .field("alert", &self.alert)
            .finish()
    }
}

impl LoginScreen {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn update(
        &self,
        action: LoginAction,
    ) -> Self {
        match action {
            LoginAction::Username(username) => Self {
                username,
                alert: None,
                ..self.clone()
            },
            LoginAction::Password(password) => Self {
                password,
                alert: None,
                ..self.clone()
            },
            LoginAction::Submit => self.submit(),
            LoginAction::Clear => Self::default(),
        }
    }

    fn submit(&self) -> Self {
        let alert = if self.username.trim().is_empty() || self.password.trim().is_empty() {
            Alert::error("Fill in all fields!")
        } else {
            debug!(username = %self.username, "login form submitted");
            Alert::success(format!("Welcome, {}!", self.username))
        };
        Self {
            alert: Some(alert),
            ..self.clone()
        }
    }
}
