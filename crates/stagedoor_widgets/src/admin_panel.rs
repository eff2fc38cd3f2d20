//! Admin panel flow
//!
//! The operator-facing corner widget: a low-profile gear affordance, a
//! password prompt, and the panel proper with the edit-mode toggle, the
//! theme selection, and logout. Authentication failure keeps the prompt open
//! with an inline rejection notice; there is no lockout.

use std::sync::Arc;

use stagedoor_content::AdminSession;
use stagedoor_theme::{ThemeStore, ThemeVariant};

/// Notice shown inline after a rejected password
pub const REJECTION_NOTICE: &str = "Invalid password";

/// What the panel is currently showing
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PanelView {
    /// Collapsed gear affordance
    Gear,
    /// Password prompt
    Login,
    /// The open admin panel
    Panel,
}

pub struct AdminPanel {
    session: Arc<AdminSession>,
    theme: Arc<ThemeStore>,
    view: PanelView,
    password_buffer: String,
    rejected: bool,
}

impl AdminPanel {
    pub fn new(session: Arc<AdminSession>, theme: Arc<ThemeStore>) -> Self {
        // An already-authenticated session (persisted from a prior visit)
        // skips the login prompt
        let view = if session.is_admin() {
            PanelView::Panel
        } else {
            PanelView::Gear
        };
        Self {
            session,
            theme,
            view,
            password_buffer: String::new(),
            rejected: false,
        }
    }

    pub fn view(&self) -> PanelView {
        self.view
    }

    /// The inline notice to render, if the last attempt was rejected
    pub fn notice(&self) -> Option<&'static str> {
        self.rejected.then_some(REJECTION_NOTICE)
    }

    /// Open the password prompt from the gear affordance
    pub fn open_login(&mut self) {
        if self.view == PanelView::Gear {
            self.view = PanelView::Login;
            self.rejected = false;
        }
    }

    /// Close the prompt without authenticating
    pub fn dismiss_login(&mut self) {
        if self.view == PanelView::Login {
            self.view = PanelView::Gear;
            self.password_buffer.clear();
            self.rejected = false;
        }
    }

    /// Append typed characters to the password buffer
    pub fn type_password(&mut self, text: &str) {
        if self.view == PanelView::Login {
            self.password_buffer.push_str(text);
        }
    }

    /// Submit the buffered password.
    ///
    /// The buffer is cleared either way; failure shows the inline notice and
    /// keeps the prompt open.
    pub fn submit_login(&mut self) -> bool {
        let candidate = std::mem::take(&mut self.password_buffer);
        if self.session.authenticate(&candidate) {
            self.view = PanelView::Panel;
            self.rejected = false;
            true
        } else {
            self.rejected = true;
            false
        }
    }

    /// Flip edit mode (delegates to the session, which requires admin)
    pub fn toggle_edit_mode(&self) {
        self.session.toggle_edit_mode();
    }

    /// Label for the edit-mode toggle button
    pub fn edit_mode_label(&self) -> &'static str {
        if self.session.is_edit_mode() {
            "Exit Edit Mode"
        } else {
            "Edit Content"
        }
    }

    /// Theme options shown inside the panel
    pub fn theme_options(&self) -> Vec<ThemeVariant> {
        ThemeVariant::all().to_vec()
    }

    /// Switch the theme from inside the panel
    pub fn select_theme(&self, variant: ThemeVariant) {
        self.theme.set_variant(variant);
    }

    /// Log out and collapse back to the gear affordance
    pub fn logout(&mut self) {
        self.session.deauthenticate();
        self.view = PanelView::Gear;
    }
}
