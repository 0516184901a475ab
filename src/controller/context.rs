//! Per-page context shared by the event handlers

use crate::config::SiteConfig;
use crate::state::{
    ContactForm, FocusTarget, NavState, PresentMode, Presenter, SkillBarAnimation,
    ThemePreference, Validator,
};
use crate::storage::PreferenceStore;

/// Everything a page view owns, built once when the controller starts
pub struct PageContext {
    pub theme: ThemePreference,
    pub store: Box<dyn PreferenceStore>,
    pub nav: NavState,
    pub page_path: String,
    /// Footer year, set on load
    pub year: Option<i32>,
    pub form: ContactForm,
    pub validator: Validator,
    pub mode: PresentMode,
    pub presenter: Presenter,
    pub skills: SkillBarAnimation,
    pub focus: FocusTarget,
}

impl PageContext {
    pub fn new(config: &SiteConfig, store: Box<dyn PreferenceStore>) -> Self {
        Self {
            theme: ThemePreference::default(),
            store,
            nav: NavState::default(),
            page_path: config.page_path().to_string(),
            year: None,
            form: ContactForm::new(config.form_variant()),
            validator: Validator::new(config.phone_policy()),
            mode: config.presenter_mode(),
            presenter: Presenter::default(),
            skills: SkillBarAnimation::default(),
            focus: FocusTarget::Nothing,
        }
    }

    /// Whether the modal dialog is blocking the page
    pub fn is_dialog_open(&self) -> bool {
        self.presenter.dialog.is_open()
    }

    /// Move focus, keeping the form's active row in step
    pub fn set_focus(&mut self, target: FocusTarget) {
        match &target {
            FocusTarget::Field(name) => {
                if let Some(index) = self.form.index_of(name) {
                    self.form.active_field_index = index;
                }
            }
            FocusTarget::SubmitButton => {
                self.form.active_field_index = self.form.fields().len();
            }
            _ => {}
        }
        self.focus = target;
    }
}

impl std::fmt::Debug for PageContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PageContext")
            .field("theme", &self.theme)
            .field("nav", &self.nav)
            .field("page_path", &self.page_path)
            .field("form", &self.form)
            .field("mode", &self.mode)
            .field("focus", &self.focus)
            .finish_non_exhaustive()
    }
}
