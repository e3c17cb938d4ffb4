// src/config/state.rs
use super::options::AppOptions;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ReportMode {
    /// Type a date and start an empty list.
    #[default]
    CreateNew,
    /// Pick a saved date and edit its list.
    ModifyExisting,
}

impl ReportMode {
    pub fn label(self) -> &'static str {
        match self {
            ReportMode::CreateNew => "Create New Report",
            ReportMode::ModifyExisting => "Modify Existing Report",
        }
    }
}

#[derive(Clone, Debug)]
pub struct GuiState {
    /// Section chosen in the dropdown
    pub selected_section: Option<String>,
    pub mode: ReportMode,

    /// Date text box (also filled when an existing report is picked)
    pub date_text: String,
    /// Existing report picked in ModifyExisting mode
    pub selected_report: Option<String>,

    pub name_query: String,
    pub selected_suggestion: Option<usize>,
    pub selected_attendee: Option<usize>,

    // "Add New Section's Roster" inputs
    pub new_roster_path: String,
    pub new_section_name: String,
}

impl Default for GuiState {
    fn default() -> Self {
        Self {
            selected_section: None,
            mode: ReportMode::CreateNew,
            date_text: s!(),
            selected_report: None,
            name_query: s!(),
            selected_suggestion: None,
            selected_attendee: None,
            new_roster_path: s!(),
            new_section_name: s!(),
        }
    }
}

impl GuiState {
    /// Forget per-section picks when the section changes.
    pub fn reset_for_section(&mut self, section: Option<String>) {
        self.selected_section = section;
        self.selected_report = None;
        self.selected_suggestion = None;
        self.selected_attendee = None;
    }
}

#[derive(Clone, Debug, Default)]
pub struct AppState {
    pub options: AppOptions,
    pub gui: GuiState,
}

impl AppState {
    pub fn new(options: AppOptions) -> Self {
        Self { options, gui: GuiState::default() }
    }
}
