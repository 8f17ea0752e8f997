//! Configuration for the Chosen list box.
//!
//! [`ChosenOptions`] is constructed by the caller and handed to the widget at
//! creation time. The value list adapter treats it as opaque and passes it
//! through unmodified to the widget constructor; only the concrete widget
//! interprets individual fields.

/// Configuration passed to a Chosen list box at construction.
///
/// All options have sensible defaults; use the `with_*` builder methods to
/// override individual fields.
///
/// # Example
///
/// ```
/// use chosen_widget::ChosenOptions;
///
/// let options = ChosenOptions::new()
///     .with_placeholder_text("Pick a fruit")
///     .with_allow_single_deselect(true)
///     .with_max_selected_options(3);
/// ```
#[derive(Debug, Clone)]
pub struct ChosenOptions {
    allow_single_deselect: bool,
    disable_search_threshold: usize,
    max_selected_options: Option<usize>,
    placeholder_text: Option<String>,
    placeholder_text_single: Option<String>,
    placeholder_text_multiple: Option<String>,
    no_results_text: Option<String>,
    search_contains: bool,
    single_backstroke_delete: bool,
    highlight_searched_term: bool,
}

impl Default for ChosenOptions {
    fn default() -> Self {
        Self {
            allow_single_deselect: false,
            disable_search_threshold: 0,
            max_selected_options: None,
            placeholder_text: None,
            placeholder_text_single: None,
            placeholder_text_multiple: None,
            no_results_text: None,
            search_contains: false,
            single_backstroke_delete: true,
            highlight_searched_term: true,
        }
    }
}

impl ChosenOptions {
    /// Create options with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Allow the user to deselect the current value in single-select mode.
    pub fn with_allow_single_deselect(mut self, allow: bool) -> Self {
        self.allow_single_deselect = allow;
        self
    }

    /// Hide the search field when the list box holds fewer items than this.
    pub fn with_disable_search_threshold(mut self, threshold: usize) -> Self {
        self.disable_search_threshold = threshold;
        self
    }

    /// Limit how many options may be selected in multiple-select mode.
    pub fn with_max_selected_options(mut self, max: usize) -> Self {
        self.max_selected_options = Some(max);
        self
    }

    /// Placeholder text shown when nothing is selected.
    pub fn with_placeholder_text(mut self, text: impl Into<String>) -> Self {
        self.placeholder_text = Some(text.into());
        self
    }

    /// Placeholder text specific to single-select mode.
    pub fn with_placeholder_text_single(mut self, text: impl Into<String>) -> Self {
        self.placeholder_text_single = Some(text.into());
        self
    }

    /// Placeholder text specific to multiple-select mode.
    pub fn with_placeholder_text_multiple(mut self, text: impl Into<String>) -> Self {
        self.placeholder_text_multiple = Some(text.into());
        self
    }

    /// Text shown when a search matches no option.
    pub fn with_no_results_text(mut self, text: impl Into<String>) -> Self {
        self.no_results_text = Some(text.into());
        self
    }

    /// Match search terms anywhere in the option text, not just at the start.
    pub fn with_search_contains(mut self, contains: bool) -> Self {
        self.search_contains = contains;
        self
    }

    /// Delete the last selected option with backspace in multiple-select mode.
    pub fn with_single_backstroke_delete(mut self, enabled: bool) -> Self {
        self.single_backstroke_delete = enabled;
        self
    }

    /// Highlight the matched portion of option text in search results.
    pub fn with_highlight_searched_term(mut self, highlight: bool) -> Self {
        self.highlight_searched_term = highlight;
        self
    }

    /// Whether single-select deselection is allowed.
    pub fn allow_single_deselect(&self) -> bool {
        self.allow_single_deselect
    }

    /// Item count below which the search field is hidden.
    pub fn disable_search_threshold(&self) -> usize {
        self.disable_search_threshold
    }

    /// Maximum number of selected options, if limited.
    pub fn max_selected_options(&self) -> Option<usize> {
        self.max_selected_options
    }

    /// Generic placeholder text.
    pub fn placeholder_text(&self) -> Option<&str> {
        self.placeholder_text.as_deref()
    }

    /// Single-select placeholder text, falling back to the generic one.
    pub fn placeholder_text_single(&self) -> Option<&str> {
        self.placeholder_text_single
            .as_deref()
            .or(self.placeholder_text.as_deref())
    }

    /// Multiple-select placeholder text, falling back to the generic one.
    pub fn placeholder_text_multiple(&self) -> Option<&str> {
        self.placeholder_text_multiple
            .as_deref()
            .or(self.placeholder_text.as_deref())
    }

    /// Text shown when a search matches no option.
    pub fn no_results_text(&self) -> Option<&str> {
        self.no_results_text.as_deref()
    }

    /// Whether search matches anywhere in the option text.
    pub fn search_contains(&self) -> bool {
        self.search_contains
    }

    /// Whether backspace removes the last selection in multiple-select mode.
    pub fn single_backstroke_delete(&self) -> bool {
        self.single_backstroke_delete
    }

    /// Whether matched search terms are highlighted.
    pub fn highlight_searched_term(&self) -> bool {
        self.highlight_searched_term
    }
}
