//! View-state machine for the upload → analyzing → results flow
//!
//! The page owns a single `Flow`. Components read it and feed two events back:
//! an accepted image and a reset. The analysis delay lives outside this module;
//! the timer callback hands its `AnalysisTicket` back in and the machine decides
//! whether the transition still applies.

/// Which section set is the primary content.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ViewState {
    #[default]
    Idle,
    Analyzing,
    ShowingResults,
}

impl ViewState {
    pub fn as_str(&self) -> &'static str {
        match self {
            ViewState::Idle => "idle",
            ViewState::Analyzing => "analyzing",
            ViewState::ShowingResults => "results",
        }
    }
}

/// Displayable form of the user-selected file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadedImage {
    pub file_name: String,
    pub data_url: String,
}

/// Handle tying a pending analysis to the upload that started it.
///
/// A ticket issued before a later `begin_analysis` or `reset` is stale and
/// `finish_analysis` ignores it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnalysisTicket(u64);

/// Single owner of the page view state.
#[derive(Debug, Clone, Default)]
pub struct Flow {
    view: ViewState,
    image: Option<UploadedImage>,
    generation: u64,
}

impl Flow {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn view(&self) -> ViewState {
        self.view
    }

    pub fn image(&self) -> Option<&UploadedImage> {
        self.image.as_ref()
    }

    /// Store the encoded image and enter `Analyzing`. A drop while a previous
    /// analysis is still pending supersedes it.
    pub fn begin_analysis(&mut self, image: UploadedImage) -> AnalysisTicket {
        self.image = Some(image);
        self.view = ViewState::Analyzing;
        self.generation += 1;
        AnalysisTicket(self.generation)
    }

    /// Reveal the results if `ticket` still refers to the pending analysis.
    /// Returns whether the transition applied.
    pub fn finish_analysis(&mut self, ticket: AnalysisTicket) -> bool {
        if self.view != ViewState::Analyzing || ticket.0 != self.generation {
            return false;
        }
        self.view = ViewState::ShowingResults;
        true
    }

    /// Back to the upload screen, from any state. Pending tickets go stale.
    pub fn reset(&mut self) {
        self.view = ViewState::Idle;
        self.image = None;
        self.generation += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn leaf_image() -> UploadedImage {
        UploadedImage {
            file_name: "leaf.jpg".to_string(),
            data_url: "data:image/jpeg;base64,AAAA".to_string(),
        }
    }

    #[test]
    fn test_flow_starts_idle() {
        let flow = Flow::new();
        assert_eq!(flow.view(), ViewState::Idle);
        assert!(flow.image().is_none());
    }

    #[test]
    fn test_accepted_image_enters_analyzing() {
        let mut flow = Flow::new();
        flow.begin_analysis(leaf_image());

        assert_eq!(flow.view(), ViewState::Analyzing);
        assert_eq!(flow.image().unwrap().file_name, "leaf.jpg");
    }

    #[test]
    fn test_finish_reveals_results() {
        let mut flow = Flow::new();
        let ticket = flow.begin_analysis(leaf_image());

        assert!(flow.finish_analysis(ticket));
        assert_eq!(flow.view(), ViewState::ShowingResults);
        assert!(flow.image().is_some());
    }

    #[test]
    fn test_reset_clears_image_and_returns_to_idle() {
        let mut flow = Flow::new();
        let ticket = flow.begin_analysis(leaf_image());
        flow.finish_analysis(ticket);

        flow.reset();
        assert_eq!(flow.view(), ViewState::Idle);
        assert!(flow.image().is_none());
    }

    #[test]
    fn test_stale_ticket_after_reset_is_ignored() {
        let mut flow = Flow::new();
        let ticket = flow.begin_analysis(leaf_image());

        // User resets while the timer is still pending.
        flow.reset();

        assert!(!flow.finish_analysis(ticket));
        assert_eq!(flow.view(), ViewState::Idle);
        assert!(flow.image().is_none());
    }

    #[test]
    fn test_stale_ticket_does_not_hijack_new_upload() {
        let mut flow = Flow::new();
        let first = flow.begin_analysis(leaf_image());
        flow.reset();

        // New upload within the old delay window.
        let second = flow.begin_analysis(UploadedImage {
            file_name: "stem.png".to_string(),
            data_url: "data:image/png;base64,BBBB".to_string(),
        });

        assert!(!flow.finish_analysis(first));
        assert_eq!(flow.view(), ViewState::Analyzing);

        assert!(flow.finish_analysis(second));
        assert_eq!(flow.view(), ViewState::ShowingResults);
        assert_eq!(flow.image().unwrap().file_name, "stem.png");
    }

    #[test]
    fn test_second_drop_supersedes_pending_analysis() {
        let mut flow = Flow::new();
        let first = flow.begin_analysis(leaf_image());
        let second = flow.begin_analysis(UploadedImage {
            file_name: "stem.png".to_string(),
            data_url: "data:image/png;base64,BBBB".to_string(),
        });

        assert!(!flow.finish_analysis(first));
        assert_eq!(flow.view(), ViewState::Analyzing);
        assert_eq!(flow.image().unwrap().file_name, "stem.png");

        assert!(flow.finish_analysis(second));
        assert_eq!(flow.view(), ViewState::ShowingResults);
    }

    #[test]
    fn test_finish_twice_is_a_no_op() {
        let mut flow = Flow::new();
        let ticket = flow.begin_analysis(leaf_image());

        assert!(flow.finish_analysis(ticket));
        assert!(!flow.finish_analysis(ticket));
        assert_eq!(flow.view(), ViewState::ShowingResults);
    }

    #[test]
    fn test_view_state_css_tokens() {
        assert_eq!(ViewState::Idle.as_str(), "idle");
        assert_eq!(ViewState::Analyzing.as_str(), "analyzing");
        assert_eq!(ViewState::ShowingResults.as_str(), "results");
    }
}
