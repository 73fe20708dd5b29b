//! UI Components
//!
//! Reusable Leptos components.

mod title_bar;
mod delete_confirm_button;
mod onboarding_view;
mod opportunity_list;
mod application_list;
mod application_detail;
mod stage_timeline;
mod round_tracker;
mod round_card;
mod prep_panel;

pub use title_bar::TitleBar;
pub use delete_confirm_button::DeleteConfirmButton;
pub use onboarding_view::OnboardingView;
pub use opportunity_list::OpportunityList;
pub use application_list::ApplicationList;
pub use application_detail::ApplicationDetail;
pub use stage_timeline::StageTimeline;
pub use round_tracker::StageProgressionTracker;
pub use prep_panel::PrepPanel;
