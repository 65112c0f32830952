//! UI Components
//!
//! Reusable Leptos components shared by the console pages.

mod contact_form;
mod dashboard_widgets;
mod delete_confirm_button;
mod header_bar;
mod history_list;
mod log_panel;
mod login_form;
mod modify_form;
mod pagination_bar;
mod progress_panel;
mod review_list;
mod review_panel;
mod stat_cards;
mod tab_bar;
mod toast_host;
mod upload_panel;
mod user_admin;

pub use contact_form::ContactForm;
pub use dashboard_widgets::{DailyStatsWidget, OverallStatsWidget, ReviewerStatsWidget, UploadSessionsWidget};
pub use delete_confirm_button::DeleteConfirmButton;
pub use header_bar::HeaderBar;
pub use history_list::HistoryList;
pub use log_panel::LogPanel;
pub use login_form::LoginForm;
pub use modify_form::ModifyFormEditor;
pub use pagination_bar::PaginationBar;
pub use progress_panel::ProgressPanel;
pub use review_list::ReviewList;
pub use review_panel::ReviewPanel;
pub use stat_cards::StatCards;
pub use tab_bar::TabBar;
pub use toast_host::ToastHost;
pub use upload_panel::UploadPanel;
pub use user_admin::UserAdmin;
