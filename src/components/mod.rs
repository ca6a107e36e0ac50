//! UI components for Hostboard.

mod activity_feed;
mod button;
pub mod card_chrome;
mod host_summary;
mod info_card;

pub use activity_feed::{ActivityEntry, ActivityFeed};
pub use button::{Button, ButtonVariant};
pub use card_chrome::{use_card_chrome, CardChrome};
pub use host_summary::{HostSummary, PlatformCount};
pub use info_card::{CardAction, HostCount, InfoCard};
