//! Settings overlay for the CMS client configuration.
//!
//! Each configuration domain declares its defaults and how override
//! documents are applied; [`ConfigOverlay`] owns the resolved result.
pub mod notifications;
pub mod overlay;
pub mod report;

pub use notifications::{
    notifications, MessageKey, MessagesOverride, NotificationMessages, Notifications,
    NotificationsConfig, NotificationsOverride, UnknownMessageKey,
};
pub use overlay::{ConfigDomain, ConfigOverlay};
pub use report::{OverlayReport, Rejection, RejectionReason, ValueKind};
