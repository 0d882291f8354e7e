pub mod comments;
pub mod engagement;
pub mod feed;
pub mod follow;
pub mod notifications;
pub mod posts;
pub mod sink;

pub use comments::CommentService;
pub use engagement::EngagementService;
pub use feed::FeedService;
pub use follow::FollowService;
pub use notifications::NotificationService;
pub use posts::PostService;
pub use sink::{NewNotification, NotificationSink, PgNotificationSink};
