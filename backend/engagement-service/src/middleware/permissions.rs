/// Ownership predicates for destructive operations
///
/// Evaluated after the resource is loaded and before anything is mutated:
/// only the author of a post or comment may delete it.
use uuid::Uuid;

use crate::domain::{Comment, Post};
use crate::error::AppError;

/// Result type for permission checks
pub type PermissionResult = Result<(), AppError>;

/// Check that the actor owns a post
pub fn check_post_ownership(actor: Uuid, post: &Post) -> PermissionResult {
    if post.author_id == actor {
        Ok(())
    } else {
        Err(AppError::Forbidden(
            "You don't have permission to modify this post".to_string(),
        ))
    }
}

/// Check that the actor owns a comment
pub fn check_comment_ownership(actor: Uuid, comment: &Comment) -> PermissionResult {
    if comment.author_id == actor {
        Ok(())
    } else {
        Err(AppError::Forbidden(
            "You don't have permission to modify this comment".to_string(),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn post(author_id: Uuid) -> Post {
        Post {
            id: Uuid::new_v4(),
            author_id,
            title: "title".to_string(),
            content: "content".to_string(),
            created_at: Utc::now(),
        }
    }

    #[test]
    fn owner_may_modify_post() {
        let owner = Uuid::new_v4();
        assert!(check_post_ownership(owner, &post(owner)).is_ok());
    }

    #[test]
    fn stranger_may_not_modify_post() {
        let result = check_post_ownership(Uuid::new_v4(), &post(Uuid::new_v4()));
        assert!(matches!(result, Err(AppError::Forbidden(_))));
    }

    #[test]
    fn stranger_may_not_modify_comment() {
        let comment = Comment {
            id: Uuid::new_v4(),
            post_id: Uuid::new_v4(),
            author_id: Uuid::new_v4(),
            content: "nice".to_string(),
            created_at: Utc::now(),
        };
        let result = check_comment_ownership(Uuid::new_v4(), &comment);
        assert!(matches!(result, Err(AppError::Forbidden(_))));
    }
}
