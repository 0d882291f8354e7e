//! Integration tests: follow graph policy, feed ordering, cascades
//!
//! Coverage:
//! - self-follow and duplicate follow rejected; unfollow of an absent edge
//!   rejected
//! - feed contains only followees' posts, newest first, id tie-break
//! - following nobody yields an empty feed
//! - deleting a post cascades its comments and likes
//! - notification listing is newest first and recipient-scoped

mod common;

use std::sync::Arc;

use chrono::{Duration, Utc};
use common::{create_post, create_post_at, create_user, like_count, setup_test_db};
use engagement_service::domain::{Follow, User};
use engagement_service::error::AppError;
use engagement_service::services::{
    CommentService, EngagementService, FeedService, FollowService, NotificationService,
    PgNotificationSink, PostService,
};
use uuid::Uuid;

#[tokio::test]
async fn follow_policy_rejects_self_duplicate_and_unknown() {
    let Some(pool) = setup_test_db().await else { return };
    let service = FollowService::new(pool.clone());

    let alice = create_user(&pool, "alice").await;
    let bob = create_user(&pool, "bob").await;

    let err = service.follow(alice, alice).await.expect_err("self-follow");
    assert!(matches!(err, AppError::Validation(_)));

    let err = service
        .follow(alice, Uuid::new_v4())
        .await
        .expect_err("unknown target");
    assert!(matches!(err, AppError::NotFound(_)));

    service.follow(alice, bob).await.expect("first follow");
    let err = service.follow(alice, bob).await.expect_err("duplicate follow");
    assert!(matches!(err, AppError::Conflict(_)));

    assert_eq!(service.following_of(alice).await.unwrap(), vec![bob]);

    let edge = sqlx::query_as::<_, Follow>(
        "SELECT id, follower_id, followee_id, created_at FROM follows WHERE follower_id = $1",
    )
    .bind(alice)
    .fetch_one(&pool)
    .await
    .expect("stored edge");
    assert_eq!(edge.followee_id, bob);

    let follower = sqlx::query_as::<_, User>(
        "SELECT id, username, email, created_at FROM users WHERE id = $1",
    )
    .bind(alice)
    .fetch_one(&pool)
    .await
    .expect("stored user");
    assert_eq!(follower.username, "alice");
}

#[tokio::test]
async fn unfollow_removes_edge_and_absent_edge_conflicts() {
    let Some(pool) = setup_test_db().await else { return };
    let service = FollowService::new(pool.clone());

    let alice = create_user(&pool, "alice").await;
    let bob = create_user(&pool, "bob").await;

    service.follow(alice, bob).await.expect("follow");
    service.unfollow(alice, bob).await.expect("unfollow");
    assert!(service.following_of(alice).await.unwrap().is_empty());

    let err = service.unfollow(alice, bob).await.expect_err("already removed");
    assert!(matches!(err, AppError::Conflict(_)));
}

#[tokio::test]
async fn feed_is_follow_scoped_and_newest_first() {
    let Some(pool) = setup_test_db().await else { return };
    let follows = FollowService::new(pool.clone());
    let feed = FeedService::new(pool.clone(), follows.clone());

    let alice = create_user(&pool, "alice").await;
    let bob = create_user(&pool, "bob").await;
    let carol = create_user(&pool, "carol").await;

    let base = Utc::now();
    let p1 = create_post_at(&pool, bob, "first", base).await;
    let p2 = create_post_at(&pool, bob, "second", base + Duration::seconds(1)).await;
    let _stranger = create_post_at(&pool, carol, "unrelated", base + Duration::seconds(2)).await;

    // Following nobody yields an empty feed.
    assert!(feed.feed(alice, 50, 0).await.unwrap().is_empty());

    follows.follow(alice, bob).await.expect("follow");

    let posts = feed.feed(alice, 50, 0).await.unwrap();
    let ids: Vec<Uuid> = posts.iter().map(|p| p.id).collect();
    assert_eq!(ids, vec![p2, p1]);

    // The actor's own posts are not part of their feed.
    create_post(&pool, alice, "mine").await;
    let posts = feed.feed(alice, 50, 0).await.unwrap();
    assert_eq!(posts.len(), 2);
}

#[tokio::test]
async fn feed_breaks_timestamp_ties_by_id_descending() {
    let Some(pool) = setup_test_db().await else { return };
    let follows = FollowService::new(pool.clone());
    let feed = FeedService::new(pool.clone(), follows.clone());

    let alice = create_user(&pool, "alice").await;
    let bob = create_user(&pool, "bob").await;
    follows.follow(alice, bob).await.expect("follow");

    let moment = Utc::now();
    let a = create_post_at(&pool, bob, "tie-a", moment).await;
    let b = create_post_at(&pool, bob, "tie-b", moment).await;

    let mut expected = vec![a, b];
    expected.sort();
    expected.reverse();

    let ids: Vec<Uuid> = feed
        .feed(alice, 50, 0)
        .await
        .unwrap()
        .iter()
        .map(|p| p.id)
        .collect();
    assert_eq!(ids, expected);
}

#[tokio::test]
async fn deleting_a_post_cascades_comments_and_likes() {
    let Some(pool) = setup_test_db().await else { return };
    let posts = PostService::new(pool.clone());
    let comments = CommentService::new(pool.clone());
    let engagement = EngagementService::new(pool.clone(), Arc::new(PgNotificationSink));

    let author = create_user(&pool, "author").await;
    let fan = create_user(&pool, "fan").await;

    let post = posts
        .create_post(author, "cascade me", "body")
        .await
        .expect("create post");

    comments
        .create_comment(fan, post.id, "nice post")
        .await
        .expect("comment");
    engagement.like(fan, post.id).await.expect("like");

    // Only the owner may delete.
    let err = posts.delete_post(fan, post.id).await.expect_err("not the owner");
    assert!(matches!(err, AppError::Forbidden(_)));

    posts.delete_post(author, post.id).await.expect("owner delete");

    assert!(posts.get_post(post.id).await.unwrap().is_none());
    let comment_count: i64 =
        sqlx::query_scalar("SELECT COUNT(*) FROM comments WHERE post_id = $1")
            .bind(post.id)
            .fetch_one(&pool)
            .await
            .unwrap();
    assert_eq!(comment_count, 0);
    assert_eq!(like_count(&pool, post.id).await, 0);
}

#[tokio::test]
async fn notifications_list_newest_first_for_their_recipient() {
    let Some(pool) = setup_test_db().await else { return };
    let engagement = EngagementService::new(pool.clone(), Arc::new(PgNotificationSink));
    let notifications = NotificationService::new(pool.clone());

    let author = create_user(&pool, "author").await;
    let fan = create_user(&pool, "fan").await;
    let other = create_user(&pool, "other").await;

    let first = create_post(&pool, author, "one").await;
    let second = create_post(&pool, author, "two").await;

    engagement.like(fan, first).await.expect("like one");
    engagement.like(other, second).await.expect("like two");

    let list = notifications.notifications_of(author, 50, 0).await.unwrap();
    assert_eq!(list.len(), 2);
    assert!(list[0].created_at >= list[1].created_at);

    // Other users see none of them.
    assert!(notifications.notifications_of(fan, 50, 0).await.unwrap().is_empty());
}
