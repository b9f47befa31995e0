mod user_repository;
mod follow_repository;
mod post_repository;
mod video_repository;

pub use user_repository::UserRepository;
pub use follow_repository::FollowRepository;
pub use post_repository::PostRepository;
pub use video_repository::VideoRepository;
